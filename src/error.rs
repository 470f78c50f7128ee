//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck for the opening deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur while the dealer resolves the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for dealer resolution.
    #[error("invalid game state for dealer resolution")]
    InvalidState,
    /// The dealer's hand was already revealed.
    #[error("dealer hand already revealed")]
    AlreadyRevealed,
    /// The dealer tried to draw with the hole card still hidden.
    #[error("dealer cannot draw before revealing")]
    HoleHidden,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}
