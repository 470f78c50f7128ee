//! Game state types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Dealing the opening two cards each.
    Dealing,
    /// Waiting for the player to hit or pass.
    PlayerTurn,
    /// Dealer reveals and plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is fixed.
    Resolved,
}
