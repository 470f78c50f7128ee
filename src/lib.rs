//! A two-party blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a single round between one
//! player and the dealer: the initial deal, player hits, the dealer's reveal
//! and draw, and the final [`Outcome`].
//!
//! # Example
//!
//! ```no_run
//! use hitstand::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let (card, points) = game.hit_player().unwrap();
//! println!("drew {card}, now at {points}");
//! if game.outcome().is_none() {
//!     let outcome = game.hit_dealer().unwrap();
//!     println!("{outcome}");
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::{DEALER_STANDS_ON, DealerHand, Hand};
pub use options::{ExhaustionPolicy, GameOptions};
pub use outcome::Outcome;
