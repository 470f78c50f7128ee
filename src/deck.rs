//! The 52-card deck the round deals from.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// A single standard deck with its own random number generator.
///
/// Cards are dealt from the end of the internal vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck. The same seed always gives the same order.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck that deals `draws` in the given order.
    ///
    /// ```
    /// use hitstand::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::stacked(&[Card::new(Suit::Clubs, 5), Card::new(Suit::Hearts, 9)]);
    /// assert_eq!(deck.deal().map(|c| c.rank), Some(5));
    /// assert_eq!(deck.deal().map(|c| c.rank), Some(9));
    /// assert!(deck.deal().is_none());
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    fn standard() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Gathers all 52 cards back and shuffles them.
    pub fn shuffle(&mut self) {
        self.cards = Self::standard();
        self.cards.shuffle(&mut self.rng);
    }

    /// Rebuilds the deck from every card not in `in_play` and shuffles it.
    pub fn refill_excluding(&mut self, in_play: &[Card]) {
        let mut cards = Self::standard();
        cards.retain(|card| !in_play.iter().any(|held| held.same_card(card)));
        cards.shuffle(&mut self.rng);
        log::debug!("deck refilled with {} cards", cards.len());
        self.cards = cards;
    }

    /// Removes and returns the next card, face-down.
    ///
    /// Returns `None` when the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
