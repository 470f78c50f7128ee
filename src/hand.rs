//! Player and dealer hand representations.

use core::fmt;

use alloc::vec::Vec;

use crate::card::{Card, Face};
use crate::deck::Deck;
use crate::error::ShowdownError;

/// The dealer keeps drawing while below this total.
pub const DEALER_STANDS_ON: u8 = 17;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        value = value.saturating_add(u16::from(card_value(card.rank)));
    }

    // Each ace starts at 11 and drops to 1 only while the hand is over 21.
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// A participant's cards, in deal order.
///
/// Points are recomputed from the cards on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand, turning it face-up.
    pub fn add_card(&mut self, mut card: Card) {
        card.face = Face::Up;
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the point total of the hand.
    ///
    /// Face cards count 10. Aces count 11, and one at a time drop to 1 while
    /// the total is over 21.
    ///
    /// ```
    /// use hitstand::{Card, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, 1));
    /// hand.add_card(Card::new(Suit::Spades, 1));
    /// hand.add_card(Card::new(Suit::Clubs, 9));
    /// assert_eq!(hand.points(), 21);
    /// ```
    #[must_use]
    pub fn points(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: exactly two cards totalling 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.points() == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.points() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "\n  {} points", self.points())
    }
}

/// The dealer's hand.
///
/// Starts hidden, with the first card face-down, and is revealed exactly once
/// before the dealer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    show_one_card: bool,
}

impl DealerHand {
    /// Creates a hidden dealer hand from the two dealt cards.
    ///
    /// The first card is turned face-down, the second face-up.
    #[must_use]
    pub fn new(first: Card, second: Card) -> Self {
        let mut hand = Hand::new();
        hand.add_card(first);
        hand.add_card(second);
        hand.cards[0].face = Face::Down;
        Self {
            hand,
            show_one_card: true,
        }
    }

    /// Returns all cards in the hand. The first reports `Face::Down` until
    /// the hand is revealed.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns whether the hole card is still hidden.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.show_one_card
    }

    /// Turns the first card face-up and shows the whole hand.
    ///
    /// # Errors
    ///
    /// Returns [`ShowdownError::AlreadyRevealed`] on a second call.
    pub fn reveal(&mut self) -> Result<(), ShowdownError> {
        if !self.show_one_card {
            return Err(ShowdownError::AlreadyRevealed);
        }
        self.show_one_card = false;
        if let Some(first) = self.hand.cards.first_mut() {
            first.turn();
            log::debug!("dealer reveals {first}");
        }
        Ok(())
    }

    /// Draws from `deck` while the hand is under [`DEALER_STANDS_ON`].
    ///
    /// Returns the cards drawn, face-up.
    ///
    /// # Errors
    ///
    /// Returns [`ShowdownError::HoleHidden`] before [`reveal`](Self::reveal)
    /// and [`ShowdownError::NoCards`] if the deck runs out mid-draw.
    pub fn play(&mut self, deck: &mut Deck) -> Result<Vec<Card>, ShowdownError> {
        self.play_with(|| deck.deal())
    }

    /// Like [`play`](Self::play), but pulls cards from `draw`.
    ///
    /// # Errors
    ///
    /// Same as [`play`](Self::play).
    pub fn play_with<F>(&mut self, mut draw: F) -> Result<Vec<Card>, ShowdownError>
    where
        F: FnMut() -> Option<Card>,
    {
        if self.show_one_card {
            return Err(ShowdownError::HoleHidden);
        }

        let mut drawn = Vec::new();
        while self.hand.points() < DEALER_STANDS_ON {
            let mut card = draw().ok_or(ShowdownError::NoCards)?;
            card.face = Face::Up;
            self.hand.add_card(card);
            log::debug!("dealer draws {card}, now at {}", self.hand.points());
            drawn.push(card);
        }
        Ok(drawn)
    }

    /// Calculates the full point total, hidden card included.
    #[must_use]
    pub fn points(&self) -> u8 {
        self.hand.points()
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.hand.has_blackjack()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}

impl fmt::Display for DealerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.show_one_card {
            match self.hand.cards.first() {
                Some(first) => write!(f, "{first}"),
                None => Ok(()),
            }
        } else {
            write!(f, "{}", self.hand)
        }
    }
}
