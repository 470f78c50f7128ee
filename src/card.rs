//! Card types.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn letter(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

/// Which side of a card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    /// Back of the card is showing.
    #[default]
    Down,
    /// Rank and suit are showing.
    Up,
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The side currently showing.
    pub face: Face,
}

impl Card {
    /// Creates a new face-down card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face: Face::Down,
        }
    }

    /// Flips the card over.
    pub const fn turn(&mut self) {
        self.face = match self.face {
            Face::Down => Face::Up,
            Face::Up => Face::Down,
        };
    }

    /// Returns whether the rank and suit are showing.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        matches!(self.face, Face::Up)
    }

    /// Returns whether two cards are the same card, ignoring which side shows.
    #[must_use]
    pub const fn same_card(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit as u8 == other.suit as u8
    }

    /// Returns the image identifier a renderer should show for this card.
    ///
    /// Face-down cards all map to the card back.
    ///
    /// ```
    /// use hitstand::{Card, Suit};
    ///
    /// let mut card = Card::new(Suit::Spades, 1);
    /// assert_eq!(card.filename(), "cards/back.gif");
    /// card.turn();
    /// assert_eq!(card.filename(), "cards/1s.gif");
    /// ```
    #[must_use]
    pub fn filename(&self) -> alloc::string::String {
        match self.face {
            Face::Down => alloc::string::String::from("cards/back.gif"),
            Face::Up => alloc::format!("cards/{}{}.gif", self.rank, self.suit.letter()),
        }
    }
}

/// Face-down cards render as `a face-down card` and never reveal identity.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face == Face::Down {
            return f.write_str("a face-down card");
        }
        match self.rank {
            1 => f.write_str("Ace")?,
            11 => f.write_str("Jack")?,
            12 => f.write_str("Queen")?,
            13 => f.write_str("King")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, " of {}", self.suit.name())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
