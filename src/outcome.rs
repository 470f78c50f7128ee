//! Round outcomes.

use core::fmt;

use crate::hand::{DealerHand, Hand};

/// How a round ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21. The dealer does not draw.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer finished with more points.
    DealerWins,
    /// Player finished with more points.
    PlayerWins,
    /// Equal points, only the player holds a natural.
    PlayerBlackjack,
    /// Equal points, only the dealer holds a natural.
    DealerBlackjack,
    /// Equal points and equal natural status.
    Push,
}

impl Outcome {
    /// Decides the round from the final hands.
    ///
    /// Player bust is checked first, then dealer bust, then points. Equal
    /// points are broken by natural blackjack before falling back to a push.
    ///
    /// ```
    /// use hitstand::{Card, DealerHand, Hand, Outcome, Suit};
    ///
    /// let mut player = Hand::new();
    /// player.add_card(Card::new(Suit::Hearts, 10));
    /// player.add_card(Card::new(Suit::Hearts, 13));
    /// let dealer = DealerHand::new(Card::new(Suit::Clubs, 10), Card::new(Suit::Clubs, 9));
    /// assert_eq!(Outcome::resolve(&player, &dealer), Outcome::PlayerWins);
    /// ```
    #[must_use]
    pub fn resolve(player: &Hand, dealer: &DealerHand) -> Self {
        let player_points = player.points();
        if player_points > 21 {
            return Self::PlayerBust;
        }

        let dealer_points = dealer.points();
        if dealer_points > 21 {
            Self::DealerBust
        } else if dealer_points > player_points {
            Self::DealerWins
        } else if dealer_points < player_points {
            Self::PlayerWins
        } else {
            match (player.has_blackjack(), dealer.has_blackjack()) {
                (true, false) => Self::PlayerBlackjack,
                (false, true) => Self::DealerBlackjack,
                _ => Self::Push,
            }
        }
    }

    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(
            self,
            Self::DealerBust | Self::PlayerWins | Self::PlayerBlackjack
        )
    }

    /// Returns whether the round is a tie.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::Push)
    }

    /// The message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "You bust and lose!",
            Self::DealerBust => "Dealer busts, you win!",
            Self::DealerWins => "Dealer wins :(",
            Self::PlayerWins => "Congrats! You win!",
            Self::PlayerBlackjack => "Blackjack! You Win!",
            Self::DealerBlackjack => "Dealer Blackjack! You lose!",
            Self::Push => "There is a tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
