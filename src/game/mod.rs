//! Round controller and state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{DealerHand, Hand};
use crate::options::{ExhaustionPolicy, GameOptions};
use crate::outcome::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// Deals the next card, refilling the deck first if it is empty and the
/// policy allows it. `in_play` lists every card currently held.
fn draw_card(deck: &mut Deck, policy: ExhaustionPolicy, in_play: &[Card]) -> Option<Card> {
    if deck.is_empty() && policy == ExhaustionPolicy::Reshuffle {
        deck.refill_excluding(in_play);
    }
    deck.deal()
}

/// A single blackjack round between one player and the dealer.
///
/// The game owns the deck and both hands. Each new round replaces the hands
/// entirely; nothing but the deck's random stream carries over.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cards left to deal.
    deck: Deck,
    /// Current phase.
    state: GameState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Set once the round is resolved.
    outcome: Option<Outcome>,
}

impl Game {
    /// Shuffles a fresh deck from `seed` and deals the opening hands.
    ///
    /// # Errors
    ///
    /// Never fails with a full deck; the error is shared with
    /// [`with_deck`](Self::with_deck).
    ///
    /// # Example
    ///
    /// ```
    /// use hitstand::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// assert_eq!(game.cards_remaining(), 48);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, DealError> {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Deals the opening hands from the given deck, as is.
    ///
    /// The player receives the first two cards face-up. The dealer receives
    /// the next two, the first face-down.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than four cards can be
    /// dealt under the configured exhaustion policy.
    pub fn with_deck(options: GameOptions, mut deck: Deck) -> Result<Self, DealError> {
        let (player, dealer) = Self::deal_opening(&mut deck, options.exhaustion)?;
        let game = Self {
            options,
            deck,
            state: GameState::PlayerTurn,
            player,
            dealer,
            outcome: None,
        };
        log::debug!(
            "new round: player {} points, {} cards left",
            game.player.points(),
            game.deck.len()
        );
        Ok(game)
    }

    fn deal_opening(
        deck: &mut Deck,
        policy: ExhaustionPolicy,
    ) -> Result<(Hand, DealerHand), DealError> {
        let mut dealt: Vec<Card> = Vec::with_capacity(4);
        for _ in 0..4 {
            let card = draw_card(deck, policy, &dealt).ok_or(DealError::NotEnoughCards)?;
            dealt.push(card);
        }

        let mut player = Hand::new();
        player.add_card(dealt[0]);
        player.add_card(dealt[1]);
        let dealer = DealerHand::new(dealt[2], dealt[3]);
        Ok((player, dealer))
    }

    /// Discards the current round and deals a new one from a reshuffled,
    /// full deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the opening deal fails. The
    /// game is then left in [`GameState::Dealing`] and refuses actions.
    pub fn new_round(&mut self) -> Result<(), DealError> {
        self.state = GameState::Dealing;
        self.outcome = None;
        self.deck.shuffle();

        let (player, dealer) = Self::deal_opening(&mut self.deck, self.options.exhaustion)?;
        self.player = player;
        self.dealer = dealer;
        self.state = GameState::PlayerTurn;
        log::debug!(
            "new round: player {} points, {} cards left",
            self.player.points(),
            self.deck.len()
        );
        Ok(())
    }

    /// Returns every card currently held by either side.
    fn cards_in_play(&self) -> Vec<Card> {
        self.player
            .cards()
            .iter()
            .chain(self.dealer.cards())
            .copied()
            .collect()
    }

    /// Draws a card from the deck, honoring the exhaustion policy.
    fn draw(&mut self) -> Option<Card> {
        let in_play = if self.deck.is_empty() {
            self.cards_in_play()
        } else {
            Vec::new()
        };
        draw_card(&mut self.deck, self.options.exhaustion, &in_play)
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's cards in deal order.
    #[must_use]
    pub fn player_cards(&self) -> &[Card] {
        self.player.cards()
    }

    /// Returns the dealer's cards in deal order. The first card stays
    /// face-down until the dealer reveals.
    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        self.dealer.cards()
    }

    /// Returns the player's current point total.
    #[must_use]
    pub fn player_points(&self) -> u8 {
        self.player.points()
    }

    /// Returns the dealer's point total, or `None` while the hole card is
    /// hidden.
    #[must_use]
    pub fn dealer_points(&self) -> Option<u8> {
        (!self.dealer.is_hidden()).then(|| self.dealer.points())
    }
}
