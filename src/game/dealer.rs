use crate::error::ShowdownError;
use crate::outcome::Outcome;

use super::{Game, GameState, draw_card};

impl Game {
    /// Player passes: the dealer reveals, plays out, and the round resolves.
    ///
    /// If the player is already bust the dealer reveals but does not draw.
    /// Otherwise the dealer draws until reaching 17 or more.
    ///
    /// A call that failed with [`ShowdownError::NoCards`] leaves the game in
    /// [`GameState::DealerTurn`]; calling again resumes the dealer's draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player or dealer turn state,
    /// or the deck runs out while the dealer must draw.
    pub fn hit_dealer(&mut self) -> Result<Outcome, ShowdownError> {
        match self.state {
            GameState::PlayerTurn => self.state = GameState::DealerTurn,
            GameState::DealerTurn => {}
            GameState::Dealing | GameState::Resolved => return Err(ShowdownError::InvalidState),
        }

        if self.dealer.is_hidden() {
            self.dealer.reveal()?;
        }

        if !self.player.is_bust() {
            let policy = self.options.exhaustion;
            let mut in_play = self.cards_in_play();
            let deck = &mut self.deck;
            let drawn = self.dealer.play_with(|| {
                let card = draw_card(deck, policy, &in_play)?;
                in_play.push(card);
                Some(card)
            })?;
            if !drawn.is_empty() {
                log::debug!("dealer drew {} card(s)", drawn.len());
            }
        }

        let outcome = Outcome::resolve(&self.player, &self.dealer);
        self.outcome = Some(outcome);
        self.state = GameState::Resolved;
        log::info!(
            "round resolved: {outcome} (player {}, dealer {})",
            self.player.points(),
            self.dealer.points()
        );

        Ok(outcome)
    }
}
