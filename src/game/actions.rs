use crate::card::{Card, Face};
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Returns the new card, face-up, and the player's updated points. With
    /// [`auto_resolve`](crate::GameOptions::auto_resolve) on, reaching 21 or
    /// more plays out the dealer at once and the result is available from
    /// [`outcome`](Self::outcome).
    ///
    /// If the deck runs out during that automatic dealer turn, the hit still
    /// succeeds: the round stays in [`GameState::DealerTurn`] with no outcome,
    /// and [`hit_dealer`](Self::hit_dealer) resumes the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty. Either way the game is unchanged.
    pub fn hit_player(&mut self) -> Result<(Card, u8), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut card = self.draw().ok_or(ActionError::NoCards)?;
        card.face = Face::Up;
        self.player.add_card(card);

        let points = self.player.points();
        log::debug!("player draws {card}, now at {points}");

        if self.options.auto_resolve && points >= 21 {
            if let Err(err) = self.hit_dealer() {
                log::warn!("dealer turn stalled after player hit: {err}");
            }
        }

        Ok((card, points))
    }
}
