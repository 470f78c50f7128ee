//! Game configuration options.

/// What the round does when the deck runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ExhaustionPolicy {
    /// Fail the deal with a "no cards" error.
    #[default]
    Error,
    /// Refill the deck from every card not in a hand, shuffle, and keep dealing.
    Reshuffle,
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use hitstand::{ExhaustionPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_auto_resolve(false)
///     .with_exhaustion(ExhaustionPolicy::Reshuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether a player hit reaching 21 or more resolves the round at once.
    pub auto_resolve: bool,
    /// Behavior when the deck is exhausted.
    pub exhaustion: ExhaustionPolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            auto_resolve: true,
            exhaustion: ExhaustionPolicy::Error,
        }
    }
}

impl GameOptions {
    /// Sets whether the round resolves itself once the player reaches 21.
    ///
    /// With this off, the caller must invoke
    /// [`Game::hit_dealer`](crate::Game::hit_dealer) after a bust.
    ///
    /// # Example
    ///
    /// ```
    /// use hitstand::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_resolve(false);
    /// assert_eq!(options.auto_resolve, false);
    /// ```
    #[must_use]
    pub const fn with_auto_resolve(mut self, auto_resolve: bool) -> Self {
        self.auto_resolve = auto_resolve;
        self
    }

    /// Sets the deck exhaustion policy.
    ///
    /// # Example
    ///
    /// ```
    /// use hitstand::{ExhaustionPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Reshuffle);
    /// assert_eq!(options.exhaustion, ExhaustionPolicy::Reshuffle);
    /// ```
    #[must_use]
    pub const fn with_exhaustion(mut self, exhaustion: ExhaustionPolicy) -> Self {
        self.exhaustion = exhaustion;
        self
    }
}
