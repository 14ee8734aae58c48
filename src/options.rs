//! Game configuration options.

/// Configuration options for a poker game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use fivecard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_shuffle_passes(3)
///     .with_fresh_deck_each_round(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// How many times a new deck is shuffled.
    pub shuffle_passes: u8,
    /// Whether every round starts from a new, shuffled deck.
    ///
    /// When disabled the same deck is drawn down across rounds and must be
    /// reshuffled once it runs low.
    pub fresh_deck_each_round: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle_passes: 2,
            fresh_deck_each_round: true,
        }
    }
}

impl GameOptions {
    /// Sets how many times a new deck is shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_passes(1);
    /// assert_eq!(options.shuffle_passes, 1);
    /// ```
    #[must_use]
    pub const fn with_shuffle_passes(mut self, passes: u8) -> Self {
        self.shuffle_passes = passes;
        self
    }

    /// Sets whether every round starts from a new deck.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::GameOptions;
    ///
    /// let options = GameOptions::default().with_fresh_deck_each_round(false);
    /// assert_eq!(options.fresh_deck_each_round, false);
    /// ```
    #[must_use]
    pub const fn with_fresh_deck_each_round(mut self, fresh: bool) -> Self {
        self.fresh_deck_each_round = fresh;
        self
    }
}
