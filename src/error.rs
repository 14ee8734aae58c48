//! Error types for card parsing and game operations.

use thiserror::Error;

/// Errors that can occur when reading a card from its symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank symbol is not one of `23456789TJQKA`.
    #[error("invalid rank symbol {0:?}")]
    InvalidRank(char),
    /// Suit symbol is not one of `♠♥♣♦`.
    #[error("invalid suit symbol {0:?}")]
    InvalidSuit(char),
    /// Input is empty or has trailing characters.
    #[error("malformed card")]
    Malformed,
}

/// Errors that can occur when building a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not hold the required number of cards.
    #[error("a hand needs exactly {expected} cards, found {found}")]
    WrongSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        found: usize,
    },
    /// One of the cards could not be parsed.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}
