//! A five-card poker hand evaluator and game engine with optional `no_std` support.
//!
//! The crate classifies five-card hands into one of ten tiers, ranks their
//! cards for tie-breaking, and compares two hands head to head. A [`Game`]
//! type deals single rounds between a player and a computer opponent from
//! a seeded, shuffled deck.
//!
//! # Example
//!
//! ```
//! use fivecard::{Hand, Tier, Verdict, compare};
//!
//! let player: Hand = "Q♣ Q♠ A♦ 3♥ 10♠".parse().unwrap();
//! let opponent: Hand = "K♣ K♠ 2♦ 3♥ 10♠".parse().unwrap();
//!
//! assert_eq!(player.tier(), Tier::OnePair);
//! let comparison = compare(&player, &opponent);
//! assert_eq!(comparison.verdict, Verdict::Lose);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod compare;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use compare::compare;
pub use deck::Deck;
pub use error::{CardError, DealError, HandError, ReshuffleError, ShowdownError};
pub use game::{CARDS_PER_ROUND, Game, GameState};
pub use hand::{HAND_SIZE, Hand, Tier, classify, rank_cards};
pub use options::GameOptions;
pub use result::{Comparison, Deal, RoundResult, TopCards, Verdict};
