//! Comparison and round result types.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::hand::{Hand, Tier};

/// Outcome of a comparison, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Player's hand is stronger.
    Win,
    /// Opponent's hand is stronger.
    Lose,
    /// Equal tiers and identical top cards; only reachable when both hands
    /// hold the same card, i.e. they were not dealt from a single deck.
    NoDecision,
}

impl Verdict {
    /// Returns the verdict seen from the opponent's side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::NoDecision => Self::NoDecision,
        }
    }
}

/// The top cards that decided an equal-tier comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopCards {
    /// Player's top card.
    pub player: Card,
    /// Opponent's top card.
    pub opponent: Card,
}

/// Result of comparing the player's hand with the opponent's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Who won.
    pub verdict: Verdict,
    /// Tier of the player's hand.
    pub player_tier: Tier,
    /// Tier of the opponent's hand.
    pub opponent_tier: Tier,
    /// Top cards, present only when both hands share a tier.
    pub top_cards: Option<TopCards>,
    /// Human-readable description of the result.
    pub message: String,
}

impl Comparison {
    /// Returns whether the player won.
    #[must_use]
    pub fn winner_is_player(&self) -> bool {
        self.verdict == Verdict::Win
    }
}

/// Hands drawn for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    /// The player's hand.
    pub player: Hand,
    /// The opponent's hand.
    pub opponent: Hand,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's hand.
    pub player: Hand,
    /// The opponent's hand.
    pub opponent: Hand,
    /// How the hands compared.
    pub comparison: Comparison,
}
