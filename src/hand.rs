//! Five-card hands, tier classification and kicker ranking.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use log::trace;

use crate::card::{Card, RANK_SEQUENCE, Rank, Suit};
use crate::error::HandError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Ranks of a royal flush.
const ROYAL: [Rank; HAND_SIZE] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Ranks of the five-high straight, the only place the ace counts low.
const WHEEL: [Rank; HAND_SIZE] = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

/// Hand tier, from high card (1) up to royal flush (10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// No other tier matches.
    HighCard = 1,
    /// Two cards of one rank.
    OnePair = 2,
    /// Two different pairs.
    TwoPair = 3,
    /// Three cards of one rank.
    ThreeOfAKind = 4,
    /// Five consecutive ranks.
    Straight = 5,
    /// Five cards of one suit.
    Flush = 6,
    /// Three of one rank and two of another.
    FullHouse = 7,
    /// Four cards of one rank.
    FourOfAKind = 8,
    /// A straight in one suit.
    StraightFlush = 9,
    /// Ten to ace in one suit.
    RoyalFlush = 10,
}

impl Tier {
    /// Returns the tier number (1..=10).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the display name of the tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High card",
            Self::OnePair => "One pair",
            Self::TwoPair => "Two pair",
            Self::ThreeOfAKind => "Three of a kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full house",
            Self::FourOfAKind => "Four of a kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }

    /// Returns whether equal hands of this tier are settled by suit before rank.
    ///
    /// This is a house rule for flushes and straight flushes.
    #[must_use]
    pub const fn breaks_ties_by_suit(self) -> bool {
        matches!(self, Self::Flush | Self::StraightFlush)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand of exactly five cards.
///
/// The hand is never reordered: ranking returns a new array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from five cards.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Creates a hand from a slice of cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::WrongSize`] if the slice does not hold exactly
    /// [`HAND_SIZE`] cards.
    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards = <[Card; HAND_SIZE]>::try_from(cards).map_err(|_| HandError::WrongSize {
            expected: HAND_SIZE,
            found: cards.len(),
        })?;
        Ok(Self::new(cards))
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Counts the cards of each rank, indexed by [`Rank::index`].
    #[must_use]
    pub fn rank_counts(&self) -> [u8; 13] {
        let mut counts = [0; 13];
        for card in &self.cards {
            counts[card.rank.index()] += 1;
        }
        counts
    }

    fn contains_ranks(&self, ranks: &[Rank]) -> bool {
        ranks
            .iter()
            .all(|rank| self.cards.iter().any(|card| card.rank == *rank))
    }

    /// Returns whether all cards share one suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    /// Returns whether the hand is exactly ace, two, three, four, five.
    #[must_use]
    pub fn is_low_straight(&self) -> bool {
        self.contains_ranks(&WHEEL)
    }

    /// Returns whether the hand holds five consecutive ranks.
    ///
    /// The ace is high (ten to ace) or low (ace to five). A hand with a
    /// repeated rank is never a straight.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        if self.rank_counts().iter().any(|&count| count > 1) {
            return false;
        }

        let mut symbols = self.cards.map(|card| card.rank);
        symbols.sort_unstable();
        let symbols = symbols.map(|rank| rank.symbol() as u8);

        symbols == *b"2345A"
            || RANK_SEQUENCE
                .as_bytes()
                .windows(HAND_SIZE)
                .any(|run| run == symbols)
    }

    /// Returns whether the hand is ten to ace in one suit.
    #[must_use]
    pub fn is_royal_flush(&self) -> bool {
        self.is_flush() && self.contains_ranks(&ROYAL)
    }

    /// Returns the highest tier this hand satisfies.
    #[must_use]
    pub fn tier(&self) -> Tier {
        classify(self)
    }

    /// Returns the cards ordered from most to least significant.
    #[must_use]
    pub fn ranked(&self) -> [Card; HAND_SIZE] {
        rank_cards(self)
    }

    /// Returns the most significant card of the hand.
    #[must_use]
    pub fn top_card(&self) -> Card {
        rank_cards(self)[0]
    }
}

/// Classifies a hand into its highest tier.
///
/// Tiers are tried from royal flush down, so a straight flush is never
/// reported as a plain flush or straight.
#[must_use]
pub fn classify(hand: &Hand) -> Tier {
    let counts = hand.rank_counts();
    let has_count = |n: u8| counts.contains(&n);
    let pairs = counts.iter().filter(|&&count| count == 2).count();
    let flush = hand.is_flush();
    let straight = hand.is_straight();

    let tier = if hand.is_royal_flush() {
        Tier::RoyalFlush
    } else if straight && flush {
        Tier::StraightFlush
    } else if has_count(4) {
        Tier::FourOfAKind
    } else if has_count(3) && has_count(2) {
        Tier::FullHouse
    } else if flush {
        Tier::Flush
    } else if straight {
        Tier::Straight
    } else if has_count(3) {
        Tier::ThreeOfAKind
    } else if pairs == 2 {
        Tier::TwoPair
    } else if pairs == 1 {
        Tier::OnePair
    } else {
        Tier::HighCard
    };

    trace!("classified {hand} as {tier}");
    tier
}

/// Orders the cards of a hand for tie-breaking, most significant first.
///
/// Cards are sorted by how often their rank occurs in the hand, then by
/// rank value, then by suit value, all descending. The ace counts low only
/// when the hand is the ace-to-five straight.
#[must_use]
pub fn rank_cards(hand: &Hand) -> [Card; HAND_SIZE] {
    let counts = hand.rank_counts();
    let low_ace = hand.is_low_straight();

    let mut ranked = hand.cards;
    ranked.sort_unstable_by(|a, b| {
        counts[b.rank.index()]
            .cmp(&counts[a.rank.index()])
            .then_with(|| b.rank.value(low_ace).cmp(&a.rank.value(low_ace)))
            .then_with(|| b.suit.value().cmp(&a.suit.value()))
    });
    ranked
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::from_slice(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_slice(&cards)
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::new(cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses five whitespace-separated cards, e.g. `A♠ K♠ Q♠ J♠ 10♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cards = [Card::new(Rank::Two, Suit::Spades); HAND_SIZE];
        let mut found = 0;

        for token in s.split_whitespace() {
            let card = token.parse::<Card>()?;
            if let Some(slot) = cards.get_mut(found) {
                *slot = card;
            }
            found += 1;
        }

        if found != HAND_SIZE {
            return Err(HandError::WrongSize {
                expected: HAND_SIZE,
                found,
            });
        }

        Ok(Self::new(cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
