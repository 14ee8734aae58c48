//! Card types and their comparison values.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Rank symbols in ascending order, ace high.
pub const RANK_SEQUENCE: &str = "23456789TJQKA";

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks from two to ace.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Looks up a rank by its symbol (`2`..`9`, `T`, `J`, `Q`, `K`, `A`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for any other character.
    pub const fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol {
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            '8' => Ok(Self::Eight),
            '9' => Ok(Self::Nine),
            'T' => Ok(Self::Ten),
            'J' => Ok(Self::Jack),
            'Q' => Ok(Self::Queen),
            'K' => Ok(Self::King),
            'A' => Ok(Self::Ace),
            _ => Err(CardError::InvalidRank(symbol)),
        }
    }

    /// Returns the single-character symbol of the rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Returns the numeric value of the rank.
    ///
    /// Two through king map to 2..=13. The ace is 14, or 1 when `low_ace`
    /// is set (only used for the A-2-3-4-5 straight).
    #[must_use]
    pub const fn value(self, low_ace: bool) -> u8 {
        match self {
            Self::Ace if low_ace => 1,
            Self::Ace => 14,
            _ => self as u8 + 2,
        }
    }

    /// Position of the rank in [`RANK_SEQUENCE`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Card suit.
///
/// Suits carry a fixed order used only to break ties: spades beat hearts,
/// hearts beat clubs, clubs beat diamonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Hearts, Self::Diamonds];

    /// Looks up a suit by its symbol (`♠`, `♥`, `♣`, `♦`).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for any other character.
    pub const fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol {
            '♠' => Ok(Self::Spades),
            '♥' => Ok(Self::Hearts),
            '♣' => Ok(Self::Clubs),
            '♦' => Ok(Self::Diamonds),
            _ => Err(CardError::InvalidSuit(symbol)),
        }
    }

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
        }
    }

    /// Returns the tie-break value of the suit (spades 4 down to diamonds 1).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Spades => 4,
            Self::Hearts => 3,
            Self::Clubs => 2,
            Self::Diamonds => 1,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank == Rank::Ten {
            write!(f, "10{}", self.suit.symbol())
        } else {
            write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card such as `A♠`, `T♥` or `10♥`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = s.strip_prefix("10").unwrap_or(s);
        let mut chars = rest.chars();

        let rank = if rest.len() == s.len() {
            Rank::from_symbol(chars.next().ok_or(CardError::Malformed)?)?
        } else {
            Rank::Ten
        };
        let suit = Suit::from_symbol(chars.next().ok_or(CardError::Malformed)?)?;

        if chars.next().is_some() {
            return Err(CardError::Malformed);
        }

        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
