//! A single 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::hand::{HAND_SIZE, Hand};

/// A deck of cards, drawn from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck, suit by suit from two to ace.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck and shuffles it `passes` times.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, passes: u8) -> Self {
        let mut deck = Self::new();
        for _ in 0..passes {
            deck.shuffle(rng);
        }
        deck
    }

    /// Creates a deck holding the given cards; the first card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards (Fisher-Yates).
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draws `count` cards from the top of the deck.
    ///
    /// Returns `None` and leaves the deck untouched if fewer than `count`
    /// cards remain.
    pub fn draw(&mut self, count: usize) -> Option<Vec<Card>> {
        if self.cards.len() < count {
            return None;
        }
        Some(self.cards.drain(..count).collect())
    }

    /// Draws a five-card hand from the top of the deck.
    pub fn draw_hand(&mut self) -> Option<Hand> {
        let cards = self.draw(HAND_SIZE)?;
        Hand::from_slice(&cards).ok()
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
