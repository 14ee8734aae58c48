//! Game engine and state management.

use core::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::ReshuffleError;
use crate::hand::{HAND_SIZE, Hand};
use crate::options::GameOptions;
use crate::sync::Mutex;

mod round;
pub mod state;

pub use state::GameState;

/// Cards needed to deal one round.
pub const CARDS_PER_ROUND: usize = HAND_SIZE * 2;

/// A single-round poker game between a player and a computer opponent.
///
/// The game owns the deck and both hands. Each round deals five cards to
/// the player, then five to the opponent, and compares them at showdown.
pub struct Game {
    /// Cards left in the deck.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// The player's hand for the current round.
    player_hand: Mutex<Option<Hand>>,
    /// The opponent's hand for the current round.
    opponent_hand: Mutex<Option<Hand>>,
    /// Number of rounds that reached showdown.
    rounds_played: AtomicUsize,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng, options.shuffle_passes);

        Self {
            deck: Mutex::new(deck),
            options,
            state: Mutex::new(GameState::WaitingForDeal),
            player_hand: Mutex::new(None),
            opponent_hand: Mutex::new(None),
            rounds_played: AtomicUsize::new(0),
            rng: Mutex::new(rng),
        }
    }

    fn new_deck(&self) -> Deck {
        Deck::shuffled(&mut *self.rng.lock(), self.options.shuffle_passes)
    }

    /// Replaces the deck with a new shuffled one.
    ///
    /// # Errors
    ///
    /// Returns an error if hands are dealt and waiting for showdown.
    pub fn reshuffle(&self) -> Result<(), ReshuffleError> {
        if *self.state.lock() == GameState::Dealt {
            return Err(ReshuffleError::InvalidState);
        }

        let deck = self.new_deck();
        self.deck.replace(deck);
        info!("deck reshuffled");

        Ok(())
    }

    /// Returns whether the deck is too short to deal another round.
    pub fn needs_reshuffle(&self) -> bool {
        self.cards_remaining() < CARDS_PER_ROUND
    }

    /// Checks the deck and reshuffles if needed.
    ///
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if hands are dealt and waiting for showdown.
    pub fn check_and_reshuffle(&self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the number of rounds that reached showdown.
    pub fn rounds_played(&self) -> usize {
        self.rounds_played.load(Ordering::SeqCst)
    }

    /// Returns the player's hand for the current round, if dealt.
    pub fn player_hand(&self) -> Option<Hand> {
        *self.player_hand.lock()
    }

    /// Returns the opponent's hand for the current round, if dealt.
    pub fn opponent_hand(&self) -> Option<Hand> {
        *self.opponent_hand.lock()
    }

    /// Clears both hands and returns the game to `WaitingForDeal`.
    ///
    /// With [`GameOptions::fresh_deck_each_round`] set, the deck is also
    /// replaced by a new shuffled one.
    pub fn clear_round(&self) {
        self.player_hand.replace(None);
        self.opponent_hand.replace(None);

        if self.options.fresh_deck_each_round {
            let deck = self.new_deck();
            self.deck.replace(deck);
        }

        *self.state.lock() = GameState::WaitingForDeal;
    }
}
