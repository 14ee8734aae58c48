use core::sync::atomic::Ordering;

use log::debug;

use crate::compare::compare;
use crate::error::{DealError, ShowdownError};
use crate::result::{Deal, RoundResult};

use super::{CARDS_PER_ROUND, Game, GameState};

impl Game {
    /// Deals five cards to the player, then five to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or the deck
    /// holds fewer than ten cards. The deck is untouched on error.
    pub fn deal(&self) -> Result<Deal, DealError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }

        let mut deck = self.deck.lock();
        if deck.len() < CARDS_PER_ROUND {
            return Err(DealError::NotEnoughCards);
        }

        let player = deck.draw_hand().ok_or(DealError::NotEnoughCards)?;
        let opponent = deck.draw_hand().ok_or(DealError::NotEnoughCards)?;
        drop(deck);

        self.player_hand.replace(Some(player));
        self.opponent_hand.replace(Some(opponent));
        *state = GameState::Dealt;

        debug!("dealt player [{player}] opponent [{opponent}]");

        Ok(Deal { player, opponent })
    }

    /// Compares the dealt hands and ends the round.
    ///
    /// # Errors
    ///
    /// Returns an error if no hands are dealt.
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        let mut state = self.state.lock();
        if *state != GameState::Dealt {
            return Err(ShowdownError::InvalidState);
        }

        let player = self.player_hand().ok_or(ShowdownError::InvalidState)?;
        let opponent = self.opponent_hand().ok_or(ShowdownError::InvalidState)?;
        let comparison = compare(&player, &opponent);

        *state = GameState::RoundOver;
        self.rounds_played.fetch_add(1, Ordering::SeqCst);

        debug!("round over: {}", comparison.message);

        Ok(RoundResult {
            player,
            opponent,
            comparison,
        })
    }
}
