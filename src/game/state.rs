//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next deal.
    WaitingForDeal,
    /// Both hands are dealt and waiting for showdown.
    Dealt,
    /// Hands have been compared; clear the round to play again.
    RoundOver,
}
