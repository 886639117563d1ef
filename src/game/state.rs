//! Game state types.

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for [`Game::initialize`](super::Game::initialize).
    Setup,
    /// Seats are playing into the current trick.
    TrickInProgress,
    /// Every seat has played; waiting for [`Game::end_trick`](super::Game::end_trick).
    TrickComplete,
    /// Deck and hands are exhausted. Terminal.
    GameEnded,
}

impl GameState {
    /// Returns whether cards are being played or a trick awaits resolution.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::TrickInProgress | Self::TrickComplete)
    }
}
