//! Error types for game operations.

use thiserror::Error;

use crate::result::TrickOutcome;

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The table only supports 2 or 4 seats.
    #[error("unsupported seat count {0}")]
    UnsupportedSeats(usize),
    /// Number of players does not match the configured seats.
    #[error("expected {expected} players, got {found}")]
    PlayerCountMismatch {
        /// Configured seats.
        expected: usize,
        /// Players requested.
        found: usize,
    },
    /// One control mode is needed per seat.
    #[error("expected {expected} control modes, got {found}")]
    ControlModeMismatch {
        /// Configured seats.
        expected: usize,
        /// Control modes supplied.
        found: usize,
    },
    /// Starter seat is not at the table.
    #[error("starter seat {0} is not at the table")]
    InvalidStarterSeat(usize),
    /// Hand size cannot be dealt from the pack.
    #[error("invalid hand size {0}")]
    InvalidHandSize(usize),
    /// Supplied deck is not the full 40-card pack.
    #[error("deck is not a complete pack")]
    IncompleteDeck,
}

/// A strategy answered with a hand index that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("strategy chose card {index} for seat {seat} holding {hand_len} cards")]
pub struct StrategyError {
    /// Seat the strategy played for.
    pub seat: usize,
    /// Index the strategy returned.
    pub index: usize,
    /// Cards in the seat's hand.
    pub hand_len: usize,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No game has been set up yet.
    #[error("game has not been initialized")]
    NotStarted,
    /// The game is over.
    #[error("game has ended")]
    GameEnded,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// Every seat has played; the trick must be ended first.
    #[error("trick is complete")]
    TrickComplete,
    /// A human seat must name the card it plays.
    #[error("no card given for a human seat")]
    MissingCard,
    /// The named card is not in the seat's hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// A computer seat's strategy misbehaved.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

/// Errors that can occur when ending a trick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrickError {
    /// No game has been set up yet.
    #[error("game has not been initialized")]
    NotStarted,
    /// The game is over.
    #[error("game has ended")]
    GameEnded,
    /// Some seats have not played yet.
    #[error("trick is not complete")]
    TrickIncomplete,
    /// The computer seat leading the next trick failed to play.
    #[error("{error}")]
    Strategy {
        /// What the strategy got wrong.
        #[source]
        error: StrategyError,
        /// The trick that was resolved before the lead failed.
        outcome: TrickOutcome,
    },
}
