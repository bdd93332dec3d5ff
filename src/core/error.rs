//! Error types.
//!
//! Two families:
//!
//! - `EngineError`: genuine failures at the edges (setup validation,
//!   config parsing, snapshot encoding). Returned as `Result`.
//! - `MoveRejection`: why a move was ignored. Moves never fail; a
//!   rejected move leaves the state untouched and reports the reason
//!   through `MoveOutcome::Ignored`.

use thiserror::Error;

/// Failures while building, loading or encoding a game.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("player count must be between {min} and {max}, got {got}")]
    InvalidPlayerCount { got: usize, min: usize, max: usize },

    #[error("board size must be between {min} and {max}, got {got}")]
    InvalidBoardSize { got: usize, min: usize, max: usize },

    #[error("default timer must be between {min} and {max} seconds, got {got}")]
    InvalidTimer { got: u32, min: u32, max: u32 },

    #[error("expected {expected} player names, got {got}")]
    PlayerNameCount { expected: usize, got: usize },

    #[error("player name at seat {seat} is blank")]
    BlankPlayerName { seat: usize },

    #[error("action deck is empty")]
    EmptyActionDeck,

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Reason a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("game is over")]
    GameOver,

    #[error("game is paused")]
    Paused,

    #[error("game has already started")]
    AlreadyStarted,

    #[error("move not allowed in the current phase")]
    WrongPhase,

    #[error("dice already rolled this turn")]
    AlreadyRolled,

    #[error("no current player")]
    NoCurrentPlayer,

    #[error("no action card is pending")]
    NoPendingAction,

    #[error("skipping is disabled by the rules")]
    SkipNotAllowed,

    #[error("timers are disabled by the rules")]
    TimerDisabled,

    #[error("game is not paused")]
    NotPaused,

    #[error("action deck is empty")]
    EmptyDeck,

    #[error("no board tile with that id")]
    UnknownTile,
}

/// Result of dispatching a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move changed the state.
    Applied,
    /// The move was a no-op.
    Ignored(MoveRejection),
}

impl MoveOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }

    /// The rejection reason, if the move was ignored.
    #[must_use]
    pub fn rejection(self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Applied => None,
            MoveOutcome::Ignored(reason) => Some(reason),
        }
    }
}

impl From<Result<(), MoveRejection>> for MoveOutcome {
    fn from(result: Result<(), MoveRejection>) -> Self {
        match result {
            Ok(()) => MoveOutcome::Applied,
            Err(reason) => MoveOutcome::Ignored(reason),
        }
    }
}
