//! Core engine types: players, state, moves, RNG, configuration, errors.
//!
//! Everything here is plain data or a thin trait. The move handlers that
//! operate on it live in `engine`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, PunishmentKind};
pub use config::{
    GameRules, RulesPatch, SetupConfig, WinCondition, MAX_BOARD_SIZE, MAX_PLAYERS,
    MAX_TIMER_SECONDS, MIN_BOARD_SIZE, MIN_PLAYERS, MIN_TIMER_SECONDS,
};
pub use error::{EngineError, MoveOutcome, MoveRejection};
pub use player::{Player, PlayerId, FALLBACK_COLOR, PLAYER_COLORS};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRandom};
pub use state::{GameState, Phase};
