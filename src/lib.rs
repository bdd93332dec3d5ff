//! # swirled-out
//!
//! Game engine for Swirled Out, a turn-based party board game: pawns
//! race along a tile path, landing on tiles and drawing truth, dare and
//! challenge cards that are completed for points or skipped for a
//! punishment.
//!
//! ## Design Principles
//!
//! 1. **Pure Reducer**: `(state, move, random source) -> state`. No I/O,
//!    no clock, no ambient randomness. The dispatcher supplies both the
//!    random source and the timestamp.
//!
//! 2. **Silent No-Ops**: A move whose preconditions fail leaves the state
//!    untouched. The reason is still reported as `MoveOutcome::Ignored`.
//!
//! 3. **Plain Data**: `GameState` serializes to camelCase JSON or a
//!    bincode snapshot and restores exactly.
//!
//! ## Architecture
//!
//! - **Pools, Not Piles**: Decks are sampled with replacement via a
//!   shuffle of candidate indices. Filters that match nothing fall back
//!   to the whole deck.
//!
//! - **Persistent Data Structures**: Decks and the activity log use
//!   `im-rs`, so cloning a state for replay or what-if is cheap.
//!
//! ## Modules
//!
//! - `core`: Players, state, moves, rules config, errors, RNG
//! - `cards`: Action cards, decks and selection
//! - `board`: Tile path and its generator
//! - `events`: Activity log
//! - `rules`: Turn order, end predicate, standings
//! - `engine`: Setup, move handlers and dispatch
//!
//! ```
//! use swirled_out::{GameRng, Move, MoveCtx, Phase, SwirledOut};
//!
//! let game = SwirledOut::new();
//! let mut state = game.setup(2).unwrap();
//! let mut rng = GameRng::new(7);
//! let mut ctx = MoveCtx::new(&mut rng, 0);
//!
//! game.apply(&mut state, &Move::StartGame, &mut ctx);
//! game.apply(&mut state, &Move::RollDice, &mut ctx);
//! assert_eq!(state.phase, Phase::Playing);
//! assert!(state.last_roll.is_some());
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod engine;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameRng, GameRngState, GameRules, GameState, Move, MoveOutcome, MoveRejection,
    Phase, Player, PlayerId, PunishmentKind, RandomSource, RulesPatch, ScriptedRandom,
    SetupConfig, WinCondition,
};

pub use crate::cards::{ActionCard, CardCategory, Deck, DrawFilter, Intensity};

pub use crate::board::{Board, BoardTile, TilePatch, TileType};

pub use crate::events::{ActivityLog, EventData, EventKind, GameEvent};

pub use crate::rules::{end_if, standings, GameResult, RoundRobin, Standing, TurnOrder};

pub use crate::engine::{setup, GameBuilder, MoveCtx, SwirledOut};
