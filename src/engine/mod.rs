//! The reducer.
//!
//! - `setup`/`GameBuilder`: the initial state
//! - `moves`: one handler per move, each a no-op on a failed precondition
//! - `turn`: the per-turn reset the host triggers
//! - `SwirledOut`: dispatch plus turn order and the end predicate
//!
//! Handlers never reach for a clock or an ambient RNG. Both arrive in a
//! `MoveCtx`.

pub mod game;
pub mod moves;
mod resolve;
pub mod setup;
pub mod turn;

use crate::core::RandomSource;

pub use game::SwirledOut;
pub use moves::{FORWARD_REWARD_SPACES, LOSE_POINTS_PENALTY};
pub use setup::{setup, GameBuilder};

/// Per-move inputs supplied by the dispatcher.
pub struct MoveCtx<'a, R: RandomSource + ?Sized> {
    pub random: &'a mut R,
    /// Milliseconds since the Unix epoch, stamped on logged events.
    pub timestamp: u64,
}

impl<'a, R: RandomSource + ?Sized> MoveCtx<'a, R> {
    pub fn new(random: &'a mut R, timestamp: u64) -> Self {
        Self { random, timestamp }
    }
}
