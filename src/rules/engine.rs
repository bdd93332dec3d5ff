//! Host-facing contracts: turn order and game results.
//!
//! The host owns the turn loop. It asks `TurnOrder` who goes first and
//! who goes next, calls the game's `on_begin` at the start of each turn,
//! and polls `end_if` after every move.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
    /// Shared victory (tied tallies).
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Turn-order bookkeeping the host passes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnContext {
    /// Index into the play order of the turn that is ending (or beginning,
    /// for `on_begin`).
    pub play_order_pos: usize,
    pub num_players: usize,
}

/// Turn-order policy.
pub trait TurnOrder {
    /// Play-order position of the first turn.
    fn first(&self, ctx: &TurnContext) -> usize;

    /// Play-order position after `ctx.play_order_pos`.
    fn next(&self, ctx: &TurnContext) -> usize;
}

/// Seat order, wrapping. First turn is always seat 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundRobin;

impl TurnOrder for RoundRobin {
    fn first(&self, _ctx: &TurnContext) -> usize {
        0
    }

    fn next(&self, ctx: &TurnContext) -> usize {
        if ctx.num_players == 0 {
            return 0;
        }
        (ctx.play_order_pos + 1) % ctx.num_players
    }
}
