//! Turn hooks.

use tracing::trace;

use crate::core::{GameState, Phase};
use crate::rules::TurnContext;

/// Start the turn at `ctx.play_order_pos`.
///
/// Seats the player, clears the per-turn fields and forces `playing`.
/// A finished game is left alone.
pub fn on_begin(state: &mut GameState, ctx: &TurnContext) {
    if state.is_finished() {
        return;
    }
    state.current_player = ctx.play_order_pos;
    state.clear_pending();
    state.phase = Phase::Playing;
    trace!(seat = ctx.play_order_pos, "turn begins");
}
