//! Tile effects and card resolution.
//!
//! Shared by the move handlers: putting a card in front of the current
//! player, settling the pawn after movement, and ending the game.

use tracing::{info, trace};

use super::MoveCtx;
use crate::board::{TileType, REWARD_TILE_BONUS};
use crate::cards::{find_by_id, ActionCard};
use crate::core::{GameState, Phase, RandomSource};
use crate::events::{EventData, EventKind, GameEvent};

/// Make `card` the pending action for the current player.
///
/// Enters `Action`, arms the timer and logs an `action` event.
pub(crate) fn present_card<R: RandomSource + ?Sized>(
    state: &mut GameState,
    card: ActionCard,
    from_tile: bool,
    ctx: &MoveCtx<'_, R>,
) {
    let Some(player) = state.current() else {
        return;
    };

    let event = GameEvent::new(
        EventKind::Action,
        player.id,
        player.name.clone(),
        format!("{} drew a {} card: {}", player.name, card.intensity, card.text),
    )
    .with_data(EventData::Action {
        card_id: card.id.clone(),
        category: card.category,
        intensity: card.intensity,
        from_tile,
    });

    state.timer_remaining = state.game_rules.timer_for(&card);
    state.current_action = Some(card);
    state.phase = Phase::Action;
    state.log(event, ctx.timestamp);
}

/// End the game with the current player as the finisher.
pub(crate) fn finish(state: &mut GameState) {
    let Some(player) = state.current() else {
        return;
    };
    let winner = player.id;

    state.winner = Some(winner);
    state.phase = Phase::Finished;
    state.current_action = None;
    state.timer_remaining = None;

    info!(winner = %winner, "game finished");
}

/// Finish the game if the current pawn sits on the final tile.
///
/// Returns true if the game ended.
pub(crate) fn settle_on_finish(state: &mut GameState) -> bool {
    let at_end = state
        .current()
        .is_some_and(|p| p.position == state.last_position());
    if at_end {
        finish(state);
    }
    at_end
}

/// Apply the effect of the tile the current pawn landed on.
///
/// - reward: two more spaces, without a separate event
/// - action with a linked card: that exact card becomes pending
/// - anything else: nothing here (punishment draws are caller-driven)
pub(crate) fn land_on_tile<R: RandomSource + ?Sized>(state: &mut GameState, ctx: &MoveCtx<'_, R>) {
    let Some(position) = state.current().map(|p| p.position) else {
        return;
    };
    let Some(tile) = state.tile_at(position).cloned() else {
        return;
    };

    match tile.tile_type {
        TileType::Reward => {
            let size = state.board_size;
            if let Some(player) = state.current_mut() {
                let to = player.step(REWARD_TILE_BONUS, size);
                trace!(from = position, to, "reward tile bonus");
            }
            settle_on_finish(state);
        }
        TileType::Action => {
            let Some(card_id) = tile.action_card_id.as_deref() else {
                return;
            };
            match find_by_id(&state.action_deck, card_id).cloned() {
                Some(card) => present_card(state, card, true, ctx),
                None => trace!(card_id, "tile links a card missing from the deck"),
            }
        }
        _ => {}
    }
}
