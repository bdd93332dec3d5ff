//! Move handlers.
//!
//! Each handler mutates `state` in place and returns `Err(reason)` when a
//! precondition fails. A rejected move leaves the state untouched: every
//! check runs before the first write.

use tracing::{info, trace};

use super::resolve::{finish, land_on_tile, present_card, settle_on_finish};
use super::MoveCtx;
use crate::board::{BoardTile, TilePatch};
use crate::cards::{select, ActionCard, CardCategory, DrawFilter, PunishmentEffect, MOVE_BACK_SPACES};
use crate::core::{
    GameState, MoveRejection, Phase, PlayerId, PunishmentKind, RandomSource, RulesPatch,
};
use crate::events::{EventData, EventKind, GameEvent};

/// Spaces awarded by a card whose reward says "forward".
pub const FORWARD_REWARD_SPACES: i64 = 2;

/// Points removed by a `lose_points` punishment.
pub const LOSE_POINTS_PENALTY: u32 = 2;

type MoveResult = Result<(), MoveRejection>;

fn ensure_live(state: &GameState) -> MoveResult {
    match state.phase {
        Phase::Finished => Err(MoveRejection::GameOver),
        Phase::Paused => Err(MoveRejection::Paused),
        _ => Ok(()),
    }
}

fn ensure_playing(state: &GameState) -> MoveResult {
    ensure_live(state)?;
    if state.phase != Phase::Playing {
        return Err(MoveRejection::WrongPhase);
    }
    if state.current().is_none() {
        return Err(MoveRejection::NoCurrentPlayer);
    }
    Ok(())
}

/// Live game with a card waiting on the current player.
fn ensure_pending(state: &GameState) -> Result<ActionCard, MoveRejection> {
    ensure_live(state)?;
    if state.current().is_none() {
        return Err(MoveRejection::NoCurrentPlayer);
    }
    state.current_action.clone().ok_or(MoveRejection::NoPendingAction)
}

/// Current player's id and name, for event construction.
fn actor(state: &GameState) -> Result<(PlayerId, String), MoveRejection> {
    state
        .current()
        .map(|p| (p.id, p.name.clone()))
        .ok_or(MoveRejection::NoCurrentPlayer)
}

// === Phase ===

/// `setup → playing`.
pub fn start_game(state: &mut GameState) -> MoveResult {
    match state.phase {
        Phase::Setup => {}
        Phase::Finished => return Err(MoveRejection::GameOver),
        _ => return Err(MoveRejection::AlreadyStarted),
    }
    state.phase = Phase::Playing;
    info!(players = state.player_count(), "game started");
    Ok(())
}

/// Pause from any non-terminal phase.
pub fn pause_game(state: &mut GameState) -> MoveResult {
    ensure_live(state)?;
    state.phase = Phase::Paused;
    info!("game paused");
    Ok(())
}

/// Resume into `action` if a card is pending, else `playing`.
pub fn resume_game(state: &mut GameState) -> MoveResult {
    if state.phase != Phase::Paused {
        return Err(MoveRejection::NotPaused);
    }
    state.phase = if state.current_action.is_some() {
        Phase::Action
    } else {
        Phase::Playing
    };
    info!(phase = ?state.phase, "game resumed");
    Ok(())
}

// === Turn ===

/// Roll two dice. One roll per turn.
pub fn roll_dice<R: RandomSource + ?Sized>(state: &mut GameState, ctx: &mut MoveCtx<'_, R>) -> MoveResult {
    ensure_playing(state)?;
    if state.last_roll.is_some() {
        return Err(MoveRejection::AlreadyRolled);
    }
    let (id, name) = actor(state)?;

    let a = ctx.random.roll_d6();
    let b = ctx.random.roll_d6();
    let total = a + b;
    state.last_roll = Some(total);

    let event = GameEvent::new(EventKind::Roll, id, name.clone(), format!("{name} rolled {a} + {b} = {total}"))
        .with_data(EventData::Roll { dice: [a, b], total });
    state.log(event, ctx.timestamp);
    trace!(player = %id, a, b, total, "rolled");
    Ok(())
}

/// Put the current pawn at `position` (clamped) and resolve the tile.
///
/// Reaching the final tile ends the game before any tile effect runs.
pub fn move_pawn<R: RandomSource + ?Sized>(
    state: &mut GameState,
    position: i64,
    ctx: &mut MoveCtx<'_, R>,
) -> MoveResult {
    ensure_playing(state)?;
    let (id, name) = actor(state)?;

    let size = state.board_size;
    let Some(player) = state.current_mut() else {
        return Err(MoveRejection::NoCurrentPlayer);
    };
    let from = player.position;
    let to = player.place(position, size);

    let tile = state.tile_at(to).cloned();
    trace!(player = %id, from, to, tile = ?tile.as_ref().map(|t| t.tile_type), "moved");
    let event = GameEvent::new(EventKind::Move, id, name.clone(), format!("{name} moved from {from} to {to}"))
        .with_data(EventData::Move { from, to, tile });
    state.log(event, ctx.timestamp);

    if to == state.last_position() {
        finish(state);
        return Ok(());
    }

    land_on_tile(state, ctx);
    Ok(())
}

/// Draw a card for the current player, honouring the optional filter.
///
/// An empty filtered pool falls back to the whole deck.
pub fn draw_action<R: RandomSource + ?Sized>(
    state: &mut GameState,
    filter: DrawFilter,
    ctx: &mut MoveCtx<'_, R>,
) -> MoveResult {
    ensure_playing(state)?;
    let card = select(&state.action_deck, filter, &mut *ctx.random).ok_or(MoveRejection::EmptyDeck)?;
    present_card(state, card, false, ctx);
    Ok(())
}

// === Resolution ===

/// Score the pending card and return to `playing`.
pub fn complete_action<R: RandomSource + ?Sized>(state: &mut GameState, ctx: &mut MoveCtx<'_, R>) -> MoveResult {
    let card = ensure_pending(state)?;
    let (id, name) = actor(state)?;
    let points = card.intensity.points();
    let forward = card.rewards_forward();
    let size = state.board_size;

    if let Some(player) = state.current_mut() {
        player.completed_actions += 1;
        player.score += points;
    }
    let event = GameEvent::new(
        EventKind::Complete,
        id,
        name.clone(),
        format!("{name} completed the action (+{points})"),
    )
    .with_data(EventData::Complete { card_id: card.id.clone(), points });
    state.log(event, ctx.timestamp);

    if forward {
        if let Some(player) = state.current_mut() {
            player.step(FORWARD_REWARD_SPACES, size);
        }
        let event = GameEvent::new(
            EventKind::Reward,
            id,
            name.clone(),
            format!("{name} moves forward {FORWARD_REWARD_SPACES} spaces"),
        )
        .with_data(EventData::Reward { card_id: card.id.clone(), spaces: FORWARD_REWARD_SPACES });
        state.log(event, ctx.timestamp);
    }

    state.clear_pending();
    state.phase = Phase::Playing;
    settle_on_finish(state);
    Ok(())
}

/// Skip the pending card, drawing a punishment when the rules say so.
pub fn skip_action<R: RandomSource + ?Sized>(state: &mut GameState, ctx: &mut MoveCtx<'_, R>) -> MoveResult {
    let card = ensure_pending(state)?;
    if !state.game_rules.allow_skip {
        return Err(MoveRejection::SkipNotAllowed);
    }
    let (id, name) = actor(state)?;

    let mut punishment_card_id = None;
    if state.game_rules.punishment_on_skip && card.punishment.is_some() {
        let drawn = select(&state.punishment_deck, DrawFilter::any(), &mut *ctx.random);
        let size = state.board_size;
        if let Some(player) = state.current_mut() {
            player.punishments += 1;
            if let Some(PunishmentEffect::MoveBack(spaces)) = drawn.as_ref().map(ActionCard::punishment_effect) {
                player.step(-i64::from(spaces), size);
            }
        }
        punishment_card_id = drawn.map(|c| c.id);
    }

    let message = match &punishment_card_id {
        Some(_) => format!("{name} skipped the action and takes a punishment"),
        None => format!("{name} skipped the action"),
    };
    let event = GameEvent::new(EventKind::Skip, id, name, message).with_data(EventData::Skip {
        card_id: card.id,
        punishment_card_id,
        timed_out: false,
    });
    state.log(event, ctx.timestamp);

    state.clear_pending();
    state.phase = Phase::Playing;
    Ok(())
}

/// Hand the current player an explicit punishment.
pub fn apply_punishment<R: RandomSource + ?Sized>(
    state: &mut GameState,
    kind: PunishmentKind,
    ctx: &mut MoveCtx<'_, R>,
) -> MoveResult {
    ensure_live(state)?;
    if !matches!(state.phase, Phase::Playing | Phase::Action) {
        return Err(MoveRejection::WrongPhase);
    }
    let (id, name) = actor(state)?;
    let size = state.board_size;

    let message = match kind {
        PunishmentKind::MoveBack => format!("{name} moves back {MOVE_BACK_SPACES} spaces"),
        PunishmentKind::LosePoints => format!("{name} loses {LOSE_POINTS_PENALTY} points"),
        PunishmentKind::ExtraChallenge => format!("{name} must take an extra challenge"),
    };

    if let Some(player) = state.current_mut() {
        player.punishments += 1;
        match kind {
            PunishmentKind::MoveBack => {
                player.step(-i64::from(MOVE_BACK_SPACES), size);
            }
            PunishmentKind::LosePoints => player.lose_points(LOSE_POINTS_PENALTY),
            PunishmentKind::ExtraChallenge => {}
        }
    }
    let event = GameEvent::new(EventKind::Punishment, id, name, message)
        .with_data(EventData::Punishment { kind });
    state.log(event, ctx.timestamp);

    if kind == PunishmentKind::ExtraChallenge && state.current_action.is_none() {
        let filter = DrawFilter::category(CardCategory::Challenge);
        if let Some(card) = select(&state.action_deck, filter, &mut *ctx.random) {
            present_card(state, card, false, ctx);
        }
    }
    Ok(())
}

/// Set the pending card's remaining time. Zero times the card out.
///
/// Ignored while `timer_enabled` is off, so no countdown is ever armed.
pub fn update_timer<R: RandomSource + ?Sized>(
    state: &mut GameState,
    seconds: i64,
    ctx: &mut MoveCtx<'_, R>,
) -> MoveResult {
    let card = ensure_pending(state)?;
    if !state.game_rules.timer_enabled {
        return Err(MoveRejection::TimerDisabled);
    }
    let remaining = u32::try_from(seconds.max(0)).unwrap_or(u32::MAX);

    if remaining > 0 {
        state.timer_remaining = Some(remaining);
        return Ok(());
    }

    let (id, name) = actor(state)?;
    if state.game_rules.punishment_on_skip {
        if let Some(player) = state.current_mut() {
            player.punishments += 1;
        }
    }
    let event = GameEvent::new(EventKind::Skip, id, name.clone(), format!("{name} ran out of time"))
        .with_data(EventData::Skip { card_id: card.id, punishment_card_id: None, timed_out: true });
    state.log(event, ctx.timestamp);

    state.clear_pending();
    state.phase = Phase::Playing;
    Ok(())
}

// === Table editing ===

/// Append a card to the action deck. Duplicate ids are allowed.
pub fn add_custom_card(state: &mut GameState, card: ActionCard) -> MoveResult {
    ensure_live(state)?;
    trace!(card_id = %card.id, "custom card added");
    state.action_deck.push_back(card);
    Ok(())
}

/// Shallow-merge a rules patch.
pub fn update_rules(state: &mut GameState, patch: &RulesPatch) -> MoveResult {
    ensure_live(state)?;
    state.game_rules.apply(patch);
    trace!(rules = ?state.game_rules, "rules updated");
    Ok(())
}

/// Append a tile at the end of the board, after the finish tile.
///
/// The appended tile becomes the new final position.
pub fn add_board_tile(state: &mut GameState, tile: BoardTile) -> MoveResult {
    ensure_live(state)?;
    state.board_tiles.push(tile);
    state.sync_board_size();
    Ok(())
}

/// Remove the tile with `id`; pawns past the new end are pulled back.
///
/// A pawn pulled onto the new final tile has not finished. The game only
/// ends when a pawn moves there.
pub fn remove_board_tile(state: &mut GameState, id: u32) -> MoveResult {
    ensure_live(state)?;
    if !state.board_tiles.remove(id) {
        return Err(MoveRejection::UnknownTile);
    }
    state.sync_board_size();
    Ok(())
}

/// Patch the tile with `id` in place.
pub fn update_board_tile(state: &mut GameState, id: u32, patch: &TilePatch) -> MoveResult {
    ensure_live(state)?;
    if !state.board_tiles.update(id, patch) {
        return Err(MoveRejection::UnknownTile);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileType;
    use crate::cards::Intensity;
    use crate::core::{ScriptedRandom, WinCondition};
    use crate::engine::setup;

    fn playing(players: usize) -> GameState {
        let mut state = setup(players).unwrap();
        start_game(&mut state).unwrap();
        state
    }

    fn with_pending(card: ActionCard) -> GameState {
        let mut state = playing(2);
        state.current_action = Some(card);
        state.phase = Phase::Action;
        state
    }

    fn card(intensity: Intensity) -> ActionCard {
        ActionCard::new("c", "Do it", intensity, CardCategory::Dare)
    }

    #[test]
    fn test_start_game_only_from_setup() {
        let mut state = setup(2).unwrap();
        assert_eq!(start_game(&mut state), Ok(()));
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(start_game(&mut state), Err(MoveRejection::AlreadyStarted));
    }

    #[test]
    fn test_roll_dice_logs_both_dice() {
        let mut state = playing(2);
        let mut random = ScriptedRandom::new().with_dice([3, 5]);
        let mut ctx = MoveCtx::new(&mut random, 10);

        roll_dice(&mut state, &mut ctx).unwrap();

        assert_eq!(state.last_roll, Some(8));
        let event = state.activity_log.last().unwrap();
        assert_eq!(event.kind, EventKind::Roll);
        assert_eq!(event.data, Some(EventData::Roll { dice: [3, 5], total: 8 }));
        assert_eq!(roll_dice(&mut state, &mut ctx), Err(MoveRejection::AlreadyRolled));
    }

    #[test]
    fn test_roll_requires_playing() {
        let mut state = setup(2).unwrap();
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        assert_eq!(roll_dice(&mut state, &mut ctx), Err(MoveRejection::WrongPhase));
        assert!(state.activity_log.is_empty());
    }

    #[test]
    fn test_move_pawn_clamps() {
        let mut state = playing(2);
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        move_pawn(&mut state, -5, &mut ctx).unwrap();
        assert_eq!(state.players[0].position, 0);

        move_pawn(&mut state, 1_000, &mut ctx).unwrap();
        assert_eq!(state.players[0].position, 41);
        assert_eq!(state.phase, Phase::Finished);
    }

    #[test]
    fn test_move_onto_reward_tile_adds_bonus() {
        let mut state = playing(2);
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);
        assert_eq!(state.tile_at(5).unwrap().tile_type, TileType::Reward);

        move_pawn(&mut state, 5, &mut ctx).unwrap();

        assert_eq!(state.players[0].position, 7);
        // Only the move itself is logged.
        assert_eq!(state.activity_log.len(), 1);
    }

    #[test]
    fn test_move_onto_action_tile_presents_linked_card() {
        let mut state = playing(2);
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        move_pawn(&mut state, 3, &mut ctx).unwrap();

        assert_eq!(state.phase, Phase::Action);
        assert_eq!(state.current_action.as_ref().unwrap().id, "truth-1");
        assert_eq!(state.timer_remaining, Some(60));
        match &state.activity_log.last().unwrap().data {
            Some(EventData::Action { from_tile, .. }) => assert!(*from_tile),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_move_onto_punishment_tile_does_nothing_else() {
        let mut state = playing(2);
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);
        assert_eq!(state.tile_at(7).unwrap().tile_type, TileType::Punishment);

        move_pawn(&mut state, 7, &mut ctx).unwrap();

        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.players[0].position, 7);
        assert_eq!(state.players[0].punishments, 0);
    }

    #[test]
    fn test_draw_action_with_filter() {
        let mut state = playing(2);
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        let filter = DrawFilter::category(CardCategory::Dare).with_intensity(Intensity::Intense);
        draw_action(&mut state, filter, &mut ctx).unwrap();

        assert_eq!(state.current_action.as_ref().unwrap().id, "dare-3");
        assert_eq!(state.phase, Phase::Action);
    }

    #[test]
    fn test_draw_action_empty_deck() {
        let mut state = playing(2);
        state.action_deck.clear();
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        assert_eq!(
            draw_action(&mut state, DrawFilter::any(), &mut ctx),
            Err(MoveRejection::EmptyDeck)
        );
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_complete_action_scores_by_intensity() {
        for (intensity, points) in [(Intensity::Mild, 1), (Intensity::Medium, 2), (Intensity::Intense, 3)] {
            let mut state = with_pending(card(intensity));
            state.last_roll = Some(4);
            let mut random = ScriptedRandom::new();
            let mut ctx = MoveCtx::new(&mut random, 0);

            complete_action(&mut state, &mut ctx).unwrap();

            assert_eq!(state.players[0].score, points);
            assert_eq!(state.players[0].completed_actions, 1);
            assert_eq!(state.phase, Phase::Playing);
            assert!(state.current_action.is_none());
            assert!(state.last_roll.is_none());
        }
    }

    #[test]
    fn test_complete_action_forward_reward() {
        let mut state = with_pending(card(Intensity::Mild).with_reward("Move forward 2 spaces"));
        state.players[0].position = 10;
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        complete_action(&mut state, &mut ctx).unwrap();

        assert_eq!(state.players[0].position, 12);
        assert_eq!(state.activity_log.last().unwrap().kind, EventKind::Reward);
    }

    #[test]
    fn test_forward_reward_onto_finish_ends_game() {
        let mut state = with_pending(card(Intensity::Mild).with_reward("Move forward 2 spaces"));
        state.players[0].position = 40;
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        complete_action(&mut state, &mut ctx).unwrap();

        assert_eq!(state.phase, Phase::Finished);
        assert_eq!(state.winner, Some(state.players[0].id));
    }

    #[test]
    fn test_complete_without_pending_card() {
        let mut state = playing(2);
        let before = state.clone();
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        assert_eq!(complete_action(&mut state, &mut ctx), Err(MoveRejection::NoPendingAction));
        assert_eq!(state, before);
    }

    #[test]
    fn test_skip_draws_move_back_punishment() {
        let mut state = with_pending(card(Intensity::Medium).with_punishment("Move back 3 spaces"));
        state.players[0].position = 10;
        // p-1 "Move back 3 spaces"
        let mut random = ScriptedRandom::new().with_picks([0]);
        let mut ctx = MoveCtx::new(&mut random, 0);

        skip_action(&mut state, &mut ctx).unwrap();

        assert_eq!(state.players[0].punishments, 1);
        assert_eq!(state.players[0].position, 7);
        assert_eq!(state.phase, Phase::Playing);
        match &state.activity_log.last().unwrap().data {
            Some(EventData::Skip { punishment_card_id, timed_out, .. }) => {
                assert_eq!(punishment_card_id.as_deref(), Some("p-1"));
                assert!(!timed_out);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_skip_punishment_skip_turn_keeps_position() {
        let mut state = with_pending(card(Intensity::Medium).with_punishment("Move back 3 spaces"));
        state.players[0].position = 10;
        // p-2 "You skip your next turn"
        let mut random = ScriptedRandom::new().with_picks([1]);
        let mut ctx = MoveCtx::new(&mut random, 0);

        skip_action(&mut state, &mut ctx).unwrap();

        assert_eq!(state.players[0].punishments, 1);
        assert_eq!(state.players[0].position, 10);
    }

    #[test]
    fn test_skip_without_card_punishment() {
        let mut state = with_pending(card(Intensity::Mild));
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        skip_action(&mut state, &mut ctx).unwrap();

        assert_eq!(state.players[0].punishments, 0);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_skip_not_allowed() {
        let mut state = with_pending(card(Intensity::Mild));
        state.game_rules.allow_skip = false;
        let before = state.clone();
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        assert_eq!(skip_action(&mut state, &mut ctx), Err(MoveRejection::SkipNotAllowed));
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_punishment_kinds() {
        let mut state = playing(2);
        state.players[0].position = 2;
        state.players[0].score = 1;
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        apply_punishment(&mut state, PunishmentKind::MoveBack, &mut ctx).unwrap();
        assert_eq!(state.players[0].position, 0);

        apply_punishment(&mut state, PunishmentKind::LosePoints, &mut ctx).unwrap();
        assert_eq!(state.players[0].score, 0);

        apply_punishment(&mut state, PunishmentKind::ExtraChallenge, &mut ctx).unwrap();
        assert_eq!(state.current_action.as_ref().unwrap().category, CardCategory::Challenge);
        assert_eq!(state.phase, Phase::Action);

        assert_eq!(state.players[0].punishments, 3);
    }

    #[test]
    fn test_timeout_is_an_implicit_skip() {
        let mut state = with_pending(card(Intensity::Mild).with_punishment("Move back 3 spaces"));
        state.timer_remaining = Some(60);
        state.players[0].position = 10;
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        update_timer(&mut state, 12, &mut ctx).unwrap();
        assert_eq!(state.timer_remaining, Some(12));

        update_timer(&mut state, -4, &mut ctx).unwrap();
        assert_eq!(state.phase, Phase::Playing);
        assert!(state.current_action.is_none());
        assert!(state.timer_remaining.is_none());
        assert_eq!(state.players[0].punishments, 1);
        // No punishment card is drawn on timeout.
        assert_eq!(state.players[0].position, 10);
    }

    #[test]
    fn test_timeout_without_punishment_rule() {
        let mut state = with_pending(card(Intensity::Mild));
        state.game_rules.punishment_on_skip = false;
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        update_timer(&mut state, 0, &mut ctx).unwrap();

        assert_eq!(state.players[0].punishments, 0);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_timer_ticks_ignored_when_timers_disabled() {
        let mut state = with_pending(card(Intensity::Mild));
        state.game_rules.timer_enabled = false;
        let before = state.clone();
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        assert_eq!(update_timer(&mut state, 30, &mut ctx), Err(MoveRejection::TimerDisabled));
        assert_eq!(update_timer(&mut state, 0, &mut ctx), Err(MoveRejection::TimerDisabled));
        assert_eq!(state, before);
        assert!(state.timer_remaining.is_none());
    }

    #[test]
    fn test_move_event_carries_landed_tile() {
        let mut state = playing(2);
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        move_pawn(&mut state, 3, &mut ctx).unwrap();

        let event = state.activity_log.iter().next().unwrap();
        assert_eq!(event.kind, EventKind::Move);
        match &event.data {
            Some(EventData::Move { from, to, tile: Some(tile) }) => {
                assert_eq!((*from, *to), (0, 3));
                assert_eq!(tile.id, 3);
                assert_eq!(tile.tile_type, TileType::Action);
                assert_eq!(tile.action_card_id.as_deref(), Some("truth-1"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_pause_and_resume() {
        let mut state = with_pending(card(Intensity::Mild));
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        pause_game(&mut state).unwrap();
        assert_eq!(state.phase, Phase::Paused);
        assert_eq!(complete_action(&mut state, &mut ctx), Err(MoveRejection::Paused));

        resume_game(&mut state).unwrap();
        assert_eq!(state.phase, Phase::Action);
        assert_eq!(resume_game(&mut state), Err(MoveRejection::NotPaused));
    }

    #[test]
    fn test_table_editing() {
        let mut state = playing(2);
        state.players[1].position = 41;

        update_rules(
            &mut state,
            &RulesPatch { win_condition: Some(WinCondition::MostActions), ..RulesPatch::default() },
        )
        .unwrap();
        assert_eq!(state.game_rules.win_condition, WinCondition::MostActions);

        add_custom_card(&mut state, card(Intensity::Intense)).unwrap();
        assert_eq!(state.action_deck.back().unwrap().id, "c");

        add_board_tile(&mut state, BoardTile::new(100, TileType::Normal, 0)).unwrap();
        assert_eq!(state.board_size, 43);
        assert_eq!(state.board_tiles.tiles()[42].position, 42);

        remove_board_tile(&mut state, 100).unwrap();
        remove_board_tile(&mut state, 41).unwrap();
        assert_eq!(state.board_size, 41);
        assert_eq!(state.players[1].position, 40);
        assert_eq!(remove_board_tile(&mut state, 999), Err(MoveRejection::UnknownTile));

        let patch = TilePatch { tile_type: Some(TileType::Wild), ..TilePatch::default() };
        update_board_tile(&mut state, 1, &patch).unwrap();
        assert_eq!(state.tile_at(1).unwrap().tile_type, TileType::Wild);
        assert_eq!(update_board_tile(&mut state, 999, &patch), Err(MoveRejection::UnknownTile));
    }

    #[test]
    fn test_added_tile_becomes_the_finish_line() {
        let mut state = playing(2);

        add_board_tile(&mut state, BoardTile::new(42, TileType::Normal, 0)).unwrap();
        assert_eq!(state.last_position(), 42);
        assert_eq!(state.tile_at(41).unwrap().tile_type, TileType::Finish);
        assert_eq!(state.tile_at(42).unwrap().tile_type, TileType::Normal);

        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);
        move_pawn(&mut state, 41, &mut ctx).unwrap();
        assert_eq!(state.phase, Phase::Playing);

        move_pawn(&mut state, 42, &mut ctx).unwrap();
        assert_eq!(state.phase, Phase::Finished);
        assert_eq!(state.winner, Some(PlayerId::new(0)));
    }

    #[test]
    fn test_removing_start_tile_shifts_the_path() {
        let mut state = playing(2);

        remove_board_tile(&mut state, 0).unwrap();

        assert_eq!(state.board_size, 41);
        assert_eq!(state.tile_at(0).unwrap().id, 1);
        assert_eq!(state.tile_at(0).unwrap().tile_type, TileType::Normal);
        assert_eq!(state.tile_at(40).unwrap().tile_type, TileType::Finish);
    }

    #[test]
    fn test_pawn_pulled_onto_new_end_has_not_finished() {
        let mut state = playing(2);
        state.players[0].position = 41;

        remove_board_tile(&mut state, 41).unwrap();

        assert_eq!(state.players[0].position, 40);
        assert_eq!(state.players[0].position, state.last_position());
        assert_eq!(state.phase, Phase::Playing);
        assert!(state.winner.is_none());
    }

    #[test]
    fn test_finished_game_rejects_everything() {
        let mut state = playing(2);
        state.phase = Phase::Finished;
        let before = state.clone();
        let mut random = ScriptedRandom::new();
        let mut ctx = MoveCtx::new(&mut random, 0);

        assert_eq!(start_game(&mut state), Err(MoveRejection::GameOver));
        assert_eq!(roll_dice(&mut state, &mut ctx), Err(MoveRejection::GameOver));
        assert_eq!(move_pawn(&mut state, 3, &mut ctx), Err(MoveRejection::GameOver));
        assert_eq!(pause_game(&mut state), Err(MoveRejection::GameOver));
        assert_eq!(add_custom_card(&mut state, card(Intensity::Mild)), Err(MoveRejection::GameOver));
        assert_eq!(state, before);
    }
}
