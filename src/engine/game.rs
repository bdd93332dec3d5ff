//! The game as the host sees it.
//!
//! `SwirledOut` bundles setup, turn order, move dispatch and the end
//! predicate behind one value. It holds no game state of its own; every
//! call takes the `GameState` to read or mutate.

use tracing::debug;

use super::moves;
use super::setup::GameBuilder;
use super::turn;
use super::MoveCtx;
use crate::cards::DrawFilter;
use crate::core::{EngineError, GameState, Move, MoveOutcome, RandomSource, SetupConfig};
use crate::rules::{end_if, GameResult, RoundRobin, TurnContext, TurnOrder};

/// Swirled Out rules bound to a turn-order policy.
#[derive(Clone, Debug, Default)]
pub struct SwirledOut<O: TurnOrder = RoundRobin> {
    order: O,
}

impl SwirledOut<RoundRobin> {
    #[must_use]
    pub fn new() -> Self {
        Self { order: RoundRobin }
    }
}

impl<O: TurnOrder> SwirledOut<O> {
    /// Use a custom turn order.
    pub fn with_order(order: O) -> Self {
        Self { order }
    }

    /// Initial state for `num_players` with default settings.
    pub fn setup(&self, num_players: usize) -> Result<GameState, EngineError> {
        GameBuilder::new().player_count(num_players).build()
    }

    /// Initial state from a host config.
    pub fn setup_with(&self, config: SetupConfig) -> Result<GameState, EngineError> {
        GameBuilder::from_config(config).build()
    }

    fn turn_context(state: &GameState, play_order_pos: usize) -> TurnContext {
        TurnContext {
            play_order_pos,
            num_players: state.player_count(),
        }
    }

    /// Play-order position of the first turn.
    pub fn first(&self, state: &GameState) -> usize {
        self.order.first(&Self::turn_context(state, state.current_player))
    }

    /// Play-order position after the current one.
    pub fn next(&self, state: &GameState) -> usize {
        self.order.next(&Self::turn_context(state, state.current_player))
    }

    /// Begin the turn at `play_order_pos`.
    pub fn on_begin(&self, state: &mut GameState, play_order_pos: usize) {
        let ctx = Self::turn_context(state, play_order_pos);
        turn::on_begin(state, &ctx);
    }

    /// Hand the turn to the next player.
    pub fn end_turn(&self, state: &mut GameState) {
        let next = self.next(state);
        self.on_begin(state, next);
    }

    /// Apply one move. A rejected move leaves `state` untouched.
    pub fn apply<R: RandomSource + ?Sized>(
        &self,
        state: &mut GameState,
        mv: &Move,
        ctx: &mut MoveCtx<'_, R>,
    ) -> MoveOutcome {
        let result = match mv {
            Move::StartGame => moves::start_game(state),
            Move::RollDice => moves::roll_dice(state, ctx),
            Move::MovePawn { position } => moves::move_pawn(state, *position, ctx),
            Move::DrawAction { category, intensity } => {
                let filter = DrawFilter {
                    category: *category,
                    intensity: *intensity,
                };
                moves::draw_action(state, filter, ctx)
            }
            Move::CompleteAction => moves::complete_action(state, ctx),
            Move::SkipAction => moves::skip_action(state, ctx),
            Move::ApplyPunishment { kind } => moves::apply_punishment(state, *kind, ctx),
            Move::UpdateTimer { seconds } => moves::update_timer(state, *seconds, ctx),
            Move::PauseGame => moves::pause_game(state),
            Move::ResumeGame => moves::resume_game(state),
            Move::AddCustomCard { card } => moves::add_custom_card(state, card.clone()),
            Move::UpdateRules { rules } => moves::update_rules(state, rules),
            Move::AddBoardTile { tile } => moves::add_board_tile(state, tile.clone()),
            Move::RemoveBoardTile { id } => moves::remove_board_tile(state, *id),
            Move::UpdateBoardTile { id, patch } => moves::update_board_tile(state, *id, patch),
        };

        let outcome = MoveOutcome::from(result);
        if let Some(reason) = outcome.rejection() {
            debug!(mv = mv.name(), %reason, "move ignored");
        }
        outcome
    }

    /// `Some(result)` once the game has ended.
    pub fn end_if(&self, state: &GameState) -> Option<GameResult> {
        end_if(state)
    }
}
