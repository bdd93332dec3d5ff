//! Win detection and standings.
//!
//! The game ends the moment a pawn reaches the finish tile. Who gets the
//! credit depends on the table's `WinCondition`: the finisher, or the
//! leader on completed actions or score at that moment.

use serde::{Deserialize, Serialize};

use super::engine::GameResult;
use crate::core::{GameState, Player, PlayerId, WinCondition};

/// One row of the final (or running) standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub score: u32,
    pub completed_actions: u32,
    pub punishments: u32,
    pub position: usize,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name.clone(),
            score: player.score,
            completed_actions: player.completed_actions,
            punishments: player.punishments,
            position: player.position,
        }
    }
}

/// Tally a win condition ranks by. `FirstToFinish` ranks by position.
fn tally(player: &Player, condition: WinCondition) -> u64 {
    match condition {
        WinCondition::FirstToFinish => player.position as u64,
        WinCondition::MostActions => u64::from(player.completed_actions),
        WinCondition::HighestScore => u64::from(player.score),
    }
}

/// Players ranked best-first under the current win condition.
///
/// Ties fall back to board position, then seat order.
#[must_use]
pub fn standings(state: &GameState) -> Vec<Standing> {
    let condition = state.game_rules.win_condition;
    let mut ranked: Vec<&Player> = state.players.iter().collect();
    ranked.sort_by(|a, b| {
        tally(b, condition)
            .cmp(&tally(a, condition))
            .then(b.position.cmp(&a.position))
            .then(a.id.cmp(&b.id))
    });
    ranked.into_iter().map(Standing::from).collect()
}

/// End-of-game predicate, polled by the host after every move.
///
/// Returns `None` while the game is running.
#[must_use]
pub fn end_if(state: &GameState) -> Option<GameResult> {
    if !state.is_finished() {
        return None;
    }

    let condition = state.game_rules.win_condition;
    if condition == WinCondition::FirstToFinish {
        return Some(state.winner.map_or(GameResult::Draw, GameResult::Winner));
    }

    let best = state.players.iter().map(|p| tally(p, condition)).max()?;
    let leaders: Vec<PlayerId> = state
        .players
        .iter()
        .filter(|p| tally(p, condition) == best)
        .map(|p| p.id)
        .collect();

    Some(match leaders.as_slice() {
        [single] => GameResult::Winner(*single),
        _ => GameResult::Winners(leaders),
    })
}
