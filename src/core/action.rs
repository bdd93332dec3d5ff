//! Moves as data.
//!
//! Each variant corresponds to one handler of the move API. A dispatcher
//! decodes a `Move` off the wire and hands it to
//! `SwirledOut::apply`, which routes it to the matching handler.
//!
//! ```
//! use swirled_out::core::Move;
//!
//! let mv: Move = serde_json::from_str(r#"{"move":"movePawn","position":7}"#).unwrap();
//! assert_eq!(mv, Move::MovePawn { position: 7 });
//!
//! // Unknown filter values degrade to "no filter".
//! let mv: Move = serde_json::from_str(r#"{"move":"drawAction","category":"karaoke"}"#).unwrap();
//! assert_eq!(mv, Move::DrawAction { category: None, intensity: None });
//! ```

use serde::{Deserialize, Serialize};

use super::config::RulesPatch;
use crate::board::{BoardTile, TilePatch};
use crate::cards::definition::lenient_filter;
use crate::cards::{ActionCard, CardCategory, Intensity};

/// Explicit punishment a player can be handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunishmentKind {
    /// Back three spaces.
    MoveBack,
    /// Lose two points.
    LosePoints,
    /// Draw a challenge card.
    ExtraChallenge,
}

/// A move in the game's move API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "move", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Move {
    StartGame,
    RollDice,
    MovePawn {
        position: i64,
    },
    DrawAction {
        #[serde(default, deserialize_with = "lenient_filter")]
        category: Option<CardCategory>,
        #[serde(default, deserialize_with = "lenient_filter")]
        intensity: Option<Intensity>,
    },
    CompleteAction,
    SkipAction,
    ApplyPunishment {
        kind: PunishmentKind,
    },
    UpdateTimer {
        seconds: i64,
    },
    PauseGame,
    ResumeGame,
    AddCustomCard {
        card: ActionCard,
    },
    UpdateRules {
        rules: RulesPatch,
    },
    AddBoardTile {
        tile: BoardTile,
    },
    RemoveBoardTile {
        id: u32,
    },
    UpdateBoardTile {
        id: u32,
        patch: TilePatch,
    },
}

impl Move {
    /// Wire name of the move.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Move::StartGame => "startGame",
            Move::RollDice => "rollDice",
            Move::MovePawn { .. } => "movePawn",
            Move::DrawAction { .. } => "drawAction",
            Move::CompleteAction => "completeAction",
            Move::SkipAction => "skipAction",
            Move::ApplyPunishment { .. } => "applyPunishment",
            Move::UpdateTimer { .. } => "updateTimer",
            Move::PauseGame => "pauseGame",
            Move::ResumeGame => "resumeGame",
            Move::AddCustomCard { .. } => "addCustomCard",
            Move::UpdateRules { .. } => "updateRules",
            Move::AddBoardTile { .. } => "addBoardTile",
            Move::RemoveBoardTile { .. } => "removeBoardTile",
            Move::UpdateBoardTile { .. } => "updateBoardTile",
        }
    }
}
