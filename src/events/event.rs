//! Activity log entries.
//!
//! Every entry names the acting player and carries a human-readable
//! message plus optional structured data for the host to render.

use serde::{Deserialize, Serialize};

use crate::board::BoardTile;
use crate::cards::{CardCategory, Intensity};
use crate::core::{PlayerId, PunishmentKind};

/// Kind of logged event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Roll,
    Move,
    Action,
    Complete,
    Skip,
    Punishment,
    Reward,
}

/// Structured payload, one variant per event kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EventData {
    Roll {
        dice: [u8; 2],
        total: u8,
    },
    Move {
        from: usize,
        to: usize,
        /// The tile landed on, as it stood when the pawn arrived.
        tile: Option<BoardTile>,
    },
    Action {
        card_id: String,
        category: CardCategory,
        intensity: Intensity,
        /// Resolved from the tile the pawn landed on rather than drawn.
        from_tile: bool,
    },
    Complete {
        card_id: String,
        points: u32,
    },
    Skip {
        card_id: String,
        punishment_card_id: Option<String>,
        timed_out: bool,
    },
    Punishment {
        kind: PunishmentKind,
    },
    Reward {
        card_id: String,
        spaces: i64,
    },
}

/// A logged event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    pub id: String,
    /// Milliseconds since the Unix epoch, as supplied by the dispatcher.
    pub timestamp: u64,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub player_id: PlayerId,
    pub player_name: String,
    pub message: String,
    #[serde(default)]
    pub data: Option<EventData>,
}

impl GameEvent {
    /// Event without payload. `id` is assigned when the event is logged.
    pub fn new(
        kind: EventKind,
        player_id: PlayerId,
        player_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            timestamp: 0,
            kind,
            player_id,
            player_name: player_name.into(),
            message: message.into(),
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: EventData) -> Self {
        self.data = Some(data);
        self
    }
}
