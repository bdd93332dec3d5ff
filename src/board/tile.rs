//! Board tiles.

use serde::{Deserialize, Serialize};

/// What landing on a tile does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    Normal,
    /// Resolves its linked card automatically.
    Action,
    /// Caller follows up with a punishment draw.
    Punishment,
    /// Silent bonus of two spaces.
    Reward,
    Wild,
    Start,
    Finish,
}

impl TileType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TileType::Normal => "normal",
            TileType::Action => "action",
            TileType::Punishment => "punishment",
            TileType::Reward => "reward",
            TileType::Wild => "wild",
            TileType::Start => "start",
            TileType::Finish => "finish",
        }
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the board path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardTile {
    pub id: u32,
    #[serde(rename = "type")]
    pub tile_type: TileType,
    /// Index on the path. Kept equal to the tile's index in the board.
    pub position: usize,
    #[serde(default)]
    pub action_card_id: Option<String>,
    #[serde(default)]
    pub special_effect: Option<String>,
}

impl BoardTile {
    pub fn new(id: u32, tile_type: TileType, position: usize) -> Self {
        Self {
            id,
            tile_type,
            position,
            action_card_id: None,
            special_effect: None,
        }
    }

    #[must_use]
    pub fn with_card(mut self, card_id: impl Into<String>) -> Self {
        self.action_card_id = Some(card_id.into());
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: impl Into<String>) -> Self {
        self.special_effect = Some(effect.into());
        self
    }

    /// Overlay the fields set in `patch`. Id and position are never patched.
    pub fn apply(&mut self, patch: &TilePatch) {
        if let Some(tile_type) = patch.tile_type {
            self.tile_type = tile_type;
        }
        if let Some(card_id) = &patch.action_card_id {
            self.action_card_id = Some(card_id.clone());
        }
        if let Some(effect) = &patch.special_effect {
            self.special_effect = Some(effect.clone());
        }
    }
}

/// Partial tile update. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TilePatch {
    #[serde(rename = "type")]
    pub tile_type: Option<TileType>,
    pub action_card_id: Option<String>,
    pub special_effect: Option<String>,
}
