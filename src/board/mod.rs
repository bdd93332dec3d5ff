//! The board path.
//!
//! `Board` owns the ordered tile sequence. Board size is derived from the
//! tile count and is never set independently.

pub mod layout;
pub mod tile;

use serde::{Deserialize, Serialize};

pub use layout::{generate, tile_type_at, DEFAULT_BOARD_SIZE, REWARD_TILE_BONUS};
pub use tile::{BoardTile, TilePatch, TileType};

/// Clamp a target position to `[0, board_size - 1]`.
///
/// An empty board clamps everything to 0.
#[must_use]
pub fn clamp_position(target: i64, board_size: usize) -> usize {
    let last = board_size.saturating_sub(1) as i64;
    target.clamp(0, last) as usize
}

/// Ordered tile sequence. Invariant: `tiles[i].position == i`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    tiles: Vec<BoardTile>,
}

impl Board {
    /// Wrap tiles, renumbering positions to match their indices.
    #[must_use]
    pub fn from_tiles(tiles: Vec<BoardTile>) -> Self {
        let mut board = Self { tiles };
        board.reindex();
        board
    }

    #[must_use]
    pub fn tiles(&self) -> &[BoardTile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a board position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&BoardTile> {
        self.tiles.get(position)
    }

    /// Append a tile at the end of the path, past any finish tile.
    pub fn push(&mut self, mut tile: BoardTile) {
        tile.position = self.tiles.len();
        self.tiles.push(tile);
    }

    /// Remove the first tile with `id`. Returns false if none matched.
    pub fn remove(&mut self, id: u32) -> bool {
        let Some(index) = self.tiles.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tiles.remove(index);
        self.reindex();
        true
    }

    /// Patch the first tile with `id`. Returns false if none matched.
    pub fn update(&mut self, id: u32, patch: &TilePatch) -> bool {
        match self.tiles.iter_mut().find(|t| t.id == id) {
            Some(tile) => {
                tile.apply(patch);
                true
            }
            None => false,
        }
    }

    fn reindex(&mut self) {
        for (index, tile) in self.tiles.iter_mut().enumerate() {
            tile.position = index;
        }
    }
}
