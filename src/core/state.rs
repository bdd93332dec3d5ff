//! Game state: the aggregate root.
//!
//! `GameState` is plain data. Every field serializes, nothing refers to
//! anything by pointer, and restoring a snapshot reproduces the state
//! exactly. All mutation goes through the move handlers in `engine`.
//!
//! Wire format is camelCase JSON (`to_json`/`from_json`); `to_bytes`
//! produces a compact bincode snapshot for storage or replay.

use serde::{Deserialize, Serialize};

use super::config::GameRules;
use super::error::EngineError;
use super::player::{Player, PlayerId};
use crate::board::{clamp_position, Board, BoardTile};
use crate::cards::{ActionCard, Deck};
use crate::events::{ActivityLog, GameEvent};

/// Coarse game-wide state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Initial; left via `startGame`.
    #[default]
    Setup,
    /// Current player may roll, move and draw.
    Playing,
    /// A card is pending completion or skip.
    Action,
    /// Safe word. Resumes to `Action` or `Playing`.
    Paused,
    /// Terminal.
    Finished,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub players: Vec<Player>,
    /// Index into `players` of whose turn it is.
    pub current_player: usize,
    pub last_roll: Option<u8>,
    pub current_action: Option<ActionCard>,
    pub phase: Phase,
    /// Always `board_tiles.len()`.
    pub board_size: usize,
    pub board_tiles: Board,
    pub action_deck: Deck,
    pub punishment_deck: Deck,
    pub timer_remaining: Option<u32>,
    pub game_rules: GameRules,
    pub winner: Option<PlayerId>,
    pub activity_log: ActivityLog,
    /// Sequence used to mint event ids.
    pub event_seq: u64,
}

impl GameState {
    /// Assemble a fresh state in the `Setup` phase.
    #[must_use]
    pub fn new(
        players: Vec<Player>,
        board: Board,
        action_deck: Deck,
        punishment_deck: Deck,
        rules: GameRules,
    ) -> Self {
        Self {
            players,
            current_player: 0,
            last_roll: None,
            current_action: None,
            phase: Phase::Setup,
            board_size: board.len(),
            board_tiles: board,
            action_deck,
            punishment_deck,
            timer_remaining: None,
            game_rules: rules,
            winner: None,
            activity_log: ActivityLog::new(),
            event_seq: 0,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }

    pub fn current_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current_player)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Position of the finish line.
    #[must_use]
    pub fn last_position(&self) -> usize {
        self.board_size.saturating_sub(1)
    }

    /// Tile at a board position.
    #[must_use]
    pub fn tile_at(&self, position: usize) -> Option<&BoardTile> {
        self.board_tiles.at(position)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Clear the per-card transient fields (card, timer, roll).
    pub fn clear_pending(&mut self) {
        self.current_action = None;
        self.timer_remaining = None;
        self.last_roll = None;
    }

    /// Recompute `board_size` from the tiles and pull stranded pawns back
    /// onto the board.
    pub fn sync_board_size(&mut self) {
        self.board_size = self.board_tiles.len();
        let size = self.board_size;
        for player in &mut self.players {
            player.position = clamp_position(player.position as i64, size);
        }
    }

    /// Append to the activity log, minting the event id.
    pub fn log(&mut self, mut event: GameEvent, timestamp: u64) {
        self.event_seq += 1;
        event.id = format!("{timestamp}-{}", self.event_seq);
        event.timestamp = timestamp;
        self.activity_log.push(event);
    }

    // === Serialization ===

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
