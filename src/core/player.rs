//! Players and seats.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. Turn order is creation order, so the seat index
//! is also the play-order position.
//!
//! ## Player
//!
//! Per-seat record: pawn position plus the three tallies the win
//! conditions read (`score`, `punishments`, `completed_actions`).

use serde::{Deserialize, Serialize};

use crate::board::clamp_position;

/// Seat colours, assigned in order. Seats past the palette get `FALLBACK_COLOR`.
pub const PLAYER_COLORS: [&str; 4] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A"];

/// Colour for seats beyond `PLAYER_COLORS`.
pub const FALLBACK_COLOR: &str = "#95A5A6";

/// Player identifier (seat index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use swirled_out::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Board position, always within `[0, board_size - 1]`.
    pub position: usize,
    pub color: String,
    pub score: u32,
    pub punishments: u32,
    pub completed_actions: u32,
}

impl Player {
    /// Create a player on the start tile with zeroed tallies.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: 0,
            color: Self::seat_color(id).to_string(),
            score: 0,
            punishments: 0,
            completed_actions: 0,
        }
    }

    /// Default display name for a seat ("Player 1" for seat 0).
    #[must_use]
    pub fn default_name(id: PlayerId) -> String {
        format!("Player {}", id.index() + 1)
    }

    /// Colour assigned to a seat.
    #[must_use]
    pub fn seat_color(id: PlayerId) -> &'static str {
        PLAYER_COLORS.get(id.index()).copied().unwrap_or(FALLBACK_COLOR)
    }

    /// Put the pawn at `target`, clamped to the board. Returns the new position.
    pub fn place(&mut self, target: i64, board_size: usize) -> usize {
        self.position = clamp_position(target, board_size);
        self.position
    }

    /// Move the pawn by `delta` spaces (negative moves back), clamped.
    pub fn step(&mut self, delta: i64, board_size: usize) -> usize {
        self.place(self.position as i64 + delta, board_size)
    }

    /// Remove up to `points` from the score, floored at zero.
    pub fn lose_points(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }
}
