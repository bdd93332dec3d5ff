//! Bounded activity log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Maximum retained entries. Older entries are evicted first.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Append-only log holding the most recent `MAX_LOG_ENTRIES` events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vector<GameEvent>,
}

impl ActivityLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, evicting the oldest entries past the cap.
    pub fn push(&mut self, event: GameEvent) {
        self.entries.push_back(event);
        while self.entries.len() > MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.entries.back()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter()
    }
}
