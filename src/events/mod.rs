//! Game events and the bounded activity log.

pub mod event;
pub mod log;

pub use event::{EventData, EventKind, GameEvent};
pub use log::{ActivityLog, MAX_LOG_ENTRIES};
