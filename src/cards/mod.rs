//! Action cards and decks.
//!
//! - `ActionCard`: immutable prompt with intensity, category and optional
//!   timer, punishment and reward
//! - `Deck`: a pool sampled with replacement
//! - `select`: uniform draw honouring optional category/intensity filters

pub mod definition;
pub mod deck;

pub use definition::{ActionCard, CardCategory, Intensity, PunishmentEffect, MOVE_BACK_SPACES};
pub use deck::{
    candidates, default_action_deck, default_punishment_deck, find_by_id, select, Candidates,
    Deck, DrawFilter,
};
