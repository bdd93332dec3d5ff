//! Rules the host consumes.
//!
//! - `TurnOrder`/`RoundRobin`: who plays next
//! - `GameResult`/`end_if`: whether and how the game ended
//! - `standings`: players ranked under the active win condition

pub mod engine;
pub mod victory;

pub use engine::{GameResult, RoundRobin, TurnContext, TurnOrder};
pub use victory::{end_if, standings, Standing};
