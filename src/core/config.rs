//! Game configuration.
//!
//! - `GameRules`: table rules, set at setup and changed only through the
//!   `updateRules` move
//! - `RulesPatch`: partial rules update (shallow merge)
//! - `SetupConfig`: everything the host supplies to start a game; can be
//!   loaded from TOML

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::board::DEFAULT_BOARD_SIZE;
use crate::cards::ActionCard;

/// Seats supported by the setup screen.
pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 6;

/// Board lengths supported by the setup screen.
pub const MIN_BOARD_SIZE: usize = 20;
pub const MAX_BOARD_SIZE: usize = 50;

/// Default per-card timer range, in seconds.
pub const MIN_TIMER_SECONDS: u32 = 30;
pub const MAX_TIMER_SECONDS: u32 = 180;

/// How the winner is chosen once the game ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinCondition {
    /// Whoever reaches the finish tile.
    #[default]
    FirstToFinish,
    /// Most completed actions when the game ends.
    MostActions,
    /// Highest score when the game ends.
    HighestScore,
}

/// Table rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameRules {
    pub win_condition: WinCondition,
    pub allow_skip: bool,
    pub punishment_on_skip: bool,
    pub timer_enabled: bool,
    pub default_timer_seconds: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            win_condition: WinCondition::FirstToFinish,
            allow_skip: true,
            punishment_on_skip: true,
            timer_enabled: true,
            default_timer_seconds: 60,
        }
    }
}

impl GameRules {
    /// Shallow-merge the fields set in `patch`.
    pub fn apply(&mut self, patch: &RulesPatch) {
        if let Some(win_condition) = patch.win_condition {
            self.win_condition = win_condition;
        }
        if let Some(allow_skip) = patch.allow_skip {
            self.allow_skip = allow_skip;
        }
        if let Some(punishment_on_skip) = patch.punishment_on_skip {
            self.punishment_on_skip = punishment_on_skip;
        }
        if let Some(timer_enabled) = patch.timer_enabled {
            self.timer_enabled = timer_enabled;
        }
        if let Some(seconds) = patch.default_timer_seconds {
            self.default_timer_seconds = seconds;
        }
    }

    /// Timer to arm for `card`, if timers are on.
    #[must_use]
    pub fn timer_for(&self, card: &ActionCard) -> Option<u32> {
        self.timer_enabled
            .then(|| card.timer_seconds.unwrap_or(self.default_timer_seconds))
    }
}

/// Partial rules update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesPatch {
    pub win_condition: Option<WinCondition>,
    pub allow_skip: Option<bool>,
    pub punishment_on_skip: Option<bool>,
    pub timer_enabled: Option<bool>,
    pub default_timer_seconds: Option<u32>,
}

/// Host-supplied setup.
///
/// The player count is always explicit; names are optional and default
/// to "Player N".
///
/// ```
/// use swirled_out::core::SetupConfig;
///
/// let config = SetupConfig::from_toml_str(r#"
///     numPlayers = 3
///     playerNames = ["Ana", "Bo", "Cy"]
///
///     [rules]
///     winCondition = "highest_score"
/// "#).unwrap();
///
/// assert_eq!(config.num_players, 3);
/// assert_eq!(config.board_size, 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupConfig {
    pub num_players: usize,
    #[serde(default = "default_board_size")]
    pub board_size: usize,
    #[serde(default)]
    pub player_names: Vec<String>,
    #[serde(default)]
    pub rules: GameRules,
    /// Extra cards appended to the built-in action deck.
    #[serde(default)]
    pub custom_cards: Vec<ActionCard>,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl SetupConfig {
    /// Config for `num_players` with defaults everywhere else.
    #[must_use]
    pub fn new(num_players: usize) -> Self {
        Self {
            num_players,
            board_size: DEFAULT_BOARD_SIZE,
            player_names: Vec::new(),
            rules: GameRules::default(),
            custom_cards: Vec::new(),
        }
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, EngineError> {
        let config: SetupConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the ranges the setup screen enforces.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(EngineError::InvalidPlayerCount {
                got: self.num_players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(EngineError::InvalidBoardSize {
                got: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        let timer = self.rules.default_timer_seconds;
        if !(MIN_TIMER_SECONDS..=MAX_TIMER_SECONDS).contains(&timer) {
            return Err(EngineError::InvalidTimer {
                got: timer,
                min: MIN_TIMER_SECONDS,
                max: MAX_TIMER_SECONDS,
            });
        }
        if !self.player_names.is_empty() {
            if self.player_names.len() != self.num_players {
                return Err(EngineError::PlayerNameCount {
                    expected: self.num_players,
                    got: self.player_names.len(),
                });
            }
            if let Some(seat) = self.player_names.iter().position(|n| n.trim().is_empty()) {
                return Err(EngineError::BlankPlayerName { seat });
            }
        }
        Ok(())
    }
}
