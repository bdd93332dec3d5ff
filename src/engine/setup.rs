//! Game setup.
//!
//! The host always supplies the player count; nothing is inferred.
//!
//! ```
//! use swirled_out::engine::GameBuilder;
//! use swirled_out::core::Phase;
//!
//! let state = GameBuilder::new()
//!     .player_count(2)
//!     .player_names(["Ana", "Bo"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(state.board_size, 42);
//! assert_eq!(state.phase, Phase::Setup);
//! ```

use tracing::debug;

use crate::board::generate;
use crate::cards::{default_action_deck, default_punishment_deck, ActionCard, Deck};
use crate::core::{EngineError, GameRules, GameState, Player, PlayerId, SetupConfig};

/// Builder for the initial `GameState`.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: SetupConfig,
    action_deck: Option<Deck>,
    punishment_deck: Option<Deck>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: SetupConfig::new(0),
            action_deck: None,
            punishment_deck: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a host-supplied config.
    pub fn from_config(config: SetupConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.num_players = count;
        self
    }

    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn board_size(mut self, size: usize) -> Self {
        self.config.board_size = size;
        self
    }

    pub fn rules(mut self, rules: GameRules) -> Self {
        self.config.rules = rules;
        self
    }

    /// Append a card to the action deck.
    pub fn custom_card(mut self, card: ActionCard) -> Self {
        self.config.custom_cards.push(card);
        self
    }

    /// Replace the built-in action deck.
    pub fn action_deck(mut self, deck: Deck) -> Self {
        self.action_deck = Some(deck);
        self
    }

    /// Replace the built-in punishment deck.
    pub fn punishment_deck(mut self, deck: Deck) -> Self {
        self.punishment_deck = Some(deck);
        self
    }

    /// Validate the config and build the initial state.
    pub fn build(self) -> Result<GameState, EngineError> {
        let config = self.config;
        config.validate()?;

        let mut action_deck = self.action_deck.unwrap_or_else(default_action_deck);
        action_deck.extend(config.custom_cards.iter().cloned());
        if action_deck.is_empty() {
            return Err(EngineError::EmptyActionDeck);
        }
        let punishment_deck = self.punishment_deck.unwrap_or_else(default_punishment_deck);

        let players = PlayerId::all(config.num_players)
            .map(|id| {
                let name = config
                    .player_names
                    .get(id.index())
                    .map(|n| n.trim().to_string())
                    .unwrap_or_else(|| Player::default_name(id));
                Player::new(id, name)
            })
            .collect();

        let board = generate(config.board_size, &action_deck);

        debug!(
            players = config.num_players,
            board_size = config.board_size,
            action_cards = action_deck.len(),
            punishment_cards = punishment_deck.len(),
            "game set up"
        );

        Ok(GameState::new(players, board, action_deck, punishment_deck, config.rules))
    }
}

/// Initial state for `num_players` with every other setting at its default.
pub fn setup(num_players: usize) -> Result<GameState, EngineError> {
    GameBuilder::new().player_count(num_players).build()
}
