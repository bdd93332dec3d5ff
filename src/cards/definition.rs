//! Action card definitions.
//!
//! Cards are plain values. Drawing copies a card out of its deck; the
//! deck itself never changes on a draw.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Severity tier. Drives the score awarded on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Mild,
    Medium,
    Intense,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Mild, Intensity::Medium, Intensity::Intense];

    /// Points awarded for completing a card of this tier.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Intensity::Mild => 1,
            Intensity::Medium => 2,
            Intensity::Intense => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Intensity::Mild => "mild",
            Intensity::Medium => "medium",
            Intensity::Intense => "intense",
        }
    }
}

impl FromStr for Intensity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(Intensity::Mild),
            "medium" => Ok(Intensity::Medium),
            "intense" => Ok(Intensity::Intense),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardCategory {
    Truth,
    Dare,
    Challenge,
    Punishment,
    Reward,
    Wild,
}

impl CardCategory {
    pub const ALL: [CardCategory; 6] = [
        CardCategory::Truth,
        CardCategory::Dare,
        CardCategory::Challenge,
        CardCategory::Punishment,
        CardCategory::Reward,
        CardCategory::Wild,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardCategory::Truth => "truth",
            CardCategory::Dare => "dare",
            CardCategory::Challenge => "challenge",
            CardCategory::Punishment => "punishment",
            CardCategory::Reward => "reward",
            CardCategory::Wild => "wild",
        }
    }
}

impl FromStr for CardCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserialize an optional filter value, mapping unknown strings to `None`.
///
/// Draw filters are preferences: a category the engine does not know
/// behaves like no filter at all.
pub(crate) fn lenient_filter<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Positional consequence of a drawn punishment card.
///
/// Parsed from the card text: "back" sends the pawn back three spaces,
/// "skip" has no positional effect here (turn skipping belongs to the
/// host's turn order).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PunishmentEffect {
    MoveBack(u8),
    SkipTurn,
    None,
}

/// Spaces a "back" punishment moves the pawn.
pub const MOVE_BACK_SPACES: u8 = 3;

impl PunishmentEffect {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.contains("back") {
            PunishmentEffect::MoveBack(MOVE_BACK_SPACES)
        } else if text.contains("skip") {
            PunishmentEffect::SkipTurn
        } else {
            PunishmentEffect::None
        }
    }
}

/// A drawable prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCard {
    pub id: String,
    pub text: String,
    pub intensity: Intensity,
    pub category: CardCategory,
    #[serde(default)]
    pub timer_seconds: Option<u32>,
    /// Applied if the card is skipped (only when the rules punish skips).
    #[serde(default)]
    pub punishment: Option<String>,
    /// Applied on completion.
    #[serde(default)]
    pub reward: Option<String>,
}

impl ActionCard {
    /// Create a card with no timer, punishment or reward.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        intensity: Intensity,
        category: CardCategory,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            intensity,
            category,
            timer_seconds: None,
            punishment: None,
            reward: None,
        }
    }

    #[must_use]
    pub fn with_timer(mut self, seconds: u32) -> Self {
        self.timer_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_punishment(mut self, punishment: impl Into<String>) -> Self {
        self.punishment = Some(punishment.into());
        self
    }

    #[must_use]
    pub fn with_reward(mut self, reward: impl Into<String>) -> Self {
        self.reward = Some(reward.into());
        self
    }

    /// Does the reward move the pawn forward?
    #[must_use]
    pub fn rewards_forward(&self) -> bool {
        self.reward.as_deref().is_some_and(|r| r.contains("forward"))
    }

    /// Effect of this card when drawn from the punishment deck.
    #[must_use]
    pub fn punishment_effect(&self) -> PunishmentEffect {
        PunishmentEffect::from_text(&self.text)
    }
}
