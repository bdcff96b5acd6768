//! Game mode selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected raw mode selection.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("unknown game mode {0:?}, expected 1 or 2")]
    Unknown(String),
}

/// Scoring protocol, fixed for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One round of three mini-rounds; most mini-round wins takes the game.
    BestOfThreeMiniRounds = 1,
    /// Three rounds of three draws; the higher rank sum takes each round.
    SumOfCardsRounds = 2,
}

impl GameMode {
    /// The number a player types to select this mode.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Short description used in menus and headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            GameMode::BestOfThreeMiniRounds => "Best of 3 mini-rounds",
            GameMode::SumOfCardsRounds => "Sum of cards",
        }
    }
}

impl TryFrom<u8> for GameMode {
    type Error = ModeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GameMode::BestOfThreeMiniRounds),
            2 => Ok(GameMode::SumOfCardsRounds),
            other => Err(ModeError::Unknown(other.to_string())),
        }
    }
}

impl FromStr for GameMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| ModeError::Unknown(trimmed.to_string()))
            .and_then(GameMode::try_from)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game Mode {}: {}", self.number(), self.title())
    }
}
