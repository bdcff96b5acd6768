//! Mini-round resolution and the three-way comparison rule.
//!
//! One rule decides everything in the game: the higher score wins, equal
//! scores tie. It is applied to single-card ranks, to per-round sums and to
//! the final win counts.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ternary outcome of a comparison between the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

/// Outcome of one card-vs-card comparison.
pub type MiniRoundOutcome = Outcome;

/// Outcome of one summed round in sum-of-cards mode.
pub type RoundOutcome = Outcome;

impl Outcome {
    /// Three-way comparison of two scores.
    #[must_use]
    pub fn compare<T: Ord>(player: T, computer: T) -> Self {
        match player.cmp(&computer) {
            Ordering::Greater => Outcome::PlayerWin,
            Ordering::Less => Outcome::ComputerWin,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    PlayerWin,
    ComputerWin,
    Tie,
}

impl GameResult {
    /// Final result from the two win counters.
    #[must_use]
    pub fn from_wins(player_wins: u32, computer_wins: u32) -> Self {
        Outcome::compare(player_wins, computer_wins).into()
    }
}

impl From<Outcome> for GameResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWin => GameResult::PlayerWin,
            Outcome::ComputerWin => GameResult::ComputerWin,
            Outcome::Tie => GameResult::Tie,
        }
    }
}

/// Compare one card per side by rank.
#[must_use]
pub fn resolve(player: &Card, computer: &Card) -> MiniRoundOutcome {
    Outcome::compare(player.rank, computer.rank)
}
