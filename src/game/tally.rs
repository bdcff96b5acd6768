//! Per-round counters.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::{GameResult, Outcome};

/// Win counters for one side against the other.
///
/// Counts mini-round wins in best-of-three mode and round wins in
/// sum-of-cards mode. Ties increment neither side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTally {
    pub player_wins: u32,
    pub computer_wins: u32,
}

impl RoundTally {
    /// Empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Tie => {}
        }
    }

    /// Final result by the three-way rule.
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::from_wins(self.player_wins, self.computer_wins)
    }
}

/// Running rank sums inside one sum-of-cards round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumTally {
    pub player_sum: u32,
    pub computer_sum: u32,
}

impl SumTally {
    /// Zeroed sums.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one card per side.
    pub fn add(&mut self, player: &Card, computer: &Card) {
        self.player_sum += u32::from(player.rank.value());
        self.computer_sum += u32::from(computer.rank.value());
    }

    /// Who took the round.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome::compare(self.player_sum, self.computer_sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn card(value: u8) -> Card {
        Card::new(Rank::new(value).unwrap(), '?')
    }

    #[test]
    fn test_ties_count_for_nobody() {
        let mut tally = RoundTally::new();
        tally.record(Outcome::PlayerWin);
        tally.record(Outcome::Tie);
        tally.record(Outcome::ComputerWin);
        assert_eq!(tally, RoundTally { player_wins: 1, computer_wins: 1 });
        assert_eq!(tally.result(), GameResult::Tie);
    }

    #[test]
    fn test_sum_tally() {
        let mut sums = SumTally::new();
        sums.add(&card(13), &card(1));
        sums.add(&card(2), &card(12));
        assert_eq!(sums.player_sum, 15);
        assert_eq!(sums.computer_sum, 13);
        assert_eq!(sums.outcome(), Outcome::PlayerWin);
    }
}
