//! The two game-mode state machines.
//!
//! ## Best of three mini-rounds
//!
//! One round of exactly three mini-rounds. Each mini-round draws a card per
//! side, resolves it, and counts the win. The game goes to whoever won more
//! mini-rounds.
//!
//! ## Sum of cards
//!
//! Exactly three rounds of three draws. Each round the ranks are summed per
//! side and the higher sum takes the round. The game goes to whoever took
//! more rounds.
//!
//! Neither mode stops early once the result is decided: a 2-0 lead still
//! plays the third mini-round, and every round draws all three pairs.
//! Within a draw the player's card is always drawn before the computer's.

use crate::cards::{Card, CardSource, GlyphTable};
use crate::core::{GameRng, UniformSource};
use crate::rules::{resolve, GameResult};

use super::events::{Advance, CardPair, GameEvent, GameObserver, RoundDraws};
use super::mode::GameMode;
use super::tally::{RoundTally, SumTally};

/// Mini-rounds in a best-of-three game.
pub const MINI_ROUNDS: u32 = 3;

/// Rounds in a sum-of-cards game.
pub const SUM_ROUNDS: u32 = 3;

/// Draws per side in each sum-of-cards round.
pub const DRAWS_PER_ROUND: u32 = 3;

/// Runs games against a card source.
///
/// ## Example
///
/// ```
/// use card_duel::game::{GameController, GameMode, NoopObserver};
///
/// let mut controller = GameController::seeded(42);
/// let result = controller.start_game(GameMode::SumOfCardsRounds, &mut NoopObserver);
///
/// // 3 rounds x 3 draws x 2 sides
/// assert_eq!(controller.source().draws(), 18);
/// # let _ = result;
/// ```
#[derive(Clone, Debug)]
pub struct GameController<U> {
    source: CardSource<U>,
}

impl GameController<GameRng> {
    /// Controller with a seeded RNG and the default glyphs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(CardSource::seeded(seed))
    }
}

impl<U: UniformSource> GameController<U> {
    /// Controller drawing from `source`.
    #[must_use]
    pub fn new(source: CardSource<U>) -> Self {
        Self { source }
    }

    /// Controller drawing from `uniform` with the given glyphs.
    #[must_use]
    pub fn with_uniform(uniform: U, table: GlyphTable) -> Self {
        Self::new(CardSource::with_table(uniform, table))
    }

    /// The card source.
    #[must_use]
    pub fn source(&self) -> &CardSource<U> {
        &self.source
    }

    /// Play one complete game in `mode`.
    pub fn start_game<O: GameObserver>(&mut self, mode: GameMode, observer: &mut O) -> GameResult {
        log::debug!("starting {}", mode);
        observer.on_event(&GameEvent::GameStarted { mode });

        let tally = match mode {
            GameMode::BestOfThreeMiniRounds => self.best_of_three(observer),
            GameMode::SumOfCardsRounds => self.sum_of_cards(observer),
        };
        let result = tally.result();

        log::debug!(
            "finished {}: {:?} ({} - {})",
            mode,
            result,
            tally.player_wins,
            tally.computer_wins
        );
        observer.on_event(&GameEvent::GameFinished { mode, result, tally });
        result
    }

    /// Play a best-of-three game and return its result.
    pub fn play_best_of_three<O: GameObserver>(&mut self, observer: &mut O) -> GameResult {
        self.start_game(GameMode::BestOfThreeMiniRounds, observer)
    }

    /// Play a sum-of-cards game and return its result.
    pub fn play_sum_of_cards<O: GameObserver>(&mut self, observer: &mut O) -> GameResult {
        self.start_game(GameMode::SumOfCardsRounds, observer)
    }

    fn best_of_three<O: GameObserver>(&mut self, observer: &mut O) -> RoundTally {
        let round = 1;
        let mut tally = RoundTally::new();
        observer.on_event(&GameEvent::RoundStarted { round });

        for mini_round in 1..=MINI_ROUNDS {
            let cards = self.draw_pair(round, mini_round, observer);
            let outcome = resolve(&cards.player, &cards.computer);
            tally.record(outcome);

            log::trace!("mini-round {}: {:?}", mini_round, outcome);
            observer.on_event(&GameEvent::MiniRoundResolved {
                mini_round,
                outcome,
                tally,
            });
        }

        tally
    }

    fn sum_of_cards<O: GameObserver>(&mut self, observer: &mut O) -> RoundTally {
        let mut rounds = RoundTally::new();

        for round in 1..=SUM_ROUNDS {
            observer.on_event(&GameEvent::RoundStarted { round });
            let mut sums = SumTally::new();
            let mut draws = RoundDraws::new();

            for draw in 1..=DRAWS_PER_ROUND {
                let cards = self.draw_pair(round, draw, observer);
                sums.add(&cards.player, &cards.computer);
                draws.push(cards);
                observer.on_event(&GameEvent::SumsUpdated { round, draw, sums });
            }

            let outcome = sums.outcome();
            rounds.record(outcome);

            log::trace!(
                "round {}: {:?} ({} - {})",
                round,
                outcome,
                sums.player_sum,
                sums.computer_sum
            );
            observer.on_event(&GameEvent::RoundResolved {
                round,
                draws,
                sums,
                outcome,
                rounds,
            });
            observer.advance(Advance::RoundEnd { round });
        }

        rounds
    }

    fn draw_pair<O: GameObserver>(&mut self, round: u32, draw: u32, observer: &mut O) -> CardPair {
        observer.advance(Advance::Draw { round, draw });

        let player: Card = self.source.draw();
        let computer: Card = self.source.draw();
        let cards = CardPair { player, computer };

        observer.on_event(&GameEvent::CardsDrawn { round, draw, cards });
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::core::ScriptedUniform;
    use crate::game::events::RecordingObserver;
    use crate::rules::Outcome;

    fn scripted(ranks: &[u8]) -> GameController<ScriptedUniform> {
        let ranks: Vec<Rank> = ranks.iter().map(|&r| Rank::new(r).unwrap()).collect();
        GameController::new(CardSource::new(ScriptedUniform::from_ranks(&ranks)))
    }

    #[test]
    fn test_best_of_three_tie() {
        // player [5, 5, 5] vs computer [3, 7, 5]
        let mut controller = scripted(&[5, 3, 5, 7, 5, 5]);
        let mut recorder = RecordingObserver::new();

        let result = controller.play_best_of_three(&mut recorder);

        assert_eq!(
            recorder.resolutions(),
            vec![Outcome::PlayerWin, Outcome::ComputerWin, Outcome::Tie]
        );
        assert_eq!(result, GameResult::Tie);
    }

    #[test]
    fn test_best_of_three_no_early_exit() {
        let mut controller = scripted(&[13, 1]);
        let mut recorder = RecordingObserver::new();

        let result = controller.play_best_of_three(&mut recorder);

        assert_eq!(result, GameResult::PlayerWin);
        assert_eq!(recorder.resolutions().len(), 3);
        assert_eq!(controller.source().draws(), 6);
    }

    #[test]
    fn test_advance_before_every_draw() {
        let mut controller = scripted(&[2, 9]);
        let mut recorder = RecordingObserver::new();

        controller.play_sum_of_cards(&mut recorder);

        let draws = recorder
            .advances()
            .filter(|at| matches!(at, Advance::Draw { .. }))
            .count();
        let round_ends = recorder
            .advances()
            .filter(|at| matches!(at, Advance::RoundEnd { .. }))
            .count();
        assert_eq!(draws, 9);
        assert_eq!(round_ends, 3);
    }

    #[test]
    fn test_sum_of_cards_round_draws_are_carried() {
        let mut controller = scripted(&[4, 6]);
        let mut recorder = RecordingObserver::new();

        let result = controller.play_sum_of_cards(&mut recorder);

        assert_eq!(result, GameResult::ComputerWin);
        let finished = recorder.events().last().cloned();
        assert_eq!(
            finished,
            Some(GameEvent::GameFinished {
                mode: GameMode::SumOfCardsRounds,
                result: GameResult::ComputerWin,
                tally: RoundTally { player_wins: 0, computer_wins: 3 },
            })
        );
        for event in recorder.events() {
            if let GameEvent::RoundResolved { draws, sums, .. } = event {
                assert_eq!(draws.len(), 3);
                assert_eq!(sums.player_sum, 12);
                assert_eq!(sums.computer_sum, 18);
            }
        }
    }
}
