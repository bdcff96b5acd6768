//! Text rendering of game progress.

use std::io::{self, Write};

use colored::Colorize;

use crate::game::{Advance, GameEvent, GameMode, GameObserver, RoundTally, SUM_ROUNDS};
use crate::rules::{GameResult, Outcome};

use super::config::SessionConfig;
use super::prompt::Prompt;
use super::ConsoleError;

/// Pacing prompt shown before every draw.
pub const DRAW_PROMPT: &str = "Press ENTER to draw cards.";

/// Pacing prompt shown between sum-of-cards rounds.
pub const NEXT_ROUND_PROMPT: &str = "Press ENTER to continue to the next round.";

#[derive(Clone, Copy)]
enum Tone {
    Good,
    Bad,
    Even,
    Heading,
}

/// Console observer: writes the game as text and paces it on ENTER.
///
/// Write failures do not interrupt the game; the first one is kept and
/// handed back by [`ConsoleSession::finish`].
pub struct ConsoleSession<P, W> {
    prompt: P,
    out: W,
    pause: bool,
    color: bool,
    mode: Option<GameMode>,
    failure: Option<io::Error>,
}

impl<P: Prompt, W: Write> ConsoleSession<P, W> {
    pub fn new(prompt: P, out: W, config: &SessionConfig) -> Self {
        Self {
            prompt,
            out,
            pause: config.pause,
            color: config.color,
            mode: None,
            failure: None,
        }
    }

    /// Tear down, returning the prompt and writer or the first write error.
    pub fn finish(self) -> Result<(P, W), ConsoleError> {
        match self.failure {
            Some(err) => Err(err.into()),
            None => Ok((self.prompt, self.out)),
        }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Good => text.green().to_string(),
            Tone::Bad => text.red().to_string(),
            Tone::Even => text.yellow().to_string(),
            Tone::Heading => text.bold().to_string(),
        }
    }

    fn line(&mut self, text: &str) {
        if self.failure.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            log::warn!("console write failed: {err}");
            self.failure = Some(err);
        }
    }

    fn wait(&mut self, message: &str) {
        if !self.pause {
            return;
        }
        match self.prompt.read_line(message) {
            Ok(Some(_)) => {}
            Ok(None) => {
                log::info!("input closed, continuing without pauses");
                self.pause = false;
            }
            Err(err) => {
                log::warn!("pacing prompt failed, continuing without pauses: {err}");
                self.pause = false;
            }
        }
    }

    fn outcome_line(&self, outcome: Outcome, win: &str, loss: &str, tie: &str) -> String {
        match outcome {
            Outcome::PlayerWin => self.paint(win, Tone::Good),
            Outcome::ComputerWin => self.paint(loss, Tone::Bad),
            Outcome::Tie => self.paint(tie, Tone::Even),
        }
    }

    fn result_line(&self, result: GameResult) -> String {
        self.outcome_line(
            match result {
                GameResult::PlayerWin => Outcome::PlayerWin,
                GameResult::ComputerWin => Outcome::ComputerWin,
                GameResult::Tie => Outcome::Tie,
            },
            "You won the game!",
            "Computer won the game!",
            "The game is a tie!",
        )
    }

    fn render(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted { mode } => {
                self.mode = Some(*mode);
                let heading = self.paint(&mode.to_string(), Tone::Heading);
                self.line(&format!("\n{heading}"));
            }
            GameEvent::RoundStarted { round } => {
                if self.mode == Some(GameMode::SumOfCardsRounds) {
                    let heading = self.paint(&format!("Round {round}"), Tone::Heading);
                    self.line(&format!("\n{heading}"));
                }
            }
            GameEvent::CardsDrawn { cards, .. } => {
                self.line(&format!("You drew: {}", cards.player));
                self.line(&format!("Computer drew: {}", cards.computer));
            }
            GameEvent::MiniRoundResolved { outcome, tally, .. } => {
                let text = self.outcome_line(
                    *outcome,
                    "You win this mini-round!",
                    "Computer wins this mini-round!",
                    "Mini-round is a tie!",
                );
                self.line(&text);
                self.line(&format!(
                    "Score - You: {} Computer: {}",
                    tally.player_wins, tally.computer_wins
                ));
            }
            GameEvent::SumsUpdated { sums, .. } => {
                self.line(&format!(
                    "Current sum - You: {} Computer: {}",
                    sums.player_sum, sums.computer_sum
                ));
            }
            GameEvent::RoundResolved { round, outcome, .. } => {
                let text = self.outcome_line(
                    *outcome,
                    &format!("You win Round {round}!"),
                    &format!("Computer wins Round {round}!"),
                    &format!("Round {round} is a tie!"),
                );
                self.line(&text);
            }
            GameEvent::GameFinished { mode, result, tally } => {
                self.finished(*mode, *result, *tally);
            }
        }
    }

    fn finished(&mut self, mode: GameMode, result: GameResult, tally: RoundTally) {
        let verdict = self.result_line(result);
        match mode {
            GameMode::BestOfThreeMiniRounds => self.line(&format!("\n{verdict}")),
            GameMode::SumOfCardsRounds => {
                self.line(&format!(
                    "\nFinal Score - You: {} Computer: {}",
                    tally.player_wins, tally.computer_wins
                ));
                self.line(&verdict);
            }
        }
    }
}

impl<P: Prompt, W: Write> GameObserver for ConsoleSession<P, W> {
    fn on_event(&mut self, event: &GameEvent) {
        self.render(event);
    }

    fn advance(&mut self, at: Advance) {
        match at {
            Advance::Draw { draw, .. } => {
                if self.mode == Some(GameMode::BestOfThreeMiniRounds) {
                    let heading = self.paint(&format!("Mini-round {draw}"), Tone::Heading);
                    self.line(&format!("\n{heading}"));
                }
                self.wait(DRAW_PROMPT);
            }
            Advance::RoundEnd { round } if round < SUM_ROUNDS => self.wait(NEXT_ROUND_PROMPT),
            Advance::RoundEnd { .. } => {}
        }
    }
}
