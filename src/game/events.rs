//! Progress events and the observer seam.
//!
//! The controller never prints or reads anything. It reports what happened
//! as `GameEvent` values and asks the observer to `advance` before every
//! draw; the console front end turns those into text and "press ENTER"
//! prompts, tests record them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::rules::{GameResult, MiniRoundOutcome, RoundOutcome};

use super::mode::GameMode;
use super::tally::{RoundTally, SumTally};

/// One draw: a card for each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPair {
    pub player: Card,
    pub computer: Card,
}

/// The three draws of a sum-of-cards round.
pub type RoundDraws = SmallVec<[CardPair; 3]>;

/// Something observable that happened during a game.
///
/// Indices are 1-based, matching what a player sees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        mode: GameMode,
    },
    /// A round began. Best-of-three mode has a single round.
    RoundStarted {
        round: u32,
    },
    CardsDrawn {
        round: u32,
        draw: u32,
        cards: CardPair,
    },
    /// Best-of-three only.
    MiniRoundResolved {
        mini_round: u32,
        outcome: MiniRoundOutcome,
        tally: RoundTally,
    },
    /// Sum-of-cards only.
    SumsUpdated {
        round: u32,
        draw: u32,
        sums: SumTally,
    },
    /// Sum-of-cards only. `rounds` already includes this round.
    RoundResolved {
        round: u32,
        draws: RoundDraws,
        sums: SumTally,
        outcome: RoundOutcome,
        rounds: RoundTally,
    },
    GameFinished {
        mode: GameMode,
        result: GameResult,
        tally: RoundTally,
    },
}

/// Pacing points where the front end may block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// About to draw a card for each side.
    Draw { round: u32, draw: u32 },
    /// A sum-of-cards round just finished.
    RoundEnd { round: u32 },
}

/// Receives progress from a running game.
///
/// Both methods default to doing nothing. Whatever `advance` does
/// (block on input, sleep, nothing), the game continues afterwards.
pub trait GameObserver {
    fn on_event(&mut self, _event: &GameEvent) {}

    fn advance(&mut self, _at: Advance) {}
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }

    fn advance(&mut self, at: Advance) {
        (**self).advance(at);
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Either a progress event or a pacing point, in the order they happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Event(GameEvent),
    Advance(Advance),
}

/// Observer that keeps everything it sees.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    steps: Vec<Step>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything observed, in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Only the events.
    pub fn events(&self) -> impl Iterator<Item = &GameEvent> {
        self.steps.iter().filter_map(|step| match step {
            Step::Event(event) => Some(event),
            Step::Advance(_) => None,
        })
    }

    /// Only the pacing points.
    pub fn advances(&self) -> impl Iterator<Item = Advance> + '_ {
        self.steps.iter().filter_map(|step| match step {
            Step::Advance(at) => Some(*at),
            Step::Event(_) => None,
        })
    }

    /// Every card pair drawn.
    #[must_use]
    pub fn draws(&self) -> Vec<CardPair> {
        self.events()
            .filter_map(|event| match event {
                GameEvent::CardsDrawn { cards, .. } => Some(*cards),
                _ => None,
            })
            .collect()
    }

    /// Mini-round outcomes in order (best-of-three).
    #[must_use]
    pub fn resolutions(&self) -> Vec<MiniRoundOutcome> {
        self.events()
            .filter_map(|event| match event {
                GameEvent::MiniRoundResolved { outcome, .. } => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    /// Round outcomes in order (sum-of-cards).
    #[must_use]
    pub fn round_outcomes(&self) -> Vec<RoundOutcome> {
        self.events()
            .filter_map(|event| match event {
                GameEvent::RoundResolved { outcome, .. } => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    /// Consume the recorder, keeping the events only.
    #[must_use]
    pub fn into_events(self) -> Vec<GameEvent> {
        self.steps
            .into_iter()
            .filter_map(|step| match step {
                Step::Event(event) => Some(event),
                Step::Advance(_) => None,
            })
            .collect()
    }
}

impl GameObserver for RecordingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        self.steps.push(Step::Event(event.clone()));
    }

    fn advance(&mut self, at: Advance) {
        self.steps.push(Step::Advance(at));
    }
}

/// Forwards to two observers, `first` before `second`.
#[derive(Debug)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A: GameObserver, B: GameObserver> GameObserver for Tee<A, B> {
    fn on_event(&mut self, event: &GameEvent) {
        self.first.on_event(event);
        self.second.on_event(event);
    }

    fn advance(&mut self, at: Advance) {
        self.first.advance(at);
        self.second.advance(at);
    }
}
