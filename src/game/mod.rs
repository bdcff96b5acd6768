//! Game mode controller.
//!
//! ## Key Types
//!
//! - `GameMode`: which of the two scoring protocols to run
//! - `GameController`: runs a full game and returns a `GameResult`
//! - `RoundTally` / `SumTally`: counters scoped to a round
//! - `GameEvent` / `GameObserver`: progress reporting and pacing

pub mod controller;
pub mod events;
pub mod mode;
pub mod tally;

pub use controller::{GameController, DRAWS_PER_ROUND, MINI_ROUNDS, SUM_ROUNDS};
pub use events::{
    Advance, CardPair, GameEvent, GameObserver, NoopObserver, RecordingObserver, RoundDraws, Step, Tee,
};
pub use mode::{GameMode, ModeError};
pub use tally::{RoundTally, SumTally};
