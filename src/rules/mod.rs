//! Win determination.
//!
//! `resolve` decides a single mini-round; `Outcome::compare` is the same
//! three-way rule for any pair of scores, and `GameResult` is the terminal
//! value a whole game produces.

pub mod resolver;

pub use resolver::{resolve, GameResult, MiniRoundOutcome, Outcome, RoundOutcome};
