//! # card-duel
//!
//! A human vs. computer high-card duel. Each step draws one card per side
//! and the higher rank wins; two scoring modes aggregate those comparisons
//! into a game result.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: all randomness comes from a `UniformSource`.
//!    Seed it for replays, script it for exact scenarios.
//!
//! 2. **No I/O in the engine**: the controller reports `GameEvent`s and
//!    asks its `GameObserver` to `advance` before each draw. Printing and
//!    reading input live in the `console` module.
//!
//! 3. **Literal rules**: both modes always play every mini-round and every
//!    round, even once the winner is certain.
//!
//! ## Modules
//!
//! - `core`: uniform randomness (`GameRng`, `ScriptedUniform`)
//! - `cards`: ranks, glyph tables, the card source
//! - `rules`: mini-round resolution and the three-way comparison
//! - `game`: game modes, tallies, events, the controller
//! - `console`: prompts, rendering, logging, transcripts (feature `cli`)

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
#[cfg(feature = "cli")]
pub mod console;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, ScriptedUniform, UniformSource};

pub use crate::cards::{Card, CardError, CardSource, GlyphTable, Rank, Suit, RANK_COUNT};

pub use crate::rules::{resolve, GameResult, MiniRoundOutcome, Outcome, RoundOutcome};

pub use crate::game::{
    Advance, CardPair, GameController, GameEvent, GameMode, GameObserver, ModeError,
    NoopObserver, RecordingObserver, RoundTally, SumTally,
};
