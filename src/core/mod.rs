//! Core engine plumbing: the uniform randomness capability and its sources.
//!
//! Everything random in a game flows through `UniformSource`, so swapping
//! `GameRng` for `ScriptedUniform` makes a whole game deterministic.

pub mod rng;

pub use rng::{GameRng, GameRngState, ScriptedUniform, UniformSource};
