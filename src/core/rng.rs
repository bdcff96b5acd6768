//! Uniform randomness behind a swappable capability.
//!
//! ## Key Features
//!
//! - **Capability trait**: the card source only ever asks for `next_uniform()`
//! - **Deterministic**: `GameRng` with the same seed produces identical draws
//! - **Serializable**: O(1) state capture and restore for transcripts
//! - **Scripted**: `ScriptedUniform` replays fixed values for exact scenarios
//!
//! ```
//! use card_duel::core::{GameRng, UniformSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let u = a.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//! assert_eq!(u, b.next_uniform());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Rank, RANK_COUNT};

/// Source of uniform samples in `[0, 1)`.
///
/// This is the only randomness the engine consumes. Implementations must
/// never return a value outside `[0, 1)`.
pub trait UniformSource {
    /// Next sample in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Seeded RNG used for real games.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed stays readable through [`GameRng::seed`] so a game can be
    /// replayed later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl UniformSource for GameRng {
    fn next_uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG state for transcripts.
///
/// Uses the ChaCha8 word position, so the size does not depend on how many
/// samples were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed list of uniform samples, cycling when exhausted.
///
/// Draw order in a game is player first, then computer, so a scripted game
/// is written as interleaved `[player, computer, player, computer, ...]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedUniform {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedUniform {
    /// Replay the given samples. Each must lie in `[0, 1)`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        debug_assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
        Self { values, cursor: 0 }
    }

    /// Replay samples that make the card source produce exactly these ranks.
    ///
    /// Each rank maps to the middle of its `1/13` slice of `[0, 1)`.
    #[must_use]
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let values = ranks
            .iter()
            .map(|rank| (f64::from(rank.index()) + 0.5) / RANK_COUNT as f64)
            .collect();
        Self::new(values)
    }
}

impl UniformSource for ScriptedUniform {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(values: &[u8]) -> Vec<Rank> {
        values.iter().map(|&v| Rank::new(v).unwrap()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_uniform(), rng2.next_uniform());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_uniform()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_uniform()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_samples_in_unit_interval() {
        let mut rng = GameRng::new(7);
        for _ in 0..10_000 {
            let u = rng.next_uniform();
            assert!((0.0..1.0).contains(&u), "sample {u} out of range");
        }
    }

    #[test]
    fn test_entropy_seed_is_reported() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();
        assert_eq!(original.next_uniform(), replay.next_uniform());
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.next_uniform();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_uniform()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_uniform()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut scripted = ScriptedUniform::new(vec![0.1, 0.2]);
        assert_eq!(scripted.next_uniform(), 0.1);
        assert_eq!(scripted.next_uniform(), 0.2);
        assert_eq!(scripted.next_uniform(), 0.1);
        assert_eq!(scripted.cursor, 3);
    }

    #[test]
    fn test_scripted_empty_is_zero() {
        let mut scripted = ScriptedUniform::default();
        assert_eq!(scripted.next_uniform(), 0.0);
    }

    #[test]
    fn test_from_ranks_lands_on_rank() {
        let mut scripted = ScriptedUniform::from_ranks(&ranks(&[1, 7, 13]));
        for expected in [0usize, 6, 12] {
            let index = (scripted.next_uniform() * RANK_COUNT as f64).floor() as usize;
            assert_eq!(index, expected);
        }
    }
}
