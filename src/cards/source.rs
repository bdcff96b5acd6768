//! Card source: one independent random card per call.

use crate::core::{GameRng, UniformSource};

use super::card::{Card, Rank, RANK_COUNT};
use super::glyphs::GlyphTable;

/// Draws cards with replacement from an endless 13-rank pool.
///
/// There is no deck: every draw is independent of every other draw,
/// for either side.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{CardSource, Rank};
/// use card_duel::core::ScriptedUniform;
///
/// let script = ScriptedUniform::from_ranks(&[Rank::new(9).unwrap()]);
/// let mut source = CardSource::new(script);
///
/// assert_eq!(source.draw().rank.value(), 9);
/// assert_eq!(source.draws(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CardSource<U> {
    uniform: U,
    table: GlyphTable,
    draws: u64,
}

impl CardSource<GameRng> {
    /// Source backed by a seeded `GameRng` and the default spades table.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<U: UniformSource> CardSource<U> {
    /// Source with the default spades glyphs.
    #[must_use]
    pub fn new(uniform: U) -> Self {
        Self::with_table(uniform, GlyphTable::default())
    }

    /// Source with an explicit glyph table.
    #[must_use]
    pub fn with_table(uniform: U, table: GlyphTable) -> Self {
        Self {
            uniform,
            table,
            draws: 0,
        }
    }

    /// Draw one card.
    pub fn draw(&mut self) -> Card {
        let u = self.uniform.next_uniform();
        let index = (u * RANK_COUNT as f64).floor();
        // A compliant source never yields u outside [0, 1).
        let index = if index.is_nan() || index < 0.0 { 0 } else { index as usize };
        let rank = Rank::from_index_clamped(index);
        self.draws += 1;

        let card = Card::new(rank, self.table.glyph(rank));
        log::trace!("draw #{} -> {}", self.draws, card);
        card
    }

    /// Total cards drawn by this source.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// The glyph table in use.
    #[must_use]
    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    /// The underlying uniform source.
    #[must_use]
    pub fn uniform(&self) -> &U {
        &self.uniform
    }
}
