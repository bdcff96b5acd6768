//! Ranks and cards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct ranks (Ace through King).
pub const RANK_COUNT: usize = 13;

/// Errors raised while building ranks or glyph tables.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("rank {0} is outside 1..=13")]
    RankOutOfRange(u8),

    #[error("glyph {0:?} appears more than once in the table")]
    DuplicateGlyph(char),
}

/// Card rank in `1..=13`. Ace is 1, King is 13.
///
/// The only way to obtain a `Rank` is through [`Rank::new`] or [`Rank::ALL`],
/// so holding one means the value is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// Lowest rank (Ace).
    pub const MIN: Rank = Rank(1);
    /// Highest rank (King).
    pub const MAX: Rank = Rank(13);

    /// Every rank in ascending order.
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
        Rank(10),
        Rank(11),
        Rank(12),
        Rank(13),
    ];

    /// Validate a raw rank value.
    pub fn new(value: u8) -> Result<Self, CardError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CardError::RankOutOfRange(value))
        }
    }

    /// Rank for a 0-based table index, clamped into range.
    #[must_use]
    pub(crate) fn from_index_clamped(index: usize) -> Self {
        Self::ALL[index.min(RANK_COUNT - 1)]
    }

    /// Numeric value (1-13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// 0-based index into a rank table.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - 1
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A drawn card. Only `rank` takes part in comparisons; `glyph` is decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub glyph: char,
}

impl Card {
    /// Create a card from a rank and its display glyph.
    #[must_use]
    pub const fn new(rank: Rank, glyph: char) -> Self {
        Self { rank, glyph }
    }
}

impl std::fmt::Display for Card {
    /// Format as `🂥 (5)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.glyph, self.rank)
    }
}
