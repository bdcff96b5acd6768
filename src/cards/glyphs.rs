//! Rank to glyph lookup.
//!
//! The Unicode "Playing Cards" block lays each suit out as a row of 14
//! code points: Ace through Ten, Jack, Knight, Queen, King. The Knight
//! has no place in a 13-rank game, so every table skips it.

use serde::{Deserialize, Serialize};

use super::card::{CardError, Rank, RANK_COUNT};

const SPADES: [char; RANK_COUNT] = [
    '\u{1F0A1}', '\u{1F0A2}', '\u{1F0A3}', '\u{1F0A4}', '\u{1F0A5}', '\u{1F0A6}', '\u{1F0A7}',
    '\u{1F0A8}', '\u{1F0A9}', '\u{1F0AA}', '\u{1F0AB}', '\u{1F0AD}', '\u{1F0AE}',
];

const HEARTS: [char; RANK_COUNT] = [
    '\u{1F0B1}', '\u{1F0B2}', '\u{1F0B3}', '\u{1F0B4}', '\u{1F0B5}', '\u{1F0B6}', '\u{1F0B7}',
    '\u{1F0B8}', '\u{1F0B9}', '\u{1F0BA}', '\u{1F0BB}', '\u{1F0BD}', '\u{1F0BE}',
];

const DIAMONDS: [char; RANK_COUNT] = [
    '\u{1F0C1}', '\u{1F0C2}', '\u{1F0C3}', '\u{1F0C4}', '\u{1F0C5}', '\u{1F0C6}', '\u{1F0C7}',
    '\u{1F0C8}', '\u{1F0C9}', '\u{1F0CA}', '\u{1F0CB}', '\u{1F0CD}', '\u{1F0CE}',
];

const CLUBS: [char; RANK_COUNT] = [
    '\u{1F0D1}', '\u{1F0D2}', '\u{1F0D3}', '\u{1F0D4}', '\u{1F0D5}', '\u{1F0D6}', '\u{1F0D7}',
    '\u{1F0D8}', '\u{1F0D9}', '\u{1F0DA}', '\u{1F0DB}', '\u{1F0DD}', '\u{1F0DE}',
];

/// Which suit row of the Unicode block to display cards with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    #[default]
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// Glyph table for this suit.
    #[must_use]
    pub const fn glyphs(self) -> GlyphTable {
        GlyphTable(match self {
            Suit::Spades => SPADES,
            Suit::Hearts => HEARTS,
            Suit::Diamonds => DIAMONDS,
            Suit::Clubs => CLUBS,
        })
    }
}

/// Immutable rank to glyph bijection.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{GlyphTable, Rank};
///
/// let table = GlyphTable::default();
/// let king = Rank::MAX;
///
/// assert_eq!(table.glyph(king), '\u{1F0AE}');
/// assert_eq!(table.rank_of('\u{1F0AE}'), Some(king));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphTable([char; RANK_COUNT]);

impl GlyphTable {
    /// Build a custom table, indexed Ace first.
    ///
    /// Fails if two ranks would share a glyph.
    pub fn new(glyphs: [char; RANK_COUNT]) -> Result<Self, CardError> {
        for (i, glyph) in glyphs.iter().enumerate() {
            if glyphs[..i].contains(glyph) {
                return Err(CardError::DuplicateGlyph(*glyph));
            }
        }
        Ok(Self(glyphs))
    }

    /// Glyph for a rank.
    #[must_use]
    pub fn glyph(&self, rank: Rank) -> char {
        self.0[rank.index() as usize]
    }

    /// Inverse lookup.
    #[must_use]
    pub fn rank_of(&self, glyph: char) -> Option<Rank> {
        self.0
            .iter()
            .position(|&g| g == glyph)
            .map(Rank::from_index_clamped)
    }

    /// Iterate `(rank, glyph)` pairs, Ace first.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, char)> + '_ {
        Rank::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Suit::Spades.glyphs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[test]
    fn test_every_suit_is_a_bijection() {
        for suit in SUITS {
            let table = suit.glyphs();
            assert!(GlyphTable::new(table.0).is_ok(), "{suit:?} has duplicates");
            for (rank, glyph) in table.iter() {
                assert_eq!(table.rank_of(glyph), Some(rank));
            }
        }
    }

    #[test]
    fn test_knight_is_skipped() {
        let table = GlyphTable::default();
        assert_eq!(table.glyph(Rank::new(11).unwrap()), '\u{1F0AB}');
        assert_eq!(table.glyph(Rank::new(12).unwrap()), '\u{1F0AD}');
        assert_eq!(table.rank_of('\u{1F0AC}'), None);
    }

    #[test]
    fn test_duplicate_glyph_rejected() {
        let mut glyphs = SPADES;
        glyphs[12] = glyphs[0];
        assert_eq!(
            GlyphTable::new(glyphs),
            Err(CardError::DuplicateGlyph('\u{1F0A1}'))
        );
    }

    #[test]
    fn test_custom_table() {
        let glyphs = ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];
        let table = GlyphTable::new(glyphs).unwrap();
        assert_eq!(table.glyph(Rank::MIN), 'A');
        assert_eq!(table.rank_of('T'), Some(Rank::new(10).unwrap()));
    }
}
