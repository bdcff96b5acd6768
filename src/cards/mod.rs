//! Card system: ranks, glyph tables, and the random card source.
//!
//! ## Key Types
//!
//! - `Rank`: validated rank in `1..=13`
//! - `Card`: rank plus display glyph
//! - `GlyphTable`: immutable rank to glyph bijection, one per `Suit`
//! - `CardSource`: draws independent cards with replacement

pub mod card;
pub mod glyphs;
pub mod source;

pub use card::{Card, CardError, Rank, RANK_COUNT};
pub use glyphs::{GlyphTable, Suit};
pub use source::CardSource;
