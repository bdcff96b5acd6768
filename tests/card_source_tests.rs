//! Card source tests.
//!
//! Draws must stay in range, carry the glyph of their rank, and be spread
//! evenly across all thirteen ranks.

use card_duel::cards::{CardSource, GlyphTable, Rank, Suit, RANK_COUNT};
use card_duel::core::{GameRng, ScriptedUniform, UniformSource};

/// Counts per rank over many seeded draws stay close to uniform.
///
/// 13,000 draws give an expected 1,000 per rank with a standard deviation
/// near 30; the band below is more than six deviations wide on each side.
#[test]
fn test_distribution_is_uniform() {
    let mut source = CardSource::seeded(42);
    let mut counts = [0u32; RANK_COUNT];

    for _ in 0..13_000 {
        let card = source.draw();
        counts[card.rank.index() as usize] += 1;
    }

    for (i, &count) in counts.iter().enumerate() {
        assert!(
            (800..=1200).contains(&count),
            "rank {} drawn {} times",
            i + 1,
            count
        );
    }
}

#[test]
fn test_glyph_matches_table_for_every_suit() {
    for suit in [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
        let table = suit.glyphs();
        let mut source = CardSource::with_table(GameRng::new(3), table);
        for _ in 0..500 {
            let card = source.draw();
            assert_eq!(table.glyph(card.rank), card.glyph);
            assert_eq!(table.rank_of(card.glyph), Some(card.rank));
        }
    }
}

#[test]
fn test_every_rank_reachable_by_script() {
    let mut source = CardSource::new(ScriptedUniform::from_ranks(&Rank::ALL));
    for expected in Rank::ALL {
        let card = source.draw();
        assert_eq!(card.rank, expected);
        assert_eq!(card.glyph, GlyphTable::default().glyph(expected));
    }
}

#[test]
fn test_draws_are_independent_of_side() {
    // The source keeps no memory: the same uniform value always gives the
    // same card, no matter how many times that card was already drawn.
    let mut source = CardSource::new(ScriptedUniform::new(vec![0.5]));
    let first = source.draw();
    for _ in 0..50 {
        assert_eq!(source.draw(), first);
    }
    assert_eq!(source.draws(), 51);
}

#[test]
fn test_custom_uniform_source() {
    struct Counter(u32);
    impl UniformSource for Counter {
        fn next_uniform(&mut self) -> f64 {
            let u = f64::from(self.0 % 13) / 13.0 + 0.01;
            self.0 += 1;
            u
        }
    }

    let mut source = CardSource::new(Counter(0));
    let ranks: Vec<u8> = (0..13).map(|_| source.draw().rank.value()).collect();
    assert_eq!(ranks, (1..=13).collect::<Vec<u8>>());
}
