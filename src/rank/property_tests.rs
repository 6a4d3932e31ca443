//! Property tests for rank derivation

use proptest::prelude::*;

use crate::rank::{rank_for, Rank, RANK_THRESHOLDS};

proptest! {
    /// Lowering the total never improves the rank
    #[test]
    fn prop_rank_monotonic(a in any::<i32>(), b in any::<i32>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank_for(lo) <= rank_for(hi));
    }

    /// Every total inside a band maps to that band's rank
    #[test]
    fn prop_rank_matches_band(total in -50..=150i32) {
        let expected = match total {
            t if t >= 76 => Rank::S,
            t if t >= 61 => Rank::A,
            t if t >= 46 => Rank::B,
            t if t >= 31 => Rank::C,
            t if t >= 16 => Rank::D,
            _ => Rank::E,
        };
        prop_assert_eq!(rank_for(total), expected);
    }

    /// One below a breakpoint drops exactly one tier
    #[test]
    fn prop_breakpoint_edges(i in 0usize..RANK_THRESHOLDS.len()) {
        let (min, rank) = RANK_THRESHOLDS[i];
        prop_assert_eq!(rank_for(min), rank);
        prop_assert_eq!(rank_for(min - 1).tier() + 1, rank.tier());
    }
}
