//! Letter rank thresholds

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Letter rank shown next to the panel, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rank {
    S,
    A,
    B,
    C,
    D,
    E,
}

/// Minimum total for each rank, descending. Anything below the last entry is `E`.
///
/// These breakpoints are fixed and do not scale with the number of categories.
pub const RANK_THRESHOLDS: [(i32, Rank); 5] = [
    (76, Rank::S),
    (61, Rank::A),
    (46, Rank::B),
    (31, Rank::C),
    (16, Rank::D),
];

impl Rank {
    /// All ranks from best to worst
    pub const ALL: [Rank; 6] = [Rank::S, Rank::A, Rank::B, Rank::C, Rank::D, Rank::E];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
            Rank::E => "E",
        }
    }

    /// Tier number, 5 for `S` down to 0 for `E`
    #[inline]
    pub fn tier(self) -> u8 {
        match self {
            Rank::S => 5,
            Rank::A => 4,
            Rank::B => 3,
            Rank::C => 2,
            Rank::D => 1,
            Rank::E => 0,
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `S` compares greatest
impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tier().cmp(&other.tier())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank for an aggregate star total
///
/// Defined for every integer; negative totals rank `E`.
#[inline]
pub fn rank_for(total: i32) -> Rank {
    RANK_THRESHOLDS
        .iter()
        .find(|(min, _)| total >= *min)
        .map(|&(_, rank)| rank)
        .unwrap_or(Rank::E)
}
