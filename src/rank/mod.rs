//! Rank derivation module
//!
//! Maps an aggregate star total to a letter rank.

mod calculator;

#[cfg(test)]
mod property_tests;

pub use calculator::*;
