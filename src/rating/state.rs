//! Per-category star counts

use smallvec::SmallVec;
use tracing::debug;

use crate::error::{PanelError, Result};

/// Maximum number of stars a category can hold
pub const MAX_STARS: u8 = 5;

/// Star counts for one panel, one entry per category in display order
///
/// Every entry is kept in `0..=MAX_STARS`. The observed panel has 20
/// categories, so counts stay inline without a heap allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingState {
    counts: SmallVec<[u8; 20]>,
}

impl RatingState {
    /// Create a state with `category_count` entries, all zero
    #[inline]
    pub fn new(category_count: usize) -> Self {
        Self {
            counts: SmallVec::from_elem(0, category_count),
        }
    }

    /// Number of categories tracked
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Current counts in category order
    #[inline]
    pub fn counts(&self) -> &[u8] {
        &self.counts
    }

    /// Resolve a caller-supplied index into a slot, rejecting negatives and overflow
    #[inline]
    fn slot(&self, index: i32) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.counts.len())
            .ok_or(PanelError::OutOfRange {
                index,
                len: self.counts.len(),
            })
    }

    /// Get the star count of one category
    #[inline]
    pub fn get(&self, index: i32) -> Result<i32> {
        let slot = self.slot(index)?;
        Ok(i32::from(self.counts[slot]))
    }

    /// Set the star count of one category
    ///
    /// The index is validated before the value. On error nothing changes.
    pub fn set_count(&mut self, index: i32, value: i32) -> Result<()> {
        let slot = self.slot(index)?;
        let stars = u8::try_from(value)
            .ok()
            .filter(|&v| v <= MAX_STARS)
            .ok_or(PanelError::InvalidValue(value))?;

        debug!(index, from = self.counts[slot], to = stars, "set star count");
        self.counts[slot] = stars;
        Ok(())
    }

    /// Reset one category to zero stars
    #[inline]
    pub fn clear(&mut self, index: i32) -> Result<()> {
        self.set_count(index, 0)
    }

    /// Reset every category to zero stars
    pub fn clear_all(&mut self) {
        debug!(categories = self.counts.len(), "clear all star counts");
        self.counts.iter_mut().for_each(|c| *c = 0);
    }

    /// Sum of all star counts
    #[inline]
    pub fn total(&self) -> i32 {
        self.counts.iter().map(|&c| i32::from(c)).sum()
    }
}
