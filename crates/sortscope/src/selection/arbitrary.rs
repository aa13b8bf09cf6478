//! Arbitrary (per-index mask) filter.

// External dependencies
use tracing::debug;

// Internal dependencies
use crate::primitives::bitset::{SelectionMask, SetIndices};
use crate::primitives::errors::SortError;

/// Selects the indices whose flag is set.
///
/// Flags default to enabled. The mask follows the length of the sequence:
/// growing appends enabled flags, shrinking truncates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbitraryFilter {
    mask: SelectionMask,
}

impl ArbitraryFilter {
    /// Filter over `len` elements, all enabled.
    pub fn new(len: usize) -> Result<Self, SortError> {
        Ok(Self {
            mask: SelectionMask::all_set(len)?,
        })
    }

    /// Filter with explicit flags, one per index.
    pub fn from_flags(flags: &[bool]) -> Result<Self, SortError> {
        let mut mask = SelectionMask::empty(flags.len())?;
        for (index, &flag) in flags.iter().enumerate() {
            mask.set(index, flag)?;
        }
        Ok(Self { mask })
    }

    /// Number of flags (tracks the sequence length).
    #[inline]
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    /// Check if the filter holds no flags.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Whether `index` is selected.
    pub fn is_enabled(&self, index: usize) -> Result<bool, SortError> {
        self.mask.get(index)
    }

    /// Select or deselect `index`.
    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<(), SortError> {
        self.mask.set(index, enabled)
    }

    /// Number of selected indices.
    pub fn enabled_count(&self) -> usize {
        self.mask.count_set()
    }

    /// Follow a change of the sequence length.
    pub fn resize(&mut self, len: usize) -> Result<(), SortError> {
        if len != self.mask.len() {
            debug!(from = self.mask.len(), to = len, "resizing selection mask");
        }
        self.mask.resize(len, true)
    }

    /// Selected indices below `len`, in increasing order.
    pub fn enabled_indices(&self, len: usize) -> Vec<usize> {
        self.iter().take_while(|&index| index < len).collect()
    }

    /// Iterate over selected indices.
    pub fn iter(&self) -> SetIndices<'_> {
        self.mask.set_indices()
    }
}
