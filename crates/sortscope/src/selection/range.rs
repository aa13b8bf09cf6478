//! Contiguous range filter.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;

/// Selects the inclusive index range `[from, to]`.
///
/// When the sequence is shorter than `to + 1`, the range is clamped to the
/// last index at query time; when it is no longer than `from`, the selection
/// is empty. The stored bounds are never rewritten by a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    from: usize,
    to: usize,
}

impl RangeFilter {
    /// Range `[from, to]`; requires `from <= to`.
    pub fn new(from: usize, to: usize) -> Result<Self, SortError> {
        Validator::validate_range(from, to)?;
        Ok(Self { from, to })
    }

    /// Range covering a whole sequence of `len` elements.
    pub fn covering(len: usize) -> Self {
        Self {
            from: 0,
            to: len.saturating_sub(1),
        }
    }

    /// Inclusive lower bound.
    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    /// Inclusive upper bound.
    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    /// Replace both bounds; requires `from <= to`.
    pub fn set_bounds(&mut self, from: usize, to: usize) -> Result<(), SortError> {
        Validator::validate_range(from, to)?;
        self.from = from;
        self.to = to;
        Ok(())
    }

    /// Indices selected in a sequence of length `len`.
    pub fn enabled_indices(&self, len: usize) -> Vec<usize> {
        if self.from >= len {
            return Vec::new();
        }
        let to = self.to.min(len - 1);
        (self.from..=to).collect()
    }
}
