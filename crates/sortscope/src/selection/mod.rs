//! Layer 5: Selection
//!
//! # Purpose
//!
//! This layer decides which indices of the sequence take part in a sort.
//! A [`Selection`] produces a strictly increasing index list; the sorting
//! service copies those elements into a dense working array.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Service
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Selection ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Ordering
//!   ↓
//! Layer 1: Primitives
//! ```

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;

/// Contiguous range filter.
pub mod range;

/// Per-index mask filter.
pub mod arbitrary;

pub use arbitrary::ArbitraryFilter;
pub use range::RangeFilter;

/// Which indices of the sequence are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every index.
    #[default]
    All,

    /// An inclusive index range.
    Range(RangeFilter),

    /// A per-index mask.
    Arbitrary(ArbitraryFilter),
}

impl Selection {
    /// Range selection `[from, to]`.
    pub fn range(from: usize, to: usize) -> Result<Self, SortError> {
        Ok(Self::Range(RangeFilter::new(from, to)?))
    }

    /// Mask selection with every one of `len` indices enabled.
    pub fn arbitrary(len: usize) -> Result<Self, SortError> {
        Ok(Self::Arbitrary(ArbitraryFilter::new(len)?))
    }

    /// Mask selection of exactly `indices` within a sequence of `len` elements.
    pub fn indices(len: usize, indices: &[usize]) -> Result<Self, SortError> {
        let mut flags = vec![false; len];
        for &index in indices {
            let flag = flags
                .get_mut(index)
                .ok_or(SortError::IndexOutOfRange { index, len })?;
            *flag = true;
        }
        Ok(Self::Arbitrary(ArbitraryFilter::from_flags(&flags)?))
    }

    /// Selected indices of a sequence of length `len`, strictly increasing.
    pub fn enabled_indices(&self, len: usize) -> Vec<usize> {
        match self {
            Self::All => (0..len).collect(),
            Self::Range(range) => range.enabled_indices(len),
            Self::Arbitrary(mask) => mask.enabled_indices(len),
        }
    }

    /// Check that this selection can drive a sort over `len` elements.
    ///
    /// A mask must cover the sequence exactly.
    pub fn validate_for(&self, len: usize) -> Result<(), SortError> {
        if let Self::Arbitrary(mask) = self {
            if mask.len() != len {
                return Err(SortError::InvalidSelection(format!(
                    "mask covers {} elements but the sequence has {len}",
                    mask.len()
                )));
            }
        }
        Validator::validate_selection(&self.enabled_indices(len), len)
    }

    /// Follow a change of the sequence length.
    pub fn sequence_resized(&mut self, len: usize) -> Result<(), SortError> {
        match self {
            Self::All | Self::Range(_) => Ok(()),
            Self::Arbitrary(mask) => mask.resize(len),
        }
    }
}
