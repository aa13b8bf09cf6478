//! Validation for selections and builder configuration.
//!
//! ## Purpose
//!
//! This module checks the contracts the sorting service relies on before it
//! builds the dense working copy: selected indices are strictly increasing
//! and inside the sequence, and range bounds are ordered.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Validators only inspect their inputs.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid selections.

// Internal dependencies
use crate::primitives::errors::SortError;

/// Validation utility for selections and configuration.
pub struct Validator;

impl Validator {
    /// Validate an index list against a sequence of length `len`.
    pub fn validate_selection(indices: &[usize], len: usize) -> Result<(), SortError> {
        // Check 1: every index addresses the sequence
        if let Some(&last) = indices.last() {
            if last >= len {
                return Err(SortError::InvalidSelection(format!(
                    "index {last} is outside a sequence of length {len}"
                )));
            }
        }

        // Check 2: strictly increasing (implies distinct and in bounds)
        if let Some(pos) = indices.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SortError::InvalidSelection(format!(
                "indices must be strictly increasing, found {} followed by {}",
                indices[pos],
                indices[pos + 1]
            )));
        }

        Ok(())
    }

    /// Validate inclusive range bounds.
    pub fn validate_range(from: usize, to: usize) -> Result<(), SortError> {
        if from > to {
            return Err(SortError::InvalidRange { from, to });
        }
        Ok(())
    }

    /// Reject a builder on which a parameter was set twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), SortError> {
        match duplicate {
            Some(parameter) => Err(SortError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
