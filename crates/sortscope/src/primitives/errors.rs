//! Error types for instrumented sorting.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or running a sort: addressing violations, service state violations,
//! selection problems and the cancellation signal itself.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., index vs. length).
//! * **Two families**: Addressing errors are programmer errors; the engine
//!   raises them with a `debug_assert!` first and still propagates them in
//!   release builds.
//! * **Cancellation is control flow**: [`Cancelled`] is what observers and
//!   the token return. It converts into [`SortError::Cancelled`] so `?`
//!   unwinds the whole algorithm call tree; the sorting service turns it
//!   into a terminal state instead of surfacing it.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see `engine::validator`).
//! * This module does not provide retries; nothing in the engine retries.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Cancellation Marker
// ============================================================================

/// Marker returned when a cooperative check point observes cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cancelled;

impl Display for Cancelled {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Sort was cancelled")
    }
}

impl Error for Cancelled {}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The run was cancelled at a cooperative check point.
    Cancelled,

    /// A local index fell outside `[0, len)` of the addressed view.
    IndexOutOfRange {
        /// The offending local index.
        index: usize,
        /// Length of the addressed view.
        len: usize,
    },

    /// A sub-segment would escape the bounds of its parent view.
    SegmentOutOfRange {
        /// Requested local offset.
        offset: usize,
        /// Requested length.
        len: usize,
        /// Length of the parent view.
        parent_len: usize,
    },

    /// A sort was requested while another one is still running.
    AlreadyRunning,

    /// Range filter bounds must satisfy `from <= to`.
    InvalidRange {
        /// Inclusive lower bound.
        from: usize,
        /// Inclusive upper bound.
        to: usize,
    },

    /// The selected index list is not strictly increasing or not in bounds.
    InvalidSelection(String),

    /// The selection mask cannot represent this many elements.
    MaskCapacityExceeded {
        /// Requested mask length.
        len: usize,
        /// Maximum supported mask length.
        max: usize,
    },

    /// No algorithm is known under this name.
    UnknownAlgorithm(String),

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The worker thread running the sort panicked.
    WorkerPanicked,

    /// The worker thread could not be spawned.
    WorkerUnavailable(String),
}

impl SortError {
    /// Whether this error is the cancellation signal rather than a failure.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<Cancelled> for SortError {
    fn from(_: Cancelled) -> Self {
        Self::Cancelled
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Cancelled => write!(f, "Sort was cancelled"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: {index} (view length is {len})")
            }
            Self::SegmentOutOfRange {
                offset,
                len,
                parent_len,
            } => {
                write!(
                    f,
                    "Segment out of range: offset {offset} with length {len} exceeds parent length {parent_len}"
                )
            }
            Self::AlreadyRunning => write!(f, "A sort is already running on this service"),
            Self::InvalidRange { from, to } => {
                write!(f, "Invalid range: from {from} is greater than to {to}")
            }
            Self::InvalidSelection(msg) => write!(f, "Invalid selection: {msg}"),
            Self::MaskCapacityExceeded { len, max } => {
                write!(f, "Selection mask length {len} exceeds capacity {max}")
            }
            Self::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: '{name}'"),
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required but was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::WorkerPanicked => write!(f, "The sorting worker thread panicked"),
            Self::WorkerUnavailable(msg) => {
                write!(f, "Failed to spawn the sorting worker thread: {msg}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SortError {}
