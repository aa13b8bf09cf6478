//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer provides the sorting algorithms. They are pure control flow
//! expressed through the execution context's `compare`, `swap`,
//! `record_iteration` and `slice`; none of them touches the sequence.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Service
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Selection
//!   ↓
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Ordering
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

// Internal dependencies
use crate::engine::context::ExecutionContext;
use crate::primitives::errors::SortError;

/// Lomuto quicksort.
pub mod quick;

/// Heap sort.
pub mod heap;

/// Selection sort.
pub mod selection;

/// The algorithms a sorting service can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlgorithmKind {
    /// Quicksort, last element as pivot.
    #[default]
    Quick,

    /// Heap sort.
    Heap,

    /// Selection sort.
    Selection,
}

impl AlgorithmKind {
    /// Every available algorithm, in catalogue order.
    pub const ALL: [AlgorithmKind; 3] = [Self::Quick, Self::Heap, Self::Selection];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Selection => "selection",
        }
    }

    /// Run this algorithm over the whole view of `ctx`.
    pub fn run<T>(self, ctx: &mut ExecutionContext<'_, T>) -> Result<(), SortError> {
        match self {
            Self::Quick => quick::quick_sort(ctx),
            Self::Heap => heap::heap_sort(ctx),
            Self::Selection => selection::selection_sort(ctx),
        }
    }
}

impl Display for AlgorithmKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_owned()))
    }
}
