//! Event stream and run statistics.
//!
//! ## Purpose
//!
//! [`SortEvent`] is the unit of the replayable stream a sort emits, and
//! [`SortStats`] counts what a run delivered to its observer. Replaying the
//! swap events of a log onto the input reproduces the observer-visible state
//! at any prefix of the run, which is also how cancellation safety is checked.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::SortError;

/// One notification delivered to an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent {
    /// A new top-level algorithm step.
    Iteration,

    /// Two elements were compared.
    Comparison {
        /// First compared index.
        a: usize,
        /// Second compared index.
        b: usize,
        /// Comparator result for `(a, b)`.
        ordering: Ordering,
    },

    /// Two elements were exchanged.
    Swap {
        /// First swapped index.
        a: usize,
        /// Second swapped index.
        b: usize,
    },
}

impl SortEvent {
    /// Whether this is a swap event.
    #[inline]
    pub fn is_swap(&self) -> bool {
        matches!(self, Self::Swap { .. })
    }

    /// Apply every swap event of `events` to `data`, in order.
    ///
    /// Returns the number of swaps applied.
    pub fn replay_swaps<T>(events: &[SortEvent], data: &mut [T]) -> Result<usize, SortError> {
        let len = data.len();
        let mut applied = 0;
        for event in events {
            if let Self::Swap { a, b } = *event {
                for index in [a, b] {
                    if index >= len {
                        return Err(SortError::IndexOutOfRange { index, len });
                    }
                }
                data.swap(a, b);
                applied += 1;
            }
        }
        Ok(applied)
    }
}

/// Counters of what a run delivered to its observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of `record_iteration` notifications.
    pub iterations: usize,

    /// Number of comparisons reported.
    pub comparisons: usize,

    /// Number of committed swaps.
    pub swaps: usize,
}

impl SortStats {
    /// Count one event.
    #[inline]
    pub fn record(&mut self, event: &SortEvent) {
        match event {
            SortEvent::Iteration => self.iterations += 1,
            SortEvent::Comparison { .. } => self.comparisons += 1,
            SortEvent::Swap { .. } => self.swaps += 1,
        }
    }

    /// Statistics of an event log.
    pub fn from_events(events: &[SortEvent]) -> Self {
        let mut stats = Self::default();
        for event in events {
            stats.record(event);
        }
        stats
    }
}
