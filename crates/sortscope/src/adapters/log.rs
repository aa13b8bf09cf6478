//! Recording observer.
//!
//! [`EventLog`] keeps the exact event stream of a run. Clones share the same
//! buffer, so one clone can be handed to a sorting service while another is
//! kept to read the log afterwards. It never mutates the sorted sequence.

// External dependencies
use core::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Internal dependencies
use crate::engine::events::{SortEvent, SortStats};
use crate::engine::observer::SortObserver;
use crate::primitives::cancellation::CancellationToken;
use crate::primitives::errors::{Cancelled, SortError};

/// Shared, append-only record of sort events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<SortEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<SortEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one event.
    pub fn push(&self, event: SortEvent) {
        self.guard().push(event);
    }

    /// Drop every recorded event.
    pub fn clear(&self) {
        self.guard().clear();
    }

    /// Copy of the recorded events.
    pub fn events(&self) -> Vec<SortEvent> {
        self.guard().clone()
    }

    /// Recorded swap events only.
    pub fn swaps(&self) -> Vec<(usize, usize)> {
        self.guard()
            .iter()
            .filter_map(|event| match *event {
                SortEvent::Swap { a, b } => Some((a, b)),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Counters over the recorded events.
    pub fn stats(&self) -> SortStats {
        SortStats::from_events(&self.guard())
    }
}

impl SortObserver for EventLog {
    fn reset(&mut self) {
        self.clear();
    }

    fn record_iteration(&mut self, token: &CancellationToken) -> Result<(), Cancelled> {
        token.check()?;
        self.push(SortEvent::Iteration);
        Ok(())
    }

    fn record_comparison(
        &mut self,
        a: usize,
        b: usize,
        ordering: Ordering,
        token: &CancellationToken,
    ) -> Result<(), Cancelled> {
        token.check()?;
        self.push(SortEvent::Comparison { a, b, ordering });
        Ok(())
    }

    fn swap(&mut self, a: usize, b: usize, token: &CancellationToken) -> Result<(), SortError> {
        token.check()?;
        self.push(SortEvent::Swap { a, b });
        Ok(())
    }
}
