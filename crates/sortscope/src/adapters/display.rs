//! Pacing display: the observer that owns the displayed sequence.
//!
//! ## Purpose
//!
//! [`SequenceDisplay`] is the concrete observer a front end plugs into the
//! sorting service. It paces the run with configurable delays and, for every
//! swap, exchanges the elements of the shared [`Items`] once its delay has
//! elapsed. During a sort it is the only writer of that sequence.
//!
//! ## Design notes
//!
//! * **Cancellable delays**: every delay waits on the run's token and aborts
//!   as soon as cancellation is requested. An aborted swap returns
//!   `Cancelled` before touching the sequence.
//! * **Optional recording**: attaching an [`EventLog`] records every accepted
//!   notification in issue order.
//!
//! ## Invariants
//!
//! * Each accepted swap mutates the sequence exactly once.
//! * A swap the sequence cannot take fails with `IndexOutOfRange` and is
//!   neither counted nor recorded.
//! * No mutation happens before the swap's delay has completed.

// External dependencies
use core::cmp::Ordering;
use core::time::Duration;
use tracing::{trace, warn};

// Internal dependencies
use crate::adapters::log::EventLog;
use crate::engine::events::{SortEvent, SortStats};
use crate::engine::observer::SortObserver;
use crate::primitives::cancellation::CancellationToken;
use crate::primitives::errors::{Cancelled, SortError};
use crate::primitives::items::Items;

/// Delays applied by a [`SequenceDisplay`] before each notification completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PacingConfig {
    /// Delay at the start of each algorithm step.
    pub iteration_delay: Duration,

    /// Delay after each comparison.
    pub comparison_delay: Duration,

    /// Delay before each swap is committed.
    pub swap_delay: Duration,
}

impl PacingConfig {
    /// No delays at all.
    pub fn immediate() -> Self {
        Self::default()
    }

    /// Animation pacing: wait `swap_delay` before every swap.
    pub fn animated(swap_delay: Duration) -> Self {
        Self {
            swap_delay,
            ..Self::default()
        }
    }

    /// Set the comparison delay.
    pub fn comparison_delay(mut self, delay: Duration) -> Self {
        self.comparison_delay = delay;
        self
    }

    /// Set the iteration delay.
    pub fn iteration_delay(mut self, delay: Duration) -> Self {
        self.iteration_delay = delay;
        self
    }
}

/// Observer that paces a run and applies its swaps to the shared sequence.
#[derive(Debug, Clone)]
pub struct SequenceDisplay<T> {
    items: Items<T>,
    pacing: PacingConfig,
    log: Option<EventLog>,
    stats: SortStats,
}

impl<T> SequenceDisplay<T> {
    /// Display of `items` without delays.
    pub fn new(items: Items<T>) -> Self {
        Self {
            items,
            pacing: PacingConfig::default(),
            log: None,
            stats: SortStats::default(),
        }
    }

    /// Set the pacing delays.
    pub fn pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Record every accepted notification into `log`.
    pub fn recording(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    /// The sequence this display mutates.
    pub fn items(&self) -> &Items<T> {
        &self.items
    }

    /// Counters since the last reset.
    pub fn stats(&self) -> SortStats {
        self.stats
    }

    fn accept(&mut self, event: SortEvent) {
        self.stats.record(&event);
        if let Some(log) = &self.log {
            log.push(event);
        }
    }
}

impl<T: Send + Sync> SortObserver for SequenceDisplay<T> {
    fn reset(&mut self) {
        self.stats = SortStats::default();
        if let Some(log) = &self.log {
            log.clear();
        }
    }

    fn record_iteration(&mut self, token: &CancellationToken) -> Result<(), Cancelled> {
        token.sleep(self.pacing.iteration_delay)?;
        self.accept(SortEvent::Iteration);
        Ok(())
    }

    fn record_comparison(
        &mut self,
        a: usize,
        b: usize,
        ordering: Ordering,
        token: &CancellationToken,
    ) -> Result<(), Cancelled> {
        token.sleep(self.pacing.comparison_delay)?;
        self.accept(SortEvent::Comparison { a, b, ordering });
        Ok(())
    }

    fn swap(&mut self, a: usize, b: usize, token: &CancellationToken) -> Result<(), SortError> {
        token.sleep(self.pacing.swap_delay)?;
        // Fails when the sequence was resized under a running sort.
        self.items.swap(a, b).inspect_err(|e| {
            warn!(a, b, error = %e, "display swap out of range");
        })?;
        trace!(a, b, "swap committed");
        self.accept(SortEvent::Swap { a, b });
        Ok(())
    }
}
