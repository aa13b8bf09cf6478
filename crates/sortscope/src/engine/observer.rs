//! Observer interface notified by the execution context.
//!
//! ## Purpose
//!
//! This module defines [`SortObserver`], the capability the engine calls into
//! for every iteration, comparison and swap. It is the only place where a run
//! may be suspended (to pace an animation) and the place where the displayed
//! sequence is mutated.
//!
//! ## Design notes
//!
//! * **Suspension points**: `record_comparison` and `swap` may block for a
//!   pacing delay. Implementations must wait through
//!   [`CancellationToken::sleep`] (or check the token themselves) so that a
//!   cancelled run unwinds promptly.
//! * **Sole mutator**: an observer that owns the displayed sequence is its
//!   only writer while a sort runs. Its `swap` must perform the exchange at
//!   the reported positions exactly once, after any delay, and only when it
//!   returns `Ok`. Returning an error means nothing was mutated: `Cancelled`
//!   when the run was cancelled during the delay, `IndexOutOfRange` when the
//!   displayed sequence no longer has those positions. Either error ends the
//!   run before the working copy is touched.
//! * **Ordering**: calls arrive in exactly the order the algorithm issues
//!   them; adapters must forward them unbatched and unreordered.
//!
//! ## Invariants
//!
//! * `swap` is never called with `a == b`.
//! * Indices are absolute positions in the sequence the context was built
//!   over (the dense working copy, before remapping).

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::cancellation::CancellationToken;
use crate::primitives::errors::{Cancelled, SortError};

/// Receiver of the iteration/comparison/swap stream of a sort.
pub trait SortObserver: Send {
    /// Called once before a run starts.
    fn reset(&mut self) {}

    /// A new top-level algorithm step began.
    fn record_iteration(&mut self, token: &CancellationToken) -> Result<(), Cancelled> {
        token.check()
    }

    /// Elements at `a` and `b` were compared with the given result.
    fn record_comparison(
        &mut self,
        a: usize,
        b: usize,
        ordering: Ordering,
        token: &CancellationToken,
    ) -> Result<(), Cancelled> {
        let _ = (a, b, ordering);
        token.check()
    }

    /// Elements at `a` and `b` are exchanged.
    ///
    /// Observers owning the displayed sequence commit the exchange here, after
    /// their pacing delay, and only when returning `Ok`. An exchange that could
    /// not be committed must be reported as an error, never recorded.
    fn swap(&mut self, a: usize, b: usize, token: &CancellationToken) -> Result<(), SortError>;
}

impl<O: SortObserver + ?Sized> SortObserver for &mut O {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn record_iteration(&mut self, token: &CancellationToken) -> Result<(), Cancelled> {
        (**self).record_iteration(token)
    }

    fn record_comparison(
        &mut self,
        a: usize,
        b: usize,
        ordering: Ordering,
        token: &CancellationToken,
    ) -> Result<(), Cancelled> {
        (**self).record_comparison(a, b, ordering, token)
    }

    fn swap(&mut self, a: usize, b: usize, token: &CancellationToken) -> Result<(), SortError> {
        (**self).swap(a, b, token)
    }
}

impl<O: SortObserver + ?Sized> SortObserver for Box<O> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn record_iteration(&mut self, token: &CancellationToken) -> Result<(), Cancelled> {
        (**self).record_iteration(token)
    }

    fn record_comparison(
        &mut self,
        a: usize,
        b: usize,
        ordering: Ordering,
        token: &CancellationToken,
    ) -> Result<(), Cancelled> {
        (**self).record_comparison(a, b, ordering, token)
    }

    fn swap(&mut self, a: usize, b: usize, token: &CancellationToken) -> Result<(), SortError> {
        (**self).swap(a, b, token)
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SortObserver for NullObserver {
    fn swap(&mut self, _a: usize, _b: usize, token: &CancellationToken) -> Result<(), SortError> {
        Ok(token.check()?)
    }
}
