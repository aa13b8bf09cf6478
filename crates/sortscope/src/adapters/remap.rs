//! Index-remapping observer adapter.
//!
//! ## Purpose
//!
//! Algorithms run over a dense working copy and report positions in
//! `[0, k)`. This adapter translates every reported position through the
//! selection's index list (`original = indices[dense]`) before forwarding, so
//! the wrapped observer only ever sees positions of the original sequence.
//!
//! ## Invariants
//!
//! * Calls are forwarded one-to-one and in order.
//! * `record_iteration` and `reset` pass through unchanged.
//! * A dense index outside the list is an engine bug and panics.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::engine::observer::SortObserver;
use crate::primitives::cancellation::CancellationToken;
use crate::primitives::errors::{Cancelled, SortError};

/// Observer wrapper translating dense indices into original indices.
#[derive(Debug)]
pub struct RemappingObserver<'a, O: ?Sized> {
    inner: &'a mut O,
    indices: &'a [usize],
}

impl<'a, O: SortObserver + ?Sized> RemappingObserver<'a, O> {
    /// Wrap `inner`; `indices[dense]` is the original position of `dense`.
    pub fn new(inner: &'a mut O, indices: &'a [usize]) -> Self {
        Self { inner, indices }
    }

    /// Original position of a dense index.
    #[inline]
    pub fn original(&self, dense: usize) -> usize {
        self.indices[dense]
    }
}

impl<O: SortObserver + ?Sized> SortObserver for RemappingObserver<'_, O> {
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn record_iteration(&mut self, token: &CancellationToken) -> Result<(), Cancelled> {
        self.inner.record_iteration(token)
    }

    fn record_comparison(
        &mut self,
        a: usize,
        b: usize,
        ordering: Ordering,
        token: &CancellationToken,
    ) -> Result<(), Cancelled> {
        let (a, b) = (self.original(a), self.original(b));
        self.inner.record_comparison(a, b, ordering, token)
    }

    fn swap(&mut self, a: usize, b: usize, token: &CancellationToken) -> Result<(), SortError> {
        let (a, b) = (self.original(a), self.original(b));
        self.inner.swap(a, b, token)
    }
}
