//! Instrumented execution context.
//!
//! ## Purpose
//!
//! This module provides the only door between a sorting algorithm and its
//! data. The context binds one index-segment view, one comparator, one
//! observer and one cancellation token for the duration of a single algorithm
//! invocation, and exposes `compare`, `swap` and `record_iteration`.
//!
//! ## Design notes
//!
//! * **Check first**: every primitive checks the token before doing anything,
//!   so a cancelled run unwinds at the next primitive without a raw effect.
//! * **Observer before mutation**: `swap` calls the observer first and
//!   exchanges the working elements only when the observer returned `Ok`.
//!   A swap cancelled during its pacing delay therefore leaves both the
//!   working copy and the displayed sequence untouched.
//! * **Self-swaps**: `swap(i, i)` is a no-op that the observer never sees.
//! * **Sub-contexts**: [`ExecutionContext::slice`] reborrows the context over a
//!   narrower view. Local indices are relative to the view; observers always
//!   receive absolute positions.
//!
//! ## Invariants
//!
//! * Events reach the observer in issue order, one call per primitive.
//! * `stats` counts only notifications the observer accepted.
//!
//! ## Non-goals
//!
//! * This module does not choose an algorithm or own the sequence.
//! * This module does not remap indices (see `adapters::remap`).

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::engine::events::SortStats;
use crate::engine::observer::SortObserver;
use crate::ordering::comparator::Compare;
use crate::primitives::cancellation::CancellationToken;
use crate::primitives::errors::SortError;
use crate::primitives::segment::IndexSegment;

/// Per-invocation binding of view, comparator, observer and token.
pub struct ExecutionContext<'a, T> {
    view: IndexSegment<'a, T>,
    comparator: &'a dyn Compare<T>,
    observer: &'a mut dyn SortObserver,
    token: &'a CancellationToken,
    stats: &'a mut SortStats,
}

impl<'a, T> ExecutionContext<'a, T> {
    /// Bind a context over the whole of `data`.
    pub fn new(
        data: &'a mut [T],
        comparator: &'a dyn Compare<T>,
        observer: &'a mut dyn SortObserver,
        token: &'a CancellationToken,
        stats: &'a mut SortStats,
    ) -> Self {
        Self {
            view: IndexSegment::new(data),
            comparator,
            observer,
            token,
            stats,
        }
    }

    /// Number of elements in the active view.
    #[inline]
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Check if the active view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Absolute offset of the active view.
    #[inline]
    pub fn base(&self) -> usize {
        self.view.base()
    }

    /// The cancellation token of this run.
    #[inline]
    pub fn token(&self) -> &CancellationToken {
        self.token
    }

    /// Counters accumulated so far.
    #[inline]
    pub fn stats(&self) -> SortStats {
        *self.stats
    }

    /// Elements of the active view.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.view.as_slice()
    }

    /// Sub-context over `[offset, offset + len)` of the active view.
    pub fn slice(&mut self, offset: usize, len: usize) -> Result<ExecutionContext<'_, T>, SortError> {
        let view = self.view.slice(offset, len).inspect_err(|e| {
            debug_assert!(false, "ExecutionContext::slice: {e}");
        })?;
        Ok(ExecutionContext {
            view,
            comparator: self.comparator,
            observer: &mut *self.observer,
            token: self.token,
            stats: &mut *self.stats,
        })
    }

    /// Notify the observer that a new algorithm step began.
    pub fn record_iteration(&mut self) -> Result<(), SortError> {
        self.token.check()?;
        self.observer.record_iteration(self.token)?;
        self.stats.iterations += 1;
        Ok(())
    }

    /// Compare the elements at local indices `i` and `j`.
    pub fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, SortError> {
        self.token.check()?;
        let a = self.locate(i)?;
        let b = self.locate(j)?;
        let ordering = self
            .comparator
            .compare(self.view.get(i)?, self.view.get(j)?);
        self.observer.record_comparison(a, b, ordering, self.token)?;
        self.stats.comparisons += 1;
        Ok(ordering)
    }

    /// Whether the element at `i` orders strictly before the element at `j`.
    #[inline]
    pub fn is_less(&mut self, i: usize, j: usize) -> Result<bool, SortError> {
        Ok(self.compare(i, j)? == Ordering::Less)
    }

    /// Exchange the elements at local indices `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        self.token.check()?;
        let a = self.locate(i)?;
        let b = self.locate(j)?;
        if a == b {
            return Ok(());
        }
        self.observer.swap(a, b, self.token)?;
        self.view.swap(i, j)?;
        self.stats.swaps += 1;
        Ok(())
    }

    // Local to absolute index; out of range here is an algorithm bug.
    #[inline]
    fn locate(&self, index: usize) -> Result<usize, SortError> {
        self.view.absolute(index).inspect_err(|e| {
            debug_assert!(false, "ExecutionContext: {e}");
        })
    }
}
