//! Sorting service: orchestration and run lifecycle.
//!
//! ## Purpose
//!
//! This module provides [`SortingService`], the entry point a caller drives.
//! A run snapshots the selected indices, copies those elements into a dense
//! working array, wraps the configured observer in a remapping adapter, and
//! runs the chosen algorithm under a fresh cancellation token.
//!
//! ## Design notes
//!
//! * **Explicit state**: the service owns an `Idle | Running(token)` value
//!   instead of any global "which sort is running" flag. At most one run is
//!   active per service; a second request fails with `AlreadyRunning`.
//! * **No copy-back**: the dense copy is private to the run. The original
//!   sequence changes only through the observer's `swap`, at remapped
//!   positions, as the run progresses.
//! * **Cancellation is a state**: a cancelled run returns a report with
//!   `SortState::Cancelled`. Swaps already committed stay committed.
//! * **Blocking or threaded**: [`SortingService::run`] executes on the calling
//!   thread; [`SortingService::start`] executes on a worker thread and returns
//!   a [`SortHandle`]. Clones of the service share all state, so any clone
//!   can cancel.
//!
//! ## Invariants
//!
//! * The running marker is cleared when a run ends, fails or panics.
//! * Sequence-changing operations (resize, shuffle, randomize) are rejected
//!   while a run is active.

// External dependencies
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

// Internal dependencies
use crate::adapters::remap::RemappingObserver;
use crate::algorithms::AlgorithmKind;
use crate::engine::context::ExecutionContext;
use crate::engine::events::SortStats;
use crate::engine::observer::SortObserver;
use crate::engine::validator::Validator;
use crate::ordering::comparator::{Direction, DirectionalComparator};
use crate::primitives::cancellation::CancellationToken;
use crate::primitives::errors::SortError;
use crate::primitives::items::Items;
use crate::selection::Selection;
use crate::service::randomize::ItemRandomizer;

// ============================================================================
// Run State and Report
// ============================================================================

/// Lifecycle state of a sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    /// No run has happened yet.
    #[default]
    NotStarted,

    /// A run is in progress.
    Running,

    /// The last run sorted its selection to completion.
    Completed,

    /// The last run was cancelled before completing.
    Cancelled,
}

impl SortState {
    /// Whether the state is terminal for a run.
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// Algorithm that ran.
    pub algorithm: AlgorithmKind,

    /// Terminal state (`Completed` or `Cancelled`).
    pub state: SortState,

    /// Events accepted by the observer.
    pub stats: SortStats,

    /// Number of selected elements that were sorted.
    pub selected: usize,
}

#[derive(Debug, Default)]
enum Status {
    #[default]
    Idle,
    Running(CancellationToken),
}

#[derive(Debug, Default)]
struct ServiceState {
    status: Status,
    last: Option<SortReport>,
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// Clears the running marker when dropped, including during unwinding.
struct RunGuard {
    state: Arc<Mutex<ServiceState>>,
}

impl RunGuard {
    fn finish(self, report: &SortReport) {
        lock(&self.state).last = Some(*report);
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        lock(&self.state).status = Status::Idle;
    }
}

// Selected indices and the dense copy built from them.
struct Job<T> {
    indices: Vec<usize>,
    dense: Vec<T>,
}

// ============================================================================
// Sorting Service
// ============================================================================

/// Orchestrates instrumented sorts of a shared sequence.
pub struct SortingService<T> {
    items: Items<T>,
    comparator: DirectionalComparator<T>,
    selection: Arc<Mutex<Selection>>,
    observer: Arc<Mutex<Box<dyn SortObserver>>>,
    state: Arc<Mutex<ServiceState>>,
}

impl<T> Clone for SortingService<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            comparator: self.comparator.clone(),
            selection: Arc::clone(&self.selection),
            observer: Arc::clone(&self.observer),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> SortingService<T> {
    /// Assemble a service from its parts.
    ///
    /// Prefer [`SortingService::builder`], which validates the parts.
    pub fn from_parts(
        items: Items<T>,
        comparator: DirectionalComparator<T>,
        selection: Selection,
        observer: Box<dyn SortObserver>,
    ) -> Self {
        Self {
            items,
            comparator,
            selection: Arc::new(Mutex::new(selection)),
            observer: Arc::new(Mutex::new(observer)),
            state: Arc::new(Mutex::new(ServiceState::default())),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The sequence this service sorts.
    pub fn items(&self) -> &Items<T> {
        &self.items
    }

    /// The comparator decorator in use.
    pub fn comparator(&self) -> &DirectionalComparator<T> {
        &self.comparator
    }

    /// Current sort direction.
    pub fn direction(&self) -> Direction {
        self.comparator.direction()
    }

    /// Change the sort direction; takes effect at the next comparison.
    pub fn set_direction(&self, direction: Direction) {
        self.comparator.set_direction(direction);
    }

    /// Copy of the current selection.
    pub fn selection(&self) -> Selection {
        lock(&self.selection).clone()
    }

    /// Replace the selection used by future runs.
    ///
    /// A mask selection must cover the current sequence exactly.
    pub fn set_selection(&self, selection: Selection) -> Result<(), SortError> {
        selection.validate_for(self.items.len())?;
        *lock(&self.selection) = selection;
        Ok(())
    }

    /// Edit the selection in place.
    pub fn update_selection<R>(&self, f: impl FnOnce(&mut Selection) -> R) -> R {
        f(&mut lock(&self.selection))
    }

    /// Replace the observer used by future runs.
    pub fn set_observer(&self, observer: Box<dyn SortObserver>) -> Result<(), SortError> {
        self.while_idle(|| *lock(&self.observer) = observer)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Whether a run is in progress.
    pub fn is_running(&self) -> bool {
        matches!(lock(&self.state).status, Status::Running(_))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SortState {
        let state = lock(&self.state);
        match (&state.status, &state.last) {
            (Status::Running(_), _) => SortState::Running,
            (Status::Idle, Some(report)) => report.state,
            (Status::Idle, None) => SortState::NotStarted,
        }
    }

    /// Report of the most recent finished run.
    pub fn last_report(&self) -> Option<SortReport> {
        lock(&self.state).last
    }

    /// Request cancellation of the current run.
    ///
    /// Returns `true` if a run was active and this call cancelled it. Repeated
    /// calls are no-ops.
    pub fn cancel(&self) -> bool {
        match &lock(&self.state).status {
            Status::Running(token) => {
                let cancelled = token.cancel();
                if cancelled {
                    debug!("cancellation requested");
                }
                cancelled
            }
            Status::Idle => false,
        }
    }

    // Run `f` while holding the state lock, only if no run is active.
    fn while_idle<R>(&self, f: impl FnOnce() -> R) -> Result<R, SortError> {
        let state = lock(&self.state);
        if matches!(state.status, Status::Running(_)) {
            return Err(SortError::AlreadyRunning);
        }
        let result = f();
        drop(state);
        Ok(result)
    }

    // Claim the running marker with a fresh token.
    fn begin(&self) -> Result<(CancellationToken, RunGuard), SortError> {
        let mut state = lock(&self.state);
        if matches!(state.status, Status::Running(_)) {
            return Err(SortError::AlreadyRunning);
        }
        let token = CancellationToken::new();
        state.status = Status::Running(token.clone());
        drop(state);

        let guard = RunGuard {
            state: Arc::clone(&self.state),
        };
        Ok((token, guard))
    }

    // ========================================================================
    // Sequence Operations
    // ========================================================================

    /// Resize the sequence, filling new slots with `fill()`.
    ///
    /// The selection follows the new length.
    pub fn resize_with(&self, len: usize, fill: impl FnMut() -> T) -> Result<(), SortError> {
        self.while_idle(|| {
            self.items.resize_with(len, fill);
            debug!(len, "sequence resized");
            lock(&self.selection).sequence_resized(len)
        })?
    }

    /// Shuffle the sequence.
    pub fn shuffle<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(), SortError> {
        self.while_idle(|| self.items.write(|values| values.shuffle(rng)))
    }

    /// Overwrite every element with a fresh random value.
    pub fn randomize<Z: ItemRandomizer<T> + ?Sized>(&self, randomizer: &mut Z) -> Result<(), SortError> {
        self.while_idle(|| self.items.write(|values| randomizer.randomize(values)))
    }
}

impl<T: Clone> SortingService<T> {
    // Snapshot the selection and build the dense working copy.
    fn prepare(&self) -> Result<Job<T>, SortError> {
        let len = self.items.len();
        let indices = lock(&self.selection).enabled_indices(len);
        Validator::validate_selection(&indices, len)?;
        let dense = self.items.gather(&indices)?;
        Ok(Job { indices, dense })
    }

    // Run `kind` over a prepared job.
    fn execute(
        &self,
        kind: AlgorithmKind,
        job: Job<T>,
        token: &CancellationToken,
    ) -> Result<SortReport, SortError> {
        let Job { indices, mut dense } = job;
        info!(algorithm = %kind, selected = indices.len(), "sort started");

        let mut observer = lock(&self.observer);
        observer.reset();
        let mut remapped = RemappingObserver::new(&mut **observer, &indices);

        let mut stats = SortStats::default();
        let result = {
            let mut ctx = ExecutionContext::new(
                &mut dense,
                &self.comparator,
                &mut remapped,
                token,
                &mut stats,
            );
            kind.run(&mut ctx)
        };

        let state = match result {
            Ok(()) => SortState::Completed,
            Err(SortError::Cancelled) => SortState::Cancelled,
            Err(e) => return Err(e),
        };

        let report = SortReport {
            algorithm: kind,
            state,
            stats,
            selected: indices.len(),
        };
        info!(
            algorithm = %kind,
            state = ?report.state,
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            "sort finished"
        );
        Ok(report)
    }

    /// Sort on the calling thread.
    ///
    /// Another clone of the service can cancel the run through
    /// [`SortingService::cancel`] while this call blocks.
    pub fn run(&self, kind: AlgorithmKind) -> Result<SortReport, SortError> {
        let (token, guard) = self.begin()?;
        let job = self.prepare()?;
        let report = self.execute(kind, job, &token)?;
        guard.finish(&report);
        Ok(report)
    }
}

impl<T: Clone + Send + Sync + 'static> SortingService<T> {
    /// Sort on a worker thread.
    pub fn start(&self, kind: AlgorithmKind) -> Result<SortHandle, SortError> {
        let (token, guard) = self.begin()?;
        let job = self.prepare()?;

        let service = self.clone();
        let worker_token = token.clone();
        let thread = thread::Builder::new()
            .name(format!("sortscope-{kind}"))
            .spawn(move || {
                let report = service.execute(kind, job, &worker_token)?;
                guard.finish(&report);
                Ok(report)
            })
            .map_err(|e| SortError::WorkerUnavailable(e.to_string()))?;

        Ok(SortHandle {
            algorithm: kind,
            token,
            thread,
        })
    }
}

// ============================================================================
// Run Handle
// ============================================================================

/// Handle to a run executing on a worker thread.
#[derive(Debug)]
pub struct SortHandle {
    algorithm: AlgorithmKind,
    token: CancellationToken,
    thread: JoinHandle<Result<SortReport, SortError>>,
}

impl SortHandle {
    /// Algorithm being run.
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Request cancellation of this run.
    pub fn cancel(&self) -> bool {
        self.token.cancel()
    }

    /// The run's cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Whether the worker thread has finished.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the run to end.
    pub fn join(self) -> Result<SortReport, SortError> {
        self.thread.join().map_err(|_| SortError::WorkerPanicked)?
    }
}
