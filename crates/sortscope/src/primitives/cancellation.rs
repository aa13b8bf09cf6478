//! Cooperative cancellation signal.
//!
//! ## Purpose
//!
//! This module provides the one-shot cancellation token that every engine
//! primitive checks at entry. A fresh token is created for every sort
//! invocation and never reused.
//!
//! ## Design notes
//!
//! * **One-shot**: Once set, the flag stays set. Cancelling again is a no-op.
//! * **Shared**: Clones observe the same flag, so the caller keeps one clone
//!   while the running sort holds another.
//! * **Interruptible waits**: [`CancellationToken::sleep`] parks on a condition
//!   variable and wakes as soon as the token is cancelled, so pacing delays
//!   abort mid-wait instead of running to completion.
//!
//! ## Invariants
//!
//! * `is_cancelled()` never goes from `true` back to `false`.
//! * `sleep` returns `Err(Cancelled)` if the token is set before or during the wait.

// External dependencies
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

// Internal dependencies
use crate::primitives::errors::Cancelled;

#[derive(Debug, Default)]
struct Signal {
    cancelled: AtomicBool,
    lock: Mutex<()>,
    wake: Condvar,
}

/// One-shot, observable cancellation flag shared between a sort and its caller.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    signal: Arc<Signal>,
}

impl CancellationToken {
    /// Create a new, unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    ///
    /// Returns `true` if this call set the flag, `false` if it was already set.
    pub fn cancel(&self) -> bool {
        let newly_set = !self.signal.cancelled.swap(true, Ordering::AcqRel);
        if newly_set {
            // Taking the lock orders the store before any waiter's re-check.
            let _guard = self
                .signal
                .lock
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.signal.wake.notify_all();
        }
        newly_set
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.signal.cancelled.load(Ordering::Acquire)
    }

    /// Cooperative check point.
    #[inline]
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Wait for `duration`, returning early with `Cancelled` if the token is set.
    pub fn sleep(&self, duration: Duration) -> Result<(), Cancelled> {
        self.check()?;
        if duration.is_zero() {
            return Ok(());
        }

        let deadline = Instant::now() + duration;
        let mut guard = self
            .signal
            .lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        loop {
            if self.is_cancelled() {
                return Err(Cancelled);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            guard = self
                .signal
                .wake
                .wait_timeout(guard, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }
}
