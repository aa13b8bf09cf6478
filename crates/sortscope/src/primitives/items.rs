//! Shared, resizable sequence.
//!
//! ## Purpose
//!
//! [`Items`] is the caller-owned sequence a sorting service works on. It is
//! shared between the service (which reads it to build the dense working
//! copy) and the display observer (which is its only writer while a sort
//! runs).
//!
//! ## Design notes
//!
//! * **Shared**: Clones refer to the same storage.
//! * **Short critical sections**: Every accessor holds the lock only for the
//!   duration of the call; nothing holds it across a pacing delay.
//! * **Poison tolerant**: A panicking writer does not make the sequence
//!   unreadable.

// External dependencies
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Internal dependencies
use crate::primitives::errors::SortError;

/// Shared handle to a mutable sequence.
#[derive(Debug, Default)]
pub struct Items<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Items<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> Items<T> {
    /// Take ownership of `values`.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(values)),
        }
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Run `f` with shared access to the elements.
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.read_guard())
    }

    /// Run `f` with exclusive access to the elements.
    pub fn write<R>(&self, f: impl FnOnce(&mut [T]) -> R) -> R {
        f(&mut self.write_guard())
    }

    /// Exchange the elements at `a` and `b`.
    pub fn swap(&self, a: usize, b: usize) -> Result<(), SortError> {
        let mut values = self.write_guard();
        let len = values.len();
        for index in [a, b] {
            if index >= len {
                return Err(SortError::IndexOutOfRange { index, len });
            }
        }
        values.swap(a, b);
        Ok(())
    }

    /// Replace the whole sequence.
    pub fn replace(&self, values: Vec<T>) -> Vec<T> {
        std::mem::replace(&mut *self.write_guard(), values)
    }

    /// Resize to `len`, filling new slots with `fill()`.
    pub fn resize_with(&self, len: usize, fill: impl FnMut() -> T) {
        self.write_guard().resize_with(len, fill);
    }
}

impl<T: Clone> Items<T> {
    /// Copy of the current elements.
    pub fn snapshot(&self) -> Vec<T> {
        self.read_guard().clone()
    }

    /// Copy the elements at `indices`, in the given order.
    pub fn gather(&self, indices: &[usize]) -> Result<Vec<T>, SortError> {
        let values = self.read_guard();
        let len = values.len();
        indices
            .iter()
            .map(|&index| {
                values
                    .get(index)
                    .cloned()
                    .ok_or(SortError::IndexOutOfRange { index, len })
            })
            .collect()
    }
}
