//! Comparators and the direction decorator.
//!
//! ## Purpose
//!
//! This module defines how the engine orders elements. Algorithms only ever
//! see a `&dyn Compare<T>`; the sorting service holds a
//! [`DirectionalComparator`] whose direction can be flipped at any time.
//!
//! ## Design notes
//!
//! * **Closures are comparators**: any `Fn(&T, &T) -> Ordering + Send + Sync`
//!   implements [`Compare`].
//! * **Shared direction**: clones of a [`DirectionalComparator`] share one
//!   direction flag, so setting it through any clone affects every holder on
//!   the next call. Nothing needs to be re-registered.
//! * **Floats**: [`FloatOrder`] is a total order over `num_traits::Float`
//!   values with NaN placed after every finite value and infinity.
//!
//! ## Invariants
//!
//! * `Descending` yields exactly `base.compare(a, b).reverse()`.
//! * Comparators are pure functions of their inputs and current direction.

// External dependencies
use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use num_traits::Float;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

// ============================================================================
// Compare Trait
// ============================================================================

/// Total order over `T`.
pub trait Compare<T>: Send + Sync {
    /// Compare two elements.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

// ============================================================================
// Built-in Orders
// ============================================================================

/// The `Ord` order of `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Total order over floats; NaN compares greater than everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatOrder;

impl<T: Float> Compare<T> for FloatOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.partial_cmp(b)
            .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
    }
}

// ============================================================================
// Direction
// ============================================================================

/// Sort direction applied on top of a base comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest element first.
    #[default]
    Ascending,

    /// Largest element first.
    Descending,
}

impl Direction {
    /// Apply this direction to a base ordering.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// The other direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

// ============================================================================
// Directional Decorator
// ============================================================================

/// Comparator decorator whose direction can be changed in place.
pub struct DirectionalComparator<T> {
    base: Arc<dyn Compare<T>>,
    descending: Arc<AtomicBool>,
}

impl<T> DirectionalComparator<T> {
    /// Wrap `base`, starting in ascending direction.
    pub fn new<C>(base: C) -> Self
    where
        C: Compare<T> + 'static,
    {
        Self::from_shared(Arc::new(base))
    }

    /// Wrap an already shared comparator.
    pub fn from_shared(base: Arc<dyn Compare<T>>) -> Self {
        Self {
            base,
            descending: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        if self.descending.load(AtomicOrdering::Acquire) {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    /// Change the direction for every clone of this decorator.
    #[inline]
    pub fn set_direction(&self, direction: Direction) {
        self.descending.store(
            direction == Direction::Descending,
            AtomicOrdering::Release,
        );
    }

    /// Builder-style direction setter.
    pub fn with_direction(self, direction: Direction) -> Self {
        self.set_direction(direction);
        self
    }
}

impl<T: Ord + 'static> Default for DirectionalComparator<T> {
    fn default() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<T> Clone for DirectionalComparator<T> {
    fn clone(&self) -> Self {
        Self {
            base: Arc::clone(&self.base),
            descending: Arc::clone(&self.descending),
        }
    }
}

impl<T> Debug for DirectionalComparator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionalComparator")
            .field("direction", &self.direction())
            .finish_non_exhaustive()
    }
}

impl<T> Compare<T> for DirectionalComparator<T> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction().apply(self.base.compare(a, b))
    }
}
