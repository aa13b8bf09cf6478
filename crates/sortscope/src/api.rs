//! High-level API for instrumented sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point. It implements a fluent
//! builder for assembling a [`SortingService`] from a sequence, a comparator,
//! a direction, a selection and an observer, and re-exports the types a
//! caller needs to drive it.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for everything but the
//!   sequence and the comparator.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Strict**: Setting a parameter twice is reported as an error rather
//!   than silently overwriting it.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SortingServiceBuilder`] via `SortScope::new()` or
//!    `SortingService::builder()`.
//! 2. Chain configuration methods (`.items()`, `.comparator()`, etc.).
//! 3. Call `.build()` to obtain a validated [`SortingService`].

// External dependencies
use std::sync::Arc;

// Internal dependencies
use crate::engine::observer::NullObserver;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::display::{PacingConfig, SequenceDisplay};
pub use crate::adapters::log::EventLog;
pub use crate::adapters::remap::RemappingObserver;
pub use crate::algorithms::AlgorithmKind;
pub use crate::engine::context::ExecutionContext;
pub use crate::engine::events::{SortEvent, SortStats};
pub use crate::engine::observer::SortObserver;
pub use crate::ordering::comparator::{
    Compare, Direction, DirectionalComparator, FloatOrder, NaturalOrder,
};
pub use crate::primitives::cancellation::CancellationToken;
pub use crate::primitives::errors::{Cancelled, SortError};
pub use crate::primitives::items::Items;
pub use crate::selection::{ArbitraryFilter, RangeFilter, Selection};
pub use crate::service::randomize::{ItemRandomizer, UniformRandomizer, WORDS, WordRandomizer};
pub use crate::service::sorting::{SortHandle, SortReport, SortState, SortingService};

/// Fluent builder for configuring a sorting service.
pub struct SortingServiceBuilder<T> {
    /// Sequence to sort.
    pub items: Option<Items<T>>,

    /// Base ordering, before the direction is applied.
    pub comparator: Option<Arc<dyn Compare<T>>>,

    /// Sort direction (default: Ascending).
    pub direction: Option<Direction>,

    /// Indices taking part in a sort (default: All).
    pub selection: Option<Selection>,

    /// Observer notified of every event (default: none).
    pub observer: Option<Box<dyn SortObserver>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T> Default for SortingServiceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SortingServiceBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            items: None,
            comparator: None,
            direction: None,
            selection: None,
            observer: None,
            duplicate_param: None,
        }
    }

    /// Set the sequence to sort.
    ///
    /// Passing an existing [`Items`] shares it with the caller.
    pub fn items(mut self, items: impl Into<Items<T>>) -> Self {
        if self.items.is_some() {
            self.duplicate_param = Some("items");
        }
        self.items = Some(items.into());
        self
    }

    /// Set the base ordering.
    pub fn comparator<C>(mut self, comparator: C) -> Self
    where
        C: Compare<T> + 'static,
    {
        if self.comparator.is_some() {
            self.duplicate_param = Some("comparator");
        }
        self.comparator = Some(Arc::new(comparator));
        self
    }

    /// Set the sort direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        if self.direction.is_some() {
            self.duplicate_param = Some("direction");
        }
        self.direction = Some(direction);
        self
    }

    /// Set the selection.
    pub fn selection(mut self, selection: Selection) -> Self {
        if self.selection.is_some() {
            self.duplicate_param = Some("selection");
        }
        self.selection = Some(selection);
        self
    }

    /// Set the observer.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: SortObserver + 'static,
    {
        if self.observer.is_some() {
            self.duplicate_param = Some("observer");
        }
        self.observer = Some(Box::new(observer));
        self
    }

    /// Validate the configuration and build the service.
    pub fn build(self) -> Result<SortingService<T>, SortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let items = self
            .items
            .ok_or(SortError::MissingParameter { parameter: "items" })?;
        let base = self.comparator.ok_or(SortError::MissingParameter {
            parameter: "comparator",
        })?;

        let len = items.len();
        let selection = self.selection.unwrap_or_default();
        selection.validate_for(len)?;

        let comparator = DirectionalComparator::from_shared(base)
            .with_direction(self.direction.unwrap_or_default());
        let observer = self
            .observer
            .unwrap_or_else(|| Box::new(NullObserver));

        Ok(SortingService::from_parts(
            items, comparator, selection, observer,
        ))
    }
}

impl<T> SortingService<T> {
    /// Start configuring a service.
    pub fn builder() -> SortingServiceBuilder<T> {
        SortingServiceBuilder::new()
    }
}
