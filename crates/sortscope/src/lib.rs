//! # sortscope — Instrumented, cancellable sorting for Rust
//!
//! Sorting algorithms that report every step they take. Each comparison and
//! each swap goes through an execution context that notifies an observer,
//! which can pace the run (for an animation), record it (for replay) or
//! cancel it mid-way.
//!
//! ## What is in the box?
//!
//! * **Algorithms**: quicksort (Lomuto partition), heap sort and selection
//!   sort, all written against the same instrumented primitives.
//! * **Selections**: sort the whole sequence, a contiguous index range, or
//!   an arbitrary set of indices while leaving the rest in place.
//! * **Observers**: a pacing display that owns the visible sequence, an
//!   event log that records the exact event stream, and your own via
//!   [`SortObserver`](prelude::SortObserver).
//! * **Cancellation**: every primitive is a check point, and pacing delays
//!   are interruptible.
//!
//! ## Quick Start
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let service = SortScope::new()
//!     .items(vec![5, 3, 8, 1])
//!     .comparator(NaturalOrder)
//!     .build()?;
//!
//! let report = service.run(Quick)?;
//!
//! assert_eq!(report.state, SortState::Completed);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! Without an observer nothing writes back to the sequence. To see the
//! result, attach a [`SequenceDisplay`](prelude::SequenceDisplay) over the
//! same items:
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let items = Items::new(vec![4, 1, 3, 2]);
//!
//! let service = SortScope::new()
//!     .items(items.clone())
//!     .comparator(NaturalOrder)
//!     .selection(Selection::indices(4, &[0, 2])?)
//!     .observer(SequenceDisplay::new(items.clone()))
//!     .build()?;
//!
//! service.run(SelectionSort)?;
//!
//! // Only positions 0 and 2 were sorted.
//! assert_eq!(items.snapshot(), vec![3, 1, 4, 2]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Cancellation
//!
//! ```rust
//! use std::time::Duration;
//! use sortscope::prelude::*;
//!
//! let items = Items::new((0..64).rev().collect::<Vec<i32>>());
//! let display = SequenceDisplay::new(items.clone())
//!     .pacing(PacingConfig::animated(Duration::from_millis(50)));
//!
//! let service = SortScope::new()
//!     .items(items.clone())
//!     .comparator(NaturalOrder)
//!     .observer(display)
//!     .build()?;
//!
//! let handle = service.start(Heap)?;
//! assert!(service.is_running());
//!
//! service.cancel();
//! let report = handle.join()?;
//!
//! assert_eq!(report.state, SortState::Cancelled);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, SortError>`. Cancellation is
//! not an error: a cancelled run reports `SortState::Cancelled`, and every
//! swap committed before the cancellation stays committed.

// Layer 1: Primitives - errors, cancellation, views and shared storage.
mod primitives;

// Layer 2: Ordering - comparators and direction.
mod ordering;

// Layer 3: Engine - observer protocol and execution context.
mod engine;

// Layer 4: Algorithms - instrumented sorting algorithms.
mod algorithms;

// Layer 5: Selection - which indices take part in a sort.
mod selection;

// Layer 6: Adapters - observer implementations.
mod adapters;

// Layer 7: Service - orchestration and run lifecycle.
mod service;

// High-level fluent API for instrumented sorting.
mod api;

// Standard sortscope prelude.
pub mod prelude {
    pub use crate::api::{
        AlgorithmKind,
        AlgorithmKind::{Heap, Quick, Selection as SelectionSort},
        ArbitraryFilter, CancellationToken, Cancelled, Compare, Direction,
        Direction::{Ascending, Descending},
        DirectionalComparator, EventLog, FloatOrder, ItemRandomizer, Items, NaturalOrder,
        PacingConfig, RangeFilter, Selection, SequenceDisplay, SortError, SortEvent,
        SortHandle, SortObserver, SortReport, SortState, SortStats,
        SortingServiceBuilder as SortScope, SortingService, UniformRandomizer,
        WordRandomizer,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod ordering {
        pub use crate::ordering::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod selection {
        pub use crate::selection::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod service {
        pub use crate::service::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
