//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides the observers the sorting service composes:
//!
//! - **Remap**: translates dense working-copy indices into original indices
//! - **Display**: paces a run and applies its swaps to the shared sequence
//! - **Log**: records the event stream for replay and inspection
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Service
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Selection
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Ordering
//!   ↓
//! Layer 1: Primitives
//! ```

/// Index-remapping observer.
pub mod remap;

/// Pacing sequence display.
pub mod display;

/// Recording observer.
pub mod log;
