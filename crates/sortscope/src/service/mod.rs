//! Layer 7: Service
//!
//! # Purpose
//!
//! This layer ties the lower layers together into the object a caller drives:
//!
//! - **Sorting**: run lifecycle, single-run guard, cancellation and reports
//! - **Randomize**: refilling the shared sequence with random values
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Service ← You are here
//!   ↓
//! Layer 6: Adapters
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

/// Sorting service and run handles.
pub mod sorting;

/// Sequence randomizers.
pub mod randomize;
