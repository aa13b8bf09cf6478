//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions and data structures used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Service
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
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Cooperative cancellation token.
pub mod cancellation;

/// Index-segment view.
pub mod segment;

/// Fixed-capacity selection mask.
pub mod bitset;

/// Shared sequence storage.
pub mod items;
