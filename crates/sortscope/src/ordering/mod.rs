//! Layer 2: Ordering
//!
//! # Purpose
//!
//! This layer provides the comparison seam of the engine: the [`Compare`]
//! trait, the built-in orders, and the direction decorator that flips
//! ascending/descending without replacing the comparator the engine holds.
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
//! Layer 2: Ordering ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! [`Compare`]: comparator::Compare

/// Comparator trait, built-in orders and direction decorator.
pub mod comparator;
