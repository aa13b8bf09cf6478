//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides the instrumented execution context the algorithms run
//! on, the observer capability it reports to, the event and statistics types
//! of a run, and the validation used before a run starts.
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
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Ordering
//!   ↓
//! Layer 1: Primitives
//! ```

/// Observer interface.
pub mod observer;

/// Instrumented execution context.
pub mod context;

/// Event stream and statistics.
pub mod events;

/// Validation utilities.
pub mod validator;
