//! Selection sort.
//!
//! Each pass scans the unsorted suffix for its minimum, keeping the first
//! occurrence among equal elements, and swaps it to the front of the suffix.

// Internal dependencies
use crate::engine::context::ExecutionContext;
use crate::primitives::errors::SortError;

/// Sort the whole view of `ctx`.
pub fn selection_sort<T>(ctx: &mut ExecutionContext<'_, T>) -> Result<(), SortError> {
    let len = ctx.len();

    for start in 0..len {
        let mut suffix = ctx.slice(start, len - start)?;
        suffix.record_iteration()?;

        let mut min = 0;
        for i in 1..suffix.len() {
            if suffix.is_less(i, min)? {
                min = i;
            }
        }

        suffix.swap(min, 0)?;
    }

    Ok(())
}
