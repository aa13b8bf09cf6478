//! Quicksort with Lomuto partitioning.
//!
//! The last element of each segment is the pivot. Elements comparing
//! strictly less than the pivot are moved into a growing left partition;
//! equal elements stay to the right of the boundary. The pivot is then swapped
//! into place and both sides are sorted through sub-contexts.
//!
//! Pending segments live on a heap-allocated work list rather than the call
//! stack: sorted, reversed and all-equal inputs degrade to one segment per
//! element. The left side is always taken before the right side, so the event
//! stream is the depth-first one.

// Internal dependencies
use crate::engine::context::ExecutionContext;
use crate::primitives::errors::SortError;

/// Sort the whole view of `ctx`.
pub fn quick_sort<T>(ctx: &mut ExecutionContext<'_, T>) -> Result<(), SortError> {
    // (offset, len) of segments still to sort, relative to the view
    let mut pending = vec![(0, ctx.len())];

    while let Some((offset, len)) = pending.pop() {
        if len <= 1 {
            continue;
        }

        let pivot = {
            let mut segment = ctx.slice(offset, len)?;
            segment.record_iteration()?;
            partition(&mut segment)?
        };

        // Right first so the left side is popped next.
        pending.push((offset + pivot + 1, len - pivot - 1));
        pending.push((offset, pivot));
    }

    Ok(())
}

/// Partition the view around its last element and return the pivot's final index.
///
/// An empty view has no pivot and yields `0` without touching the observer.
pub fn partition<T>(ctx: &mut ExecutionContext<'_, T>) -> Result<usize, SortError> {
    let Some(last) = ctx.len().checked_sub(1) else {
        return Ok(0);
    };
    let mut store = 0;

    for i in 0..last {
        if ctx.is_less(i, last)? {
            ctx.swap(store, i)?;
            store += 1;
        }
    }

    ctx.swap(last, store)?;
    Ok(store)
}
