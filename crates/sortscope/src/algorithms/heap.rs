//! Heap sort.
//!
//! Builds a max-heap bottom-up, then repeatedly swaps the root with the last
//! element of the shrinking heap and sifts the new root down.

// Internal dependencies
use crate::engine::context::ExecutionContext;
use crate::primitives::errors::SortError;

/// Sort the whole view of `ctx`.
pub fn heap_sort<T>(ctx: &mut ExecutionContext<'_, T>) -> Result<(), SortError> {
    let len = ctx.len();

    // Phase 1: build the heap
    for root in (0..len / 2).rev() {
        heapify(ctx, root, len)?;
    }

    // Phase 2: extract the maximum into the sorted suffix
    for end in (1..len).rev() {
        ctx.swap(0, end)?;
        heapify(ctx, 0, end)?;
    }

    Ok(())
}

/// Sift the element at `root` down within the heap `[0, heap_len)`.
pub fn heapify<T>(
    ctx: &mut ExecutionContext<'_, T>,
    root: usize,
    heap_len: usize,
) -> Result<(), SortError> {
    ctx.record_iteration()?;

    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let mut largest = root;

    if left < heap_len && ctx.compare(left, largest)?.is_gt() {
        largest = left;
    }
    if right < heap_len && ctx.compare(right, largest)?.is_gt() {
        largest = right;
    }

    if largest != root {
        ctx.swap(root, largest)?;
        heapify(ctx, largest, heap_len)?;
    }

    Ok(())
}
