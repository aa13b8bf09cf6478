#![cfg(feature = "dev")]
//! Tests for the instrumented sorting algorithms.
//!
//! These tests verify quicksort, heap sort and selection sort as driven
//! through an execution context:
//! - Output is a sorted permutation of the input, in both directions
//! - The swap stream, replayed on the input, reproduces the output
//! - Sorted input is handled without needless swaps
//! - Cancellation unwinds the whole call tree
//!
//! ## Test Organization
//!
//! 1. **Correctness** - Sorted permutations, directions, duplicates, floats
//! 2. **Worked Examples** - Known inputs with known outputs
//! 3. **Edge Cases** - Empty and single-element input, sorted input
//! 4. **Cancellation** - Mid-run cancel, no effect after cancel
//! 5. **Catalogue** - Names, parsing, defaults

use core::cmp::Ordering;
use std::str::FromStr;
use std::thread;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortscope::internals::adapters::log::EventLog;
use sortscope::internals::algorithms::AlgorithmKind;
use sortscope::internals::algorithms::quick::partition;
use sortscope::internals::engine::context::ExecutionContext;
use sortscope::internals::engine::events::{SortEvent, SortStats};
use sortscope::internals::engine::observer::{NullObserver, SortObserver};
use sortscope::internals::ordering::comparator::{
    Compare, Direction, DirectionalComparator, FloatOrder, NaturalOrder,
};
use sortscope::internals::primitives::cancellation::CancellationToken;
use sortscope::internals::primitives::errors::SortError;

// ============================================================================
// Helper Functions
// ============================================================================

/// Run `kind` over `data` and return the event log and statistics.
fn run_sort<T, C>(
    kind: AlgorithmKind,
    data: &mut [T],
    comparator: &C,
) -> (Result<(), SortError>, Vec<SortEvent>, SortStats)
where
    C: Compare<T>,
{
    let log = EventLog::new();
    let mut observer = log.clone();
    let token = CancellationToken::new();
    let mut stats = SortStats::default();
    let result = {
        let mut ctx = ExecutionContext::new(data, comparator, &mut observer, &token, &mut stats);
        kind.run(&mut ctx)
    };
    (result, log.events(), stats)
}

/// Run `kind` over `data` without recording, returning the statistics.
fn run_unrecorded(kind: AlgorithmKind, data: &mut [i32]) -> Result<SortStats, SortError> {
    let mut observer = NullObserver;
    let token = CancellationToken::new();
    let mut stats = SortStats::default();
    {
        let mut ctx = ExecutionContext::new(data, &NaturalOrder, &mut observer, &token, &mut stats);
        kind.run(&mut ctx)?;
    }
    Ok(stats)
}

/// Recursive Lomuto quicksort, the reference for the event order.
fn recursive_quick<T>(ctx: &mut ExecutionContext<'_, T>) -> Result<(), SortError> {
    let len = ctx.len();
    if len <= 1 {
        return Ok(());
    }
    ctx.record_iteration()?;
    let pivot = partition(ctx)?;
    recursive_quick(&mut ctx.slice(0, pivot)?)?;
    recursive_quick(&mut ctx.slice(pivot + 1, len - pivot - 1)?)
}

fn random_ints(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(-50..50)).collect()
}

/// Observer that cancels the run after a fixed number of swaps.
struct CancelAfter {
    token: CancellationToken,
    remaining: usize,
    swaps: Vec<(usize, usize)>,
}

impl SortObserver for CancelAfter {
    fn swap(&mut self, a: usize, b: usize, token: &CancellationToken) -> Result<(), SortError> {
        token.check()?;
        self.swaps.push((a, b));
        self.remaining -= 1;
        if self.remaining == 0 {
            self.token.cancel();
        }
        Ok(())
    }
}

// ============================================================================
// Correctness Tests
// ============================================================================

/// Test every algorithm yields a sorted permutation in both directions.
///
/// Verifies against the standard library sort on seeded random inputs of
/// several sizes, including many duplicates.
#[test]
fn test_sorted_permutation_all_kinds() {
    let mut rng = StdRng::seed_from_u64(42);

    for len in [2, 3, 10, 57, 200] {
        let input = random_ints(&mut rng, len);

        for kind in AlgorithmKind::ALL {
            for direction in [Direction::Ascending, Direction::Descending] {
                let comparator = DirectionalComparator::new(NaturalOrder).with_direction(direction);
                let mut data = input.clone();
                let (result, _, _) = run_sort(kind, &mut data, &comparator);
                result.unwrap();

                let mut expected = input.clone();
                expected.sort_by(|a, b| direction.apply(a.cmp(b)));
                assert_eq!(data, expected, "{kind} {direction:?} len={len}");
            }
        }
    }
}

/// Test that replaying the swap stream on the input reproduces the output.
#[test]
fn test_swap_stream_replays_to_output() {
    let mut rng = StdRng::seed_from_u64(7);
    let input = random_ints(&mut rng, 64);

    for kind in AlgorithmKind::ALL {
        let mut data = input.clone();
        let (result, events, stats) = run_sort(kind, &mut data, &NaturalOrder);
        result.unwrap();

        let mut replayed = input.clone();
        let applied = SortEvent::replay_swaps(&events, &mut replayed).unwrap();
        assert_eq!(replayed, data, "{kind}");
        assert_eq!(applied, stats.swaps);
        assert_eq!(SortStats::from_events(&events), stats);
        assert!(
            events
                .iter()
                .all(|e| !matches!(e, SortEvent::Swap { a, b } if a == b)),
            "{kind} reported a self-swap"
        );
    }
}

/// Test sorting floats with the float order, NaN last.
#[test]
fn test_float_sort() {
    for kind in AlgorithmKind::ALL {
        let mut data = vec![0.25, f64::NAN, -1.5, 3.0, 0.0];
        let (result, _, _) = run_sort(kind, &mut data, &FloatOrder);
        result.unwrap();

        assert_relative_eq!(data[0], -1.5);
        assert_relative_eq!(data[1], 0.0);
        assert_relative_eq!(data[2], 0.25);
        assert_relative_eq!(data[3], 3.0);
        assert!(data[4].is_nan(), "{kind}");
    }
}

/// Test sorting by a closure over strings.
#[test]
fn test_closure_comparator() {
    let by_len = |a: &String, b: &String| a.len().cmp(&b.len()).then_with(|| a.cmp(b));

    for kind in AlgorithmKind::ALL {
        let mut data: Vec<String> = ["giraffe", "fox", "Mars", "cat", "bitcoin"]
            .map(String::from)
            .to_vec();
        let (result, _, _) = run_sort(kind, &mut data, &by_len);
        result.unwrap();

        assert_eq!(data, ["cat", "fox", "Mars", "bitcoin", "giraffe"], "{kind}");
    }
}

// ============================================================================
// Worked Example Tests
// ============================================================================

/// Test quicksort on `[5, 3, 8, 1]`.
///
/// Verifies the final order; the swap count is recorded, not constrained
/// beyond being non-zero.
#[test]
fn test_quick_sort_worked_example() {
    let mut data = vec![5, 3, 8, 1];
    let (result, events, stats) = run_sort(AlgorithmKind::Quick, &mut data, &NaturalOrder);
    result.unwrap();

    assert_eq!(data, vec![1, 3, 5, 8]);
    assert!(stats.swaps > 0);
    assert_eq!(events.first(), Some(&SortEvent::Iteration));
}

/// Test Lomuto partition places the pivot at its final position.
#[test]
fn test_partition_pivot_position() {
    let mut data = vec![7, 2, 9, 4, 5];
    let mut observer = EventLog::new();
    let token = CancellationToken::new();
    let mut stats = SortStats::default();

    let pivot = {
        let mut ctx =
            ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
        partition(&mut ctx).unwrap()
    };

    assert_eq!(pivot, 2);
    assert_eq!(data[pivot], 5);
    assert!(data[..pivot].iter().all(|&v| v < 5));
    assert!(data[pivot + 1..].iter().all(|&v| v >= 5));
    assert_eq!(stats.comparisons, 4);
}

/// Test heap sort descending on a small input.
#[test]
fn test_heap_sort_descending() {
    let mut data = vec![3, 9, 1, 7, 5, 5];
    let comparator = DirectionalComparator::new(NaturalOrder).with_direction(Direction::Descending);
    let (result, _, _) = run_sort(AlgorithmKind::Heap, &mut data, &comparator);
    result.unwrap();

    assert_eq!(data, vec![9, 7, 5, 5, 3, 1]);
}

/// Test selection sort performs at most one swap per position.
#[test]
fn test_selection_sort_swap_bound() {
    let mut data = vec![6, 5, 4, 3, 2, 1];
    let (result, _, stats) = run_sort(AlgorithmKind::Selection, &mut data, &NaturalOrder);
    result.unwrap();

    assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
    assert!(stats.swaps <= 6);
    assert_eq!(stats.iterations, 6);
    assert_eq!(stats.comparisons, 15);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test empty and single-element input emit no comparisons or swaps.
#[test]
fn test_trivial_inputs() {
    for kind in AlgorithmKind::ALL {
        let mut empty: Vec<i32> = vec![];
        let (result, _, stats) = run_sort(kind, &mut empty, &NaturalOrder);
        result.unwrap();
        assert_eq!(stats.comparisons + stats.swaps, 0, "{kind}");

        let mut single = vec![42];
        let (result, _, stats) = run_sort(kind, &mut single, &NaturalOrder);
        result.unwrap();
        assert_eq!(single, vec![42]);
        assert_eq!(stats.comparisons + stats.swaps, 0, "{kind}");
    }
}

/// Test sorted distinct input needs no swaps for quicksort and selection sort.
///
/// Heap sort must still build a heap, so only its output is checked.
#[test]
fn test_sorted_input() {
    let sorted: Vec<i32> = (0..32).collect();

    for kind in [AlgorithmKind::Quick, AlgorithmKind::Selection] {
        let mut data = sorted.clone();
        let (result, events, stats) = run_sort(kind, &mut data, &NaturalOrder);
        result.unwrap();
        assert_eq!(data, sorted);
        assert_eq!(stats.swaps, 0, "{kind}");
        assert!(!events.iter().any(SortEvent::is_swap));
    }

    let mut data = sorted.clone();
    let (result, _, _) = run_sort(AlgorithmKind::Heap, &mut data, &NaturalOrder);
    result.unwrap();
    assert_eq!(data, sorted);
}

/// Test all-equal input stays untouched by every algorithm.
#[test]
fn test_all_equal_input() {
    for kind in AlgorithmKind::ALL {
        let mut data = vec![(1, 'a'); 9];
        let by_first = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
        let (result, _, _) = run_sort(kind, &mut data, &by_first);
        result.unwrap();
        assert!(data.iter().all(|&v| v == (1, 'a')));
    }
}

/// Test quicksort emits the depth-first event order of the recursive form.
#[test]
fn test_quick_event_order_is_depth_first() {
    let mut rng = StdRng::seed_from_u64(5);
    let input = random_ints(&mut rng, 200);

    let mut data = input.clone();
    let (result, events, _) = run_sort(AlgorithmKind::Quick, &mut data, &NaturalOrder);
    result.unwrap();

    let mut expected = input.clone();
    let log = EventLog::new();
    let mut observer = log.clone();
    let token = CancellationToken::new();
    let mut stats = SortStats::default();
    {
        let mut ctx =
            ExecutionContext::new(&mut expected, &NaturalOrder, &mut observer, &token, &mut stats);
        recursive_quick(&mut ctx).unwrap();
    }

    assert_eq!(data, expected);
    assert_eq!(events, log.events());
}

/// Test partition of an empty view yields no pivot work.
#[test]
fn test_partition_empty_view() {
    let mut data: Vec<i32> = vec![];
    let mut observer = EventLog::new();
    let token = CancellationToken::new();
    let mut stats = SortStats::default();

    let pivot = {
        let mut ctx =
            ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
        partition(&mut ctx).unwrap()
    };

    assert_eq!(pivot, 0);
    assert_eq!(stats, SortStats::default());
    assert!(observer.is_empty());
}

/// Test degenerate inputs sort on a small stack for every algorithm.
///
/// Sorted, reversed and all-equal inputs drive Lomuto quicksort to one
/// segment per element; the sort must not grow the call stack with them.
#[test]
fn test_degenerate_inputs_small_stack() {
    const LEN: i32 = 5_000;

    let worker = thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| {
            let inputs: [(&str, Vec<i32>); 3] = [
                ("sorted", (0..LEN).collect()),
                ("reversed", (0..LEN).rev().collect()),
                ("all-equal", vec![7; LEN as usize]),
            ];

            for kind in AlgorithmKind::ALL {
                for (name, input) in &inputs {
                    let mut data = input.clone();
                    let stats = run_unrecorded(kind, &mut data).unwrap();

                    let mut expected = input.clone();
                    expected.sort();
                    assert_eq!(data, expected, "{kind} {name}");
                    assert!(stats.comparisons > 0, "{kind} {name}");
                }
            }
        })
        .unwrap();

    worker.join().unwrap();
}

// ============================================================================
// Cancellation Tests
// ============================================================================

/// Test cancellation mid-run unwinds and stops further events.
///
/// Verifies that after the cancelling swap no other swap is delivered, and
/// that the working copy equals the input with the delivered swaps applied.
#[test]
fn test_cancel_mid_run() {
    let mut rng = StdRng::seed_from_u64(99);
    let input = random_ints(&mut rng, 100);

    for kind in AlgorithmKind::ALL {
        let token = CancellationToken::new();
        let mut observer = CancelAfter {
            token: token.clone(),
            remaining: 5,
            swaps: Vec::new(),
        };
        let mut stats = SortStats::default();
        let mut data = input.clone();

        let result = {
            let mut ctx =
                ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
            kind.run(&mut ctx)
        };

        assert_eq!(result, Err(SortError::Cancelled), "{kind}");
        assert_eq!(observer.swaps.len(), 5, "{kind}");
        assert_eq!(stats.swaps, 5);

        let mut replayed = input.clone();
        for &(a, b) in &observer.swaps {
            replayed.swap(a, b);
        }
        assert_eq!(replayed, data, "{kind}");
    }
}

/// Test a pre-cancelled token aborts before any event.
#[test]
fn test_cancel_before_start() {
    for kind in AlgorithmKind::ALL {
        let token = CancellationToken::new();
        token.cancel();
        let log = EventLog::new();
        let mut observer = log.clone();
        let mut stats = SortStats::default();
        let mut data = vec![3, 2, 1];

        let result = {
            let mut ctx =
                ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
            kind.run(&mut ctx)
        };

        assert!(result.unwrap_err().is_cancelled());
        assert!(log.is_empty(), "{kind}");
        assert_eq!(data, vec![3, 2, 1]);
    }
}

// ============================================================================
// Catalogue Tests
// ============================================================================

/// Test names, parsing and the default kind.
#[test]
fn test_catalogue() {
    let names: Vec<_> = AlgorithmKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names, vec!["quick", "heap", "selection"]);
    assert_eq!(AlgorithmKind::default(), AlgorithmKind::Quick);

    assert_eq!(AlgorithmKind::from_str("Heap"), Ok(AlgorithmKind::Heap));
    assert_eq!("selection".parse(), Ok(AlgorithmKind::Selection));
    assert_eq!(
        "bubble".parse::<AlgorithmKind>(),
        Err(SortError::UnknownAlgorithm("bubble".into()))
    );
    assert_eq!(AlgorithmKind::Quick.to_string(), "quick");
}

/// Test the direction decorator reorders without changing the comparator.
#[test]
fn test_direction_flip_between_runs() {
    let comparator = DirectionalComparator::new(NaturalOrder);
    let mut data = vec![2, 3, 1];

    let (result, _, _) = run_sort(AlgorithmKind::Heap, &mut data, &comparator);
    result.unwrap();
    assert_eq!(data, vec![1, 2, 3]);

    comparator.set_direction(Direction::Descending);
    let (result, _, _) = run_sort(AlgorithmKind::Heap, &mut data, &comparator);
    result.unwrap();
    assert_eq!(data, vec![3, 2, 1]);
    assert_eq!(comparator.compare(&1, &2), Ordering::Greater);
}
