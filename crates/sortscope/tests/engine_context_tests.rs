#![cfg(feature = "dev")]
//! Tests for comparators and the instrumented execution context.
//!
//! These tests verify the single door between algorithms and their data:
//! - Comparator orders and the direction decorator
//! - Index translation and observer notification order
//! - Cancellation checks at every primitive
//! - Event replay and statistics
//!
//! ## Test Organization
//!
//! 1. **Comparators** - Natural, float and closure orders; direction
//! 2. **Context Primitives** - compare, swap, record_iteration
//! 3. **Cancellation** - Pre-cancelled tokens, refusing observers
//! 4. **Events** - Replay and statistics
//! 5. **Validation** - Selection and builder checks

use core::cmp::Ordering;

use approx::assert_relative_eq;
use sortscope::internals::adapters::log::EventLog;
use sortscope::internals::engine::context::ExecutionContext;
use sortscope::internals::engine::events::{SortEvent, SortStats};
use sortscope::internals::engine::observer::{NullObserver, SortObserver};
use sortscope::internals::engine::validator::Validator;
use sortscope::internals::ordering::comparator::{
    Compare, Direction, DirectionalComparator, FloatOrder, NaturalOrder,
};
use sortscope::internals::primitives::cancellation::CancellationToken;
use sortscope::internals::primitives::errors::{Cancelled, SortError};

// ============================================================================
// Helper Functions
// ============================================================================

/// Observer that refuses every swap as if cancelled mid-delay.
struct RefusingObserver {
    attempts: usize,
}

impl SortObserver for RefusingObserver {
    fn swap(&mut self, _a: usize, _b: usize, _token: &CancellationToken) -> Result<(), SortError> {
        self.attempts += 1;
        Err(Cancelled.into())
    }
}

/// Observer that counts resets and otherwise accepts everything.
#[derive(Default)]
struct CountingObserver {
    resets: usize,
    swaps: usize,
}

impl SortObserver for CountingObserver {
    fn reset(&mut self) {
        self.resets += 1;
    }

    fn swap(&mut self, _a: usize, _b: usize, token: &CancellationToken) -> Result<(), SortError> {
        token.check()?;
        self.swaps += 1;
        Ok(())
    }
}

// ============================================================================
// Comparator Tests
// ============================================================================

/// Test the natural order and closures as comparators.
#[test]
fn test_natural_and_closure_orders() {
    assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
    assert_eq!(NaturalOrder.compare(&"b", &"a"), Ordering::Greater);

    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    assert_eq!(by_len.compare(&"abc", &"xyz"), Ordering::Equal);
    assert_eq!(by_len.compare(&"a", &"xyz"), Ordering::Less);
}

/// Test the float order places NaN last.
#[test]
fn test_float_order() {
    assert_eq!(FloatOrder.compare(&1.0_f64, &2.0), Ordering::Less);
    assert_eq!(FloatOrder.compare(&f64::NAN, &f64::INFINITY), Ordering::Greater);
    assert_eq!(FloatOrder.compare(&f32::NAN, &f32::NAN), Ordering::Equal);
    assert_eq!(FloatOrder.compare(&-0.5_f32, &f32::NAN), Ordering::Less);
}

/// Test that descending negates the base result.
#[test]
fn test_direction_negates() {
    let cmp = DirectionalComparator::new(NaturalOrder);
    assert_eq!(cmp.direction(), Direction::Ascending);
    assert_eq!(cmp.compare(&1, &2), Ordering::Less);

    cmp.set_direction(Direction::Descending);
    assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
    assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
    assert_eq!(Direction::Descending.reversed(), Direction::Ascending);
}

/// Test that clones share one direction.
///
/// Verifies that flipping the direction on one holder is seen by every other
/// holder without re-binding.
#[test]
fn test_direction_shared_by_clones() {
    let held_by_service: DirectionalComparator<i32> = DirectionalComparator::default();
    let held_by_ui = held_by_service.clone();

    held_by_ui.set_direction(Direction::Descending);
    assert_eq!(held_by_service.direction(), Direction::Descending);
    assert_eq!(held_by_service.compare(&1, &2), Ordering::Greater);
}

// ============================================================================
// Context Primitive Tests
// ============================================================================

/// Test compare forwards absolute indices and counts the comparison.
#[test]
fn test_compare_reports_absolute_indices() {
    let mut data = vec![9, 5, 7, 3];
    let log = EventLog::new();
    let mut observer = log.clone();
    let token = CancellationToken::new();
    let mut stats = SortStats::default();

    {
        let mut ctx =
            ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
        let mut sub = ctx.slice(1, 3).unwrap();
        assert_eq!(sub.base(), 1);
        assert_eq!(sub.compare(0, 2).unwrap(), Ordering::Greater);
        assert!(sub.is_less(2, 1).unwrap());
    }

    assert_eq!(
        log.events(),
        vec![
            SortEvent::Comparison {
                a: 1,
                b: 3,
                ordering: Ordering::Greater
            },
            SortEvent::Comparison {
                a: 3,
                b: 2,
                ordering: Ordering::Less
            },
        ]
    );
    assert_eq!(stats.comparisons, 2);
}

/// Test swap notifies the observer then exchanges the working elements.
#[test]
fn test_swap_notifies_and_mutates() {
    let mut data = vec![1, 2, 3];
    let log = EventLog::new();
    let mut observer = log.clone();
    let token = CancellationToken::new();
    let mut stats = SortStats::default();

    {
        let mut ctx =
            ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
        ctx.record_iteration().unwrap();
        ctx.swap(0, 2).unwrap();
        assert_eq!(ctx.as_slice(), &[3, 2, 1]);
    }

    assert_eq!(
        log.events(),
        vec![SortEvent::Iteration, SortEvent::Swap { a: 0, b: 2 }]
    );
    assert_eq!(stats.swaps, 1);
    assert_eq!(stats.iterations, 1);
}

/// Test that a self-swap is suppressed entirely.
///
/// Verifies that `swap(i, i)` reaches neither the observer nor the counters.
#[test]
fn test_self_swap_suppressed() {
    let mut data = vec![4, 5];
    let log = EventLog::new();
    let mut observer = log.clone();
    let token = CancellationToken::new();
    let mut stats = SortStats::default();

    {
        let mut ctx =
            ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
        ctx.swap(1, 1).unwrap();
    }

    assert!(log.is_empty());
    assert_eq!(stats, SortStats::default());
    assert_eq!(data, vec![4, 5]);
}

/// Test that an out-of-range index is an engine bug in debug builds.
#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "ExecutionContext")]
fn test_out_of_range_debug_assert() {
    let mut data = vec![1, 2];
    let mut observer = NullObserver;
    let token = CancellationToken::new();
    let mut stats = SortStats::default();
    let mut ctx = ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);

    let _ = ctx.swap(0, 2);
}

// ============================================================================
// Cancellation Tests
// ============================================================================

/// Test that every primitive refuses to run once the token is set.
#[test]
fn test_primitives_check_token_first() {
    let mut data = vec![2, 1];
    let log = EventLog::new();
    let mut observer = log.clone();
    let token = CancellationToken::new();
    let mut stats = SortStats::default();
    token.cancel();

    {
        let mut ctx =
            ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
        assert_eq!(ctx.compare(0, 1), Err(SortError::Cancelled));
        assert_eq!(ctx.swap(0, 1), Err(SortError::Cancelled));
        assert_eq!(ctx.record_iteration(), Err(SortError::Cancelled));
        // Even a self-swap is a check point.
        assert_eq!(ctx.swap(0, 0), Err(SortError::Cancelled));
    }

    assert!(log.is_empty());
    assert_eq!(data, vec![2, 1]);
    assert_eq!(stats, SortStats::default());
}

/// Test that a swap refused by the observer leaves the working copy intact.
#[test]
fn test_refused_swap_does_not_mutate() {
    let mut data = vec![2, 1];
    let mut observer = RefusingObserver { attempts: 0 };
    let token = CancellationToken::new();
    let mut stats = SortStats::default();

    {
        let mut ctx =
            ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
        assert!(ctx.swap(0, 1).unwrap_err().is_cancelled());
    }

    assert_eq!(observer.attempts, 1);
    assert_eq!(data, vec![2, 1]);
    assert_eq!(stats.swaps, 0);
}

/// Test that the default observer methods honor cancellation.
#[test]
fn test_default_observer_methods() {
    let mut observer = CountingObserver::default();
    let token = CancellationToken::new();

    assert!(observer.record_iteration(&token).is_ok());
    assert!(observer.record_comparison(0, 1, Ordering::Less, &token).is_ok());
    observer.reset();
    assert_eq!(observer.resets, 1);

    token.cancel();
    assert_eq!(observer.record_iteration(&token), Err(Cancelled));
    assert_eq!(observer.swap(0, 1, &token), Err(SortError::Cancelled));
    assert_eq!(observer.swaps, 0);
}

// ============================================================================
// Event Tests
// ============================================================================

/// Test replaying recorded swaps reproduces the sorted order.
#[test]
fn test_replay_swaps() {
    let events = [
        SortEvent::Iteration,
        SortEvent::Swap { a: 0, b: 2 },
        SortEvent::Comparison {
            a: 0,
            b: 1,
            ordering: Ordering::Less,
        },
        SortEvent::Swap { a: 1, b: 2 },
    ];
    let mut data = vec![3.5, 1.5, 0.5];

    let applied = SortEvent::replay_swaps(&events, &mut data).unwrap();

    assert_eq!(applied, 2);
    assert_relative_eq!(data[0], 0.5);
    assert_relative_eq!(data[1], 3.5);
    assert_relative_eq!(data[2], 1.5);
}

/// Test replay rejects swaps outside the data.
#[test]
fn test_replay_out_of_range() {
    let events = [SortEvent::Swap { a: 0, b: 3 }];
    let mut data = vec![1, 2, 3];

    assert!(matches!(
        SortEvent::replay_swaps(&events, &mut data),
        Err(SortError::IndexOutOfRange { index: 3, len: 3 })
    ));
}

/// Test statistics derived from an event list.
#[test]
fn test_stats_from_events() {
    let events = [
        SortEvent::Iteration,
        SortEvent::Comparison {
            a: 0,
            b: 1,
            ordering: Ordering::Equal,
        },
        SortEvent::Comparison {
            a: 1,
            b: 2,
            ordering: Ordering::Less,
        },
        SortEvent::Swap { a: 0, b: 1 },
    ];

    let stats = SortStats::from_events(&events);

    assert_eq!(stats.iterations, 1);
    assert_eq!(stats.comparisons, 2);
    assert_eq!(stats.swaps, 1);
    assert!(events[3].is_swap());
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test selection validation.
#[test]
fn test_validate_selection() {
    assert!(Validator::validate_selection(&[], 0).is_ok());
    assert!(Validator::validate_selection(&[0, 2, 5], 6).is_ok());

    assert!(matches!(
        Validator::validate_selection(&[0, 6], 6),
        Err(SortError::InvalidSelection(_))
    ));
    if let Err(SortError::InvalidSelection(msg)) = Validator::validate_selection(&[1, 1], 4) {
        assert!(msg.contains("strictly increasing"), "got: {msg}");
    } else {
        panic!("Expected InvalidSelection for duplicate index");
    }
}

/// Test range and duplicate-parameter validation.
#[test]
fn test_validate_range_and_duplicates() {
    assert!(Validator::validate_range(3, 3).is_ok());
    assert_eq!(
        Validator::validate_range(4, 3),
        Err(SortError::InvalidRange { from: 4, to: 3 })
    );
    assert_eq!(
        Validator::validate_no_duplicates(Some("items")),
        Err(SortError::DuplicateParameter { parameter: "items" })
    );
    assert!(Validator::validate_no_duplicates(None).is_ok());
}
