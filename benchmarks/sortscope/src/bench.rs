//! Instrumented sorting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Raw algorithm throughput through the execution context (no observer work)
//! - Overhead of recording the full event stream
//! - Overhead of remapping a partial selection
//! - End-to-end service runs with the pacing display at zero delay

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use sortscope::internals::adapters::log::EventLog;
use sortscope::internals::adapters::remap::RemappingObserver;
use sortscope::internals::engine::context::ExecutionContext;
use sortscope::internals::engine::events::SortStats;
use sortscope::internals::engine::observer::NullObserver;
use sortscope::internals::primitives::cancellation::CancellationToken;
use sortscope::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform random integers.
fn generate_random(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..1_000_000)).collect()
}

/// Mostly sorted input with a few random exchanges.
fn generate_nearly_sorted(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<i64> = (0..size as i64).collect();
    for _ in 0..size / 50 {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        data.swap(a, b);
    }
    data
}

fn sort_plain(kind: AlgorithmKind, mut data: Vec<i64>) -> Vec<i64> {
    let token = CancellationToken::new();
    let mut observer = NullObserver;
    let mut stats = SortStats::default();
    let mut ctx = ExecutionContext::new(&mut data, &NaturalOrder, &mut observer, &token, &mut stats);
    kind.run(&mut ctx).unwrap();
    data
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    group.sample_size(50);

    for size in [100, 1_000, 5_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate_random(size, 42);

        for kind in AlgorithmKind::ALL {
            // Selection sort is quadratic; keep it to the small sizes.
            if kind == SelectionSort && size > 1_000 {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, _| {
                b.iter(|| sort_plain(kind, black_box(data.clone())))
            });
        }
    }
    group.finish();
}

fn bench_nearly_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearly_sorted");
    group.sample_size(50);

    let size = 2_000;
    group.throughput(Throughput::Elements(size as u64));
    let data = generate_nearly_sorted(size, 7);

    for kind in [Quick, Heap] {
        group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, _| {
            b.iter(|| sort_plain(kind, black_box(data.clone())))
        });
    }
    group.finish();
}

fn bench_recording(c: &mut Criterion) {
    let mut group = c.benchmark_group("recording");
    group.sample_size(50);

    let size = 1_000;
    group.throughput(Throughput::Elements(size as u64));
    let data = generate_random(size, 42);

    group.bench_function("event_log", |b| {
        b.iter(|| {
            let mut dense = black_box(data.clone());
            let token = CancellationToken::new();
            let mut observer = EventLog::new();
            let mut stats = SortStats::default();
            let mut ctx =
                ExecutionContext::new(&mut dense, &NaturalOrder, &mut observer, &token, &mut stats);
            Quick.run(&mut ctx).unwrap();
            observer.len()
        })
    });

    group.bench_function("remapped_half", |b| {
        let indices: Vec<usize> = (0..size).step_by(2).collect();
        b.iter(|| {
            let mut dense: Vec<i64> = indices.iter().map(|&i| data[i]).collect();
            let token = CancellationToken::new();
            let mut inner = NullObserver;
            let mut observer = RemappingObserver::new(&mut inner, &indices);
            let mut stats = SortStats::default();
            let mut ctx =
                ExecutionContext::new(&mut dense, &NaturalOrder, &mut observer, &token, &mut stats);
            Heap.run(&mut ctx).unwrap();
            stats
        })
    });
    group.finish();
}

fn bench_service(c: &mut Criterion) {
    let mut group = c.benchmark_group("service");
    group.sample_size(30);

    for size in [1_000, 5_000] {
        group.throughput(Throughput::Elements(size as u64));
        let data = generate_random(size, 42);

        group.bench_with_input(BenchmarkId::new("display_run", size), &size, |b, _| {
            b.iter(|| {
                let items = Items::new(black_box(data.clone()));
                let service = SortScope::new()
                    .items(items.clone())
                    .comparator(NaturalOrder)
                    .observer(SequenceDisplay::new(items.clone()))
                    .build()
                    .unwrap();
                service.run(Quick).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_algorithms,
    bench_nearly_sorted,
    bench_recording,
    bench_service
);
criterion_main!(benches);
