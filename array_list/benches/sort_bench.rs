//! Benchmarks for appending, shifting and sorting.
//!
//! Run with: cargo bench -p array_list
//!
//! Each group compares `ArrayList` against `Vec` doing the same work, so regressions in the growth policy or
//! the quicksort show up as a change in the ratio rather than in absolute numbers.

use array_list::ArrayList;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// INPUT GENERATION
// ============================================================================

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Deterministic pseudo-random input (linear congruential generator).
fn random_values(len: usize, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            state >> 33
        })
        .collect()
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("array_list", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = ArrayList::new();
                for value in 0..size {
                    list.add(black_box(value));
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::with_capacity(16);
                for value in 0..size {
                    vec.push(black_box(value));
                }
                vec
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for &size in &SIZES[..2] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("array_list", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = ArrayList::new();
                for value in 0..size {
                    let _ = list.insert(0, black_box(value));
                }
                list
            });
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for &size in SIZES {
        let values = random_values(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("random", size), &values, |b, values| {
            b.iter_batched(
                || values.iter().copied().collect::<ArrayList<_>>(),
                |mut list| {
                    list.sort();
                    list
                },
                criterion::BatchSize::LargeInput,
            );
        });

        let sorted: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("sorted", size), &sorted, |b, values| {
            b.iter_batched(
                || values.iter().copied().collect::<ArrayList<_>>(),
                |mut list| {
                    list.sort();
                    list
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("vec_unstable", size), &values, |b, values| {
            b.iter_batched(
                || values.clone(),
                |mut vec| {
                    vec.sort_unstable();
                    vec
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_insert_front, bench_sort);
criterion_main!(benches);
