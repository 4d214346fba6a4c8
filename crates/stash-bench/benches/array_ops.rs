//! Criterion micro-benchmarks for growable-array pushes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use stash_array::GrowArray;

/// Benchmark: push 10K u64 values into a fresh array, growth included.
fn bench_push_10k(c: &mut Criterion) {
    c.bench_function("array_push_10k", |b| {
        b.iter(|| {
            let mut arr = GrowArray::new();
            for i in 0..10_000u64 {
                arr.push(i).unwrap();
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: refill a cleared array whose capacity is already grown.
fn bench_refill_10k(c: &mut Criterion) {
    let mut arr = GrowArray::new();
    arr.try_extend(0..10_000u64).unwrap();
    c.bench_function("array_refill_10k", |b| {
        b.iter(|| {
            arr.clear();
            for i in 0..10_000u64 {
                arr.push(i).unwrap();
            }
            black_box(arr.as_slice()[9_999]);
        });
    });
}

criterion_group!(benches, bench_push_10k, bench_refill_10k);
criterion_main!(benches);
