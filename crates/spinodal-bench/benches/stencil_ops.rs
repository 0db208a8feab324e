//! Criterion micro-benchmarks for stencil coefficient generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smallvec::smallvec;
use spinodal_stencil::{central_stencil, elementary_symmetric, fd_stencil, Offsets, StencilCache};

/// Benchmark: central second-derivative stencils up to error order 16.
fn bench_central_stencils(c: &mut Criterion) {
    c.bench_function("central_stencil_d2_up_to_o16", |b| {
        b.iter(|| {
            for order in (2..=16).step_by(2) {
                let s = central_stencil::<f64>(black_box(order), 2).unwrap();
                black_box(&s);
            }
        });
    });
}

/// Benchmark: an irregular one-sided offset set.
fn bench_irregular_offsets(c: &mut Criterion) {
    let offsets: Offsets = smallvec![-3, -1, 0, 2, 5, 6, 9];

    c.bench_function("fd_stencil_irregular_7pt", |b| {
        b.iter(|| {
            for order in 0..offsets.len() {
                let s = fd_stencil::<f64>(order, black_box(&offsets)).unwrap();
                black_box(&s);
            }
        });
    });
}

/// Benchmark: e_k over 32 values for every k.
fn bench_elementary_symmetric(c: &mut Criterion) {
    let values: Vec<f64> = (0..32).map(|i| (i as f64 - 15.5) * 0.25).collect();

    c.bench_function("elementary_symmetric_32", |b| {
        b.iter(|| {
            for k in 0..=values.len() {
                black_box(elementary_symmetric(k, black_box(&values)));
            }
        });
    });
}

/// Benchmark: cache hits after the first computation.
fn bench_cache_hits(c: &mut Criterion) {
    let mut cache = StencilCache::<f64>::new();
    cache.central(8, 2).unwrap();

    c.bench_function("stencil_cache_hit", |b| {
        b.iter(|| {
            let s = cache.central(black_box(8), 2).unwrap();
            black_box(&s);
        });
    });
}

criterion_group!(
    benches,
    bench_central_stencils,
    bench_irregular_offsets,
    bench_elementary_symmetric,
    bench_cache_hits
);
criterion_main!(benches);
