//! Criterion micro-benchmarks for the Laplacian operators and Model B.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spinodal_bench::{initial_field, quench_profile, spectral_quench_profile, SIDE};
use spinodal_calculus::{CentralLaplacian, LaplacianOperator, SpectralLaplacian};
use spinodal_grid::Grid;
use spinodal_test_utils::noise_grid;

/// Benchmark: central FD Laplacian on a 128x128 grid for each error order.
fn bench_central_laplacian(c: &mut Criterion) {
    let phi = noise_grid::<f64, SIDE, SIDE>(42, 0.0, 1.0);
    let mut out = Grid::<f64, SIDE, SIDE>::new();

    for order in [2, 4, 8] {
        let op = CentralLaplacian::<f64>::new(order).unwrap();
        c.bench_function(&format!("central_laplacian_o{order}_128"), |b| {
            b.iter(|| {
                op.apply(black_box(&phi), &mut out, 0.5, 0.5).unwrap();
                black_box(&out);
            });
        });
    }
}

/// Benchmark: spectral Laplacian on a 128x128 grid (forward + mask + inverse).
fn bench_spectral_laplacian(c: &mut Criterion) {
    let phi = noise_grid::<f64, SIDE, SIDE>(42, 0.0, 1.0);
    let mut out = Grid::<f64, SIDE, SIDE>::new();
    let mut op = SpectralLaplacian::<f64>::new(SIDE, SIDE).unwrap();

    c.bench_function("spectral_laplacian_128", |b| {
        b.iter(|| {
            op.apply(black_box(&phi), &mut out, 0.5, 0.5).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: one Model B right-hand-side evaluation on each operator.
fn bench_model_b_rhs(c: &mut Criterion) {
    let (phi, dx, dy) = initial_field();
    let mut dphi = Grid::new();

    let mut fd = quench_profile(dx, dy).unwrap();
    c.bench_function("model_b_rhs_fd4_128", |b| {
        b.iter(|| {
            fd.evaluate(black_box(&phi), &mut dphi).unwrap();
            black_box(&dphi);
        });
    });

    let mut spectral = spectral_quench_profile(dx, dy).unwrap();
    c.bench_function("model_b_rhs_spectral_128", |b| {
        b.iter(|| {
            spectral.evaluate(black_box(&phi), &mut dphi).unwrap();
            black_box(&dphi);
        });
    });
}

criterion_group!(
    benches,
    bench_central_laplacian,
    bench_spectral_laplacian,
    bench_model_b_rhs
);
criterion_main!(benches);
