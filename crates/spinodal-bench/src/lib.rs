//! Benchmark profiles for the spinodal PDE toolkit.
//!
//! - [`quench_profile`]: a 128x128 Model B right-hand side on the
//!   fourth-order finite-difference Laplacian, seeded near the mixed state.
//! - [`spectral_quench_profile`]: the same system on the spectral Laplacian.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spinodal_calculus::{CentralLaplacian, SpectralLaplacian};
use spinodal_core::OperatorError;
use spinodal_grid::{fill_equispaced, Grid};
use spinodal_model::{ModelB, ModelError, ModelParams};

/// Side length of the benchmark grids.
pub const SIDE: usize = 128;

/// Physical length of the periodic domain.
pub const DOMAIN: f64 = 64.0;

/// Smooth, deterministic initial condition: a sum of a few low modes with
/// amplitude `0.05` around zero.
pub fn initial_field() -> (Grid<f64, SIDE, SIDE>, f64, f64) {
    let mut phi = Grid::new();
    let k = std::f64::consts::TAU / DOMAIN;
    let (dx, dy) = fill_equispaced(&mut phi, (0.0, DOMAIN), (0.0, DOMAIN), |x, y| {
        0.05 * ((3.0 * k * x).sin() * (5.0 * k * y).cos() + (7.0 * k * (x + y)).cos())
    });
    (phi, dx, dy)
}

/// Model B on the fourth-order central Laplacian.
pub fn quench_profile(
    dx: f64,
    dy: f64,
) -> Result<ModelB<f64, CentralLaplacian<f64>, SIDE, SIDE>, ModelError> {
    let params = ModelParams {
        dx,
        dy,
        ..ModelParams::default()
    };
    let lap = CentralLaplacian::new(4).map_err(OperatorError::from)?;
    ModelB::new(params, lap)
}

/// Model B on the spectral Laplacian.
pub fn spectral_quench_profile(
    dx: f64,
    dy: f64,
) -> Result<ModelB<f64, SpectralLaplacian<f64>, SIDE, SIDE>, ModelError> {
    let params = ModelParams {
        dx,
        dy,
        ..ModelParams::default()
    };
    ModelB::new(params, SpectralLaplacian::new(SIDE, SIDE)?)
}
