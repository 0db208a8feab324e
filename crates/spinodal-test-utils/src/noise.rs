//! Seeded random fields.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use spinodal_core::Real;
use spinodal_grid::Grid;

/// `n` values drawn uniformly from `[-amplitude, amplitude)`.
pub fn uniform_values(seed: u64, n: usize, amplitude: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| amplitude * (2.0 * rng.random::<f64>() - 1.0))
        .collect()
}

/// Grid of uniform noise in `[mean − amplitude, mean + amplitude)`.
///
/// The same seed always yields the same grid.
pub fn noise_grid<T: Real, const R: usize, const C: usize>(
    seed: u64,
    mean: f64,
    amplitude: f64,
) -> Grid<T, R, C> {
    let values = uniform_values(seed, R * C, amplitude);
    Grid::from_fn(|r, c| T::lit(mean + values[c + r * C]))
}
