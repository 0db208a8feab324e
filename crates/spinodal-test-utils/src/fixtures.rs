//! Smooth periodic test functions on `[0, 2π) × [0, 2π)`.
//!
//! Each fixture pairs a field with its exact Laplacian so operator output
//! can be compared against a closed form.

use std::f64::consts::TAU;

use spinodal_core::Real;
use spinodal_grid::Grid;

/// A periodic function of `(x, y)` and its exact Laplacian.
#[derive(Clone, Copy, Debug)]
pub struct AnalyticField {
    pub name: &'static str,
    pub value: fn(f64, f64) -> f64,
    pub laplacian: fn(f64, f64) -> f64,
}

fn cos_x_plus_sin_y(x: f64, y: f64) -> f64 {
    x.cos() + y.sin()
}

fn sin_x_cos_2y(x: f64, y: f64) -> f64 {
    x.sin() * (2.0 * y).cos()
}

fn lap_cos_x_plus_sin_y(x: f64, y: f64) -> f64 {
    -cos_x_plus_sin_y(x, y)
}

fn lap_sin_x_cos_2y(x: f64, y: f64) -> f64 {
    -5.0 * sin_x_cos_2y(x, y)
}

/// `cos x + sin y`, with `∇² = −(cos x + sin y)`.
pub const COS_X_PLUS_SIN_Y: AnalyticField = AnalyticField {
    name: "cos(x) + sin(y)",
    value: cos_x_plus_sin_y,
    laplacian: lap_cos_x_plus_sin_y,
};

/// `sin x · cos 2y`, with `∇² = −5 · sin x · cos 2y`.
pub const SIN_X_COS_2Y: AnalyticField = AnalyticField {
    name: "sin(x)cos(2y)",
    value: sin_x_cos_2y,
    laplacian: lap_sin_x_cos_2y,
};

/// A fixture sampled onto an `R × C` grid.
#[derive(Clone, Debug)]
pub struct Sampled<T, const R: usize, const C: usize> {
    pub field: Grid<T, R, C>,
    pub exact_laplacian: Grid<T, R, C>,
    pub dx: T,
    pub dy: T,
}

impl AnalyticField {
    /// Sample the field and its Laplacian on the periodic lattice
    /// `x = c·2π/C`, `y = r·2π/R`.
    pub fn sample<T: Real, const R: usize, const C: usize>(&self) -> Sampled<T, R, C> {
        let dx = TAU / C as f64;
        let dy = TAU / R as f64;
        let at = |f: fn(f64, f64) -> f64| {
            Grid::from_fn(|r, c| T::lit(f(c as f64 * dx, r as f64 * dy)))
        };
        Sampled {
            field: at(self.value),
            exact_laplacian: at(self.laplacian),
            dx: T::lit(dx),
            dy: T::lit(dy),
        }
    }
}

/// Shorthand for `field.sample::<T, R, C>()`.
pub fn sample_pair<T: Real, const R: usize, const C: usize>(
    field: &AnalyticField,
) -> Sampled<T, R, C> {
    field.sample()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_start_at_origin() {
        let s = COS_X_PLUS_SIN_Y.sample::<f64, 8, 8>();
        assert_eq!(s.field[(0, 0)], 1.0);
        assert_eq!(s.exact_laplacian[(0, 0)], -1.0);
        assert!((s.dx - TAU / 8.0).abs() < 1e-15);
    }

    #[test]
    fn laplacian_is_an_eigenvalue_multiple() {
        let s = sample_pair::<f64, 6, 10>(&SIN_X_COS_2Y);
        for (f, l) in s.field.iter().zip(s.exact_laplacian.iter()) {
            assert!((l + 5.0 * f).abs() < 1e-12);
        }
    }
}
