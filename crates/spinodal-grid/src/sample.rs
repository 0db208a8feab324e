//! Sampling analytic functions onto grids.

use spinodal_core::Real;

use crate::traits::GridWrite;

/// Sample `f(x, y)` on a uniform periodic lattice covering
/// `[x_min, x_max) × [y_min, y_max)`.
///
/// Columns run along `x` and rows along `y`:
/// `grid(r, c) = f(x_min + c·dx, y_min + r·dy)` with `dx = (x_max − x_min) / cols`
/// and `dy = (y_max − y_min) / rows`. The right endpoints are excluded so
/// that a function periodic on the interval tiles without a duplicated seam.
///
/// Returns the spacing `(dx, dy)` used.
///
/// ```
/// use spinodal_grid::{fill_equispaced, Grid};
///
/// let mut g = Grid::<f64, 2, 4>::new();
/// let (dx, dy) = fill_equispaced(&mut g, (0.0, 4.0), (10.0, 12.0), |x, y| x + y);
/// assert_eq!((dx, dy), (1.0, 1.0));
/// assert_eq!(g.as_slice(), &[10.0, 11.0, 12.0, 13.0, 11.0, 12.0, 13.0, 14.0]);
/// ```
pub fn fill_equispaced<G, T, F>(grid: &mut G, x_range: (T, T), y_range: (T, T), mut f: F) -> (T, T)
where
    G: GridWrite<Elem = T> + ?Sized,
    T: Real,
    F: FnMut(T, T) -> T,
{
    let (rows, cols) = grid.shape();
    let dx = (x_range.1 - x_range.0) / T::of_usize(cols.max(1));
    let dy = (y_range.1 - y_range.0) / T::of_usize(rows.max(1));
    grid.fill_with(|row, col| {
        let x = x_range.0 + T::of_usize(col) * dx;
        let y = y_range.0 + T::of_usize(row) * dy;
        f(x, y)
    });
    (dx, dy)
}
