//! The [`LaplacianOperator`] trait.

use spinodal_core::{OperatorError, Real};
use spinodal_grid::{Grid, GridRead, GridWrite};

/// A discrete approximation of `∇² = ∂²/∂x² + ∂²/∂y²` on a periodic
/// rectangle.
///
/// Columns run along `x` with spacing `dx`; rows run along `y` with
/// spacing `dy`.
///
/// Input and output are distinct borrows, so they never alias. Use
/// [`laplacian_in_place`](Self::laplacian_in_place) to overwrite a field
/// with its own Laplacian.
pub trait LaplacianOperator<T: Real> {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &str;

    /// Write `∇²phi` into `dphi`.
    ///
    /// # Errors
    ///
    /// [`OperatorError::DimensionMismatch`] if the shapes of `phi` and
    /// `dphi` differ (or differ from the operator's planned shape), and
    /// operator-specific errors otherwise.
    fn apply<I, O>(&mut self, phi: &I, dphi: &mut O, dx: T, dy: T) -> Result<(), OperatorError>
    where
        I: GridRead<Elem = T> + ?Sized,
        O: GridWrite<Elem = T> + ?Sized;

    /// Return `∇²phi` as a new grid.
    fn laplacian_of<const R: usize, const C: usize>(
        &mut self,
        phi: &Grid<T, R, C>,
        dx: T,
        dy: T,
    ) -> Result<Grid<T, R, C>, OperatorError> {
        let mut out = Grid::new();
        self.apply(phi, &mut out, dx, dy)?;
        Ok(out)
    }

    /// Replace `field` with `∇²field`. A snapshot of the input is taken
    /// first.
    fn laplacian_in_place<const R: usize, const C: usize>(
        &mut self,
        field: &mut Grid<T, R, C>,
        dx: T,
        dy: T,
    ) -> Result<(), OperatorError> {
        let snapshot = field.clone();
        self.apply(&snapshot, field, dx, dy)
    }
}

/// Reject `phi`/`dphi` pairs whose shapes differ.
pub(crate) fn check_same_shape<I, O>(phi: &I, dphi: &O) -> Result<(), OperatorError>
where
    I: GridRead + ?Sized,
    O: GridRead + ?Sized,
{
    if phi.shape() != dphi.shape() {
        return Err(OperatorError::DimensionMismatch {
            expected: phi.shape(),
            actual: dphi.shape(),
        });
    }
    Ok(())
}
