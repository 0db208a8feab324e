//! Central finite-difference Laplacian with periodic wrap.

use std::sync::Arc;

use spinodal_core::{OperatorError, Real, StencilError};
use spinodal_grid::{GridRead, GridWrite, Neighbours};
use spinodal_stencil::{central_stencil, Stencil, StencilCache};

use crate::laplacian::{check_same_shape, LaplacianOperator};

/// Second-derivative central stencil of width `error_order + 1`, applied
/// along rows and columns independently and summed.
///
/// ```text
/// dphi(r, c) = Σ_i w_i · ( phi(r, c+i−h) / dx² + phi(r+i−h, c) / dy² ),   h = error_order / 2
/// ```
///
/// with indices wrapped periodically. Clones share the stencil.
///
/// The wrapped neighbour tables for the most recent grid shape are kept
/// between calls made through [`LaplacianOperator::apply`] or
/// [`prepare`](Self::prepare); the shared-reference
/// [`apply`](Self::apply) reuses them when the shape matches and builds
/// temporary tables otherwise.
#[derive(Clone, Debug)]
pub struct CentralLaplacian<T> {
    error_order: usize,
    stencil: Arc<Stencil<T>>,
    tables: Option<AxisTables>,
}

/// Wrapped neighbours along both axes for one `(rows, cols)` shape.
#[derive(Clone, Debug)]
struct AxisTables {
    along_x: Neighbours,
    along_y: Neighbours,
}

impl AxisTables {
    fn new(rows: usize, cols: usize, offsets: &[i64]) -> Self {
        Self {
            along_x: Neighbours::new(cols, offsets),
            along_y: Neighbours::new(rows, offsets),
        }
    }

    fn shape(&self) -> (usize, usize) {
        (self.along_y.axis_len(), self.along_x.axis_len())
    }
}

impl<T: Real> CentralLaplacian<T> {
    /// Build an operator with truncation error `O(h^error_order)`.
    ///
    /// # Errors
    ///
    /// [`StencilError::InvalidStencilOrder`] if `error_order` is odd or
    /// less than 2.
    pub fn new(error_order: usize) -> Result<Self, StencilError> {
        let stencil = Arc::new(central_stencil(error_order, 2)?);
        Ok(Self::from_parts(error_order, stencil))
    }

    /// Like [`new`](Self::new), but fetch the stencil through `cache` so
    /// that operators of the same order share one allocation.
    pub fn with_cache(cache: &mut StencilCache<T>, error_order: usize) -> Result<Self, StencilError> {
        let stencil = cache.central(error_order, 2)?;
        Ok(Self::from_parts(error_order, stencil))
    }

    fn from_parts(error_order: usize, stencil: Arc<Stencil<T>>) -> Self {
        log::debug!(
            "central laplacian: error order {error_order}, weights {:?}",
            stencil.weights()
        );
        Self {
            error_order,
            stencil,
            tables: None,
        }
    }

    /// Truncation order of the stencil.
    pub fn error_order(&self) -> usize {
        self.error_order
    }

    /// The shared second-derivative stencil.
    pub fn stencil(&self) -> &Arc<Stencil<T>> {
        &self.stencil
    }

    /// Build and keep the neighbour tables for `rows × cols` grids. A no-op
    /// if they are already held.
    pub fn prepare(&mut self, rows: usize, cols: usize) {
        if self.prepared_shape() == Some((rows, cols)) {
            return;
        }
        log::debug!("central laplacian: neighbour tables for {rows}x{cols}");
        self.tables = Some(AxisTables::new(rows, cols, self.stencil.offsets()));
    }

    /// Shape of the neighbour tables currently held, if any.
    pub fn prepared_shape(&self) -> Option<(usize, usize)> {
        self.tables.as_ref().map(AxisTables::shape)
    }

    /// Write `∇²phi` into `dphi`. Usable through a shared reference.
    ///
    /// # Errors
    ///
    /// [`OperatorError::DimensionMismatch`] if `phi` and `dphi` differ in
    /// shape.
    pub fn apply<I, O>(&self, phi: &I, dphi: &mut O, dx: T, dy: T) -> Result<(), OperatorError>
    where
        I: GridRead<Elem = T> + ?Sized,
        O: GridWrite<Elem = T> + ?Sized,
    {
        check_same_shape(phi, dphi)?;
        let (rows, cols) = phi.shape();
        if rows == 0 || cols == 0 {
            return Ok(());
        }

        match &self.tables {
            Some(tables) if tables.shape() == (rows, cols) => {
                self.sweep(tables, phi, dphi, dx, dy);
            }
            _ => {
                let tables = AxisTables::new(rows, cols, self.stencil.offsets());
                self.sweep(&tables, phi, dphi, dx, dy);
            }
        }
        Ok(())
    }

    fn sweep<I, O>(&self, tables: &AxisTables, phi: &I, dphi: &mut O, dx: T, dy: T)
    where
        I: GridRead<Elem = T> + ?Sized,
        O: GridWrite<Elem = T> + ?Sized,
    {
        let (rows, cols) = tables.shape();
        let weights = self.stencil.weights();
        let (along_x, along_y) = (&tables.along_x, &tables.along_y);
        let inv_dx2 = T::one() / (dx * dx);
        let inv_dy2 = T::one() / (dy * dy);

        for row in 0..rows {
            let row_nbrs = along_y.of(row);
            for col in 0..cols {
                let centre = *phi.at(row, col);
                let mut d2x = T::zero();
                let mut d2y = T::zero();
                // Differenced against the centre so constant fields give exactly zero.
                for ((&w, &nc), &nr) in weights.iter().zip(along_x.of(col)).zip(row_nbrs) {
                    d2x += w * (*phi.at(row, nc) - centre);
                    d2y += w * (*phi.at(nr, col) - centre);
                }
                *dphi.at_mut(row, col) = d2x * inv_dx2 + d2y * inv_dy2;
            }
        }
    }
}

impl<T: Real> LaplacianOperator<T> for CentralLaplacian<T> {
    fn name(&self) -> &str {
        "central-fd"
    }

    fn apply<I, O>(&mut self, phi: &I, dphi: &mut O, dx: T, dy: T) -> Result<(), OperatorError>
    where
        I: GridRead<Elem = T> + ?Sized,
        O: GridWrite<Elem = T> + ?Sized,
    {
        check_same_shape(phi, dphi)?;
        let (rows, cols) = phi.shape();
        if rows > 0 && cols > 0 {
            self.prepare(rows, cols);
        }
        CentralLaplacian::apply(&*self, phi, dphi, dx, dy)
    }
}
