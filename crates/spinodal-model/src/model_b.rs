//! Single-field Model B.

use spinodal_calculus::LaplacianOperator;
use spinodal_core::Real;
use spinodal_grid::Grid;

use crate::error::ModelError;
use crate::params::ModelParams;
use crate::rhs::RightHandSide;

/// Writes `a·phi + b·phi³ − kappa·lap` into `mu`, where `mu` holds `∇²phi`
/// on entry. `extra(i)` is added per cell.
pub(crate) fn bulk_potential<T: Real>(
    params: &ModelParams<T>,
    phi: &[T],
    mu: &mut [T],
    mut extra: impl FnMut(usize) -> T,
) {
    for (i, (m, &p)) in mu.iter_mut().zip(phi).enumerate() {
        *m = p * (params.a + params.b * p * p) - params.kappa * *m + extra(i);
    }
}

/// Right-hand side `∂phi/∂t = ∇²(a·phi + b·phi³ − kappa·∇²phi)` on an
/// `R × C` periodic grid.
///
/// Owns its Laplacian and a scratch grid for the chemical potential; the
/// potential of the most recent evaluation stays readable through
/// [`chemical_potential`](Self::chemical_potential).
///
/// ```
/// use spinodal_calculus::CentralLaplacian;
/// use spinodal_grid::Grid;
/// use spinodal_model::{ModelB, ModelParams};
///
/// let lap = CentralLaplacian::<f64>::new(2).unwrap();
/// let mut model = ModelB::<f64, _, 8, 8>::new(ModelParams::default(), lap).unwrap();
///
/// // The separated phases phi = ±1 are stationary for a = −1, b = 1.
/// let phi = Grid::filled(1.0);
/// let mut dphi = Grid::new();
/// model.evaluate(&phi, &mut dphi).unwrap();
/// assert!(dphi.iter().all(|&v| v == 0.0));
/// ```
#[derive(Debug)]
pub struct ModelB<T, L, const R: usize, const C: usize> {
    params: ModelParams<T>,
    laplacian: L,
    mu: Grid<T, R, C>,
}

impl<T, L, const R: usize, const C: usize> ModelB<T, L, R, C>
where
    T: Real,
    L: LaplacianOperator<T>,
{
    /// Validate `params` and take ownership of `laplacian`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Config`] if `params` fails
    /// [`validate`](ModelParams::validate).
    pub fn new(params: ModelParams<T>, laplacian: L) -> Result<Self, ModelError> {
        params.validate()?;
        log::debug!(
            "model B on {R}x{C}: a={} b={} kappa={} dx={} dy={} ({})",
            params.a,
            params.b,
            params.kappa,
            params.dx,
            params.dy,
            laplacian.name()
        );
        Ok(Self {
            params,
            laplacian,
            mu: Grid::new(),
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &ModelParams<T> {
        &self.params
    }

    /// The Laplacian operator in use.
    pub fn laplacian(&self) -> &L {
        &self.laplacian
    }

    /// Chemical potential computed by the last successful evaluation.
    pub fn chemical_potential(&self) -> &Grid<T, R, C> {
        &self.mu
    }

    /// Write `∂phi/∂t` into `dphi`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Operator`] if the Laplacian rejects the grids.
    pub fn evaluate(
        &mut self,
        phi: &Grid<T, R, C>,
        dphi: &mut Grid<T, R, C>,
    ) -> Result<(), ModelError> {
        let (dx, dy) = (self.params.dx, self.params.dy);
        self.laplacian.apply(phi, &mut self.mu, dx, dy)?;
        bulk_potential(&self.params, phi.as_slice(), self.mu.as_mut_slice(), |_| {
            T::zero()
        });
        self.laplacian.apply(&self.mu, dphi, dx, dy)?;
        Ok(())
    }
}

impl<T, L, const R: usize, const C: usize> RightHandSide<T, Grid<T, R, C>> for ModelB<T, L, R, C>
where
    T: Real,
    L: LaplacianOperator<T>,
{
    fn evaluate(
        &mut self,
        state: &Grid<T, R, C>,
        derivative: &mut Grid<T, R, C>,
        _time: T,
    ) -> Result<(), ModelError> {
        ModelB::evaluate(self, state, derivative)
    }
}
