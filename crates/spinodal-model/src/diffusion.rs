//! A Model B field exchanging mass with a freely diffusing species.

use spinodal_calculus::LaplacianOperator;
use spinodal_core::Real;
use spinodal_grid::Grid;

use crate::coupled::{exchange, FieldPair};
use crate::error::ModelError;
use crate::model_b::bulk_potential;
use crate::params::DiffusionParams;
use crate::rhs::RightHandSide;

/// Right-hand side for a phase-separating field `phi_1` and a diffusing
/// field `phi_2` that convert into each other:
///
/// ```text
/// ∂phi_1 / ∂t = ∇²(a·phi_1 + b·phi_1³ − kappa·∇²phi_1) + s
/// ∂phi_2 / ∂t = d·∇²phi_2 − s
/// s           = k10·phi_2 − k01·phi_1
/// ```
///
/// The total `Σ(phi_1 + phi_2)` is conserved. Uniform fields with
/// `k01·phi_1 = k10·phi_2` are stationary.
///
/// ```
/// use spinodal_calculus::CentralLaplacian;
/// use spinodal_grid::Grid;
/// use spinodal_model::{CoupledDiffusion, DiffusionParams, FieldPair, SwitchingRates};
///
/// let params = DiffusionParams {
///     switching: SwitchingRates::new(0.5, 0.25),
///     ..DiffusionParams::default()
/// };
/// let lap = CentralLaplacian::<f64>::new(2).unwrap();
/// let mut model = CoupledDiffusion::<f64, _, 8, 8>::new(params, lap).unwrap();
///
/// let state = FieldPair::new(Grid::filled(0.5), Grid::filled(1.0));
/// let mut d = FieldPair::default();
/// model.evaluate(&state, &mut d).unwrap();
/// assert!(d.first.iter().chain(d.second.iter()).all(|&v| v == 0.0));
/// ```
#[derive(Debug)]
pub struct CoupledDiffusion<T, L, const R: usize, const C: usize> {
    params: DiffusionParams<T>,
    laplacian: L,
    mu: Grid<T, R, C>,
}

impl<T, L, const R: usize, const C: usize> CoupledDiffusion<T, L, R, C>
where
    T: Real,
    L: LaplacianOperator<T>,
{
    /// Validate `params` and take ownership of `laplacian`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Config`] if `params` fails
    /// [`validate`](DiffusionParams::validate).
    pub fn new(params: DiffusionParams<T>, laplacian: L) -> Result<Self, ModelError> {
        params.validate()?;
        log::debug!(
            "model B with diffusing partner on {R}x{C}: d={} k01={} k10={} ({})",
            params.diffusivity,
            params.switching.k01,
            params.switching.k10,
            laplacian.name()
        );
        Ok(Self {
            params,
            laplacian,
            mu: Grid::new(),
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &DiffusionParams<T> {
        &self.params
    }

    /// Chemical potential of the first field from the last evaluation.
    pub fn chemical_potential(&self) -> &Grid<T, R, C> {
        &self.mu
    }

    /// Write the time derivative of both fields into `derivative`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Operator`] if the Laplacian rejects the grids.
    pub fn evaluate(
        &mut self,
        state: &FieldPair<T, R, C>,
        derivative: &mut FieldPair<T, R, C>,
    ) -> Result<(), ModelError> {
        let model = self.params.model;
        let (dx, dy) = (model.dx, model.dy);

        self.laplacian.apply(&state.first, &mut self.mu, dx, dy)?;
        bulk_potential(&model, state.first.as_slice(), self.mu.as_mut_slice(), |_| {
            T::zero()
        });
        self.laplacian.apply(&self.mu, &mut derivative.first, dx, dy)?;

        self.laplacian
            .apply(&state.second, &mut derivative.second, dx, dy)?;
        let d = self.params.diffusivity;
        for v in derivative.second.iter_mut() {
            *v *= d;
        }

        exchange(&self.params.switching, state, derivative);
        Ok(())
    }
}

impl<T, L, const R: usize, const C: usize> RightHandSide<T, FieldPair<T, R, C>>
    for CoupledDiffusion<T, L, R, C>
where
    T: Real,
    L: LaplacianOperator<T>,
{
    fn evaluate(
        &mut self,
        state: &FieldPair<T, R, C>,
        derivative: &mut FieldPair<T, R, C>,
        _time: T,
    ) -> Result<(), ModelError> {
        CoupledDiffusion::evaluate(self, state, derivative)
    }
}
