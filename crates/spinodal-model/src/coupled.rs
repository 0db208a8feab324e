//! Two linearly coupled Model B fields.

use spinodal_calculus::LaplacianOperator;
use spinodal_core::Real;
use spinodal_grid::Grid;

use crate::error::ModelError;
use crate::model_b::bulk_potential;
use crate::params::{CoupledParams, SwitchingRates};
use crate::rhs::RightHandSide;

/// State of a two-component system: one grid per order parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldPair<T, const R: usize, const C: usize> {
    /// First order parameter.
    pub first: Grid<T, R, C>,
    /// Second order parameter.
    pub second: Grid<T, R, C>,
}

impl<T, const R: usize, const C: usize> FieldPair<T, R, C> {
    /// Pair two existing grids.
    pub fn new(first: Grid<T, R, C>, second: Grid<T, R, C>) -> Self {
        Self { first, second }
    }

    /// `(first, second)`, or `(second, first)` when `swapped`.
    fn split(&self, swapped: bool) -> (&Grid<T, R, C>, &Grid<T, R, C>) {
        if swapped {
            (&self.second, &self.first)
        } else {
            (&self.first, &self.second)
        }
    }
}

/// Add the switching exchange to both derivatives: the first gains
/// `k10·phi_2 − k01·phi_1` per cell and the second loses the same amount.
pub(crate) fn exchange<T: Real, const R: usize, const C: usize>(
    rates: &SwitchingRates<T>,
    state: &FieldPair<T, R, C>,
    derivative: &mut FieldPair<T, R, C>,
) {
    if rates.is_off() {
        return;
    }
    let FieldPair { first, second } = derivative;
    let cells = state.first.iter().zip(state.second.iter());
    for ((d1, d2), (&p1, &p2)) in first.iter_mut().zip(second.iter_mut()).zip(cells) {
        let flux = rates.net_into_first(p1, p2);
        *d1 += flux;
        *d2 -= flux;
    }
}

impl<T: Clone + Default, const R: usize, const C: usize> Default for FieldPair<T, R, C> {
    fn default() -> Self {
        Self::new(Grid::new(), Grid::new())
    }
}

/// Right-hand side for two fields whose chemical potentials are coupled
/// linearly. For `i ∈ {0, 1}` and `j = 1 − i`:
///
/// ```text
/// mu_i          = a·phi_i + b·phi_i³ − kappa·∇²phi_i + xi[i]·phi_j
/// ∂phi_i / ∂t   = ∇²mu_i ± (k10·phi_2 − k01·phi_1)
/// ```
///
/// The switching term (`+` for the first field, `−` for the second) comes
/// from [`CoupledParams::switching`]. Each field conserves its own mass
/// without switching; with it only the total is conserved.
#[derive(Debug)]
pub struct CoupledModelB<T, L, const R: usize, const C: usize> {
    params: CoupledParams<T>,
    laplacian: L,
    mu: Grid<T, R, C>,
}

impl<T, L, const R: usize, const C: usize> CoupledModelB<T, L, R, C>
where
    T: Real,
    L: LaplacianOperator<T>,
{
    /// Validate `params` and take ownership of `laplacian`.
    ///
    /// # Errors
    ///
    /// [`ModelError::Config`] if `params` fails
    /// [`validate`](CoupledParams::validate).
    pub fn new(params: CoupledParams<T>, laplacian: L) -> Result<Self, ModelError> {
        params.validate()?;
        log::debug!(
            "coupled model B on {R}x{C}: xi=[{}, {}] ({})",
            params.xi[0],
            params.xi[1],
            laplacian.name()
        );
        Ok(Self {
            params,
            laplacian,
            mu: Grid::new(),
        })
    }

    /// Model parameters.
    pub fn params(&self) -> &CoupledParams<T> {
        &self.params
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

        for (index, swapped) in [(0, false), (1, true)] {
            let (own, other) = state.split(swapped);
            let xi = self.params.xi[index];
            let out = if index == 0 {
                &mut derivative.first
            } else {
                &mut derivative.second
            };

            self.laplacian.apply(own, &mut self.mu, dx, dy)?;
            let other = other.as_slice();
            bulk_potential(&model, own.as_slice(), self.mu.as_mut_slice(), |i| {
                xi * other[i]
            });
            self.laplacian.apply(&self.mu, out, dx, dy)?;
        }
        exchange(&self.params.switching, state, derivative);
        Ok(())
    }
}

impl<T, L, const R: usize, const C: usize> RightHandSide<T, FieldPair<T, R, C>>
    for CoupledModelB<T, L, R, C>
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
        CoupledModelB::evaluate(self, state, derivative)
    }
}
