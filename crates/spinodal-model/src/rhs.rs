//! The right-hand-side shape consumed by time integrators.

use spinodal_core::Real;

use crate::error::ModelError;

/// `derivative = f(state, time)` for an ODE system `d(state)/dt = f`.
///
/// Integrators own the state and the derivative buffer and call
/// [`evaluate`](Self::evaluate) once per stage. Implementations may keep
/// scratch space between calls but must not let it influence results.
pub trait RightHandSide<T: Real, S> {
    /// Overwrite `derivative` with the time derivative of `state`.
    fn evaluate(&mut self, state: &S, derivative: &mut S, time: T) -> Result<(), ModelError>;
}
