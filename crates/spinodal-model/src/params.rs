//! Model parameters and their validation.

use spinodal_core::Real;

use crate::error::ConfigError;

fn to_f64<T: Real>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn check_finite<T: Real>(name: &'static str, value: T) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite {
            name,
            value: to_f64(value),
        });
    }
    Ok(())
}

fn check_non_negative<T: Real>(name: &'static str, value: T) -> Result<(), ConfigError> {
    check_finite(name, value)?;
    if value < T::zero() {
        return Err(ConfigError::Negative {
            name,
            value: to_f64(value),
        });
    }
    Ok(())
}

/// Coefficients of the Model B chemical potential and the grid spacing.
///
/// `mu = a·phi + b·phi³ − kappa·∇²phi`. With `a < 0 < b` the homogeneous
/// mixture is unstable and the field separates towards `±sqrt(−a/b)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelParams<T> {
    /// Linear coefficient of the bulk free energy derivative.
    pub a: T,
    /// Cubic coefficient of the bulk free energy derivative.
    pub b: T,
    /// Gradient-energy (interface stiffness) coefficient.
    pub kappa: T,
    /// Spacing between columns.
    pub dx: T,
    /// Spacing between rows.
    pub dy: T,
}

impl<T: Real> Default for ModelParams<T> {
    fn default() -> Self {
        Self {
            a: -T::one(),
            b: T::one(),
            kappa: T::one(),
            dx: T::one(),
            dy: T::one(),
        }
    }
}

impl<T: Real> ModelParams<T> {
    /// Check that every coefficient is finite, both spacings are positive
    /// and `kappa` is non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. All finite.
        for (name, value) in [
            ("a", self.a),
            ("b", self.b),
            ("kappa", self.kappa),
            ("dx", self.dx),
            ("dy", self.dy),
        ] {
            check_finite(name, value)?;
        }
        // 2. Positive spacing.
        for (name, value) in [("dx", self.dx), ("dy", self.dy)] {
            if value <= T::zero() {
                return Err(ConfigError::NonPositiveSpacing {
                    name,
                    value: to_f64(value),
                });
            }
        }
        // 3. Non-negative stiffness.
        if self.kappa < T::zero() {
            return Err(ConfigError::NegativeStiffness {
                value: to_f64(self.kappa),
            });
        }
        Ok(())
    }

    /// The two homogeneous equilibrium values `±sqrt(−a/b)`, if `a` and
    /// `b` have opposite signs.
    pub fn binodal(&self) -> Option<(T, T)> {
        let ratio = -self.a / self.b;
        if ratio.is_finite() && ratio > T::zero() {
            let root = ratio.sqrt();
            Some((-root, root))
        } else {
            None
        }
    }
}

/// First-order exchange between two species: the first converts into the
/// second at rate `k01` and the second back into the first at rate `k10`.
///
/// The default is no exchange.
///
/// ```
/// use spinodal_model::SwitchingRates;
///
/// let rates = SwitchingRates::<f64>::new(0.2, 0.5);
/// assert_eq!(rates.net_into_first(1.0, 0.4), 0.0);
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwitchingRates<T> {
    /// Rate of `first → second`.
    pub k01: T,
    /// Rate of `second → first`.
    pub k10: T,
}

impl<T: Real> SwitchingRates<T> {
    /// Rates `k01` (first to second) and `k10` (second to first).
    pub fn new(k01: T, k10: T) -> Self {
        Self { k01, k10 }
    }

    /// Whether both rates are zero.
    pub fn is_off(&self) -> bool {
        self.k01 == T::zero() && self.k10 == T::zero()
    }

    /// Net local production of the first species, `k10·second − k01·first`.
    /// The second species loses exactly this amount.
    #[inline]
    pub fn net_into_first(&self, first: T, second: T) -> T {
        self.k10 * second - self.k01 * first
    }

    /// Both rates must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("k01", self.k01)?;
        check_non_negative("k10", self.k10)
    }
}

/// Parameters of two Model B fields coupled linearly through their
/// chemical potentials, `mu_i += xi[i] · phi_j`, with optional switching
/// between the species.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoupledParams<T> {
    /// Shared single-field coefficients and spacing.
    pub model: ModelParams<T>,
    /// Coupling strength into the first and second field.
    pub xi: [T; 2],
    /// Exchange between the two fields, added after the Model B terms.
    pub switching: SwitchingRates<T>,
}

impl<T: Real> Default for CoupledParams<T> {
    fn default() -> Self {
        Self {
            model: ModelParams::default(),
            xi: [T::lit(2.0), T::lit(-1.0)],
            switching: SwitchingRates::default(),
        }
    }
}

impl<T: Real> CoupledParams<T> {
    /// Validate the shared parameters, require finite couplings and valid
    /// switching rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Single-field parameters.
        self.model.validate()?;
        // 2. Couplings.
        check_finite("xi[0]", self.xi[0])?;
        check_finite("xi[1]", self.xi[1])?;
        // 3. Switching.
        self.switching.validate()
    }
}

/// Parameters of a Model B field exchanging mass with a freely diffusing
/// species.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffusionParams<T> {
    /// Coefficients of the phase-separating field and the shared spacing.
    pub model: ModelParams<T>,
    /// Diffusion coefficient of the second species.
    pub diffusivity: T,
    /// Exchange between the Model B field (first) and the diffusing one.
    pub switching: SwitchingRates<T>,
}

impl<T: Real> Default for DiffusionParams<T> {
    fn default() -> Self {
        Self {
            model: ModelParams::default(),
            diffusivity: T::one(),
            switching: SwitchingRates::default(),
        }
    }
}

impl<T: Real> DiffusionParams<T> {
    /// Validate the Model B parameters, the diffusivity and the rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Single-field parameters.
        self.model.validate()?;
        // 2. Diffusivity.
        check_non_negative("diffusivity", self.diffusivity)?;
        // 3. Switching.
        self.switching.validate()
    }
}
