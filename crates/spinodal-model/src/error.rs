//! Errors from model configuration and evaluation.

use std::error::Error;
use std::fmt;

use spinodal_core::OperatorError;

/// A model parameter failed validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A parameter is NaN or infinite.
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A grid spacing is zero or negative.
    NonPositiveSpacing {
        /// `"dx"` or `"dy"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The gradient-energy coefficient `kappa` is negative.
    NegativeStiffness {
        /// The rejected value.
        value: f64,
    },
    /// A rate or transport coefficient is negative.
    Negative {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::NonPositiveSpacing { name, value } => {
                write!(f, "grid spacing {name} must be positive, got {value}")
            }
            Self::NegativeStiffness { value } => {
                write!(f, "kappa must be non-negative, got {value}")
            }
            Self::Negative { name, value } => {
                write!(f, "{name} must be non-negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from building or evaluating a model.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelError {
    /// Parameters failed validation.
    Config(ConfigError),
    /// The Laplacian operator rejected a call.
    Operator(OperatorError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Operator(e) => write!(f, "operator: {e}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Operator(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ModelError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<OperatorError> for ModelError {
    fn from(e: OperatorError) -> Self {
        Self::Operator(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = ConfigError::NonPositiveSpacing {
            name: "dy",
            value: 0.0,
        };
        assert_eq!(e.to_string(), "grid spacing dy must be positive, got 0");

        let e: ModelError = ConfigError::NegativeStiffness { value: -1.5 }.into();
        assert_eq!(e.to_string(), "config: kappa must be non-negative, got -1.5");
        assert!(e.source().is_some());

        let e = ConfigError::Negative {
            name: "k01",
            value: -0.25,
        };
        assert_eq!(e.to_string(), "k01 must be non-negative, got -0.25");
    }

    #[test]
    fn operator_errors_convert() {
        let e: ModelError = OperatorError::DimensionMismatch {
            expected: (4, 4),
            actual: (2, 2),
        }
        .into();
        assert!(matches!(e, ModelError::Operator(_)));
        assert!(e.to_string().starts_with("operator: grid shape mismatch"));
    }
}
