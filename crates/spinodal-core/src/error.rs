//! Error types for the spinodal PDE toolkit.
//!
//! Organised by subsystem: stencil construction, grid addressing, operator
//! application and transform execution. Every variant describes a contract
//! violation by the caller; none of them is transient, so none is retried.

use std::error::Error;
use std::fmt;

/// Errors from finite-difference stencil construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StencilError {
    /// The derivative order cannot be resolved with the given number of
    /// samples (`order` must be at most `samples - 1`).
    InvalidOrder {
        /// Requested derivative order.
        order: usize,
        /// Number of sample offsets supplied.
        samples: usize,
    },
    /// A central stencil was requested with an error order that is odd or
    /// smaller than 2.
    InvalidStencilOrder {
        /// The rejected error order.
        error_order: usize,
    },
    /// Two sample offsets coincide, which makes the Vandermonde system
    /// singular.
    DegenerateStencil {
        /// The duplicated offset.
        offset: i64,
    },
}

impl fmt::Display for StencilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrder { order, samples } => write!(
                f,
                "derivative order {order} needs at least {} samples, got {samples}",
                order + 1
            ),
            Self::InvalidStencilOrder { error_order } => write!(
                f,
                "central stencil error order must be even and at least 2, got {error_order}"
            ),
            Self::DegenerateStencil { offset } => {
                write!(f, "sample offset {offset} appears more than once")
            }
        }
    }
}

impl Error for StencilError {}

/// Errors from grid construction and sub-grid windowing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A sub-grid view would reach past the extent of its parent.
    ViewOutOfBounds {
        /// Requested view extent `(rows, cols)`.
        view: (usize, usize),
        /// Requested `(row_offset, col_offset)`.
        offset: (usize, usize),
        /// Extent of the parent `(rows, cols)`.
        parent: (usize, usize),
    },
    /// A backing buffer does not hold exactly `rows * cols` elements.
    LengthMismatch {
        /// Required element count.
        expected: usize,
        /// Supplied element count.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewOutOfBounds {
                view,
                offset,
                parent,
            } => write!(
                f,
                "{}x{} view at offset ({}, {}) exceeds {}x{} parent",
                view.0, view.1, offset.0, offset.1, parent.0, parent.1
            ),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "grid needs {expected} elements, got {actual}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from the transform collaborator used by spectral operators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// A buffer handed to the transform has the wrong length.
    BufferSize {
        /// Which buffer was rejected (`"input"`, `"spectrum"`, `"output"`).
        buffer: &'static str,
        /// Length the transform was planned for.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// A transform was planned for a shape with a zero-length axis.
    EmptyShape {
        /// The rejected `(rows, cols)`.
        shape: (usize, usize),
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSize {
                buffer,
                expected,
                actual,
            } => write!(
                f,
                "{buffer} buffer has {actual} elements, transform expects {expected}"
            ),
            Self::EmptyShape { shape } => {
                write!(f, "cannot plan a transform over a {}x{} grid", shape.0, shape.1)
            }
        }
    }
}

impl Error for TransformError {}

/// Errors from applying a differential operator to grids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperatorError {
    /// The operator's stencil could not be built.
    Stencil(StencilError),
    /// Input and output grids (or the operator's planned shape) disagree.
    DimensionMismatch {
        /// Shape `(rows, cols)` the operator expected.
        expected: (usize, usize),
        /// Shape `(rows, cols)` it was given.
        actual: (usize, usize),
    },
    /// The grid shape is unusable for this operator.
    InvalidGridShape {
        /// Offending shape `(rows, cols)`.
        shape: (usize, usize),
        /// What the operator requires.
        reason: &'static str,
    },
    /// The transform collaborator rejected a call.
    Transform(TransformError),
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stencil(e) => write!(f, "stencil: {e}"),
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "grid shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::InvalidGridShape { shape, reason } => {
                write!(f, "invalid {}x{} grid: {reason}", shape.0, shape.1)
            }
            Self::Transform(e) => write!(f, "transform: {e}"),
        }
    }
}

impl Error for OperatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Stencil(e) => Some(e),
            Self::Transform(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StencilError> for OperatorError {
    fn from(e: StencilError) -> Self {
        Self::Stencil(e)
    }
}

impl From<TransformError> for OperatorError {
    fn from(e: TransformError) -> Self {
        Self::Transform(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stencil_error_messages() {
        let e = StencilError::InvalidOrder {
            order: 3,
            samples: 3,
        };
        assert_eq!(e.to_string(), "derivative order 3 needs at least 4 samples, got 3");

        let e = StencilError::DegenerateStencil { offset: -1 };
        assert_eq!(e.to_string(), "sample offset -1 appears more than once");
    }

    #[test]
    fn view_out_of_bounds_message() {
        let e = GridError::ViewOutOfBounds {
            view: (4, 4),
            offset: (2, 0),
            parent: (5, 5),
        };
        assert_eq!(e.to_string(), "4x4 view at offset (2, 0) exceeds 5x5 parent");
    }

    #[test]
    fn operator_error_chains_source() {
        let e: OperatorError = StencilError::InvalidStencilOrder { error_order: 3 }.into();
        assert!(e.source().is_some());
        assert!(e.to_string().starts_with("stencil: "));

        let e = OperatorError::DimensionMismatch {
            expected: (8, 8),
            actual: (8, 4),
        };
        assert!(e.source().is_none());
        assert_eq!(e.to_string(), "grid shape mismatch: expected 8x8, got 8x4");
    }

    #[test]
    fn transform_error_converts() {
        let e: OperatorError = TransformError::BufferSize {
            buffer: "spectrum",
            expected: 40,
            actual: 32,
        }
        .into();
        assert!(matches!(e, OperatorError::Transform(_)));
        assert_eq!(
            e.to_string(),
            "transform: spectrum buffer has 32 elements, transform expects 40"
        );

        let e = TransformError::EmptyShape { shape: (0, 16) };
        assert_eq!(e.to_string(), "cannot plan a transform over a 0x16 grid");
    }
}
