//! Core types and traits for the spinodal PDE toolkit.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! [`Real`] scalar abstraction shared by every numeric routine and the error
//! taxonomy used across the workspace, organised by subsystem: stencil
//! construction, grid addressing, operator application and transforms.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod real;

pub use error::{GridError, OperatorError, StencilError, TransformError};
pub use real::Real;
