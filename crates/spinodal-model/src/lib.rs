//! Model B phase-separation dynamics.
//!
//! A conserved order parameter `phi` evolves as `∂phi/∂t = ∇²mu` with the
//! chemical potential
//!
//! ```text
//! mu = a·phi + b·phi³ − kappa·∇²phi
//! ```
//!
//! [`ModelB`] evaluates that right-hand side for one field and
//! [`CoupledModelB`] for a [`FieldPair`] with linear cross-coupling.
//! [`CoupledDiffusion`] pairs one Model B field with a freely diffusing
//! species. Both two-field models accept [`SwitchingRates`] that convert
//! one species into the other. Every model implements [`RightHandSide`],
//! the shape an external time integrator drives, and accepts any
//! [`LaplacianOperator`] from `spinodal-calculus`.
//!
//! [`LaplacianOperator`]: spinodal_calculus::LaplacianOperator

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coupled;
pub mod diffusion;
pub mod error;
pub mod model_b;
pub mod params;
pub mod rhs;

pub use coupled::{CoupledModelB, FieldPair};
pub use diffusion::CoupledDiffusion;
pub use error::{ConfigError, ModelError};
pub use model_b::ModelB;
pub use params::{CoupledParams, DiffusionParams, ModelParams, SwitchingRates};
pub use rhs::RightHandSide;
