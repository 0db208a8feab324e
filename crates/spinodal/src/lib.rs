//! Spinodal: the numerical core for 2D Model B phase-separation simulations.
//!
//! This facade re-exports the public API of every spinodal sub-crate. For
//! most users, adding `spinodal` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use spinodal::prelude::*;
//!
//! // A small perturbation of the mixed state on a 32x32 periodic grid.
//! let mut phi = Grid::<f64, 32, 32>::new();
//! let (dx, dy) = fill_equispaced(&mut phi, (0.0, 8.0), (0.0, 8.0), |x, y| {
//!     0.01 * (x.sin() + (0.5 * y).cos())
//! });
//!
//! let params = ModelParams { dx, dy, ..ModelParams::default() };
//! let mut model = ModelB::<f64, _, 32, 32>::new(params, CentralLaplacian::new(4)?)?;
//!
//! let mut dphi = Grid::new();
//! model.evaluate(&phi, &mut dphi)?;
//! assert!(dphi.iter().sum::<f64>().abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spinodal-core` | `Real` scalar trait, error enums |
//! | [`stencil`] | `spinodal-stencil` | Finite-difference coefficient engine and cache |
//! | [`grid`] | `spinodal-grid` | `Grid`, sub-grid views, periodic indexing, sampling |
//! | [`calculus`] | `spinodal-calculus` | FD and spectral Laplacians, transforms, error analysis |
//! | [`model`] | `spinodal-model` | Model B right-hand sides and parameters |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Scalar trait and error taxonomy (`spinodal-core`).
pub use spinodal_core as types;

/// Finite-difference stencil coefficients (`spinodal-stencil`).
///
/// [`stencil::fd_stencil`] handles arbitrary offsets;
/// [`stencil::central_stencil`] the symmetric case.
pub use spinodal_stencil as stencil;

/// Fixed-size grids and views (`spinodal-grid`).
pub use spinodal_grid as grid;

/// Laplacian operators and convergence analysis (`spinodal-calculus`).
///
/// [`calculus::CentralLaplacian`] and [`calculus::SpectralLaplacian`] both
/// implement [`calculus::LaplacianOperator`].
pub use spinodal_calculus as calculus;

/// Model B dynamics (`spinodal-model`).
pub use spinodal_model as model;

/// Common imports for typical spinodal usage.
///
/// ```rust
/// use spinodal::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use spinodal_core::{GridError, OperatorError, Real, StencilError, TransformError};

    // Stencils
    pub use spinodal_stencil::{central_stencil, fd_stencil, Stencil, StencilCache};

    // Grids
    pub use spinodal_grid::{fill_equispaced, Grid, GridRead, GridView, GridViewMut, GridWrite};

    // Operators
    pub use spinodal_calculus::{
        CentralLaplacian, LaplacianOperator, RealFft2d, RustFft2d, SpectralLaplacian,
    };

    // Models
    pub use spinodal_model::{
        ConfigError, CoupledDiffusion, CoupledModelB, CoupledParams, DiffusionParams, FieldPair,
        ModelB, ModelError, ModelParams, RightHandSide, SwitchingRates,
    };
}
