//! Discrete differential operators over periodic 2D grids.
//!
//! Two interchangeable Laplacians implement [`LaplacianOperator`]:
//!
//! - [`CentralLaplacian`]: arbitrary even-order central finite differences
//!   applied separably along each axis with periodic wrap.
//! - [`SpectralLaplacian`]: multiplies the half spectrum of a real 2D
//!   transform by `−|k|²`. The transform is pluggable through
//!   [`RealFft2d`]; [`RustFft2d`] is the bundled backend.
//!
//! [`analysis`] holds the error norms and log-log fits used to check
//! convergence.
//!
//! # Example
//!
//! ```
//! use spinodal_calculus::{CentralLaplacian, LaplacianOperator};
//! use spinodal_grid::Grid;
//!
//! let mut op = CentralLaplacian::<f64>::new(2).unwrap();
//! let phi = Grid::<f64, 4, 4>::from_fn(|r, c| if (r, c) == (1, 1) { 1.0 } else { 0.0 });
//! let lap = op.laplacian_of(&phi, 1.0, 1.0).unwrap();
//! assert_eq!(lap[(1, 1)], -4.0);
//! assert_eq!(lap[(0, 1)], 1.0);
//! assert_eq!(lap[(1, 2)], 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod central_fd;
pub mod laplacian;
pub mod spectral;

pub use central_fd::CentralLaplacian;
pub use laplacian::LaplacianOperator;
pub use spectral::{FrequencyTable, RealFft2d, RustFft2d, SpectralLaplacian};

/// Complex type used by spectral buffers.
pub use rustfft::num_complex::Complex;
