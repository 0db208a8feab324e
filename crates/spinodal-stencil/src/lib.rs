//! Finite-difference stencil coefficients of arbitrary order.
//!
//! Given an ordered set of integer sample offsets and a derivative order,
//! [`fd_stencil`] produces the weights `w_i` such that
//! `Σ w_i f(x + offset_i·h) / h^order` approximates `f^(order)(x)`, exact for
//! polynomials up to degree `N - 1`. The weights come from the closed-form
//! solution of the Vandermonde system in terms of elementary symmetric
//! polynomials, so no matrix is ever inverted.
//!
//! # Modules
//!
//! - [`coefficients`]: the generic engine and the [`Stencil`] type
//! - [`central`]: symmetric offsets and ready-made central stencils
//! - [`cache`]: [`StencilCache`], a once-computed lookup keyed by order and offsets
//!
//! # Examples
//!
//! ```
//! use spinodal_stencil::central_stencil;
//!
//! let d2 = central_stencil::<f64>(4, 2).unwrap();
//! let expected = [-1.0 / 12.0, 4.0 / 3.0, -5.0 / 2.0, 4.0 / 3.0, -1.0 / 12.0];
//! for (w, e) in d2.weights().iter().zip(expected) {
//!     assert!((w - e).abs() < 1e-12);
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod central;
pub mod coefficients;

pub use cache::StencilCache;
pub use central::{central_offsets, central_stencil};
pub use coefficients::{elementary_symmetric, fd_stencil, Offsets, Stencil};
