//! Fixed-size 2D grids for spinodal simulations.
//!
//! This crate defines the [`GridRead`] / [`GridWrite`] addressing traits
//! through which every operator reads and writes fields, along with the
//! owned [`Grid`] container and the borrowing [`GridView`] /
//! [`GridViewMut`] windows.
//!
//! # Layout
//!
//! Storage is row-major: cell `(row, col)` lives at linear index
//! `col + row * cols`. Iterating a grid yields its cells in that order,
//! which is also the order serializers expect.
//!
//! # Boundaries
//!
//! Operators treat the domain as periodic. [`periodic`] provides the index
//! wrapping they use.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod periodic;
pub mod sample;
pub mod traits;
pub mod view;

#[cfg(test)]
pub(crate) mod compliance;

pub use grid::Grid;
pub use periodic::{wrap_index, wrap_offset, Neighbours};
pub use sample::fill_equispaced;
pub use traits::{GridRead, GridWrite, RowMajor};
pub use view::{GridView, GridViewMut};
