//! Test utilities for spinodal development.
//!
//! - [`fixtures`]: smooth periodic fields with closed-form Laplacians.
//! - [`noise`]: deterministic random fields seeded through `ChaCha8Rng`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod noise;

pub use fixtures::{sample_pair, AnalyticField, Sampled, COS_X_PLUS_SIN_Y, SIN_X_COS_2Y};
pub use noise::{noise_grid, uniform_values};
