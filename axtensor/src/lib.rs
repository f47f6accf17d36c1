//! # axtensor
//!
//! Generalized dense tensors for Rust: one `use axtensor::prelude::*;`
//! brings in the N-dimensional [`Tensor`](axtensor_core::tensor::Tensor),
//! its index and slicing machinery, and the random-fill helpers.
//!
//! All functionality currently lives in [`axtensor_core`], re-exported here
//! as [`core`]; further sub-crates will hang off this facade as the
//! ecosystem grows.

pub use axtensor_core as core;

/// Glob-import convenience: `use axtensor::prelude::*;`
pub mod prelude {
    pub use axtensor_core::prelude::*;
}
