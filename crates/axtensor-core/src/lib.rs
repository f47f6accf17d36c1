//! `axtensor-core` — Foundation crate for the axtensor ecosystem.
//!
//! Provides a dense N-dimensional [`Tensor`](tensor::Tensor) with dynamic
//! shape, multi-index access, leading-axis slicing, reshape, elementwise
//! arithmetic, and a generalized tensor product, plus distribution-driven
//! random fills.
//!
//! # Design
//!
//! - Row-major contiguous storage; shape and strides are metadata over one
//!   owned buffer.
//! - Rank is at least 1 and no axis extent is zero; scalars are shape `[1]`.
//! - Every operation that can violate a contract returns [`Result`]; slices
//!   and operator results deep-copy, so tensors never alias each other.
//! - Generic over numeric types via the [`Scalar`] / [`Float`] trait pair.

#![warn(missing_docs)]

pub mod dtype;
pub mod error;
pub mod random;
pub mod tensor;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use tensor::{AxisRange, FTensor, IndexPath, Tensor};

/// Items intended for glob-import: `use axtensor_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::tensor::{AxisRange, FTensor, IndexPath, Tensor};
}
