//! Tensor creation helpers.

use num_traits::One;

use crate::dtype::Scalar;
use crate::error::Result;

use super::{compute_strides, validate_shape, Tensor};

impl<T: Scalar> Tensor<T> {
    /// Create a tensor filled with zeros. Equivalent to [`Tensor::new`].
    pub fn zeros(shape: Vec<usize>) -> Result<Self> {
        Self::new(shape)
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: Vec<usize>) -> Result<Self> {
        Self::full(shape, T::one())
    }

    /// Create a tensor filled with a constant value.
    ///
    /// ```
    /// # use axtensor_core::tensor::Tensor;
    /// let t = Tensor::full(vec![2, 3], 7_i32).unwrap();
    /// assert!(t.iter().all(|&x| x == 7));
    /// ```
    pub fn full(shape: Vec<usize>, value: T) -> Result<Self> {
        validate_shape(&shape)?;
        let size = shape.iter().product();
        let strides = compute_strides(&shape);
        Ok(Self {
            data: vec![value; size],
            shape,
            strides,
        })
    }

    /// Create a 1-D tensor with values `[0, 1, 2, ..., n-1]`.
    ///
    /// `n` must be positive; a zero-length axis is not representable.
    pub fn arange(n: usize) -> Result<Self> {
        validate_shape(&[n])?;
        let data: Vec<T> = (0..n).map(T::from_usize).collect();
        Ok(Self {
            data,
            shape: vec![n],
            strides: vec![1],
        })
    }
}
