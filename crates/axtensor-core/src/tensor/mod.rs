//! N-dimensional tensor type with dynamic shape and contiguous storage.
//!
//! The [`Tensor`] type stores elements densely in row-major (C) order. The
//! shape is an ordered sequence of positive extents; its product always
//! equals the buffer length. The tensor owns its data exclusively and
//! cloning performs a deep copy.

mod create;
mod display;
mod index;
mod ops;
mod product;
mod reshape;
mod slicing;

pub use index::IndexPath;
pub use slicing::AxisRange;

use num_traits::Zero;

use crate::dtype::Scalar;
use crate::error::{CoreError, Result};

/// An N-dimensional tensor with dynamic shape.
///
/// Rank is at least 1 and no axis extent is ever zero; both are enforced at
/// construction and at every reshape. Scalars are represented as shape `[1]`
/// tensors rather than rank-0 ones.
///
/// # Type Parameters
///
/// - `T`: the element type, which must implement [`Scalar`].
#[derive(Debug, Clone)]
pub struct Tensor<T: Scalar> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

/// Convenience alias for single-precision tensors.
pub type FTensor = Tensor<f32>;

impl<T: Scalar> Tensor<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a zero-initialized tensor of the given shape.
    ///
    /// ```
    /// # use axtensor_core::tensor::Tensor;
    /// let t = Tensor::<f64>::new(vec![2, 3]).unwrap();
    /// assert_eq!(t.size(), 6);
    /// assert!(t.iter().all(|&x| x == 0.0));
    /// ```
    pub fn new(shape: Vec<usize>) -> Result<Self> {
        validate_shape(&shape)?;
        let size = shape.iter().product();
        let strides = compute_strides(&shape);
        Ok(Self {
            data: vec![T::zero(); size],
            shape,
            strides,
        })
    }

    /// Create a tensor by adopting a flat data vector.
    ///
    /// Fails with `SizeMismatch` if the product of `shape` does not equal
    /// `data.len()`.
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        validate_shape(&shape)?;
        let size: usize = shape.iter().product();
        if size != data.len() {
            return Err(CoreError::SizeMismatch {
                expected: data.len(),
                got: size,
            });
        }
        let strides = compute_strides(&shape);
        Ok(Self {
            data,
            shape,
            strides,
        })
    }

    /// Create a tensor from a flat slice and a shape (copies the data).
    pub fn from_slice(data: &[T], shape: Vec<usize>) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The shape of the tensor as a slice of per-axis extents.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The row-major strides of the tensor (in elements).
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The number of axes of the tensor.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// The total number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// A flat view of all elements in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat view of all elements in storage order.
    ///
    /// This is the total-order write path used by collaborators that fill a
    /// tensor element by element (see [`crate::random`]).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over all elements in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in storage order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Resolve a full multi-index into a flat buffer offset.
    ///
    /// The offset is `Σ index[j] * strides[j]`, computed in a single pass;
    /// it is a pure function of the index tuple and the shape.
    fn flat_index(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.rank() {
            return Err(CoreError::RankMismatch {
                expected: self.rank(),
                got: index.len(),
            });
        }
        let mut flat = 0;
        for (axis, (&idx, &extent)) in index.iter().zip(self.shape.iter()).enumerate() {
            if idx >= extent {
                return Err(CoreError::IndexOutOfRange {
                    axis,
                    index: idx,
                    extent,
                });
            }
            flat += idx * self.strides[axis];
        }
        Ok(flat)
    }

    /// Read the element at the given multi-index.
    ///
    /// `index` must supply exactly one index per axis.
    pub fn read(&self, index: &[usize]) -> Result<T> {
        let flat = self.flat_index(index)?;
        Ok(self.data[flat])
    }

    /// Write the element at the given multi-index.
    pub fn write(&mut self, index: &[usize], value: T) -> Result<()> {
        let flat = self.flat_index(index)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Get a reference to the element at the given multi-index.
    pub fn get(&self, index: &[usize]) -> Result<&T> {
        let flat = self.flat_index(index)?;
        Ok(&self.data[flat])
    }

    /// Get a mutable reference to the element at the given multi-index.
    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T> {
        let flat = self.flat_index(index)?;
        Ok(&mut self.data[flat])
    }

    /// Convert a single-element tensor into its element.
    ///
    /// Fails with `RankMismatch` for any tensor holding more than one value:
    /// such a tensor still has unresolved axes.
    pub fn to_scalar(&self) -> Result<T> {
        if self.size() != 1 {
            return Err(CoreError::RankMismatch {
                expected: self.rank(),
                got: 0,
            });
        }
        Ok(self.data[0])
    }

    // ------------------------------------------------------------------
    // Map / apply
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new tensor.
    pub fn map<F>(&self, f: F) -> Tensor<T>
    where
        F: Fn(T) -> T,
    {
        Tensor {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }

    /// Apply a function pairwise to two tensors of identical shape.
    ///
    /// Identical size with a different shape is not enough; fails with
    /// `ShapeMismatch`.
    pub fn zip_map<F>(&self, other: &Tensor<T>, f: F) -> Result<Tensor<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape != other.shape {
            return Err(CoreError::ShapeMismatch {
                lhs: self.shape.clone(),
                rhs: other.shape.clone(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Tensor {
            data,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        })
    }
}

impl<T: Scalar> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

// ======================================================================
// Utility functions
// ======================================================================

/// Reject empty shapes and zero extents.
pub(crate) fn validate_shape(shape: &[usize]) -> Result<()> {
    if shape.is_empty() {
        return Err(CoreError::InvalidShape {
            shape: shape.to_vec(),
            reason: "shape must have at least one axis",
        });
    }
    if shape.contains(&0) {
        return Err(CoreError::InvalidShape {
            shape: shape.to_vec(),
            reason: "axis extents must be positive",
        });
    }
    Ok(())
}

/// Compute row-major (C-order) strides from a shape.
///
/// The last axis has stride 1; axis `i` has stride `product(shape[i+1..])`.
pub(crate) fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let rank = shape.len();
    if rank == 0 {
        return vec![];
    }
    let mut strides = vec![1usize; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}
