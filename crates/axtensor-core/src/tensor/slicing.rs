//! Leading-axis slicing for [`Tensor`].
//!
//! A slice deep-copies the contiguous block it selects; reads observe the
//! source's values at slice time and the source is never mutated. Copying
//! keeps the ownership story trivial: no slice outlives or aliases its
//! source buffer.

use crate::dtype::Scalar;
use crate::error::{CoreError, Result};

use super::Tensor;

/// A `start..end` selection with a positive step over the leading axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    /// First leading-axis index selected.
    pub start: usize,
    /// Exclusive upper bound.
    pub end: usize,
    /// Distance between selected indices.
    pub step: usize,
}

impl AxisRange {
    /// Create a range selecting `start, start+step, ...` below `end`.
    pub fn new(start: usize, end: usize, step: usize) -> Self {
        Self { start, end, step }
    }

    /// `start..end` with step 1.
    pub fn of(start: usize, end: usize) -> Self {
        Self::new(start, end, 1)
    }

    /// `0..end` with step 1.
    pub fn to(end: usize) -> Self {
        Self::new(0, end, 1)
    }

    /// The number of leading-axis indices this range selects.
    fn len(&self) -> usize {
        (self.end - self.start).div_ceil(self.step)
    }
}

impl<T: Scalar> Tensor<T> {
    /// Extract the sub-tensor at leading-axis index `i`.
    ///
    /// The result has rank `rank - 1` and shape `shape[1..]`; a rank-1
    /// source yields a shape `[1]` tensor so scalars stay representable.
    /// Fails with `IndexOutOfRange` when `i >= shape[0]`.
    ///
    /// ```
    /// # use axtensor_core::tensor::Tensor;
    /// let t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], vec![3, 2]).unwrap();
    /// let row = t.slice(1).unwrap();
    /// assert_eq!(row.shape(), &[2]);
    /// assert_eq!(row.as_slice(), &[3, 4]);
    /// ```
    pub fn slice(&self, i: usize) -> Result<Self> {
        self.at(i)?.slice()
    }

    /// Extract every leading-axis slice selected by `range`.
    ///
    /// The result's leading extent is `ceil((end - start) / step)`; all
    /// remaining axes are unchanged. Fails with `IndexOutOfRange` when
    /// `start >= shape[0]` or `end > shape[0]`, and with `InvalidArgument`
    /// when `step == 0`, `start > end`, or the range selects nothing (an
    /// empty leading axis is not representable).
    pub fn slice_range(&self, range: AxisRange) -> Result<Self> {
        if range.step == 0 {
            return Err(CoreError::InvalidArgument {
                reason: "slice step must be positive",
            });
        }
        if range.start > range.end {
            return Err(CoreError::InvalidArgument {
                reason: "slice start must not exceed end",
            });
        }
        if range.start == range.end {
            return Err(CoreError::InvalidArgument {
                reason: "slice range selects no elements",
            });
        }
        let extent = self.shape[0];
        if range.start >= extent {
            return Err(CoreError::IndexOutOfRange {
                axis: 0,
                index: range.start,
                extent,
            });
        }
        if range.end > extent {
            return Err(CoreError::IndexOutOfRange {
                axis: 0,
                index: range.end,
                extent,
            });
        }

        // Each leading-axis index owns one contiguous block of this length.
        let block = self.strides[0];
        let mut data = Vec::with_capacity(range.len() * block);
        let mut i = range.start;
        while i < range.end {
            data.extend_from_slice(&self.data[i * block..(i + 1) * block]);
            i += range.step;
        }

        let mut shape = self.shape.clone();
        shape[0] = range.len();
        Tensor::from_vec(data, shape)
    }
}
