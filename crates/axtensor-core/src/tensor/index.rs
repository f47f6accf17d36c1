//! Progressive multi-index resolution for [`Tensor`].
//!
//! An [`IndexPath`] is an immutable cursor over a borrowed tensor. Each
//! [`at`](IndexPath::at) call consumes the cursor and returns a new one with
//! one more axis resolved, so a chain like `t.at(i)?.at(j)?.at(k)?` composes
//! left-to-right with every step validated against the axis whose position
//! equals the number of indices already supplied. There is no accumulated
//! mutable state to reset between uses.
//!
//! A fully resolved path yields its element via [`value`](IndexPath::value);
//! a partial path materializes the sub-tensor beneath it via
//! [`slice`](IndexPath::slice).

use crate::dtype::Scalar;
use crate::error::{CoreError, Result};

use super::{compute_strides, Tensor};

/// An immutable cursor tracking a partially resolved multi-index.
///
/// The cursor stores only the flat offset accumulated so far and the number
/// of axes resolved; the offset of a full path therefore equals
/// `Σ index[j] * strides[j]`, identical to direct resolution via
/// [`Tensor::read`].
#[derive(Debug, Clone, Copy)]
pub struct IndexPath<'a, T: Scalar> {
    tensor: &'a Tensor<T>,
    offset: usize,
    depth: usize,
}

impl<T: Scalar> Tensor<T> {
    /// Begin a chained index resolution at the leading axis.
    ///
    /// ```
    /// # use axtensor_core::tensor::Tensor;
    /// let t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], vec![2, 3]).unwrap();
    /// assert_eq!(t.at(1).unwrap().at(2).unwrap().value().unwrap(), 6);
    /// ```
    pub fn at(&self, index: usize) -> Result<IndexPath<'_, T>> {
        let root = IndexPath {
            tensor: self,
            offset: 0,
            depth: 0,
        };
        root.at(index)
    }
}

impl<'a, T: Scalar> IndexPath<'a, T> {
    /// Resolve the next axis, returning a new cursor.
    ///
    /// Fails with `ScalarIndexing` if every axis is already resolved, and
    /// with `IndexOutOfRange` if `index` is at or beyond the extent of the
    /// current axis.
    pub fn at(self, index: usize) -> Result<Self> {
        if self.depth == self.tensor.rank() {
            return Err(CoreError::ScalarIndexing);
        }
        let extent = self.tensor.shape()[self.depth];
        if index >= extent {
            return Err(CoreError::IndexOutOfRange {
                axis: self.depth,
                index,
                extent,
            });
        }
        Ok(Self {
            tensor: self.tensor,
            offset: self.offset + index * self.tensor.strides()[self.depth],
            depth: self.depth + 1,
        })
    }

    /// How many axes have been resolved so far.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether the path has resolved every axis down to one element.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.depth == self.tensor.rank()
    }

    /// The element under a fully resolved path.
    ///
    /// Fails with `RankMismatch` if axes remain unresolved.
    pub fn value(&self) -> Result<T> {
        if !self.is_resolved() {
            return Err(CoreError::RankMismatch {
                expected: self.tensor.rank(),
                got: self.depth,
            });
        }
        Ok(self.tensor.as_slice()[self.offset])
    }

    /// Materialize the sub-tensor beneath this path as a new tensor.
    ///
    /// The result has shape `shape[depth..]` and deep-copies the contiguous
    /// block it covers. A fully resolved path yields a shape `[1]` tensor,
    /// keeping scalars representable as 1-D.
    pub fn slice(&self) -> Result<Tensor<T>> {
        let remaining = &self.tensor.shape()[self.depth..];
        let shape = if remaining.is_empty() {
            vec![1]
        } else {
            remaining.to_vec()
        };
        let len: usize = shape.iter().product();
        let data = self.tensor.as_slice()[self.offset..self.offset + len].to_vec();
        let strides = compute_strides(&shape);
        Ok(Tensor {
            data,
            shape,
            strides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tensor<i32> {
        // Shape [2, 3, 4] filled with 0..24 in row-major order.
        Tensor::from_vec((0..24).collect(), vec![2, 3, 4]).unwrap()
    }

    #[test]
    fn test_chain_resolves_scalar() {
        let t = sample();
        let partial = t.at(1).unwrap().at(2).unwrap();
        assert_eq!(partial.depth(), 2);
        assert!(!partial.is_resolved());
        let v = partial.at(3).unwrap();
        assert!(v.is_resolved());
        assert_eq!(v.value().unwrap(), 23);
        // Same offset as direct resolution.
        assert_eq!(v.value().unwrap(), t.read(&[1, 2, 3]).unwrap());
    }

    #[test]
    fn test_each_step_checks_its_own_axis() {
        let t = sample();
        // Axis 1 has extent 3: index 3 must fail at depth 1, not slip through.
        let err = t.at(0).unwrap().at(3).unwrap_err();
        assert_eq!(
            err,
            CoreError::IndexOutOfRange {
                axis: 1,
                index: 3,
                extent: 3
            }
        );
        // An index valid for axis 0 but not axis 2 still fails at axis 2.
        let err = t.at(1).unwrap().at(1).unwrap().at(4).unwrap_err();
        assert_eq!(
            err,
            CoreError::IndexOutOfRange {
                axis: 2,
                index: 4,
                extent: 4
            }
        );
    }

    #[test]
    fn test_indexing_past_scalar() {
        let t = sample();
        let full = t.at(0).unwrap().at(0).unwrap().at(0).unwrap();
        assert_eq!(full.at(0).unwrap_err(), CoreError::ScalarIndexing);
    }

    #[test]
    fn test_value_on_partial_path() {
        let t = sample();
        let partial = t.at(1).unwrap();
        assert_eq!(
            partial.value().unwrap_err(),
            CoreError::RankMismatch {
                expected: 3,
                got: 1
            }
        );
    }

    #[test]
    fn test_partial_path_slices() {
        let t = sample();
        let s = t.at(1).unwrap().slice().unwrap();
        assert_eq!(s.shape(), &[3, 4]);
        assert_eq!(s.as_slice(), &(12..24).collect::<Vec<i32>>()[..]);

        let s = t.at(1).unwrap().at(2).unwrap().slice().unwrap();
        assert_eq!(s.shape(), &[4]);
        assert_eq!(s.as_slice(), &[20, 21, 22, 23]);
    }

    #[test]
    fn test_resolved_path_slices_to_unit() {
        let t = sample();
        let s = t.at(0).unwrap().at(1).unwrap().at(2).unwrap();
        let unit = s.slice().unwrap();
        assert_eq!(unit.shape(), &[1]);
        assert_eq!(unit.as_slice(), &[6]);
    }

    #[test]
    fn test_paths_are_independent() {
        // Two chains from the same root must not interfere.
        let t = sample();
        let root = t.at(1).unwrap();
        let a = root.at(0).unwrap();
        let b = root.at(2).unwrap();
        assert_eq!(a.slice().unwrap().as_slice(), &[12, 13, 14, 15]);
        assert_eq!(b.slice().unwrap().as_slice(), &[20, 21, 22, 23]);
    }
}
