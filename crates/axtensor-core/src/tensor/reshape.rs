//! Shape manipulation.
//!
//! Reshape is a pure metadata operation: the buffer is never reallocated or
//! reordered, and a failed reshape leaves the tensor untouched.

use crate::dtype::Scalar;
use crate::error::{CoreError, Result};

use super::{compute_strides, validate_shape, Tensor};

impl<T: Scalar> Tensor<T> {
    /// Reshape the tensor in place.
    ///
    /// Fails with `InvalidShape` if `new_shape` is empty or contains a zero
    /// extent, and with `SizeMismatch` if its product differs from the
    /// current element count. Shape and strides are replaced together only
    /// after both checks pass.
    pub fn reshape(&mut self, new_shape: Vec<usize>) -> Result<()> {
        validate_shape(&new_shape)?;
        let new_size: usize = new_shape.iter().product();
        if new_size != self.size() {
            return Err(CoreError::SizeMismatch {
                expected: self.size(),
                got: new_size,
            });
        }
        self.strides = compute_strides(&new_shape);
        self.shape = new_shape;
        Ok(())
    }

    /// Return a reshaped copy, leaving `self` unchanged.
    pub fn reshaped(&self, new_shape: Vec<usize>) -> Result<Self> {
        let mut out = self.clone();
        out.reshape(new_shape)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_metadata_only() {
        let mut t = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], vec![6]).unwrap();
        t.reshape(vec![2, 3]).unwrap();
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.strides(), &[3, 1]);
        // Flat order is untouched.
        assert_eq!(t.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(t.read(&[1, 0]).unwrap(), 4);
    }

    #[test]
    fn test_reshape_same_shape_noop() {
        let mut t = Tensor::from_vec(vec![1, 2, 3, 4], vec![2, 2]).unwrap();
        let before = t.clone();
        t.reshape(vec![2, 2]).unwrap();
        assert_eq!(t, before);
    }

    #[test]
    fn test_reshape_size_mismatch() {
        let mut t = Tensor::from_vec(vec![1, 2, 3, 4], vec![4]).unwrap();
        assert_eq!(
            t.reshape(vec![3, 2]).unwrap_err(),
            CoreError::SizeMismatch {
                expected: 4,
                got: 6
            }
        );
        // Failure must not leave partial state behind.
        assert_eq!(t.shape(), &[4]);
        assert_eq!(t.strides(), &[1]);
    }

    #[test]
    fn test_reshape_invalid_shape() {
        let mut t = Tensor::from_vec(vec![1, 2, 3, 4], vec![4]).unwrap();
        assert!(matches!(
            t.reshape(vec![]).unwrap_err(),
            CoreError::InvalidShape { .. }
        ));
        assert!(matches!(
            t.reshape(vec![4, 0]).unwrap_err(),
            CoreError::InvalidShape { .. }
        ));
        assert_eq!(t.shape(), &[4]);
    }

    #[test]
    fn test_reshape_preserves_flat_reads() {
        let mut t = Tensor::from_vec((0..24).collect::<Vec<i32>>(), vec![2, 3, 4]).unwrap();
        let before: Vec<i32> = t.as_slice().to_vec();
        t.reshape(vec![6, 4]).unwrap();
        assert_eq!(t.as_slice(), &before[..]);
        t.reshape(vec![24]).unwrap();
        assert_eq!(t.as_slice(), &before[..]);
    }

    #[test]
    fn test_reshaped_copy() {
        let t = Tensor::from_vec(vec![1, 2, 3, 4], vec![4]).unwrap();
        let r = t.reshaped(vec![2, 2]).unwrap();
        assert_eq!(t.shape(), &[4]);
        assert_eq!(r.shape(), &[2, 2]);
        assert_eq!(r.as_slice(), t.as_slice());
    }
}
