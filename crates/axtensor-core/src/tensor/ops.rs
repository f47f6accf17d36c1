//! Elementwise arithmetic for [`Tensor`].
//!
//! Implements:
//! - `try_add` / `try_sub`: the checked, `Result`-returning contract path.
//! - `Add` / `Sub` operator impls for `Tensor` and `&Tensor` as sugar that
//!   panics on shape mismatch.
//! - `Tensor op scalar` for `+`, `-`, `*` (one scalar against every
//!   element; tensor-against-tensor broadcasting stays unsupported).
//! - A few whole-tensor reductions.

use core::ops::{Add, Mul, Sub};

use num_traits::Zero;

use crate::dtype::{Float, Scalar};
use crate::error::Result;

use super::Tensor;

impl<T: Scalar> Tensor<T> {
    /// Elementwise addition; fails with `ShapeMismatch` unless both shapes
    /// are identical.
    pub fn try_add(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Elementwise subtraction; fails with `ShapeMismatch` unless both
    /// shapes are identical.
    pub fn try_sub(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        self.zip_map(other, |a, b| a - b)
    }
}

// ======================================================================
// Tensor + Tensor  (elementwise, same shape — panics on mismatch)
// ======================================================================

macro_rules! impl_tensor_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $trait for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: Tensor<T>) -> Tensor<T> {
                self.$checked(&rhs)
                    .expect(concat!("shape mismatch in elementwise ", stringify!($method)))
            }
        }

        impl<T: Scalar> $trait for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: &Tensor<T>) -> Tensor<T> {
                self.$checked(rhs)
                    .expect(concat!("shape mismatch in elementwise ", stringify!($method)))
            }
        }
    };
}

impl_tensor_binop!(Add, add, try_add);
impl_tensor_binop!(Sub, sub, try_sub);

// ======================================================================
// Tensor + scalar  (one scalar against every element)
// ======================================================================

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait<T> for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Scalar> $trait<T> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, +);
impl_scalar_binop!(Sub, sub, -);
impl_scalar_binop!(Mul, mul, *);

// ======================================================================
// Reductions
// ======================================================================

impl<T: Scalar> Tensor<T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.iter().copied().fold(T::zero(), |acc, x| acc + x)
    }

    /// Smallest element. Total: the buffer is never empty.
    pub fn min_element(&self) -> T {
        let first = self.data[0];
        self.data[1..]
            .iter()
            .copied()
            .fold(first, |a, b| if b < a { b } else { a })
    }

    /// Largest element. Total: the buffer is never empty.
    pub fn max_element(&self) -> T {
        let first = self.data[0];
        self.data[1..]
            .iter()
            .copied()
            .fold(first, |a, b| if b > a { b } else { a })
    }
}

impl<T: Float> Tensor<T> {
    /// Mean of all elements.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.size())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_try_add() {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
        let b = Tensor::from_vec(vec![10.0, 20.0, 30.0], vec![3]).unwrap();
        let c = a.try_add(&b).unwrap();
        assert_eq!(c.as_slice(), &[11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_try_sub() {
        let a = Tensor::from_vec(vec![10.0, 20.0], vec![2]).unwrap();
        let b = Tensor::from_vec(vec![1.0, 2.0], vec![2]).unwrap();
        let c = a.try_sub(&b).unwrap();
        assert_eq!(c.as_slice(), &[9.0, 18.0]);
    }

    #[test]
    fn test_add_then_sub_round_trips() {
        let a = Tensor::from_vec(vec![1.0, -2.5, 3.0, 4.5], vec![2, 2]).unwrap();
        let b = Tensor::from_vec(vec![0.5, 1.5, -2.0, 8.0], vec![2, 2]).unwrap();
        let round = a.try_add(&b).unwrap().try_sub(&b).unwrap();
        assert_eq!(round, a);
    }

    #[test]
    fn test_same_size_different_shape_rejected() {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
        let b = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![4]).unwrap();
        assert!(matches!(
            a.try_add(&b).unwrap_err(),
            CoreError::ShapeMismatch { .. }
        ));
    }

    #[test]
    fn test_operator_sugar() {
        let a = Tensor::from_vec(vec![1, 2], vec![2]).unwrap();
        let b = Tensor::from_vec(vec![3, 4], vec![2]).unwrap();
        assert_eq!((&a + &b).as_slice(), &[4, 6]);
        assert_eq!((a - b).as_slice(), &[-2, -2]);
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_operator_panics_on_mismatch() {
        let a = Tensor::from_vec(vec![1.0, 2.0], vec![2]).unwrap();
        let b = Tensor::from_vec(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
        let _ = a + b;
    }

    #[test]
    fn test_scalar_ops() {
        let a = Tensor::from_vec(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
        assert_eq!((&a + 1.0).as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!((&a - 1.0).as_slice(), &[0.0, 1.0, 2.0]);
        assert_eq!((a * 10.0).as_slice(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_reductions() {
        let t = Tensor::from_vec(vec![3, 1, 4, 1, 5, 9], vec![6]).unwrap();
        assert_eq!(t.sum(), 23);
        assert_eq!(t.min_element(), 1);
        assert_eq!(t.max_element(), 9);
    }

    #[test]
    fn test_mean() {
        let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![4]).unwrap();
        assert_eq!(t.mean(), 2.5);
    }
}
