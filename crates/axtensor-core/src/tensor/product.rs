//! Generalized tensor product (single-axis contraction).
//!
//! For `A` of shape `(a1, ..., an)` and `B` of shape `(b1, ..., bm)` the
//! product is defined only when `an == b1`. The result drops `A`'s last axis
//! and `B`'s first axis:
//!
//! ```text
//! shape(A x B) = (a1, ..., a(n-1), b2, ..., bm)
//! A x B [i.., j..] = sum over k of  A[i.., k] * B[k, j..]
//! ```
//!
//! Matrix multiplication, matrix-vector products, and vector dot products
//! all fall out as special cases of rank.

use num_traits::Zero;

use crate::dtype::Scalar;
use crate::error::{CoreError, Result};

use super::{compute_strides, Tensor};

impl<T: Scalar> Tensor<T> {
    /// Contract `self`'s last axis against `other`'s first axis.
    ///
    /// Fails with `ShapeMismatch` when the two extents differ. When both
    /// operands are rank-1 the contraction consumes every axis; the scalar
    /// result is returned with shape `[1]`.
    ///
    /// Runs in `O(result_size * k)` where `k` is the contracted extent.
    ///
    /// ```
    /// # use axtensor_core::tensor::Tensor;
    /// let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    /// let b = Tensor::from_vec(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]).unwrap();
    /// let c = a.product(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    pub fn product(&self, other: &Tensor<T>) -> Result<Tensor<T>> {
        let contracted = self.shape[self.rank() - 1];
        if contracted != other.shape[0] {
            return Err(CoreError::ShapeMismatch {
                lhs: self.shape.clone(),
                rhs: other.shape.clone(),
            });
        }

        let prefix_rank = self.rank() - 1;
        let suffix_rank = other.rank() - 1;

        // Conceptual output shape; empty for a full (vector-vector)
        // contraction, re-represented as [1] at the end.
        let mut out_shape: Vec<usize> = self.shape[..prefix_rank].to_vec();
        out_shape.extend_from_slice(&other.shape[1..]);
        let out_strides = compute_strides(&out_shape);
        let out_size: usize = out_shape.iter().product();

        let b_lead = other.strides[0];
        let mut data = Vec::with_capacity(out_size);
        let mut index = vec![0usize; out_shape.len()];

        for flat in 0..out_size {
            // Derive the output multi-index by successive division against
            // the output strides, then split it into the A-side prefix and
            // the B-side suffix.
            let mut rem = flat;
            for (d, &stride) in out_strides.iter().enumerate() {
                index[d] = rem / stride;
                rem %= stride;
            }

            let mut a_base = 0;
            for d in 0..prefix_rank {
                a_base += index[d] * self.strides[d];
            }
            let mut b_base = 0;
            for d in 0..suffix_rank {
                b_base += index[prefix_rank + d] * other.strides[d + 1];
            }

            // A's contracted axis is its last, so it advances the flat
            // offset by exactly 1 per step of k.
            let mut acc = T::zero();
            for k in 0..contracted {
                acc += self.data[a_base + k] * other.data[k * b_lead + b_base];
            }
            data.push(acc);
        }

        let shape = if out_shape.is_empty() {
            vec![1]
        } else {
            out_shape
        };
        Tensor::from_vec(data, shape)
    }
}
