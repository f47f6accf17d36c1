//! `Display` formatting for [`Tensor`].
//!
//! Renders the canonical nested-bracket form: rank-1 tensors as
//! `[e0, e1, ..., en-1]`, higher ranks as a bracketed list of their
//! leading-axis slices, recursively. A single-element vector renders as
//! `[e]` with no trailing separator.

use core::fmt;

use crate::dtype::Scalar;

use super::Tensor;

impl<T: Scalar> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_block(f, &self.data, &self.shape)
    }
}

fn fmt_block<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    data: &[T],
    shape: &[usize],
) -> fmt::Result {
    write!(f, "[")?;
    if shape.len() == 1 {
        for (i, v) in data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
    } else {
        let block = data.len() / shape[0];
        for i in 0..shape[0] {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt_block(f, &data[i * block..(i + 1) * block], &shape[1..])?;
        }
    }
    write!(f, "]")
}
