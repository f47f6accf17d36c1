//! Numeric type hierarchy for generic tensor math.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar
//!   └── Float  (f32, f64)
//! ```
//!
//! [`Scalar`] is the bound every tensor element type must satisfy; it builds
//! on `num-traits` so the arithmetic surface stays aligned with the wider
//! ecosystem instead of being re-declared operator by operator. [`Float`]
//! adds the conversions the random-fill collaborator needs.

use core::fmt;
use core::iter::Sum;

use num_traits::NumAssign;

// ---------------------------------------------------------------------------
// Scalar — the root trait for every numeric element type
// ---------------------------------------------------------------------------

/// Base trait for all numeric types storable in a tensor.
///
/// This intentionally does *not* require floating-point operations so that
/// integer tensors remain first-class citizens. `NumAssign` supplies the
/// `zero()` / `one()` identities and the full operator set.
pub trait Scalar:
    Copy + fmt::Debug + fmt::Display + PartialOrd + NumAssign + Sum + Send + Sync + 'static
{
    /// Convert from `usize` (used for index and shape arithmetic).
    fn from_usize(v: usize) -> Self;
}

// ---------------------------------------------------------------------------
// Float — adds what only makes sense for floating-point numbers
// ---------------------------------------------------------------------------

/// Trait for floating-point scalar types (`f32`, `f64`).
///
/// The `from_f64` / `to_f64` pair is the seam through which distribution
/// samplers (which draw `f64` internally) feed tensors of either width.
pub trait Float: Scalar + num_traits::Float {
    /// Convert from an `f64` (used when adopting sampled values).
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64` (used when handing parameters to a sampler).
    fn to_f64(self) -> f64;
}

// ===========================================================================
// Implementations
// ===========================================================================

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                #[inline]
                #[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
                fn from_usize(v: usize) -> Self {
                    v as $ty
                }
            }
        )*
    };
}

impl_scalar!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Float for $ty {
                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn from_f64(v: f64) -> Self {
                    v as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_float!(f32, f64);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn test_scalar_identities() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(i32::zero(), 0);
        assert_eq!(i32::one(), 1);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(f32::from_usize(42), 42.0_f32);
        assert_eq!(u8::from_usize(255), 255_u8);
        assert_eq!(i64::from_usize(7), 7_i64);
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(f32::from_f64(1.5), 1.5_f32);
        assert_eq!(Float::to_f64(2.5_f32), 2.5_f64);
        assert_eq!(f64::from_f64(-3.25), -3.25);
    }
}
