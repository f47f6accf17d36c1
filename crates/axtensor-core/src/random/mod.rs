//! Random tensor fills.
//!
//! The tensor core owns no randomness: callers hold the generator state
//! (`&mut R where R: Rng`) and decide the seeding policy, typically
//! `StdRng::seed_from_u64` once per process. The functions here only drive
//! a distribution through a tensor's flat write path, overwriting every
//! element in storage order.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::dtype::Float;
use crate::error::{CoreError, Result};
use crate::tensor::Tensor;

/// Overwrite every element with a draw from `N(mean, std_dev^2)`.
///
/// Fails with `InvalidArgument` when `std_dev` is negative or not finite.
pub fn fill_normal<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    tensor: &mut Tensor<T>,
    mean: T,
    std_dev: T,
) -> Result<()> {
    let dist = Normal::new(Float::to_f64(mean), Float::to_f64(std_dev)).map_err(|_| {
        CoreError::InvalidArgument {
            reason: "standard deviation must be finite and non-negative",
        }
    })?;
    for v in tensor.iter_mut() {
        *v = T::from_f64(dist.sample(&mut *rng));
    }
    Ok(())
}

/// Overwrite every element with a uniform draw from `[0, 1)`.
pub fn fill_uniform<T: Float, R: Rng + ?Sized>(rng: &mut R, tensor: &mut Tensor<T>) {
    for v in tensor.iter_mut() {
        *v = T::from_f64(rng.gen::<f64>());
    }
}

/// Create a tensor of samples from `N(mean, std_dev^2)`.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use axtensor_core::tensor::Tensor;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let t: Tensor<f64> = axtensor_core::random::normal(&mut rng, vec![2, 3], 0.0, 1.0).unwrap();
/// assert_eq!(t.shape(), &[2, 3]);
/// ```
pub fn normal<T: Float, R: Rng + ?Sized>(
    rng: &mut R,
    shape: Vec<usize>,
    mean: T,
    std_dev: T,
) -> Result<Tensor<T>> {
    let mut tensor = Tensor::new(shape)?;
    fill_normal(rng, &mut tensor, mean, std_dev)?;
    Ok(tensor)
}

/// Create a tensor of uniform samples from `[0, 1)`.
pub fn uniform<T: Float, R: Rng + ?Sized>(rng: &mut R, shape: Vec<usize>) -> Result<Tensor<T>> {
    let mut tensor = Tensor::new(shape)?;
    fill_uniform(rng, &mut tensor);
    Ok(tensor)
}
