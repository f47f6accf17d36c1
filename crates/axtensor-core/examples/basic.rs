//! Build a small matrix, fill it by index, print it, then reshape it.

use axtensor_core::prelude::*;

fn main() -> Result<()> {
    let mut m = FTensor::new(vec![5, 2])?;
    println!("shape: {:?}", m.shape());

    for i in 0..m.shape()[0] {
        for j in 0..m.shape()[1] {
            m.write(&[i, j], (i * j) as f32)?;
        }
    }
    println!("{m}");

    m.reshape(vec![10])?;
    println!("shape: {:?}", m.shape());
    println!("{m}");

    Ok(())
}
