// Rock-size generator for the fixed normal model

use crate::config::{ROCK_SIZE_MEAN, ROCK_SIZE_STD_DEV};
use rand::Rng;
use rand_distr::StandardNormal;

/// Generate `count` rock sizes drawn from Normal(0.5, 0.1)
///
/// Each value is an independent draw scaled from a standard normal variate.
/// A `count` of zero yields an empty sample.
///
/// # Example
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use rockstat::sampling::generate;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let rocks = generate(&mut rng, 100);
/// assert_eq!(rocks.len(), 100);
/// ```
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f64> {
    (0..count)
        .map(|_| {
            let z: f64 = rng.sample(StandardNormal);
            ROCK_SIZE_MEAN + ROCK_SIZE_STD_DEV * z
        })
        .collect()
}
