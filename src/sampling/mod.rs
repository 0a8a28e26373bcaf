// Repeated rock-size sampling
//
// Draws samples of rock diameters from the fixed normal model and reduces
// each one to its Bessel-corrected mean and variance. The random source is
// always passed in by the caller, so a seeded generator reproduces a run
// exactly.
//
// Pipeline:
// - sampler: N independent draws from Normal(0.5, 0.1)
// - moments: (mean, variance) of one sample, N-1 denominator
// - batch: repeat sampler + moments K times into a SampleBatch

mod batch;
mod moments;
mod sampler;

pub use batch::{repeat, SampleBatch, SamplingSummary};
pub use moments::{estimate, mean, sample_std_dev, sample_variance, Moments};
pub use sampler::generate;
