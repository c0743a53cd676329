//! Random resampling
//!
//! Every draw goes through an explicit generator: either one the caller
//! passes in, or the one owned by a [`Sampler`]. Nothing here touches a
//! process-wide generator, so seeded runs are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stats_api::SamplerConfig;
use stats_spi::{Result, StatsError};
use tracing::trace;

/// Draw one value from each of `strata_count` strata of the sorted data.
///
/// The data is sorted ascending and cut into contiguous strata of
/// `data.len() / strata_count` values each. When the length is not evenly
/// divisible, the largest `data.len() % strata_count` values fall past the
/// last stratum and are never drawn.
///
/// `strata_count` must be in `1..=data.len()`.
pub fn stratified_sample<R>(data: &[f64], strata_count: usize, rng: &mut R) -> Result<Vec<f64>>
where
    R: Rng + ?Sized,
{
    if strata_count == 0 {
        return Err(StatsError::invalid_argument(
            "strata_count",
            "must be at least 1",
        ));
    }
    if strata_count > data.len() {
        return Err(StatsError::invalid_argument(
            "strata_count",
            format!("{} exceeds data length {}", strata_count, data.len()),
        ));
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let stratum_size = sorted.len() / strata_count;
    trace!(len = sorted.len(), strata_count, stratum_size, "stratified sample");

    Ok((0..strata_count)
        .map(|i| sorted[i * stratum_size + rng.gen_range(0..stratum_size)])
        .collect())
}

/// Draw `n` values uniformly at random, with replacement.
///
/// `data` must not be empty.
pub fn bootstrap_sample<R>(data: &[f64], n: usize, rng: &mut R) -> Result<Vec<f64>>
where
    R: Rng + ?Sized,
{
    if data.is_empty() {
        return Err(StatsError::invalid_argument("data", "must not be empty"));
    }
    trace!(len = data.len(), n, "bootstrap sample");

    Ok((0..n).map(|_| data[rng.gen_range(0..data.len())]).collect())
}

/// Resampler that owns its generator.
///
/// # Example
///
/// ```rust
/// use stats_api::SamplerConfig;
/// use stats_core::sampler::Sampler;
///
/// let mut sampler = Sampler::from_config(SamplerConfig::seeded(42));
/// let draws = sampler.bootstrap(&[1.0, 2.0, 3.0], 10).unwrap();
/// assert_eq!(draws.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Sampler with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create from configuration.
    pub fn from_config(config: SamplerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// See [`stratified_sample`].
    pub fn stratified(&mut self, data: &[f64], strata_count: usize) -> Result<Vec<f64>> {
        stratified_sample(data, strata_count, &mut self.rng)
    }

    /// See [`bootstrap_sample`].
    pub fn bootstrap(&mut self, data: &[f64], n: usize) -> Result<Vec<f64>> {
        bootstrap_sample(data, n, &mut self.rng)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from_config(SamplerConfig::default())
    }
}
