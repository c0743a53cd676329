//! Descriptive statistics over plain slices.

use stats_spi::{Result, StatsError};

/// Arithmetic mean.
///
/// Fails with [`StatsError::InsufficientData`] on an empty slice.
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(StatsError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample variance with Bessel's correction (divides by `n - 1`).
pub fn sample_variance(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            actual: data.len(),
        });
    }
    let mean = mean(data)?;
    let ss: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    Ok(ss / (data.len() - 1) as f64)
}

/// Sample standard deviation, the square root of [`sample_variance`].
pub fn sample_std_dev(data: &[f64]) -> Result<f64> {
    sample_variance(data).map(f64::sqrt)
}
