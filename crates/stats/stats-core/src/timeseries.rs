//! Time series estimators
//!
//! Smoothing and anomaly detection over a series indexed by time step.
//! Each routine is available both as a free function and as a small
//! config-driven type implementing the [`SeriesSmoother`] or
//! [`OutlierDetector`] contract.

use stats_api::{MovingAverageConfig, SmoothingConfig, ZScoreConfig};
use stats_spi::{OutlierDetector, Result, SeriesSmoother, StatsError};
use tracing::debug;

use crate::descriptive::{mean, sample_std_dev};

// ============================================================================
// Moving Average
// ============================================================================

/// Simple moving average over a sliding window of `window` points.
///
/// The output has `series.len() - window + 1` values. `window` must be in
/// `1..=series.len()`.
///
/// # Example
///
/// ```rust
/// use stats_core::timeseries::moving_average;
///
/// let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// assert_eq!(smoothed, vec![1.5, 2.5, 3.5]);
/// ```
pub fn moving_average(series: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(StatsError::invalid_argument("window", "must be at least 1"));
    }
    if window > series.len() {
        return Err(StatsError::invalid_argument(
            "window",
            format!("{} exceeds series length {}", window, series.len()),
        ));
    }

    Ok(series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect())
}

/// Moving average smoother with a fixed window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingAverage {
    window: usize,
}

impl MovingAverage {
    /// Create a smoother; `window` must be at least 1.
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(StatsError::invalid_argument("window", "must be at least 1"));
        }
        Ok(Self { window })
    }

    /// Create from configuration.
    pub fn from_config(config: MovingAverageConfig) -> Result<Self> {
        Self::new(config.window)
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl SeriesSmoother for MovingAverage {
    fn smooth(&self, series: &[f64]) -> Result<Vec<f64>> {
        moving_average(series, self.window)
    }
}

// ============================================================================
// Exponential Smoothing
// ============================================================================

/// Recursive exponential smoothing.
///
/// `S_0 = Y_0`, `S_t = alpha * Y_t + (1 - alpha) * S_{t-1}`.
///
/// `alpha` is meant to lie in `[0, 1]`. Other values are accepted and
/// extrapolate; the recursion is unstable once `|1 - alpha| > 1`.
/// An empty series is rejected.
pub fn exponential_smoothing(series: &[f64], alpha: f64) -> Result<Vec<f64>> {
    let (&first, rest) = series.split_first().ok_or(StatsError::InsufficientData {
        required: 1,
        actual: 0,
    })?;

    let mut result = Vec::with_capacity(series.len());
    result.push(first);
    let mut level = first;
    for &value in rest {
        level = alpha * value + (1.0 - alpha) * level;
        result.push(level);
    }
    Ok(result)
}

/// Exponential smoother with a fixed `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSmoother {
    alpha: f64,
}

impl ExponentialSmoother {
    /// Create a smoother. `alpha` must be finite.
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() {
            return Err(StatsError::invalid_argument("alpha", "must be finite"));
        }
        Ok(Self { alpha })
    }

    /// Create from configuration.
    pub fn from_config(config: SmoothingConfig) -> Result<Self> {
        Self::new(config.alpha)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl SeriesSmoother for ExponentialSmoother {
    fn smooth(&self, series: &[f64]) -> Result<Vec<f64>> {
        exponential_smoothing(series, self.alpha)
    }
}

// ============================================================================
// Z-Score Anomaly Detection
// ============================================================================

/// Indices whose distance from the mean exceeds `threshold` sample
/// standard deviations: `|x - mean| > threshold * std`.
///
/// Needs at least two points. A constant series has no anomalies.
pub fn detect_anomalies(series: &[f64], threshold: f64) -> Result<Vec<usize>> {
    let std_dev = sample_std_dev(series)?;
    let mean = mean(series)?;
    let limit = threshold * std_dev;

    Ok(series
        .iter()
        .enumerate()
        .filter_map(|(i, &x)| if (x - mean).abs() > limit { Some(i) } else { None })
        .collect())
}

/// Z-score outlier detector.
///
/// Statistics are computed from the series under inspection, not from a
/// separate training set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreDetector {
    threshold: f64,
}

impl ZScoreDetector {
    /// Create a detector with the given threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Create from configuration.
    pub fn from_config(config: ZScoreConfig) -> Self {
        Self::new(config.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self::from_config(ZScoreConfig::default())
    }
}

impl OutlierDetector for ZScoreDetector {
    fn detect(&self, series: &[f64]) -> Result<Vec<usize>> {
        detect_anomalies(series, self.threshold)
    }

    /// Signed z-scores; all `0.0` for a constant series.
    fn score(&self, series: &[f64]) -> Result<Vec<f64>> {
        let std_dev = sample_std_dev(series)?;
        let mean = mean(series)?;
        if std_dev == 0.0 {
            debug!(len = series.len(), "zscore: constant series, scores are 0.0");
            return Ok(vec![0.0; series.len()]);
        }
        Ok(series.iter().map(|x| (x - mean) / std_dev).collect())
    }
}
