//! Series estimator trait definitions.

use crate::error::Result;

/// Transforms a series into a smoothed series.
///
/// Implementations are stateless: the same input always yields the same
/// output, so a smoother can be shared across threads.
pub trait SeriesSmoother: Send + Sync {
    /// Smooth the given series.
    fn smooth(&self, series: &[f64]) -> Result<Vec<f64>>;
}

/// Flags outlying positions in a series.
pub trait OutlierDetector: Send + Sync {
    /// Indices of points considered anomalous, in ascending order.
    fn detect(&self, series: &[f64]) -> Result<Vec<usize>>;

    /// Per-point anomaly scores without thresholding.
    fn score(&self, series: &[f64]) -> Result<Vec<f64>>;
}
