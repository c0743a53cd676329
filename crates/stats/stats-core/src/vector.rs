//! Vector geometry and distance metrics
//!
//! Vectors are plain `&[f64]` slices. Pairwise products (`dot`, and through
//! it `cosine_similarity` and `angle_between`) stop at the shorter of the two
//! inputs; callers are expected to pass equal lengths. Distances are stricter
//! and reject a dimension mismatch.

use stats_spi::{Result, StatsError};
use tracing::debug;

use crate::descriptive::mean;

/// Euclidean norm, `sqrt(sum(x^2))`. An empty vector has magnitude `0.0`.
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Scale `v` to unit length.
///
/// A zero vector has no direction, so it is returned unchanged.
pub fn normalize(v: &[f64]) -> Vec<f64> {
    let mag = magnitude(v);
    if mag == 0.0 {
        debug!(len = v.len(), "normalize: zero magnitude, returning input unchanged");
        return v.to_vec();
    }
    v.iter().map(|x| x / mag).collect()
}

/// Sum of elementwise products over the shorter of the two vectors.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Cosine of the angle between two vectors, `dot / (|a| * |b|)`.
///
/// Returns `0.0` when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norms = magnitude(a) * magnitude(b);
    if norms == 0.0 {
        debug!("cosine_similarity: zero magnitude operand, returning 0.0");
        return 0.0;
    }
    dot(a, b) / norms
}

/// Angle between two vectors in radians, in `[0, PI]`.
///
/// Returns `0.0` when either vector has zero magnitude. The cosine is clamped
/// to `[-1, 1]` first so rounding on (anti)parallel inputs cannot yield NaN.
pub fn angle_between(a: &[f64], b: &[f64]) -> f64 {
    let norms = magnitude(a) * magnitude(b);
    if norms == 0.0 {
        debug!("angle_between: zero magnitude operand, returning 0.0");
        return 0.0;
    }
    (dot(a, b) / norms).clamp(-1.0, 1.0).acos()
}

/// Straight-line distance between two points of equal dimension.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(StatsError::invalid_argument(
            "points",
            format!("dimension mismatch: {} vs {}", a.len(), b.len()),
        ));
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt())
}

/// Euclidean distance for every unordered pair `(i, j)` with `i < j`.
///
/// Pairs are emitted in lexicographic index order: `(0,1), (0,2), ..., (1,2), ...`,
/// so the output holds `n * (n - 1) / 2` values.
pub fn pairwise_distances(points: &[Vec<f64>]) -> Result<Vec<f64>> {
    let n = points.len();
    let mut distances = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            distances.push(euclidean_distance(p, q)?);
        }
    }
    Ok(distances)
}

/// Spread of cluster centers around the grand mean.
///
/// Each non-empty cluster is reduced to its mean; the result is the sum of
/// squared deviations of those means from their own average. Individual
/// points only enter through their cluster's mean. Empty clusters are
/// skipped.
///
/// Fails with [`StatsError::ArithmeticError`] when no cluster has members.
pub fn cluster_variance(clusters: &[Vec<f64>]) -> Result<f64> {
    let means: Vec<f64> = clusters.iter().filter_map(|c| mean(c).ok()).collect();
    let grand_mean = mean(&means).map_err(|_| {
        StatsError::ArithmeticError("cluster variance of zero non-empty clusters".to_string())
    })?;
    Ok(means.iter().map(|m| (m - grand_mean).powi(2)).sum())
}
