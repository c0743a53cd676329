//! Stats Core
//!
//! Implementations of the numeric routines, organized by family:
//!
//! - [`descriptive`]: mean and sample dispersion shared by the other modules
//! - [`vector`]: norms, angles, similarity and distances
//! - [`timeseries`]: moving average, exponential smoothing, z-score anomalies
//! - [`features`]: column standardization and binarization of records
//! - [`sampler`]: stratified and bootstrap resampling
//! - [`scoring`]: weighted signal scores and risk classification
//!
//! Degenerate inputs with a defined answer (zero vector, constant column)
//! resolve to documented constants instead of NaN.

pub mod descriptive;
pub mod features;
pub mod sampler;
pub mod scoring;
pub mod timeseries;
pub mod vector;

pub use descriptive::{mean, sample_std_dev, sample_variance};
pub use features::{binarize, standardize};
pub use sampler::{bootstrap_sample, stratified_sample, Sampler};
pub use scoring::{
    classify, composite_score, format_score, interpolate_risk, normalize_signal, SignalBook,
};
pub use timeseries::{
    detect_anomalies, exponential_smoothing, moving_average, ExponentialSmoother, MovingAverage,
    ZScoreDetector,
};
pub use vector::{
    angle_between, cluster_variance, cosine_similarity, dot, euclidean_distance, magnitude,
    normalize, pairwise_distances,
};
