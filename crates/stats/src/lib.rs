//! # stats
//!
//! Numeric and statistical helper routines over in-memory data.
//!
//! ## Routine Families
//!
//! - **Vectors** - magnitude, normalization, dot product, angle, cosine
//!   similarity, pairwise distances, cluster variance
//! - **Time series** - moving average, exponential smoothing, z-score anomalies
//! - **Features** - column standardization and binarization of records
//! - **Sampling** - stratified and bootstrap resampling with an explicit generator
//! - **Signal scoring** - weighted composite scores and risk bands
//!
//! Every routine is a pure function of its arguments. Randomness always comes
//! from a generator the caller owns or passes in.
//!
//! ## Example
//!
//! ```rust
//! use stats::prelude::*;
//!
//! let v = vec![3.0, 4.0];
//! assert_eq!(magnitude(&v), 5.0);
//!
//! let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
//! assert_eq!(smoothed, vec![1.5, 2.5, 3.5]);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let draws = bootstrap_sample(&[5.0], 3, &mut rng).unwrap();
//! assert_eq!(draws, vec![5.0, 5.0, 5.0]);
//! ```

pub use stats_facade::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Routines
    pub use stats_facade::{
        angle_between, binarize, bootstrap_sample, cluster_variance, cosine_similarity,
        detect_anomalies, dot, euclidean_distance, exponential_smoothing, magnitude, mean,
        moving_average, normalize, pairwise_distances, sample_std_dev, sample_variance,
        standardize, stratified_sample,
    };
    // Estimators
    pub use stats_facade::{
        ExponentialSmoother, MovingAverage, OutlierDetector, Sampler, SeriesSmoother,
        ZScoreDetector,
    };
    // Models and configuration
    pub use stats_facade::{
        Dataset, MovingAverageConfig, Record, SamplerConfig, SmoothingConfig, StatsConfig,
        ZScoreConfig,
    };
    // Error types
    pub use stats_facade::{ErrorKind, Result, StatsError};
    // Random sources
    pub use rand::rngs::StdRng;
    pub use rand::{Rng, SeedableRng};
}
