//! Estimator contracts.

mod estimator;

pub use estimator::{OutlierDetector, SeriesSmoother};
