//! Stats Service Provider Interface
//!
//! Defines the error taxonomy, data models and contracts shared by every
//! numeric routine in the workspace:
//!
//! - [`StatsError`] / [`ErrorKind`]: standardized error type and its coarse kind
//! - [`Record`], [`Dataset`]: named numeric fields for feature transforms
//! - [`Signal`], [`SignalMetrics`], [`RiskLevel`]: scored signal models
//! - [`SeriesSmoother`], [`OutlierDetector`]: estimator contracts

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{OutlierDetector, SeriesSmoother};
pub use error::{ErrorKind, Result, StatsError};
pub use model::{
    BinaryRecord, Dataset, Record, RiskLevel, Signal, SignalMetrics, SignalReport,
};
