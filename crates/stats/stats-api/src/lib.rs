//! Stats API
//!
//! Configuration types for the estimators, the sampler and signal scoring.
//! These are plain data: loading them from a file or environment is left to
//! the caller.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use stats_spi::{ErrorKind, Result, StatsError};

// ============================================================================
// Time Series Configuration
// ============================================================================

/// Moving average configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageConfig {
    /// Number of points per window (default: 3).
    pub window: usize,
}

impl Default for MovingAverageConfig {
    fn default() -> Self {
        Self { window: 3 }
    }
}

impl MovingAverageConfig {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Exponential smoothing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Weight of the newest observation (default: 0.3).
    ///
    /// Values outside `[0, 1]` are accepted and extrapolate.
    pub alpha: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { alpha: 0.3 }
    }
}

impl SmoothingConfig {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

/// Z-score detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZScoreConfig {
    /// Number of sample standard deviations that marks an anomaly (default: 3.0).
    pub threshold: f64,
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

impl ZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

// ============================================================================
// Sampler Configuration
// ============================================================================

/// Sampler configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Fixed seed for reproducible draws. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SamplerConfig {
    /// Unseeded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded configuration.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

// ============================================================================
// Signal Scoring Configuration
// ============================================================================

/// Score cut-offs between risk bands. A score must be strictly greater
/// than a cut-off to enter its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high: 0.85,
            medium: 0.6,
            low: 0.3,
        }
    }
}

impl RiskThresholds {
    pub fn new(high: f64, medium: f64, low: f64) -> Self {
        Self { high, medium, low }
    }
}

/// Per-metric weights of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub volatility: f64,
    pub liquidity: f64,
    pub tx_rate: f64,
    pub wallet_distribution: f64,
    pub social_sentiment: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            volatility: 0.3,
            liquidity: 0.25,
            tx_rate: 0.2,
            wallet_distribution: 0.15,
            social_sentiment: 0.1,
        }
    }
}

impl SignalWeights {
    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.volatility
            + self.liquidity
            + self.tx_rate
            + self.wallet_distribution
            + self.social_sentiment
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// All configuration sections in one document.
///
/// Every section falls back to its default when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub moving_average: MovingAverageConfig,
    pub smoothing: SmoothingConfig,
    pub zscore: ZScoreConfig,
    pub sampler: SamplerConfig,
    pub thresholds: RiskThresholds,
    pub weights: SignalWeights,
}
