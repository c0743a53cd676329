//! Signal scoring and risk classification
//!
//! A signal is a set of raw metrics reduced to one weighted composite score,
//! which is then banded into a [`RiskLevel`]. [`SignalBook`] keeps the scored
//! signals of a session in memory for summaries.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use stats_api::{RiskThresholds, SignalWeights};
use stats_spi::{Result, RiskLevel, Signal, SignalMetrics, SignalReport, StatsError};
use tracing::{debug, trace};

/// Min-max scale `value` into `[0, 1]` relative to `[min, max]`.
///
/// Values outside the range land outside `[0, 1]`. An empty range
/// (`min == max`) has no defined scale and is an arithmetic error.
pub fn normalize_signal(value: f64, min: f64, max: f64) -> Result<f64> {
    let range = max - min;
    if range == 0.0 {
        debug!(min, max, "normalize_signal: empty range");
        return Err(StatsError::ArithmeticError(format!(
            "cannot scale into empty range [{}, {}]",
            min, max
        )));
    }
    Ok((value - min) / range)
}

/// Weighted sum of the metrics.
pub fn composite_score(metrics: &SignalMetrics, weights: &SignalWeights) -> f64 {
    metrics.volatility * weights.volatility
        + metrics.liquidity * weights.liquidity
        + metrics.tx_rate * weights.tx_rate
        + metrics.wallet_distribution * weights.wallet_distribution
        + metrics.social_sentiment * weights.social_sentiment
}

/// Band a score. Each band requires the score to be strictly above its
/// cut-off, checked from the highest band down.
pub fn classify(score: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if score > thresholds.high {
        RiskLevel::High
    } else if score > thresholds.medium {
        RiskLevel::Medium
    } else if score > thresholds.low {
        RiskLevel::Low
    } else {
        RiskLevel::VeryLow
    }
}

/// Linear interpolation between two risk values.
pub fn interpolate_risk(low: f64, high: f64, factor: f64) -> f64 {
    low + (high - low) * factor
}

/// Render a `[0, 1]` score as a percentage with two decimals.
pub fn format_score(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}

/// In-memory collection of scored signals.
#[derive(Debug, Clone, Default)]
pub struct SignalBook {
    thresholds: RiskThresholds,
    weights: SignalWeights,
    signals: Vec<Signal>,
}

impl SignalBook {
    /// Create an empty book with the given scoring parameters.
    pub fn new(thresholds: RiskThresholds, weights: SignalWeights) -> Self {
        Self {
            thresholds,
            weights,
            signals: Vec::new(),
        }
    }

    /// Score and classify `metrics`, store the signal and return a copy.
    pub fn register(&mut self, id: impl Into<String>, metrics: &SignalMetrics) -> Signal {
        let composite_score = composite_score(metrics, &self.weights);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let signal = Signal {
            id: id.into(),
            timestamp,
            composite_score,
            level: classify(composite_score, &self.thresholds),
        };
        trace!(id = %signal.id, score = composite_score, level = %signal.level, "signal registered");

        self.signals.push(signal.clone());
        signal
    }

    /// All signals in registration order.
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Signals classified at exactly `level`. `Low` does not include `VeryLow`.
    pub fn filter(&self, level: RiskLevel) -> Vec<&Signal> {
        self.signals.iter().filter(|s| s.level == level).collect()
    }

    /// Mean composite score, `0.0` when the book is empty.
    pub fn average_score(&self) -> f64 {
        if self.signals.is_empty() {
            return 0.0;
        }
        self.signals.iter().map(|s| s.composite_score).sum::<f64>() / self.signals.len() as f64
    }

    /// The last `count` signals, oldest first. `recent(0)` is empty.
    pub fn recent(&self, count: usize) -> &[Signal] {
        let start = self.signals.len().saturating_sub(count);
        &self.signals[start..]
    }

    /// Copies of all signals ordered by composite score.
    pub fn sorted_by_score(&self, descending: bool) -> Vec<Signal> {
        let mut sorted = self.signals.clone();
        if descending {
            sorted.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
        } else {
            sorted.sort_by(|a, b| a.composite_score.total_cmp(&b.composite_score));
        }
        sorted
    }

    /// Signals grouped by risk level. Levels without signals are absent.
    pub fn group_by_level(&self) -> BTreeMap<RiskLevel, Vec<&Signal>> {
        let mut groups: BTreeMap<RiskLevel, Vec<&Signal>> = BTreeMap::new();
        for signal in &self.signals {
            groups.entry(signal.level).or_default().push(signal);
        }
        groups
    }

    /// Register `count` signals `tx_1..=tx_count` with metrics drawn
    /// uniformly from `[0, 1)`.
    pub fn simulate<R>(&mut self, rng: &mut R, count: usize)
    where
        R: Rng + ?Sized,
    {
        for i in 0..count {
            let metrics = SignalMetrics {
                volatility: rng.gen(),
                liquidity: rng.gen(),
                tx_rate: rng.gen(),
                wallet_distribution: rng.gen(),
                social_sentiment: rng.gen(),
            };
            self.register(format!("tx_{}", i + 1), &metrics);
        }
    }

    /// Drop all signals.
    pub fn clear(&mut self) {
        self.signals.clear();
    }

    /// Average score, number of high risk signals and total count.
    pub fn report(&self) -> SignalReport {
        SignalReport {
            average: self.average_score(),
            high_risk: self.filter(RiskLevel::High).len(),
            total: self.signals.len(),
        }
    }
}
