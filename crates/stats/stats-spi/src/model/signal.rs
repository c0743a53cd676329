//! Scored signal types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw metrics describing one observed transaction.
///
/// Absent fields deserialize as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalMetrics {
    pub volatility: f64,
    pub liquidity: f64,
    pub tx_rate: f64,
    pub wallet_distribution: f64,
    pub social_sentiment: f64,
}

/// Risk band a composite score falls into.
///
/// Ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    VeryLow,
}

impl RiskLevel {
    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
            RiskLevel::VeryLow => "Very Low Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A registered, scored signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: String,
    /// Unix seconds at registration.
    pub timestamp: u64,
    pub composite_score: f64,
    pub level: RiskLevel,
}

/// Summary over a collection of signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReport {
    /// Mean composite score, `0.0` for an empty collection.
    pub average: f64,
    /// Number of signals classified [`RiskLevel::High`].
    pub high_risk: usize,
    pub total: usize,
}
