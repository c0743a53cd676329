//! Data models shared across the stats crates.

mod record;
mod signal;

pub use record::{BinaryRecord, Dataset, Record};
pub use signal::{RiskLevel, Signal, SignalMetrics, SignalReport};
