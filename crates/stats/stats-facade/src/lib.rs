//! Stats Facade
//!
//! Unified re-exports for the stats workspace.
//!
//! This facade provides a single entry point to all functionality:
//! - `StatsError`, models and estimator contracts from SPI
//! - Configuration types from API
//! - Routines and estimator implementations from Core

// Re-export everything from SPI
pub use stats_spi::*;

// Re-export everything from API
pub use stats_api::*;

// Re-export everything from Core
pub use stats_core::*;
