//! Error types for numeric operations
//!
//! This module provides the [`StatsError`] enum, its [`ErrorKind`]
//! classification and the [`Result`] type alias.

mod stats_error;

pub use stats_error::{ErrorKind, Result, StatsError};
