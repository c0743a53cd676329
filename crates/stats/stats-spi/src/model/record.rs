//! Tabular record types.

use std::collections::BTreeMap;

/// One row of named numeric fields.
///
/// Every record in a [`Dataset`] is expected to carry the same key set.
pub type Record = BTreeMap<String, f64>;

/// Ordered sequence of records.
pub type Dataset = Vec<Record>;

/// A record whose values were thresholded to 0 or 1.
pub type BinaryRecord = BTreeMap<String, u8>;
