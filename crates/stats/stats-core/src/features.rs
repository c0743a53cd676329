//! Feature transforms over tabular records.

use stats_spi::{BinaryRecord, Dataset, Record, Result, StatsError};
use tracing::debug;

use crate::descriptive::{mean, sample_std_dev};

/// Z-score every field: `(value - mean) / std` with the column's mean and
/// sample standard deviation.
///
/// A zero-variance column maps to `0.0` in every record. The key set of the
/// first record defines the columns; every other record must carry exactly
/// the same keys. Needs at least two records, since the sample standard
/// deviation of a single value is undefined.
pub fn standardize(dataset: &[Record]) -> Result<Dataset> {
    let first = dataset
        .first()
        .ok_or_else(|| StatsError::invalid_argument("dataset", "must not be empty"))?;

    for (i, record) in dataset.iter().enumerate().skip(1) {
        if record.len() != first.len() || !first.keys().all(|k| record.contains_key(k)) {
            return Err(StatsError::invalid_argument(
                "dataset",
                format!("record {} has a different key set than record 0", i),
            ));
        }
    }

    let mut result: Dataset = vec![Record::new(); dataset.len()];
    for key in first.keys() {
        let column: Vec<f64> = dataset.iter().map(|r| r[key]).collect();
        let mean = mean(&column)?;
        let std_dev = sample_std_dev(&column)?;

        if std_dev == 0.0 {
            debug!(field = %key, "standardize: zero variance column, mapping to 0.0");
        }

        for (out, value) in result.iter_mut().zip(column) {
            let z = if std_dev == 0.0 {
                0.0
            } else {
                (value - mean) / std_dev
            };
            out.insert(key.clone(), z);
        }
    }

    Ok(result)
}

/// Map every value to `1` if it is strictly greater than `threshold`,
/// otherwise `0`. The same threshold applies to all fields.
pub fn binarize(dataset: &[Record], threshold: f64) -> Vec<BinaryRecord> {
    dataset
        .iter()
        .map(|record| {
            record
                .iter()
                .map(|(k, &v)| (k.clone(), u8::from(v > threshold)))
                .collect()
        })
        .collect()
}
