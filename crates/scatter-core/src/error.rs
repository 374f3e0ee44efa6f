// File: crates/scatter-core/src/error.rs
// Summary: Typed errors for dataset loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// Wraps csv-level failures, including file open/read errors.
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Every row was rejected (or the file had no data rows).
    #[error("no usable rows in dataset ({rejected} rejected)")]
    Empty { rejected: usize },
}
