use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error taxonomy for the preparation pipeline.
///
/// Every error is fatal: the run aborts, the diagnostic names the failing
/// stage (added via context in the pipeline) and the offending path or
/// column, and the process exits non-zero.
#[derive(Error, Debug)]
pub enum PrepError {
    /// Missing, unreadable, or unwritable path.
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structurally malformed input row (inconsistent field count, invalid
    /// UTF-8).
    #[error("malformed input: {0}")]
    Parse(#[from] csv::Error),

    /// An expected column is absent from the table.
    #[error("column '{column}' not found")]
    Schema { column: String },

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),
}

impl PrepError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        PrepError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn schema(column: &str) -> Self {
        PrepError::Schema {
            column: column.to_string(),
        }
    }
}
