//! Error types for the tag-table adapter.
//!
//! The normalizers themselves never fail: a value that cannot be
//! canonicalized is rejected, not an error.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizationError {
    /// Tag table lacks one of `id`, `key`, `value`, `type`.
    #[error("required column '{column}' not found in tag table")]
    MissingColumn { column: String },

    /// Failed to parse a tag table CSV.
    #[error("failed to read tag table {path}: {message}")]
    CsvRead { path: PathBuf, message: String },

    /// Failed to create or write the output file.
    #[error("failed to write tag table {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for NormalizationError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormalizationError::MissingColumn {
            column: "value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required column 'value' not found in tag table"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("key".into());
        let err: NormalizationError = polars_err.into();
        assert!(matches!(err, NormalizationError::DataFrame { .. }));
    }
}
