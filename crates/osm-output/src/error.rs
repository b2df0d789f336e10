//! Error types for CSV output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the output directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output file.
    #[error("failed to create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write or flush CSV rows.
    #[error("failed to write {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A shaped element does not satisfy the output schema.
    #[error("invalid {element} {id}: field '{field}' {reason}")]
    Schema {
        element: String,
        id: String,
        field: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
