//! Error types for OSM ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or shaping OSM elements.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// OSM file not found.
    #[error("OSM file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === XML Errors ===
    /// The document is not well-formed XML.
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// A `node` or `way` ended before its closing tag.
    #[error("document ended inside <{element}> {id}")]
    UnexpectedEof { element: String, id: String },

    // === Element Errors ===
    /// A required attribute is absent.
    #[error("<{element}> {id} is missing attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        id: String,
        attribute: String,
    },
}

impl IngestError {
    pub(crate) fn missing_attribute(element: &str, id: &str, attribute: &str) -> Self {
        Self::MissingAttribute {
            element: element.to_string(),
            id: id.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_display() {
        let err = IngestError::missing_attribute("node", "1001", "lat");
        assert_eq!(err.to_string(), "<node> 1001 is missing attribute 'lat'");
    }

    #[test]
    fn test_file_not_found_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("beijing.osm"),
        };
        assert_eq!(err.to_string(), "OSM file not found: beijing.osm");
    }
}
