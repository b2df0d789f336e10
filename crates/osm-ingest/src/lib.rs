//! OSM XML ingestion.
//!
//! - [`OsmReader`] streams `node` and `way` elements out of an OSM XML export.
//! - [`shape_element`] turns one element into its output rows, normalizing
//!   tag values on the way.

pub mod error;
pub mod reader;
pub mod shape;

pub use error::{IngestError, Result};
pub use reader::OsmReader;
pub use shape::{shape_element, split_tag_key};
