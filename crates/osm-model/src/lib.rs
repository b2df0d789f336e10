//! Shared data model for the OSM cleaning workspace.
//!
//! Two families of types live here:
//! - [`OsmElement`]: a `node` or `way` as read from the XML export, before
//!   any cleaning.
//! - [`ShapedElement`] and its row types: the cleaned, tabular form written
//!   to the five CSV files. Column order is fixed by the `*_FIELDS` constants
//!   in [`schema`].

pub mod element;
pub mod records;
pub mod schema;

pub use element::{ElementKind, OsmElement, RawTag};
pub use records::{NodeRecord, ShapedElement, TagRecord, WayNodeRecord, WayRecord};
pub use schema::{
    DEFAULT_TAG_TYPE, NODE_FIELDS, NODE_TAGS_FIELDS, OutputTable, WAY_FIELDS, WAY_NODES_FIELDS,
    WAY_TAGS_FIELDS,
};
