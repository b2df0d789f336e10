//! Fixed column schemas of the five output tables.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const NODE_FIELDS: &[&str] = &[
    "id",
    "lat",
    "lon",
    "user",
    "uid",
    "version",
    "changeset",
    "timestamp",
];
pub const NODE_TAGS_FIELDS: &[&str] = &["id", "key", "value", "type"];
pub const WAY_FIELDS: &[&str] = &["id", "user", "uid", "version", "changeset", "timestamp"];
pub const WAY_TAGS_FIELDS: &[&str] = &["id", "key", "value", "type"];
pub const WAY_NODES_FIELDS: &[&str] = &["id", "node_id", "position"];

/// Tag type assigned to keys without a `namespace:` prefix.
pub const DEFAULT_TAG_TYPE: &str = "regular";

/// The output tables, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OutputTable {
    Nodes,
    NodeTags,
    Ways,
    WayNodes,
    WayTags,
}

impl OutputTable {
    pub const ALL: [OutputTable; 5] = [
        OutputTable::Nodes,
        OutputTable::NodeTags,
        OutputTable::Ways,
        OutputTable::WayNodes,
        OutputTable::WayTags,
    ];

    /// File name inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputTable::Nodes => "nodes.csv",
            OutputTable::NodeTags => "nodes_tags.csv",
            OutputTable::Ways => "ways.csv",
            OutputTable::WayNodes => "ways_nodes.csv",
            OutputTable::WayTags => "ways_tags.csv",
        }
    }

    /// Column header, in file order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            OutputTable::Nodes => NODE_FIELDS,
            OutputTable::NodeTags => NODE_TAGS_FIELDS,
            OutputTable::Ways => WAY_FIELDS,
            OutputTable::WayNodes => WAY_NODES_FIELDS,
            OutputTable::WayTags => WAY_TAGS_FIELDS,
        }
    }
}

impl fmt::Display for OutputTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
