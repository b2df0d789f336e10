//! Row types of the tabular output.
//!
//! Field order matches the column order of the corresponding CSV file, so the
//! records can be serialized directly.

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;

/// One row of `nodes.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub lat: String,
    pub lon: String,
    pub user: String,
    pub uid: String,
    pub version: String,
    pub changeset: String,
    pub timestamp: String,
}

/// One row of `ways.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WayRecord {
    pub id: String,
    pub user: String,
    pub uid: String,
    pub version: String,
    pub changeset: String,
    pub timestamp: String,
}

/// One row of `ways_nodes.csv`: a node reference at its position in the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WayNodeRecord {
    pub id: String,
    pub node_id: String,
    pub position: usize,
}

/// One row of `nodes_tags.csv` or `ways_tags.csv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    pub id: String,
    pub key: String,
    pub value: String,
    /// Namespace of the original key (`addr` for `addr:street`), or `regular`.
    #[serde(rename = "type")]
    pub tag_type: String,
}

/// A cleaned element ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapedElement {
    Node {
        node: NodeRecord,
        tags: Vec<TagRecord>,
    },
    Way {
        way: WayRecord,
        way_nodes: Vec<WayNodeRecord>,
        tags: Vec<TagRecord>,
    },
}

impl ShapedElement {
    pub fn kind(&self) -> ElementKind {
        match self {
            ShapedElement::Node { .. } => ElementKind::Node,
            ShapedElement::Way { .. } => ElementKind::Way,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ShapedElement::Node { node, .. } => &node.id,
            ShapedElement::Way { way, .. } => &way.id,
        }
    }

    pub fn tags(&self) -> &[TagRecord] {
        match self {
            ShapedElement::Node { tags, .. } | ShapedElement::Way { tags, .. } => tags,
        }
    }
}
