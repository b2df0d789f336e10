//! Raw elements as they appear in the OSM XML export.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The element types carried into the tabular output.
///
/// Relations are read past but never materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
}

impl ElementKind {
    /// XML tag name of the element.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
        }
    }

    /// Resolve an XML tag name; `None` for anything but `node` and `way`.
    pub fn from_tag_name(name: &[u8]) -> Option<Self> {
        match name {
            b"node" => Some(ElementKind::Node),
            b"way" => Some(ElementKind::Way),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `<tag k=".." v=".."/>` child, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTag {
    pub key: String,
    pub value: String,
}

impl RawTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A `node` or `way` element with its attributes and children in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsmElement {
    pub kind: ElementKind,
    /// XML attributes in document order.
    pub attributes: Vec<(String, String)>,
    pub tags: Vec<RawTag>,
    /// `<nd ref=".."/>` children; always empty for nodes.
    pub node_refs: Vec<String>,
}

impl OsmElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            tags: Vec::new(),
            node_refs: Vec::new(),
        }
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `id` attribute, or an empty string when absent.
    pub fn id(&self) -> &str {
        self.attribute("id").unwrap_or_default()
    }
}
