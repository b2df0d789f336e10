//! Element shaping: one raw OSM element to its output rows.

use std::sync::LazyLock;

use osm_model::{
    DEFAULT_TAG_TYPE, ElementKind, NodeRecord, OsmElement, ShapedElement, TagRecord,
    WayNodeRecord, WayRecord,
};
use osm_normalization::names::missing_name_tag;
use osm_normalization::{Normalizer, RejectionLog};
use regex::Regex;

use crate::error::{IngestError, Result};

/// Keys of the form `namespace:key`, lowercase letters and underscores only.
static LOWER_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]|_)+:([a-z]|_)+").expect("Invalid lower colon regex"));

/// Split a raw tag key into `(type, key)`.
///
/// `addr:street` gives `("addr", "street")` and `addr:street:en` gives
/// `("addr", "street:en")`. Keys without a lowercase namespace keep the
/// `regular` type.
pub fn split_tag_key(raw_key: &str) -> (&str, &str) {
    if LOWER_COLON.is_match(&raw_key.to_lowercase())
        && let Some((tag_type, key)) = raw_key.split_once(':')
    {
        return (tag_type, key);
    }
    (DEFAULT_TAG_TYPE, raw_key)
}

/// Shape one element, normalizing its tag values.
///
/// Tags whose value is rejected are dropped and recorded in `log`.
pub fn shape_element(
    element: &OsmElement,
    normalizer: &Normalizer,
    log: &mut RejectionLog,
) -> Result<ShapedElement> {
    let id = required(element, "id")?;

    let mut tags = Vec::with_capacity(element.tags.len());
    for raw in &element.tags {
        let (tag_type, key) = split_tag_key(&raw.key);
        match normalizer.normalize_recorded(key, &raw.value, log) {
            Some(value) => tags.push(TagRecord {
                id: id.to_string(),
                key: key.to_string(),
                value,
                tag_type: tag_type.to_string(),
            }),
            None => tracing::debug!(element = %element.kind, id, key, "Dropped rejected tag value"),
        }
    }
    if normalizer.options().fill_missing_names
        && let Some(name) = missing_name_tag(&tags)
    {
        tags.push(name);
    }

    let shaped = match element.kind {
        ElementKind::Node => ShapedElement::Node {
            node: NodeRecord {
                id: id.to_string(),
                lat: required(element, "lat")?.to_string(),
                lon: required(element, "lon")?.to_string(),
                user: required(element, "user")?.to_string(),
                uid: required(element, "uid")?.to_string(),
                version: required(element, "version")?.to_string(),
                changeset: required(element, "changeset")?.to_string(),
                timestamp: required(element, "timestamp")?.to_string(),
            },
            tags,
        },
        ElementKind::Way => ShapedElement::Way {
            way: WayRecord {
                id: id.to_string(),
                user: required(element, "user")?.to_string(),
                uid: required(element, "uid")?.to_string(),
                version: required(element, "version")?.to_string(),
                changeset: required(element, "changeset")?.to_string(),
                timestamp: required(element, "timestamp")?.to_string(),
            },
            way_nodes: element
                .node_refs
                .iter()
                .enumerate()
                .map(|(position, node_id)| WayNodeRecord {
                    id: id.to_string(),
                    node_id: node_id.clone(),
                    position,
                })
                .collect(),
            tags,
        },
    };
    Ok(shaped)
}

fn required<'a>(element: &'a OsmElement, attribute: &str) -> Result<&'a str> {
    element
        .attribute(attribute)
        .ok_or_else(|| IngestError::missing_attribute(element.kind.as_str(), element.id(), attribute))
}
