//! Schema checks for shaped elements.
//!
//! Columns are kept as text all the way to the CSV files; these checks
//! only confirm that each text parses as the column's type.

use osm_model::{ShapedElement, TagRecord};

use crate::error::{OutputError, Result};

/// Check every row of a shaped element; the first violation is returned.
pub fn validate_element(element: &ShapedElement) -> Result<()> {
    let check = Checker {
        element: element.kind().as_str(),
        id: element.id(),
    };
    match element {
        ShapedElement::Node { node, tags } => {
            check.integer("id", &node.id)?;
            check.coordinate("lat", &node.lat, 90.0)?;
            check.coordinate("lon", &node.lon, 180.0)?;
            check.text("user", &node.user)?;
            check.integer("uid", &node.uid)?;
            check.text("version", &node.version)?;
            check.integer("changeset", &node.changeset)?;
            check.text("timestamp", &node.timestamp)?;
            check.tags(tags)
        }
        ShapedElement::Way {
            way,
            way_nodes,
            tags,
        } => {
            check.integer("id", &way.id)?;
            check.text("user", &way.user)?;
            check.integer("uid", &way.uid)?;
            check.text("version", &way.version)?;
            check.integer("changeset", &way.changeset)?;
            check.text("timestamp", &way.timestamp)?;
            for way_node in way_nodes {
                check.integer("node_id", &way_node.node_id)?;
            }
            check.tags(tags)
        }
    }
}

struct Checker<'a> {
    element: &'a str,
    id: &'a str,
}

impl Checker<'_> {
    fn fail(&self, field: &str, reason: String) -> OutputError {
        OutputError::Schema {
            element: self.element.to_string(),
            id: self.id.to_string(),
            field: field.to_string(),
            reason,
        }
    }

    fn integer(&self, field: &str, value: &str) -> Result<()> {
        value
            .parse::<i64>()
            .map(|_| ())
            .map_err(|_| self.fail(field, format!("is not an integer: '{value}'")))
    }

    fn coordinate(&self, field: &str, value: &str, limit: f64) -> Result<()> {
        let parsed = value
            .parse::<f64>()
            .map_err(|_| self.fail(field, format!("is not a number: '{value}'")))?;
        if !(-limit..=limit).contains(&parsed) {
            return Err(self.fail(field, format!("is out of range: {value}")));
        }
        Ok(())
    }

    fn text(&self, field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(self.fail(field, "is empty".to_string()));
        }
        Ok(())
    }

    fn tags(&self, tags: &[TagRecord]) -> Result<()> {
        for tag in tags {
            self.integer("id", &tag.id)?;
            self.text("key", &tag.key)?;
            self.text("value", &tag.value)?;
            self.text("type", &tag.tag_type)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osm_model::{NodeRecord, WayNodeRecord, WayRecord};

    fn node() -> NodeRecord {
        NodeRecord {
            id: "1".into(),
            lat: "39.9".into(),
            lon: "116.4".into(),
            user: "mapper".into(),
            uid: "7".into(),
            version: "1".into(),
            changeset: "100".into(),
            timestamp: "2017-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_valid_node() {
        let element = ShapedElement::Node {
            node: node(),
            tags: vec![TagRecord {
                id: "1".into(),
                key: "amenity".into(),
                value: "cafe".into(),
                tag_type: "regular".into(),
            }],
        };
        assert!(validate_element(&element).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        let element = ShapedElement::Node {
            node: NodeRecord {
                lat: "91.5".into(),
                ..node()
            },
            tags: Vec::new(),
        };
        let err = validate_element(&element).unwrap_err();
        assert_eq!(err.to_string(), "invalid node 1: field 'lat' is out of range: 91.5");
    }

    #[test]
    fn test_non_integer_uid() {
        let element = ShapedElement::Node {
            node: NodeRecord {
                uid: "seven".into(),
                ..node()
            },
            tags: Vec::new(),
        };
        assert!(matches!(
            validate_element(&element),
            Err(OutputError::Schema { ref field, .. }) if field == "uid"
        ));
    }

    #[test]
    fn test_way_node_ref() {
        let element = ShapedElement::Way {
            way: WayRecord {
                id: "9".into(),
                user: "mapper".into(),
                uid: "7".into(),
                version: "2".into(),
                changeset: "100".into(),
                timestamp: "2017-01-01T00:00:00Z".into(),
            },
            way_nodes: vec![WayNodeRecord {
                id: "9".into(),
                node_id: "".into(),
                position: 0,
            }],
            tags: Vec::new(),
        };
        let err = validate_element(&element).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid way 9: field 'node_id' is not an integer: ''"
        );
    }
}
