//! Reading and shaping a small OSM file from disk.

use std::io::Write;

use osm_ingest::{OsmReader, shape_element};
use osm_model::ShapedElement;
use osm_normalization::{FieldKind, Normalizer, RejectionLog};

const BEIJING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="osmconvert">
  <node id="2279386211" lat="39.9161" lon="116.3972" version="3" timestamp="2016-08-20T03:40:12Z" changeset="41606377" uid="1293272" user="Beijing Mapper">
    <tag k="name:zh" v="故宫博物院"/>
    <tag k="tourism" v="museum"/>
    <tag k="opening_hours" v="Tue-Sun 08:30-17:00"/>
    <tag k="phone" v="010-85007421"/>
  </node>
  <node id="2279386212" lat="39.9170" lon="116.3980" version="1" timestamp="2016-08-20T03:40:12Z" changeset="41606377" uid="1293272" user="Beijing Mapper">
    <tag k="addr:postcode" v="999999"/>
  </node>
  <way id="218330127" version="2" timestamp="2016-08-21T03:40:12Z" changeset="41606400" uid="1293272" user="Beijing Mapper">
    <nd ref="2279386211"/>
    <nd ref="2279386212"/>
    <tag k="addr:housenumber" v="4号"/>
  </way>
</osm>
"#;

#[test]
fn shapes_every_element_of_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BEIJING.as_bytes()).unwrap();

    let normalizer = Normalizer::default();
    let mut log = RejectionLog::new();
    let shaped: Vec<ShapedElement> = OsmReader::from_path(file.path())
        .unwrap()
        .map(|element| shape_element(&element.unwrap(), &normalizer, &mut log).unwrap())
        .collect();

    assert_eq!(shaped.len(), 3);

    let museum: Vec<(&str, &str)> = shaped[0]
        .tags()
        .iter()
        .map(|tag| (tag.key.as_str(), tag.value.as_str()))
        .collect();
    assert_eq!(
        museum,
        vec![
            ("zh", "故宫博物院"),
            ("tourism", "museum"),
            ("opening_hours", "Tu-Su 08:30-17:00"),
            ("phone", "+86 10 85007421"),
            ("name", "故宫博物院"),
        ]
    );

    assert!(shaped[1].tags().is_empty());
    assert_eq!(
        log.get(FieldKind::Postcode).map(|s| s.rejected.clone()),
        Some(vec!["999999".to_string()])
    );

    let ShapedElement::Way { way, way_nodes, tags } = &shaped[2] else {
        panic!("expected a way");
    };
    assert_eq!(way.user, "Beijing Mapper");
    assert_eq!(way_nodes.len(), 2);
    assert_eq!(way_nodes[1].node_id, "2279386212");
    assert_eq!(tags[0].tag_type, "addr");
}
