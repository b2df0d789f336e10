use std::fs;

use osm_model::{
    NodeRecord, OutputTable, ShapedElement, TagRecord, WayNodeRecord, WayRecord,
};
use osm_output::{CsvOutputs, OutputOptions};

fn tag(id: &str, key: &str, value: &str, tag_type: &str) -> TagRecord {
    TagRecord {
        id: id.into(),
        key: key.into(),
        value: value.into(),
        tag_type: tag_type.into(),
    }
}

fn elements() -> Vec<ShapedElement> {
    vec![
        ShapedElement::Node {
            node: NodeRecord {
                id: "1".into(),
                lat: "39.9042".into(),
                lon: "116.4074".into(),
                user: "Mapper, Beijing".into(),
                uid: "7".into(),
                version: "2".into(),
                changeset: "100".into(),
                timestamp: "2017-01-01T00:00:00Z".into(),
            },
            tags: vec![
                tag("1", "phone", "+86 10 12345678;+86 13912345678", "regular"),
                tag("1", "postcode", "100025", "addr"),
            ],
        },
        ShapedElement::Way {
            way: WayRecord {
                id: "20".into(),
                user: "mapper".into(),
                uid: "7".into(),
                version: "1".into(),
                changeset: "101".into(),
                timestamp: "2017-01-02T00:00:00Z".into(),
            },
            way_nodes: vec![
                WayNodeRecord {
                    id: "20".into(),
                    node_id: "1".into(),
                    position: 0,
                },
                WayNodeRecord {
                    id: "20".into(),
                    node_id: "2".into(),
                    position: 1,
                },
            ],
            tags: vec![tag("20", "highway", "residential", "regular")],
        },
    ]
}

#[test]
fn writes_all_five_files() {
    let dir = tempfile::tempdir().unwrap();
    let options = OutputOptions::new(dir.path().join("out")).with_validation(true);
    let mut outputs = CsvOutputs::create(&options).unwrap();
    for element in elements() {
        outputs.write_element(&element).unwrap();
    }
    assert_eq!(outputs.rows(OutputTable::WayNodes), 2);

    let written = outputs.finish().unwrap();
    let counts: Vec<(String, usize)> = written
        .iter()
        .map(|table| (table.table.to_string(), table.rows))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("nodes.csv".to_string(), 1),
            ("nodes_tags.csv".to_string(), 2),
            ("ways.csv".to_string(), 1),
            ("ways_nodes.csv".to_string(), 2),
            ("ways_tags.csv".to_string(), 1),
        ]
    );

    let read = |name: &str| fs::read_to_string(dir.path().join("out").join(name)).unwrap();
    insta::assert_snapshot!(read("nodes.csv"), @r#"
    id,lat,lon,user,uid,version,changeset,timestamp
    1,39.9042,116.4074,"Mapper, Beijing",7,2,100,2017-01-01T00:00:00Z
    "#);
    insta::assert_snapshot!(read("nodes_tags.csv"), @r"
    id,key,value,type
    1,phone,+86 10 12345678;+86 13912345678,regular
    1,postcode,100025,addr
    ");
    insta::assert_snapshot!(read("ways_nodes.csv"), @r"
    id,node_id,position
    20,1,0
    20,2,1
    ");
}
