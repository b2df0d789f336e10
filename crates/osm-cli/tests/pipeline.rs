//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use osm_cli::pipeline::{clean, convert, default_clean_output, export_rejections};
use osm_normalization::{CompositePolicy, FieldKind, NormalizationOptions, Normalizer};
use osm_output::OutputOptions;

const MAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="101" lat="39.9087" lon="116.3975" version="2" timestamp="2017-03-01T08:00:00Z" changeset="46000001" uid="42" user="bj">
    <tag k="name:zh" v="天安门"/>
    <tag k="tourism" v="attraction"/>
  </node>
  <node id="102" lat="39.9990" lon="116.3264" version="1" timestamp="2017-03-02T08:00:00Z" changeset="46000002" uid="42" user="bj">
    <tag k="amenity" v="cafe"/>
    <tag k="contact:phone" v="010-62751234/13912345678"/>
    <tag k="opening_hours" v="Mon-Sun 9am-9pm"/>
    <tag k="addr:postcode" v="100871"/>
  </node>
  <node id="103" lat="39.9" lon="116.3" version="1" timestamp="2017-03-03T08:00:00Z" changeset="46000003" uid="42" user="bj">
    <tag k="phone" v="010-62751234/unknown"/>
  </node>
  <way id="201" version="1" timestamp="2017-03-04T08:00:00Z" changeset="46000004" uid="42" user="bj">
    <nd ref="101"/>
    <nd ref="102"/>
    <tag k="highway" v="footway"/>
    <tag k="addr:housenumber" v="东"/>
  </way>
  <relation id="301" version="1" timestamp="2017-03-05T08:00:00Z" changeset="46000005" uid="42" user="bj">
    <member type="way" ref="201" role=""/>
    <tag k="phone" v="not a phone"/>
  </relation>
</osm>
"#;

fn write_map(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("beijing.osm");
    fs::write(&path, MAP).unwrap();
    path
}

#[test]
fn convert_writes_tables_and_collects_rejections() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_map(dir.path());
    let output = OutputOptions::new(dir.path().join("csv")).with_validation(true);

    let outcome = convert(&input, &output, &Normalizer::default()).unwrap();

    assert_eq!((outcome.nodes, outcome.ways), (3, 1));
    let rows: Vec<usize> = outcome.tables.iter().map(|t| t.rows).collect();
    assert_eq!(rows, vec![3, 7, 1, 2, 1]);

    let phone = outcome.rejections.get(FieldKind::Phone).unwrap();
    assert_eq!(phone.seen, 2);
    assert_eq!(phone.rejected, vec!["010-62751234/unknown".to_string()]);
    assert_eq!(
        outcome
            .rejections
            .get(FieldKind::HouseNumber)
            .map(|s| s.rejected_count()),
        Some(1)
    );

    let node_tags = fs::read_to_string(dir.path().join("csv/nodes_tags.csv")).unwrap();
    insta::assert_snapshot!(node_tags, @r"
    id,key,value,type
    101,zh,天安门,name
    101,tourism,attraction,regular
    101,name,天安门,regular
    102,amenity,cafe,regular
    102,phone,+86 10 62751234;+86 13912345678,contact
    102,opening_hours,Mo-Su 9:00-21:00,regular
    102,postcode,100871,addr
    ");
}

#[test]
fn keep_valid_policy_keeps_partial_phone() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_map(dir.path());
    let output = OutputOptions::new(dir.path().join("csv"));
    let normalizer = Normalizer::new(
        NormalizationOptions::new()
            .with_composite_policy(CompositePolicy::KeepValid)
            .with_fill_missing_names(false),
    );

    let outcome = convert(&input, &output, &normalizer).unwrap();

    let rows: Vec<usize> = outcome.tables.iter().map(|t| t.rows).collect();
    assert_eq!(rows, vec![3, 7, 1, 2, 1]);
    let node_tags = fs::read_to_string(dir.path().join("csv/nodes_tags.csv")).unwrap();
    assert!(node_tags.contains("103,phone,+86 10 62751234,regular"));
    assert!(!node_tags.contains("101,name,"));
}

#[test]
fn convert_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputOptions::new(dir.path());
    let err = convert(&dir.path().join("missing.osm"), &output, &Normalizer::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("OSM file not found"));
}

#[test]
fn clean_tags_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nodes_tags.csv");
    fs::write(
        &input,
        "id,key,value,type\n\
         1,phone,139 1234 5678,regular\n\
         1,postcode,010000,addr\n\
         2,zh,颐和园,name\n\
         2,opening_hours,Apr-Oct 06:30-18:00,regular\n",
    )
    .unwrap();
    let output = default_clean_output(&input);
    assert_eq!(output, dir.path().join("nodes_tags_clean.csv"));

    let outcome = clean(&input, &output, &Normalizer::default()).unwrap();
    assert_eq!(outcome.input_rows, 4);
    assert_eq!(outcome.dropped, 1);
    assert_eq!(outcome.names_added, 1);
    assert_eq!(outcome.output_rows, 4);

    let cleaned = fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!(cleaned, @r"
    id,key,value,type
    1,phone,+86 13912345678,regular
    2,zh,颐和园,name
    2,opening_hours,Apr-Oct 06:30-18:00,regular
    2,name,颐和园,regular
    ");
}

#[test]
fn rejection_log_exports_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_map(dir.path());
    let outcome = convert(
        &input,
        &OutputOptions::new(dir.path().join("csv")),
        &Normalizer::default(),
    )
    .unwrap();
    let path = dir.path().join("rejections.json");
    export_rejections(&outcome.rejections, &path).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["fields"]["housenumber"]["rejected"][0], "东");
    assert_eq!(json["fields"]["phone"]["seen"], 2);
}
