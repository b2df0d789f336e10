//! End-to-end normalization through the public dispatcher.

use osm_normalization::{
    CompositePolicy, FieldKind, NormalizationOptions, Normalizer, RejectionLog, normalize,
};

#[test]
fn phone_values_in_the_wild() {
    let cases = [
        ("010-12345678", "+86 10 12345678"),
        ("+86 10 6512 3456", "+86 10 65123456"),
        ("(010)65123456", "+86 10 65123456"),
        ("86-10-65123456", "+86 10 65123456"),
        ("139-1234-5678", "+86 13912345678"),
        ("+86 400-810-1234", "+86 4008101234"),
        (
            "010-65123456 / 010-65123457",
            "+86 10 65123456;+86 10 65123457",
        ),
    ];
    for (raw, expected) in cases {
        assert_eq!(normalize("phone", raw), expected, "{raw}");
    }
}

#[test]
fn opening_hours_values_in_the_wild() {
    let cases = [
        ("Mo-Su 10:00-22:00", "Mo-Su 10:00-22:00"),
        ("Mon-Sun 10:00-22:00", "Mo-Su 10:00-22:00"),
        ("10:00 - 22:00", "10:00-22:00"),
        ("8:30~17:30", "8:30-17:30"),
        ("24小时", "24/7"),
        ("Mo-Fr 09:00-12:00 13:00-17:00", "Mo-Fr 09:00-12:00;13:00-17:00"),
    ];
    for (raw, expected) in cases {
        assert_eq!(normalize("opening_hours", raw), expected, "{raw}");
    }
}

#[test]
fn rejected_values_are_empty() {
    assert_eq!(normalize("phone", "暂无"), "");
    assert_eq!(normalize("postcode", "100 025"), "");
    assert_eq!(normalize("housenumber", "无"), "");
    assert_eq!(normalize("opening_hours", "不定期"), "");
}

#[test]
fn keys_without_normalizer_pass_through() {
    for key in ["name", "zh", "street", "amenity", "Phone", "addr:postcode"] {
        assert_eq!(normalize(key, "原样 value "), "原样 value ", "{key}");
    }
}

#[test]
fn rejection_log_covers_a_batch() {
    let normalizer = Normalizer::new(
        NormalizationOptions::default().with_composite_policy(CompositePolicy::KeepValid),
    );
    let mut log = RejectionLog::new();
    let batch = [
        ("phone", "010-12345678"),
        ("phone", "+86 10 12345678"),
        ("phone", "n/a"),
        ("postcode", "100025"),
        ("postcode", "300000"),
        ("opening_hours", "24h"),
        ("name", "天坛公园"),
    ];
    for (key, value) in batch {
        normalizer.normalize_recorded(key, value, &mut log);
    }

    let phone = log.get(FieldKind::Phone).expect("phone stats");
    assert_eq!((phone.seen, phone.rewritten), (3, 1));
    assert_eq!(phone.rejected, vec!["n/a".to_string()]);
    assert_eq!(log.get(FieldKind::Postcode).map(|s| s.rejected_count()), Some(1));
    assert_eq!(log.get(FieldKind::OpeningHours).map(|s| s.rewritten), Some(1));
    assert!(log.get(FieldKind::HouseNumber).is_none());
    assert_eq!(log.total_seen(), 6);
    assert_eq!(log.total_rejected(), 2);
}
