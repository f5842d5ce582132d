use locdb_core::prelude::*;
use std::path::PathBuf;

fn entry(code: &str) -> String {
    format!(
        r#"{{"code": "{code}", "name": "{code} Airport", "city": "{code} City", "country": "Testland"}}"#
    )
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("locdb-{}-{name}", std::process::id()))
}

#[test]
fn wire_format_round_trips_optional_fields() {
    let json = r#"[
        {"code": "SYD", "name": "Sydney Kingsford Smith Airport", "city": "Sydney",
         "country": "Australia", "region": "Oceania", "timezone": "Australia/Sydney",
         "coordinates": {"latitude": -33.9461, "longitude": 151.1772},
         "tier": "international_hub", "searchAliases": ["Kingsford Smith", "  "]},
        {"code": "BWU", "name": "Bankstown Airport", "city": "Sydney", "country": "Australia",
         "region": "", "tier": ""}
    ]"#;
    let db = LocationDb::from_json_str(json).unwrap();
    assert_eq!(db.len(), 2);

    let syd = db.find_by_code("SYD").unwrap();
    assert_eq!(syd.tier(), Some(Tier::InternationalHub));
    assert_eq!(syd.timezone(), Some("Australia/Sydney"));
    assert_eq!(syd.aliases(), ["Kingsford Smith"]);
    assert!(syd.coordinates.unwrap().is_valid());

    let bwu = db.find_by_code("bwu").unwrap();
    assert_eq!(bwu.region(), None);
    assert_eq!(bwu.tier(), None);
    assert!(bwu.coordinates.is_none());

    let out = serde_json::to_value(bwu).unwrap();
    assert!(out.get("region").is_none());
    assert!(out.get("searchAliases").is_none());
}

#[test]
fn duplicate_codes_are_rejected_case_insensitively() {
    let json = format!("[{}, {}, {}]", entry("abc"), entry("XYZ"), entry("ABC"));
    let err = LocationDb::from_json_str(&json).unwrap_err();
    match err {
        LocDbError::DuplicateCode {
            ref code,
            first,
            second,
        } => {
            assert_eq!(code, "ABC");
            assert_eq!((first, second), (0, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("ABC"));
}

#[test]
fn missing_or_blank_required_fields_are_rejected() {
    let no_name = r#"[{"code": "AAA", "city": "A", "country": "X"}]"#;
    assert!(matches!(
        LocationDb::from_json_str(no_name),
        Err(LocDbError::MissingField { index: 0, ref code, field: "name" }) if code == "AAA"
    ));

    let blank_city = format!(
        r#"[{}, {{"code": "BBB", "name": "B", "city": "   ", "country": "X"}}]"#,
        entry("AAA")
    );
    let err = LocationDb::from_json_str(&blank_city).unwrap_err();
    assert!(matches!(
        err,
        LocDbError::MissingField { index: 1, field: "city", .. }
    ));
    assert!(err.to_string().contains("BBB"));

    let no_code = r#"[{"name": "A", "city": "A", "country": "X"}]"#;
    assert!(matches!(
        LocationDb::from_json_str(no_code),
        Err(LocDbError::MissingField { field: "code", .. })
    ));
}

#[test]
fn accented_codes_are_distinct_from_plain_ones() {
    let json = format!("[{}, {}]", entry("ÄBC"), entry("ABC"));
    assert_eq!(LocationDb::from_json_str(&json).unwrap().len(), 2);

    let json = format!("[{}, {}]", entry("ÄBC"), entry("äbc"));
    assert!(matches!(
        LocationDb::from_json_str(&json),
        Err(LocDbError::DuplicateCode { first: 0, second: 1, .. })
    ));
}

#[test]
fn records_built_in_code_are_validated_too() {
    let err = LocationDb::from_records(vec![LocationRecord::new("AAA", "", "A", "X")]).unwrap_err();
    assert!(matches!(err, LocDbError::MissingField { field: "name", .. }));

    let err = LocationDb::from_records(vec![
        LocationRecord::new("AAA", "A", "A", "X"),
        LocationRecord::new("aaa", "B", "B", "X"),
    ])
    .unwrap_err();
    assert!(matches!(err, LocDbError::DuplicateCode { first: 0, second: 1, .. }));
}

#[test]
fn unknown_tier_is_rejected() {
    let json = r#"[{"code": "AAA", "name": "A", "city": "A", "country": "X", "tier": "mega_hub"}]"#;
    let err = LocationDb::from_json_str(json).unwrap_err();
    match err {
        LocDbError::InvalidTier {
            index,
            ref code,
            ref value,
        } => {
            assert_eq!(index, 0);
            assert_eq!(code, "AAA");
            assert_eq!(value, "mega_hub");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn coordinates_out_of_range_are_rejected() {
    let err = LocationDb::from_records(vec![
        LocationRecord::new("AAA", "A", "A", "X").with_coordinates(91.0, 0.0)
    ])
    .unwrap_err();
    assert!(matches!(err, LocDbError::InvalidCoordinates { index: 0, .. }));

    let err = LocationDb::from_records(vec![
        LocationRecord::new("AAA", "A", "A", "X").with_coordinates(0.0, f64::NAN)
    ])
    .unwrap_err();
    assert!(matches!(err, LocDbError::InvalidCoordinates { .. }));

    let edge = LocationRecord::new("AAA", "A", "A", "X").with_coordinates(-90.0, 180.0);
    assert!(LocationDb::from_records(vec![edge]).is_ok());
}

#[test]
fn codes_must_have_three_characters() {
    for bad in ["ABCD", "AB"] {
        let err = LocationDb::from_json_str(&format!("[{}]", entry(bad))).unwrap_err();
        assert!(
            matches!(err, LocDbError::InvalidCode { ref code, .. } if code == bad),
            "{bad}: {err}"
        );
    }
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        LocationDb::from_json_str("[{\"code\": \"AAA\""),
        Err(LocDbError::Json(_))
    ));
    assert!(matches!(
        LocationDb::from_json_str("{}"),
        Err(LocDbError::Json(_))
    ));
}

#[test]
fn empty_dataset_is_valid_and_answers_nothing() {
    let db = LocationDb::from_json_str("[]").unwrap();
    assert!(db.is_empty());
    assert!(db.search("london", 10).is_empty());
    assert!(db.popular().is_empty());
    assert_eq!(db.stats(), DbStats::default());
}

#[test]
fn load_from_path_reads_plain_json() {
    let path = temp_path("plain.json");
    std::fs::write(&path, format!("[{}, {}]", entry("AAA"), entry("BBB"))).unwrap();

    let db = LocationDb::load_from_path(&path, SearchConfig::default()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(db.len(), 2);
    assert_eq!(db.search("bbb", 5)[0].code(), "BBB");
}

#[test]
fn load_from_missing_path_is_not_found() {
    let err = LocationDb::load_from_path(temp_path("missing.json"), SearchConfig::default())
        .unwrap_err();
    assert!(matches!(err, LocDbError::NotFound(_)));
}

#[cfg(feature = "compact")]
#[test]
fn load_from_path_reads_gzip() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let path = temp_path("packed.json.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(format!("[{}]", entry("GZP")).as_bytes())
        .unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let db = LocationDb::load_from_path(&path, SearchConfig::default()).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(db.find_by_code("gzp").is_some());
}

#[test]
fn reconfigure_keeps_records() {
    let db = LocationDb::from_json_str(&format!("[{}, {}]", entry("AAA"), entry("BBB"))).unwrap();
    let db = db
        .reconfigure(SearchConfig {
            min_query_len: 4,
            ..SearchConfig::default()
        })
        .unwrap();
    assert_eq!(db.len(), 2);
    assert_eq!(db.config().min_query_len, 4);
    assert!(db.search("aaa", 5).is_empty());
}

#[cfg(feature = "embedded")]
#[test]
fn embedded_dataset_is_shared() {
    let a = LocationDb::load().unwrap();
    let b = LocationDb::load().unwrap();
    assert!(std::ptr::eq(a, b));
    assert!(a.len() >= 200);
}
