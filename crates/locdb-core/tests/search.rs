use locdb_core::prelude::*;

fn db() -> &'static LocationDb {
    LocationDb::load().expect("embedded dataset must be valid")
}

fn codes(records: &[&LocationRecord]) -> Vec<String> {
    records.iter().map(|r| r.code().to_string()).collect()
}

#[test]
fn short_queries_return_nothing() {
    for q in ["", " ", "\t\n", "s", " S ", "é", "ß", "æ", "東", "№", " Æ "] {
        assert!(db().search(q, 10).is_empty(), "query {q:?} should be empty");
        assert!(db().search_hits(q, 10).is_empty());
    }
}

#[test]
fn exact_code_ranks_first_with_hub_boost() {
    let hits = db().search_hits("SYD", 10);
    let first = hits.first().expect("SYD must match");
    assert!(first.is_code("SYD"));
    // 1000 for the code, ×1.2 for international_hub, plus name/city hits
    assert!(first.score >= 1000 * 12);
    assert_eq!(first.score, (1000 + 50 + 75) * 12);
    assert_eq!(first.points(), 1350.0);
    assert!(hits[1..].iter().all(|h| h.score < first.score));
}

#[test]
fn search_is_case_insensitive() {
    let upper = codes(&db().search("SYD", 10));
    assert_eq!(upper, codes(&db().search("syd", 10)));
    assert_eq!(upper, codes(&db().search("  sYd ", 10)));
}

#[test]
fn london_returns_the_london_airports_with_heathrow_on_top() {
    let results = db().search("london", 10);
    let uk_london: Vec<_> = results
        .iter()
        .filter(|r| r.city() == "London" && r.country() == "United Kingdom")
        .collect();
    assert!(uk_london.len() >= 5, "got {:?}", codes(&results));
    assert_eq!(results[0].code(), "LHR");
    assert_eq!(results[0].tier(), Some(Tier::InternationalHub));
}

#[test]
fn repeated_searches_are_identical() {
    let first = codes(&db().search("lon", 10));
    for _ in 0..20 {
        assert_eq!(codes(&db().search("lon", 10)), first);
    }
}

#[test]
fn limit_bounds_the_result() {
    assert_eq!(db().search("airport", 3).len(), 3);
    assert!(db().search("airport", 0).is_empty());
    assert_eq!(db().autocomplete("airport").len(), DEFAULT_LIMIT);
}

#[test]
fn results_are_sorted_by_descending_score() {
    let hits = db().search_hits("international", 50);
    assert!(!hits.is_empty());
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn search_matches_the_hits_ordering() {
    let records = db().search("new york", 10);
    let hits = db().search_hits("new york", 10);
    assert_eq!(records.len(), hits.len());
    assert!(records
        .iter()
        .zip(&hits)
        .all(|(r, h)| std::ptr::eq(*r, h.record)));
    assert_eq!(records[0].code(), "JFK");
}

#[test]
fn accents_and_aliases_are_matched() {
    assert_eq!(db().search("sao paulo", 1)[0].code(), "GRU");
    assert_eq!(db().search("zurich", 1)[0].code(), "ZRH");
    assert_eq!(db().search("ZÜRICH", 1)[0].code(), "ZRH");
    assert_eq!(db().search("genf", 1)[0].code(), "GVA");
    assert_eq!(db().search("heathrow", 1)[0].code(), "LHR");
}

#[test]
fn unmatched_query_is_empty_not_an_error() {
    assert!(db().search("qqxxzz", 10).is_empty());
}

#[test]
fn equal_scores_keep_dataset_order() {
    let db = LocationDb::from_records(vec![
        LocationRecord::new("ZZA", "Harbour Field", "Alpha", "Testland"),
        LocationRecord::new("AAB", "Harbour Field", "Bravo", "Testland"),
        LocationRecord::new("MMC", "Harbour Field", "Charlie", "Testland"),
    ])
    .unwrap();
    assert_eq!(codes(&db.search("harbour", 10)), ["ZZA", "AAB", "MMC"]);
}

#[test]
fn configured_minimum_length_is_honoured() {
    let records = vec![LocationRecord::new("SYD", "Sydney Airport", "Sydney", "Australia")];
    let config = SearchConfig {
        min_query_len: 3,
        default_limit: 1,
        ..SearchConfig::default()
    };
    let db = LocationDb::with_config(records, config).unwrap();
    assert!(db.search("sy", 10).is_empty());
    assert_eq!(db.autocomplete("syd").len(), 1);
}

#[test]
fn oversized_weights_do_not_break_search() {
    let records = db().records().to_vec();
    let mut config = SearchConfig::default();
    config.weights.city_exact = u32::MAX;
    config.weights.alias_contains = u32::MAX;
    let db = LocationDb::with_config(records, config).unwrap();

    let hits = db.search_hits("an", 5);
    assert_eq!(hits.len(), 5);
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(db.search_hits("london", 1)[0].score, u32::MAX);
}

#[test]
fn concurrent_readers_see_the_same_results() {
    let expected = codes(&db().search("london", 10));
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| codes(&db().search("london", 10))))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
