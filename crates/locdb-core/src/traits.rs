// crates/locdb-core/src/traits.rs
use crate::common::{DbStats, SearchHit};
use crate::model::{LocationRecord, Tier};

/// The read-only query surface of a location database.
///
/// No method fails: an unknown code is `None`, an unmatched or too-short
/// query is an empty `Vec`.
///
/// # Example
///
/// ```rust
/// use locdb_core::{LocationDb, LocationRecord, LocationSearch, Tier};
///
/// let db = LocationDb::from_records(vec![
///     LocationRecord::new("SYD", "Sydney Kingsford Smith Airport", "Sydney", "Australia")
///         .with_tier(Tier::InternationalHub),
///     LocationRecord::new("BWU", "Sydney Bankstown Airport", "Sydney", "Australia"),
/// ])
/// .unwrap();
///
/// let codes: Vec<&str> = db.search("syd", 10).iter().map(|r| r.code()).collect();
/// assert_eq!(codes, ["SYD", "BWU"]);
/// assert!(db.find_by_code("bwu").is_some());
/// ```
pub trait LocationSearch {
    /// All records, in dataset order.
    fn records(&self) -> &[LocationRecord];

    /// Ranked relevance search, best match first, at most `limit` records.
    fn search(&self, query: &str, limit: usize) -> Vec<&LocationRecord> {
        self.search_hits(query, limit)
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }

    /// Same ordering as [`LocationSearch::search`], with scores attached.
    fn search_hits(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>>;

    /// [`LocationSearch::search`] with the configured default limit.
    fn autocomplete(&self, query: &str) -> Vec<&LocationRecord>;

    /// Case-insensitive exact code lookup.
    fn find_by_code(&self, code: &str) -> Option<&LocationRecord>;

    /// Records whose region equals `region` exactly.
    fn filter_by_region(&self, region: &str) -> Vec<&LocationRecord>;

    /// Records whose country equals `country`, ignoring case.
    fn filter_by_country(&self, country: &str) -> Vec<&LocationRecord>;

    fn filter_by_tier(&self, tier: Tier) -> Vec<&LocationRecord>;

    /// International hubs plus curated regional hubs, capped.
    fn popular(&self) -> Vec<&LocationRecord>;

    fn stats(&self) -> DbStats;
}
