// crates/locdb-core/src/common.rs
use crate::model::LocationRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Simple aggregate statistics for the database.
///
/// Returned by [`LocationSearch::stats`](crate::LocationSearch::stats).
/// `by_region` and `by_tier` only count records that carry the field, so
/// their sums can be lower than `total`. Tier keys are the snake_case names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStats {
    pub total: usize,
    pub by_region: BTreeMap<String, usize>,
    pub by_tier: BTreeMap<String, usize>,
    pub by_country: BTreeMap<String, usize>,
}

/// Result item of [`LocationSearch::search_hits`](crate::LocationSearch::search_hits)
/// with relevance score and matched record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    /// Tenths of a point.
    pub score: u32,
    pub record: &'a LocationRecord,
}

impl<'a> SearchHit<'a> {
    #[inline]
    pub fn new(score: u32, record: &'a LocationRecord) -> Self {
        SearchHit { score, record }
    }

    /// Score in points (`1200.0` for an exact code match on an
    /// international hub).
    #[inline]
    pub fn points(&self) -> f64 {
        f64::from(self.score) / 10.0
    }

    /// Returns true if this hit refers to the record with the given code.
    #[inline]
    pub fn is_code(&self, code: &str) -> bool {
        self.record.code.eq_ignore_ascii_case(code)
    }
}
