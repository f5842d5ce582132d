// crates/locdb-core/src/search/ranker.rs
use super::scoring::score_record;
use crate::common::SearchHit;
use crate::config::ScoreWeights;
use crate::model::LocationRecord;
use crate::text::{NormalizedQuery, SearchKeys};

/// Score every record, drop non-matches, order by score and truncate.
///
/// `sort_by` is stable, so records with equal scores keep their dataset
/// order. That makes the output a pure function of (query, dataset, weights).
pub fn rank<'a>(
    query: &NormalizedQuery,
    records: &'a [LocationRecord],
    keys: &[SearchKeys],
    weights: &ScoreWeights,
    limit: usize,
) -> Vec<SearchHit<'a>> {
    if limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'a>> = records
        .iter()
        .zip(keys)
        .filter_map(|(record, key)| {
            let score = score_record(query, key, record.tier, weights);
            (score > 0).then(|| SearchHit::new(score, record))
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);
    hits
}
