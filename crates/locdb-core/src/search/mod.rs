// crates/locdb-core/src/search/mod.rs
pub mod ranker;
pub mod scoring;

use crate::common::{DbStats, SearchHit};
use crate::model::{LocationDb, LocationRecord, Tier};
use crate::text::normalize_query;
use crate::traits::LocationSearch;
use tracing::trace;

impl LocationDb {
    fn pick(&self, positions: &[usize]) -> Vec<&LocationRecord> {
        positions.iter().map(|&i| &self.records[i]).collect()
    }
}

impl LocationSearch for LocationDb {
    fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    fn search_hits(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let Some(q) = normalize_query(query, self.config.min_query_len) else {
            return Vec::new();
        };
        let hits = ranker::rank(&q, &self.records, &self.keys, &self.config.weights, limit);
        trace!(query = %q.text, limit, hits = hits.len(), "search");
        hits
    }

    fn autocomplete(&self, query: &str) -> Vec<&LocationRecord> {
        self.search(query, self.config.default_limit)
    }

    fn find_by_code(&self, code: &str) -> Option<&LocationRecord> {
        self.index.code(code).map(|i| &self.records[i])
    }

    fn filter_by_region(&self, region: &str) -> Vec<&LocationRecord> {
        self.pick(self.index.region(region))
    }

    fn filter_by_country(&self, country: &str) -> Vec<&LocationRecord> {
        self.pick(self.index.country(country))
    }

    fn filter_by_tier(&self, tier: Tier) -> Vec<&LocationRecord> {
        self.pick(self.index.tier(tier))
    }

    fn popular(&self) -> Vec<&LocationRecord> {
        self.pick(self.index.popular())
    }

    fn stats(&self) -> DbStats {
        let mut stats = DbStats {
            total: self.records.len(),
            ..Default::default()
        };

        for r in &self.records {
            if let Some(region) = &r.region {
                *stats.by_region.entry(region.clone()).or_default() += 1;
            }
            if let Some(tier) = r.tier {
                *stats.by_tier.entry(tier.as_str().to_string()).or_default() += 1;
            }
            *stats.by_country.entry(r.country.clone()).or_default() += 1;
        }

        stats
    }
}
