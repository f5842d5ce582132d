// crates/locdb-core/src/index.rs
use crate::config::SearchConfig;
use crate::model::{LocationRecord, Tier};
use crate::text::fold_case;
use std::collections::{HashMap, HashSet};

/// Lookup tables derived from the records once, at construction.
///
/// Every table stores positions into the master `records` vector. Lists are
/// pushed in source order, so every filter returns records in dataset order.
#[derive(Clone, Debug, Default)]
pub struct LocationIndex {
    /// Lowercased code -> position.
    pub(crate) by_code: HashMap<String, usize>,
    /// Region, exactly as written in the dataset -> positions.
    pub(crate) by_region: HashMap<String, Vec<usize>>,
    /// Lowercased country -> positions.
    pub(crate) by_country: HashMap<String, Vec<usize>>,
    pub(crate) by_tier: HashMap<Tier, Vec<usize>>,
    /// International hubs plus allow-listed regional hubs, capped.
    pub(crate) popular: Vec<usize>,
}

impl LocationIndex {
    pub fn build(records: &[LocationRecord], config: &SearchConfig) -> Self {
        let allow: HashSet<String> = config
            .popular_regional_hubs
            .iter()
            .map(|c| fold_case(c))
            .collect();

        let mut index = LocationIndex {
            by_code: HashMap::with_capacity(records.len()),
            ..Default::default()
        };

        for (pos, record) in records.iter().enumerate() {
            let code = fold_case(&record.code);

            if let Some(region) = &record.region {
                index.by_region.entry(region.clone()).or_default().push(pos);
            }

            index
                .by_country
                .entry(fold_case(&record.country))
                .or_default()
                .push(pos);

            if let Some(tier) = record.tier {
                index.by_tier.entry(tier).or_default().push(pos);
            }

            let is_popular = match record.tier {
                Some(Tier::InternationalHub) => true,
                Some(Tier::RegionalHub) => allow.contains(&code),
                _ => false,
            };
            if is_popular && index.popular.len() < config.popular_limit {
                index.popular.push(pos);
            }

            index.by_code.insert(code, pos);
        }

        index
    }

    pub fn code(&self, code: &str) -> Option<usize> {
        self.by_code.get(&fold_case(code)).copied()
    }

    pub fn region(&self, region: &str) -> &[usize] {
        self.by_region.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn country(&self, country: &str) -> &[usize] {
        self.by_country
            .get(&fold_case(country))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tier(&self, tier: Tier) -> &[usize] {
        self.by_tier.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn popular(&self) -> &[usize] {
        &self.popular
    }
}
