// crates/locdb-core/src/config.rs
//! Runtime tuning for search and the derived views.
//!
//! Both structs deserialize with `#[serde(default)]`, so a JSON file only has
//! to name the fields it overrides:
//!
//! ```rust
//! use locdb_core::config::SearchConfig;
//!
//! let cfg: SearchConfig =
//!     serde_json::from_str(r#"{ "default_limit": 5, "weights": { "alias_contains": 80 } }"#)
//!         .unwrap();
//! assert_eq!(cfg.default_limit, 5);
//! assert_eq!(cfg.weights.alias_contains, 80);
//! assert_eq!(cfg.weights.code_exact, 1000);
//! ```

use crate::model::Tier;
use serde::{Deserialize, Serialize};

/// Default number of results returned by `autocomplete`.
pub const DEFAULT_LIMIT: usize = 10;
/// Queries shorter than this (in folded characters) are not searched.
pub const MIN_QUERY_LEN: usize = 2;
/// Upper bound on `popular()`.
pub const POPULAR_LIMIT: usize = 50;

/// Regional hubs that are promoted into `popular()` next to every
/// international hub.
pub const POPULAR_REGIONAL_HUBS: &[&str] = &[
    "MEL", "BNE", "PER", "ADL", "CHC", "MAN", "EDI", "DUB", "BCN", "MXP", "VCE", "NCE", "LIS",
    "ATH", "CPH", "ARN", "OSL", "HEL", "VIE", "PRG", "KIX", "CTS", "FUK", "PUS", "BKI", "DPS",
    "HKT", "CNX", "SGN", "HAN", "CEB", "BLR", "MAA", "CMB", "MLE", "YVR", "YUL", "BOS", "LAS",
    "MCO", "HNL", "DEN", "CUN", "SCL", "EZE", "LIM", "BOG", "CPT", "NBO", "CAI", "AMM", "MCT",
];

/// Relevance weights in points, plus tier multipliers in tenths.
///
/// Scores come out in tenths of a point: `base × multiplier`, where base is
/// the sum of the matched signal weights. Keeping the multiplier integral
/// (12 instead of 1.2) makes the ordering identical on every platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub code_exact: u32,
    pub code_prefix: u32,
    pub name_token_exact: u32,
    pub name_token_prefix: u32,
    pub name_token_contains: u32,
    pub city_exact: u32,
    pub city_contains: u32,
    pub country_exact: u32,
    pub country_contains: u32,
    pub alias_contains: u32,
    pub international_hub_boost: u32,
    pub regional_hub_boost: u32,
    pub base_boost: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            code_exact: 1000,
            code_prefix: 500,
            name_token_exact: 100,
            name_token_prefix: 50,
            name_token_contains: 25,
            city_exact: 200,
            city_contains: 75,
            country_exact: 150,
            country_contains: 50,
            alias_contains: 40,
            international_hub_boost: 12,
            regional_hub_boost: 11,
            base_boost: 10,
        }
    }
}

impl ScoreWeights {
    /// Multiplier (in tenths) applied once to the accumulated score.
    #[inline]
    pub fn tier_multiplier(&self, tier: Option<Tier>) -> u32 {
        match tier {
            Some(Tier::InternationalHub) => self.international_hub_boost,
            Some(Tier::RegionalHub) => self.regional_hub_boost,
            _ => self.base_boost,
        }
    }
}

/// Everything a [`LocationDb`](crate::LocationDb) needs besides its records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub weights: ScoreWeights,
    pub default_limit: usize,
    pub min_query_len: usize,
    pub popular_limit: usize,
    pub popular_regional_hubs: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            default_limit: DEFAULT_LIMIT,
            min_query_len: MIN_QUERY_LEN,
            popular_limit: POPULAR_LIMIT,
            popular_regional_hubs: POPULAR_REGIONAL_HUBS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
