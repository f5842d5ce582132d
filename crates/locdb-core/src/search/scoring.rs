// crates/locdb-core/src/search/scoring.rs
use crate::config::ScoreWeights;
use crate::model::Tier;
use crate::text::{NormalizedQuery, SearchKeys};

/// Relevance of one record for one query, in tenths of a point.
///
/// # Scoring (additive, then boosted once)
///
/// - Code exact: **1000**, else code prefix: **500**
/// - Per (query token, name token) pair: whole token **100**, prefix **50**,
///   substring **25**
/// - City exact: **200**, else substring: **75**
/// - Country exact: **150**, else substring: **50**
/// - Each alias containing the query: **40**
///
/// The sum is multiplied by the tier boost (12 / 11 / 10 tenths). A result of
/// `0` means the record does not match. Every step saturates, so oversized
/// weights from a user config cap at `u32::MAX` instead of overflowing.
pub fn score_record(
    query: &NormalizedQuery,
    keys: &SearchKeys,
    tier: Option<Tier>,
    weights: &ScoreWeights,
) -> u32 {
    let q = query.as_str();
    let mut base: u32 = 0;

    if keys.code == q {
        base = base.saturating_add(weights.code_exact);
    } else if keys.code.starts_with(q) {
        base = base.saturating_add(weights.code_prefix);
    }

    for qt in &query.tokens {
        for nt in &keys.name_tokens {
            if nt.starts_with(qt.as_str()) {
                base = base.saturating_add(if nt.len() == qt.len() {
                    weights.name_token_exact
                } else {
                    weights.name_token_prefix
                });
            } else if nt.contains(qt.as_str()) {
                base = base.saturating_add(weights.name_token_contains);
            }
        }
    }

    if keys.city == q {
        base = base.saturating_add(weights.city_exact);
    } else if keys.city.contains(q) {
        base = base.saturating_add(weights.city_contains);
    }

    if keys.country == q {
        base = base.saturating_add(weights.country_exact);
    } else if keys.country.contains(q) {
        base = base.saturating_add(weights.country_contains);
    }

    let alias_hits = keys.aliases.iter().filter(|a| a.contains(q)).count();
    let alias_hits = u32::try_from(alias_hits).unwrap_or(u32::MAX);
    base = base.saturating_add(alias_hits.saturating_mul(weights.alias_contains));

    base.saturating_mul(weights.tier_multiplier(tier))
}
