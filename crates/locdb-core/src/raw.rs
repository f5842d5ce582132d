// crates/locdb-core/src/raw.rs
use serde::Deserialize;

/// Raw location entry as it comes from the JSON source.
///
/// Everything is optional and `tier` is a plain string, so that a broken
/// entry reaches the validator (which names the record) instead of failing
/// inside serde with a byte offset.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRaw {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub coordinates: Option<CoordinatesRaw>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub search_aliases: Vec<String>,
}

/// Raw coordinate pair:
/// { "latitude": -33.9461, "longitude": 151.1772 }
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordinatesRaw {
    pub latitude: f64,
    pub longitude: f64,
}

pub type LocationsRaw = Vec<LocationRaw>;
