// crates/locdb-core/src/model.rs
use crate::config::SearchConfig;
use crate::error::LocDbError;
use crate::index::LocationIndex;
use crate::text::SearchKeys;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative importance of a location, used to boost its search ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    InternationalHub,
    RegionalHub,
    Domestic,
    Regional,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::InternationalHub,
        Tier::RegionalHub,
        Tier::Domestic,
        Tier::Regional,
    ];

    /// The snake_case name used in the dataset and in [`DbStats`](crate::DbStats).
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::InternationalHub => "international_hub",
            Tier::RegionalHub => "regional_hub",
            Tier::Domestic => "domestic",
            Tier::Regional => "regional",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = LocDbError;

    /// Parses the dataset spelling. Surrounding whitespace and ASCII case are
    /// ignored; nothing else is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Tier::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LocDbError::UnknownTier(s.to_string()))
    }
}

/// WGS84 position of a location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One canonical entry per real-world location (usually an airport).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_aliases: Vec<String>,
}

impl LocationRecord {
    /// Minimal constructor for the required fields; optional ones default to
    /// absent and can be set with the `with_*` helpers.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            city: city.into(),
            country: country.into(),
            region: None,
            timezone: None,
            coordinates: None,
            tier: None,
            search_aliases: Vec::new(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(Coordinates {
            latitude,
            longitude,
        });
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    pub fn aliases(&self) -> &[String] {
        &self.search_aliases
    }
}

/// The immutable reference dataset plus everything derived from it.
///
/// Built once through [`LocationDb::from_records`] (or one of the loaders),
/// never mutated afterwards. All query methods take `&self`, so a single
/// instance can be shared across threads without locking.
#[derive(Debug)]
pub struct LocationDb {
    /// Master list, in source order.
    pub(crate) records: Vec<LocationRecord>,
    /// Folded match keys, parallel to `records`.
    pub(crate) keys: Vec<SearchKeys>,
    pub(crate) index: LocationIndex,
    pub(crate) config: SearchConfig,
}

impl LocationDb {
    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The configuration this database was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
