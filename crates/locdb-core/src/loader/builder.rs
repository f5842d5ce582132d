// crates/locdb-core/src/loader/builder.rs
use super::validate::validate_records;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::LocationIndex;
use crate::model::{LocationDb, LocationRecord};
use crate::text::SearchKeys;
use tracing::debug;

impl LocationDb {
    /// Validate `records` and build every derived view with the default
    /// [`SearchConfig`].
    ///
    /// This is the injection point for tests and embedders: any `Vec` of
    /// records becomes a fully indexed database, or an error naming the first
    /// record that breaks an invariant.
    pub fn from_records(records: Vec<LocationRecord>) -> Result<Self> {
        Self::with_config(records, SearchConfig::default())
    }

    /// Like [`LocationDb::from_records`], with explicit tuning.
    pub fn with_config(records: Vec<LocationRecord>, config: SearchConfig) -> Result<Self> {
        validate_records(&records)?;

        let keys: Vec<SearchKeys> = records.iter().map(SearchKeys::from_record).collect();
        let index = LocationIndex::build(&records, &config);

        debug!(
            records = records.len(),
            regions = index.by_region.len(),
            countries = index.by_country.len(),
            popular = index.popular.len(),
            "location index built"
        );

        Ok(LocationDb {
            records,
            keys,
            index,
            config,
        })
    }

    /// Rebuild with different tuning, keeping the records.
    pub fn reconfigure(self, config: SearchConfig) -> Result<Self> {
        Self::with_config(self.records, config)
    }
}
