// crates/locdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Turns the JSON wire format into a validated [`LocationDb`]. The transport
//! helper handles files and optional gzip; parsing is shared by every entry
//! point so the embedded dataset and a user-supplied file go through the same
//! checks.

use crate::config::SearchConfig;
use crate::error::{LocDbError, Result};
use crate::model::LocationDb;
use crate::raw::LocationsRaw;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

mod builder;
pub mod convert;
pub mod validate;

/// The literal dataset shipped with the crate.
#[cfg(feature = "embedded")]
pub const EMBEDDED_DATASET: &str = include_str!("../../data/locations.json");

#[cfg(feature = "embedded")]
static LOCATION_DB: once_cell::sync::OnceCell<LocationDb> = once_cell::sync::OnceCell::new();

impl LocationDb {
    /// The process-wide database built from the embedded dataset.
    ///
    /// Parsed and indexed on first use; every later call returns the same
    /// instance. An invalid embedded dataset is reported on every call and no
    /// instance is ever cached.
    #[cfg(feature = "embedded")]
    pub fn load() -> Result<&'static LocationDb> {
        LOCATION_DB.get_or_try_init(|| {
            let db = Self::from_json_str(EMBEDDED_DATASET)?;
            info!(records = db.len(), "embedded location dataset loaded");
            Ok(db)
        })
    }

    /// Parse a JSON array of location objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_str_with_config(json, SearchConfig::default())
    }

    pub fn from_json_str_with_config(json: &str, config: SearchConfig) -> Result<Self> {
        let raw: LocationsRaw = serde_json::from_str(json)?;
        Self::with_config(convert::from_raw(raw)?, config)
    }

    /// Parse from any reader producing the JSON wire format.
    pub fn from_reader(reader: impl Read, config: SearchConfig) -> Result<Self> {
        let raw: LocationsRaw = serde_json::from_reader(reader)?;
        Self::with_config(convert::from_raw(raw)?, config)
    }

    /// **Path Loader:** reads `.json`, or `.json.gz` when the `compact`
    /// feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>, config: SearchConfig) -> Result<Self> {
        let path = path.as_ref();
        let reader = Self::open_stream(path)?;
        let db = Self::from_reader(reader, config)?;
        info!(path = %path.display(), records = db.len(), "location dataset loaded");
        Ok(db)
    }

    // -----------------------------------------------------------------------
    // INTERNAL TRANSPORT HELPER
    // -----------------------------------------------------------------------

    /// Opens a file, buffers it, and wraps it in a Gzip decoder when the
    /// extension says so.
    fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
        let file = File::open(path).map_err(|e| {
            LocDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let gzipped = path.extension().is_some_and(|ext| ext == "gz");

        if gzipped {
            #[cfg(feature = "compact")]
            {
                use flate2::read::GzDecoder;
                return Ok(Box::new(GzDecoder::new(reader)));
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(LocDbError::NotFound(format!(
                    "{} is gzip-compressed but the 'compact' feature is disabled",
                    path.display()
                )));
            }
        }

        Ok(Box::new(reader))
    }
}
