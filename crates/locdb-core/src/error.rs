// crates/locdb-core/src/error.rs
use thiserror::Error;

/// Errors raised while building a [`LocationDb`](crate::LocationDb).
///
/// Query-time operations never fail; "not found" is `None` and "no match" is
/// an empty `Vec`. Everything here is either an I/O problem in the loader or a
/// dataset invariant violation, and names the offending record where one
/// exists (`index` is the zero-based position in the source).
#[derive(Debug, Error)]
pub enum LocDbError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate location code '{code}' (records #{first} and #{second})")]
    DuplicateCode {
        code: String,
        first: usize,
        second: usize,
    },

    /// `code` is `"?"` when the code itself is the missing field.
    #[error("Record #{index} ({code}): missing required field '{field}'")]
    MissingField {
        index: usize,
        code: String,
        field: &'static str,
    },

    #[error("Record #{index}: invalid code '{code}', expected exactly 3 characters")]
    InvalidCode { index: usize, code: String },

    #[error("Record #{index} ({code}): invalid tier '{value}'")]
    InvalidTier {
        index: usize,
        code: String,
        value: String,
    },

    #[error(
        "Record #{index} ({code}): coordinates out of range (lat {latitude}, lng {longitude})"
    )]
    InvalidCoordinates {
        index: usize,
        code: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("Unknown tier '{0}' (expected international_hub, regional_hub, domestic or regional)")]
    UnknownTier(String),
}

/// Kept for callers that prefer the longer name.
pub type LocationDbError = LocDbError;

pub type Result<T> = std::result::Result<T, LocDbError>;
