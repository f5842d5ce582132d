// crates/locdb-core/src/lib.rs
//! # locdb-core
//!
//! An immutable, in-memory reference database of airports and cities with a
//! ranked typeahead search and a handful of exact lookups.
//!
//! ```rust
//! use locdb_core::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let db = LocationDb::load()?;
//!
//! let top = db.search("syd", 5);
//! assert_eq!(top[0].code(), "SYD");
//!
//! assert!(db.find_by_code("nrt").is_some());
//! assert!(db.search("s", 10).is_empty());
//! # Ok(()) }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod prelude;
#[doc(hidden)]
pub mod raw;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{DbStats, SearchHit};
pub use crate::config::{ScoreWeights, SearchConfig};
pub use crate::error::{LocDbError, LocationDbError, Result};
pub use crate::model::{Coordinates, LocationDb, LocationRecord, Tier};
pub use crate::traits::LocationSearch;
