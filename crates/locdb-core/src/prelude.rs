//! locdb prelude: bring common types and traits into scope for demos.

pub use crate::common::{DbStats, SearchHit};
pub use crate::config::{ScoreWeights, SearchConfig, DEFAULT_LIMIT};
pub use crate::error::{LocDbError, Result};
pub use crate::model::{Coordinates, LocationDb, LocationRecord, Tier};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::LocationSearch;
