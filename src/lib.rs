//! locdb-rs
//!
//! Workspace umbrella crate. Re-exports [`locdb_core`] so the demos under
//! `demos/` can `use locdb_rs::prelude::*`.
pub use locdb_core::*;
