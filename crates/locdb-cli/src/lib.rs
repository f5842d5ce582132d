//! locdb-cli
//! =========
//!
//! Command-line interface for the `locdb-core` location reference database.
//!
//! This crate primarily provides a binary (`locdb`). The library target only
//! carries this overview so that the documentation has a landing page.
//!
//! Basic usage:
//!
//! ```text
//! locdb --help
//! locdb search london --limit 5 --scores
//! locdb code syd
//! locdb tier regional_hub
//! locdb --input my-airports.json.gz stats --json
//! RUST_LOG=locdb_core=trace locdb search "new york"
//! ```
//!
//! For programmatic access use the [`locdb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
