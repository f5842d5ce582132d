use clap::{Parser, Subcommand};
use locdb_core::Tier;
use std::path::PathBuf;

/// CLI arguments for locdb
#[derive(Debug, Parser)]
#[command(
    name = "locdb",
    version,
    about = "Search and inspect the locdb airport and city reference database"
)]
pub struct CliArgs {
    /// Path to a dataset (.json, or .json.gz with the `compact` feature).
    /// Defaults to the dataset embedded in the binary.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// JSON file with search tuning (weights, limits, popular allow-list)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ranked typeahead search over codes, names, cities, countries and aliases
    Search {
        /// Free text (at least two characters)
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,

        /// Print the relevance score next to each result
        #[arg(long = "scores")]
        scores: bool,
    },

    /// Lookup a location by its 3-letter code (case-insensitive)
    Code {
        /// IATA-style code (e.g. SYD, lhr)
        code: String,
    },

    /// List locations in a region (exact match, e.g. "Europe")
    Region { name: String },

    /// List locations in a country (case-insensitive)
    Country { name: String },

    /// List locations of one tier
    Tier {
        /// international_hub, regional_hub, domestic or regional
        tier: Tier,
    },

    /// Show the curated list of popular destinations
    Popular,

    /// Show a summary of the database contents
    Stats {
        /// Print the summary as JSON
        #[arg(long = "json")]
        json: bool,
    },
}
