//! locdb: command-line interface for locdb-core
//!
//! Query the airport and city reference database from a terminal: ranked
//! typeahead search, exact code lookup, region/country/tier filters, the
//! popular-destinations list and a dataset summary.
//!
//! Usage examples
//! --------------
//!
//! - Typeahead search (at most 5 results, with scores)
//!   $ locdb search london --limit 5 --scores
//!
//! - Lookup by code (case-insensitive)
//!   $ locdb code nrt
//!
//! - Filters
//!   $ locdb region Europe
//!   $ locdb country "united kingdom"
//!   $ locdb tier international_hub
//!
//! - Popular destinations and statistics
//!   $ locdb popular
//!   $ locdb stats --json
//!
//! Data source
//! -----------
//!
//! By default the dataset embedded in `locdb-core` is used. `--input <path>`
//! loads a `.json` (or `.json.gz`) file instead, and `--config <path>` reads
//! a JSON search configuration; fields it leaves out keep their defaults.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use locdb_core::prelude::*;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => SearchConfig::default(),
    };
    let db = match &args.input {
        Some(path) => LocationDb::load_from_path(path, config)
            .with_context(|| format!("loading {}", path.display()))?,
        None => embedded(config)?,
    };
    debug!(records = db.len(), "dataset ready");

    match args.command {
        Commands::Search {
            query,
            limit,
            scores,
        } => {
            let limit = limit.unwrap_or(db.config().default_limit);
            let hits = db.search_hits(&query, limit);
            if hits.is_empty() {
                eprintln!("No locations found matching: {query}");
            }
            for hit in hits {
                if scores {
                    println!("{:>8.1}  {}", hit.points(), line(hit.record));
                } else {
                    println!("{}", line(hit.record));
                }
            }
        }

        Commands::Code { code } => match db.find_by_code(&code) {
            Some(r) => {
                println!("Code: {}", r.code());
                println!("Name: {}", r.name());
                println!("City: {}", r.city());
                println!("Country: {}", r.country());
                println!("Region: {}", r.region().unwrap_or("-"));
                println!("Timezone: {}", r.timezone().unwrap_or("-"));
                match r.coordinates {
                    Some(c) => println!("Coordinates: {:.4}, {:.4}", c.latitude, c.longitude),
                    None => println!("Coordinates: -"),
                }
                println!("Tier: {}", r.tier().map_or("-", |t| t.as_str()));
                if !r.aliases().is_empty() {
                    println!("Aliases: {}", r.aliases().join(", "));
                }
            }
            None => eprintln!("No location found for code: {code}"),
        },

        Commands::Region { name } => print_list(&db.filter_by_region(&name), "region", &name),

        Commands::Country { name } => print_list(&db.filter_by_country(&name), "country", &name),

        Commands::Tier { tier } => print_list(&db.filter_by_tier(tier), "tier", tier.as_str()),

        Commands::Popular => print_list(&db.popular(), "popular", "destinations"),

        Commands::Stats { json } => {
            let stats = db.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Database statistics:");
                println!("  Locations: {}", stats.total);
                println!("  Regions: {}", stats.by_region.len());
                println!("  Countries: {}", stats.by_country.len());
                println!("  By tier:");
                for (tier, count) in &stats.by_tier {
                    println!("    {tier}: {count}");
                }
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: &Path) -> anyhow::Result<SearchConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(feature = "embedded")]
fn embedded(config: SearchConfig) -> anyhow::Result<LocationDb> {
    use locdb_core::loader::EMBEDDED_DATASET;
    Ok(LocationDb::from_json_str_with_config(EMBEDDED_DATASET, config)?)
}

#[cfg(not(feature = "embedded"))]
fn embedded(_config: SearchConfig) -> anyhow::Result<LocationDb> {
    anyhow::bail!("built without the embedded dataset; pass --input <path>")
}

fn line(r: &LocationRecord) -> String {
    let tier = r.tier().map(|t| format!(" [{t}]")).unwrap_or_default();
    format!("{}  {}, {}, {}{}", r.code(), r.name(), r.city(), r.country(), tier)
}

fn print_list(records: &[&LocationRecord], what: &str, key: &str) {
    if records.is_empty() {
        eprintln!("No locations found for {what}: {key}");
        return;
    }
    for r in records {
        println!("{}", line(r));
    }
}
