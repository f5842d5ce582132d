//! Basic usage example for locdb-rs
//!
//! This example demonstrates how to:
//! - Load the embedded location database
//! - Run typeahead searches and inspect scores
//! - Look up codes and filter by region, country and tier
//! - Read the popular list and the aggregate statistics

use locdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== locdb-rs Basic Usage Example ===\n");

    println!("Loading location database...");
    let db = LocationDb::load()?;
    println!("✓ Database loaded: {} locations\n", db.len());

    // Example 1: Typeahead search
    println!("--- Example 1: Search as you type ---");
    for query in ["l", "lo", "lon", "london"] {
        let codes: Vec<&str> = db.search(query, 5).iter().map(|r| r.code()).collect();
        println!("{query:>8} -> {codes:?}");
    }
    println!();

    // Example 2: Scores
    println!("--- Example 2: Search with scores ---");
    for hit in db.search_hits("tokyo", 5) {
        println!(
            "{:>8.1}  {} {} ({})",
            hit.points(),
            hit.record.code(),
            hit.record.name(),
            hit.record.tier().map_or("-", |t| t.as_str())
        );
    }
    println!();

    // Example 3: Accents and aliases
    println!("--- Example 3: Accent-insensitive and alias matching ---");
    for query in ["zürich", "sao paulo", "heathrow"] {
        if let Some(first) = db.search(query, 1).first() {
            println!("{query:>10} -> {} {}", first.code(), first.name());
        }
    }
    println!();

    // Example 4: Lookup by code
    println!("--- Example 4: Find by code ---");
    if let Some(r) = db.find_by_code("nrt") {
        println!("Found: {} ({})", r.name(), r.code());
        println!("City: {}, {}", r.city(), r.country());
        println!("Timezone: {}", r.timezone().unwrap_or("-"));
        if let Some(c) = r.coordinates {
            println!("Coordinates: {:.4}, {:.4}", c.latitude, c.longitude);
        }
    }
    println!();

    // Example 5: Filters
    println!("--- Example 5: Filters ---");
    println!("Europe: {}", db.filter_by_region("Europe").len());
    println!("Japan: {}", db.filter_by_country("japan").len());
    for tier in Tier::ALL {
        println!("{tier}: {}", db.filter_by_tier(tier).len());
    }
    println!();

    // Example 6: Popular destinations
    println!("--- Example 6: Popular destinations ---");
    let popular = db.popular();
    for (i, r) in popular.iter().take(5).enumerate() {
        println!("{}. {} {}", i + 1, r.code(), r.city());
    }
    println!("... and {} more\n", popular.len().saturating_sub(5));

    // Example 7: Statistics
    println!("--- Example 7: Database statistics ---");
    let stats = db.stats();
    println!("Total locations: {}", stats.total);
    for (region, count) in &stats.by_region {
        println!("  {region}: {count}");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
