//! Error handling example for locdb-rs
//!
//! This example demonstrates how dataset problems are reported and how the
//! query side treats "not found" and too-short input.

use locdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== locdb-rs Error Handling Example ===\n");

    // Example 1: Loading the embedded database
    println!("--- Example 1: Loading database with error handling ---");
    match LocationDb::load() {
        Ok(db) => {
            println!("✓ Database loaded successfully");
            println!("  Locations: {}", db.len());
        }
        Err(e) => {
            eprintln!("✗ Failed to load database: {e}");
            return Err(e);
        }
    }
    println!();

    // Example 2: Broken datasets are rejected with the offending record
    println!("--- Example 2: Invalid datasets ---");
    let broken = [
        r#"[{"code": "AAA", "name": "A", "city": "A", "country": "X"},
            {"code": "aaa", "name": "B", "city": "B", "country": "X"}]"#,
        r#"[{"code": "AAA", "city": "A", "country": "X"}]"#,
        r#"[{"code": "AAAA", "name": "A", "city": "A", "country": "X"}]"#,
        r#"[{"code": "AAA", "name": "A", "city": "A", "country": "X", "tier": "mega_hub"}]"#,
        r#"[{"code": "AAA", "name": "A", "city": "A", "country": "X",
             "coordinates": {"latitude": 95.0, "longitude": 0.0}}]"#,
        r#"[{"code": "AAA""#,
    ];
    for json in broken {
        match LocationDb::from_json_str(json) {
            Ok(db) => println!("  unexpectedly valid ({} records)", db.len()),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 3: Missing files
    println!("--- Example 3: Loading from a missing path ---");
    if let Err(e) = LocationDb::load_from_path("does/not/exist.json", SearchConfig::default()) {
        println!("  ✗ {e}");
    }
    println!();

    let db = LocationDb::load()?;

    // Example 4: Unknown codes are simply absent
    println!("--- Example 4: Searching for non-existent codes ---");
    for code in ["ZZZ", "", "A", "ABCD"] {
        match db.find_by_code(code) {
            Some(r) => println!("  Found: {} ({})", r.name(), r.code()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 5: Short queries yield nothing
    println!("--- Example 5: Too-short queries ---");
    for query in ["", " ", "s"] {
        println!("  {query:?} -> {} results", db.search(query, 10).len());
    }
    println!();

    // Example 6: Unknown tier names
    println!("--- Example 6: Parsing tiers ---");
    for name in ["regional_hub", "Domestic", "mega_hub"] {
        match name.parse::<Tier>() {
            Ok(tier) => println!("  {name} -> {tier}"),
            Err(e) => println!("  ✗ {e}"),
        }
    }

    Ok(())
}
