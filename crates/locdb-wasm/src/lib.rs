//! locdb-wasm: WebAssembly bindings for locdb-core
//!
//! This crate exposes the location database to JavaScript for a typeahead
//! widget. The dataset is embedded in the WASM binary and indexed once when
//! the module starts.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Basic queries: `get_location_count()`, `get_location_name(code)`
//! - Search and lookups returning JSON-serializable objects:
//!   - `search("lon", 10)` / `search_with_scores("lon", 10)`
//!   - `find_by_code("syd")`
//!   - `filter_by_region("Europe")`, `filter_by_country("japan")`,
//!     `filter_by_tier("regional_hub")`
//!   - `popular()`, `get_stats()`, `get_regions()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search, popular } from 'locdb-wasm';
//!
//! async function main() {
//!   await init(); // builds the index
//!   input.addEventListener('input', (e) => {
//!     const results = search(e.target.value, 8);
//!     render(results.length ? results : popular());
//!   });
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Records are plain objects with the dataset's camelCase field names
//!   (`code`, `name`, `city`, `country`, `region`, `tier`, `searchAliases`...).
//!   Absent optional fields are omitted.
//! - Maps (in `get_stats()`) are returned as plain objects, not `Map`s.
//! - Queries shorter than two characters return an empty array.
use locdb_core::{LocationDb, LocationSearch, Tier};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;

fn db() -> &'static LocationDb {
    LocationDb::load().expect("embedded location dataset is invalid")
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or(JsValue::NULL)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing locdb WASM module...".into());

    let db = db();
    web_sys::console::log_1(&format!("✓ Loaded {} locations", db.len()).into());
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_location_count() -> usize {
    db().len()
}

#[wasm_bindgen]
pub fn get_location_name(code: &str) -> Option<String> {
    db().find_by_code(code).map(|r| r.name().to_string())
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search(query: &str, limit: usize) -> JsValue {
    to_js(&db().search(query, limit))
}

/// Same order as `search`, each item `{ score, record }` with the score in
/// points.
#[wasm_bindgen]
pub fn search_with_scores(query: &str, limit: usize) -> JsValue {
    let array = js_sys::Array::new();
    for hit in db().search_hits(query, limit) {
        array.push(&to_js(&json!({
            "score": hit.points(),
            "record": hit.record,
        })));
    }
    array.into()
}

/* --------------------------------------------------------------------------
   Lookups and Filters
-------------------------------------------------------------------------- */

/// The matching record, or `undefined`.
#[wasm_bindgen]
pub fn find_by_code(code: &str) -> JsValue {
    match db().find_by_code(code) {
        Some(r) => to_js(r),
        None => JsValue::UNDEFINED,
    }
}

#[wasm_bindgen]
pub fn filter_by_region(region: &str) -> JsValue {
    to_js(&db().filter_by_region(region))
}

#[wasm_bindgen]
pub fn filter_by_country(country: &str) -> JsValue {
    to_js(&db().filter_by_country(country))
}

/// Throws on an unknown tier name.
#[wasm_bindgen]
pub fn filter_by_tier(tier: &str) -> Result<JsValue, JsError> {
    let tier: Tier = tier.parse()?;
    Ok(to_js(&db().filter_by_tier(tier)))
}

#[wasm_bindgen]
pub fn popular() -> JsValue {
    to_js(&db().popular())
}

/* --------------------------------------------------------------------------
   Statistics
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    to_js(&db().stats())
}

/// Region names present in the dataset, sorted.
#[wasm_bindgen]
pub fn get_regions() -> js_sys::Array {
    db().stats()
        .by_region
        .into_keys()
        .map(JsValue::from)
        .collect()
}
