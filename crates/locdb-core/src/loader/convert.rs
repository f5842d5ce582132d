// crates/locdb-core/src/loader/convert.rs
use crate::error::{LocDbError, Result};
use crate::model::{Coordinates, LocationRecord, Tier};
use crate::raw::LocationRaw;

/// **Standard Converter:** Raw -> typed records.
///
/// Stops at the first entry that cannot be represented (missing required
/// field, unknown tier). The remaining invariants are checked afterwards by
/// [`validate_records`](super::validate::validate_records) on the typed form.
pub fn from_raw(raw_locations: Vec<LocationRaw>) -> Result<Vec<LocationRecord>> {
    raw_locations
        .into_iter()
        .enumerate()
        .map(|(index, raw)| convert_one(index, raw))
        .collect()
}

fn convert_one(index: usize, raw: LocationRaw) -> Result<LocationRecord> {
    let code = required(index, "?", "code", raw.code)?;
    let name = required(index, &code, "name", raw.name)?;
    let city = required(index, &code, "city", raw.city)?;
    let country = required(index, &code, "country", raw.country)?;

    let tier = match raw.tier.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(value.parse::<Tier>().map_err(|_| LocDbError::InvalidTier {
            index,
            code: code.clone(),
            value: value.to_string(),
        })?),
    };

    Ok(LocationRecord {
        code,
        name,
        city,
        country,
        region: non_empty(raw.region),
        timezone: non_empty(raw.timezone),
        coordinates: raw.coordinates.map(|c| Coordinates {
            latitude: c.latitude,
            longitude: c.longitude,
        }),
        tier,
        search_aliases: raw
            .search_aliases
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect(),
    })
}

fn required(
    index: usize,
    code: &str,
    field: &'static str,
    value: Option<String>,
) -> Result<String> {
    non_empty(value).ok_or_else(|| LocDbError::MissingField {
        index,
        code: code.to_string(),
        field,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
