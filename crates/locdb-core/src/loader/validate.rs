// crates/locdb-core/src/loader/validate.rs
use crate::error::{LocDbError, Result};
use crate::model::LocationRecord;
use crate::text::fold_case;
use std::collections::HashMap;

/// Check the dataset invariants on typed records.
///
/// - `code` is exactly 3 characters and unique (ignoring case, not accents)
/// - `name`, `city`, `country` are non-empty
/// - coordinates, when present, are finite and within WGS84 bounds
///
/// `tier` needs no check here: the enum cannot hold anything else.
pub fn validate_records(records: &[LocationRecord]) -> Result<()> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let code = record.code.trim();
        if code.is_empty() {
            return Err(missing(index, "?", "code"));
        }
        if code.chars().count() != 3 {
            return Err(LocDbError::InvalidCode {
                index,
                code: record.code.clone(),
            });
        }
        for (field, value) in [
            ("name", &record.name),
            ("city", &record.city),
            ("country", &record.country),
        ] {
            if value.trim().is_empty() {
                return Err(missing(index, code, field));
            }
        }
        if let Some(c) = record.coordinates {
            if !c.is_valid() {
                return Err(LocDbError::InvalidCoordinates {
                    index,
                    code: code.to_string(),
                    latitude: c.latitude,
                    longitude: c.longitude,
                });
            }
        }
        if let Some(first) = seen.insert(fold_case(code), index) {
            return Err(LocDbError::DuplicateCode {
                code: code.to_string(),
                first,
                second: index,
            });
        }
    }

    Ok(())
}

fn missing(index: usize, code: &str, field: &'static str) -> LocDbError {
    LocDbError::MissingField {
        index,
        code: code.to_string(),
        field,
    }
}
