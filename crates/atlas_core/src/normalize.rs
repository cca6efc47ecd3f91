//! Defensive normalization of raw country records.
//!
//! The external schema is not owned by this system, so every field is
//! extracted independently and defaults safely when missing or mistyped.

use serde_json::{Map, Value};

use crate::domain::{Coordinates, Country, NOT_AVAILABLE};

/// Normalize one raw record into a [`Country`].
///
/// Total over arbitrary JSON: a value that is not even an object has no
/// fields to extract and becomes the error-sentinel placeholder instead of
/// failing, so the caller always gets exactly one `Country` per input.
pub fn normalize_country(raw: &Value) -> Country {
    let Some(record) = raw.as_object() else {
        tracing::warn!("malformed country record (not an object); emitting error placeholder");
        return Country::error_sentinel();
    };

    Country {
        name: nested_text(record, "name", "common"),
        code: text(record, "cca2"),
        capital: joined_list(record, "capital"),
        region: text(record, "region"),
        population: record
            .get("population")
            .and_then(Value::as_u64)
            .unwrap_or(0),
        coordinates: coordinate_pair(record.get("latlng")),
        flag_emoji: record
            .get("flag")
            .and_then(Value::as_str)
            .map(str::to_owned),
        languages: joined_map_values(record.get("languages")),
        currencies: currency_names(record.get("currencies")),
    }
}

fn text(record: &Map<String, Value>, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn nested_text(record: &Map<String, Value>, field: &str, sub: &str) -> String {
    record
        .get(field)
        .and_then(|value| value.get(sub))
        .and_then(Value::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Join the string entries of a list field, `"N/A"` when nothing usable.
fn joined_list(record: &Map<String, Value>, field: &str) -> String {
    let entries: Vec<&str> = record
        .get(field)
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    if entries.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        entries.join(", ")
    }
}

/// Extract (lat, lng) only as a pair: a list whose first two entries are
/// numeric. Partial extraction is disallowed, both or neither.
fn coordinate_pair(value: Option<&Value>) -> Option<Coordinates> {
    let list = value?.as_array()?;
    if list.len() < 2 {
        return None;
    }
    let lat = list[0].as_f64()?;
    let lng = list[1].as_f64()?;
    Some(Coordinates { lat, lng })
}

fn joined_map_values(value: Option<&Value>) -> String {
    let values: Vec<&str> = value
        .and_then(Value::as_object)
        .map(|map| map.values().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

/// Per entry, prefer the display name and fall back to the currency code key.
fn currency_names(value: Option<&Value>) -> String {
    let names: Vec<String> = value
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(code, entry)| {
                    entry
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or(code)
                        .to_string()
                })
                .collect()
        })
        .unwrap_or_default();
    if names.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
