use serde::{Deserialize, Serialize};

/// Sentinel standing in for a missing textual field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Geographic center of a country. Only ever constructed as a full pair, so a
/// record either has both latitude and longitude or neither.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One country after normalization. Every field is always present: missing
/// source data is represented by `"N/A"`, `None`, or `0` depending on the
/// field, never by absence, so downstream filtering/sorting/rendering is
/// total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
    pub capital: String,
    pub region: String,
    pub population: u64,
    pub coordinates: Option<Coordinates>,
    pub flag_emoji: Option<String>,
    pub languages: String,
    pub currencies: String,
}

impl Country {
    /// Placeholder emitted when a raw record is too malformed to extract any
    /// field from. Keeps input/output cardinality 1:1 while flagging the row.
    pub fn error_sentinel() -> Self {
        Self {
            name: "Error".to_string(),
            ..Self::unavailable()
        }
    }

    fn unavailable() -> Self {
        Self {
            name: NOT_AVAILABLE.to_string(),
            code: NOT_AVAILABLE.to_string(),
            capital: NOT_AVAILABLE.to_string(),
            region: NOT_AVAILABLE.to_string(),
            population: 0,
            coordinates: None,
            flag_emoji: None,
            languages: NOT_AVAILABLE.to_string(),
            currencies: NOT_AVAILABLE.to_string(),
        }
    }
}
