//! Asynchronous loading of the country dataset.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::domain::Country;
use crate::normalize::normalize_country;

/// Where the countries JSON document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(Url),
    File(PathBuf),
}

impl DataSource {
    /// Interpret a CLI string: http(s) URLs fetch over the network, anything
    /// else is a filesystem path.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            if let Ok(url) = Url::parse(input) {
                return Self::Url(url);
            }
        }
        Self::File(PathBuf::from(input))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => url.fmt(f),
            Self::File(path) => path.display().fmt(f),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("country data request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("country data endpoint returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
    #[error("could not read country data file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("country data is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("country data payload is not a list")]
    NotAList,
}

/// Fetch and normalize the full collection in a single round trip.
///
/// Fails as a whole on transport errors, non-success statuses, undecodable
/// payloads, and payloads that are not a list. A malformed individual record
/// does not fail the load; it comes back as an error-sentinel row.
pub async fn load_countries(
    http: &reqwest::Client,
    source: &DataSource,
) -> Result<Vec<Country>, LoadError> {
    let payload: Value = match source {
        DataSource::Url(url) => {
            let response = http.get(url.clone()).send().await?;
            if !response.status().is_success() {
                return Err(LoadError::Status {
                    status: response.status(),
                });
            }
            let body = response.text().await?;
            serde_json::from_str(&body)?
        }
        DataSource::File(path) => {
            let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_slice(&bytes)?
        }
    };

    let countries = countries_from_payload(payload)?;
    tracing::info!(count = countries.len(), %source, "loaded country data");
    Ok(countries)
}

/// Decode step shared by both source kinds: the payload must be a list, and
/// every element maps through the normalizer, never skipped or dropped.
pub fn countries_from_payload(payload: Value) -> Result<Vec<Country>, LoadError> {
    let Value::Array(records) = payload else {
        return Err(LoadError::NotAList);
    };
    Ok(records.iter().map(normalize_country).collect())
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
