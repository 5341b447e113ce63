use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Economic metric series offered by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    /// Series code, e.g. "NGDP_RPCH"
    pub code: String,
    /// Human-readable label, e.g. "Real GDP growth (Annual percent change)"
    pub label: String,
}

impl Indicator {
    /// Build the catalog from the `/list-indicators` mapping.
    /// Entries without a label are not selectable and are dropped.
    pub fn catalog_from_map(map: BTreeMap<String, String>) -> Vec<Indicator> {
        map.into_iter()
            .filter(|(_, label)| !label.trim().is_empty())
            .map(|(code, label)| Indicator { code, label })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Indicator list unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to parse indicator list: {0}")]
    Malformed(String),
}

impl Indicator {
    /// Decode the `/list-indicators` body. An `{"error": ...}` marker is a
    /// failure, never a one-entry catalog.
    pub fn catalog_from_value(value: serde_json::Value) -> Result<Vec<Indicator>, CatalogError> {
        if let Some(message) = error_marker(&value) {
            return Err(CatalogError::Unavailable(message));
        }
        let map: BTreeMap<String, String> =
            serde_json::from_value(value).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Ok(Self::catalog_from_map(map))
    }
}

/// Country offered for the current indicator and year range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

/// Response of `/available-countries`
///
/// The service answers either with a `code -> name` mapping or with an
/// `{"error": ...}` marker when no country has data for the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvailableCountriesResponse {
    NoData { error: String },
    Countries(BTreeMap<String, String>),
}

impl AvailableCountriesResponse {
    pub fn into_countries(self) -> Option<Vec<Country>> {
        match self {
            AvailableCountriesResponse::NoData { .. } => None,
            AvailableCountriesResponse::Countries(map) => Some(
                map.into_iter()
                    .map(|(code, name)| Country { code, name })
                    .collect(),
            ),
        }
    }
}

/// One observation of the `/get-data` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Value")]
    pub value: Option<f64>,
}

/// Decoded `/get-data` response
#[derive(Debug, Clone, PartialEq)]
pub enum DataPayload {
    /// The service answered with its `{"error": ...}` marker
    NoData { message: String },
    /// Any other JSON document. `records` is filled when the document is the
    /// usual list of `{Year, Country, Value}` rows.
    Data {
        raw: serde_json::Value,
        records: Option<Vec<DataRecord>>,
    },
}

impl DataPayload {
    pub fn from_value(value: serde_json::Value) -> Self {
        if let Some(message) = error_marker(&value) {
            return DataPayload::NoData { message };
        }
        let records = serde_json::from_value::<Vec<DataRecord>>(value.clone()).ok();
        DataPayload::Data {
            raw: value,
            records,
        }
    }

    /// Pretty-printed JSON for the raw payload panel
    pub fn pretty(&self) -> Option<String> {
        match self {
            DataPayload::NoData { .. } => None,
            DataPayload::Data { raw, .. } => serde_json::to_string_pretty(raw).ok(),
        }
    }
}

/// Returns the message of an `{"error": ...}` marker, if `value` is one
pub fn error_marker(value: &serde_json::Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    Some(match error {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
