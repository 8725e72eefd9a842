/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! HTTP client for the forecast API.
//!
//! Every endpoint answers with either a JSON array of flat records or an
//! `{"error": "..."}` envelope. The envelope is how the backend reports a
//! missing CSV, so it is surfaced as [`FetchError::Api`] rather than a decode
//! failure.

use crate::constants::api_base_url;
use demandcast_types::{ForecastRecord, MetricsRecord};
use reqwasm::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// `window.__APP_CONFIG` missing or malformed.
    Config(String),
    /// The request never produced a response.
    Network(String),
    /// The backend answered with an error envelope.
    Api(String),
    /// The response body was not the expected record array.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(e) => write!(f, "configuration error: {e}"),
            FetchError::Network(e) => write!(f, "network error: {e}"),
            FetchError::Api(e) => write!(f, "api error: {e}"),
            FetchError::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

pub async fn fetch_forecasts(path: &str) -> Result<Vec<ForecastRecord>, FetchError> {
    fetch_rows(path).await
}

pub async fn fetch_metrics(path: &str) -> Result<Vec<MetricsRecord>, FetchError> {
    fetch_rows(path).await
}

async fn fetch_rows<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, FetchError> {
    let base = api_base_url().map_err(FetchError::Config)?;
    let url = format!("{base}{path}");
    log::info!("Fetching {url}");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let payload: Value = response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;
    decode_rows(payload)
}

/// Interprets a raw response body. Split from the transport so it can be
/// exercised without a browser.
pub fn decode_rows<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, FetchError> {
    if let Some(error) = payload.get("error") {
        let is_error = match error {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            _ => true,
        };
        if is_error {
            let message = error
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            return Err(FetchError::Api(message));
        }
    }
    serde_json::from_value(payload).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use demandcast_types::MetricsRecord;
    use serde_json::json;

    #[test]
    fn array_payload_decodes_into_records() {
        let payload = json!([
            {"Product_Number": "Product_812345", "MAE": 4.2, "RMSE": 6.1},
            {"Product_Number": "Product_954321", "MAE": "3.5", "RMSE": null},
        ]);
        let rows: Vec<MetricsRecord> = decode_rows(payload).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product, "Product_812345");
        assert_eq!(rows[1].mae, 3.5);
        assert_eq!(rows[1].rmse, 0.0);
    }

    #[test]
    fn error_envelope_is_an_api_error() {
        let payload = json!({"error": "randomforest_results.csv not found"});
        let err = decode_rows::<MetricsRecord>(payload).unwrap_err();
        assert_eq!(
            err,
            FetchError::Api("randomforest_results.csv not found".to_string())
        );
    }

    #[test]
    fn empty_error_string_falls_through_to_decode() {
        // A falsy error value is not treated as an envelope.
        let payload = json!({"error": ""});
        let err = decode_rows::<MetricsRecord>(payload).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn non_array_payload_is_a_decode_error() {
        let payload = json!({"rows": []});
        let err = decode_rows::<MetricsRecord>(payload).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
