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

use crate::numeric::lenient_f64;
use serde::{Deserialize, Serialize};

/// One forecast row for a single (product, date) pair.
///
/// The ensemble endpoint dates its rows with `Date`, the random-forest
/// endpoint with `date_dt`; both land in [`ForecastRecord::date`]. Fields a
/// given endpoint does not emit default to empty / `0.0`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    #[serde(rename = "Product_Number", default)]
    pub product: String,
    #[serde(rename = "Date", alias = "date_dt", default)]
    pub date: String,
    #[serde(rename = "Pred_Value", default, deserialize_with = "lenient_f64")]
    pub pred_value: f64,
    #[serde(rename = "MAE", default, deserialize_with = "lenient_f64")]
    pub mae: f64,
    #[serde(rename = "SMAPE", default, deserialize_with = "lenient_f64")]
    pub smape: f64,
    #[serde(rename = "Accuracy", default, deserialize_with = "lenient_f64")]
    pub accuracy: f64,
    #[serde(rename = "demand_T", default, deserialize_with = "lenient_f64")]
    pub actual: f64,
    #[serde(rename = "predicted", default, deserialize_with = "lenient_f64")]
    pub predicted: f64,
}

/// Per-product aggregate metrics, served separately for the random-forest
/// family.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(rename = "Product_Number", default)]
    pub product: String,
    #[serde(rename = "MAE", default, deserialize_with = "lenient_f64")]
    pub mae: f64,
    #[serde(rename = "RMSE", default, deserialize_with = "lenient_f64")]
    pub rmse: f64,
}

/// Identifies a tracked metric. Stat badges and chart datasets are bound to
/// keys, never to display-label text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKey {
    Mae,
    Smape,
    Accuracy,
    Rmse,
}

impl MetricKey {
    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::Mae => "MAE",
            MetricKey::Smape => "SMAPE",
            MetricKey::Accuracy => "Accuracy",
            MetricKey::Rmse => "RMSE",
        }
    }
}

impl std::fmt::Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ForecastRecord {
    /// The metric value this row carries for `key`, if the ensemble payload
    /// includes that column.
    pub fn metric(&self, key: MetricKey) -> Option<f64> {
        match key {
            MetricKey::Mae => Some(self.mae),
            MetricKey::Smape => Some(self.smape),
            MetricKey::Accuracy => Some(self.accuracy),
            MetricKey::Rmse => None,
        }
    }
}

impl MetricsRecord {
    pub fn metric(&self, key: MetricKey) -> Option<f64> {
        match key {
            MetricKey::Mae => Some(self.mae),
            MetricKey::Rmse => Some(self.rmse),
            MetricKey::Smape | MetricKey::Accuracy => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensemble_row_deserializes_with_string_numerics() {
        let row: ForecastRecord = serde_json::from_str(
            r#"{
                "Product_Number": "Product_8a1",
                "Date": "2022-05-03",
                "Pred_Value": "41",
                "MAE": 4.5,
                "SMAPE": "12.25",
                "Accuracy": "87.5"
            }"#,
        )
        .unwrap();
        assert_eq!(row.product, "Product_8a1");
        assert_eq!(row.date, "2022-05-03");
        assert_eq!(row.pred_value, 41.0);
        assert_eq!(row.mae, 4.5);
        assert_eq!(row.smape, 12.25);
        assert_eq!(row.accuracy, 87.5);
        // columns the ensemble endpoint never emits
        assert_eq!(row.actual, 0.0);
        assert_eq!(row.predicted, 0.0);
    }

    #[test]
    fn random_forest_row_uses_date_dt_alias() {
        let row: ForecastRecord = serde_json::from_str(
            r#"{
                "Product_Number": "Product_9b2",
                "date_dt": "2022-05-01",
                "demand_T": 120,
                "predicted": "118.4"
            }"#,
        )
        .unwrap();
        assert_eq!(row.date, "2022-05-01");
        assert_eq!(row.actual, 120.0);
        assert_eq!(row.predicted, 118.4);
    }

    #[test]
    fn nulls_and_missing_fields_coerce_to_zero() {
        let row: ForecastRecord =
            serde_json::from_str(r#"{"Product_Number": "Product_f00", "MAE": null}"#).unwrap();
        assert_eq!(row.mae, 0.0);
        assert_eq!(row.smape, 0.0);
        assert!(row.date.is_empty());
    }

    #[test]
    fn metrics_row_exposes_only_its_columns() {
        let row: MetricsRecord = serde_json::from_str(
            r#"{"Product_Number": "Product_8x", "MAE": "3.2", "RMSE": 5}"#,
        )
        .unwrap();
        assert_eq!(row.metric(MetricKey::Mae), Some(3.2));
        assert_eq!(row.metric(MetricKey::Rmse), Some(5.0));
        assert_eq!(row.metric(MetricKey::Accuracy), None);
    }
}
