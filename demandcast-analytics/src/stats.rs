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

//! Metric aggregation for the header badges and the sidebar model info.

use demandcast_types::MetricKey;

/// Arithmetic mean, `None` for an empty input. Callers keep their previous
/// display values when this returns `None`.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0u32;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}

/// Badge formatting: two decimals with a percent suffix, `6.0` -> `"6.00%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// A computed metric, still bound to its key so display components never
/// match on label text.
#[derive(Clone, Debug, PartialEq)]
pub struct StatValue {
    pub key: MetricKey,
    pub value: f64,
}

impl StatValue {
    pub fn formatted(&self) -> String {
        format_percent(self.value)
    }
}

/// Mean of every tracked key over `rows`, using `metric` to read a key off a
/// row. Returns `None` for an empty row set; keys a row type does not carry
/// are omitted from the result.
pub fn summarize<R, F>(rows: &[R], keys: &[MetricKey], metric: F) -> Option<Vec<StatValue>>
where
    F: Fn(&R, MetricKey) -> Option<f64>,
{
    if rows.is_empty() {
        return None;
    }
    Some(
        keys.iter()
            .filter_map(|&key| {
                mean(rows.iter().filter_map(|row| metric(row, key)))
                    .map(|value| StatValue { key, value })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use demandcast_types::{ForecastRecord, MetricsRecord};

    fn ensemble_row(mae: f64, smape: f64, accuracy: f64) -> ForecastRecord {
        ForecastRecord {
            product: "Product_8a1".into(),
            mae,
            smape,
            accuracy,
            ..Default::default()
        }
    }

    #[test]
    fn mean_of_4_6_8_formats_as_six_percent() {
        let m = mean([4.0, 6.0, 8.0]).unwrap();
        assert_eq!(m, 6.0);
        assert_eq!(format_percent(m), "6.00%");
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(std::iter::empty()), None);
    }

    #[test]
    fn formatting_always_shows_two_decimals() {
        assert_eq!(format_percent(87.5), "87.50%");
        assert_eq!(format_percent(12.345), "12.35%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn summarize_tracks_each_key_independently() {
        let rows = vec![
            ensemble_row(4.0, 10.0, 80.0),
            ensemble_row(6.0, 20.0, 90.0),
            ensemble_row(8.0, 30.0, 100.0),
        ];
        let stats = summarize(
            &rows,
            &[MetricKey::Mae, MetricKey::Smape, MetricKey::Accuracy],
            ForecastRecord::metric,
        )
        .unwrap();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].key, MetricKey::Mae);
        assert_eq!(stats[0].formatted(), "6.00%");
        assert_eq!(stats[1].formatted(), "20.00%");
        assert_eq!(stats[2].formatted(), "90.00%");
    }

    #[test]
    fn summarize_of_empty_rows_is_none() {
        let rows: Vec<ForecastRecord> = vec![];
        assert!(summarize(&rows, &[MetricKey::Mae], ForecastRecord::metric).is_none());
    }

    #[test]
    fn summarize_omits_keys_the_rows_do_not_carry() {
        let rows = vec![MetricsRecord {
            product: "Product_9x".into(),
            mae: 3.0,
            rmse: 5.0,
        }];
        let stats = summarize(
            &rows,
            &[MetricKey::Mae, MetricKey::Accuracy, MetricKey::Rmse],
            MetricsRecord::metric,
        )
        .unwrap();
        let keys: Vec<_> = stats.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec![MetricKey::Mae, MetricKey::Rmse]);
    }
}
