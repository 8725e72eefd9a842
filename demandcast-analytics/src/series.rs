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

//! Date-keyed series preparation for the line charts.

use chrono::{Datelike, NaiveDate};
use demandcast_types::ForecastRecord;
use std::collections::HashMap;

/// One point of the actual-vs-predicted daily line.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyPoint {
    pub date: String,
    pub actual: f64,
    pub predicted: f64,
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Round to two decimals, the precision the daily line is displayed at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Records restricted to one calendar month, ordered by date, with duplicate
/// dates collapsed into a single point. Actual and predicted values are
/// averaged independently per date, each mean rounded to two decimals.
/// Undated and unparseable rows are skipped.
pub fn monthly_series(records: &[ForecastRecord], month: u32) -> Vec<DailyPoint> {
    let mut dated: Vec<(NaiveDate, &ForecastRecord)> = records
        .iter()
        .filter_map(|r| parse_date(&r.date).map(|d| (d, r)))
        .filter(|(d, _)| d.month() == month)
        .collect();
    dated.sort_by_key(|(d, _)| *d);

    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, (f64, f64, u32)> = HashMap::new();
    for (_, record) in &dated {
        let entry = sums.entry(record.date.clone()).or_insert_with(|| {
            order.push(record.date.clone());
            (0.0, 0.0, 0)
        });
        entry.0 += record.actual;
        entry.1 += record.predicted;
        entry.2 += 1;
    }

    order
        .into_iter()
        .map(|date| {
            let (actual_sum, predicted_sum, count) = sums[&date];
            let n = f64::from(count.max(1));
            DailyPoint {
                date,
                actual: round2(actual_sum / n),
                predicted: round2(predicted_sum / n),
            }
        })
        .collect()
}

/// Distinct product codes in first-appearance order.
pub fn distinct_products(records: &[ForecastRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for r in records {
        if seen.insert(r.product.as_str()) {
            out.push(r.product.clone());
        }
    }
    out
}

/// The last `n` predicted values for one product, in record order.
pub fn last_predictions(records: &[ForecastRecord], product: &str, n: usize) -> Vec<f64> {
    let values: Vec<f64> = records
        .iter()
        .filter(|r| r.product == product)
        .map(|r| r.pred_value)
        .collect();
    let start = values.len().saturating_sub(n);
    values[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(product: &str, date: &str, actual: f64, predicted: f64) -> ForecastRecord {
        ForecastRecord {
            product: product.into(),
            date: date.into(),
            actual,
            predicted,
            ..Default::default()
        }
    }

    #[test]
    fn duplicate_dates_average_independently() {
        let records = vec![
            row("Product_8a", "2022-05-02", 10.0, 9.0),
            row("Product_8b", "2022-05-02", 14.0, 11.0),
        ];
        let series = monthly_series(&records, 5);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, "2022-05-02");
        assert_eq!(series[0].actual, 12.0);
        assert_eq!(series[0].predicted, 10.0);
    }

    #[test]
    fn series_is_sorted_and_month_bounded() {
        let records = vec![
            row("Product_8a", "2022-05-09", 5.0, 5.0),
            row("Product_8a", "2022-04-30", 99.0, 99.0),
            row("Product_8a", "2022-05-01", 1.0, 2.0),
            row("Product_8a", "not-a-date", 7.0, 7.0),
            row("Product_8a", "", 7.0, 7.0),
        ];
        let series = monthly_series(&records, 5);
        let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2022-05-01", "2022-05-09"]);
    }

    #[test]
    fn means_are_rounded_to_two_decimals() {
        let records = vec![
            row("Product_8a", "2022-05-02", 1.0, 1.0),
            row("Product_8b", "2022-05-02", 2.0, 1.0),
            row("Product_8c", "2022-05-02", 2.0, 1.0),
        ];
        let series = monthly_series(&records, 5);
        // 5/3 rounds to 1.67
        assert_eq!(series[0].actual, 1.67);
        assert_eq!(series[0].predicted, 1.0);
    }

    #[test]
    fn distinct_products_keeps_first_appearance_order() {
        let records = vec![
            row("Product_8b", "2022-05-01", 0.0, 0.0),
            row("Product_8a", "2022-05-01", 0.0, 0.0),
            row("Product_8b", "2022-05-02", 0.0, 0.0),
        ];
        assert_eq!(distinct_products(&records), vec!["Product_8b", "Product_8a"]);
    }

    #[test]
    fn last_predictions_takes_the_tail_in_record_order() {
        let mut records = Vec::new();
        for (i, v) in [3.0, 7.0, 11.0, 15.0].iter().enumerate() {
            let mut r = row("Product_8a", &format!("2022-05-0{}", i + 1), 0.0, 0.0);
            r.pred_value = *v;
            records.push(r);
        }
        records.push(row("Product_9z", "2022-05-05", 0.0, 0.0));
        assert_eq!(
            last_predictions(&records, "Product_8a", 3),
            vec![7.0, 11.0, 15.0]
        );
        assert_eq!(last_predictions(&records, "Product_9z", 3), vec![0.0]);
        assert!(last_predictions(&records, "Product_xx", 3).is_empty());
    }
}
