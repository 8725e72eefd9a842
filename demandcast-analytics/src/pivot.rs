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

//! Table grids: the fixed 11-day actual-vs-predicted pivot and the
//! recent-dates prediction table.

use crate::series::parse_date;
use chrono::{Datelike, Days, NaiveDate};
use demandcast_types::ForecastRecord;
use std::collections::{BTreeMap, HashMap, HashSet};

/// The comparison window is always May 1 through May 11, inclusive.
pub const PIVOT_WINDOW_DAYS: u64 = 11;

/// Year used when no record carries a parseable date.
pub const PIVOT_FALLBACK_YEAR: i32 = 2022;

/// The 11-day pivot: one column per window day, one row per product, each
/// cell an `(actual, predicted)` pair where that product has data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PivotGrid {
    pub dates: Vec<String>,
    pub rows: Vec<PivotRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PivotRow {
    pub product: String,
    pub cells: Vec<Option<(f64, f64)>>,
}

impl PivotGrid {
    /// True when no record fell inside the window; callers render a
    /// placeholder instead of the table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Recent predicted-order table: the three most recent dates (ascending) as
/// columns, products as rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecentGrid {
    pub dates: Vec<String>,
    pub rows: Vec<RecentRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecentRow {
    pub product: String,
    pub cells: Vec<Option<f64>>,
}

fn window_start(records: &[ForecastRecord]) -> NaiveDate {
    let year = records
        .iter()
        .filter_map(|r| parse_date(&r.date))
        .map(|d| d.year())
        .next()
        .unwrap_or(PIVOT_FALLBACK_YEAR);
    NaiveDate::from_ymd_opt(year, 5, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(PIVOT_FALLBACK_YEAR, 5, 1).expect("May 1"))
}

/// Build the 11-day pivot over `records`. The window's year comes from the
/// first record with a parseable date; rows are sorted by product code and a
/// later record for the same (product, date) overwrites an earlier one.
pub fn build_pivot(records: &[ForecastRecord]) -> PivotGrid {
    let start = window_start(records);
    let days: Vec<NaiveDate> = (0..PIVOT_WINDOW_DAYS)
        .filter_map(|i| start.checked_add_days(Days::new(i)))
        .collect();
    let end = days.last().copied().unwrap_or(start);

    let mut products: BTreeMap<&str, HashMap<NaiveDate, (f64, f64)>> = BTreeMap::new();
    for record in records {
        if let Some(date) = parse_date(&record.date) {
            if date >= start && date <= end {
                products
                    .entry(record.product.as_str())
                    .or_default()
                    .insert(date, (record.actual, record.predicted));
            }
        }
    }

    let rows = products
        .into_iter()
        .map(|(product, by_date)| PivotRow {
            product: product.to_string(),
            cells: days.iter().map(|d| by_date.get(d).copied()).collect(),
        })
        .collect();

    PivotGrid {
        dates: days.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect(),
        rows,
    }
}

/// Build the recent-dates table: columns are the `count` most recent distinct
/// dates in ascending order, rows follow the records' product order, and for
/// a duplicated (product, date) the later record wins.
pub fn build_recent(records: &[ForecastRecord], count: usize) -> RecentGrid {
    let mut seen = HashSet::new();
    let mut dated: Vec<(NaiveDate, String)> = records
        .iter()
        .filter_map(|r| parse_date(&r.date).map(|d| (d, r.date.clone())))
        .filter(|(_, raw)| seen.insert(raw.clone()))
        .collect();
    dated.sort_by_key(|(d, _)| *d);
    let skip = dated.len().saturating_sub(count);
    let dates: Vec<String> = dated.into_iter().skip(skip).map(|(_, raw)| raw).collect();

    let mut by_product: HashMap<&str, HashMap<&str, f64>> = HashMap::new();
    for record in records {
        by_product
            .entry(record.product.as_str())
            .or_default()
            .insert(record.date.as_str(), record.pred_value);
    }

    let rows = crate::series::distinct_products(records)
        .into_iter()
        .map(|product| {
            let by_date = by_product.get(product.as_str());
            let cells = dates
                .iter()
                .map(|d| by_date.and_then(|m| m.get(d.as_str()).copied()))
                .collect();
            RecentRow { product, cells }
        })
        .collect();

    RecentGrid { dates, rows }
}
