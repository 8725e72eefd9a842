//! Chart models and their canvas renderer.
//!
//! A [`ChartModel`] is a plain description of one chart: plot kind, labels,
//! datasets, axis and label formatting. Builders assemble models from filtered
//! records without touching the DOM, so the interesting logic runs under
//! native tests. [`registry`] owns the drawn instances.

mod draw;
pub mod registry;

pub use registry::{ChartInstance, ChartRegistry};

use crate::constants::SERIES_PALETTE;
use crate::family::{ChartKind, ChartSlot};
use demandcast_analytics::scale::{self, AxisTiers};
use demandcast_analytics::series;
use demandcast_types::{ForecastRecord, MetricsRecord};

const ACCURACY_COLOR: &str = "#4e79a7";
const ACCURACY_FILL: &str = "rgba(78, 121, 167, 0.2)";
const ERROR_BAR_COLOR: &str = "#3b82f6";
const ACTUAL_COLOR: &str = "#10b981";
const PREDICTED_COLOR: &str = "#3b82f6";

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub color: &'static str,
    /// Area fill under a line dataset.
    pub fill: Option<&'static str>,
    pub values: Vec<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlotKind {
    Bar,
    Line { width: f64 },
}

/// How per-point value labels are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueLabels {
    Hidden,
    /// Thousands-grouped, up to three decimals.
    Grouped,
    /// Two decimals, zero values left unlabelled.
    NonZeroFixed2,
    /// One decimal with a percent suffix.
    Percent1,
}

impl ValueLabels {
    pub fn format(&self, value: f64) -> Option<String> {
        match self {
            ValueLabels::Hidden => None,
            ValueLabels::Grouped => Some(group_thousands(value)),
            ValueLabels::NonZeroFixed2 => (value != 0.0).then(|| format!("{value:.2}")),
            ValueLabels::Percent1 => Some(format!("{value:.1}%")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartModel {
    pub title: &'static str,
    pub plot: PlotKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_step: f64,
    pub y_max: f64,
    pub show_legend: bool,
    pub value_labels: ValueLabels,
}

impl ChartModel {
    /// Grouped bars of each product's last three predicted volumes. The axis
    /// is scaled from every prediction in the filtered set, not just the
    /// plotted tail.
    pub fn prediction_bars(
        results: &[ForecastRecord],
        products: &[String],
        tiers: AxisTiers,
    ) -> Self {
        let max = scale::plot_max(results.iter().map(|r| r.pred_value));
        let (y_step, y_max) = tiers.axis_for(max);
        let datasets = products
            .iter()
            .enumerate()
            .map(|(i, product)| Dataset {
                label: product.clone(),
                color: SERIES_PALETTE[i % SERIES_PALETTE.len()],
                fill: None,
                values: series::last_predictions(results, product, 3),
            })
            .collect();
        Self {
            title: "Forecast order volume (next 3 days)",
            plot: PlotKind::Bar,
            labels: vec!["T+1".to_string(), "T+2".to_string(), "T+3".to_string()],
            datasets,
            y_step,
            y_max,
            show_legend: true,
            value_labels: ValueLabels::Grouped,
        }
    }

    /// MAE, SMAPE and accuracy bars per product, read from the first matching
    /// result row.
    pub fn metric_bars(
        results: &[ForecastRecord],
        products: &[String],
        tiers: AxisTiers,
    ) -> Self {
        let first = |product: &str, pick: fn(&ForecastRecord) -> f64| {
            results
                .iter()
                .find(|r| r.product == product)
                .map(pick)
                .unwrap_or(0.0)
        };
        let columns: [(&str, fn(&ForecastRecord) -> f64); 3] = [
            ("MAE", |r| r.mae),
            ("SMAPE", |r| r.smape),
            ("Accuracy", |r| r.accuracy),
        ];
        let datasets: Vec<Dataset> = columns
            .into_iter()
            .enumerate()
            .map(|(i, (label, pick))| Dataset {
                label: label.to_string(),
                color: SERIES_PALETTE[i % SERIES_PALETTE.len()],
                fill: None,
                values: products.iter().map(|p| first(p, pick)).collect(),
            })
            .collect();
        let max = scale::plot_max(datasets.iter().flat_map(|d| d.values.iter().copied()));
        let (y_step, y_max) = tiers.axis_for(max);
        Self {
            title: "Error metrics by product",
            plot: PlotKind::Bar,
            labels: products.to_vec(),
            datasets,
            y_step,
            y_max,
            show_legend: true,
            value_labels: ValueLabels::Grouped,
        }
    }

    /// Accuracy per product on a fixed percentage axis.
    pub fn accuracy_line(results: &[ForecastRecord], products: &[String]) -> Self {
        let values = products
            .iter()
            .map(|p| {
                results
                    .iter()
                    .find(|r| r.product == *p)
                    .map(|r| r.accuracy)
                    .unwrap_or(0.0)
            })
            .collect();
        Self {
            title: "Prediction accuracy by product",
            plot: PlotKind::Line { width: 2.0 },
            labels: products.to_vec(),
            datasets: vec![Dataset {
                label: "Accuracy (%)".to_string(),
                color: ACCURACY_COLOR,
                fill: Some(ACCURACY_FILL),
                values,
            }],
            y_step: 20.0,
            y_max: 100.0,
            show_legend: true,
            value_labels: ValueLabels::Percent1,
        }
    }

    /// MAE per product from the metrics endpoint. Products come from the
    /// results set so the bar order matches the other charts.
    pub fn error_bars(
        metrics: &[MetricsRecord],
        products: &[String],
        tiers: AxisTiers,
    ) -> Self {
        let values: Vec<f64> = products
            .iter()
            .map(|p| {
                metrics
                    .iter()
                    .find(|m| m.product == *p)
                    .map(|m| m.mae)
                    .unwrap_or(0.0)
            })
            .collect();
        let (y_step, y_max) = tiers.axis_for(scale::plot_max(values.iter().copied()));
        Self {
            title: "MAE by product (Random Forest)",
            plot: PlotKind::Bar,
            labels: products.to_vec(),
            datasets: vec![Dataset {
                label: "MAE".to_string(),
                color: ERROR_BAR_COLOR,
                fill: None,
                values,
            }],
            y_step,
            y_max,
            show_legend: false,
            value_labels: ValueLabels::NonZeroFixed2,
        }
    }

    /// Daily mean actual vs predicted demand for May.
    pub fn daily_line(results: &[ForecastRecord], tiers: AxisTiers) -> Self {
        let points = series::monthly_series(results, 5);
        let labels = points.iter().map(|p| p.date.clone()).collect();
        let actual: Vec<f64> = points.iter().map(|p| p.actual).collect();
        let predicted: Vec<f64> = points.iter().map(|p| p.predicted).collect();
        let max = scale::plot_max(actual.iter().chain(predicted.iter()).copied());
        let (y_step, y_max) = tiers.axis_for(max);
        Self {
            title: "Daily mean demand, actual vs predicted (May)",
            plot: PlotKind::Line { width: 2.5 },
            labels,
            datasets: vec![
                Dataset {
                    label: "Actual".to_string(),
                    color: ACTUAL_COLOR,
                    fill: None,
                    values: actual,
                },
                Dataset {
                    label: "Predicted".to_string(),
                    color: PREDICTED_COLOR,
                    fill: None,
                    values: predicted,
                },
            ],
            y_step,
            y_max,
            show_legend: true,
            value_labels: ValueLabels::Hidden,
        }
    }
}

/// Builds the model a chart slot describes from the current filtered data.
pub fn build_model(
    slot: &ChartSlot,
    results: &[ForecastRecord],
    metrics: &[MetricsRecord],
    products: &[String],
) -> ChartModel {
    match slot.kind {
        ChartKind::PredictionBars => {
            ChartModel::prediction_bars(results, products, slot.tiers.unwrap_or(scale::VOLUME_TIERS))
        }
        ChartKind::MetricBars => {
            ChartModel::metric_bars(results, products, slot.tiers.unwrap_or(scale::METRIC_TIERS))
        }
        ChartKind::AccuracyLine => ChartModel::accuracy_line(results, products),
        ChartKind::ErrorBars => {
            ChartModel::error_bars(metrics, products, slot.tiers.unwrap_or(scale::ERROR_TIERS))
        }
        ChartKind::DailyLine => {
            ChartModel::daily_line(results, slot.tiers.unwrap_or(scale::VOLUME_TIERS))
        }
    }
}

fn group_thousands(value: f64) -> String {
    let rendered = format!("{value:.3}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
