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

//! Static descriptions of the two model families the dashboard renders.
//!
//! Each family is one top-level tab. Everything that differs between the two
//! tabs lives in a [`FamilyConfig`]: endpoints, tracked metrics, sub-tab
//! panels, chart slots and their axis tiers, which table variant to build,
//! and the order the reveal sequence walks through them. The tab component
//! itself is family-agnostic.

use demandcast_analytics::scale::{self, AxisTiers};
use demandcast_types::MetricKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FamilyId {
    /// LightGBM + CatBoost ensemble pipeline.
    Ensemble,
    /// Random forest pipeline.
    RandomForest,
}

/// Where a family's aggregate badges take their metric values from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsSource {
    /// Per-row metric columns of the results endpoint.
    Results,
    /// The dedicated metrics endpoint.
    Metrics,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Grouped bars of each product's last three predicted volumes.
    PredictionBars,
    /// Per-product bars of MAE, SMAPE and accuracy.
    MetricBars,
    /// Accuracy line over products on a fixed 0..100 axis.
    AccuracyLine,
    /// One bar per product from the metrics endpoint's MAE column.
    ErrorBars,
    /// Daily mean actual vs predicted line for May.
    DailyLine,
}

/// One chart slot: a named registry entry drawn onto a fixed canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSlot {
    pub name: &'static str,
    pub canvas_id: &'static str,
    pub kind: ChartKind,
    /// Axis tier table for kinds with a data-dependent y axis.
    pub tiers: Option<AxisTiers>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderStep {
    Chart(ChartSlot),
    Table,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// Wide table of the last three predictions per product.
    RecentPredictions,
    /// Eleven-day actual/predicted pivot with pinned lead columns.
    DailyPivot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelContent {
    /// A chart canvas with this element id.
    Chart(&'static str),
    /// The family's table, hosted in a container with this element id.
    Table(&'static str),
}

/// One sub-tab panel: a button label, the panel element, its filter bar and
/// what it displays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubTabSpec {
    pub label: &'static str,
    pub target_id: &'static str,
    pub filter_id: &'static str,
    pub content: PanelContent,
}

#[derive(Debug, PartialEq)]
pub struct FamilyConfig {
    pub id: FamilyId,
    pub tab_id: &'static str,
    pub nav_id: &'static str,
    pub nav_label: &'static str,
    pub model_label: &'static str,
    pub results_path: &'static str,
    pub metrics_path: Option<&'static str>,
    pub stats_source: StatsSource,
    /// Metrics this family's badges display, in badge order.
    pub tracked: &'static [MetricKey],
    pub subtabs: &'static [SubTabSpec],
    /// Reveal order of a render pass.
    pub steps: &'static [RenderStep],
    pub table: TableKind,
    /// Whether charts need a deferred resize after the tab becomes visible.
    pub resize_after_switch: bool,
}

pub static ENSEMBLE: FamilyConfig = FamilyConfig {
    id: FamilyId::Ensemble,
    tab_id: "tab-preprocessing1",
    nav_id: "preprocessing1",
    nav_label: "Ensemble forecast",
    model_label: "LightGBM + CatBoost",
    results_path: "/api/preprocessing-a",
    metrics_path: None,
    stats_source: StatsSource::Results,
    tracked: &[MetricKey::Mae, MetricKey::Smape, MetricKey::Accuracy],
    subtabs: &[
        SubTabSpec {
            label: "Forecast",
            target_id: "subtab-predict",
            filter_id: "filter-predict",
            content: PanelContent::Chart("chart-prep1-prediction"),
        },
        SubTabSpec {
            label: "Forecast table",
            target_id: "subtab-table",
            filter_id: "filter-table",
            content: PanelContent::Table("chart-prep1-table"),
        },
        SubTabSpec {
            label: "Metrics",
            target_id: "subtab-metrics",
            filter_id: "filter-metrics",
            content: PanelContent::Chart("chart-prep1-features"),
        },
        SubTabSpec {
            label: "Accuracy",
            target_id: "subtab-accuracy",
            filter_id: "filter-accuracy",
            content: PanelContent::Chart("chart-prep1-epochs"),
        },
    ],
    steps: &[
        RenderStep::Chart(ChartSlot {
            name: "prediction",
            canvas_id: "chart-prep1-prediction",
            kind: ChartKind::PredictionBars,
            tiers: Some(scale::VOLUME_TIERS),
        }),
        RenderStep::Table,
        RenderStep::Chart(ChartSlot {
            name: "metrics",
            canvas_id: "chart-prep1-features",
            kind: ChartKind::MetricBars,
            tiers: Some(scale::METRIC_TIERS),
        }),
        RenderStep::Chart(ChartSlot {
            name: "accuracy",
            canvas_id: "chart-prep1-epochs",
            kind: ChartKind::AccuracyLine,
            tiers: None,
        }),
    ],
    table: TableKind::RecentPredictions,
    resize_after_switch: false,
};

pub static RANDOM_FOREST: FamilyConfig = FamilyConfig {
    id: FamilyId::RandomForest,
    tab_id: "tab-preprocessing2",
    nav_id: "preprocessing2",
    nav_label: "Random forest forecast",
    model_label: "Random Forest",
    results_path: "/api/randomforest-results",
    metrics_path: Some("/api/randomforest-metrics"),
    stats_source: StatsSource::Metrics,
    tracked: &[MetricKey::Mae, MetricKey::Rmse],
    subtabs: &[
        SubTabSpec {
            label: "Error by product",
            target_id: "subtab-predict-b",
            filter_id: "filter-predict-b",
            content: PanelContent::Chart("chart-prep2-prediction"),
        },
        SubTabSpec {
            label: "Actual vs predicted",
            target_id: "subtab-metrics-b",
            filter_id: "filter-metrics-b",
            content: PanelContent::Chart("chart-prep2-features"),
        },
        SubTabSpec {
            label: "Comparison table",
            target_id: "subtab-accuracy-b",
            filter_id: "filter-accuracy-b",
            content: PanelContent::Table("chart-prep2-epochs"),
        },
    ],
    steps: &[
        RenderStep::Chart(ChartSlot {
            name: "prediction",
            canvas_id: "chart-prep2-prediction",
            kind: ChartKind::ErrorBars,
            tiers: Some(scale::ERROR_TIERS),
        }),
        RenderStep::Chart(ChartSlot {
            name: "daily",
            canvas_id: "chart-prep2-features",
            kind: ChartKind::DailyLine,
            tiers: Some(scale::VOLUME_TIERS),
        }),
        RenderStep::Table,
    ],
    table: TableKind::DailyPivot,
    resize_after_switch: true,
};

/// Sidebar order.
pub static FAMILIES: [&FamilyConfig; 2] = [&ENSEMBLE, &RANDOM_FOREST];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn chart_slot_names_are_unique_within_a_family() {
        for family in FAMILIES {
            let mut names = HashSet::new();
            for step in family.steps {
                if let RenderStep::Chart(slot) = step {
                    assert!(names.insert(slot.name), "duplicate slot in {:?}", family.id);
                }
            }
        }
    }

    #[test]
    fn every_canvas_slot_has_a_hosting_panel() {
        for family in FAMILIES {
            let panels: HashSet<&str> = family
                .subtabs
                .iter()
                .filter_map(|s| match s.content {
                    PanelContent::Chart(id) => Some(id),
                    PanelContent::Table(_) => None,
                })
                .collect();
            for step in family.steps {
                if let RenderStep::Chart(slot) = step {
                    assert!(
                        panels.contains(slot.canvas_id),
                        "{} has no panel in {:?}",
                        slot.canvas_id,
                        family.id
                    );
                }
            }
        }
    }

    #[test]
    fn families_do_not_share_element_ids() {
        let mut ids = HashSet::new();
        for family in FAMILIES {
            assert!(ids.insert(family.tab_id));
            for subtab in family.subtabs {
                assert!(ids.insert(subtab.target_id));
                assert!(ids.insert(subtab.filter_id));
            }
        }
    }

    #[test]
    fn exactly_one_table_step_per_family() {
        for family in FAMILIES {
            let tables = family
                .steps
                .iter()
                .filter(|s| matches!(s, RenderStep::Table))
                .count();
            assert_eq!(tables, 1, "{:?}", family.id);
        }
    }
}
