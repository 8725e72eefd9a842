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

//! One model family's tab.
//!
//! The component fetches that family's endpoints once, then replays a staged
//! render pass whenever the filter, sub-tab or tab activation changes: fade
//! the visible panel, destroy the previous charts, reveal each chart and the
//! table with a short pause in between, publish aggregate stats, restore
//! opacity. Passes are numbered; starting a new one abandons any pass still
//! sleeping.

use crate::api::{self, FetchError};
use crate::charts::{self, ChartInstance, ChartRegistry};
use crate::components::filter_bar::FilterBar;
use crate::components::pivot_table::PivotTable;
use crate::components::prediction_table::PredictionTable;
use crate::components::stat_badges::HeaderStats;
use crate::constants::{OPACITY_RESTORE_MS, PRODUCT_GROUPS, RENDER_STEP_MS, RESIZE_DELAY_MS};
use crate::family::{FamilyConfig, FamilyId, PanelContent, RenderStep, StatsSource, SubTabSpec, TableKind};
use demandcast_analytics::series::distinct_products;
use demandcast_analytics::{build_pivot, build_recent, summarize, PivotGrid, RecentGrid, StatValue};
use demandcast_types::{ForecastRecord, MetricsRecord};
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use yew::html::Scope;
use yew::platform::time::sleep;
use yew::prelude::*;

/// Forecast days the recent-predictions table keeps.
const RECENT_DATES: usize = 3;

pub enum Msg {
    Fetch,
    FetchSuccess {
        results: Vec<ForecastRecord>,
        metrics: Vec<MetricsRecord>,
    },
    FetchFailure(FetchError),
    SelectSubTab(usize),
    SelectGroup(usize),
    /// Start a new render pass for the current selection.
    RenderPass,
    /// Sequence step: rebuild the table grid from the current filter.
    StageTable,
    /// Sequence step: recompute badge and sidebar aggregates.
    PublishStats,
    ResizeCharts,
}

#[derive(Properties, PartialEq)]
pub struct ForecastTabProps {
    pub config: &'static FamilyConfig,
    pub active: bool,
    /// Whole-dataset averages for the sidebar, emitted after each pass.
    pub on_stats: Callback<(FamilyId, Vec<StatValue>)>,
}

enum TableState {
    /// No pass has staged the table yet.
    NotStaged,
    /// The current filter has no rows to tabulate.
    Missing,
    Recent(Rc<RecentGrid>),
    Pivot(Rc<PivotGrid>),
}

pub struct ForecastTab {
    results: Rc<Vec<ForecastRecord>>,
    metrics: Rc<Vec<MetricsRecord>>,
    loading: bool,
    load_failed: bool,
    subtab: usize,
    group: usize,
    header_stats: Option<Vec<StatValue>>,
    table: TableState,
    registry: ChartRegistry,
    /// Monotonic pass counter; a running sequence checks it after every
    /// sleep and bows out once superseded.
    pass: Rc<Cell<u64>>,
}

impl Component for ForecastTab {
    type Message = Msg;
    type Properties = ForecastTabProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            results: Rc::new(Vec::new()),
            metrics: Rc::new(Vec::new()),
            loading: true,
            load_failed: false,
            subtab: 0,
            group: 0,
            header_stats: None,
            table: TableState::NotStaged,
            registry: ChartRegistry::new(),
            pass: Rc::new(Cell::new(0)),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Re-activation resets the view to the first panel and group, then
        // re-renders once the panel is laid out again.
        if ctx.props().active && !old_props.active {
            self.subtab = 0;
            self.group = 0;
            ctx.link().send_message(Msg::RenderPass);
            self.schedule_resize(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let config = ctx.props().config;
        match msg {
            Msg::Fetch => {
                self.loading = true;
                self.load_failed = false;
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match load_family_data(config).await {
                        Ok((results, metrics)) => {
                            link.send_message(Msg::FetchSuccess { results, metrics })
                        }
                        Err(e) => link.send_message(Msg::FetchFailure(e)),
                    }
                });
                true
            }
            Msg::FetchSuccess { results, metrics } => {
                log::info!(
                    "{}: loaded {} result rows, {} metric rows",
                    config.nav_label,
                    results.len(),
                    metrics.len()
                );
                self.results = Rc::new(results);
                self.metrics = Rc::new(metrics);
                self.loading = false;
                ctx.link().send_message(Msg::RenderPass);
                true
            }
            Msg::FetchFailure(error) => {
                log::error!("{}: data load failed: {error}", config.nav_label);
                self.loading = false;
                self.load_failed = true;
                true
            }
            Msg::SelectSubTab(index) => {
                self.subtab = index;
                self.group = 0;
                ctx.link().send_message(Msg::RenderPass);
                self.schedule_resize(ctx);
                true
            }
            Msg::SelectGroup(index) => {
                self.group = index;
                ctx.link().send_message(Msg::RenderPass);
                true
            }
            Msg::RenderPass => {
                if self.loading || self.load_failed {
                    return false;
                }
                let pass = self.pass.get() + 1;
                self.pass.set(pass);
                wasm_bindgen_futures::spawn_local(run_sequence(RenderSequence {
                    config,
                    registry: self.registry.clone(),
                    counter: self.pass.clone(),
                    pass,
                    results: self.results.clone(),
                    metrics: self.metrics.clone(),
                    prefix: PRODUCT_GROUPS[self.group],
                    panel_id: config.subtabs[self.subtab].target_id,
                    link: ctx.link().clone(),
                }));
                false
            }
            Msg::StageTable => {
                let filtered = filter_forecasts(&self.results, PRODUCT_GROUPS[self.group]);
                self.table = match config.table {
                    TableKind::RecentPredictions => {
                        if filtered.is_empty() {
                            TableState::Missing
                        } else {
                            TableState::Recent(Rc::new(build_recent(&filtered, RECENT_DATES)))
                        }
                    }
                    TableKind::DailyPivot => {
                        let grid = build_pivot(&filtered);
                        if grid.is_empty() {
                            TableState::Missing
                        } else {
                            TableState::Pivot(Rc::new(grid))
                        }
                    }
                };
                true
            }
            Msg::PublishStats => {
                let prefix = PRODUCT_GROUPS[self.group];
                let (header, sidebar) = match config.stats_source {
                    StatsSource::Results => (
                        summarize(
                            &filter_forecasts(&self.results, prefix),
                            config.tracked,
                            ForecastRecord::metric,
                        ),
                        summarize(&self.results, config.tracked, ForecastRecord::metric),
                    ),
                    StatsSource::Metrics => (
                        summarize(
                            &filter_metrics(&self.metrics, prefix),
                            config.tracked,
                            MetricsRecord::metric,
                        ),
                        summarize(&self.metrics, config.tracked, MetricsRecord::metric),
                    ),
                };
                // An empty selection publishes nothing; previous values stay.
                if let Some(stats) = header {
                    self.header_stats = Some(stats);
                }
                if let Some(stats) = sidebar {
                    ctx.props().on_stats.emit((config.id, stats));
                }
                true
            }
            Msg::ResizeCharts => {
                self.registry.resize_all();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = ctx.props().config;
        let active = ctx.props().active;
        html! {
            <div id={config.tab_id} class={classes!("tab-content", active.then_some("active"))}>
                <HeaderStats tracked={config.tracked} stats={self.header_stats.clone()} />
                { self.render_status() }
                <div class="subtab-bar">
                    { for config.subtabs.iter().enumerate().map(|(index, spec)| {
                        let onclick = ctx.link().callback(move |_| Msg::SelectSubTab(index));
                        html! {
                            <button
                                class={classes!("subtab", (index == self.subtab).then_some("active"))}
                                data-target={spec.target_id}
                                {onclick}
                            >
                                { spec.label }
                            </button>
                        }
                    }) }
                </div>
                { for config.subtabs.iter().enumerate().map(|(index, spec)| {
                    self.render_panel(ctx, index, spec)
                }) }
            </div>
        }
    }
}

impl ForecastTab {
    fn schedule_resize(&self, ctx: &Context<Self>) {
        if !ctx.props().config.resize_after_switch {
            return;
        }
        let link = ctx.link().clone();
        Timeout::new(RESIZE_DELAY_MS, move || {
            link.send_message(Msg::ResizeCharts);
        })
        .forget();
    }

    fn render_status(&self) -> Html {
        if self.loading {
            html! { <div class="dashboard-status">{ "Loading forecast data..." }</div> }
        } else if self.load_failed {
            html! {
                <div class="dashboard-status dashboard-status-error">
                    { "Failed to load forecast data" }
                </div>
            }
        } else {
            html! {}
        }
    }

    fn render_panel(&self, ctx: &Context<Self>, index: usize, spec: &SubTabSpec) -> Html {
        let on_select = ctx.link().callback(Msg::SelectGroup);
        html! {
            <div
                id={spec.target_id}
                class={classes!("subtab-content", (index == self.subtab).then_some("active"))}
            >
                <FilterBar id={spec.filter_id} active={self.group} on_select={on_select} />
                {
                    match spec.content {
                        PanelContent::Chart(canvas_id) => html! {
                            <div class="chart-container">
                                <canvas id={canvas_id}></canvas>
                            </div>
                        },
                        PanelContent::Table(container_id) => html! {
                            <div class="table-container" id={container_id}>
                                { self.render_table() }
                            </div>
                        },
                    }
                }
            </div>
        }
    }

    fn render_table(&self) -> Html {
        match &self.table {
            TableState::NotStaged => html! {},
            TableState::Missing => html! {
                <p class="text-center text-muted">{ "No data available" }</p>
            },
            TableState::Recent(grid) => html! { <PredictionTable grid={grid.clone()} /> },
            TableState::Pivot(grid) => html! { <PivotTable grid={grid.clone()} /> },
        }
    }
}

struct RenderSequence {
    config: &'static FamilyConfig,
    registry: ChartRegistry,
    counter: Rc<Cell<u64>>,
    pass: u64,
    results: Rc<Vec<ForecastRecord>>,
    metrics: Rc<Vec<MetricsRecord>>,
    prefix: &'static str,
    panel_id: &'static str,
    link: Scope<ForecastTab>,
}

async fn run_sequence(seq: RenderSequence) {
    set_panel_opacity(seq.panel_id, "0.4");
    sleep(Duration::from_millis(RENDER_STEP_MS)).await;
    if seq.counter.get() != seq.pass {
        return;
    }
    seq.registry.destroy_all();

    let results = filter_forecasts(&seq.results, seq.prefix);
    let metrics = filter_metrics(&seq.metrics, seq.prefix);
    let products = distinct_products(&results);

    for (index, step) in seq.config.steps.iter().enumerate() {
        if index > 0 {
            sleep(Duration::from_millis(RENDER_STEP_MS)).await;
            if seq.counter.get() != seq.pass {
                return;
            }
        }
        match step {
            RenderStep::Chart(slot) => {
                let model = charts::build_model(slot, &results, &metrics, &products);
                if let Some(instance) = ChartInstance::render(slot.canvas_id, model) {
                    seq.registry.install(slot.name, instance);
                }
            }
            RenderStep::Table => seq.link.send_message(Msg::StageTable),
        }
    }
    seq.link.send_message(Msg::PublishStats);

    sleep(Duration::from_millis(OPACITY_RESTORE_MS)).await;
    if seq.counter.get() != seq.pass {
        return;
    }
    set_panel_opacity(seq.panel_id, "1");
}

async fn load_family_data(
    config: &'static FamilyConfig,
) -> Result<(Vec<ForecastRecord>, Vec<MetricsRecord>), FetchError> {
    let results = api::fetch_forecasts(config.results_path).await?;
    let metrics = match config.metrics_path {
        Some(path) => api::fetch_metrics(path).await?,
        None => Vec::new(),
    };
    Ok((results, metrics))
}

fn filter_forecasts(records: &[ForecastRecord], prefix: &str) -> Vec<ForecastRecord> {
    records
        .iter()
        .filter(|r| r.product.starts_with(prefix))
        .cloned()
        .collect()
}

fn filter_metrics(records: &[MetricsRecord], prefix: &str) -> Vec<MetricsRecord> {
    records
        .iter()
        .filter(|r| r.product.starts_with(prefix))
        .cloned()
        .collect()
}

fn set_panel_opacity(panel_id: &str, opacity: &str) {
    let Some(element) = gloo_utils::document().get_element_by_id(panel_id) else {
        return;
    };
    if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
        let style = element.style();
        let _ = style.set_property("transition", "opacity 0.3s ease");
        let _ = style.set_property("opacity", opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(product: &str) -> ForecastRecord {
        ForecastRecord {
            product: product.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn filtering_keeps_only_the_selected_prefix() {
        let records = vec![
            forecast("Product_8a1"),
            forecast("Product_9b2"),
            forecast("Product_8c3"),
        ];
        let subset = filter_forecasts(&records, "Product_8");
        let products: Vec<&str> = subset.iter().map(|r| r.product.as_str()).collect();
        assert_eq!(products, vec!["Product_8a1", "Product_8c3"]);
        assert!(filter_forecasts(&records, "Product_f").is_empty());
    }

    #[test]
    fn metrics_filter_by_the_same_prefix_rule() {
        let records = vec![
            MetricsRecord {
                product: "Product_9x".to_string(),
                mae: 1.0,
                rmse: 2.0,
            },
            MetricsRecord {
                product: "Product_8y".to_string(),
                mae: 3.0,
                rmse: 4.0,
            },
        ];
        let subset = filter_metrics(&records, "Product_9");
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].product, "Product_9x");
    }
}
