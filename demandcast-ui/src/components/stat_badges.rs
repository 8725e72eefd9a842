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

//! Aggregate metric displays: the badge strip above a tab and the model
//! summary in the sidebar. Both show `--` until a render pass publishes
//! values and keep the last good values when a later pass has nothing.

use demandcast_analytics::StatValue;
use demandcast_types::MetricKey;
use yew::prelude::*;

const PLACEHOLDER: &str = "--";

fn value_for(stats: &Option<Vec<StatValue>>, key: MetricKey) -> String {
    stats
        .as_ref()
        .and_then(|stats| stats.iter().find(|s| s.key == key))
        .map(|s| s.formatted())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[derive(Properties, PartialEq)]
pub struct HeaderStatsProps {
    /// Badge order.
    pub tracked: &'static [MetricKey],
    pub stats: Option<Vec<StatValue>>,
}

/// The per-tab badge strip, averaging over the selected product group.
#[function_component(HeaderStats)]
pub fn header_stats(props: &HeaderStatsProps) -> Html {
    html! {
        <div class="header-stats">
            { for props.tracked.iter().map(|key| html! {
                <div class="stat-badge" data-metric={key.label()}>
                    <span class="stat-label">{ format!("Avg {}", key.label()) }</span>
                    <span class="stat-value">{ value_for(&props.stats, *key) }</span>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModelInfoProps {
    pub model_label: &'static str,
    pub tracked: &'static [MetricKey],
    pub stats: Option<Vec<StatValue>>,
}

/// Sidebar summary for the active model: its label plus whole-dataset
/// averages of the tracked metrics.
#[function_component(ModelInfo)]
pub fn model_info(props: &ModelInfoProps) -> Html {
    html! {
        <div class="model-info">
            <div class="info-item">
                <span class="info-label">{ "Model" }</span>
                <span class="info-value">{ props.model_label }</span>
            </div>
            { for props.tracked.iter().map(|key| {
                let accuracy = (*key == MetricKey::Accuracy).then_some("info-accuracy");
                html! {
                    <div class={classes!("info-item", accuracy)} data-metric={key.label()}>
                        <span class="info-label">{ key.label() }</span>
                        <span class="info-value">{ value_for(&props.stats, *key) }</span>
                    </div>
                }
            }) }
        </div>
    }
}
