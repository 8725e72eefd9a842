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

//! Top-level dashboard layout: sidebar navigation, the active model's
//! summary, and one [`ForecastTab`] per family. Both tabs stay mounted so
//! their data survives switching; only the `active` flag moves.

use crate::components::forecast_tab::ForecastTab;
use crate::components::stat_badges::ModelInfo;
use crate::family::{FamilyConfig, FamilyId, FAMILIES};
use demandcast_analytics::StatValue;
use std::collections::HashMap;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

pub enum Msg {
    SwitchTab(FamilyId),
    SidebarStats((FamilyId, Vec<StatValue>)),
}

pub struct Dashboard {
    active: FamilyId,
    /// Last published whole-dataset averages, per family.
    sidebar: HashMap<FamilyId, Vec<StatValue>>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active: FamilyId::Ensemble,
            sidebar: HashMap::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SwitchTab(id) => {
                if self.active == id {
                    return false;
                }
                self.active = id;
                scroll_main_to_top();
                true
            }
            Msg::SidebarStats((id, stats)) => {
                let visible = self.active == id;
                self.sidebar.insert(id, stats);
                visible
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_stats = ctx.link().callback(Msg::SidebarStats);
        html! {
            <div class="dashboard-layout">
                <aside class="sidebar">
                    <div class="sidebar-title">{ "Demandcast" }</div>
                    <nav class="sidebar-nav">
                        { for FAMILIES.iter().copied().map(|config| self.render_nav_item(ctx, config)) }
                    </nav>
                    { self.render_model_info() }
                </aside>
                <main class="main-content">
                    { for FAMILIES.iter().copied().map(|config| html! {
                        <ForecastTab
                            {config}
                            active={self.active == config.id}
                            on_stats={on_stats.clone()}
                        />
                    }) }
                </main>
            </div>
        }
    }
}

impl Dashboard {
    fn render_nav_item(&self, ctx: &Context<Self>, config: &'static FamilyConfig) -> Html {
        let id = config.id;
        let onclick = ctx.link().callback(move |_| Msg::SwitchTab(id));
        html! {
            <button
                class={classes!("nav-item", (self.active == id).then_some("active"))}
                data-tab={config.nav_id}
                {onclick}
            >
                { config.nav_label }
            </button>
        }
    }

    fn render_model_info(&self) -> Html {
        let Some(config) = FAMILIES.iter().copied().find(|c| c.id == self.active) else {
            return html! {};
        };
        html! {
            <ModelInfo
                model_label={config.model_label}
                tracked={config.tracked}
                stats={self.sidebar.get(&config.id).cloned()}
            />
        }
    }
}

/// The main column scrolls back up when the model tab changes.
fn scroll_main_to_top() {
    let Ok(Some(element)) = gloo_utils::document().query_selector(".main-content") else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_to_with_scroll_to_options(&options);
}
