// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use demandcast_ui::components::dashboard::Dashboard;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! { <Dashboard /> }
}

fn click(mount: &web_sys::Element, selector: &str, index: u32) {
    mount
        .query_selector_all(selector)
        .unwrap()
        .item(index)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

fn has_class(mount: &web_sys::Element, selector: &str) -> bool {
    mount.query_selector(selector).unwrap().is_some()
}

#[wasm_bindgen_test]
async fn both_tabs_mount_with_the_ensemble_active() {
    support::inject_app_config("http://127.0.0.1:9");
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let nav = mount.query_selector_all(".nav-item").unwrap();
    assert_eq!(nav.length(), 2);
    assert!(has_class(&mount, ".nav-item.active[data-tab='preprocessing1']"));
    assert!(has_class(&mount, "#tab-preprocessing1.active"));
    assert!(!has_class(&mount, "#tab-preprocessing2.active"));

    // Data has not arrived yet, so the tab reports it is loading.
    let status = mount
        .query_selector("#tab-preprocessing1 .dashboard-status")
        .unwrap()
        .unwrap();
    assert_eq!(status.text_content().unwrap(), "Loading forecast data...");

    support::cleanup(&mount);
    support::remove_app_config();
}

#[wasm_bindgen_test]
async fn each_family_gets_its_configured_sub_tabs() {
    support::inject_app_config("http://127.0.0.1:9");
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let ensemble = mount
        .query_selector_all("#tab-preprocessing1 .subtab")
        .unwrap();
    assert_eq!(ensemble.length(), 4);
    let forest = mount
        .query_selector_all("#tab-preprocessing2 .subtab")
        .unwrap();
    assert_eq!(forest.length(), 3);

    support::cleanup(&mount);
    support::remove_app_config();
}

#[wasm_bindgen_test]
async fn clicking_a_sub_tab_switches_the_visible_panel() {
    support::inject_app_config("http://127.0.0.1:9");
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(has_class(&mount, "#subtab-predict.active"));
    click(&mount, "#tab-preprocessing1 .subtab", 1);
    sleep(Duration::ZERO).await;

    assert!(has_class(&mount, "#subtab-table.active"));
    assert!(!has_class(&mount, "#subtab-predict.active"));

    support::cleanup(&mount);
    support::remove_app_config();
}

#[wasm_bindgen_test]
async fn switching_families_swaps_tab_and_sidebar() {
    support::inject_app_config("http://127.0.0.1:9");
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let info = mount.query_selector(".model-info").unwrap().unwrap();
    assert!(info.text_content().unwrap().contains("LightGBM + CatBoost"));

    click(&mount, ".nav-item", 1);
    sleep(Duration::ZERO).await;

    assert!(has_class(&mount, "#tab-preprocessing2.active"));
    assert!(!has_class(&mount, "#tab-preprocessing1.active"));
    assert_eq!(
        mount.query_selector_all(".nav-item.active").unwrap().length(),
        1
    );
    let info = mount.query_selector(".model-info").unwrap().unwrap();
    assert!(info.text_content().unwrap().contains("Random Forest"));

    support::cleanup(&mount);
    support::remove_app_config();
}
