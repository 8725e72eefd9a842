// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use demandcast_analytics::scale;
use demandcast_types::MetricsRecord;
use demandcast_ui::charts::{ChartInstance, ChartModel, ChartRegistry};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_model() -> ChartModel {
    let metrics = vec![MetricsRecord {
        product: "Product_81".to_string(),
        mae: 4.0,
        rmse: 6.0,
    }];
    let products = vec!["Product_81".to_string()];
    ChartModel::error_bars(&metrics, &products, scale::ERROR_TIERS)
}

fn mount_canvas(mount: &web_sys::Element, id: &str) -> web_sys::HtmlCanvasElement {
    let canvas = gloo_utils::document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    mount.append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn rendering_into_a_missing_canvas_yields_nothing() {
    assert!(ChartInstance::render("no-such-canvas", sample_model()).is_none());
}

#[wasm_bindgen_test]
fn rendering_sizes_the_canvas_at_the_fixed_aspect_ratio() {
    let mount = support::create_mount_point();
    let canvas = mount_canvas(&mount, "aspect-canvas");

    let instance = ChartInstance::render("aspect-canvas", sample_model());
    assert!(instance.is_some());
    let width = canvas.width();
    assert!(width > 0);
    assert_eq!(canvas.height(), ((width as f64) / 2.6).round() as u32);

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
fn installing_twice_keeps_a_single_instance_per_slot() {
    let mount = support::create_mount_point();
    mount_canvas(&mount, "slot-canvas");
    let registry = ChartRegistry::new();

    let first = ChartInstance::render("slot-canvas", sample_model()).unwrap();
    registry.install("error", first);
    let second = ChartInstance::render("slot-canvas", sample_model()).unwrap();
    registry.install("error", second);

    assert_eq!(registry.len(), 1);
    assert!(registry.contains("error"));

    registry.destroy("error");
    assert!(registry.is_empty());

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
fn destroy_all_clears_every_slot() {
    let mount = support::create_mount_point();
    mount_canvas(&mount, "canvas-a");
    mount_canvas(&mount, "canvas-b");
    let registry = ChartRegistry::new();

    registry.install(
        "a",
        ChartInstance::render("canvas-a", sample_model()).unwrap(),
    );
    registry.install(
        "b",
        ChartInstance::render("canvas-b", sample_model()).unwrap(),
    );
    assert_eq!(registry.len(), 2);

    registry.destroy_all();
    assert!(registry.is_empty());

    support::cleanup(&mount);
}
