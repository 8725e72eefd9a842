// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use demandcast_analytics::build_recent;
use demandcast_types::ForecastRecord;
use demandcast_ui::components::prediction_table::PredictionTable;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn record(product: &str, date: &str, pred: f64) -> ForecastRecord {
    ForecastRecord {
        product: product.to_string(),
        date: date.to_string(),
        pred_value: pred,
        ..ForecastRecord::default()
    }
}

#[function_component(Wrapper)]
fn wrapper() -> Html {
    let rows = vec![
        record("Product_81", "2022-05-01", 10.0),
        record("Product_81", "2022-05-02", 20.0),
        record("Product_81", "2022-05-03", 30.0),
        record("Product_82", "2022-05-03", 7.5),
    ];
    let grid = Rc::new(build_recent(&rows, 3));
    html! { <PredictionTable grid={grid} /> }
}

#[wasm_bindgen_test]
async fn renders_one_column_per_forecast_day() {
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let headers = mount.query_selector_all("thead th").unwrap();
    assert_eq!(headers.length(), 5);
    assert_eq!(
        headers.item(2).unwrap().text_content().unwrap(),
        "2022-05-01 (T+1)"
    );
    assert_eq!(
        headers.item(4).unwrap().text_content().unwrap(),
        "2022-05-03 (T+3)"
    );

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn missing_dates_render_as_dashes() {
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let rows = mount.query_selector_all("tbody tr").unwrap();
    assert_eq!(rows.length(), 2);

    let second = rows.item(1).unwrap();
    let cells = second
        .dyn_ref::<web_sys::Element>()
        .unwrap()
        .query_selector_all("td")
        .unwrap();
    // index, product, then the three day columns
    assert_eq!(cells.item(1).unwrap().text_content().unwrap(), "Product_82");
    assert_eq!(cells.item(2).unwrap().text_content().unwrap(), "-");
    assert_eq!(cells.item(3).unwrap().text_content().unwrap(), "-");
    assert_eq!(cells.item(4).unwrap().text_content().unwrap(), "7.5");

    support::cleanup(&mount);
}
