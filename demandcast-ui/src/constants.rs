// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Runtime configuration injected by the host page via `window.__APP_CONFIG`.
///
/// The dashboard is served as a static bundle, so deploy-time knobs arrive
/// through a small inline script rather than compile-time env vars.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Base URL of the forecast API, e.g. `https://api.example.com`.
    /// An empty string means same-origin relative requests.
    #[serde(rename = "apiBaseUrl", default)]
    pub api_base_url: String,
}

/// Reads and parses `window.__APP_CONFIG`.
pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().expect("window");
    let value: JsValue = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .map_err(|_| "Runtime configuration not found (window.__APP_CONFIG missing)".to_string())?;
    if value.is_undefined() || value.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}

pub fn api_base_url() -> Result<String, String> {
    app_config().map(|c| c.api_base_url)
}

/// Product-code prefixes the filter bars partition on. Every record whose
/// `Product_Number` starts with the selected prefix belongs to that group.
pub const PRODUCT_GROUPS: [&str; 8] = [
    "Product_8",
    "Product_9",
    "Product_a",
    "Product_b",
    "Product_c",
    "Product_d",
    "Product_e",
    "Product_f",
];

/// Series colors, assigned to per-product datasets modulo the palette length.
pub const SERIES_PALETTE: [&str; 6] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948",
];

/// Pause between consecutive reveal steps of a render pass.
pub const RENDER_STEP_MS: u64 = 20;

/// How long a pass waits after the last step before lifting the fade.
pub const OPACITY_RESTORE_MS: u64 = 200;

/// Charts are resized this long after a tab or sub-tab becomes visible, once
/// the browser has laid out the previously hidden panel.
pub const RESIZE_DELAY_MS: u32 = 300;

/// Width over height for every chart canvas.
pub const CHART_ASPECT_RATIO: f64 = 2.6;
