// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0

//! Shared helpers for browser tests.

use js_sys::{Object, Reflect};
use web_sys::Element;

/// Creates a detached div under `<body>` for a test to render into.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let mount = document.create_element("div").expect("create mount point");
    document
        .body()
        .expect("body")
        .append_child(&mount)
        .expect("append mount point");
    mount
}

pub fn cleanup(mount: &Element) {
    mount.remove();
}

/// Installs a frozen `window.__APP_CONFIG` the way the host page does.
#[allow(dead_code)]
pub fn inject_app_config(api_base_url: &str) {
    let config = Object::new();
    Reflect::set(&config, &"apiBaseUrl".into(), &api_base_url.into())
        .expect("set apiBaseUrl");
    Object::freeze(&config);
    Reflect::set(&gloo_utils::window(), &"__APP_CONFIG".into(), &config)
        .expect("install __APP_CONFIG");
}

#[allow(dead_code)]
pub fn remove_app_config() {
    let _ = Reflect::delete_property(&gloo_utils::window(), &"__APP_CONFIG".into());
}
