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

//! Ownership of drawn charts.
//!
//! Every chart a tab draws is registered under a slot name. Installing into
//! an occupied slot tears the previous instance down first, so a canvas can
//! never be painted by two owners. The registry is the only place charts are
//! destroyed.

use super::draw;
use super::ChartModel;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// One chart drawn onto a canvas, redrawable on demand.
pub struct ChartInstance {
    canvas: HtmlCanvasElement,
    model: ChartModel,
}

impl ChartInstance {
    /// Draws `model` onto the canvas with the given element id. Returns
    /// `None` when the canvas is absent from the DOM; a pass simply skips
    /// such slots.
    pub fn render(canvas_id: &str, model: ChartModel) -> Option<Self> {
        let canvas = gloo_utils::document()
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        draw::sync_size(&canvas);
        match draw::context_2d(&canvas) {
            Ok(ctx) => {
                draw::render(&ctx, &canvas, &model);
                Some(Self { canvas, model })
            }
            Err(e) => {
                log::warn!("chart render failed on #{canvas_id}: {e}");
                None
            }
        }
    }

    /// Re-syncs the backing store to the current layout and redraws.
    pub fn resize(&self) {
        draw::sync_size(&self.canvas);
        match draw::context_2d(&self.canvas) {
            Ok(ctx) => draw::render(&ctx, &self.canvas, &self.model),
            Err(e) => log::warn!("chart resize failed: {e}"),
        }
    }

    fn teardown(&self) -> Result<(), String> {
        let ctx = draw::context_2d(&self.canvas)?;
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct ChartRegistry {
    inner: Rc<RefCell<HashMap<&'static str, ChartInstance>>>,
}

impl PartialEq for ChartRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a freshly drawn chart, destroying any previous occupant of
    /// the slot.
    pub fn install(&self, name: &'static str, instance: ChartInstance) {
        self.destroy(name);
        self.inner.borrow_mut().insert(name, instance);
    }

    /// Clears one slot. The slot is vacated even if wiping the canvas fails.
    pub fn destroy(&self, name: &str) {
        let removed = self.inner.borrow_mut().remove(name);
        if let Some(instance) = removed {
            if let Err(e) = instance.teardown() {
                log::warn!("chart teardown failed for {name}: {e}");
            }
        }
    }

    /// Tears down every chart. A render pass starts here so stale instances
    /// never outlive the data they were drawn from.
    pub fn destroy_all(&self) {
        let drained: Vec<(&'static str, ChartInstance)> =
            self.inner.borrow_mut().drain().collect();
        for (name, instance) in drained {
            if let Err(e) = instance.teardown() {
                log::warn!("chart teardown failed for {name}: {e}");
            }
        }
    }

    /// Redraws every live chart at its current layout size.
    pub fn resize_all(&self) {
        for instance in self.inner.borrow().values() {
            instance.resize();
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}
