// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immediate-mode canvas renderer for [`ChartModel`]s.

use super::{group_thousands, ChartModel, PlotKind, ValueLabels};
use crate::constants::CHART_ASPECT_RATIO;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const DEFAULT_WIDTH: u32 = 940;

const AXIS_TEXT: &str = "#cbd5e1";
const TITLE_TEXT: &str = "#e5e7eb";
const VALUE_TEXT: &str = "#ffffff";
const GRID_LINE: &str = "rgba(148, 163, 184, 0.15)";

const BASE_FONT: &str = "11px 'Segoe UI', system-ui, sans-serif";
const TITLE_FONT: &str = "600 14px 'Segoe UI', system-ui, sans-serif";
const VALUE_FONT: &str = "bold 10px 'Segoe UI', system-ui, sans-serif";

/// Matches the canvas backing store to its CSS width at the fixed aspect
/// ratio. Falls back to a sane default while the element is display:none.
pub(crate) fn sync_size(canvas: &HtmlCanvasElement) {
    let css_width = canvas.client_width();
    let width = if css_width > 0 {
        css_width as u32
    } else if canvas.width() > 0 {
        canvas.width()
    } else {
        DEFAULT_WIDTH
    };
    let height = ((width as f64) / CHART_ASPECT_RATIO).round() as u32;
    canvas.set_width(width);
    canvas.set_height(height.max(1));
}

pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| format!("{e:?}"))?
        .ok_or_else(|| "2d context unavailable".to_string())?;
    Ok(ctx.unchecked_into::<CanvasRenderingContext2d>())
}

pub(crate) fn render(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, model: &ChartModel) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let left = 56.0;
    let right = width - 16.0;
    let top = 34.0;
    let bottom = height - if model.show_legend { 52.0 } else { 30.0 };
    if right <= left || bottom <= top {
        return;
    }

    draw_title(ctx, model.title, width);
    draw_grid(ctx, model, left, right, top, bottom);
    match model.plot {
        PlotKind::Bar => draw_bars(ctx, model, left, right, top, bottom),
        PlotKind::Line { width: stroke } => draw_lines(ctx, model, stroke, left, right, top, bottom),
    }
    draw_x_labels(ctx, model, left, right, bottom);
    if model.show_legend {
        draw_legend(ctx, model, width, height);
    }
}

fn y_for(value: f64, y_max: f64, top: f64, bottom: f64) -> f64 {
    let span = if y_max > 0.0 { (value / y_max).clamp(0.0, 1.0) } else { 0.0 };
    bottom - span * (bottom - top)
}

fn draw_title(ctx: &CanvasRenderingContext2d, title: &str, width: f64) {
    ctx.set_fill_style_str(TITLE_TEXT);
    ctx.set_font(TITLE_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    let _ = ctx.fill_text(title, width / 2.0, 18.0);
}

fn draw_grid(
    ctx: &CanvasRenderingContext2d,
    model: &ChartModel,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
) {
    let steps = if model.y_step > 0.0 {
        (model.y_max / model.y_step).round() as i64
    } else {
        0
    };
    ctx.set_font(BASE_FONT);
    ctx.set_text_baseline("middle");
    for i in 0..=steps {
        let value = model.y_step * i as f64;
        let y = y_for(value, model.y_max, top, bottom);
        ctx.set_stroke_style_str(GRID_LINE);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(left, y);
        ctx.line_to(right, y);
        ctx.stroke();
        ctx.set_fill_style_str(AXIS_TEXT);
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&group_thousands(value), left - 8.0, y);
    }
    ctx.set_text_baseline("alphabetic");
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    model: &ChartModel,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
) {
    let groups = model.labels.len().max(1);
    let group_width = (right - left) / groups as f64;
    let series = model.datasets.len().max(1);
    let inner = group_width * 0.72;
    let bar_width = inner / series as f64;

    for (d, dataset) in model.datasets.iter().enumerate() {
        ctx.set_fill_style_str(dataset.color);
        for (g, value) in dataset.values.iter().enumerate() {
            if g >= groups {
                break;
            }
            let x = left + g as f64 * group_width + (group_width - inner) / 2.0 + d as f64 * bar_width;
            let y = y_for(*value, model.y_max, top, bottom);
            ctx.fill_rect(x, y, (bar_width - 2.0).max(1.0), bottom - y);
        }
    }

    if model.value_labels == ValueLabels::Hidden {
        return;
    }
    ctx.set_fill_style_str(VALUE_TEXT);
    ctx.set_font(VALUE_FONT);
    ctx.set_text_align("center");
    for (d, dataset) in model.datasets.iter().enumerate() {
        for (g, value) in dataset.values.iter().enumerate() {
            if g >= groups {
                break;
            }
            let Some(text) = model.value_labels.format(*value) else {
                continue;
            };
            let x = left
                + g as f64 * group_width
                + (group_width - inner) / 2.0
                + (d as f64 + 0.5) * bar_width;
            let y = y_for(*value, model.y_max, top, bottom);
            let _ = ctx.fill_text(&text, x, (y - 4.0).max(top + 8.0));
        }
    }
}

fn draw_lines(
    ctx: &CanvasRenderingContext2d,
    model: &ChartModel,
    stroke: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
) {
    let n = model.labels.len();
    let x_for = |i: usize| -> f64 {
        if n <= 1 {
            (left + right) / 2.0
        } else {
            left + (right - left) * i as f64 / (n - 1) as f64
        }
    };

    for dataset in &model.datasets {
        if dataset.values.is_empty() {
            continue;
        }
        if let Some(fill) = dataset.fill {
            ctx.begin_path();
            ctx.move_to(x_for(0), bottom);
            for (i, value) in dataset.values.iter().enumerate() {
                ctx.line_to(x_for(i), y_for(*value, model.y_max, top, bottom));
            }
            ctx.line_to(x_for(dataset.values.len() - 1), bottom);
            ctx.close_path();
            ctx.set_fill_style_str(fill);
            ctx.fill();
        }

        ctx.begin_path();
        for (i, value) in dataset.values.iter().enumerate() {
            let x = x_for(i);
            let y = y_for(*value, model.y_max, top, bottom);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.set_stroke_style_str(dataset.color);
        ctx.set_line_width(stroke);
        ctx.stroke();

        ctx.set_fill_style_str(dataset.color);
        for (i, value) in dataset.values.iter().enumerate() {
            ctx.begin_path();
            let _ = ctx.arc(
                x_for(i),
                y_for(*value, model.y_max, top, bottom),
                2.5,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }

        if model.value_labels != ValueLabels::Hidden {
            ctx.set_fill_style_str(VALUE_TEXT);
            ctx.set_font(VALUE_FONT);
            ctx.set_text_align("center");
            for (i, value) in dataset.values.iter().enumerate() {
                if let Some(text) = model.value_labels.format(*value) {
                    let y = y_for(*value, model.y_max, top, bottom);
                    let _ = ctx.fill_text(&text, x_for(i), (y + 14.0).min(bottom - 2.0));
                }
            }
        }
    }
}

fn draw_x_labels(
    ctx: &CanvasRenderingContext2d,
    model: &ChartModel,
    left: f64,
    right: f64,
    bottom: f64,
) {
    let n = model.labels.len();
    if n == 0 {
        return;
    }
    // Thin dense category axes the way an auto-skipping tick scale would.
    let stride = ((n + 11) / 12).max(1);
    ctx.set_fill_style_str(AXIS_TEXT);
    ctx.set_font(BASE_FONT);
    ctx.set_text_align("center");
    for (i, label) in model.labels.iter().enumerate() {
        if i % stride != 0 {
            continue;
        }
        let x = match model.plot {
            PlotKind::Bar => {
                let group_width = (right - left) / n as f64;
                left + (i as f64 + 0.5) * group_width
            }
            PlotKind::Line { .. } => {
                if n <= 1 {
                    (left + right) / 2.0
                } else {
                    left + (right - left) * i as f64 / (n - 1) as f64
                }
            }
        };
        let _ = ctx.fill_text(label, x, bottom + 16.0);
    }
}

fn draw_legend(ctx: &CanvasRenderingContext2d, model: &ChartModel, width: f64, height: f64) {
    let item_width = |label: &str| 14.0 + label.len() as f64 * 6.5 + 16.0;
    let total: f64 = model.datasets.iter().map(|d| item_width(&d.label)).sum();
    let mut x = ((width - total) / 2.0).max(8.0);
    let y = height - 12.0;
    ctx.set_font(BASE_FONT);
    for dataset in &model.datasets {
        ctx.set_fill_style_str(dataset.color);
        ctx.fill_rect(x, y - 8.0, 10.0, 10.0);
        ctx.set_fill_style_str(AXIS_TEXT);
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&dataset.label, x + 14.0, y);
        x += item_width(&dataset.label);
    }
}
