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

//! The eleven-day actual/predicted pivot table.
//!
//! The table is wider than its viewport, so the wrapper supports
//! drag-to-scroll and keeps the index and product columns pinned by
//! translating them against the scroll offset.

use demandcast_analytics::PivotGrid;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Dragging scrolls faster than the pointer moves.
const DRAG_SCROLL_MULTIPLIER: f64 = 1.5;
/// Pinned columns sit slightly left of the scroll edge.
const PIN_OFFSET_PX: i32 = 5;

const INDEX_COLUMN_PX: usize = 80;
const PRODUCT_COLUMN_PX: usize = 150;
const DATE_COLUMN_PX: usize = 200;

#[derive(Properties, PartialEq)]
pub struct PivotTableProps {
    pub grid: Rc<PivotGrid>,
}

struct DragState {
    dragging: bool,
    start_x: i32,
    start_scroll: i32,
}

#[function_component(PivotTable)]
pub fn pivot_table(props: &PivotTableProps) -> Html {
    let wrapper = use_node_ref();
    let drag = use_mut_ref(|| DragState {
        dragging: false,
        start_x: 0,
        start_scroll: 0,
    });

    let onscroll = {
        let wrapper = wrapper.clone();
        Callback::from(move |_: Event| {
            if let Some(element) = wrapper.cast::<web_sys::Element>() {
                pin_leading_columns(&element);
            }
        })
    };

    let onmousedown = {
        let wrapper = wrapper.clone();
        let drag = drag.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(element) = wrapper.cast::<web_sys::HtmlElement>() {
                let mut state = drag.borrow_mut();
                state.dragging = true;
                state.start_x = event.page_x() - element.offset_left();
                state.start_scroll = element.scroll_left();
                let _ = element.class_list().add_1("dragging");
            }
        })
    };

    let end_drag = {
        let wrapper = wrapper.clone();
        let drag = drag.clone();
        Callback::from(move |_: MouseEvent| {
            drag.borrow_mut().dragging = false;
            if let Some(element) = wrapper.cast::<web_sys::HtmlElement>() {
                let _ = element.class_list().remove_1("dragging");
            }
        })
    };

    let onmousemove = {
        let wrapper = wrapper.clone();
        let drag = drag.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = wrapper.cast::<web_sys::HtmlElement>() else {
                return;
            };
            let state = drag.borrow();
            if !state.dragging {
                return;
            }
            event.prevent_default();
            let x = event.page_x() - element.offset_left();
            let walk = ((x - state.start_x) as f64 * DRAG_SCROLL_MULTIPLIER) as i32;
            element.set_scroll_left(state.start_scroll - walk);
        })
    };

    if props.grid.is_empty() {
        return html! {
            <p class="text-center text-muted">{ "No data available" }</p>
        };
    }

    let grid = &props.grid;
    let min_width =
        INDEX_COLUMN_PX + PRODUCT_COLUMN_PX + grid.dates.len() * DATE_COLUMN_PX;
    html! {
        <div
            class="table-scroll-x-b"
            ref={wrapper}
            {onscroll}
            {onmousedown}
            {onmousemove}
            onmouseup={end_drag.clone()}
            onmouseleave={end_drag}
        >
            <table class="prediction-table-b" style={format!("min-width: {min_width}px;")}>
                <thead>
                    <tr>
                        <th>{ "#" }</th>
                        <th>{ "Product" }</th>
                        { for grid.dates.iter().map(|date| html! {
                            <th>{ date.clone() }<br />{ "(actual / predicted)" }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    { for grid.rows.iter().enumerate().map(|(i, row)| html! {
                        <tr>
                            <td>{ i + 1 }</td>
                            <td>{ row.product.clone() }</td>
                            { for row.cells.iter().map(|cell| html! {
                                <td>{ format_cell(cell) }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn format_cell(cell: &Option<(f64, f64)>) -> String {
    match cell {
        Some((actual, predicted)) => {
            format!("{:.0} / {:.0}", actual.round(), predicted.round())
        }
        None => "-".to_string(),
    }
}

/// Counter-translates the first two columns so they stay visible while the
/// date columns scroll underneath.
fn pin_leading_columns(wrapper: &web_sys::Element) {
    let offset = wrapper.scroll_left() - PIN_OFFSET_PX;
    let Ok(cells) = wrapper
        .query_selector_all("td:nth-child(1), td:nth-child(2), th:nth-child(1), th:nth-child(2)")
    else {
        return;
    };
    for i in 0..cells.length() {
        let Some(cell) = cells
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let _ = cell
            .style()
            .set_property("transform", &format!("translateX({offset}px)"));
    }
}
