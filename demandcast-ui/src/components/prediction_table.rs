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

use demandcast_analytics::RecentGrid;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionTableProps {
    pub grid: Rc<RecentGrid>,
}

/// Wide table of the last predictions per product, one column per forecast
/// day. Products missing a date show a dash.
#[function_component(PredictionTable)]
pub fn prediction_table(props: &PredictionTableProps) -> Html {
    let grid = &props.grid;
    html! {
        <table class="prediction-table-a">
            <thead>
                <tr>
                    <th>{ "#" }</th>
                    <th>{ "Product" }</th>
                    { for grid.dates.iter().enumerate().map(|(i, date)| html! {
                        <th>{ format!("{date} (T+{})", i + 1) }</th>
                    }) }
                </tr>
            </thead>
            <tbody>
                { for grid.rows.iter().enumerate().map(|(i, row)| html! {
                    <tr>
                        <td>{ i + 1 }</td>
                        <td>{ row.product.clone() }</td>
                        { for row.cells.iter().map(|cell| html! {
                            <td>{ cell.map(format_volume).unwrap_or_else(|| "-".to_string()) }</td>
                        }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn format_volume(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
