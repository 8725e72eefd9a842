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

use crate::constants::PRODUCT_GROUPS;
use yew::prelude::*;

/// One row of product-group buttons. Exactly one is active; selecting a
/// group is reported upward so the owning tab can re-render everything.
#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub id: &'static str,
    pub active: usize,
    pub on_select: Callback<usize>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    html! {
        <div class="filter-tabs" id={props.id}>
            { for PRODUCT_GROUPS.iter().enumerate().map(|(index, group)| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(index));
                html! {
                    <button
                        class={classes!("filter-button", (index == props.active).then_some("active"))}
                        data-group={*group}
                        {onclick}
                    >
                        { format!("{group}~") }
                    </button>
                }
            }) }
        </div>
    }
}
