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

use crate::routing::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();
    let onclick = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Dashboard);
        }
    });
    html! {
        <div class="home-hero">
            <h1>{ "Demandcast" }</h1>
            <p>{ "Order volume forecasts from the ensemble and random forest pipelines." }</p>
            <button class="hero-button" {onclick}>{ "Open dashboard" }</button>
        </div>
    }
}
