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

//! Browser UI for the demandcast forecasting dashboard.
//!
//! Data shaping lives in [`demandcast_analytics`]; this crate fetches the
//! forecast endpoints, drives the staged chart/table reveal, and renders
//! everything with Yew.

pub mod api;
pub mod charts;
pub mod components;
pub mod constants;
pub mod family;
pub mod pages;
pub mod routing;
