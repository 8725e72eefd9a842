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

//! Pure data pipeline for the demandcast dashboard.
//!
//! Everything here is plain Rust over [`demandcast_types`] records, with no
//! DOM or async dependencies, so the whole pipeline is exercised by native
//! `cargo test`. The UI crate feeds fetched records in and renders the
//! returned structures.
//!
//! - [`stats`]: metric means and percent formatting for the stat badges
//! - [`scale`]: tiered axis step/ceiling policy for chart y-axes
//! - [`series`]: date parsing, month filtering, duplicate-date collapsing
//! - [`pivot`]: the fixed 11-day comparison grid and the recent-dates grid

pub mod pivot;
pub mod scale;
pub mod series;
pub mod stats;

pub use pivot::{build_pivot, build_recent, PivotGrid, PivotRow, RecentGrid, RecentRow};
pub use scale::AxisTiers;
pub use series::{monthly_series, DailyPoint};
pub use stats::{format_percent, mean, summarize, StatValue};
