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

//! Shared record types for the demandcast dashboard.
//!
//! The forecasting backend serves CSV-derived JSON, so numeric fields may
//! arrive as numbers, as strings, or not at all. Everything numeric goes
//! through [`numeric::lenient_f64`] and coerces to `0.0` rather than failing
//! the whole payload.

pub mod numeric;
pub mod records;

pub use numeric::{coerce_f64, lenient_f64};
pub use records::{ForecastRecord, MetricKey, MetricsRecord};
