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

//! Tiered y-axis scaling.
//!
//! Each chart kind carries a tier table mapping the largest plotted value to
//! a tick step; the axis ceiling is then rounded up past the maximum so the
//! tallest bar never touches the chart top.

/// A tier table: `(upper_bound, step)` pairs checked in order, with a
/// fallback step once every bound is exceeded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTiers {
    tiers: &'static [(f64, f64)],
    fallback: f64,
}

/// Volume-scale axes (ensemble prediction bars).
pub const VOLUME_TIERS: AxisTiers = AxisTiers::new(
    &[
        (50.0, 10.0),
        (200.0, 20.0),
        (500.0, 50.0),
        (1000.0, 100.0),
        (2000.0, 200.0),
    ],
    500.0,
);

/// Percent-scale metric axes (ensemble MAE/SMAPE/accuracy bars).
pub const METRIC_TIERS: AxisTiers = AxisTiers::new(&[(50.0, 10.0), (200.0, 20.0)], 50.0);

/// Small-error axes (random-forest MAE bars).
pub const ERROR_TIERS: AxisTiers = AxisTiers::new(&[(10.0, 2.0), (50.0, 5.0)], 10.0);

impl AxisTiers {
    pub const fn new(tiers: &'static [(f64, f64)], fallback: f64) -> Self {
        Self { tiers, fallback }
    }

    /// Tick step for a given data maximum.
    pub fn step_for(&self, max: f64) -> f64 {
        for (bound, step) in self.tiers {
            if max <= *bound {
                return *step;
            }
        }
        self.fallback
    }

    /// `(step, ceiling)` for a given data maximum. The ceiling is a multiple
    /// of the step and strictly above the maximum.
    pub fn axis_for(&self, max: f64) -> (f64, f64) {
        let step = self.step_for(max);
        (step, (max / step + 1.0).ceil() * step)
    }
}

/// Largest plotted value, `0.0` for an empty set.
pub fn plot_max<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(0.0, f64::max)
}
