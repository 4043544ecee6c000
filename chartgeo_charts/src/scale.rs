// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value and category scales.
//!
//! [`AxisScale`] is the y-axis workhorse: it fits a "nice" tick interval to a dataset and maps
//! values into pixel space with larger values toward the top. [`ScaleBand`] and [`ScalePoint`]
//! place categories along x.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use chartgeo_data::Dataset;

use crate::error::DomainError;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A single gridline: its value, display label and pixel coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Value in data units.
    pub value: f64,
    /// Label text.
    pub label: String,
    /// Position along the scale's pixel axis.
    pub pixel: f64,
}

/// A linear value-to-pixel mapping with a nice tick interval.
///
/// `map(max)` lands on `pixel_start` and `map(min)` on `pixel_end`, so on a screen with y
/// growing downward the largest value is drawn at the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    min: f64,
    max: f64,
    interval: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl AxisScale {
    /// Fits a scale to every value in `data`.
    ///
    /// With `include_zero`, the fitted range is stretched to contain 0.
    pub fn fit(
        pixel_start: f64,
        pixel_end: f64,
        data: &Dataset,
        include_zero: bool,
    ) -> Result<Self, DomainError> {
        Self::fit_values(pixel_start, pixel_end, data.values(), include_zero)
    }

    /// Fits a scale to an arbitrary set of values.
    pub fn fit_values(
        pixel_start: f64,
        pixel_end: f64,
        values: impl IntoIterator<Item = f64>,
        include_zero: bool,
    ) -> Result<Self, DomainError> {
        if pixel_start.partial_cmp(&pixel_end) != Some(Ordering::Less) {
            return Err(DomainError::EmptyPixelRange {
                start: pixel_start,
                end: pixel_end,
            });
        }

        let mut range: Option<(f64, f64)> = None;
        for v in values {
            if !v.is_finite() {
                return Err(DomainError::NonFiniteValue { value: v });
            }
            range = Some(match range {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        let Some((mut min, mut max)) = range else {
            return Err(DomainError::EmptyDataset);
        };

        if include_zero {
            if min > 0.0 {
                min = 0.0;
            }
            if max < 0.0 {
                max = 0.0;
            }
        }

        let diff = max - min;
        if diff <= 0.0 {
            return Err(DomainError::DegenerateRange { min, max });
        }
        if !diff.is_finite() {
            return Err(DomainError::RangeOverflow { min, max });
        }

        let interval = nice_interval(diff);
        crate::log::debug!(min, max, interval, "fitted axis scale");

        Ok(Self {
            min,
            max,
            interval,
            pixel_start,
            pixel_end,
        })
    }

    /// Returns the lower end of the fitted range.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper end of the fitted range.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the gridline spacing in data units.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Returns `(pixel_start, pixel_end)`.
    pub fn pixel_range(&self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    /// Maps a value into pixel space.
    pub fn map(&self, value: f64) -> f64 {
        let t = (value - self.min) / (self.max - self.min);
        self.pixel_start + (self.pixel_end - self.pixel_start) * (1.0 - t)
    }

    /// Maps `value` after clamping it into the fitted range.
    ///
    /// Bars use this for their baseline so that a zero outside the range sits on the axis edge.
    pub fn map_clamped(&self, value: f64) -> f64 {
        self.map(value.clamp(self.min, self.max))
    }

    /// Returns the gridline values.
    ///
    /// These are the multiples of the interval strictly between `min` and `max`, in increasing
    /// order.
    pub fn tick_values(&self) -> Vec<f64> {
        let first = (self.min / self.interval).floor() + 1.0;
        let mut out = Vec::new();
        let mut k = 0.0;
        loop {
            let v = (first + k) * self.interval;
            if v >= self.max {
                break;
            }
            // Rounding in `min / interval` can land the first multiple on `min` itself.
            if v > self.min {
                out.push(v);
            }
            k += 1.0;
        }
        out
    }

    /// Returns labelled, positioned gridlines.
    pub fn ticks(&self) -> Vec<Tick> {
        let decimals = label_decimals(self.interval);
        self.tick_values()
            .into_iter()
            .map(|value| Tick {
                value,
                label: format!("{value:.decimals$}"),
                pixel: self.map(value),
            })
            .collect()
    }
}

/// Fits a scale and returns its ticks alongside it.
///
/// The returned scale doubles as the value-to-pixel function via [`AxisScale::map`].
pub fn compute_scale(
    pixel_start: f64,
    pixel_end: f64,
    data: &Dataset,
    include_zero: bool,
) -> Result<(Vec<Tick>, AxisScale), DomainError> {
    let scale = AxisScale::fit(pixel_start, pixel_end, data, include_zero)?;
    Ok((scale.ticks(), scale))
}

/// Picks a gridline interval from `{1, 2, 5} × 10^k` for a positive value span.
///
/// With `log10(diff) = p + f` (`p` integer, `0 <= f < 1`): `f < 0.3` gives `10^p / 5`,
/// `f < 0.7` gives `10^p / 2`, otherwise `10^p`.
pub fn nice_interval(diff: f64) -> f64 {
    let log = diff.log10();
    let p = log.floor();
    let f = log - p;
    let base = 10_f64.powi(to_exponent(p));
    if f < 0.3 {
        base / 5.0
    } else if f < 0.7 {
        base / 2.0
    } else {
        base
    }
}

fn to_exponent(p: f64) -> i32 {
    let p = p.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        p as i32
    }
}

/// Number of decimals needed to print multiples of `interval` exactly.
fn label_decimals(interval: f64) -> usize {
    let e = -interval.log10().floor();
    if e <= 0.0 {
        return 0;
    }
    let e = e.min(17.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "positive and capped at f64's decimal precision"
    )]
    {
        e as usize
    }
}

/// A discrete band scale for categorical charts.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`, without padding.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the left edge of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }

    /// Returns the center of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + 0.5 * self.band_width()
    }
}

/// A discrete point scale (like band without width).
#[derive(Clone, Copy, Debug)]
pub struct ScalePoint {
    range: (f64, f64),
    count: usize,
    padding: f64,
}

impl ScalePoint {
    /// Creates a new point scale with the first and last points on the range ends.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding: 0.0,
        }
    }

    /// Sets the outer padding in point steps.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Returns the distance between neighboring points.
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 1.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = (n - 1.0) + 2.0 * self.padding;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the x-position for a point at `index`.
    ///
    /// A single point sits in the middle of the range.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        if self.count <= 1 {
            return 0.5 * (r0 + r1);
        }
        let step = self.step();
        let start = if r1 >= r0 { r0 } else { r1 };
        start + self.padding * step + step * index as f64
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use chartgeo_data::Series;

    use super::*;

    fn dataset(values: &[f64]) -> Dataset {
        let categories: Vec<String> = (0..values.len()).map(|i| format!("c{i}")).collect();
        Dataset::new(categories, vec![Series::new("s", values.to_vec())]).unwrap()
    }

    #[test]
    fn unit_interval_for_zero_to_nine() {
        let data = dataset(&[0.0, 3.0, 7.0, 9.0]);
        let (ticks, scale) = compute_scale(0.0, 100.0, &data, false).unwrap();
        assert_eq!(scale.interval(), 1.0);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert!((scale.map(9.0) - 0.0).abs() < 1e-9);
        assert!((scale.map(0.0) - 100.0).abs() < 1e-9);
        assert_eq!(ticks[0].label, "1");
    }

    #[test]
    fn interval_thresholds() {
        // log10(1.5) = 0.176 -> 1/5
        assert!((nice_interval(1.5) - 0.2).abs() < 1e-12);
        // log10(3) = 0.477 -> 1/2
        assert!((nice_interval(3.0) - 0.5).abs() < 1e-12);
        // log10(80) = 1.903 -> 10
        assert!((nice_interval(80.0) - 10.0).abs() < 1e-12);
        // log10(0.09) = -1.046 -> p = -2, f = 0.954 -> 0.01
        assert!((nice_interval(0.09) - 0.01).abs() < 1e-15);
        // log10(1200) = 3.079 -> 200
        assert!((nice_interval(1200.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn interval_is_a_nice_number() {
        let mut diff = 0.0013;
        while diff < 1e7 {
            let interval = nice_interval(diff);
            let mantissa = interval / 10_f64.powi(to_exponent(interval.log10().floor()));
            assert!(
                [1.0, 2.0, 5.0].iter().any(|m| (mantissa - m).abs() < 1e-9),
                "interval {interval} for diff {diff} has mantissa {mantissa}"
            );
            diff *= 1.37;
        }
    }

    #[test]
    fn ticks_are_monotonic_evenly_spaced_and_inside_the_range() {
        let samples: &[&[f64]] = &[
            &[0.0, 9.0],
            &[-3.2, 17.9],
            &[0.6, 1.4],
            &[1000.0, 1013.0],
            &[-0.004, -0.001],
            &[42.0, 42.5, 45.1, 39.9],
        ];
        for values in samples {
            let data = dataset(values);
            let scale = AxisScale::fit(10.0, 310.0, &data, false).unwrap();
            let ticks = scale.tick_values();
            assert!(!ticks.is_empty(), "no ticks for {values:?}");
            for t in &ticks {
                assert!(
                    *t > scale.min() && *t < scale.max(),
                    "tick {t} outside ({}, {})",
                    scale.min(),
                    scale.max()
                );
            }
            for pair in ticks.windows(2) {
                assert!(pair[1] > pair[0], "ticks not increasing: {pair:?}");
                let step = pair[1] - pair[0];
                assert!(
                    (step - scale.interval()).abs() < 1e-9 * scale.interval().max(1.0),
                    "step {step} != interval {}",
                    scale.interval()
                );
            }
        }
    }

    #[test]
    fn mapping_hits_pixel_ends_and_decreases() {
        let data = dataset(&[-5.0, 12.0, 3.0]);
        let scale = AxisScale::fit(20.0, 220.0, &data, false).unwrap();
        assert!((scale.map(scale.min()) - 220.0).abs() < 1e-9);
        assert!((scale.map(scale.max()) - 20.0).abs() < 1e-9);
        assert!(scale.map(0.0) > scale.map(1.0));
        let mid = scale.map(0.5 * (scale.min() + scale.max()));
        assert!((mid - 120.0).abs() < 1e-9);
    }

    #[test]
    fn include_zero_stretches_the_range() {
        let positive = dataset(&[4.0, 8.0]);
        let scale = AxisScale::fit(0.0, 100.0, &positive, true).unwrap();
        assert_eq!((scale.min(), scale.max()), (0.0, 8.0));

        let negative = dataset(&[-4.0, -8.0]);
        let scale = AxisScale::fit(0.0, 100.0, &negative, true).unwrap();
        assert_eq!((scale.min(), scale.max()), (-8.0, 0.0));

        let scale = AxisScale::fit(0.0, 100.0, &positive, false).unwrap();
        assert_eq!((scale.min(), scale.max()), (4.0, 8.0));
    }

    #[test]
    fn constant_data_is_a_domain_error() {
        let data = dataset(&[3.0, 3.0, 3.0]);
        assert_eq!(
            AxisScale::fit(0.0, 100.0, &data, false),
            Err(DomainError::DegenerateRange { min: 3.0, max: 3.0 })
        );
        // Zero clamping rescues a constant non-zero series.
        assert!(AxisScale::fit(0.0, 100.0, &data, true).is_ok());
    }

    #[test]
    fn finite_values_with_an_overflowing_span_are_rejected() {
        assert_eq!(
            AxisScale::fit_values(0.0, 100.0, [-1e308, 0.0, 1e308], false),
            Err(DomainError::RangeOverflow {
                min: -1e308,
                max: 1e308,
            })
        );
        // A span just inside f64 still maps both ends onto the pixel range.
        let scale = AxisScale::fit_values(0.0, 100.0, [-8e307, 8e307], false).unwrap();
        assert!(scale.interval().is_finite());
        assert!((scale.map(scale.max()) - 0.0).abs() < 1e-9);
        assert!((scale.map(scale.min()) - 100.0).abs() < 1e-9);
        assert!(!scale.ticks().is_empty());
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let data = Dataset::new(["a"], Vec::new()).unwrap();
        assert_eq!(
            AxisScale::fit(0.0, 100.0, &data, false),
            Err(DomainError::EmptyDataset)
        );
        assert!(matches!(
            AxisScale::fit_values(50.0, 50.0, [1.0, 2.0], false),
            Err(DomainError::EmptyPixelRange { .. })
        ));
        assert!(matches!(
            AxisScale::fit_values(0.0, 50.0, [1.0, f64::INFINITY], false),
            Err(DomainError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn labels_use_the_interval_precision() {
        let data = dataset(&[0.0, 1.5]);
        let scale = AxisScale::fit(0.0, 100.0, &data, false).unwrap();
        let labels: Vec<String> = scale.ticks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["0.2", "0.4", "0.6", "0.8", "1.0", "1.2", "1.4"]);
    }

    #[test]
    fn band_centers_split_the_range_evenly() {
        let band = ScaleBand::new((0.0, 300.0), 3);
        assert_eq!(band.band_width(), 100.0);
        assert_eq!(band.x(1), 100.0);
        assert_eq!(band.center(2), 250.0);
    }

    #[test]
    fn point_scale_spans_the_range() {
        let scale = ScalePoint::new((10.0, 110.0), 5);
        assert_eq!(scale.x(0), 10.0);
        assert_eq!(scale.x(4), 110.0);
        assert_eq!(scale.step(), 25.0);
        assert_eq!(ScalePoint::new((10.0, 110.0), 1).x(0), 60.0);
    }
}
