// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouped bar charts.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chartgeo_data::Dataset;
use kurbo::Rect;
use peniko::Color;

use crate::config::ChartConfig;
use crate::error::DomainError;
use crate::layout::{AxisFrame, ChartLayout};
use crate::scale::ScaleBand;

/// Bar chart input.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartSpec {
    /// Values; one bar per (series, category).
    pub data: Dataset,
    /// Stretch the value range to include zero.
    pub include_zero: bool,
    /// Horizontal space left between neighboring category groups.
    pub bar_gap: f64,
}

impl BarChartSpec {
    /// Creates a bar chart with zero included and a 20px group gap.
    pub fn new(data: Dataset) -> Self {
        Self {
            data,
            include_zero: true,
            bar_gap: 20.0,
        }
    }

    /// Sets whether the value range is stretched to include zero.
    pub fn with_include_zero(mut self, include_zero: bool) -> Self {
        self.include_zero = include_zero;
        self
    }

    /// Sets the gap between category groups.
    pub fn with_bar_gap(mut self, bar_gap: f64) -> Self {
        self.bar_gap = bar_gap.max(0.0);
        self
    }

    /// Places every bar.
    ///
    /// Each category gets an equal slot. Its bars sit side by side, centered in the slot, and
    /// grow from the zero line (clamped into the value range) toward their value.
    pub fn geometry(&self, config: &ChartConfig) -> Result<BarChartGeometry, DomainError> {
        let data = &self.data;
        let layout = ChartLayout::arrange(config, true);
        let band = ScaleBand::new((layout.plot.x0, layout.plot.x1), data.category_count());
        let frame = AxisFrame::fit(layout, data, self.include_zero, |i| band.center(i))?;

        let group = (band.band_width() - self.bar_gap).max(0.0);
        let bar_width = match data.series_count() {
            0 => 0.0,
            n => group / n as f64,
        };
        let scale = &frame.y_scale;
        let baseline = scale.map_clamped(0.0);

        let mut bars = Vec::with_capacity(data.series_count() * data.category_count());
        for (s, series) in data.series().iter().enumerate() {
            let color = config.scheme.color(s);
            for (c, &value) in series.values.iter().enumerate() {
                let x = band.center(c) - 0.5 * group + bar_width * s as f64;
                let y = scale.map(value);
                bars.push(BarRect {
                    series: s,
                    category: c,
                    value,
                    rect: Rect::new(x, y.min(baseline), x + bar_width, y.max(baseline)),
                    color,
                });
            }
        }

        Ok(BarChartGeometry {
            frame,
            baseline,
            series: data.series().iter().map(|s| s.label.clone()).collect(),
            bars,
        })
    }
}

/// One placed bar.
#[derive(Clone, Debug)]
pub struct BarRect {
    /// Series index.
    pub series: usize,
    /// Category index.
    pub category: usize,
    /// Data value.
    pub value: f64,
    /// Bar extent; always has non-negative width and height.
    pub rect: Rect,
    /// Fill color.
    pub color: Color,
}

/// Output of [`BarChartSpec::geometry`].
#[derive(Clone, Debug)]
pub struct BarChartGeometry {
    /// Axes and plot area.
    pub frame: AxisFrame,
    /// Pixel y of the bars' common edge.
    pub baseline: f64,
    /// Series labels; bars of series `i` use palette color `i`.
    pub series: Vec<String>,
    /// Bars, series by series.
    pub bars: Vec<BarRect>,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use chartgeo_data::Series;

    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            ["Q1", "Q2", "Q3"],
            vec![
                Series::new("north", [4.0, 9.0, 6.0]),
                Series::new("south", [2.0, 5.0, 8.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn bars_share_the_zero_baseline() {
        let geometry = BarChartSpec::new(sample())
            .geometry(&ChartConfig::default())
            .unwrap();
        let plot = geometry.frame.layout.plot;
        assert_eq!(geometry.baseline, plot.y1);
        assert_eq!(geometry.bars.len(), 6);
        for bar in &geometry.bars {
            assert!((bar.rect.y1 - plot.y1).abs() < 1e-9, "{bar:?}");
            assert!(bar.rect.height() > 0.0);
        }
        // The tallest value reaches the top of the plot.
        let tallest = geometry
            .bars
            .iter()
            .find(|b| b.value == 9.0)
            .unwrap();
        assert!((tallest.rect.y0 - plot.y0).abs() < 1e-9);
    }

    #[test]
    fn groups_are_centered_in_their_slots() {
        let config = ChartConfig::default();
        let geometry = BarChartSpec::new(sample()).geometry(&config).unwrap();
        let plot = geometry.frame.layout.plot;
        // 710px over 3 categories, minus a 20px gap, split across 2 series.
        let slot = plot.width() / 3.0;
        let bar_width = (slot - 20.0) / 2.0;
        for bar in &geometry.bars {
            assert!((bar.rect.width() - bar_width).abs() < 1e-9);
        }
        let first = &geometry.bars[0];
        let second = &geometry.bars[3];
        assert_eq!(first.category, 0);
        assert_eq!(second.series, 1);
        assert!((first.rect.x0 - (plot.x0 + 10.0)).abs() < 1e-9);
        assert!((second.rect.x0 - first.rect.x1).abs() < 1e-9);
        let center = 0.5 * (first.rect.x0 + second.rect.x1);
        assert!((center - geometry.frame.x_ticks[0].position).abs() < 1e-9);
    }

    #[test]
    fn negative_values_hang_below_zero() {
        let data = Dataset::new(["a", "b"], vec![Series::new("s", [-3.0, 6.0])]).unwrap();
        let geometry = BarChartSpec::new(data)
            .geometry(&ChartConfig::default())
            .unwrap();
        let scale = &geometry.frame.y_scale;
        let zero = scale.map(0.0);
        assert_eq!(geometry.baseline, zero);
        let neg = &geometry.bars[0];
        let pos = &geometry.bars[1];
        assert!((neg.rect.y0 - zero).abs() < 1e-9 && neg.rect.y1 > zero);
        assert!((pos.rect.y1 - zero).abs() < 1e-9 && pos.rect.y0 < zero);
    }

    #[test]
    fn bars_use_series_colors() {
        let config = ChartConfig::default();
        let geometry = BarChartSpec::new(sample()).geometry(&config).unwrap();
        for bar in &geometry.bars {
            assert_eq!(
                bar.color.to_rgba8(),
                config.scheme.color(bar.series).to_rgba8()
            );
        }
    }

    #[test]
    fn constant_data_without_zero_fails() {
        let data = Dataset::new(["a", "b"], vec![Series::new("s", [5.0, 5.0])]).unwrap();
        let err = BarChartSpec::new(data)
            .with_include_zero(false)
            .geometry(&ChartConfig::default())
            .unwrap_err();
        assert_eq!(err, DomainError::DegenerateRange { min: 5.0, max: 5.0 });
    }
}
