// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked area charts.
//!
//! Series are stacked in insertion order: layer `s` spans from the running total of series
//! `0..s` up to the running total of `0..=s`. The first layer rests on the bottom edge of the
//! plot.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chartgeo_data::Dataset;
use kurbo::{BezPath, Point};
use peniko::Color;

use crate::bezier::{BezierPoint, band_path, curve_path, smooth};
use crate::config::ChartConfig;
use crate::error::DomainError;
use crate::layout::{AxisFrame, ChartLayout};
use crate::line_chart::{markers, polyline};
use crate::scale::ScalePoint;
use crate::symbol::Symbol;

/// Area chart input.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaChartSpec {
    /// Series to stack, bottom first.
    pub data: Dataset,
    /// Draw smooth boundaries instead of polylines.
    pub smooth: bool,
    /// Marker diameter in pixels; zero disables markers.
    pub marker_size: f64,
}

impl AreaChartSpec {
    /// Creates a straight-edged stacked area chart without markers.
    pub fn new(data: Dataset) -> Self {
        Self {
            data,
            smooth: false,
            marker_size: 0.0,
        }
    }

    /// Sets whether boundaries are smoothed.
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Sets the marker diameter.
    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size.max(0.0);
        self
    }

    /// Computes the filled region of every layer.
    pub fn geometry(&self, config: &ChartConfig) -> Result<AreaChartGeometry, DomainError> {
        let stacked = self.data.cumulative();
        let totals = stacked.as_dataset();
        let layout = ChartLayout::arrange(config, true);
        let xs = ScalePoint::new((layout.plot.x0, layout.plot.x1), totals.category_count());
        let frame = AxisFrame::fit(layout, totals, false, |i| xs.x(i))?;
        let baseline = frame.layout.plot.y1;

        let mut layers: Vec<AreaLayer> = Vec::with_capacity(stacked.layers().len());
        for (index, layer) in stacked.layers().iter().enumerate() {
            let top: Vec<Point> = layer
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| Point::new(xs.x(i), frame.y_scale.map(v)))
                .collect();
            let below = layers.last();

            let (curve, outline, fill) = if self.smooth {
                let curve = smooth(&top)?;
                let fill = band_path(&curve, below.and_then(|l| l.curve.as_deref()), baseline);
                let outline = curve_path(&curve);
                (Some(curve), outline, fill)
            } else {
                let outline = polyline(&top);
                let fill = straight_band(&top, below.map(|l| l.top.as_slice()), baseline);
                (None, outline, fill)
            };

            let symbol = Symbol::for_series(index);
            let markers = if self.marker_size > 0.0 {
                markers(symbol, &top, self.marker_size, config.tolerance)
            } else {
                BezPath::new()
            };
            layers.push(AreaLayer {
                index,
                label: layer.label.clone(),
                color: config.scheme.color(index),
                symbol,
                top,
                curve,
                fill,
                outline,
                markers,
            });
        }

        Ok(AreaChartGeometry { frame, layers })
    }
}

/// Closes a polyline against the layer below it, or against the baseline.
fn straight_band(top: &[Point], bottom: Option<&[Point]>, baseline: f64) -> BezPath {
    let mut path = polyline(top);
    let (Some(first), Some(last)) = (top.first(), top.last()) else {
        return path;
    };
    match bottom {
        Some(bottom) if !bottom.is_empty() => {
            for p in bottom.iter().rev() {
                path.line_to(*p);
            }
        }
        _ => {
            path.line_to((last.x, baseline));
            path.line_to((first.x, baseline));
        }
    }
    path.close_path();
    path
}

/// One stacked layer.
#[derive(Clone, Debug)]
pub struct AreaLayer {
    /// Series index.
    pub index: usize,
    /// Series label.
    pub label: String,
    /// Fill color.
    pub color: Color,
    /// Marker shape.
    pub symbol: Symbol,
    /// Upper boundary samples, in category order.
    pub top: Vec<Point>,
    /// Upper boundary control points, when smoothing is on.
    pub curve: Option<Vec<BezierPoint>>,
    /// Closed region between this layer and the one below.
    pub fill: BezPath,
    /// Upper boundary as an open stroke.
    pub outline: BezPath,
    /// Markers on the upper boundary; empty when disabled.
    pub markers: BezPath,
}

/// Output of [`AreaChartSpec::geometry`].
#[derive(Clone, Debug)]
pub struct AreaChartGeometry {
    /// Axes and plot area, scaled to the stacked totals.
    pub frame: AxisFrame,
    /// Layers, bottom first.
    pub layers: Vec<AreaLayer>,
}
