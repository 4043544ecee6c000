// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line charts, straight or smoothed.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chartgeo_data::Dataset;
use kurbo::{BezPath, Point};
use peniko::Color;

use crate::bezier::{BezierPoint, curve_path, smooth};
use crate::config::ChartConfig;
use crate::error::DomainError;
use crate::layout::{AxisFrame, ChartLayout};
use crate::scale::ScalePoint;
use crate::symbol::Symbol;

/// Line chart input.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChartSpec {
    /// One line per series.
    pub data: Dataset,
    /// Stretch the value range to include zero.
    pub include_zero: bool,
    /// Draw smooth curves instead of polylines.
    pub smooth: bool,
    /// Marker diameter in pixels.
    pub marker_size: f64,
}

impl LineChartSpec {
    /// Creates a straight-line chart fitted tightly to its values.
    pub fn new(data: Dataset) -> Self {
        Self {
            data,
            include_zero: false,
            smooth: false,
            marker_size: 8.0,
        }
    }

    /// Sets whether the value range is stretched to include zero.
    pub fn with_include_zero(mut self, include_zero: bool) -> Self {
        self.include_zero = include_zero;
        self
    }

    /// Sets whether lines are smoothed.
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Sets the marker diameter.
    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size.max(0.0);
        self
    }

    /// Computes one stroked path per series.
    ///
    /// The first category sits on the plot's left edge and the last on its right edge.
    pub fn geometry(&self, config: &ChartConfig) -> Result<LineChartGeometry, DomainError> {
        let data = &self.data;
        let layout = ChartLayout::arrange(config, true);
        let xs = ScalePoint::new((layout.plot.x0, layout.plot.x1), data.category_count());
        let frame = AxisFrame::fit(layout, data, self.include_zero, |i| xs.x(i))?;

        let series = data
            .series()
            .iter()
            .enumerate()
            .map(|(index, s)| {
                let points: Vec<Point> = s
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Point::new(xs.x(i), frame.y_scale.map(v)))
                    .collect();
                let symbol = Symbol::for_series(index);
                let (curve, path) = if self.smooth {
                    let curve = smooth(&points)?;
                    let path = curve_path(&curve);
                    (Some(curve), path)
                } else {
                    (None, polyline(&points))
                };
                Ok(LineSeries {
                    index,
                    label: s.label.clone(),
                    color: config.scheme.color(index),
                    symbol,
                    markers: markers(symbol, &points, self.marker_size, config.tolerance),
                    points,
                    curve,
                    path,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(LineChartGeometry { frame, series })
    }
}

/// Joins `points` with straight segments.
pub(crate) fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

/// One marker subpath per point.
pub(crate) fn markers(symbol: Symbol, points: &[Point], size: f64, tolerance: f64) -> BezPath {
    let mut path = BezPath::new();
    for p in points {
        path.extend(symbol.path(*p, size, tolerance));
    }
    path
}

/// One laid-out series.
#[derive(Clone, Debug)]
pub struct LineSeries {
    /// Series index.
    pub index: usize,
    /// Series label.
    pub label: String,
    /// Stroke color.
    pub color: Color,
    /// Marker shape.
    pub symbol: Symbol,
    /// Sample positions, in category order.
    pub points: Vec<Point>,
    /// Control points, when smoothing is on.
    pub curve: Option<Vec<BezierPoint>>,
    /// Line outline.
    pub path: BezPath,
    /// Markers at every sample.
    pub markers: BezPath,
}

/// Output of [`LineChartSpec::geometry`].
#[derive(Clone, Debug)]
pub struct LineChartGeometry {
    /// Axes and plot area.
    pub frame: AxisFrame,
    /// Lines, in series order.
    pub series: Vec<LineSeries>,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use chartgeo_data::Series;
    use kurbo::PathEl;

    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            ["mon", "tue", "wed", "thu"],
            vec![
                Series::new("cpu", [12.0, 30.0, 22.0, 41.0]),
                Series::new("io", [5.0, 7.0, 19.0, 8.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn points_span_the_plot_width() {
        let geometry = LineChartSpec::new(sample())
            .geometry(&ChartConfig::default())
            .unwrap();
        let plot = geometry.frame.layout.plot;
        for line in &geometry.series {
            assert_eq!(line.points.len(), 4);
            assert_eq!(line.points[0].x, plot.x0);
            assert!((line.points[3].x - plot.x1).abs() < 1e-9);
            assert!(line.curve.is_none());
        }
        // Without zero clamping the extremes touch the plot edges.
        let top = geometry.series[0].points[3];
        assert!((top.y - plot.y0).abs() < 1e-9);
        let bottom = geometry.series[1].points[0];
        assert!((bottom.y - plot.y1).abs() < 1e-9);
    }

    #[test]
    fn straight_lines_are_polylines() {
        let geometry = LineChartSpec::new(sample())
            .geometry(&ChartConfig::default())
            .unwrap();
        let line = &geometry.series[1];
        let els = line.path.elements();
        assert_eq!(els.len(), 4);
        assert_eq!(els[0], PathEl::MoveTo(line.points[0]));
        assert_eq!(els[3], PathEl::LineTo(line.points[3]));
        assert_eq!(line.symbol, Symbol::Square);
    }

    #[test]
    fn smoothing_produces_cubic_segments() {
        let geometry = LineChartSpec::new(sample())
            .with_smooth(true)
            .geometry(&ChartConfig::default())
            .unwrap();
        let line = &geometry.series[0];
        let curve = line.curve.as_ref().unwrap();
        assert_eq!(curve.len(), 4);
        let cubics = line
            .path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::CurveTo(..)))
            .count();
        assert_eq!(cubics, 3);
        assert_eq!(curve[0].before_ctl_y, curve[0].y);
    }

    #[test]
    fn smoothing_a_single_category_is_an_error() {
        let data = Dataset::new(["only"], vec![Series::new("s", [1.0])]).unwrap();
        let err = LineChartSpec::new(data)
            .with_include_zero(true)
            .with_smooth(true)
            .geometry(&ChartConfig::default())
            .unwrap_err();
        assert_eq!(err, DomainError::TooFewPoints { found: 1 });
    }

    #[test]
    fn markers_sit_on_every_sample() {
        let geometry = LineChartSpec::new(sample())
            .geometry(&ChartConfig::default())
            .unwrap();
        let line = &geometry.series[1];
        let moves = line
            .markers
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 4);
    }
}
