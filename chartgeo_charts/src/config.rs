// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-wide configuration shared by every chart kind.

use crate::color::ColorScheme;
use crate::layout::Size;

/// Pixel margins reserved around the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Height of the band above the plot (legend and title).
    pub header: f64,
    /// Width reserved for y-axis tick labels.
    pub y_axis: f64,
    /// Height reserved for x-axis category labels.
    pub x_axis: f64,
    /// Blank space to the right of the plot.
    pub right: f64,
    /// Space between the plot and its axes.
    pub gap: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            header: 30.0,
            y_axis: 50.0,
            x_axis: 50.0,
            right: 20.0,
            gap: 10.0,
        }
    }
}

impl Margins {
    /// Sets the header height.
    pub fn with_header(mut self, header: f64) -> Self {
        self.header = header.max(0.0);
        self
    }

    /// Sets the axis label margins.
    pub fn with_axes(mut self, y_axis: f64, x_axis: f64) -> Self {
        self.y_axis = y_axis.max(0.0);
        self.x_axis = x_axis.max(0.0);
        self
    }
}

/// Immutable configuration for one render pass.
///
/// Chart geometry builders take this by reference; nothing in it is mutated during layout.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Outer size of the chart.
    pub size: Size,
    /// Margins around the plot.
    pub margins: Margins,
    /// Colors.
    pub scheme: ColorScheme,
    /// Flattening tolerance for curved outlines (pie sectors, markers).
    pub tolerance: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: Size {
                width: 800.0,
                height: 500.0,
            },
            margins: Margins::default(),
            scheme: ColorScheme::default(),
            tolerance: 0.1,
        }
    }
}

impl ChartConfig {
    /// Sets the outer chart size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size { width, height };
        self
    }

    /// Sets the plot margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the color scheme.
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
