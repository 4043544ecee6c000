// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot-area arrangement.
//!
//! Every chart reserves a header band across the top. Charts with axes also reserve a y-axis
//! margin on the left and an x-axis margin at the bottom; the rest is the plot rectangle that
//! marks are drawn into.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chartgeo_data::Dataset;
use kurbo::Rect;

use crate::config::ChartConfig;
use crate::error::DomainError;
use crate::scale::{AxisScale, Tick};

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// Band above the plot.
    pub header: Rect,
    /// The rectangle marks are drawn into.
    pub plot: Rect,
    /// Reserved rectangle for y tick labels (if the chart has axes).
    pub y_axis: Option<Rect>,
    /// Reserved rectangle for x category labels (if the chart has axes).
    pub x_axis: Option<Rect>,
}

impl ChartLayout {
    /// Computes a layout for `config`.
    ///
    /// Without axes the plot is the area under the header, inset by the margin gap.
    pub fn arrange(config: &ChartConfig, with_axes: bool) -> Self {
        let w = config.size.width.max(0.0);
        let h = config.size.height.max(0.0);
        let m = &config.margins;
        let header_h = m.header.max(0.0).min(h);
        let gap = m.gap.max(0.0);

        let view = Rect::new(0.0, 0.0, w, h);
        let header = Rect::new(0.0, 0.0, w, header_h);

        if !with_axes {
            let plot = inset(Rect::new(0.0, header_h, w, h), gap);
            return Self {
                view,
                header,
                plot,
                y_axis: None,
                x_axis: None,
            };
        }

        let left = m.y_axis.max(0.0) + gap;
        let right = (w - m.right.max(0.0) - gap).max(left);
        let bottom = (h - m.x_axis.max(0.0) - gap).max(header_h);
        let plot = Rect::new(left, header_h, right, bottom);

        Self {
            view,
            header,
            plot,
            y_axis: Some(Rect::new(0.0, plot.y0, m.y_axis.max(0.0), plot.y1)),
            x_axis: Some(Rect::new(plot.x0, (plot.y1 + gap).min(h), plot.x1, h)),
        }
    }
}

/// Shrinks `rect` by `amount` on every side, never past its center.
fn inset(rect: Rect, amount: f64) -> Rect {
    let dx = amount.min(0.5 * rect.width());
    let dy = amount.min(0.5 * rect.height());
    Rect::new(rect.x0 + dx, rect.y0 + dy, rect.x1 - dx, rect.y1 - dy)
}

/// A category label and its x position.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTick {
    /// Category label.
    pub label: String,
    /// Pixel x of the label's anchor.
    pub position: f64,
}

/// Axis furniture shared by bar, line and area charts.
#[derive(Clone, Debug)]
pub struct AxisFrame {
    /// Arranged rectangles.
    pub layout: ChartLayout,
    /// Value scale along y.
    pub y_scale: AxisScale,
    /// Horizontal gridlines.
    pub y_ticks: Vec<Tick>,
    /// Category labels along x.
    pub x_ticks: Vec<CategoryTick>,
}

impl AxisFrame {
    /// Fits a value scale to `data` over the plot's height.
    ///
    /// `x_of` gives the pixel x of each category label.
    pub(crate) fn fit(
        layout: ChartLayout,
        data: &Dataset,
        include_zero: bool,
        x_of: impl Fn(usize) -> f64,
    ) -> Result<Self, DomainError> {
        let y_scale = AxisScale::fit(layout.plot.y0, layout.plot.y1, data, include_zero)?;
        let x_ticks = data
            .categories()
            .iter()
            .enumerate()
            .map(|(i, label)| CategoryTick {
                label: label.clone(),
                position: x_of(i),
            })
            .collect();
        Ok(Self {
            layout,
            y_ticks: y_scale.ticks(),
            y_scale,
            x_ticks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_reserve_margins_around_the_plot() {
        let config = ChartConfig::default();
        let layout = ChartLayout::arrange(&config, true);
        assert_eq!(layout.view, Rect::new(0.0, 0.0, 800.0, 500.0));
        assert_eq!(layout.header, Rect::new(0.0, 0.0, 800.0, 30.0));
        assert_eq!(layout.plot, Rect::new(60.0, 30.0, 770.0, 440.0));
        assert_eq!(layout.y_axis, Some(Rect::new(0.0, 30.0, 50.0, 440.0)));
        assert_eq!(layout.x_axis, Some(Rect::new(60.0, 450.0, 770.0, 500.0)));
    }

    #[test]
    fn axis_free_plot_fills_below_the_header() {
        let config = ChartConfig::default().with_size(400.0, 300.0);
        let layout = ChartLayout::arrange(&config, false);
        assert_eq!(layout.plot, Rect::new(10.0, 40.0, 390.0, 290.0));
        assert!(layout.y_axis.is_none());
        assert!(layout.x_axis.is_none());
    }

    #[test]
    fn tiny_views_never_invert_the_plot() {
        let config = ChartConfig::default().with_size(40.0, 20.0);
        for with_axes in [true, false] {
            let plot = ChartLayout::arrange(&config, with_axes).plot;
            assert!(plot.width() >= 0.0, "negative width {plot:?}");
            assert!(plot.height() >= 0.0, "negative height {plot:?}");
        }
    }
}
