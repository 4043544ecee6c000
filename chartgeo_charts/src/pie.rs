// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular partitioning for pie charts.
//!
//! Angles are in radians in a frame where a point at angle `a` on a circle of radius `r` sits at
//! `center - r * (cos a, sin a)` in screen space (y down). In that frame `PI / 2` is 12 o'clock
//! and increasing angles run clockwise, so slices start at the top and proceed clockwise.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::{PI, TAU};

use chartgeo_data::WeightedItem;
use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Color;

use crate::config::ChartConfig;
use crate::error::DomainError;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::layout::ChartLayout;

/// Angle of the first slice's leading edge (12 o'clock).
pub const PIE_START_ANGLE: f64 = PI / 2.0;

/// Label anchors sit on the mid angle at this fraction of the radius.
pub const LABEL_RADIUS_FACTOR: f64 = 0.8;

/// Returns the screen point at `angle` on a circle.
pub fn pie_point(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x - radius * angle.cos(),
        center.y - radius * angle.sin(),
    )
}

/// One item's angular span.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Item label.
    pub label: String,
    /// Item weight.
    pub value: f64,
    /// Position of the item in the caller's input.
    pub index: usize,
    /// Leading edge angle.
    pub start_angle: f64,
    /// Trailing edge angle.
    pub end_angle: f64,
    /// `true` if the span exceeds half a circle.
    pub large_arc: bool,
}

impl PieSlice {
    /// Angular extent of the slice.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle halfway through the slice.
    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }

    /// Rim point at the leading edge.
    pub fn start_point(&self, center: Point, radius: f64) -> Point {
        pie_point(center, radius, self.start_angle)
    }

    /// Rim point at the trailing edge.
    pub fn end_point(&self, center: Point, radius: f64) -> Point {
        pie_point(center, radius, self.end_angle)
    }

    /// Where the slice's value label goes.
    pub fn label_anchor(&self, center: Point, radius: f64) -> Point {
        pie_point(center, radius * LABEL_RADIUS_FACTOR, self.mid_angle())
    }

    /// Closed sector outline: center, rim from start to end, back to center.
    pub fn path(&self, center: Point, radius: f64, tolerance: f64) -> BezPath {
        // kurbo measures angles from +x toward +y, which is our frame rotated by half a turn.
        Circle::new(center, radius)
            .segment(0.0, self.start_angle + PI, self.sweep())
            .path_elements(tolerance)
            .collect()
    }
}

/// Partitions the circle among `items` in descending value order.
///
/// Ties keep their input order. Every weight must be finite and positive. The last slice ends at
/// exactly one full turn past [`PIE_START_ANGLE`], and each slice starts where the previous one
/// ended.
pub fn pie_layout(items: &[WeightedItem]) -> Result<Vec<PieSlice>, DomainError> {
    if items.is_empty() {
        return Err(DomainError::EmptyDataset);
    }
    if let Some(bad) = items.iter().find(|item| !item.has_valid_weight()) {
        return Err(DomainError::InvalidWeight {
            label: bad.label.clone(),
            value: bad.value,
        });
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].value.total_cmp(&items[a].value));

    // Shares are taken relative to the largest weight so the sum stays finite.
    let largest = items[order[0]].value;
    let total: f64 = order.iter().map(|&i| items[i].value / largest).sum();
    crate::log::debug!(total, largest, slices = items.len(), "laying out pie");

    let mut slices = Vec::with_capacity(items.len());
    let mut acc = 0.0;
    let mut start = PIE_START_ANGLE;
    for (rank, &index) in order.iter().enumerate() {
        let item = &items[index];
        acc += item.value / largest;
        let end = if rank + 1 == order.len() {
            PIE_START_ANGLE + TAU
        } else {
            PIE_START_ANGLE + TAU * (acc / total)
        };
        slices.push(PieSlice {
            label: item.label.clone(),
            value: item.value,
            index,
            start_angle: start,
            end_angle: end,
            large_arc: end - start > PI,
        });
        start = end;
    }
    Ok(slices)
}

/// Pie chart input.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartSpec {
    /// Slices, in any order.
    pub items: Vec<WeightedItem>,
}

impl PieChartSpec {
    /// Creates a pie chart over `items`.
    pub fn new(items: impl IntoIterator<Item = impl Into<WeightedItem>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Lays the pie out in the plot area.
    ///
    /// The pie is centered in the plot and touches its shorter side. Wedges are colored by
    /// rank, so the largest slice takes palette color 0.
    pub fn geometry(&self, config: &ChartConfig) -> Result<PieChartGeometry, DomainError> {
        let layout = ChartLayout::arrange(config, false);
        let center = layout.plot.center();
        let radius = 0.5 * layout.plot.width().min(layout.plot.height());

        let wedges = pie_layout(&self.items)?
            .into_iter()
            .enumerate()
            .map(|(rank, slice)| PieWedge {
                color: config.scheme.color(rank),
                path: slice.path(center, radius, config.tolerance),
                label_anchor: slice.label_anchor(center, radius),
                slice,
            })
            .collect();

        Ok(PieChartGeometry {
            layout,
            center,
            radius,
            wedges,
        })
    }
}

/// A positioned, colored slice.
#[derive(Clone, Debug)]
pub struct PieWedge {
    /// Angular span.
    pub slice: PieSlice,
    /// Fill color.
    pub color: Color,
    /// Closed sector outline.
    pub path: BezPath,
    /// Value label anchor.
    pub label_anchor: Point,
}

/// Output of [`PieChartSpec::geometry`].
#[derive(Clone, Debug)]
pub struct PieChartGeometry {
    /// Arranged rectangles.
    pub layout: ChartLayout,
    /// Pie center.
    pub center: Point,
    /// Pie radius.
    pub radius: f64,
    /// Slices in descending value order.
    pub wedges: Vec<PieWedge>,
}
