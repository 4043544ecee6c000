// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and layout for statistical charts.
//!
//! This crate turns caller data ([`chartgeo_data`]) into positioned shapes for one render pass:
//! - **Scales**: [`AxisScale`] fits a "nice" value-to-pixel mapping and gridline ticks to a
//!   dataset; [`ScaleBand`] and [`ScalePoint`] place categories along x.
//! - **Layouts**: [`pie_layout`] partitions a circle into angular spans and [`treemap_layout`]
//!   tiles a rectangle with areas proportional to weights.
//! - **Curves**: [`smooth`] derives cubic Bézier control points through ordered samples.
//! - **Colors**: [`default_palette`] and [`ColorScheme`] assign deterministic per-index colors.
//!
//! [`Chart`] composes these per chart kind (bar, line, area, pie, heatmap, geomap, treemap)
//! and returns a [`ChartGeometry`]. Emitting markup from that geometry is left to a renderer.
//!
//! Every function here is pure: no state is kept between calls and no I/O is performed.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod area_chart;
mod bar_chart;
mod bezier;
mod chart;
mod color;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod geomap_chart;
mod heatmap_chart;
mod layout;
mod line_chart;
mod log;
mod pie;
mod scale;
mod symbol;
mod treemap;

pub use area_chart::{AreaChartGeometry, AreaChartSpec, AreaLayer};
pub use bar_chart::{BarChartGeometry, BarChartSpec, BarRect};
pub use bezier::{BezierPoint, band_path, curve_path, smooth};
pub use chart::{Chart, ChartError, ChartGeometry, ChartKind};
pub use color::{ColorScheme, Hsl, PaletteFn, default_palette, hex, hsl_to_rgb, rgb_to_hsl};
pub use config::{ChartConfig, Margins};
pub use error::{ColorError, DomainError};
pub use geomap_chart::{GeomapGeometry, GeomapSpec, Region, ShadedRegion};
pub use heatmap_chart::{HeatCell, HeatmapGeometry, HeatmapSpec};
pub use layout::{AxisFrame, CategoryTick, ChartLayout, Size};
pub use line_chart::{LineChartGeometry, LineChartSpec, LineSeries};
pub use pie::{
    LABEL_RADIUS_FACTOR, PIE_START_ANGLE, PieChartGeometry, PieChartSpec, PieSlice, PieWedge,
    pie_layout, pie_point,
};
pub use scale::{AxisScale, ScaleBand, ScalePoint, Tick, compute_scale, nice_interval};
pub use symbol::Symbol;
pub use treemap::{
    TreemapCell, TreemapChartGeometry, TreemapChartSpec, TreemapTile, treemap_layout,
};
