// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of chart kinds.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chartgeo_data::{Dataset, DatasetError, Series, WeightedItem};
use thiserror::Error;

use crate::area_chart::{AreaChartGeometry, AreaChartSpec};
use crate::bar_chart::{BarChartGeometry, BarChartSpec};
use crate::config::ChartConfig;
use crate::error::{ColorError, DomainError};
use crate::geomap_chart::{GeomapGeometry, GeomapSpec};
use crate::heatmap_chart::{HeatmapGeometry, HeatmapSpec};
use crate::line_chart::{LineChartGeometry, LineChartSpec};
use crate::pie::{PieChartGeometry, PieChartSpec};
use crate::treemap::{TreemapChartGeometry, TreemapChartSpec};

/// Anything that can go wrong between raw input and finished geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// The input data is malformed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// The input has no well-defined geometry.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// A color conversion was out of range.
    ///
    /// [`Chart::geometry`] never returns this; it is here for callers that build palettes with
    /// [`crate::hsl_to_rgb`] and propagate through `ChartError`.
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Chart kind discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Grouped bars.
    Bar,
    /// Lines.
    Line,
    /// Stacked areas.
    Area,
    /// Pie.
    Pie,
    /// Heat map.
    Heatmap,
    /// Choropleth.
    Geomap,
    /// Treemap.
    Treemap,
}

impl ChartKind {
    /// Every kind.
    pub const ALL: [Self; 7] = [
        Self::Bar,
        Self::Line,
        Self::Area,
        Self::Pie,
        Self::Heatmap,
        Self::Geomap,
        Self::Treemap,
    ];

    /// Lowercase name, suitable for file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Area => "area",
            Self::Pie => "pie",
            Self::Heatmap => "heatmap",
            Self::Geomap => "geomap",
            Self::Treemap => "treemap",
        }
    }

    /// Looks a kind up by [`ChartKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A chart of any kind, ready for layout.
#[derive(Clone, Debug)]
pub enum Chart {
    /// Grouped bars.
    Bar(BarChartSpec),
    /// Lines.
    Line(LineChartSpec),
    /// Stacked areas.
    Area(AreaChartSpec),
    /// Pie.
    Pie(PieChartSpec),
    /// Heat map.
    Heatmap(HeatmapSpec),
    /// Choropleth.
    Geomap(GeomapSpec),
    /// Treemap.
    Treemap(TreemapChartSpec),
}

impl Chart {
    /// A bar chart with default options.
    pub fn bar<C, S>(categories: C, series: Vec<Series>) -> Result<Self, ChartError>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::Bar(BarChartSpec::new(Dataset::new(categories, series)?)))
    }

    /// A line chart with default options.
    pub fn line<C, S>(categories: C, series: Vec<Series>) -> Result<Self, ChartError>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::Line(LineChartSpec::new(Dataset::new(categories, series)?)))
    }

    /// A stacked area chart with default options.
    pub fn area<C, S>(categories: C, series: Vec<Series>) -> Result<Self, ChartError>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::Area(AreaChartSpec::new(Dataset::new(categories, series)?)))
    }

    /// A heat map with series as columns and categories as rows.
    pub fn heatmap<C, S>(rows: C, columns: Vec<Series>) -> Result<Self, ChartError>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::Heatmap(HeatmapSpec::new(Dataset::new(rows, columns)?)))
    }

    /// A pie over weighted items.
    pub fn pie(items: impl IntoIterator<Item = impl Into<WeightedItem>>) -> Self {
        Self::Pie(PieChartSpec::new(items))
    }

    /// A treemap over weighted items.
    pub fn treemap(items: impl IntoIterator<Item = impl Into<WeightedItem>>) -> Self {
        Self::Treemap(TreemapChartSpec::new(items))
    }

    /// Returns this chart's kind.
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Area(_) => ChartKind::Area,
            Self::Pie(_) => ChartKind::Pie,
            Self::Heatmap(_) => ChartKind::Heatmap,
            Self::Geomap(_) => ChartKind::Geomap,
            Self::Treemap(_) => ChartKind::Treemap,
        }
    }

    /// Computes the chart's geometry for one render pass.
    pub fn geometry(&self, config: &ChartConfig) -> Result<ChartGeometry, ChartError> {
        crate::log::debug!(kind = self.kind().name(), "computing chart geometry");
        Ok(match self {
            Self::Bar(spec) => ChartGeometry::Bar(spec.geometry(config)?),
            Self::Line(spec) => ChartGeometry::Line(spec.geometry(config)?),
            Self::Area(spec) => ChartGeometry::Area(spec.geometry(config)?),
            Self::Pie(spec) => ChartGeometry::Pie(spec.geometry(config)?),
            Self::Heatmap(spec) => ChartGeometry::Heatmap(spec.geometry(config)?),
            Self::Geomap(spec) => ChartGeometry::Geomap(spec.geometry(config)?),
            Self::Treemap(spec) => ChartGeometry::Treemap(spec.geometry(config)?),
        })
    }
}

/// Positioned shapes for one chart, ready for a renderer.
#[derive(Clone, Debug)]
pub enum ChartGeometry {
    /// Grouped bars.
    Bar(BarChartGeometry),
    /// Lines.
    Line(LineChartGeometry),
    /// Stacked areas.
    Area(AreaChartGeometry),
    /// Pie.
    Pie(PieChartGeometry),
    /// Heat map.
    Heatmap(HeatmapGeometry),
    /// Choropleth.
    Geomap(GeomapGeometry),
    /// Treemap.
    Treemap(TreemapChartGeometry),
}

impl ChartGeometry {
    /// Returns the kind of chart this geometry was computed for.
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Area(_) => ChartKind::Area,
            Self::Pie(_) => ChartKind::Pie,
            Self::Heatmap(_) => ChartKind::Heatmap,
            Self::Geomap(_) => ChartKind::Geomap,
            Self::Treemap(_) => ChartKind::Treemap,
        }
    }
}
