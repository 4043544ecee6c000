// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Heat maps: a grid of cells shaded by value.

extern crate alloc;

use alloc::vec::Vec;

use chartgeo_data::Dataset;
use kurbo::Rect;
use peniko::Color;

use crate::config::ChartConfig;
use crate::error::DomainError;
use crate::layout::{CategoryTick, ChartLayout};

/// Heat map input.
///
/// Each series is a column along x; each category is a row along y, with the first category at
/// the bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapSpec {
    /// Cell values.
    pub data: Dataset,
}

impl HeatmapSpec {
    /// Creates a heat map over `data`.
    pub fn new(data: Dataset) -> Self {
        Self { data }
    }

    /// Divides the plot into equal cells and normalizes every value into `[0, 1]`.
    pub fn geometry(&self, config: &ChartConfig) -> Result<HeatmapGeometry, DomainError> {
        let data = &self.data;
        let (min, max) = data.value_range().ok_or(DomainError::EmptyDataset)?;
        if max <= min {
            return Err(DomainError::DegenerateRange { min, max });
        }
        if !(max - min).is_finite() {
            return Err(DomainError::RangeOverflow { min, max });
        }

        let layout = ChartLayout::arrange(config, true);
        let plot = layout.plot;
        let column_count = data.series_count();
        let row_count = data.category_count();
        let dw = plot.width() / column_count as f64;
        let dh = plot.height() / row_count as f64;
        let left = |i: usize| plot.x0 + dw * i as f64;
        let bottom = |j: usize| plot.y1 - dh * j as f64;

        let columns = data
            .series()
            .iter()
            .enumerate()
            .map(|(i, s)| CategoryTick {
                label: s.label.clone(),
                position: left(i) + 0.5 * dw,
            })
            .collect();
        let rows = data
            .categories()
            .iter()
            .enumerate()
            .map(|(j, label)| CategoryTick {
                label: label.clone(),
                position: bottom(j) - 0.5 * dh,
            })
            .collect();

        let mut cells = Vec::with_capacity(column_count * row_count);
        for (column, series) in data.series().iter().enumerate() {
            for (row, &value) in series.values.iter().enumerate() {
                cells.push(HeatCell {
                    column,
                    row,
                    value,
                    intensity: (value - min) / (max - min),
                    rect: Rect::new(left(column), bottom(row + 1), left(column + 1), bottom(row)),
                });
            }
        }
        crate::log::debug!(min, max, cells = cells.len(), "heatmap grid");

        Ok(HeatmapGeometry {
            layout,
            columns,
            rows,
            cells,
            color: config.scheme.color(0),
        })
    }
}

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatCell {
    /// Series index.
    pub column: usize,
    /// Category index; row 0 is at the bottom.
    pub row: usize,
    /// Raw value.
    pub value: f64,
    /// Value normalized into `[0, 1]` over the whole grid.
    pub intensity: f64,
    /// Cell extent.
    pub rect: Rect,
}

/// Output of [`HeatmapSpec::geometry`].
#[derive(Clone, Debug)]
pub struct HeatmapGeometry {
    /// Arranged rectangles.
    pub layout: ChartLayout,
    /// Column labels, centered under each column.
    pub columns: Vec<CategoryTick>,
    /// Row labels, centered beside each row (position is a y coordinate).
    pub rows: Vec<CategoryTick>,
    /// Cells, column by column.
    pub cells: Vec<HeatCell>,
    /// Base color; a cell's intensity is its opacity.
    pub color: Color,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use chartgeo_data::Series;

    use super::*;

    fn grid() -> Dataset {
        Dataset::new(
            ["night", "day"],
            vec![
                Series::new("mon", [1.0, 5.0]),
                Series::new("tue", [3.0, 9.0]),
                Series::new("wed", [2.0, 7.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn cells_tile_the_plot() {
        let geometry = HeatmapSpec::new(grid())
            .geometry(&ChartConfig::default())
            .unwrap();
        let plot = geometry.layout.plot;
        assert_eq!(geometry.cells.len(), 6);
        let area: f64 = geometry.cells.iter().map(|c| c.rect.area()).sum();
        assert!((area - plot.area()).abs() < 1e-6);
    }

    #[test]
    fn first_row_is_at_the_bottom() {
        let geometry = HeatmapSpec::new(grid())
            .geometry(&ChartConfig::default())
            .unwrap();
        let plot = geometry.layout.plot;
        let first = geometry.cells[0];
        assert_eq!((first.column, first.row), (0, 0));
        assert_eq!(first.rect.y1, plot.y1);
        assert_eq!(first.rect.x0, plot.x0);
        let day = geometry.cells[1];
        assert!((day.rect.y0 - plot.y0).abs() < 1e-9);
        assert!(geometry.rows[0].position > geometry.rows[1].position);
    }

    #[test]
    fn intensity_spans_zero_to_one() {
        let geometry = HeatmapSpec::new(grid())
            .geometry(&ChartConfig::default())
            .unwrap();
        let lowest = geometry.cells.iter().find(|c| c.value == 1.0).unwrap();
        let highest = geometry.cells.iter().find(|c| c.value == 9.0).unwrap();
        assert_eq!(lowest.intensity, 0.0);
        assert_eq!(highest.intensity, 1.0);
        let tue_night = geometry.cells[2];
        assert_eq!(tue_night.intensity, 0.25);
    }

    #[test]
    fn uniform_grid_is_degenerate() {
        let data = Dataset::new(["a"], vec![Series::new("x", [4.0]), Series::new("y", [4.0])])
            .unwrap();
        assert_eq!(
            HeatmapSpec::new(data).geometry(&ChartConfig::default()).unwrap_err(),
            DomainError::DegenerateRange { min: 4.0, max: 4.0 }
        );
    }

    #[test]
    fn range_wider_than_f64_is_rejected() {
        let data = Dataset::new(
            ["a"],
            vec![Series::new("x", [-1e308]), Series::new("y", [1e308])],
        )
        .unwrap();
        assert_eq!(
            HeatmapSpec::new(data).geometry(&ChartConfig::default()).unwrap_err(),
            DomainError::RangeOverflow {
                min: -1e308,
                max: 1e308,
            }
        );
    }
}
