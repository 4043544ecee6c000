// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squarified slice-and-dice treemap layout.
//!
//! Items are sorted by descending weight once. Each level splits its rectangle along the longer
//! side into roughly `long / short + 1` groups of similar total weight, so that no group claims
//! a sliver much thinner than it is tall, and recurses into each group.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chartgeo_data::WeightedItem;
use kurbo::Rect;
use peniko::Color;
use smallvec::SmallVec;

use crate::config::ChartConfig;
use crate::error::DomainError;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::layout::ChartLayout;

/// One item's rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct TreemapCell {
    /// Item label.
    pub label: String,
    /// Item weight.
    pub value: f64,
    /// Position in descending weight order (0 is the heaviest item).
    pub rank: usize,
    /// Assigned area.
    pub rect: Rect,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    rank: usize,
    index: usize,
    value: f64,
}

/// Partitions `rect` among `items` with areas proportional to their weights.
///
/// The cells tile `rect` without overlap. They are returned in rank order.
pub fn treemap_layout(rect: Rect, items: &[WeightedItem]) -> Result<Vec<TreemapCell>, DomainError> {
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
    // Weights relative to the largest one keep every subtotal finite.
    let largest = items[order[0]].value;
    let entries: Vec<Entry> = order
        .into_iter()
        .enumerate()
        .map(|(rank, index)| Entry {
            rank,
            index,
            value: items[index].value / largest,
        })
        .collect();

    let mut cells = Vec::with_capacity(items.len());
    subdivide(rect.abs(), &entries, items, &mut cells);
    cells.sort_by_key(|cell| cell.rank);
    Ok(cells)
}

fn subdivide(rect: Rect, entries: &[Entry], items: &[WeightedItem], out: &mut Vec<TreemapCell>) {
    match entries {
        [] => return,
        [only] => {
            let item = &items[only.index];
            out.push(TreemapCell {
                label: item.label.clone(),
                value: item.value,
                rank: only.rank,
                rect,
            });
            return;
        }
        _ => {}
    }

    let vertical = rect.width() > rect.height();
    let (long, short) = if vertical {
        (rect.width(), rect.height())
    } else {
        (rect.height(), rect.width())
    };
    let ratio = if short > 0.0 {
        long / short
    } else {
        entries.len() as f64
    };
    let groups = ratio.ceil() + 1.0;
    let threshold = 1.0 / groups;
    let subtotal: f64 = entries.iter().map(|e| e.value).sum();

    // (end of group in `entries`, group share of `subtotal`)
    let mut bounds: SmallVec<[(usize, f64); 8]> = SmallVec::new();
    let mut share = 0.0;
    for (i, entry) in entries.iter().enumerate() {
        share += entry.value / subtotal;
        if share >= threshold || i + 1 == entries.len() {
            bounds.push((i + 1, share));
            share = 0.0;
        }
    }
    if bounds.len() == 1 {
        // Recursing on an unchanged group would not terminate; peel off the heaviest item.
        let first = entries[0].value / subtotal;
        bounds.clear();
        bounds.push((1, first));
        bounds.push((entries.len(), 1.0 - first));
    }
    crate::log::debug!(
        items = entries.len(),
        groups = bounds.len(),
        vertical,
        "treemap level"
    );

    let (origin, edge) = if vertical {
        (rect.x0, rect.x1)
    } else {
        (rect.y0, rect.y1)
    };
    let mut begin = 0;
    let mut offset = origin;
    for (k, &(end, share)) in bounds.iter().enumerate() {
        let next = if k + 1 == bounds.len() {
            edge
        } else {
            offset + long * share
        };
        let slice = if vertical {
            Rect::new(offset, rect.y0, next, rect.y1)
        } else {
            Rect::new(rect.x0, offset, rect.x1, next)
        };
        subdivide(slice, &entries[begin..end], items, out);
        begin = end;
        offset = next;
    }
}

/// Treemap chart input.
#[derive(Clone, Debug, PartialEq)]
pub struct TreemapChartSpec {
    /// Tiles, in any order.
    pub items: Vec<WeightedItem>,
}

impl TreemapChartSpec {
    /// Creates a treemap over `items`.
    pub fn new(items: impl IntoIterator<Item = impl Into<WeightedItem>>) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Tiles the plot area. Each tile takes the palette color of its rank.
    pub fn geometry(&self, config: &ChartConfig) -> Result<TreemapChartGeometry, DomainError> {
        let layout = ChartLayout::arrange(config, false);
        let tiles = treemap_layout(layout.plot, &self.items)?
            .into_iter()
            .map(|cell| TreemapTile {
                color: config.scheme.color(cell.rank),
                cell,
            })
            .collect();
        Ok(TreemapChartGeometry { layout, tiles })
    }
}

/// A colored treemap cell.
#[derive(Clone, Debug)]
pub struct TreemapTile {
    /// Placement.
    pub cell: TreemapCell,
    /// Fill color.
    pub color: Color,
}

/// Output of [`TreemapChartSpec::geometry`].
#[derive(Clone, Debug)]
pub struct TreemapChartGeometry {
    /// Arranged rectangles.
    pub layout: ChartLayout,
    /// Tiles in rank order.
    pub tiles: Vec<TreemapTile>,
}
