// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choropleth maps over caller-supplied region outlines.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::{BezPath, PathEl, Point, Rect, Shape};
use peniko::Color;

use crate::config::ChartConfig;
use crate::error::DomainError;

/// A named map region.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// Key matched against the value table.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Region boundary in map coordinates.
    pub outline: BezPath,
}

impl Region {
    /// Creates a region.
    pub fn new(id: impl Into<String>, name: impl Into<String>, outline: BezPath) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            outline,
        }
    }

    /// Where the region's label goes: the outline's starting point.
    pub fn label_anchor(&self) -> Point {
        match self.outline.elements().first() {
            Some(PathEl::MoveTo(p)) => *p,
            _ => self.outline.bounding_box().center(),
        }
    }
}

/// Choropleth input.
#[derive(Clone, Debug, Default)]
pub struct GeomapSpec {
    /// Regions, in drawing order.
    pub regions: Vec<Region>,
    /// Values keyed by region id.
    pub values: HashMap<String, f64>,
}

impl GeomapSpec {
    /// Creates a choropleth.
    pub fn new(regions: Vec<Region>, values: HashMap<String, f64>) -> Self {
        Self { regions, values }
    }

    /// Adds or replaces the value for one region.
    pub fn with_value(mut self, id: impl Into<String>, value: f64) -> Self {
        self.values.insert(id.into(), value);
        self
    }

    /// Shades every region by its value.
    ///
    /// Intensities are normalized over every supplied value. Regions without a value are left
    /// unshaded. The view is the union of all outlines' bounding boxes.
    pub fn geometry(&self, config: &ChartConfig) -> Result<GeomapGeometry, DomainError> {
        if self.regions.is_empty() {
            return Err(DomainError::EmptyDataset);
        }
        let mut range: Option<(f64, f64)> = None;
        for &v in self.values.values() {
            if !v.is_finite() {
                return Err(DomainError::NonFiniteValue { value: v });
            }
            range = Some(match range {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        let (min, max) = range.ok_or(DomainError::EmptyDataset)?;
        if max <= min {
            return Err(DomainError::DegenerateRange { min, max });
        }
        if !(max - min).is_finite() {
            return Err(DomainError::RangeOverflow { min, max });
        }

        let known: HashSet<&str> = self.regions.iter().map(|r| r.id.as_str()).collect();
        let mut unmatched: Vec<String> = self
            .values
            .keys()
            .filter(|id| !known.contains(id.as_str()))
            .cloned()
            .collect();
        unmatched.sort();
        if !unmatched.is_empty() {
            crate::log::warn!(count = unmatched.len(), "values without a matching region");
        }

        let mut view: Option<Rect> = None;
        let regions = self
            .regions
            .iter()
            .map(|region| {
                let bbox = region.outline.bounding_box();
                view = Some(view.map_or(bbox, |v| v.union(bbox)));
                let value = self.values.get(&region.id).copied();
                ShadedRegion {
                    id: region.id.clone(),
                    name: region.name.clone(),
                    value,
                    intensity: value.map(|v| (v - min) / (max - min)),
                    label_anchor: region.label_anchor(),
                    outline: region.outline.clone(),
                }
            })
            .collect();

        Ok(GeomapGeometry {
            view: view.unwrap_or(Rect::ZERO),
            color: config.scheme.color(0),
            regions,
            unmatched,
        })
    }
}

/// A region with its normalized shade.
#[derive(Clone, Debug)]
pub struct ShadedRegion {
    /// Region id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The region's value, if one was supplied.
    pub value: Option<f64>,
    /// Fill opacity in `[0, 1]`; `None` leaves the region unshaded.
    pub intensity: Option<f64>,
    /// Label position.
    pub label_anchor: Point,
    /// Boundary.
    pub outline: BezPath,
}

/// Output of [`GeomapSpec::geometry`].
#[derive(Clone, Debug)]
pub struct GeomapGeometry {
    /// Bounds of all outlines, in map coordinates.
    pub view: Rect,
    /// Shade color.
    pub color: Color,
    /// Regions, in input order.
    pub regions: Vec<ShadedRegion>,
    /// Ids of supplied values that match no region, sorted.
    pub unmatched: Vec<String>,
}
