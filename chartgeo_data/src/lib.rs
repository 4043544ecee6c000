// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input data for `chartgeo` charts.
//!
//! This crate holds the values a caller hands to the geometry engine for a single render:
//! - [`Series`] and [`Dataset`] for category charts (bar, line, area, heatmap),
//! - [`CumulativeDataset`], the running-sum view used for stacked areas, and
//! - [`WeightedItem`] for proportional charts (pie, treemap).
//!
//! All of these are plain immutable values. Shape problems (ragged series, non-finite samples)
//! are rejected when a [`Dataset`] is built, so downstream layout code can rely on a
//! rectangular, finite table.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod dataset;
mod item;
mod stack;

pub use dataset::{Dataset, DatasetError, Series};
pub use item::WeightedItem;
pub use stack::CumulativeDataset;
