// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking transform: running sums along the series axis.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::dataset::{Dataset, Series};

/// A dataset whose series hold running sums across series.
///
/// Layer `s` at category `j` is the sum of series `0..=s` at `j`. Each layer is therefore the
/// top edge of series `s` in a zero-offset stack, and layer `s - 1` is its bottom edge.
/// Summation runs along the series axis only; categories stay independent.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativeDataset {
    inner: Dataset,
}

impl CumulativeDataset {
    /// Computes the running sums of `data`.
    pub fn from_dataset(data: &Dataset) -> Self {
        let mut running = vec![0.0; data.category_count()];
        let series = data
            .series
            .iter()
            .map(|s| {
                for (acc, v) in running.iter_mut().zip(&s.values) {
                    *acc += v;
                }
                Series::new(s.label.clone(), running.clone())
            })
            .collect::<Vec<_>>();
        Self {
            inner: Dataset {
                categories: data.categories.clone(),
                series,
            },
        }
    }

    /// Returns the stacked layers, bottom first.
    pub fn layers(&self) -> &[Series] {
        &self.inner.series
    }

    /// Returns a single layer.
    pub fn layer(&self, index: usize) -> Option<&Series> {
        self.inner.series.get(index)
    }

    /// Returns the running sums as an ordinary dataset (for scale fitting).
    pub fn as_dataset(&self) -> &Dataset {
        &self.inner
    }

    /// Consumes the view, returning the running sums as an ordinary dataset.
    pub fn into_dataset(self) -> Dataset {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn layers_are_prefix_sums_across_series() {
        let data = Dataset::new(
            ["q1", "q2", "q3"],
            vec![
                Series::new("a", [1.0, 2.0, 3.0]),
                Series::new("b", [10.0, 20.0, 30.0]),
                Series::new("c", [100.0, 200.0, 300.0]),
            ],
        )
        .unwrap();
        let stacked = data.cumulative();
        assert_eq!(stacked.layers().len(), 3);
        assert_eq!(stacked.layer(0).unwrap().values, vec![1.0, 2.0, 3.0]);
        assert_eq!(stacked.layer(1).unwrap().values, vec![11.0, 22.0, 33.0]);
        assert_eq!(stacked.layer(2).unwrap().values, vec![111.0, 222.0, 333.0]);
        assert_eq!(stacked.layer(2).unwrap().label, "c");
        assert_eq!(stacked.as_dataset().categories(), data.categories());
    }

    #[test]
    fn negative_values_lower_the_running_sum() {
        let data = Dataset::new(
            ["x"],
            vec![Series::new("a", [5.0]), Series::new("b", [-2.0])],
        )
        .unwrap();
        let stacked = data.cumulative().into_dataset();
        assert_eq!(stacked.value(1, 0), Some(3.0));
    }
}
