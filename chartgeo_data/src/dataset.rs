// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category-aligned series and the datasets that group them.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::stack::CumulativeDataset;

/// Errors returned when building a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// The category axis is empty.
    #[error("dataset has no categories")]
    EmptyCategories,
    /// A series does not have one value per category.
    #[error("series `{series}` has {found} values, expected {expected}")]
    ShapeMismatch {
        /// Label of the offending series.
        series: String,
        /// Number of categories in the dataset.
        expected: usize,
        /// Number of values in the series.
        found: usize,
    },
    /// A series contains `NaN` or an infinity.
    #[error("series `{series}` has a non-finite value at index {index}")]
    NonFiniteValue {
        /// Label of the offending series.
        series: String,
        /// Category index of the value.
        index: usize,
    },
}

/// An ordered run of samples, one per category.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Series label (used by legends).
    pub label: String,
    /// Samples in category order.
    pub values: Vec<f64>,
}

impl Series {
    /// Creates a new series.
    pub fn new(label: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            values: values.into(),
        }
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Series sharing one category axis.
///
/// Construction guarantees that every series has exactly one finite value per category.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub(crate) categories: Vec<String>,
    pub(crate) series: Vec<Series>,
}

impl Dataset {
    /// Builds a dataset, validating its shape.
    pub fn new<C, S>(categories: C, series: Vec<Series>) -> Result<Self, DatasetError>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        if categories.is_empty() {
            return Err(DatasetError::EmptyCategories);
        }
        for s in &series {
            if s.len() != categories.len() {
                return Err(DatasetError::ShapeMismatch {
                    series: s.label.clone(),
                    expected: categories.len(),
                    found: s.len(),
                });
            }
            if let Some(index) = s.values.iter().position(|v| !v.is_finite()) {
                return Err(DatasetError::NonFiniteValue {
                    series: s.label.clone(),
                    index,
                });
            }
        }
        Ok(Self { categories, series })
    }

    /// Returns the category labels, in axis order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the series, in insertion order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Returns the number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns the number of series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Returns the value of `series` at `category`, if both exist.
    pub fn value(&self, series: usize, category: usize) -> Option<f64> {
        self.series.get(series)?.values.get(category).copied()
    }

    /// Iterates over every value, series by series.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.values.iter().copied())
    }

    /// Returns `(min, max)` over all values, or `None` if the dataset holds no values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.values() {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// Returns the running-sum view used for stacked rendering.
    pub fn cumulative(&self) -> CumulativeDataset {
        CumulativeDataset::from_dataset(self)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn ragged_series_is_a_shape_mismatch() {
        let err = Dataset::new(
            ["a", "b", "c"],
            vec![Series::new("ok", [1.0, 2.0, 3.0]), Series::new("short", [1.0, 2.0])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DatasetError::ShapeMismatch {
                series: "short".into(),
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn non_finite_samples_are_rejected() {
        let err = Dataset::new(["a", "b"], vec![Series::new("s", [1.0, f64::NAN])]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::NonFiniteValue {
                series: "s".into(),
                index: 1,
            }
        );
    }

    #[test]
    fn empty_category_axis_is_rejected() {
        let err = Dataset::new(Vec::<String>::new(), Vec::new()).unwrap_err();
        assert_eq!(err, DatasetError::EmptyCategories);
    }

    #[test]
    fn value_range_spans_all_series() {
        let data = Dataset::new(
            ["a", "b"],
            vec![Series::new("s0", [3.0, -1.0]), Series::new("s1", [7.0, 2.0])],
        )
        .unwrap();
        assert_eq!(data.value_range(), Some((-1.0, 7.0)));
        assert_eq!(data.value(1, 0), Some(7.0));
        assert_eq!(data.value(2, 0), None);
    }

    #[test]
    fn dataset_without_series_has_no_range() {
        let data = Dataset::new(["a"], Vec::new()).unwrap();
        assert_eq!(data.value_range(), None);
    }
}
