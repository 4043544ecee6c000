// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labelled weights for proportional charts.

extern crate alloc;

use alloc::string::String;

/// A label paired with a weight, laid out by pie and treemap charts.
///
/// The weight must be finite and strictly positive for its share of the total to be defined.
/// Layout functions check this and report offending items.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedItem {
    /// Item label.
    pub label: String,
    /// Item weight.
    pub value: f64,
}

impl WeightedItem {
    /// Creates a new weighted item.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Returns `true` if the weight is finite and strictly positive.
    pub fn has_valid_weight(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }
}

impl<S: Into<String>> From<(S, f64)> for WeightedItem {
    fn from((label, value): (S, f64)) -> Self {
        Self::new(label, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_validity() {
        assert!(WeightedItem::new("a", 1.0).has_valid_weight());
        assert!(!WeightedItem::new("zero", 0.0).has_valid_weight());
        assert!(!WeightedItem::new("neg", -2.0).has_valid_weight());
        assert!(!WeightedItem::new("inf", f64::INFINITY).has_valid_weight());
        assert!(!WeightedItem::from(("nan", f64::NAN)).has_valid_weight());
    }
}
