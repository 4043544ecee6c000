// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types shared by the geometry components.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Input data that has no well-defined geometry.
///
/// These are caller errors: the data must be fixed (or its range pre-expanded) before layout.
/// Nothing is substituted silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// There are no values to fit.
    #[error("no values to lay out")]
    EmptyDataset,
    /// All values are equal, so the range has zero width.
    #[error("degenerate value range: min {min} is not below max {max}")]
    DegenerateRange {
        /// Smallest value (after any zero clamping).
        min: f64,
        /// Largest value (after any zero clamping).
        max: f64,
    },
    /// Every value is finite but `max - min` overflows `f64`.
    #[error("value range from {min} to {max} is too wide to represent")]
    RangeOverflow {
        /// Smallest value.
        min: f64,
        /// Largest value.
        max: f64,
    },
    /// A value is `NaN` or infinite.
    #[error("value {value} is not finite")]
    NonFiniteValue {
        /// The offending value.
        value: f64,
    },
    /// A proportional item has a zero, negative or non-finite weight.
    #[error("item `{label}` has weight {value}; weights must be finite and positive")]
    InvalidWeight {
        /// Label of the offending item.
        label: String,
        /// Its weight.
        value: f64,
    },
    /// Curve smoothing needs at least two samples.
    #[error("need at least 2 points to smooth a curve, got {found}")]
    TooFewPoints {
        /// Number of points supplied.
        found: usize,
    },
    /// The pixel range to map onto is empty or reversed.
    #[error("pixel range is empty: start {start} is not below end {end}")]
    EmptyPixelRange {
        /// Pixel coordinate of the range start.
        start: f64,
        /// Pixel coordinate of the range end.
        end: f64,
    },
}

/// HSL components outside their defined domain.
///
/// The palette only produces in-range components, so seeing this means a caller passed bad
/// components to [`crate::hsl_to_rgb`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ColorError {
    /// Hue must be in `[0, 360)`, saturation and lightness in `[0, 1]`.
    #[error("hsl({h}, {s}, {l}) is out of range")]
    OutOfRange {
        /// Hue in degrees.
        h: f64,
        /// Saturation.
        s: f64,
        /// Lightness.
        l: f64,
    },
}
