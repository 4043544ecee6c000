// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker shapes that tell line and area series apart.

use kurbo::{BezPath, Circle, Point, Rect, Shape};

/// Series marker shapes, in the order they are assigned to series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A filled circle.
    Dot,
    /// A filled square.
    Square,
    /// A filled upward triangle.
    Triangle,
    /// Two crossed diagonal strokes.
    Cross,
    /// An outlined circle.
    Ring,
    /// An outlined square.
    SquareOutline,
    /// An outlined upward triangle.
    TriangleOutline,
}

impl Symbol {
    /// Every symbol, in assignment order.
    pub const ALL: [Self; 7] = [
        Self::Dot,
        Self::Square,
        Self::Triangle,
        Self::Cross,
        Self::Ring,
        Self::SquareOutline,
        Self::TriangleOutline,
    ];

    /// Returns the marker for series `index`, cycling through [`Symbol::ALL`].
    pub fn for_series(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Returns `true` if the symbol is painted with a fill rather than a stroke.
    pub fn is_filled(self) -> bool {
        matches!(self, Self::Dot | Self::Square | Self::Triangle)
    }

    /// Returns a path for this symbol centered at `center`, using `size` as the diameter/side.
    ///
    /// `tolerance` only affects the circular symbols.
    pub fn path(self, center: Point, size: f64, tolerance: f64) -> BezPath {
        let half = 0.5 * size;
        match self {
            Self::Dot | Self::Ring => Circle::new(center, half)
                .path_elements(tolerance)
                .collect(),
            Self::Square | Self::SquareOutline => {
                Rect::from_center_size(center, (size, size)).to_path(tolerance)
            }
            Self::Triangle | Self::TriangleOutline => {
                let mut p = BezPath::new();
                p.move_to((center.x - half, center.y + half));
                p.line_to((center.x, center.y - half));
                p.line_to((center.x + half, center.y + half));
                p.close_path();
                p
            }
            Self::Cross => {
                let mut p = BezPath::new();
                p.move_to((center.x - half, center.y - half));
                p.line_to((center.x + half, center.y + half));
                p.move_to((center.x - half, center.y + half));
                p.line_to((center.x + half, center.y - half));
                p
            }
        }
    }
}
