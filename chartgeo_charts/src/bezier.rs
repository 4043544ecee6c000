// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth curves through ordered samples.
//!
//! [`smooth`] computes one [`BezierPoint`] per sample. [`curve_path`] chains them into a cubic
//! path (each segment runs from one knot's outgoing control to the next knot's incoming control),
//! and [`band_path`] closes a curve against a lower boundary for stacked areas.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::error::DomainError;

/// Tangent damping applied to the centered difference of neighboring y values.
const SLOPE_DAMPING: f64 = 1.0 / 8.0;

/// Fraction of the horizontal sample spacing used for control point offsets.
const CONTROL_REACH: f64 = 0.25;

/// A knot with its incoming and outgoing control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierPoint {
    /// Knot x.
    pub x: f64,
    /// Knot y.
    pub y: f64,
    /// Incoming control point x.
    pub before_ctl_x: f64,
    /// Incoming control point y.
    pub before_ctl_y: f64,
    /// Outgoing control point x.
    pub after_ctl_x: f64,
    /// Outgoing control point y.
    pub after_ctl_y: f64,
}

impl BezierPoint {
    /// The sample itself.
    pub fn knot(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Control point used by the segment arriving at this knot.
    pub fn before_ctl(&self) -> Point {
        Point::new(self.before_ctl_x, self.before_ctl_y)
    }

    /// Control point used by the segment leaving this knot.
    pub fn after_ctl(&self) -> Point {
        Point::new(self.after_ctl_x, self.after_ctl_y)
    }
}

/// Computes control points for a smooth curve through `points`.
///
/// Interior knots get a tangent from their two neighbors. The first and last knots get a flat
/// tangent, so the curve never overshoots past the end samples.
pub fn smooth(points: &[Point]) -> Result<Vec<BezierPoint>, DomainError> {
    let n = points.len();
    if n < 2 {
        return Err(DomainError::TooFewPoints { found: n });
    }

    let mut out = Vec::with_capacity(n);
    for (i, p) in points.iter().enumerate() {
        // The missing neighbor of an endpoint mirrors the one that exists.
        let dx_before = if i == 0 {
            points[1].x - p.x
        } else {
            p.x - points[i - 1].x
        };
        let dx_after = if i + 1 == n {
            p.x - points[i - 1].x
        } else {
            points[i + 1].x - p.x
        };

        let dy = if i == 0 || i + 1 == n {
            0.0
        } else {
            (points[i + 1].y - points[i - 1].y) * SLOPE_DAMPING
        };

        out.push(BezierPoint {
            x: p.x,
            y: p.y,
            before_ctl_x: p.x - dx_before * CONTROL_REACH,
            before_ctl_y: p.y - dy,
            after_ctl_x: p.x + dx_after * CONTROL_REACH,
            after_ctl_y: p.y + dy,
        });
    }
    Ok(out)
}

/// Builds an open cubic path through the knots.
///
/// Returns an empty path for an empty slice.
pub fn curve_path(points: &[BezierPoint]) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.move_to(first.knot());
    append_forward(&mut path, points);
    path
}

/// Builds a closed region between a smooth top boundary and a lower boundary.
///
/// With `bottom`, the region runs forward along `top`, across to the last knot of `bottom`, back
/// along `bottom` in reverse sample order, and closes. Without it, the lower boundary is the
/// horizontal line at `baseline`.
pub fn band_path(top: &[BezierPoint], bottom: Option<&[BezierPoint]>, baseline: f64) -> BezPath {
    let mut path = curve_path(top);
    let (Some(first), Some(last)) = (top.first(), top.last()) else {
        return path;
    };

    match bottom {
        Some(bottom) if !bottom.is_empty() => {
            append_reversed(&mut path, bottom);
        }
        _ => {
            path.line_to((last.x, baseline));
            path.line_to((first.x, baseline));
        }
    }
    path.close_path();
    path
}

fn append_forward(path: &mut BezPath, points: &[BezierPoint]) {
    for pair in points.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        path.curve_to(prev.after_ctl(), cur.before_ctl(), cur.knot());
    }
}

/// Walks `points` from last to first, mirroring each segment's control points.
fn append_reversed(path: &mut BezPath, points: &[BezierPoint]) {
    let Some(last) = points.last() else {
        return;
    };
    path.line_to(last.knot());
    for pair in points.windows(2).rev() {
        let (prev, cur) = (pair[0], pair[1]);
        path.curve_to(cur.before_ctl(), prev.after_ctl(), prev.knot());
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use kurbo::{PathEl, Shape};

    use super::*;

    fn samples() -> Vec<Point> {
        vec![
            Point::new(0.0, 50.0),
            Point::new(40.0, 10.0),
            Point::new(80.0, 30.0),
            Point::new(120.0, 90.0),
        ]
    }

    #[test]
    fn endpoint_tangents_are_flat() {
        let sweeps: [&[f64]; 3] = [&[3.0, -7.0], &[0.0, 10.0, 4.0, 12.0], &[5.0, 5.0, 9.0]];
        for ys in sweeps {
            let points: Vec<Point> = ys
                .iter()
                .enumerate()
                .map(|(i, y)| Point::new(i as f64 * 13.0, *y))
                .collect();
            let smoothed = smooth(&points).unwrap();
            let first = smoothed[0];
            let last = smoothed[smoothed.len() - 1];
            assert_eq!(first.before_ctl_y, first.y, "first incoming control for {ys:?}");
            assert_eq!(first.after_ctl_y, first.y, "first outgoing control for {ys:?}");
            assert_eq!(last.after_ctl_y, last.y, "last outgoing control for {ys:?}");
            assert_eq!(last.before_ctl_y, last.y, "last incoming control for {ys:?}");
        }
    }

    #[test]
    fn interior_tangent_uses_centered_difference() {
        let smoothed = smooth(&samples()).unwrap();
        assert_eq!(smoothed.len(), 4);
        // (30 - 50) / 8 = -2.5
        let p = smoothed[1];
        assert_eq!(p.before_ctl_y, 12.5);
        assert_eq!(p.after_ctl_y, 7.5);
        assert_eq!(p.before_ctl_x, 30.0);
        assert_eq!(p.after_ctl_x, 50.0);
        // (90 - 10) / 8 = 10
        let p = smoothed[2];
        assert_eq!(p.before_ctl_y, 20.0);
        assert_eq!(p.after_ctl_y, 40.0);
    }

    #[test]
    fn endpoint_controls_mirror_the_only_spacing() {
        let smoothed = smooth(&samples()).unwrap();
        assert_eq!(smoothed[0].before_ctl_x, -10.0);
        assert_eq!(smoothed[0].after_ctl_x, 10.0);
        assert_eq!(smoothed[3].before_ctl_x, 110.0);
        assert_eq!(smoothed[3].after_ctl_x, 130.0);
    }

    #[test]
    fn too_few_points_is_an_error() {
        assert_eq!(smooth(&[]), Err(DomainError::TooFewPoints { found: 0 }));
        assert_eq!(
            smooth(&[Point::new(1.0, 1.0)]),
            Err(DomainError::TooFewPoints { found: 1 })
        );
    }

    #[test]
    fn curve_chains_after_and_before_controls() {
        let smoothed = smooth(&samples()).unwrap();
        let path = curve_path(&smoothed);
        let els = path.elements();
        assert_eq!(els.len(), 4);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 50.0)));
        assert_eq!(
            els[2],
            PathEl::CurveTo(
                smoothed[1].after_ctl(),
                smoothed[2].before_ctl(),
                smoothed[2].knot()
            )
        );
    }

    #[test]
    fn band_over_baseline_closes_along_the_axis() {
        let smoothed = smooth(&samples()).unwrap();
        let path = band_path(&smoothed, None, 100.0);
        let els = path.elements();
        assert_eq!(els[els.len() - 3], PathEl::LineTo(Point::new(120.0, 100.0)));
        assert_eq!(els[els.len() - 2], PathEl::LineTo(Point::new(0.0, 100.0)));
        assert_eq!(els[els.len() - 1], PathEl::ClosePath);
        // Every sample is above the baseline, so the region has positive area.
        assert!(path.area().abs() > 0.0, "band should enclose some area");
    }

    #[test]
    fn band_over_lower_curve_walks_it_backwards() {
        let top = smooth(&samples()).unwrap();
        let lower: Vec<Point> = samples()
            .into_iter()
            .map(|p| Point::new(p.x, p.y + 40.0))
            .collect();
        let bottom = smooth(&lower).unwrap();
        let path = band_path(&top, Some(&bottom), 0.0);
        let els = path.elements();
        // move + 3 top curves + line across + 3 bottom curves + close
        assert_eq!(els.len(), 9);
        assert_eq!(els[4], PathEl::LineTo(bottom[3].knot()));
        assert_eq!(
            els[5],
            PathEl::CurveTo(bottom[3].before_ctl(), bottom[2].after_ctl(), bottom[2].knot())
        );
        assert_eq!(
            els[7],
            PathEl::CurveTo(bottom[1].before_ctl(), bottom[0].after_ctl(), bottom[0].knot())
        );
        // Top and bottom are 40px apart over 120px, which is 4800px² either orientation.
        assert!((path.area().abs() - 4800.0).abs() < 1.0, "area {}", path.area());
    }
}
