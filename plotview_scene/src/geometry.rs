// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind bounds formulas.
//!
//! World space is y-down. Angles are in degrees and rotate clockwise on
//! screen (positive `x` towards positive `y`).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

/// Returns `[top, right, bottom, left]` for bounds stored as a [`Rect`].
#[must_use]
pub fn trbl(bounds: Rect) -> [f64; 4] {
    [bounds.y0, bounds.x1, bounds.y1, bounds.x0]
}

/// Builds bounds from `[top, right, bottom, left]`.
#[must_use]
pub fn from_trbl([top, right, bottom, left]: [f64; 4]) -> Rect {
    Rect::new(left, top, right, bottom)
}

fn rotate(v: Vec2, degrees: f64) -> Vec2 {
    let radians = degrees * (core::f64::consts::PI / 180.0);
    let (sin, cos) = (radians.sin(), radians.cos());
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Bounds of a circle: `[y - r, x + r, y + r, x - r]`.
#[must_use]
pub fn circle_bounds(center: Point, radius: f64) -> Rect {
    Rect::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    )
}

/// Corners of a rectangle rotated about its center.
///
/// Order: top-left, top-right, bottom-right, bottom-left of the unrotated
/// rectangle.
#[must_use]
pub fn rectangle_corners(center: Point, width: f64, height: f64, angle: f64) -> [Point; 4] {
    let (hw, hh) = (width / 2.0, height / 2.0);
    [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
    .map(|corner| center + rotate(corner, angle))
}

/// Axis-aligned bounds of a rotated rectangle.
#[must_use]
pub fn rectangle_bounds(center: Point, width: f64, height: f64, angle: f64) -> Rect {
    points_bounds(&rectangle_corners(center, width, height, angle))
}

/// End point of a line of `length` leaving `start` at `angle`.
#[must_use]
pub fn line_end(start: Point, length: f64, angle: f64) -> Point {
    start + rotate(Vec2::new(length, 0.0), angle)
}

/// Bounds spanned by a line's start and end points.
#[must_use]
pub fn line_bounds(start: Point, length: f64, angle: f64) -> Rect {
    Rect::from_points(start, line_end(start, length, angle))
}

/// Bounds of an image displayed at `size`, centered on `center`.
#[must_use]
pub fn image_bounds(center: Point, size: Size) -> Rect {
    Rect::from_center_size(center, size)
}

/// Axis-aligned bounds of a non-empty point set.
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let first = points.first().copied().unwrap_or(Point::ORIGIN);
    points
        .iter()
        .fold(Rect::from_points(first, first), |r, p| r.union_pt(*p))
}

/// Where a laid out text block lands relative to its primitive position.
///
/// The glyph box is inflated by `frame` on each side and its top-left corner
/// is placed on the primitive position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    /// Added to laid out glyph points to get world offsets from the position.
    pub offset: Vec2,
    /// Size of the framed glyph box.
    pub footprint: Size,
}

impl TextPlacement {
    /// Margin around the glyph box, as a fraction of the letter height.
    pub const FRAME_RATIO: f64 = 0.3;

    /// Placement for a glyph box (`None` for text that draws nothing).
    #[must_use]
    pub fn new(glyph_box: Option<Rect>, letter_height: f64) -> Self {
        let frame = Self::FRAME_RATIO * letter_height;
        let glyph_box = glyph_box.unwrap_or(Rect::ZERO);
        Self {
            offset: Vec2::new(frame - glyph_box.x0, frame - glyph_box.y0),
            footprint: Size::new(
                glyph_box.width() + 2.0 * frame,
                glyph_box.height() + 2.0 * frame,
            ),
        }
    }

    /// World bounds `[y, x + w, y + h, x]` for a text at `position`.
    #[must_use]
    pub fn bounds(&self, position: Point) -> Rect {
        Rect::from_origin_size(position, self.footprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Rect, b: Rect) -> bool {
        trbl(a)
            .iter()
            .zip(trbl(b).iter())
            .all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn circle_matches_reference() {
        let b = circle_bounds(Point::new(250.0, 250.0), 50.0);
        assert_eq!(trbl(b), [200.0, 300.0, 300.0, 200.0]);
        assert_eq!(from_trbl(trbl(b)), b);
    }

    #[test]
    fn unrotated_rectangle() {
        let b = rectangle_bounds(Point::new(200.0, 100.0), 120.0, 80.0, 0.0);
        assert_eq!(trbl(b), [60.0, 260.0, 140.0, 140.0]);
    }

    #[test]
    fn rectangle_full_turn_matches_unrotated() {
        let c = Point::new(-12.5, 40.0);
        let a = rectangle_bounds(c, 30.0, 10.0, 0.0);
        let b = rectangle_bounds(c, 30.0, 10.0, 360.0);
        assert!(close(a, b), "{a:?} vs {b:?}");
    }

    #[test]
    fn rectangle_quarter_turn_swaps_extent() {
        let b = rectangle_bounds(Point::ORIGIN, 30.0, 10.0, 90.0);
        assert!(close(b, Rect::new(-5.0, -15.0, 5.0, 15.0)), "{b:?}");
    }

    #[test]
    fn rotated_rectangle_contains_corners() {
        let c = Point::new(200.0, 200.0);
        let b = rectangle_bounds(c, 120.0, 80.0, 30.0);
        let half_w = 60.0 * 30_f64.to_radians().cos() + 40.0 * 30_f64.to_radians().sin();
        assert!((b.width() - 2.0 * half_w).abs() < EPS);
        assert!((b.center().x - 200.0).abs() < EPS);
    }

    #[test]
    fn line_bounds_are_min_max() {
        let b = line_bounds(Point::new(300.0, 300.0), 100.0, 0.0);
        assert_eq!(trbl(b), [300.0, 400.0, 300.0, 300.0]);

        let b = line_bounds(Point::new(0.0, 0.0), 10.0, 180.0);
        assert!(close(b, Rect::new(-10.0, 0.0, 0.0, 0.0)), "{b:?}");

        let end = line_end(Point::new(1.0, 1.0), 2.0, 90.0);
        assert!((end.x - 1.0).abs() < EPS && (end.y - 3.0).abs() < EPS);
    }

    #[test]
    fn image_is_centered() {
        let b = image_bounds(Point::new(-100.0, -50.0), Size::new(100.0, 100.0));
        assert_eq!(trbl(b), [-100.0, -50.0, 0.0, -150.0]);
    }

    #[test]
    fn text_placement_frames_glyph_box() {
        let placement = TextPlacement::new(Some(Rect::new(0.0, 0.0, 100.0, 20.0)), 20.0);
        assert_eq!(placement.offset, Vec2::new(6.0, 6.0));
        let b = placement.bounds(Point::new(250.0, 250.0));
        assert_eq!(trbl(b), [250.0, 362.0, 282.0, 250.0]);

        let empty = TextPlacement::new(None, 10.0);
        assert_eq!(empty.footprint, Size::new(6.0, 6.0));
    }
}
