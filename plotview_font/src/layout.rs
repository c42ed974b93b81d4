// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pipeline and the polyline transforms it is built from.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::{GlyphTable, HAlign, LayoutError, LayoutOptions, VAlign};

/// One stroke: a sequence of points joined by straight segments.
///
/// A polyline whose points all coincide is a dot.
pub type Polyline = SmallVec<[Point; 8]>;

/// Lays out `text` and places the result at `origin`.
///
/// Steps, in order: per-character strokes scaled by `size / divisor` and
/// advanced by `index * width`; mirroring; alignment against the mirrored
/// bounding box; rotation; translation by `origin`.
pub fn layout(
    table: &GlyphTable,
    text: &str,
    origin: Point,
    options: &LayoutOptions,
) -> Result<Vec<Polyline>, LayoutError> {
    options.validate()?;
    let divisor = options.divisor.unwrap_or(table.divisor());
    let mut lines = strokes(table, text, options.size / divisor, options.width)?;

    if options.mirror_horizontal {
        mirror_x(&mut lines);
    }
    if options.mirror_vertical {
        mirror_y(&mut lines);
    }

    if let Some(bbox) = bounding_box(&lines) {
        let offset = alignment_offset(bbox, options.horizontal_align, options.vertical_align);
        if offset != Vec2::ZERO {
            shift(&mut lines, offset);
        }
    }

    if options.rotate_degrees != 0.0 {
        rotate(&mut lines, options.rotate_degrees);
    }
    if origin != Point::ORIGIN {
        shift(&mut lines, origin.to_vec2());
    }
    Ok(lines)
}

/// Raw glyph strokes for `text`, scaled and advanced but not yet aligned.
///
/// Spaces draw nothing but still take a slot.
pub fn strokes(
    table: &GlyphTable,
    text: &str,
    scale: f64,
    advance: f64,
) -> Result<Vec<Polyline>, LayoutError> {
    let mut lines = Vec::new();
    for (index, ch) in text.chars().enumerate() {
        if ch == ' ' {
            continue;
        }
        let glyph = table
            .get(ch)
            .ok_or_else(|| LayoutError::unknown_character(ch))?;
        let x0 = index as f64 * advance;
        lines.extend(glyph.strokes.iter().map(|stroke| {
            stroke
                .iter()
                .map(|&(x, y)| Point::new(x0 + f64::from(x) * scale, f64::from(y) * scale))
                .collect::<Polyline>()
        }));
    }
    Ok(lines)
}

/// Axis-aligned bounds of all points, or `None` when there are none.
#[must_use]
pub fn bounding_box(lines: &[Polyline]) -> Option<Rect> {
    let mut points = lines.iter().flatten();
    let first = points.next()?;
    let init = Rect::new(first.x, first.y, first.x, first.y);
    Some(points.fold(init, |r, p| {
        Rect::new(r.x0.min(p.x), r.y0.min(p.y), r.x1.max(p.x), r.y1.max(p.y))
    }))
}

/// Offset that moves `bbox` into the requested alignment.
#[must_use]
pub fn alignment_offset(bbox: Rect, horizontal: HAlign, vertical: VAlign) -> Vec2 {
    let dx = match horizontal {
        HAlign::Left => -bbox.x0,
        HAlign::Right => -bbox.x1,
        HAlign::Center => -0.5 * (bbox.x0 + bbox.x1),
    };
    let dy = match vertical {
        VAlign::Bottom => -bbox.y0,
        VAlign::Top => -bbox.y1,
        VAlign::Base => 0.0,
        VAlign::Center => -0.5 * (bbox.y0 + bbox.y1),
    };
    Vec2::new(dx, dy)
}

/// Translates every point by `offset`.
pub fn shift(lines: &mut [Polyline], offset: Vec2) {
    for p in lines.iter_mut().flatten() {
        *p += offset;
    }
}

/// Scales every point about the origin.
pub fn scale(lines: &mut [Polyline], factor: f64) {
    for p in lines.iter_mut().flatten() {
        *p = Point::new(p.x * factor, p.y * factor);
    }
}

/// Reflects `x`.
pub fn mirror_x(lines: &mut [Polyline]) {
    for p in lines.iter_mut().flatten() {
        p.x = -p.x;
    }
}

/// Reflects `y`.
pub fn mirror_y(lines: &mut [Polyline]) {
    for p in lines.iter_mut().flatten() {
        p.y = -p.y;
    }
}

/// Rotates counter-clockwise (y-up) about the origin.
///
/// Whole multiples of 90° take the exact axis-swap path so that quarter
/// turns never pick up trigonometric rounding error.
pub fn rotate(lines: &mut [Polyline], degrees: f64) {
    if degrees % 90.0 == 0.0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "reduced to -3..=3 before the cast"
        )]
        let turns = ((degrees / 90.0) % 4.0) as i64;
        rotate_quarter_turns(lines, turns);
        return;
    }
    let radians = degrees * (core::f64::consts::PI / 180.0);
    let (sin, cos) = (radians.sin(), radians.cos());
    for p in lines.iter_mut().flatten() {
        *p = Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
    }
}

/// Rotates by `turns` quarter turns; negative counts turn clockwise.
pub fn rotate_quarter_turns(lines: &mut [Polyline], turns: i64) {
    let turns = turns.rem_euclid(4);
    if turns == 0 {
        return;
    }
    for p in lines.iter_mut().flatten() {
        *p = match turns {
            1 => Point::new(-p.y, p.x),
            2 => Point::new(-p.x, -p.y),
            _ => Point::new(p.y, -p.x),
        };
    }
}
