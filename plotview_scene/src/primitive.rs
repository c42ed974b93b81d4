// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives and their cached world bounds.

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use plotview_font::{HAlign, LayoutOptions, StrokeFont, VAlign};

use crate::geometry::{self, TextPlacement};
use crate::{GeometryError, SceneError};

/// Stable handle for a primitive in a [`crate::Scene`].
///
/// Ids are handed out in increasing order and never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct PrimitiveId(pub u64);

/// Reference to a raster image, resolved by an [`crate::ImageLoader`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageSource(Arc<str>);

impl ImageSource {
    /// Wraps a path or URI.
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self(source.into())
    }

    /// The path or URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageSource {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

/// Stroke appearance shared by all vector kinds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in screen pixels.
    pub line_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 2.0,
        }
    }
}

/// Kind tag of a [`Shape`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Raster image.
    Image,
    /// Circle outline.
    Circle,
    /// Rotated rectangle outline.
    Rectangle,
    /// Straight segment.
    Line,
    /// Stroke-font text.
    Text,
}

/// Kind-specific geometry. Lengths are in world units, angles in degrees.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Raster image centered on the position.
    Image {
        /// Where the pixels come from.
        source: ImageSource,
        /// Display size in world units at zoom 1.
        size: Size,
    },
    /// Circle centered on the position.
    Circle {
        /// Radius.
        radius: f64,
    },
    /// Rectangle centered on the position, rotated about it.
    Rectangle {
        /// Unrotated width.
        width: f64,
        /// Unrotated height.
        height: f64,
        /// Rotation.
        angle: f64,
    },
    /// Segment from the position, `length` long, leaving at `angle`.
    Line {
        /// Length.
        length: f64,
        /// Direction; 0 points along `+x`.
        angle: f64,
    },
    /// Text whose framed box has its top-left corner on the position.
    Text {
        /// Characters to draw.
        content: String,
        /// Cell height and advance.
        letter_height: f64,
        /// Rotation of the glyphs.
        angle: f64,
    },
}

impl Shape {
    /// The kind tag.
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Image { .. } => PrimitiveKind::Image,
            Self::Circle { .. } => PrimitiveKind::Circle,
            Self::Rectangle { .. } => PrimitiveKind::Rectangle,
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Text { .. } => PrimitiveKind::Text,
        }
    }

    fn validate(&self) -> Result<(), GeometryError> {
        fn positive(v: f64) -> bool {
            v.is_finite() && v > 0.0
        }
        fn finite_angle(angle: f64) -> Result<(), GeometryError> {
            if angle.is_finite() {
                Ok(())
            } else {
                Err(GeometryError::NonFinite("angle"))
            }
        }
        match self {
            Self::Image { size, .. } => {
                if !(positive(size.width) && positive(size.height)) {
                    return Err(GeometryError::NonPositiveImageSize {
                        width: size.width,
                        height: size.height,
                    });
                }
            }
            Self::Circle { radius } => {
                if !positive(*radius) {
                    return Err(GeometryError::NonPositiveRadius(*radius));
                }
            }
            Self::Rectangle {
                width,
                height,
                angle,
            } => {
                if !(positive(*width) && positive(*height)) {
                    return Err(GeometryError::NonPositiveDimensions {
                        width: *width,
                        height: *height,
                    });
                }
                finite_angle(*angle)?;
            }
            Self::Line { length, angle } => {
                if !positive(*length) {
                    return Err(GeometryError::NonPositiveLength(*length));
                }
                finite_angle(*angle)?;
            }
            Self::Text {
                letter_height,
                angle,
                ..
            } => {
                if !positive(*letter_height) {
                    return Err(GeometryError::NonPositiveLetterHeight(*letter_height));
                }
                finite_angle(*angle)?;
            }
        }
        Ok(())
    }
}

/// Everything needed to create a [`Primitive`].
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveDesc {
    /// Anchor point; its meaning depends on the shape.
    pub position: Point,
    /// Depth. Larger values draw later; values at or above the camera's cutoff
    /// are hidden.
    pub z: f64,
    /// Stroke appearance.
    pub style: Style,
    /// Kind-specific geometry.
    pub shape: Shape,
}

impl PrimitiveDesc {
    /// A description at depth 0 with the default style.
    #[must_use]
    pub fn new(position: Point, shape: Shape) -> Self {
        Self {
            position,
            z: 0.0,
            style: Style::default(),
            shape,
        }
    }

    /// A circle centered on `center`.
    #[must_use]
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, Shape::Circle { radius })
    }

    /// A rectangle centered on `center`.
    #[must_use]
    pub fn rectangle(center: Point, width: f64, height: f64, angle: f64) -> Self {
        Self::new(
            center,
            Shape::Rectangle {
                width,
                height,
                angle,
            },
        )
    }

    /// A line leaving `start`.
    #[must_use]
    pub fn line(start: Point, length: f64, angle: f64) -> Self {
        Self::new(start, Shape::Line { length, angle })
    }

    /// Text with its framed box's top-left corner on `top_left`.
    #[must_use]
    pub fn text(top_left: Point, content: impl Into<String>, letter_height: f64, angle: f64) -> Self {
        Self::new(
            top_left,
            Shape::Text {
                content: content.into(),
                letter_height,
                angle,
            },
        )
    }

    /// An image centered on `center`, displayed at `size`.
    #[must_use]
    pub fn image(center: Point, source: impl Into<ImageSource>, size: Size) -> Self {
        Self::new(
            center,
            Shape::Image {
                source: source.into(),
                size,
            },
        )
    }

    /// Sets the depth.
    #[must_use]
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the stroke color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.style.line_width = line_width;
        self
    }

    fn validate(&self) -> Result<(), GeometryError> {
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return Err(GeometryError::NonFinite("position"));
        }
        if !self.z.is_finite() {
            return Err(GeometryError::NonFinite("z"));
        }
        if !valid_line_width(self.style.line_width) {
            return Err(GeometryError::NegativeLineWidth(self.style.line_width));
        }
        self.shape.validate()
    }
}

/// Options used to lay out a text primitive: square cells of `letter_height`,
/// left/bottom aligned, y flipped into world space, then rotated.
#[must_use]
pub fn text_layout_options(letter_height: f64, angle: f64) -> LayoutOptions {
    LayoutOptions::default()
        .with_square_cells(letter_height)
        .with_align(HAlign::Left, VAlign::Bottom)
        .with_mirror(false, true)
        .with_rotation(angle)
}

/// A validated primitive with its world bounds.
///
/// Bounds always match the current geometry: every mutation recomputes them
/// and a failing mutation changes nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    desc: PrimitiveDesc,
    bounds: Rect,
}

impl Primitive {
    /// Validates `desc` and computes its bounds. `font` is only consulted for
    /// text.
    pub fn new(desc: PrimitiveDesc, font: &StrokeFont) -> Result<Self, SceneError> {
        desc.validate()?;
        let bounds = compute_bounds(&desc, font)?;
        Ok(Self { desc, bounds })
    }

    /// The full description.
    #[must_use]
    pub fn desc(&self) -> &PrimitiveDesc {
        &self.desc
    }

    /// Anchor point.
    #[must_use]
    pub fn position(&self) -> Point {
        self.desc.position
    }

    /// Depth.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.desc.z
    }

    /// Stroke appearance.
    #[must_use]
    pub fn style(&self) -> Style {
        self.desc.style
    }

    /// Kind-specific geometry.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.desc.shape
    }

    /// Kind tag.
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        self.desc.shape.kind()
    }

    /// World-space bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Bounds as `[top, right, bottom, left]`.
    #[must_use]
    pub fn trbl(&self) -> [f64; 4] {
        geometry::trbl(self.bounds)
    }

    /// Recomputes the bounds from the current geometry.
    ///
    /// Idempotent: with unchanged geometry the bounds are unchanged.
    pub fn recompute_bounds(&mut self, font: &StrokeFont) -> Result<(), SceneError> {
        self.bounds = compute_bounds(&self.desc, font)?;
        Ok(())
    }

    /// Replaces the whole description, or leaves `self` untouched on error.
    pub fn replace(&mut self, desc: PrimitiveDesc, font: &StrokeFont) -> Result<(), SceneError> {
        *self = Self::new(desc, font)?;
        Ok(())
    }

    /// Moves the anchor point.
    pub fn set_position(&mut self, position: Point, font: &StrokeFont) -> Result<(), SceneError> {
        let mut desc = self.desc.clone();
        desc.position = position;
        self.replace(desc, font)
    }

    /// Changes the depth. Bounds do not depend on it.
    pub fn set_z(&mut self, z: f64) -> Result<(), SceneError> {
        if !z.is_finite() {
            return Err(GeometryError::NonFinite("z").into());
        }
        self.desc.z = z;
        Ok(())
    }

    /// Changes the stroke appearance.
    pub fn set_style(&mut self, style: Style) -> Result<(), SceneError> {
        if !valid_line_width(style.line_width) {
            return Err(GeometryError::NegativeLineWidth(style.line_width).into());
        }
        self.desc.style = style;
        Ok(())
    }
}

fn compute_bounds(desc: &PrimitiveDesc, font: &StrokeFont) -> Result<Rect, SceneError> {
    let p = desc.position;
    Ok(match &desc.shape {
        Shape::Image { size, .. } => geometry::image_bounds(p, *size),
        Shape::Circle { radius } => geometry::circle_bounds(p, *radius),
        Shape::Rectangle {
            width,
            height,
            angle,
        } => geometry::rectangle_bounds(p, *width, *height, *angle),
        Shape::Line { length, angle } => geometry::line_bounds(p, *length, *angle),
        Shape::Text {
            content,
            letter_height,
            angle,
        } => text_placement(content, *letter_height, *angle, font)?.bounds(p),
    })
}

fn text_placement(
    content: &str,
    letter_height: f64,
    angle: f64,
    font: &StrokeFont,
) -> Result<TextPlacement, SceneError> {
    let glyph_box = font.text_bounds(content, &text_layout_options(letter_height, angle))?;
    Ok(TextPlacement::new(glyph_box, letter_height))
}

fn valid_line_width(width: f64) -> bool {
    width.is_finite() && width >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotview_font::LayoutError;

    fn font() -> StrokeFont {
        StrokeFont::default()
    }

    #[test]
    fn circle_bounds_cached() {
        let p = Primitive::new(PrimitiveDesc::circle(Point::new(250.0, 250.0), 50.0), &font())
            .unwrap();
        assert_eq!(p.trbl(), [200.0, 300.0, 300.0, 200.0]);
        assert_eq!(p.kind(), PrimitiveKind::Circle);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut p = Primitive::new(
            PrimitiveDesc::rectangle(Point::new(10.0, 20.0), 30.0, 40.0, 17.0),
            &font(),
        )
        .unwrap();
        let before = p.bounds();
        p.recompute_bounds(&font()).unwrap();
        p.recompute_bounds(&font()).unwrap();
        assert_eq!(p.bounds(), before);
    }

    #[test]
    fn invalid_geometry_rejected() {
        let f = font();
        assert_eq!(
            Primitive::new(PrimitiveDesc::circle(Point::ORIGIN, 0.0), &f),
            Err(SceneError::Geometry(GeometryError::NonPositiveRadius(0.0)))
        );
        assert!(matches!(
            Primitive::new(PrimitiveDesc::rectangle(Point::ORIGIN, -1.0, 5.0, 0.0), &f),
            Err(SceneError::Geometry(GeometryError::NonPositiveDimensions { .. }))
        ));
        assert!(matches!(
            Primitive::new(PrimitiveDesc::line(Point::ORIGIN, 0.0, 0.0), &f),
            Err(SceneError::Geometry(GeometryError::NonPositiveLength(_)))
        ));
        assert!(matches!(
            Primitive::new(PrimitiveDesc::text(Point::ORIGIN, "A", -2.0, 0.0), &f),
            Err(SceneError::Geometry(GeometryError::NonPositiveLetterHeight(_)))
        ));
        assert!(matches!(
            Primitive::new(PrimitiveDesc::circle(Point::new(f64::NAN, 0.0), 1.0), &f),
            Err(SceneError::Geometry(GeometryError::NonFinite("position")))
        ));
        assert!(matches!(
            Primitive::new(PrimitiveDesc::circle(Point::ORIGIN, 1.0).with_z(f64::INFINITY), &f),
            Err(SceneError::Geometry(GeometryError::NonFinite("z")))
        ));
    }

    #[test]
    fn unknown_glyph_surfaces_layout_error() {
        let err = Primitive::new(PrimitiveDesc::text(Point::ORIGIN, "a°", 10.0, 0.0), &font())
            .unwrap_err();
        assert!(matches!(
            err,
            SceneError::Layout(LayoutError::UnknownCharacter { ch: '°', .. })
        ));
    }

    #[test]
    fn failed_update_keeps_previous_state() {
        let f = font();
        let mut p = Primitive::new(PrimitiveDesc::line(Point::ORIGIN, 10.0, 0.0), &f).unwrap();
        let before = p.clone();
        assert!(p.set_position(Point::new(f64::INFINITY, 0.0), &f).is_err());
        assert!(p.set_z(f64::NAN).is_err());
        assert_eq!(p, before);

        p.set_position(Point::new(5.0, 5.0), &f).unwrap();
        assert_eq!(p.trbl(), [5.0, 15.0, 5.0, 5.0]);
    }

    #[test]
    fn text_bounds_frame_the_glyphs() {
        let f = font();
        let p = Primitive::new(PrimitiveDesc::text(Point::new(100.0, 50.0), "Hi", 20.0, 0.0), &f)
            .unwrap();
        let glyphs = f
            .text_bounds("Hi", &text_layout_options(20.0, 0.0))
            .unwrap()
            .unwrap();
        let frame = 6.0;
        let b = p.bounds();
        assert_eq!(b.origin(), Point::new(100.0, 50.0));
        assert!((b.width() - (glyphs.width() + 2.0 * frame)).abs() < 1e-9);
        assert!((b.height() - (glyphs.height() + 2.0 * frame)).abs() < 1e-9);
    }

    #[test]
    fn empty_text_has_frame_only() {
        let p = Primitive::new(PrimitiveDesc::text(Point::ORIGIN, "  ", 10.0, 0.0), &font())
            .unwrap();
        assert_eq!(p.trbl(), [0.0, 6.0, 6.0, 0.0]);
    }
}
