// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Culling, depth ordering and projection into a screen-space draw list.

use alloc::vec::Vec;

use kurbo::{Point, Size};
use plotview_font::{Polyline, StrokeFont};
use plotview_view2d::Camera;

use crate::geometry;
use crate::primitive::text_layout_options;
use crate::{ImageSource, Primitive, PrimitiveId, Shape, Style};

/// One screen-space drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Blit an image scaled to `size`, centered on `center`.
    Image {
        /// Pixel source.
        source: ImageSource,
        /// Screen center.
        center: Point,
        /// Screen size.
        size: Size,
    },
    /// Stroke a circle outline.
    Circle {
        /// Screen center.
        center: Point,
        /// Screen radius.
        radius: f64,
    },
    /// Stroke a closed polygon (rotated rectangles).
    Polygon {
        /// Corners in drawing order.
        points: [Point; 4],
    },
    /// Stroke a segment.
    Line {
        /// Screen start.
        from: Point,
        /// Screen end.
        to: Point,
    },
    /// Stroke glyph polylines and plot glyph dots.
    Text {
        /// Polylines with at least two distinct points.
        strokes: Vec<Polyline>,
        /// Single-point marks.
        dots: Vec<Point>,
    },
}

/// A visible primitive, projected for drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem {
    /// Which primitive this came from.
    pub id: PrimitiveId,
    /// Its depth.
    pub z: f64,
    /// Stroke appearance. Unused by images.
    pub style: Style,
    /// What to draw.
    pub op: DrawOp,
}

/// Ordered draw commands: all images, then all vector shapes, each group in
/// non-decreasing `z`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    items: Vec<DrawItem>,
    image_count: usize,
}

impl DrawList {
    /// All items in drawing order.
    #[must_use]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// The image prefix.
    #[must_use]
    pub fn images(&self) -> &[DrawItem] {
        &self.items[..self.image_count]
    }

    /// The vector-shape suffix.
    #[must_use]
    pub fn shapes(&self) -> &[DrawItem] {
        &self.items[self.image_count..]
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterator over items in drawing order.
    pub fn iter(&self) -> core::slice::Iter<'_, DrawItem> {
        self.items.iter()
    }

    /// Ids in drawing order.
    pub fn ids(&self) -> impl Iterator<Item = PrimitiveId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// Consumes the list, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<DrawItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawItem;
    type IntoIter = core::slice::Iter<'a, DrawItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Switches applied while building a [`DrawList`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    /// Emit vector shapes. When `false` only images are drawn.
    pub shapes_visible: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            shapes_visible: true,
        }
    }
}

/// Builds the draw list for `primitives` as seen by `camera`.
///
/// Images come first, then vector shapes. Each group is stably sorted by `z`,
/// so equal depths keep the iteration order of `primitives`. A primitive is
/// emitted only if [`Camera::is_visible`] accepts its bounds and depth.
///
/// Text that fails to lay out is logged and skipped.
pub fn build_draw_list<'a, I>(
    primitives: I,
    camera: &Camera,
    font: &StrokeFont,
    settings: RenderSettings,
) -> DrawList
where
    I: IntoIterator<Item = (PrimitiveId, &'a Primitive)>,
{
    let (mut images, mut shapes): (Vec<_>, Vec<_>) = primitives
        .into_iter()
        .partition(|(_, p)| matches!(p.shape(), Shape::Image { .. }));
    images.sort_by(|a, b| a.1.z().total_cmp(&b.1.z()));
    shapes.sort_by(|a, b| a.1.z().total_cmp(&b.1.z()));

    let mut list = DrawList {
        items: Vec::with_capacity(images.len() + shapes.len()),
        image_count: 0,
    };
    let mut culled = 0_usize;

    for (id, primitive) in images {
        if emit(&mut list, id, primitive, camera, font).is_none() {
            culled += 1;
        }
    }
    list.image_count = list.items.len();

    if settings.shapes_visible {
        for (id, primitive) in shapes {
            if emit(&mut list, id, primitive, camera, font).is_none() {
                culled += 1;
            }
        }
    }

    log::debug!(
        "draw list: {} images, {} shapes, {} culled",
        list.image_count,
        list.items.len() - list.image_count,
        culled
    );
    list
}

fn emit(
    list: &mut DrawList,
    id: PrimitiveId,
    primitive: &Primitive,
    camera: &Camera,
    font: &StrokeFont,
) -> Option<()> {
    if !camera.is_visible(primitive.bounds(), primitive.z()) {
        log::trace!("culled {id:?} bounds={:?} z={}", primitive.bounds(), primitive.z());
        return None;
    }
    let op = project(primitive, camera, font)?;
    list.items.push(DrawItem {
        id,
        z: primitive.z(),
        style: primitive.style(),
        op,
    });
    Some(())
}

/// Projects a primitive's geometry to screen space.
fn project(primitive: &Primitive, camera: &Camera, font: &StrokeFont) -> Option<DrawOp> {
    let position = primitive.position();
    let zoom = camera.zoom();
    let op = match primitive.shape() {
        Shape::Image { source, size } => DrawOp::Image {
            source: source.clone(),
            center: camera.world_to_screen(position),
            size: *size * camera.image_scale(),
        },
        Shape::Circle { radius } => DrawOp::Circle {
            center: camera.world_to_screen(position),
            radius: radius * zoom,
        },
        Shape::Rectangle {
            width,
            height,
            angle,
        } => DrawOp::Polygon {
            points: geometry::rectangle_corners(position, *width, *height, *angle)
                .map(|p| camera.world_to_screen(p)),
        },
        Shape::Line { length, angle } => DrawOp::Line {
            from: camera.world_to_screen(position),
            to: camera.world_to_screen(geometry::line_end(position, *length, *angle)),
        },
        Shape::Text {
            content,
            letter_height,
            angle,
        } => {
            let options = text_layout_options(*letter_height, *angle);
            let lines = match font.layout(content, Point::ORIGIN, &options) {
                Ok(lines) => lines,
                Err(err) => {
                    log::warn!("skipping text {content:?}: {err}");
                    return None;
                }
            };
            let placement =
                geometry::TextPlacement::new(plotview_font::bounding_box(&lines), *letter_height);
            let anchor = position + placement.offset;
            let mut strokes = Vec::with_capacity(lines.len());
            let mut dots = Vec::new();
            for line in lines {
                let screen: Polyline = line
                    .iter()
                    .map(|p| camera.world_to_screen(anchor + p.to_vec2()))
                    .collect();
                match screen.first() {
                    Some(first) if screen.iter().all(|p| p == first) => dots.push(*first),
                    Some(_) => strokes.push(screen),
                    None => {}
                }
            }
            DrawOp::Text { strokes, dots }
        }
    };
    Some(op)
}
