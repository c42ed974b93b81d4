// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use plotview_font::StrokeFont;
use plotview_view2d::{Camera, CameraConfig, PanDirection};

use crate::image::{DEFAULT_IMAGE_BOX, fit_keep_aspect};
use crate::{
    DrawList, ImageLoader, ImageSource, Primitive, PrimitiveDesc, PrimitiveId, RenderSettings,
    SceneError, Style, build_draw_list,
};

/// A collection of primitives viewed through one camera.
///
/// Primitives keep their insertion order, which is also the tie-break for
/// equal depths in the draw list.
#[derive(Clone, Debug)]
pub struct Scene {
    // Ids are strictly increasing along the vec.
    entries: Vec<(PrimitiveId, Primitive)>,
    next_id: u64,
    camera: Camera,
    font: StrokeFont,
    settings: RenderSettings,
    image_box: Size,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Camera::default(), StrokeFont::default())
    }
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new(camera: Camera, font: StrokeFont) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            camera,
            font,
            settings: RenderSettings::default(),
            image_box: DEFAULT_IMAGE_BOX,
        }
    }

    /// Creates an empty scene with a camera built from `config`.
    pub fn with_config(config: CameraConfig) -> Result<Self, SceneError> {
        Ok(Self::new(Camera::new(config)?, StrokeFont::default()))
    }

    /// Sets the box that [`Scene::add_image`] fits images into.
    #[must_use]
    pub fn with_image_box(mut self, image_box: Size) -> Self {
        self.image_box = image_box;
        self
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The font used for text primitives.
    #[must_use]
    pub fn font(&self) -> &StrokeFont {
        &self.font
    }

    // --- Primitives ---

    /// Validates `desc`, computes its bounds and appends it.
    pub fn add_primitive(&mut self, desc: PrimitiveDesc) -> Result<PrimitiveId, SceneError> {
        let primitive = Primitive::new(desc, &self.font)?;
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        log::trace!("add {id:?} {:?} bounds={:?}", primitive.kind(), primitive.bounds());
        self.entries.push((id, primitive));
        Ok(id)
    }

    /// Adds an image centered on `center`, sized to fit the image box with its
    /// aspect ratio kept.
    pub fn add_image(
        &mut self,
        center: Point,
        z: f64,
        source: impl Into<ImageSource>,
        loader: &impl ImageLoader,
    ) -> Result<PrimitiveId, SceneError> {
        let source = source.into();
        let Some(natural) = loader.dimensions(&source) else {
            log::warn!("image loader could not read {:?}", source.as_str());
            return Err(SceneError::ImageUnavailable(source));
        };
        let size = fit_keep_aspect(natural, self.image_box);
        self.add_primitive(PrimitiveDesc::image(center, source, size).with_z(z))
    }

    /// Removes and returns a primitive.
    pub fn remove_primitive(&mut self, id: PrimitiveId) -> Result<Primitive, SceneError> {
        let index = self.index_of(id)?;
        Ok(self.entries.remove(index).1)
    }

    /// Replaces a primitive's description, keeping its id and order.
    ///
    /// On error the primitive is unchanged.
    pub fn update_primitive(
        &mut self,
        id: PrimitiveId,
        desc: PrimitiveDesc,
    ) -> Result<(), SceneError> {
        let index = self.index_of(id)?;
        self.entries[index].1.replace(desc, &self.font)
    }

    /// Moves a primitive's anchor point.
    pub fn move_to(&mut self, id: PrimitiveId, position: Point) -> Result<(), SceneError> {
        let index = self.index_of(id)?;
        self.entries[index].1.set_position(position, &self.font)
    }

    /// Changes a primitive's depth.
    pub fn set_z(&mut self, id: PrimitiveId, z: f64) -> Result<(), SceneError> {
        let index = self.index_of(id)?;
        self.entries[index].1.set_z(z)
    }

    /// Changes a primitive's stroke appearance.
    pub fn set_style(&mut self, id: PrimitiveId, style: Style) -> Result<(), SceneError> {
        let index = self.index_of(id)?;
        self.entries[index].1.set_style(style)
    }

    /// Looks a primitive up.
    #[must_use]
    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.index_of(id).ok().map(|i| &self.entries[i].1)
    }

    /// Primitives in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> + '_ {
        self.entries.iter().map(|(id, p)| (*id, p))
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the scene holds no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every primitive. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Shows or hides all vector shapes. Images stay visible.
    pub fn set_shapes_visible(&mut self, visible: bool) {
        self.settings.shapes_visible = visible;
    }

    /// Whether vector shapes are drawn.
    #[must_use]
    pub fn shapes_visible(&self) -> bool {
        self.settings.shapes_visible
    }

    fn index_of(&self, id: PrimitiveId) -> Result<usize, SceneError> {
        self.entries
            .binary_search_by_key(&id, |(id, _)| *id)
            .map_err(|_| SceneError::UnknownPrimitive(id))
    }

    // --- Camera ---

    /// Pans by a screen-space delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.camera.pan(delta);
    }

    /// Pans one step in `direction`.
    pub fn nudge(&mut self, direction: PanDirection) {
        self.camera.nudge(direction);
    }

    /// Pans so content follows a pointer drag.
    pub fn drag(&mut self, pointer_delta: Vec2) {
        self.camera.drag(pointer_delta);
    }

    /// Steps the zoom in.
    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
    }

    /// Steps the zoom out.
    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
    }

    /// Applies wheel notches; positive zooms in.
    pub fn wheel(&mut self, notches: i32) {
        self.camera.wheel(notches);
    }

    /// Sets the zoom factor directly.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), SceneError> {
        Ok(self.camera.set_zoom(zoom)?)
    }

    /// Zooms by `factor` keeping the world point under `anchor` fixed.
    pub fn zoom_about_screen_point(&mut self, anchor: Point, factor: f64) -> Result<(), SceneError> {
        Ok(self.camera.zoom_about_screen_point(anchor, factor)?)
    }

    /// Resizes the window.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), SceneError> {
        Ok(self.camera.resize(width, height)?)
    }

    /// Changes the depth cutoff.
    pub fn set_z_cutoff(&mut self, z_cutoff: f64) -> Result<(), SceneError> {
        Ok(self.camera.set_z_cutoff(z_cutoff)?)
    }

    /// Changes the culling margin inset.
    pub fn set_edge_inset(&mut self, inset: f64) -> Result<(), SceneError> {
        Ok(self.camera.set_edge_inset(inset)?)
    }

    /// Converts a window point to world space.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.camera.screen_to_world(pt)
    }

    /// Converts a world point to window space.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.camera.world_to_screen(pt)
    }

    /// Union of the bounds of primitives below the depth cutoff.
    #[must_use]
    pub fn world_bounds(&self) -> Option<Rect> {
        let cutoff = self.camera.z_cutoff();
        self.entries
            .iter()
            .filter(|(_, p)| p.z() < cutoff)
            .map(|(_, p)| p.bounds())
            .reduce(|a, b| a.union(b))
    }

    /// Zooms and pans so every primitive below the depth cutoff fits in the
    /// window. An empty scene resets the camera to zoom 1, pan 0.
    pub fn frame_all(&mut self) {
        let content = self.world_bounds();
        log::debug!("frame_all over {content:?}");
        self.camera.frame_rect(content);
    }

    // --- Rendering ---

    /// Culls, orders and projects the scene for drawing.
    #[must_use]
    pub fn build_draw_list(&self) -> DrawList {
        build_draw_list(self.iter(), &self.camera, &self.font, self.settings)
    }
}
