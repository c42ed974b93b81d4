// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{check_cutoff, check_inset, check_window};
use crate::{CameraConfig, CameraError};

/// Direction of a fixed-size pan step (arrow-key navigation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    /// Move the camera towards negative `x`.
    Left,
    /// Move the camera towards positive `x`.
    Right,
    /// Move the camera towards negative `y`.
    Up,
    /// Move the camera towards positive `y`.
    Down,
}

/// The four culling margins, in scaled (zoomed) world units.
///
/// A primitive is visible when its scaled bounds overlap the open rectangle
/// `left..right` × `upper..lower`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Top edge (smallest `y`; screen `y` grows downwards).
    pub upper: f64,
    /// Bottom edge (largest `y`).
    pub lower: f64,
}

/// Virtual camera over an unbounded world plane.
///
/// The camera maps world coordinates onto a fixed-size window:
///
/// ```text
/// screen = world * zoom - pan
/// ```
///
/// `pan` is therefore expressed in screen pixels: it is the scaled world
/// position shown at the window's top-left corner. Zoom steps do not move
/// `pan`, so stepping zoom scales the scene about the window origin.
///
/// Depth is a plain filter: anything at `z >= z_cutoff` is invisible, with
/// no partial occlusion.
#[derive(Clone, Debug)]
pub struct Camera {
    config: CameraConfig,
    window: Size,
    pan: Vec2,
    zoom: f64,
    z_cutoff: f64,
    edge_inset: f64,
    image_scale: f64,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl Camera {
    /// Creates a camera at zoom 1 and pan zero from a validated config.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Creates a default camera over a `width` × `height` window.
    pub fn with_window(width: f64, height: f64) -> Result<Self, CameraError> {
        Self::new(CameraConfig {
            window_width: width,
            window_height: height,
            ..CameraConfig::default()
        })
    }

    fn from_valid(config: CameraConfig) -> Self {
        let mut camera = Self {
            window: Size::new(config.window_width, config.window_height),
            pan: Vec2::ZERO,
            zoom: 1.0,
            z_cutoff: config.z_cutoff,
            edge_inset: config.edge_inset,
            image_scale: 1.0,
            config,
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        camera.rebuild_transforms();
        camera
    }

    /// The configuration this camera was created from.
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Window size in screen pixels.
    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window
    }

    /// Pan offset in screen pixels.
    #[must_use]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Depth at and beyond which nothing is visible.
    #[must_use]
    pub fn z_cutoff(&self) -> f64 {
        self.z_cutoff
    }

    /// Current culling inset in pixels.
    #[must_use]
    pub fn edge_inset(&self) -> f64 {
        self.edge_inset
    }

    /// Display scale for raster images.
    ///
    /// Follows the zoom steps: `zoom_in`/`zoom_out` multiply it by the same
    /// ratio, `set_zoom` sets it to the new zoom and `frame_rect` resets it.
    #[must_use]
    pub fn image_scale(&self) -> f64 {
        self.image_scale
    }

    /// The world → screen transform.
    #[must_use]
    pub fn world_to_screen_transform(&self) -> Affine {
        self.world_to_screen
    }

    /// Converts a world point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Converts a world rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        // Uniform scale plus translation keeps rectangles axis-aligned.
        let p0 = self.world_to_screen * Point::new(rect.x0, rect.y0);
        let p1 = self.world_to_screen * Point::new(rect.x1, rect.y1);
        Rect::from_points(p0, p1)
    }

    /// World rectangle shown by the whole window.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let p0 = self.screen_to_world * Point::ORIGIN;
        let p1 = self.screen_to_world * Point::new(self.window.width, self.window.height);
        Rect::from_points(p0, p1)
    }

    /// Culling margins for the current pan, window and inset.
    #[must_use]
    pub fn margins(&self) -> Margins {
        Margins {
            left: self.pan.x + self.edge_inset,
            right: self.pan.x + self.window.width - self.edge_inset,
            upper: self.pan.y + self.edge_inset,
            lower: self.pan.y + self.window.height - self.edge_inset,
        }
    }

    /// Visibility test for world `bounds` at depth `z`.
    ///
    /// Bounds are scaled by the zoom and must strictly overlap the margins;
    /// touching an edge is not enough. `z` must be in front of the cutoff.
    #[must_use]
    pub fn is_visible(&self, bounds: Rect, z: f64) -> bool {
        let m = self.margins();
        let zoom = self.zoom;
        let (top, right, bottom, left) = (
            bounds.y0 * zoom,
            bounds.x1 * zoom,
            bounds.y1 * zoom,
            bounds.x0 * zoom,
        );
        m.left < right && m.right > left && m.lower > top && m.upper < bottom && z < self.z_cutoff
    }

    /// Pans by `delta` screen pixels.
    pub fn pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan += delta;
        self.rebuild_transforms();
        log::debug!("camera pan -> ({}, {})", self.pan.x, self.pan.y);
    }

    /// Pans by one configured step.
    pub fn nudge(&mut self, direction: PanDirection) {
        let step = self.config.pan_step;
        let delta = match direction {
            PanDirection::Left => Vec2::new(-step, 0.0),
            PanDirection::Right => Vec2::new(step, 0.0),
            PanDirection::Up => Vec2::new(0.0, -step),
            PanDirection::Down => Vec2::new(0.0, step),
        };
        self.pan(delta);
    }

    /// Pans so that the content follows a pointer moved by `pointer_delta`.
    pub fn drag(&mut self, pointer_delta: Vec2) {
        self.pan(-pointer_delta);
    }

    /// Sets the zoom factor.
    ///
    /// Positive finite values outside `min_zoom..=max_zoom` are accepted and
    /// clamped to the nearest limit; read [`Camera::zoom`] for the applied
    /// value. Non-positive or non-finite values are rejected.
    ///
    /// The image display scale is set to the new zoom as well.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), CameraError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(CameraError::InvalidZoom(zoom));
        }
        self.zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        self.image_scale = self.zoom;
        self.rebuild_transforms();
        log::debug!("camera zoom set to {}", self.zoom);
        Ok(())
    }

    /// Multiplies the zoom by the configured zoom-in ratio.
    pub fn zoom_in(&mut self) {
        self.step_zoom(self.config.zoom_in_ratio);
    }

    /// Multiplies the zoom by the configured zoom-out ratio.
    pub fn zoom_out(&mut self) {
        self.step_zoom(self.config.zoom_out_ratio);
    }

    /// Applies `notches` wheel steps: positive zooms in, negative zooms out.
    pub fn wheel(&mut self, notches: i32) {
        for _ in 0..notches.unsigned_abs() {
            if notches > 0 {
                self.zoom_in();
            } else {
                self.zoom_out();
            }
        }
    }

    fn step_zoom(&mut self, ratio: f64) {
        let old = self.zoom;
        let new = (old * ratio).clamp(self.config.min_zoom, self.config.max_zoom);
        if new == old {
            return;
        }
        self.zoom = new;
        self.image_scale *= new / old;
        self.rebuild_transforms();
        log::debug!("camera zoom {old} -> {new}");
    }

    /// Zooms by `factor` keeping the world point under `anchor` fixed.
    pub fn zoom_about_screen_point(&mut self, anchor: Point, factor: f64) -> Result<(), CameraError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(CameraError::InvalidZoom(factor));
        }
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.config.min_zoom, self.config.max_zoom);
        if new_zoom == old_zoom {
            return Ok(());
        }

        let world_at_anchor = self.screen_to_world(anchor);
        self.zoom = new_zoom;
        self.image_scale *= new_zoom / old_zoom;
        self.rebuild_transforms();
        let drift = self.world_to_screen(world_at_anchor) - anchor;
        self.pan += drift;
        self.rebuild_transforms();
        Ok(())
    }

    /// Changes the window size; zoom and pan are kept.
    ///
    /// Rejected if the current edge inset would not fit the new window.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), CameraError> {
        check_window(width, height)?;
        check_inset(self.edge_inset, width, height)?;
        self.window = Size::new(width, height);
        log::debug!("camera resized to {width} x {height}");
        Ok(())
    }

    /// Sets the depth cutoff.
    pub fn set_z_cutoff(&mut self, z_cutoff: f64) -> Result<(), CameraError> {
        check_cutoff(z_cutoff)?;
        self.z_cutoff = z_cutoff;
        Ok(())
    }

    /// Sets the culling inset.
    pub fn set_edge_inset(&mut self, inset: f64) -> Result<(), CameraError> {
        check_inset(inset, self.window.width, self.window.height)?;
        self.edge_inset = inset;
        Ok(())
    }

    /// Centers the window on `world_pt` without changing zoom.
    pub fn center_on(&mut self, world_pt: Point) {
        let center = Vec2::new(self.window.width, self.window.height) * 0.5;
        self.pan = world_pt.to_vec2() * self.zoom - center;
        self.rebuild_transforms();
    }

    /// Home view: fit `content` into the window.
    ///
    /// Resets zoom and image scale to 1, centers on `content` and then zooms
    /// out one step at a time until the content fits inside the margins.
    /// Stops after `frame_iterations` steps. With no content the camera
    /// returns to pan zero.
    pub fn frame_rect(&mut self, content: Option<Rect>) {
        self.zoom = 1.0;
        self.image_scale = 1.0;
        let Some(content) = content.map(|r| r.abs()) else {
            self.pan = Vec2::ZERO;
            self.rebuild_transforms();
            log::debug!("camera framed empty scene");
            return;
        };

        let target = content.center();
        self.center_on(target);
        let mut steps = 0;
        while !self.fits(content) {
            if steps == self.config.frame_iterations {
                log::warn!(
                    "frame_rect gave up after {steps} zoom steps; content {}x{} at zoom {}",
                    content.width(),
                    content.height(),
                    self.zoom
                );
                break;
            }
            let before = self.zoom;
            self.zoom_out();
            if self.zoom == before {
                log::warn!("frame_rect reached the minimum zoom {before}");
                break;
            }
            self.center_on(target);
            steps += 1;
        }
        log::debug!("camera framed content in {steps} steps, zoom {}", self.zoom);
    }

    fn fits(&self, content: Rect) -> bool {
        let inset = 2.0 * self.edge_inset;
        content.width() * self.zoom <= self.window.width - inset
            && content.height() * self.zoom <= self.window.height - inset
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            window: self.window,
            pan: self.pan,
            zoom: self.zoom,
            z_cutoff: self.z_cutoff,
            edge_inset: self.edge_inset,
            image_scale: self.image_scale,
            visible_world_rect: self.visible_world_rect(),
            margins: self.margins(),
        }
    }

    fn rebuild_transforms(&mut self) {
        // World → screen: scale, then shift by the pan offset.
        self.world_to_screen = Affine::translate(-self.pan) * Affine::scale(self.zoom);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_valid(CameraConfig::default())
    }
}

/// Debug snapshot of a [`Camera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Window size in pixels.
    pub window: Size,
    /// Pan offset in pixels.
    pub pan: Vec2,
    /// Zoom factor.
    pub zoom: f64,
    /// Depth cutoff.
    pub z_cutoff: f64,
    /// Culling inset.
    pub edge_inset: f64,
    /// Image display scale.
    pub image_scale: f64,
    /// World rectangle covered by the window.
    pub visible_world_rect: Rect,
    /// Current culling margins.
    pub margins: Margins,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{Camera, PanDirection};
    use crate::{CameraConfig, CameraError};

    fn big_cutoff() -> Camera {
        let mut camera = Camera::default();
        camera.set_z_cutoff(f64::INFINITY).unwrap();
        camera
    }

    #[test]
    fn world_screen_roundtrip() {
        let mut camera = Camera::default();
        camera.pan(Vec2::new(30.0, -12.0));
        camera.set_zoom(2.5).unwrap();

        let world = Point::new(10.0, -5.0);
        let screen = camera.world_to_screen(world);
        assert_eq!(screen, Point::new(-5.0, -0.5));
        let back = camera.screen_to_world(screen);
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn circle_scenario_is_visible() {
        let camera = big_cutoff();
        // Circle at (250, 250) with radius 50.
        let bounds = Rect::new(200.0, 200.0, 300.0, 300.0);
        assert!(camera.is_visible(bounds, 0.0));
    }

    #[test]
    fn bounds_outside_margins_are_culled() {
        let camera = big_cutoff();
        assert!(!camera.is_visible(Rect::new(-100.0, 10.0, -1.0, 20.0), 0.0));
        assert!(!camera.is_visible(Rect::new(501.0, 10.0, 600.0, 20.0), 0.0));
        assert!(!camera.is_visible(Rect::new(10.0, -100.0, 20.0, -1.0), 0.0));
        assert!(!camera.is_visible(Rect::new(10.0, 501.0, 20.0, 600.0), 0.0));
        // Touching an edge is not an overlap.
        assert!(!camera.is_visible(Rect::new(-10.0, 10.0, 0.0, 20.0), 0.0));
    }

    #[test]
    fn z_cutoff_is_a_binary_filter() {
        let mut camera = Camera::default();
        let bounds = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(camera.z_cutoff(), 2.0);
        assert!(camera.is_visible(bounds, 1.0));
        assert!(!camera.is_visible(bounds, 2.0));
        camera.set_z_cutoff(10.0).unwrap();
        assert!(camera.is_visible(bounds, 5.0));
        assert!(camera.set_z_cutoff(f64::NAN).is_err());
    }

    #[test]
    fn visibility_uses_zoomed_bounds_and_inset() {
        let mut camera = big_cutoff();
        let bounds = Rect::new(300.0, 300.0, 400.0, 400.0);
        camera.set_zoom(0.5).unwrap();
        assert!(camera.is_visible(bounds, 0.0));
        camera.set_zoom(2.0).unwrap();
        // Scaled to 600..800, past the 500 px window.
        assert!(!camera.is_visible(bounds, 0.0));
        camera.pan(Vec2::new(200.0, 200.0));
        assert!(camera.is_visible(bounds, 0.0));

        let mut camera = big_cutoff();
        let sliver = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert!(camera.is_visible(sliver, 0.0));
        camera.set_edge_inset(10.0).unwrap();
        assert!(!camera.is_visible(sliver, 0.0));
        assert!(camera.set_edge_inset(300.0).is_err());
    }

    #[test]
    fn zoom_steps_multiply() {
        let mut camera = Camera::default();
        camera.zoom_in();
        camera.zoom_in();
        assert!((camera.zoom() - 16.0 / 9.0).abs() < 1e-6);
        assert!((camera.image_scale() - 16.0 / 9.0).abs() < 1e-12);
        camera.zoom_out();
        assert!((camera.zoom() - 4.0 / 3.0).abs() < 1e-12);
        // Stepping does not move the pan offset.
        assert_eq!(camera.pan_offset(), Vec2::ZERO);

        camera.wheel(-2);
        assert!((camera.zoom() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn invalid_state_changes_keep_previous_state() {
        let mut camera = Camera::default();
        camera.set_zoom(3.0).unwrap();
        assert_eq!(camera.set_zoom(0.0), Err(CameraError::InvalidZoom(0.0)));
        assert!(camera.set_zoom(-1.0).is_err());
        assert_eq!(camera.zoom(), 3.0);

        assert!(camera.resize(0.0, 10.0).is_err());
        assert!(camera.resize(10.0, -1.0).is_err());
        assert_eq!(camera.window_size().width, 500.0);
        camera.resize(800.0, 600.0).unwrap();
        assert_eq!(camera.window_size().height, 600.0);
    }

    #[test]
    fn nudge_and_drag() {
        let mut camera = Camera::default();
        camera.nudge(PanDirection::Right);
        camera.nudge(PanDirection::Up);
        assert_eq!(camera.pan_offset(), Vec2::new(25.0, -25.0));
        camera.drag(Vec2::new(5.0, 5.0));
        assert_eq!(camera.pan_offset(), Vec2::new(20.0, -30.0));
    }

    #[test]
    fn resize_keeps_the_inset_inside_the_window() {
        let mut camera = Camera::default();
        camera.set_edge_inset(100.0).unwrap();
        let margins = camera.margins();

        assert_eq!(
            camera.resize(150.0, 150.0),
            Err(CameraError::InvalidEdgeInset(100.0))
        );
        assert_eq!(camera.window_size(), Size::new(500.0, 500.0));
        assert_eq!(camera.margins(), margins);

        // Small content still frames at zoom 1.
        camera.frame_rect(Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(camera.zoom(), 1.0);

        camera.resize(250.0, 300.0).unwrap();
        assert_eq!(camera.window_size(), Size::new(250.0, 300.0));
    }

    #[test]
    fn set_zoom_clamps_to_limits() {
        let mut camera = Camera::default();
        let (min, max) = (camera.config().min_zoom, camera.config().max_zoom);
        camera.set_zoom(max * 10.0).unwrap();
        assert_eq!(camera.zoom(), max);
        assert_eq!(camera.image_scale(), max);
        camera.set_zoom(min / 10.0).unwrap();
        assert_eq!(camera.zoom(), min);
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut camera = Camera::default();
        let anchor = Point::new(120.0, 340.0);
        let before = camera.screen_to_world(anchor);
        camera.zoom_about_screen_point(anchor, 2.0).unwrap();
        let after = camera.screen_to_world(anchor);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
        assert_eq!(camera.zoom(), 2.0);
    }

    #[test]
    fn frame_empty_resets() {
        let mut camera = Camera::default();
        camera.pan(Vec2::new(100.0, 40.0));
        camera.zoom_in();
        camera.frame_rect(None);
        assert_eq!(camera.zoom(), 1.0);
        assert_eq!(camera.pan_offset(), Vec2::ZERO);
        assert_eq!(camera.image_scale(), 1.0);
    }

    #[test]
    fn frame_centers_and_zooms_out_until_fit() {
        let mut camera = Camera::default();
        let content = Rect::new(-400.0, 0.0, 600.0, 100.0);
        camera.frame_rect(Some(content));

        // 1000 wide needs 0.75^3 = 0.421875 to fit 500 px.
        assert!((camera.zoom() - 0.421_875).abs() < 1e-12);
        let center = camera.world_to_screen(content.center());
        assert!((center.x - 250.0).abs() < 1e-9);
        assert!((center.y - 250.0).abs() < 1e-9);
        let visible = camera.visible_world_rect();
        assert!(visible.x0 <= content.x0 && visible.x1 >= content.x1);
        assert!(visible.y0 <= content.y0 && visible.y1 >= content.y1);
    }

    #[test]
    fn frame_point_content_does_not_loop() {
        let mut camera = Camera::default();
        camera.frame_rect(Some(Rect::new(7.0, 7.0, 7.0, 7.0)));
        assert_eq!(camera.zoom(), 1.0);
        assert_eq!(camera.world_to_screen(Point::new(7.0, 7.0)), Point::new(250.0, 250.0));
    }

    #[test]
    fn frame_stops_at_iteration_cap() {
        let mut camera = Camera::new(CameraConfig {
            frame_iterations: 3,
            ..CameraConfig::default()
        })
        .unwrap();
        camera.frame_rect(Some(Rect::new(0.0, 0.0, 1e12, 1.0)));
        assert!((camera.zoom() - 0.421_875).abs() < 1e-12);
    }

    #[test]
    fn debug_info_reports_state() {
        let mut camera = Camera::with_window(400.0, 300.0).unwrap();
        camera.pan(Vec2::new(10.0, 20.0));
        let info = camera.debug_info();
        assert_eq!(info.pan, Vec2::new(10.0, 20.0));
        assert_eq!(info.visible_world_rect, Rect::new(10.0, 20.0, 410.0, 320.0));
        assert_eq!(info.margins.right, 410.0);
    }
}
