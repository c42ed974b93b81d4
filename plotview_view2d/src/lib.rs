// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview View 2D: the camera that maps an unbounded world onto a window.
//!
//! This crate provides a small, headless camera model. It focuses on:
//! - Camera state: window size, pan offset, zoom factor and a depth cutoff.
//! - Coordinate conversion between world and screen (pixel) space.
//! - Visibility tests against the window's culling margins.
//! - Stepped zoom, fixed pan steps and a "home" fit.
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to keep their own primitives, feed their bounds to
//! [`Camera::is_visible`], and translate input events into the state
//! transitions ([`Camera::pan`], [`Camera::zoom_in`], ...).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use plotview_view2d::Camera;
//!
//! let mut camera = Camera::default(); // 500x500 window, zoom 1
//! camera.pan(Vec2::new(100.0, 0.0));
//! camera.zoom_in();
//!
//! let screen = camera.world_to_screen(Point::new(300.0, 150.0));
//! let world = camera.screen_to_world(screen);
//! assert!((world.x - 300.0).abs() < 1e-9);
//!
//! // Culling: scaled bounds against the window margins, plus a z filter.
//! assert!(camera.is_visible(Rect::new(200.0, 200.0, 300.0, 300.0), 0.0));
//! assert!(!camera.is_visible(Rect::new(200.0, 200.0, 300.0, 300.0), 5.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and there is no camera rotation.
//! - The pan offset lives in screen pixels, so `zoom_in`/`zoom_out` scale
//!   about the window origin. Use [`Camera::zoom_about_screen_point`] to zoom
//!   towards a pointer.
//! - Depth is not an occlusion test: `z < z_cutoff` is all that is checked.
//! - Every rejected change returns a [`CameraError`] and leaves the camera
//!   untouched.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod config;
mod error;

pub use camera::{Camera, CameraDebugInfo, Margins, PanDirection};
pub use config::CameraConfig;
pub use error::CameraError;
