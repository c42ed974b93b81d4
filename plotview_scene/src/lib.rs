// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview Scene: primitives, bounds and draw lists.
//!
//! A [`Scene`] owns a set of drawable primitives (images, circles, rotated
//! rectangles, lines and stroke-font text), a [`plotview_view2d::Camera`] and
//! a [`plotview_font::StrokeFont`]. Each primitive caches its world-space
//! bounds, computed when it is created or changed.
//!
//! [`Scene::build_draw_list`] turns the scene into a [`DrawList`]:
//! - images first, then vector shapes (which can be hidden as a group);
//! - each group stably sorted by ascending `z`;
//! - only primitives whose bounds overlap the camera's culling margins and
//!   whose `z` is below the camera's cutoff;
//! - geometry projected to screen space, ready for any 2D backend.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use plotview_scene::{DrawOp, PrimitiveDesc, Scene};
//!
//! let mut scene = Scene::default(); // 500x500 window
//! let circle = scene
//!     .add_primitive(PrimitiveDesc::circle(Point::new(250.0, 250.0), 50.0))
//!     .unwrap();
//! assert_eq!(scene.get(circle).unwrap().trbl(), [200.0, 300.0, 300.0, 200.0]);
//!
//! let hidden = scene
//!     .add_primitive(PrimitiveDesc::line(Point::new(0.0, 0.0), 10.0, 0.0).with_z(5.0))
//!     .unwrap();
//!
//! let list = scene.build_draw_list();
//! assert_eq!(list.ids().collect::<Vec<_>>(), vec![circle]);
//! assert!(matches!(list.items()[0].op, DrawOp::Circle { radius: 50.0, .. }));
//! # let _ = hidden;
//! ```
//!
//! The pieces are usable on their own: [`Primitive`] for bounds,
//! [`build_draw_list`] for any iterator of primitives, and the formulas in
//! [`geometry`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
pub mod geometry;
mod image;
mod primitive;
mod render;
mod scene;

pub use error::{GeometryError, SceneError};
pub use image::{DEFAULT_IMAGE_BOX, ImageLoader, fit_keep_aspect};
pub use primitive::{
    ImageSource, Primitive, PrimitiveDesc, PrimitiveId, PrimitiveKind, Shape, Style,
    text_layout_options,
};
pub use render::{DrawItem, DrawList, DrawOp, RenderSettings, build_draw_list};
pub use scene::Scene;
