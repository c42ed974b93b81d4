// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotview Font: a stroke (polyline) font engine.
//!
//! Text is turned into straight-segment polylines rather than filled
//! outlines, the way a pen plotter or a vector display draws it. The crate
//! provides:
//! - [`GlyphTable`]: static character → polyline data, normalized by a
//!   per-table divisor. [`BUILTIN`] covers printable ASCII.
//! - [`LayoutOptions`]: size, advance, alignment, mirroring and rotation.
//! - [`StrokeFont`] / [`layout`]: the layout pipeline, plus [`bounding_box`]
//!   for callers that need the footprint of a laid out string.
//!
//! It does **not** rasterize anything. Callers draw the returned polylines
//! with whatever backend they use.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use plotview_font::{HAlign, LayoutOptions, StrokeFont, VAlign, bounding_box};
//!
//! let font = StrokeFont::default();
//! let options = LayoutOptions::default()
//!     .with_square_cells(18.0)
//!     .with_align(HAlign::Center, VAlign::Center);
//! let lines = font.layout("Hi!", Point::new(100.0, 50.0), &options).unwrap();
//!
//! let bbox = bounding_box(&lines).unwrap();
//! assert!((bbox.center().x - 100.0).abs() < 1e-9);
//! ```
//!
//! ## Pipeline
//!
//! 1. Each character takes a slot of `width`; spaces draw nothing.
//!    Characters missing from the table fail with
//!    [`LayoutError::UnknownCharacter`].
//! 2. Glyph points are scaled by `size / divisor`.
//! 3. Mirroring is applied.
//! 4. The mirrored bounding box is aligned against the origin.
//! 5. Rotation is applied. Whole multiples of 90° use exact axis swaps.
//! 6. Everything is translated to the requested origin.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};

mod builtin;
mod error;
mod layout;
mod options;
mod table;

pub use error::LayoutError;
pub use layout::{
    Polyline, alignment_offset, bounding_box, layout, mirror_x, mirror_y, rotate,
    rotate_quarter_turns, scale, shift, strokes,
};
pub use options::{HAlign, LayoutOptions, VAlign};
pub use table::{BUILTIN, Glyph, GlyphTable};

/// A glyph table paired with default layout options.
#[derive(Clone, Debug)]
pub struct StrokeFont {
    table: &'static GlyphTable,
    defaults: LayoutOptions,
}

impl StrokeFont {
    /// Creates a font over `table` with default options.
    #[must_use]
    pub fn new(table: &'static GlyphTable) -> Self {
        Self {
            table,
            defaults: LayoutOptions::default(),
        }
    }

    /// Replaces the default options used by [`StrokeFont::layout_with`].
    #[must_use]
    pub fn with_defaults(mut self, defaults: LayoutOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// The active glyph table.
    #[must_use]
    pub fn table(&self) -> &'static GlyphTable {
        self.table
    }

    /// Default options.
    #[must_use]
    pub fn defaults(&self) -> &LayoutOptions {
        &self.defaults
    }

    /// Effective divisor for `options`.
    #[must_use]
    pub fn divisor(&self, options: &LayoutOptions) -> f64 {
        options.divisor.unwrap_or(self.table.divisor())
    }

    /// Lays out `text` at `origin`. See [`layout`].
    pub fn layout(
        &self,
        text: &str,
        origin: Point,
        options: &LayoutOptions,
    ) -> Result<Vec<Polyline>, LayoutError> {
        layout::layout(self.table, text, origin, options)
    }

    /// Lays out `text` with the font defaults adjusted by `configure`.
    pub fn layout_with(
        &self,
        text: &str,
        origin: Point,
        configure: impl FnOnce(&mut LayoutOptions),
    ) -> Result<Vec<Polyline>, LayoutError> {
        let mut options = self.defaults.clone();
        configure(&mut options);
        self.layout(text, origin, &options)
    }

    /// Bounding box of `text` laid out at the origin.
    ///
    /// `Ok(None)` means the text draws nothing (empty or only spaces).
    pub fn text_bounds(
        &self,
        text: &str,
        options: &LayoutOptions,
    ) -> Result<Option<Rect>, LayoutError> {
        Ok(bounding_box(&self.layout(text, Point::ORIGIN, options)?))
    }

    /// Returns `true` if every non-space character of `text` has a glyph.
    #[must_use]
    pub fn covers(&self, text: &str) -> bool {
        text.chars().all(|ch| ch == ' ' || self.table.contains(ch))
    }
}

impl Default for StrokeFont {
    fn default() -> Self {
        Self::new(&BUILTIN)
    }
}
