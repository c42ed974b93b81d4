// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::str::FromStr;

use crate::LayoutError;

/// Horizontal alignment of the laid out text relative to `x = 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HAlign {
    /// Left edge of the glyph box at `x = 0`.
    #[default]
    Left,
    /// Horizontal center of the glyph box at `x = 0`.
    Center,
    /// Right edge of the glyph box at `x = 0`.
    Right,
}

/// Vertical alignment of the laid out text relative to `y = 0`.
///
/// Edges refer to the y-up glyph convention: `Bottom` moves the smallest `y`
/// to zero, `Top` the largest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum VAlign {
    /// Largest `y` at zero.
    Top,
    /// Vertical center at zero.
    Center,
    /// No offset: the glyph baseline stays at zero.
    #[default]
    Base,
    /// Smallest `y` at zero.
    Bottom,
}

impl FromStr for HAlign {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("left") {
            Ok(Self::Left)
        } else if s.eq_ignore_ascii_case("center") {
            Ok(Self::Center)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Self::Right)
        } else {
            Err(LayoutError::invalid("halign", s))
        }
    }
}

impl FromStr for VAlign {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("top") {
            Ok(Self::Top)
        } else if s.eq_ignore_ascii_case("center") {
            Ok(Self::Center)
        } else if s.eq_ignore_ascii_case("base") {
            Ok(Self::Base)
        } else if s.eq_ignore_ascii_case("bottom") {
            Ok(Self::Bottom)
        } else {
            Err(LayoutError::invalid("valign", s))
        }
    }
}

/// Options for a single layout call.
///
/// `size` and `width` are in target units; `divisor` defaults to the active
/// glyph table's constant when `None`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LayoutOptions {
    /// Glyph height in target units.
    pub size: f64,
    /// Horizontal advance per character in target units.
    pub width: f64,
    /// Table units per size unit. `None` uses the glyph table's divisor.
    pub divisor: Option<f64>,
    /// Horizontal alignment.
    pub horizontal_align: HAlign,
    /// Vertical alignment.
    pub vertical_align: VAlign,
    /// Counter-clockwise rotation (in the y-up frame) in degrees.
    pub rotate_degrees: f64,
    /// Reflect `x`.
    pub mirror_horizontal: bool,
    /// Reflect `y`.
    pub mirror_vertical: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            size: 5.0,
            width: 5.0,
            divisor: None,
            horizontal_align: HAlign::Left,
            vertical_align: VAlign::Base,
            rotate_degrees: 0.0,
            mirror_horizontal: false,
            mirror_vertical: false,
        }
    }
}

impl LayoutOptions {
    /// Sets glyph height.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the per-character advance.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets both glyph height and advance to `size`.
    #[must_use]
    pub fn with_square_cells(self, size: f64) -> Self {
        self.with_size(size).with_width(size)
    }

    /// Overrides the table divisor.
    #[must_use]
    pub fn with_divisor(mut self, divisor: f64) -> Self {
        self.divisor = Some(divisor);
        self
    }

    /// Sets both alignments.
    #[must_use]
    pub fn with_align(mut self, horizontal: HAlign, vertical: VAlign) -> Self {
        self.horizontal_align = horizontal;
        self.vertical_align = vertical;
        self
    }

    /// Sets the rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotate_degrees = degrees;
        self
    }

    /// Sets the mirror flags.
    #[must_use]
    pub fn with_mirror(mut self, horizontal: bool, vertical: bool) -> Self {
        self.mirror_horizontal = horizontal;
        self.mirror_vertical = vertical;
        self
    }

    /// Sets one option from its textual form, as entered in a settings form.
    ///
    /// Keys are accepted in both the short (`halign`, `mirrorx`) and the
    /// long (`horizontalAlign`, `mirrorHorizontal`) spelling. Enumerated and
    /// boolean values are case-insensitive. On error `self` is unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LayoutError> {
        match key {
            "size" => self.size = parse_number("size", value)?,
            "width" => self.width = parse_number("width", value)?,
            "divisor" => {
                let divisor = parse_number("divisor", value)?;
                if divisor == 0.0 {
                    return Err(LayoutError::invalid("divisor", value));
                }
                self.divisor = Some(divisor);
            }
            "halign" | "horizontalAlign" => self.horizontal_align = value.parse()?,
            "valign" | "verticalAlign" => self.vertical_align = value.parse()?,
            "rotate" | "rotateDegrees" => self.rotate_degrees = parse_number("rotate", value)?,
            "mirrorx" | "mirrorHorizontal" => self.mirror_horizontal = parse_bool("mirrorx", value)?,
            "mirrory" | "mirrorVertical" => self.mirror_vertical = parse_bool("mirrory", value)?,
            _ => return Err(LayoutError::UnknownOption(String::from(key))),
        }
        Ok(())
    }

    /// Builds options from defaults plus `key = value` pairs.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, LayoutError> {
        let mut options = Self::default();
        for (key, value) in pairs {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Checks numeric fields that the typed API lets through unchecked.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_finite("size", self.size)?;
        check_finite("width", self.width)?;
        check_finite("rotate", self.rotate_degrees)?;
        if let Some(divisor) = self.divisor {
            check_finite("divisor", divisor)?;
            if divisor == 0.0 {
                return Err(LayoutError::invalid("divisor", divisor.to_string()));
            }
        }
        Ok(())
    }
}

fn check_finite(key: &'static str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::invalid(key, value.to_string()))
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<f64, LayoutError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LayoutError::invalid(key, value)),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, LayoutError> {
    let v = value.trim();
    if ["true", "yes", "on", "1"].iter().any(|t| v.eq_ignore_ascii_case(t)) {
        Ok(true)
    } else if ["false", "no", "off", "0"].iter().any(|f| v.eq_ignore_ascii_case(f)) {
        Ok(false)
    } else {
        Err(LayoutError::invalid(key, value))
    }
}
