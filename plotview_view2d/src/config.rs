// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::CameraError;

/// Tunable camera parameters.
///
/// The defaults reproduce the plotting viewer's behavior: a 500×500 window,
/// 4/3 and 3/4 zoom steps, 25 px arrow-key steps, and a z cutoff of 2 (the
/// camera plane sits at z = 1 and everything closer than one unit in front
/// of it is drawn).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CameraConfig {
    /// Initial window width in screen pixels.
    pub window_width: f64,
    /// Initial window height in screen pixels.
    pub window_height: f64,
    /// Multiplier applied by `zoom_in`; must be greater than one.
    pub zoom_in_ratio: f64,
    /// Multiplier applied by `zoom_out`; must lie in `(0, 1)`.
    pub zoom_out_ratio: f64,
    /// Smallest zoom factor.
    pub min_zoom: f64,
    /// Largest zoom factor.
    pub max_zoom: f64,
    /// Inset of the culling margins from the window edges, in pixels.
    pub edge_inset: f64,
    /// Pan distance of one `nudge`, in pixels.
    pub pan_step: f64,
    /// Primitives at `z >= z_cutoff` are never drawn.
    pub z_cutoff: f64,
    /// Upper bound on zoom-out steps taken by `frame_rect`.
    pub frame_iterations: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            window_width: 500.0,
            window_height: 500.0,
            zoom_in_ratio: 4.0 / 3.0,
            zoom_out_ratio: 3.0 / 4.0,
            min_zoom: 1e-6,
            max_zoom: 1e6,
            edge_inset: 0.0,
            pan_step: 25.0,
            z_cutoff: 2.0,
            frame_iterations: 64,
        }
    }
}

impl CameraConfig {
    /// Checks every field, returning the first violation.
    pub fn validate(&self) -> Result<(), CameraError> {
        check_window(self.window_width, self.window_height)?;
        if !(self.zoom_in_ratio.is_finite() && self.zoom_in_ratio > 1.0) {
            return Err(CameraError::InvalidConfig("zoom_in_ratio must be > 1"));
        }
        if !(self.zoom_out_ratio > 0.0 && self.zoom_out_ratio < 1.0) {
            return Err(CameraError::InvalidConfig("zoom_out_ratio must lie in (0, 1)"));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom <= 1.0 && self.max_zoom >= 1.0)
            || !self.max_zoom.is_finite()
        {
            return Err(CameraError::InvalidConfig(
                "zoom limits must satisfy 0 < min_zoom <= 1 <= max_zoom",
            ));
        }
        if !self.pan_step.is_finite() {
            return Err(CameraError::InvalidConfig("pan_step must be finite"));
        }
        check_inset(self.edge_inset, self.window_width, self.window_height)?;
        check_cutoff(self.z_cutoff)
    }
}

pub(crate) fn check_window(width: f64, height: f64) -> Result<(), CameraError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(CameraError::InvalidWindowSize { width, height })
    }
}

pub(crate) fn check_inset(inset: f64, width: f64, height: f64) -> Result<(), CameraError> {
    if inset >= 0.0 && 2.0 * inset < width.min(height) {
        Ok(())
    } else {
        Err(CameraError::InvalidEdgeInset(inset))
    }
}

pub(crate) fn check_cutoff(z_cutoff: f64) -> Result<(), CameraError> {
    if z_cutoff.is_nan() {
        Err(CameraError::InvalidZCutoff(z_cutoff))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CameraConfig::default().validate(), Ok(()));
    }

    #[test]
    fn bad_fields_are_reported() {
        let cases = [
            CameraConfig {
                window_width: 0.0,
                ..CameraConfig::default()
            },
            CameraConfig {
                zoom_in_ratio: 0.9,
                ..CameraConfig::default()
            },
            CameraConfig {
                zoom_out_ratio: 1.0,
                ..CameraConfig::default()
            },
            CameraConfig {
                min_zoom: 0.0,
                ..CameraConfig::default()
            },
            CameraConfig {
                edge_inset: 250.0,
                ..CameraConfig::default()
            },
            CameraConfig {
                z_cutoff: f64::NAN,
                ..CameraConfig::default()
            },
        ];
        for config in cases {
            assert!(config.validate().is_err(), "{config:?} should be rejected");
        }
    }
}
