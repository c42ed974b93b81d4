// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A rejected camera state change.
///
/// The camera keeps its previous (valid) state whenever one of these is
/// returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// Zoom factors must be positive and finite.
    #[error("zoom factor must be positive and finite, got {0}")]
    InvalidZoom(f64),
    /// Window dimensions must be positive and finite.
    #[error("window size must be positive, got {width} x {height}")]
    InvalidWindowSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// Edge insets must be non-negative and leave some of the window.
    #[error("edge inset {0} does not fit the window")]
    InvalidEdgeInset(f64),
    /// The z cutoff must be a number (infinity is allowed).
    #[error("z cutoff must not be NaN, got {0}")]
    InvalidZCutoff(f64),
    /// A [`crate::CameraConfig`] field is out of range.
    #[error("invalid camera configuration: {0}")]
    InvalidConfig(&'static str),
}
