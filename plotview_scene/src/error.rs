// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use plotview_font::LayoutError;
use plotview_view2d::CameraError;

use crate::{ImageSource, PrimitiveId};

/// Geometric parameters rejected when a primitive is created or updated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Circle radius must be positive.
    #[error("circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    /// Rectangle width and height must be positive.
    #[error("rectangle must have positive width and height, got {width} x {height}")]
    NonPositiveDimensions {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// Line length must be positive.
    #[error("line length must be positive, got {0}")]
    NonPositiveLength(f64),
    /// Letter height must be positive.
    #[error("letter height must be positive, got {0}")]
    NonPositiveLetterHeight(f64),
    /// Image display size must be positive.
    #[error("image display size must be positive, got {width} x {height}")]
    NonPositiveImageSize {
        /// Display width.
        width: f64,
        /// Display height.
        height: f64,
    },
    /// Stroke width must be zero or more.
    #[error("stroke width must not be negative, got {0}")]
    NegativeLineWidth(f64),
    /// Positions, depths and angles must be finite numbers.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}

/// Error returned by [`crate::Scene`] operations.
///
/// Every failing operation leaves the scene exactly as it was.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// Invalid primitive geometry.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Text could not be laid out with the scene's font.
    #[error("text layout failed: {0}")]
    Layout(#[from] LayoutError),
    /// Rejected camera change.
    #[error(transparent)]
    Camera(#[from] CameraError),
    /// No primitive with this id is in the scene.
    #[error("no primitive with id {0:?}")]
    UnknownPrimitive(PrimitiveId),
    /// The image loader could not decode the source.
    #[error("image {0:?} could not be loaded")]
    ImageUnavailable(ImageSource),
}
