// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::ImageSource;

/// Default box images are fitted into, in world units.
pub const DEFAULT_IMAGE_BOX: Size = Size::new(100.0, 100.0);

/// Resolves image sources to their pixel dimensions.
///
/// Decoding and pixel storage belong to the host; the scene only needs the
/// natural size to pick a display size.
pub trait ImageLoader {
    /// Natural size of the image in pixels, or `None` if it cannot be read.
    fn dimensions(&self, source: &ImageSource) -> Option<Size>;
}

impl<F> ImageLoader for F
where
    F: Fn(&ImageSource) -> Option<Size>,
{
    fn dimensions(&self, source: &ImageSource) -> Option<Size> {
        self(source)
    }
}

/// Largest size with `natural`'s aspect ratio that fits in `display_box`.
///
/// Degenerate inputs fall back to `display_box` itself.
#[must_use]
pub fn fit_keep_aspect(natural: Size, display_box: Size) -> Size {
    if !(natural.width > 0.0 && natural.height > 0.0) {
        return display_box;
    }
    let scale = (display_box.width / natural.width).min(display_box.height / natural.height);
    if !scale.is_finite() {
        return display_box;
    }
    Size::new(natural.width * scale, natural.height * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_fits_width() {
        let s = fit_keep_aspect(Size::new(400.0, 200.0), DEFAULT_IMAGE_BOX);
        assert_eq!(s, Size::new(100.0, 50.0));
    }

    #[test]
    fn portrait_fits_height() {
        let s = fit_keep_aspect(Size::new(30.0, 60.0), DEFAULT_IMAGE_BOX);
        assert_eq!(s, Size::new(50.0, 100.0));
    }

    #[test]
    fn degenerate_uses_box() {
        assert_eq!(fit_keep_aspect(Size::ZERO, DEFAULT_IMAGE_BOX), DEFAULT_IMAGE_BOX);
    }

    #[test]
    fn closures_are_loaders() {
        let loader = |s: &ImageSource| (s.as_str() == "a.png").then_some(Size::new(8.0, 4.0));
        assert_eq!(loader.dimensions(&"a.png".into()), Some(Size::new(8.0, 4.0)));
        assert_eq!(loader.dimensions(&"b.png".into()), None);
    }
}
