//! Frame geometry for a single print.
//!
//! Two frame styles exist. [`FrameLayout::CaptionStrip`] is the canonical
//! one: the photo fills a band across the top 70% of the print and the
//! caption is centred in the bottom 30%. [`FrameLayout::Bordered`] is the
//! classic instant-film border (10% top, 16.6% bottom, 5% sides) with the
//! photo top-aligned inside it and no caption.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BORDER_BOTTOM_FRACTION, BORDER_SIDE_FRACTION, BORDER_TOP_FRACTION, CAPTION_FONT_WIDTH_FRACTION,
    CAPTION_LINE_SPACING, CAPTION_MAX_LINE_FRACTION, CAPTION_MIN_FONT_PX, STRIP_CAPTION_FRACTION,
    STRIP_IMAGE_FRACTION,
};
use crate::settings::{OutputDimensions, PixelRect};

/// How the photo and caption are arranged on the print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameLayout {
    /// Photo in the top 70%, caption centred in the bottom 30%.
    #[default]
    CaptionStrip,
    /// Percentage borders around a top-aligned photo; captions are not drawn.
    Bordered,
}

/// Where the photo goes and where the caption may go, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Rectangle the scaled crop is drawn into.
    pub photo: PixelRect,
    /// Band reserved for the caption, if this layout has one.
    pub caption_band: Option<PixelRect>,
}

impl FrameLayout {
    pub fn supports_caption(self) -> bool {
        matches!(self, FrameLayout::CaptionStrip)
    }

    /// Aspect ratio (width / height) of the photo area, which is the ratio
    /// the crop tool should lock to.
    pub fn crop_aspect(self, dims: &OutputDimensions) -> f64 {
        match self {
            FrameLayout::CaptionStrip => dims.width / (dims.height * STRIP_IMAGE_FRACTION),
            FrameLayout::Bordered => {
                let width = dims.width * (1.0 - 2.0 * BORDER_SIDE_FRACTION);
                let height =
                    dims.height * (1.0 - BORDER_TOP_FRACTION - BORDER_BOTTOM_FRACTION);
                width / height
            }
        }
    }

    /// Place a `crop_width` x `crop_height` region on a canvas of the given
    /// size, scaling it uniformly to fit without distortion.
    pub fn geometry(
        self,
        canvas_width: u32,
        canvas_height: u32,
        crop_width: f64,
        crop_height: f64,
    ) -> FrameGeometry {
        let w = canvas_width as f64;
        let h = canvas_height as f64;

        let (photo, caption_band) = match self {
            FrameLayout::CaptionStrip => {
                let band_height = h * STRIP_IMAGE_FRACTION;
                let scale = (w / crop_width).min(band_height / crop_height);
                let (pw, ph) = (crop_width * scale, crop_height * scale);
                let photo = PixelRect::new((w - pw) / 2.0, (band_height - ph) / 2.0, pw, ph);
                let band = PixelRect::new(0.0, band_height, w, h * STRIP_CAPTION_FRACTION);
                (photo, Some(band))
            }
            FrameLayout::Bordered => {
                let left = w * BORDER_SIDE_FRACTION;
                let top = h * BORDER_TOP_FRACTION;
                let inner_w = w - 2.0 * left;
                let inner_h = h - top - h * BORDER_BOTTOM_FRACTION;
                let scale = (inner_w / crop_width).min(inner_h / crop_height);
                let (pw, ph) = (crop_width * scale, crop_height * scale);
                let photo = PixelRect::new(left + (inner_w - pw) / 2.0, top, pw, ph);
                (photo, None)
            }
        };

        FrameGeometry {
            canvas_width,
            canvas_height,
            photo,
            caption_band,
        }
    }
}

/// Caption font size for a canvas width.
pub fn caption_font_size(canvas_width: u32) -> f64 {
    CAPTION_MIN_FONT_PX.max(canvas_width as f64 * CAPTION_FONT_WIDTH_FRACTION)
}

/// Widest a caption line may be on a canvas of this width.
pub fn caption_max_line_width(canvas_width: u32) -> f64 {
    canvas_width as f64 * CAPTION_MAX_LINE_FRACTION
}

/// Vertical centre of each caption line inside `band`.
///
/// The block of `line_count` lines is centred in the band, then shifted
/// down by half a font size, which is where the editor has always drawn it.
pub fn caption_line_centers(band: &PixelRect, line_count: usize, font_size: f64) -> Vec<f64> {
    let line_height = font_size * CAPTION_LINE_SPACING;
    let block_height = line_count as f64 * line_height;
    let start = band.y + (band.height - block_height) / 2.0 + font_size / 2.0;
    (0..line_count)
        .map(|i| start + i as f64 * line_height)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SizePreset;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_caption_strip_4x6_portrait_crop() {
        let geo = FrameLayout::CaptionStrip.geometry(1200, 1800, 800.0, 1200.0);

        // scale = min(1200/800, 1260/1200) = 1.05
        assert_close(geo.photo.width, 840.0);
        assert_close(geo.photo.height, 1260.0);
        assert_close(geo.photo.x, 180.0);
        assert_close(geo.photo.y, 0.0);

        let band = geo.caption_band.unwrap();
        assert_close(band.y, 1260.0);
        assert_close(band.height, 540.0);
    }

    #[test]
    fn test_caption_strip_centres_wide_crop_vertically() {
        let geo = FrameLayout::CaptionStrip.geometry(1200, 1800, 1200.0, 600.0);

        // scale = min(1.0, 2.1) = 1.0 -> 1200x600, centred in the 1260 band
        assert_close(geo.photo.width, 1200.0);
        assert_close(geo.photo.x, 0.0);
        assert_close(geo.photo.y, 330.0);
    }

    #[test]
    fn test_bordered_top_aligned() {
        let geo = FrameLayout::Bordered.geometry(1200, 1800, 1200.0, 600.0);

        // interior 1080 x 1321.2 at (60, 180); scale = 0.9
        assert_close(geo.photo.x, 60.0);
        assert_close(geo.photo.y, 180.0);
        assert_close(geo.photo.width, 1080.0);
        assert_close(geo.photo.height, 540.0);
        assert!(geo.caption_band.is_none());
    }

    #[test]
    fn test_bordered_centres_tall_crop_horizontally() {
        let geo = FrameLayout::Bordered.geometry(1000, 1000, 100.0, 734.0);

        // interior 900 x 734; scale = min(9, 1) = 1
        assert_close(geo.photo.width, 100.0);
        assert_close(geo.photo.x, 50.0 + 400.0);
        assert_close(geo.photo.y, 100.0);
    }

    #[test]
    fn test_crop_aspect() {
        let dims = OutputDimensions::preset(SizePreset::Standard);
        assert_close(FrameLayout::CaptionStrip.crop_aspect(&dims), 4.0 / 4.2);
        assert_close(FrameLayout::Bordered.crop_aspect(&dims), 3.6 / (6.0 * 0.734));
    }

    #[test]
    fn test_caption_font_size() {
        assert_close(caption_font_size(1200), 36.0);
        // 600 * 0.03 = 18, clamped up to 24
        assert_close(caption_font_size(600), 24.0);
    }

    #[test]
    fn test_caption_line_centers_single_line() {
        let band = PixelRect::new(0.0, 1260.0, 1200.0, 540.0);
        let centers = caption_line_centers(&band, 1, 36.0);

        // 1260 + (540 - 43.2) / 2 + 18
        assert_eq!(centers.len(), 1);
        assert_close(centers[0], 1526.4);
    }

    #[test]
    fn test_caption_line_centers_spacing() {
        let band = PixelRect::new(0.0, 0.0, 100.0, 300.0);
        let centers = caption_line_centers(&band, 3, 10.0);
        assert_close(centers[1] - centers[0], 12.0);
        assert_close(centers[2] - centers[1], 12.0);
    }

    #[test]
    fn test_caption_support() {
        assert!(FrameLayout::CaptionStrip.supports_caption());
        assert!(!FrameLayout::Bordered.supports_caption());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
