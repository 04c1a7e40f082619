//! Caption fonts: measurement and rasterization.
//!
//! Sizes follow CSS conventions: a font size of `N` pixels is the em size,
//! and lines are positioned by their vertical middle, matching a canvas
//! drawn with `textBaseline = "middle"` and `textAlign = "center"`.

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Errors raised while loading a caption font.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Invalid font data: {0}")]
    InvalidFont(String),
}

/// Something that can measure and draw a single line of caption text.
pub trait CaptionFont {
    /// Advance width of `text` at `size_px`, in pixels.
    fn measure(&self, text: &str, size_px: f64) -> f64;

    /// Draw `text` centred on (`center_x`, `center_y`).
    fn draw_line(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        center_x: f64,
        center_y: f64,
        size_px: f64,
        color: Rgba<u8>,
    );
}

/// A TrueType / OpenType caption font.
#[derive(Clone)]
pub struct GlyphFont {
    font: FontArc,
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFont")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl GlyphFont {
    /// Load a font from `.ttf` / `.otf` bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FontError> {
        let font = FontArc::try_from_vec(bytes).map_err(|e| FontError::InvalidFont(e.to_string()))?;
        Ok(Self { font })
    }

    /// Convert a CSS em size to ab_glyph's ascent-to-descent pixel scale.
    fn px_scale(&self, size_px: f64) -> PxScale {
        let size = size_px as f32;
        match self.font.units_per_em() {
            Some(upem) if upem > 0.0 => PxScale::from(size * self.font.height_unscaled() / upem),
            _ => PxScale::from(size),
        }
    }

    /// Walk the glyphs of a line, yielding each glyph with its pen x position.
    fn layout(&self, text: &str, scale: PxScale) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(scale);
        let mut pen = 0.0f32;
        let mut last: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = last {
                pen += scaled.kern(prev, id);
            }
            glyphs.push((id, pen));
            pen += scaled.h_advance(id);
            last = Some(id);
        }
        (glyphs, pen)
    }
}

impl CaptionFont for GlyphFont {
    fn measure(&self, text: &str, size_px: f64) -> f64 {
        let (_, width) = self.layout(text, self.px_scale(size_px));
        width as f64
    }

    fn draw_line(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        center_x: f64,
        center_y: f64,
        size_px: f64,
        color: Rgba<u8>,
    ) {
        let scale = self.px_scale(size_px);
        let scaled = self.font.as_scaled(scale);
        let (glyphs, width) = self.layout(text, scale);

        let origin_x = center_x as f32 - width / 2.0;
        // Middle of the ascent..descent box sits on center_y.
        let baseline = center_y as f32 + (scaled.ascent() + scaled.descent()) / 2.0;
        let (canvas_w, canvas_h) = canvas.dimensions();

        for (id, pen) in glyphs {
            let glyph = id.with_scale_and_position(scale, ab_glyph::point(origin_x + pen, baseline));
            let Some(outline) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outline.px_bounds();
            outline.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i64 + gx as i64;
                let y = bounds.min.y as i64 + gy as i64;
                if x < 0 || y < 0 || x >= canvas_w as i64 || y >= canvas_h as i64 {
                    return;
                }
                let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                blend_coverage(pixel, color, coverage);
            });
        }
    }
}

/// Source-over blend of `color` at `coverage` onto an opaque pixel.
fn blend_coverage(pixel: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0) * (color.0[3] as f32 / 255.0);
    if alpha <= 0.0 {
        return;
    }
    for i in 0..3 {
        let dst = pixel.0[i] as f32;
        let src = color.0[i] as f32;
        pixel.0[i] = (src * alpha + dst * (1.0 - alpha)).round().clamp(0.0, 255.0) as u8;
    }
    pixel.0[3] = 255;
}

/// Fixed-metric font for tests: every character advances half the font
/// size and is drawn as a solid block one font size tall.
#[cfg(test)]
pub(crate) mod test_font {
    use super::*;

    #[derive(Debug, Default, Clone, Copy)]
    pub(crate) struct BlockFont;

    /// DejaVu Sans, for tests that exercise real glyph metrics.
    pub(crate) fn dejavu_sans() -> GlyphFont {
        GlyphFont::from_bytes(include_bytes!("../../assets/DejaVuSans.ttf").to_vec()).unwrap()
    }

    impl CaptionFont for BlockFont {
        fn measure(&self, text: &str, size_px: f64) -> f64 {
            text.chars().count() as f64 * size_px * 0.5
        }

        fn draw_line(
            &self,
            canvas: &mut RgbaImage,
            text: &str,
            center_x: f64,
            center_y: f64,
            size_px: f64,
            color: Rgba<u8>,
        ) {
            let width = self.measure(text, size_px);
            let left = (center_x - width / 2.0).round() as i64;
            let top = (center_y - size_px / 2.0).round() as i64;
            let (w, h) = canvas.dimensions();
            for y in top..top + size_px.round() as i64 {
                for x in left..left + width.round() as i64 {
                    if x >= 0 && y >= 0 && x < w as i64 && y < h as i64 {
                        canvas.put_pixel(x as u32, y as u32, color);
                    }
                }
            }
        }
    }
}
