//! Polaroid compositing: one source photo, one crop, one caption.
//!
//! A render always starts from an opaque white canvas sized from the output
//! dimensions at print resolution. The crop region of the source is scaled
//! into the frame's photo rectangle, then the caption is wrapped and drawn
//! into the caption band when the frame has one. The crop region is read
//! from the upright source unless the settings opt into rotated crop space.

use image::{Rgba, RgbaImage};

use crate::constants::{CAPTION_COLOR, WHITE};
use crate::decode::SourceImage;
use crate::encode::{encode_canvas, RenderedImage};
use crate::error::RenderError;
use crate::layout::{caption_font_size, caption_line_centers, caption_max_line_width};
use crate::settings::{CropSpace, CropSpec, ExportSettings, PixelRect};
use crate::text::{wrap_words, CaptionFont};
use crate::transform::{draw_region, rotate_source};

/// Render and encode a print in the format named by `settings`.
pub fn compose(
    source: &SourceImage,
    crop: &CropSpec,
    settings: &ExportSettings,
    font: Option<&dyn CaptionFont>,
) -> Result<RenderedImage, RenderError> {
    let canvas = render_canvas(source, crop, settings, font)?;
    let rendered = encode_canvas(&canvas, settings.format)?;

    tracing::debug!(
        width = canvas.width(),
        height = canvas.height(),
        format = settings.format.extension(),
        bytes = rendered.bytes().len(),
        "composed print"
    );
    Ok(rendered)
}

/// Render a print to an opaque RGBA canvas without encoding it.
pub fn render_canvas(
    source: &SourceImage,
    crop: &CropSpec,
    settings: &ExportSettings,
    font: Option<&dyn CaptionFont>,
) -> Result<RgbaImage, RenderError> {
    settings.validate()?;
    crop.validate()?;

    let caption = settings.caption.as_str();
    let wants_caption = settings.layout.supports_caption() && !settings.caption.is_blank();
    let font = match (wants_caption, font) {
        (false, _) => None,
        (true, Some(font)) => Some(font),
        (true, None) => return Err(RenderError::MissingFont),
    };

    let (width, height) = settings.dimensions.pixel_size();
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba(WHITE));

    let rotated = (settings.crop_space == CropSpace::Rotated && crop.rotation != 0.0)
        .then(|| rotate_source(source, crop.rotation));
    let pixels = rotated.as_ref().unwrap_or(source).as_rgba();

    let area = crop.cropped_area_pixels;
    let geometry = settings
        .layout
        .geometry(width, height, area.width, area.height);
    draw_region(&mut canvas, pixels, area, geometry.photo);

    if let (Some(font), Some(band)) = (font, geometry.caption_band) {
        draw_caption(&mut canvas, font, caption, &band);
    }

    Ok(canvas)
}

fn draw_caption(canvas: &mut RgbaImage, font: &dyn CaptionFont, text: &str, band: &PixelRect) {
    let width = canvas.width();
    let size = caption_font_size(width);
    let lines = wrap_words(font, text, size, caption_max_line_width(width));
    let centers = caption_line_centers(band, lines.len(), size);
    let center_x = width as f64 / 2.0;

    tracing::trace!(lines = lines.len(), font_size = size, "drawing caption");
    for (line, center_y) in lines.iter().zip(centers) {
        font.draw_line(canvas, line, center_x, center_y, size, Rgba(CAPTION_COLOR));
    }
}
