//! Stateless compositing bindings.
//!
//! These mirror the session methods for callers that keep editor state on
//! the JavaScript side and only need one render at a time.

use polaroid_core::{
    compose, decode_source, CaptionFont, CropSpec, ExportSettings, GlyphFont, RenderError,
    RenderedImage, SizePreset,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::js_error;
use crate::types::JsRenderedImage;

/// A size preset as shown in the editor's size picker.
#[derive(Debug, Clone, Serialize)]
pub struct JsSizePreset {
    pub id: String,
    pub label: String,
    pub width: f64,
    pub height: f64,
}

impl From<SizePreset> for JsSizePreset {
    fn from(preset: SizePreset) -> Self {
        let (width, height) = preset.inches();
        Self {
            id: format!("{}x{}", width, height),
            label: preset.label().to_string(),
            width,
            height,
        }
    }
}

/// Render a Polaroid print from source bytes.
///
/// `crop` is the crop tool's snapshot (`{ crop, zoom, rotation,
/// croppedAreaPixels }`) and `settings` the export settings object; missing
/// settings fields take their defaults. The crop rectangle is read from the
/// upright source unless `cropSpace: 'rotated'` is set. `font_bytes` is only
/// needed when the caption is not blank.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const print = compose_polaroid(bytes, cropSnapshot, {
///   dimensions: { width: 4, height: 6 },
///   caption: 'Summer 2024',
///   format: 'jpeg',
/// }, fontBytes);
/// img.src = print.data_url;
/// ```
#[wasm_bindgen]
pub fn compose_polaroid(
    image_bytes: &[u8],
    crop: JsValue,
    settings: JsValue,
    font_bytes: Option<Vec<u8>>,
) -> Result<JsRenderedImage, JsValue> {
    let crop: CropSpec = serde_wasm_bindgen::from_value(crop)
        .map_err(|e| js_error("Invalid crop data", e))?;
    let settings = parse_settings(settings)?;

    compose_bytes(image_bytes, &crop, &settings, font_bytes)
        .map(JsRenderedImage::from)
        .map_err(|e| js_error("Render failed", e))
}

/// Aspect ratio (width / height) the crop tool should lock to.
#[wasm_bindgen]
pub fn crop_aspect(settings: JsValue) -> Result<f64, JsValue> {
    Ok(parse_settings(settings)?.crop_aspect())
}

/// The built-in print sizes, smallest first.
#[wasm_bindgen]
pub fn size_presets() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&preset_list()).map_err(|e| js_error("Serialization failed", e))
}

fn preset_list() -> Vec<JsSizePreset> {
    SizePreset::ALL.into_iter().map(JsSizePreset::from).collect()
}

fn parse_settings(settings: JsValue) -> Result<ExportSettings, JsValue> {
    if settings.is_undefined() || settings.is_null() {
        return Ok(ExportSettings::default());
    }
    serde_wasm_bindgen::from_value(settings).map_err(|e| js_error("Invalid export settings", e))
}

fn compose_bytes(
    image_bytes: &[u8],
    crop: &CropSpec,
    settings: &ExportSettings,
    font_bytes: Option<Vec<u8>>,
) -> Result<RenderedImage, RenderError> {
    let source = decode_source(image_bytes)?;
    let font = font_bytes.map(GlyphFont::from_bytes).transpose()?;
    compose(
        &source,
        crop,
        settings,
        font.as_ref().map(|f| f as &dyn CaptionFont),
    )
}
