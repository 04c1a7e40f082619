//! Editor session bindings.
//!
//! `JsPolaroidSession` owns the source photo, crop snapshot, settings,
//! caption font and print queue for one editor tab. wasm-bindgen hands out
//! one mutable borrow at a time, so a second export started while the first
//! is still running fails instead of interleaving.

use polaroid_core::{CropSpec, ExportSettings, Session};
use wasm_bindgen::prelude::*;

use crate::js_error;
use crate::pack::JsPrintOptions;
use crate::types::JsExport;

#[wasm_bindgen]
#[derive(Default)]
pub struct JsPolaroidSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsPolaroidSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsPolaroidSession {
        JsPolaroidSession::default()
    }

    /// Decode an uploaded JPEG or PNG and make it the current photo.
    ///
    /// Returns `[width, height]` of the upright image.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<Vec<u32>, JsValue> {
        let (width, height) = self
            .inner
            .load_source(bytes)
            .map_err(|e| js_error("Failed to load image", e))?;
        Ok(vec![width, height])
    }

    /// Use a `.ttf` / `.otf` font for captions.
    pub fn load_caption_font(&mut self, bytes: Vec<u8>) -> Result<(), JsValue> {
        self.inner
            .load_caption_font(bytes)
            .map_err(|e| js_error("Failed to load caption font", e))
    }

    /// Store the crop tool's latest snapshot.
    pub fn set_crop(&mut self, crop: JsValue) -> Result<(), JsValue> {
        let crop: CropSpec = serde_wasm_bindgen::from_value(crop)
            .map_err(|e| js_error("Invalid crop data", e))?;
        self.inner
            .set_crop(crop)
            .map_err(|e| js_error("Invalid crop data", e))
    }

    pub fn set_settings(&mut self, settings: JsValue) -> Result<(), JsValue> {
        let settings: ExportSettings = serde_wasm_bindgen::from_value(settings)
            .map_err(|e| js_error("Invalid export settings", e))?;
        self.inner
            .set_settings(settings)
            .map_err(|e| js_error("Invalid export settings", e))
    }

    #[wasm_bindgen(getter)]
    pub fn crop_aspect(&self) -> f64 {
        self.inner.crop_aspect()
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.inner.source_dimensions().is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn queue_length(&self) -> usize {
        self.inner.print_queue().len()
    }

    /// Render the current photo. `timestamp_ms` is usually `Date.now()`.
    pub fn export(&mut self, timestamp_ms: f64) -> Result<JsExport, JsValue> {
        self.inner
            .export(timestamp_ms as u64)
            .map(JsExport::from)
            .map_err(|e| js_error("Export failed", e))
    }

    /// Render the current photo and queue it for printing. Returns the new
    /// queue length.
    pub fn add_to_print_queue(&mut self) -> Result<usize, JsValue> {
        self.inner
            .add_to_print_queue()
            .map_err(|e| js_error("Could not add to print queue", e))
    }

    pub fn clear_print_queue(&mut self) {
        self.inner.clear_print_queue();
    }

    /// Data URLs of the queued renders, for thumbnails.
    pub fn queued_data_urls(&self) -> Vec<String> {
        self.inner
            .print_queue()
            .iter()
            .map(|image| image.to_data_uri())
            .collect()
    }

    /// Pack the print queue onto one page.
    pub fn print_layout(&mut self, options: JsValue, timestamp_ms: f64) -> Result<JsExport, JsValue> {
        let options = JsPrintOptions::from_js(options)?;
        self.inner
            .print_layout(
                options.layout,
                options.paper_size,
                options.placement,
                timestamp_ms as u64,
            )
            .map(JsExport::from)
            .map_err(|e| js_error("Print layout failed", e))
    }
}
