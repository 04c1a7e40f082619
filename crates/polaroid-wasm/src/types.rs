//! WASM-compatible wrapper types for rendered output.

use polaroid_core::{Export, RenderedImage};
use wasm_bindgen::prelude::*;

/// An encoded raster handed back to JavaScript.
///
/// `data_url` is what the editor shows in an `<img>` and stores in the
/// print queue; `bytes()` copies the encoded file into a `Uint8Array` for
/// callers that want a `Blob` instead.
#[wasm_bindgen]
pub struct JsRenderedImage {
    image: RenderedImage,
}

#[wasm_bindgen]
impl JsRenderedImage {
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.image.format().mime_type().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn data_url(&self) -> String {
        self.image.to_data_uri()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.image.bytes().len()
    }

    /// Copy of the encoded file.
    pub fn bytes(&self) -> Vec<u8> {
        self.image.bytes().to_vec()
    }
}

impl From<RenderedImage> for JsRenderedImage {
    fn from(image: RenderedImage) -> Self {
        Self { image }
    }
}

/// A render plus its suggested download filename.
#[wasm_bindgen]
pub struct JsExport {
    filename: String,
    image: RenderedImage,
}

#[wasm_bindgen]
impl JsExport {
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.image.format().mime_type().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn data_url(&self) -> String {
        self.image.to_data_uri()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.image.bytes().to_vec()
    }
}

impl From<Export> for JsExport {
    fn from(export: Export) -> Self {
        Self {
            filename: export.filename,
            image: export.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polaroid_core::ExportFormat;

    #[test]
    fn test_rendered_image_accessors() {
        let js = JsRenderedImage::from(RenderedImage::new(ExportFormat::Png, vec![1, 2, 3]));
        assert_eq!(js.mime_type(), "image/png");
        assert_eq!(js.byte_length(), 3);
        assert_eq!(js.data_url(), "data:image/png;base64,AQID");
    }

    #[test]
    fn test_export_accessors() {
        let js = JsExport::from(Export {
            filename: "polaroid-1.jpeg".to_string(),
            image: RenderedImage::new(ExportFormat::Jpeg, vec![0xFF, 0xD8]),
        });
        assert_eq!(js.filename(), "polaroid-1.jpeg");
        assert_eq!(js.mime_type(), "image/jpeg");
        assert_eq!(js.bytes(), vec![0xFF, 0xD8]);
    }
}
