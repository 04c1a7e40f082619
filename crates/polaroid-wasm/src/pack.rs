//! Print page bindings.

use polaroid_core::{
    pack_page, DecodeError, GridArity, PagePlacement, PaperSize, RenderError, RenderedImage,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::js_error;
use crate::types::JsRenderedImage;

/// Print page options passed from TypeScript. Missing fields default to a
/// 4-up letter page at the fixed print scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsPrintOptions {
    /// 2, 4 or 8
    pub layout: GridArity,
    /// `"letter"` or `"a4"`
    pub paper_size: PaperSize,
    /// `"fixedScale"` or `"fitToCell"`
    pub placement: PagePlacement,
}

impl JsPrintOptions {
    pub(crate) fn from_js(options: JsValue) -> Result<Self, JsValue> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(options).map_err(|e| js_error("Invalid print options", e))
    }
}

/// Pack rendered prints (as data URLs) onto one printable page.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const page = pack_print_page(queue, { layout: 4, paperSize: 'letter' });
/// download(page.data_url, `polaroid-print-layout-${Date.now()}.jpg`);
/// ```
#[wasm_bindgen]
pub fn pack_print_page(
    data_urls: js_sys::Array,
    options: JsValue,
) -> Result<JsRenderedImage, JsValue> {
    let options = JsPrintOptions::from_js(options)?;
    let urls = data_urls
        .iter()
        .map(|value| {
            value
                .as_string()
                .ok_or_else(|| js_error("Invalid print queue", "entries must be strings"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pack_data_urls(&urls, &options)
        .map(JsRenderedImage::from)
        .map_err(|e| js_error("Print layout failed", e))
}

fn pack_data_urls(urls: &[String], options: &JsPrintOptions) -> Result<RenderedImage, RenderError> {
    let images = urls
        .iter()
        .take(options.layout.count())
        .map(|url| RenderedImage::from_data_uri(url))
        .collect::<Result<Vec<_>, DecodeError>>()?;

    pack_page(&images, options.layout, options.paper_size, options.placement)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use polaroid_core::{encode_canvas, ExportFormat};
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct TestOptions {
        layout: u8,
        paper_size: &'static str,
    }

    fn queue(count: usize) -> js_sys::Array {
        let canvas = image::RgbaImage::from_pixel(12, 18, image::Rgba([10, 10, 10, 255]));
        let url = encode_canvas(&canvas, ExportFormat::Jpeg).unwrap().to_data_uri();
        let array = js_sys::Array::new();
        for _ in 0..count {
            array.push(&JsValue::from_str(&url));
        }
        array
    }

    #[wasm_bindgen_test]
    fn test_pack_print_page_a4() {
        let options = serde_wasm_bindgen::to_value(&TestOptions {
            layout: 8,
            paper_size: "a4",
        })
        .unwrap();
        let page = pack_print_page(queue(3), options).unwrap();
        assert_eq!(page.mime_type(), "image/jpeg");
    }

    #[wasm_bindgen_test]
    fn test_pack_print_page_rejects_bad_arity() {
        let options = serde_wasm_bindgen::to_value(&TestOptions {
            layout: 3,
            paper_size: "letter",
        })
        .unwrap();
        assert!(pack_print_page(queue(1), options).is_err());
    }

    #[wasm_bindgen_test]
    fn test_pack_print_page_rejects_non_string_entry() {
        let array = queue(1);
        array.push(&JsValue::from_f64(1.0));
        assert!(pack_print_page(array, JsValue::UNDEFINED).is_err());
    }
}
