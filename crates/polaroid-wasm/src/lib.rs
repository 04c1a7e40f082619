//! Polaroid WASM - WebAssembly bindings for Polaroid Studio
//!
//! This crate exposes the polaroid-core compositor, page packer and editor
//! session to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `session` - Stateful editor session (upload, crop, export, print queue)
//! - `compose` - Stateless single-print rendering and crop aspect helpers
//! - `pack` - Multi-up print pages from queued data URLs
//! - `types` - WASM-compatible wrappers for rendered output
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPolaroidSession } from '@polaroid/wasm';
//!
//! await init();
//!
//! const session = new JsPolaroidSession();
//! session.load_image(new Uint8Array(await file.arrayBuffer()));
//! session.set_crop(cropSnapshot);
//! const print = session.export(Date.now());
//! download(print.data_url, print.filename);
//! ```

use wasm_bindgen::prelude::*;

mod compose;
mod pack;
mod session;
mod types;

pub use compose::{compose_polaroid, crop_aspect, size_presets};
pub use pack::{pack_print_page, JsPrintOptions};
pub use session::JsPolaroidSession;
pub use types::{JsExport, JsRenderedImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log a failed action to the browser console and turn it into a JS error.
pub(crate) fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    let message = format!("{context}: {err}");
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}
