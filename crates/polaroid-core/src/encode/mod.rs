//! Image encoding for single exports and print pages.
//!
//! This module provides functionality for:
//! - Encoding opaque canvases as JPEG (quality 95) or PNG
//! - Wrapping encoded bytes as base64 `data:` URIs and parsing them back
//!
//! All operations are synchronous and single-threaded within WASM.

mod raster;

pub use raster::{encode_canvas, EncodeError, ExportFormat, RenderedImage};
