//! Image decoding for uploaded photos and queued renders.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG uploads into upright RGBA source images
//! - Reading EXIF orientation the way browsers apply it
//! - Decoding the engine's own renders back into pixels for page packing
//!
//! All operations are synchronous and single-threaded within WASM.

mod source;
mod types;

pub use source::{decode_source, get_orientation};
pub use types::{DecodeError, Orientation, SourceImage};
