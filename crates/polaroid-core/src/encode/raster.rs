//! Raster encoding for exports and print pages.
//!
//! Canvases are always fully opaque by the time they are encoded (every
//! render starts from a white fill), so they are flattened to RGB before
//! being handed to the `image` crate's JPEG or PNG encoder.

use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::JPEG_QUALITY;
use crate::decode::DecodeError;

/// Errors that can occur while encoding a canvas.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// Output encoding chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossy, quality 95. Smaller files.
    #[default]
    Jpeg,
    /// Lossless.
    Png,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Png => "image/png",
        }
    }

    /// File extension used in download names.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Png => "png",
        }
    }

    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime {
            "image/jpeg" | "image/jpg" => Some(ExportFormat::Jpeg),
            "image/png" => Some(ExportFormat::Png),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::Png => "PNG",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            "png" => Ok(ExportFormat::Png),
            other => Err(format!("Unknown export format: {other}")),
        }
    }
}

/// An encoded raster produced by the compositor or the page packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    format: ExportFormat,
    bytes: Vec<u8>,
}

impl RenderedImage {
    pub fn new(format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Self-contained `data:` URI suitable for an `<img>` or a download link.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    /// Parse a base64 `data:` URI for a JPEG or PNG image.
    ///
    /// Only the media type and base64 payload are checked here; the payload
    /// is not decoded as an image until it is used.
    pub fn from_data_uri(uri: &str) -> Result<Self, DecodeError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| DecodeError::InvalidDataUri("missing data: scheme".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| DecodeError::InvalidDataUri("missing ',' separator".to_string()))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or_else(|| DecodeError::InvalidDataUri("payload is not base64".to_string()))?;
        let format = ExportFormat::from_mime_type(mime)
            .ok_or_else(|| DecodeError::UnsupportedMediaType(mime.to_string()))?;
        let bytes = general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| DecodeError::InvalidDataUri(e.to_string()))?;
        Ok(Self { format, bytes })
    }
}

/// Encode an opaque canvas in the requested format.
pub fn encode_canvas(canvas: &RgbaImage, format: ExportFormat) -> Result<RenderedImage, EncodeError> {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let rgb = flatten_rgb(canvas);
    let mut buffer = Vec::new();
    let result = match format {
        ExportFormat::Jpeg => JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
            .write_image(&rgb, width, height, ExtendedColorType::Rgb8),
        ExportFormat::Png => {
            PngEncoder::new(&mut buffer).write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        }
    };
    result.map_err(|e| EncodeError::EncodingFailed {
        format: format.name(),
        message: e.to_string(),
    })?;

    Ok(RenderedImage::new(format, buffer))
}

/// Drop the alpha channel. Callers guarantee the canvas is opaque.
fn flatten_rgb(canvas: &RgbaImage) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(canvas.as_raw().len() / 4 * 3);
    for px in canvas.pixels() {
        rgb.extend_from_slice(&px.0[..3]);
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================
