//! Core types for image decoding.

use image::RgbaImage;
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image is truncated or its contents are damaged.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// A data URI could not be parsed.
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// A data URI names a media type the engine does not handle.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal, then rotate 270° clockwise.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal, then rotate 90° clockwise.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded source photo, upright and with its alpha channel intact.
///
/// Transparent regions of an uploaded PNG show the white frame once
/// composited.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(0), Orientation::Normal);
        assert_eq!(Orientation::from(99), Orientation::Normal);
    }

    #[test]
    fn test_source_image_dimensions() {
        let img = SourceImage::from_rgba(RgbaImage::new(40, 30));
        assert_eq!(img.dimensions(), (40, 30));
        assert!(!img.is_empty());
        assert!(SourceImage::from_rgba(RgbaImage::new(0, 10)).is_empty());
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnsupportedMediaType("image/gif".to_string());
        assert_eq!(err.to_string(), "Unsupported media type: image/gif");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
