//! Uploaded photo decoding with EXIF orientation handling.
//!
//! Browsers draw JPEGs upright by honouring the EXIF orientation tag, so the
//! crop rectangle the editor reports is relative to the upright image. The
//! decoder applies the same correction before anything samples the pixels.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

use super::{DecodeError, Orientation, SourceImage};

/// Decode an uploaded photo (JPEG or PNG), applying EXIF orientation.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized,
/// or `DecodeError::CorruptedFile` if decoding fails partway.
pub fn decode_source(bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    let orientation = get_orientation(bytes);
    let img = decode_dynamic(bytes)?;
    let upright = apply_orientation(img, orientation);

    debug!(
        width = upright.width(),
        height = upright.height(),
        ?orientation,
        "decoded source image"
    );
    Ok(SourceImage::from_rgba(upright.into_rgba8()))
}

/// Decode JPEG or PNG bytes without touching orientation.
fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    match reader.format() {
        Some(ImageFormat::Jpeg | ImageFormat::Png) => {}
        _ => return Err(DecodeError::InvalidFormat),
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

/// Read the EXIF orientation tag.
///
/// Missing or unreadable EXIF data means `Orientation::Normal`.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };
    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
