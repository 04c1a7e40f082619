//! Shared constants for compositing and print layout.
//!
//! Every physical measurement in the engine is expressed in inches and
//! converted to pixels at a single fixed print resolution.

// =============================================================================
// Print Resolution
// =============================================================================

/// Print resolution used for every rendered canvas.
pub const DPI: f64 = 300.0;

/// Convert a physical length in inches to a pixel count at [`DPI`].
///
/// Rounds to the nearest pixel and never returns zero, so a canvas always
/// has at least one row and column.
#[inline]
pub fn inches_to_px(inches: f64) -> u32 {
    (inches * DPI).round().max(1.0) as u32
}

// =============================================================================
// Output Limits
// =============================================================================

/// Smallest custom output edge, in inches.
pub const MIN_OUTPUT_INCHES: f64 = 1.0;

/// Largest custom output edge, in inches.
pub const MAX_OUTPUT_INCHES: f64 = 20.0;

/// Maximum caption length in characters.
pub const MAX_CAPTION_CHARS: usize = 120;

/// Zoom range accepted from the crop tool.
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 3.0;

/// Rotation range accepted from the crop tool, in degrees.
pub const MAX_ROTATION_DEGREES: f64 = 180.0;

// =============================================================================
// Encoding
// =============================================================================

/// Quality used for every lossy export (0.95 on the browser's 0..1 scale).
pub const JPEG_QUALITY: u8 = 95;

// =============================================================================
// Caption-Strip Frame
// =============================================================================

/// Fraction of the canvas height occupied by the photo band.
pub const STRIP_IMAGE_FRACTION: f64 = 0.7;

/// Fraction of the canvas height reserved for the caption band.
pub const STRIP_CAPTION_FRACTION: f64 = 0.3;

/// Smallest caption font size in pixels.
pub const CAPTION_MIN_FONT_PX: f64 = 24.0;

/// Caption font size as a fraction of canvas width.
pub const CAPTION_FONT_WIDTH_FRACTION: f64 = 0.03;

/// Widest a caption line may be, as a fraction of canvas width.
pub const CAPTION_MAX_LINE_FRACTION: f64 = 0.8;

/// Line height as a multiple of font size.
pub const CAPTION_LINE_SPACING: f64 = 1.2;

/// Caption text colour (#333333).
pub const CAPTION_COLOR: [u8; 4] = [0x33, 0x33, 0x33, 0xFF];

// =============================================================================
// Bordered Frame
// =============================================================================

pub const BORDER_TOP_FRACTION: f64 = 0.10;
pub const BORDER_BOTTOM_FRACTION: f64 = 0.166;
pub const BORDER_SIDE_FRACTION: f64 = 0.05;

// =============================================================================
// Print Page
// =============================================================================

/// Page margin on every side, in inches.
pub const PAGE_MARGIN_INCHES: f64 = 0.5;

/// Scale applied to each queued render when it is placed on a page.
pub const PAGE_IMAGE_SCALE: f64 = 0.3;

/// Maximum number of renders held in the print queue.
pub const PRINT_QUEUE_CAPACITY: usize = 8;

/// Canvas background colour.
pub const WHITE: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
