//! Export settings supplied by the editor.
//!
//! These types are the whole configuration surface of the engine: the crop
//! snapshot from the crop tool, the physical output size, the caption, and
//! the export format. All of them deserialize from plain JavaScript objects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    inches_to_px, MAX_CAPTION_CHARS, MAX_OUTPUT_INCHES, MAX_ROTATION_DEGREES, MAX_ZOOM,
    MIN_OUTPUT_INCHES, MIN_ZOOM,
};
use crate::encode::ExportFormat;
use crate::layout::FrameLayout;

/// Errors for settings that fall outside their accepted ranges.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Output {axis} must be between 1 and 20 inches, got {value}")]
    DimensionOutOfRange { axis: &'static str, value: f64 },

    #[error("Caption is {len} characters; the limit is 120")]
    CaptionTooLong { len: usize },

    #[error("Zoom must be between 1 and 3, got {0}")]
    ZoomOutOfRange(f64),

    #[error("Rotation must be between -180 and 180 degrees, got {0}")]
    RotationOutOfRange(f64),

    #[error("Crop area must have a positive size, got {width}x{height}")]
    EmptyCropArea { width: f64, height: f64 },

    #[error("Unknown size preset: {0}")]
    UnknownPreset(String),
}

// =============================================================================
// Crop
// =============================================================================

/// A rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Intersection with another rectangle, or `None` if they do not overlap.
    pub fn intersect(&self, other: &PixelRect) -> Option<PixelRect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let rect = PixelRect::new(left, top, right - left, bottom - top);
        (!rect.is_empty()).then_some(rect)
    }
}

/// Pan offset reported by the crop tool.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanOffset {
    pub x: f64,
    pub y: f64,
}

/// Snapshot of the crop tool at export time.
///
/// Pan and zoom are already folded into `cropped_area_pixels` by the crop
/// tool; they are kept so the snapshot can be validated and restored.
/// Rotation only changes the render when the settings ask for
/// [`CropSpace::Rotated`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSpec {
    #[serde(default)]
    pub crop: PanOffset,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub rotation: f64,
    pub cropped_area_pixels: PixelRect,
}

fn default_zoom() -> f64 {
    MIN_ZOOM
}

impl CropSpec {
    /// Snapshot with no pan, zoom or rotation.
    pub fn from_area(area: PixelRect) -> Self {
        Self {
            crop: PanOffset::default(),
            zoom: MIN_ZOOM,
            rotation: 0.0,
            cropped_area_pixels: area,
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(SettingsError::ZoomOutOfRange(self.zoom));
        }
        if !(-MAX_ROTATION_DEGREES..=MAX_ROTATION_DEGREES).contains(&self.rotation) {
            return Err(SettingsError::RotationOutOfRange(self.rotation));
        }
        let area = &self.cropped_area_pixels;
        if area.is_empty() {
            return Err(SettingsError::EmptyCropArea {
                width: area.width,
                height: area.height,
            });
        }
        Ok(())
    }
}

/// Which image `cropped_area_pixels` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CropSpace {
    /// The upright source image. The crop rotation is ignored.
    #[default]
    Source,
    /// The source rotated by the crop rotation into its enlarged bounding
    /// box, as the crop tool displays it.
    Rotated,
}

// =============================================================================
// Output Dimensions
// =============================================================================

/// Preset print sizes offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizePreset {
    #[serde(rename = "2x3")]
    Wallet,
    #[serde(rename = "4x6")]
    Standard,
    #[serde(rename = "5x7")]
    Large,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [SizePreset::Wallet, SizePreset::Standard, SizePreset::Large];

    pub fn inches(self) -> (f64, f64) {
        match self {
            SizePreset::Wallet => (2.0, 3.0),
            SizePreset::Standard => (4.0, 6.0),
            SizePreset::Large => (5.0, 7.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizePreset::Wallet => "2×3 inches",
            SizePreset::Standard => "4×6 inches",
            SizePreset::Large => "5×7 inches",
        }
    }
}

impl std::str::FromStr for SizePreset {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2x3" => Ok(SizePreset::Wallet),
            "4x6" => Ok(SizePreset::Standard),
            "5x7" => Ok(SizePreset::Large),
            other => Err(SettingsError::UnknownPreset(other.to_string())),
        }
    }
}

/// Physical size of a rendered print, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputDimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for OutputDimensions {
    fn default() -> Self {
        Self::preset(SizePreset::Standard)
    }
}

impl From<SizePreset> for OutputDimensions {
    fn from(preset: SizePreset) -> Self {
        Self::preset(preset)
    }
}

impl OutputDimensions {
    pub fn preset(preset: SizePreset) -> Self {
        let (width, height) = preset.inches();
        Self { width, height }
    }

    /// Custom size, each edge between 1 and 20 inches inclusive.
    pub fn custom(width: f64, height: f64) -> Result<Self, SettingsError> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let range = MIN_OUTPUT_INCHES..=MAX_OUTPUT_INCHES;
        if !range.contains(&self.width) {
            return Err(SettingsError::DimensionOutOfRange {
                axis: "width",
                value: self.width,
            });
        }
        if !range.contains(&self.height) {
            return Err(SettingsError::DimensionOutOfRange {
                axis: "height",
                value: self.height,
            });
        }
        Ok(())
    }

    /// Canvas size in pixels at print resolution.
    pub fn pixel_size(&self) -> (u32, u32) {
        (inches_to_px(self.width), inches_to_px(self.height))
    }
}

// =============================================================================
// Caption
// =============================================================================

/// Caption text printed under the photo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Caption(String);

impl Caption {
    pub fn new(text: impl Into<String>) -> Result<Self, SettingsError> {
        let text = text.into();
        let len = text.chars().count();
        if len > MAX_CAPTION_CHARS {
            return Err(SettingsError::CaptionTooLong { len });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing worth drawing.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl TryFrom<String> for Caption {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Caption::new(value)
    }
}

impl From<Caption> for String {
    fn from(caption: Caption) -> Self {
        caption.0
    }
}

// =============================================================================
// Export Settings
// =============================================================================

/// Everything besides the crop that shapes a single export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportSettings {
    pub dimensions: OutputDimensions,
    pub caption: Caption,
    pub format: ExportFormat,
    pub layout: FrameLayout,
    pub crop_space: CropSpace,
}

impl ExportSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.dimensions.validate()
    }

    /// Aspect ratio (width / height) the crop tool should enforce.
    pub fn crop_aspect(&self) -> f64 {
        self.layout.crop_aspect(&self.dimensions)
    }
}
