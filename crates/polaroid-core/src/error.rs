//! Errors raised while rendering a print or a print page.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::settings::SettingsError;
use crate::text::FontError;

/// Anything that stops a render from producing an image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] EncodeError),

    #[error("Invalid render settings: {0}")]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Font(#[from] FontError),

    /// A caption was requested but no font has been provided to draw it.
    #[error("A caption font is required to draw a caption")]
    MissingFont,
}
