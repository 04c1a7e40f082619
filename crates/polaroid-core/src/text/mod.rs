//! Caption text: font metrics, rasterization and line wrapping.
//!
//! Fonts sit behind the [`CaptionFont`] trait so the compositor does not
//! care where glyphs come from. [`GlyphFont`] is the TrueType
//! implementation used in the browser, loaded from font bytes the page
//! fetches once at start-up.

mod font;
mod wrap;

pub use font::{CaptionFont, FontError, GlyphFont};
pub use wrap::wrap_words;

#[cfg(test)]
pub(crate) use font::test_font;
