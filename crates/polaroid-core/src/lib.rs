//! Polaroid Core - print compositing library
//!
//! This crate turns a photo, a crop snapshot and a caption into a
//! print-resolution Polaroid-style raster, and packs finished prints onto
//! multi-up pages for home printing.
//!
//! The usual entry point is [`Session`], which holds the editor state
//! between actions. The individual stages ([`decode_source`], [`compose`],
//! [`pack_page`]) are also public for callers that manage state themselves.

pub mod compose;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod layout;
pub mod pack;
pub mod queue;
pub mod session;
pub mod settings;
pub mod text;
pub mod transform;

pub use compose::{compose, render_canvas};
pub use decode::{decode_source, DecodeError, SourceImage};
pub use encode::{encode_canvas, EncodeError, ExportFormat, RenderedImage};
pub use error::RenderError;
pub use layout::{FrameLayout, GridArity, PagePlacement, PaperSize};
pub use pack::{pack_page, render_page};
pub use queue::{PrintQueue, QueueFull};
pub use session::{Export, Session, SessionError};
pub use settings::{
    Caption, CropSpace, CropSpec, ExportSettings, OutputDimensions, PanOffset, PixelRect,
    SettingsError, SizePreset,
};
pub use text::{CaptionFont, FontError, GlyphFont};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_print_page() {
        let photo = image::RgbaImage::from_pixel(30, 20, image::Rgba([20, 120, 200, 255]));
        let bytes = encode_canvas(&photo, ExportFormat::Png).unwrap().into_bytes();

        let mut session = Session::new();
        session.load_source(&bytes).unwrap();
        session
            .set_crop(CropSpec::from_area(PixelRect::new(0.0, 0.0, 30.0, 20.0)))
            .unwrap();
        session
            .set_settings(ExportSettings {
                dimensions: OutputDimensions::preset(SizePreset::Wallet),
                ..ExportSettings::default()
            })
            .unwrap();

        for _ in 0..4 {
            session.add_to_print_queue().unwrap();
        }
        let page = session
            .print_layout(GridArity::Four, PaperSize::Letter, PagePlacement::FitToCell, 7)
            .unwrap();

        let decoded = image::load_from_memory(page.image.bytes()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2550, 3300));
    }
}
