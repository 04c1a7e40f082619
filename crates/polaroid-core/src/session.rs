//! Editor session state.
//!
//! A [`Session`] owns everything the editor accumulates between actions:
//! the decoded source photo, the last crop snapshot, the export settings,
//! the caption font and the print queue. Every action either succeeds or
//! leaves that state exactly as it was.

use thiserror::Error;

use crate::compose::compose;
use crate::constants::PRINT_QUEUE_CAPACITY;
use crate::decode::{decode_source, SourceImage};
use crate::encode::{ExportFormat, RenderedImage};
use crate::error::RenderError;
use crate::layout::{GridArity, PagePlacement, PaperSize};
use crate::pack::pack_page;
use crate::queue::{PrintQueue, QueueFull};
use crate::settings::{CropSpec, ExportSettings, SettingsError};
use crate::text::{CaptionFont, GlyphFont};

/// Errors returned by session actions.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No image has been loaded")]
    MissingSource,

    #[error("No crop area has been selected")]
    MissingCrop,

    #[error(transparent)]
    QueueFull(#[from] QueueFull),

    #[error("The print queue is empty")]
    EmptyQueue,

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A finished render plus the name it should be downloaded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub image: RenderedImage,
}

impl Export {
    pub fn to_data_uri(&self) -> String {
        self.image.to_data_uri()
    }
}

#[derive(Default)]
pub struct Session {
    source: Option<SourceImage>,
    crop: Option<CropSpec>,
    settings: ExportSettings,
    font: Option<Box<dyn CaptionFont>>,
    queue: PrintQueue,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("source", &self.source.as_ref().map(SourceImage::dimensions))
            .field("crop", &self.crop)
            .field("settings", &self.settings)
            .field("has_font", &self.font.is_some())
            .field("queued", &self.queue.len())
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Decode and replace the source photo. Clears the previous crop.
    pub fn load_source(&mut self, bytes: &[u8]) -> Result<(u32, u32), SessionError> {
        let source = decode_source(bytes).map_err(RenderError::from)?;
        let dimensions = source.dimensions();

        tracing::info!(width = dimensions.0, height = dimensions.1, "loaded source image");
        self.source = Some(source);
        self.crop = None;
        Ok(dimensions)
    }

    pub fn source_dimensions(&self) -> Option<(u32, u32)> {
        self.source.as_ref().map(SourceImage::dimensions)
    }

    pub fn set_crop(&mut self, crop: CropSpec) -> Result<(), SessionError> {
        crop.validate()?;
        self.crop = Some(crop);
        Ok(())
    }

    pub fn crop(&self) -> Option<&CropSpec> {
        self.crop.as_ref()
    }

    pub fn set_settings(&mut self, settings: ExportSettings) -> Result<(), SessionError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Aspect ratio the crop tool should lock to for the current settings.
    pub fn crop_aspect(&self) -> f64 {
        self.settings.crop_aspect()
    }

    pub fn set_caption_font(&mut self, font: Box<dyn CaptionFont>) {
        self.font = Some(font);
    }

    /// Parse `.ttf` / `.otf` bytes and use them for captions.
    pub fn load_caption_font(&mut self, bytes: Vec<u8>) -> Result<(), SessionError> {
        let font = GlyphFont::from_bytes(bytes).map_err(RenderError::from)?;
        self.set_caption_font(Box::new(font));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Render the current photo with the current settings.
    pub fn export(&mut self, timestamp_ms: u64) -> Result<Export, SessionError> {
        let image = self.render(self.settings.format)?;
        let filename = format!("polaroid-{timestamp_ms}.{}", image.format().extension());

        tracing::info!(%filename, "exported print");
        Ok(Export { filename, image })
    }

    /// Render the current photo as JPEG and append it to the print queue.
    ///
    /// Returns the new queue length.
    pub fn add_to_print_queue(&mut self) -> Result<usize, SessionError> {
        self.require_inputs()?;
        if self.queue.is_full() {
            return Err(QueueFull {
                capacity: PRINT_QUEUE_CAPACITY,
            }
            .into());
        }

        let image = self.render(ExportFormat::Jpeg)?;
        let len = self.queue.push(image)?;
        tracing::info!(queued = len, "added print to queue");
        Ok(len)
    }

    pub fn clear_print_queue(&mut self) {
        self.queue.clear();
    }

    pub fn print_queue(&self) -> &PrintQueue {
        &self.queue
    }

    /// Pack the queued renders onto one page.
    pub fn print_layout(
        &mut self,
        arity: GridArity,
        paper: PaperSize,
        placement: PagePlacement,
        timestamp_ms: u64,
    ) -> Result<Export, SessionError> {
        if self.queue.is_empty() {
            return Err(SessionError::EmptyQueue);
        }

        let image = pack_page(self.queue.as_slice(), arity, paper, placement)?;
        let filename = format!("polaroid-print-layout-{timestamp_ms}.jpg");
        Ok(Export { filename, image })
    }

    fn require_inputs(&self) -> Result<(&SourceImage, &CropSpec), SessionError> {
        let source = self.source.as_ref().ok_or(SessionError::MissingSource)?;
        let crop = self.crop.as_ref().ok_or(SessionError::MissingCrop)?;
        Ok((source, crop))
    }

    fn render(&self, format: ExportFormat) -> Result<RenderedImage, SessionError> {
        let (source, crop) = self.require_inputs()?;
        let settings = ExportSettings {
            format,
            ..self.settings.clone()
        };
        Ok(compose(source, crop, &settings, self.font.as_deref())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_canvas;
    use crate::settings::{Caption, OutputDimensions, PixelRect, SizePreset};
    use crate::text::test_font::BlockFont;
    use image::{Rgba, RgbaImage};

    fn photo_bytes(width: u32, height: u32) -> Vec<u8> {
        let canvas = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        encode_canvas(&canvas, ExportFormat::Png).unwrap().into_bytes()
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        session.load_source(&photo_bytes(40, 60)).unwrap();
        session
            .set_crop(CropSpec::from_area(PixelRect::new(0.0, 0.0, 40.0, 60.0)))
            .unwrap();
        session
            .set_settings(ExportSettings {
                dimensions: OutputDimensions::preset(SizePreset::Wallet),
                ..ExportSettings::default()
            })
            .unwrap();
        session
    }

    #[test]
    fn test_export_filename_and_format() {
        let mut session = ready_session();
        let export = session.export(1_700_000_000_000).unwrap();

        assert_eq!(export.filename, "polaroid-1700000000000.jpeg");
        assert_eq!(export.image.format(), ExportFormat::Jpeg);
        assert!(export.to_data_uri().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_export_png() {
        let mut session = ready_session();
        let mut settings = session.settings().clone();
        settings.format = ExportFormat::Png;
        session.set_settings(settings).unwrap();

        let export = session.export(42).unwrap();
        assert_eq!(export.filename, "polaroid-42.png");
    }

    #[test]
    fn test_export_without_source() {
        let mut session = Session::new();
        assert!(matches!(session.export(1), Err(SessionError::MissingSource)));
    }

    #[test]
    fn test_export_without_crop() {
        let mut session = Session::new();
        session.load_source(&photo_bytes(10, 10)).unwrap();
        assert!(matches!(session.export(1), Err(SessionError::MissingCrop)));
    }

    #[test]
    fn test_loading_new_source_clears_crop() {
        let mut session = ready_session();
        assert_eq!(session.load_source(&photo_bytes(8, 4)).unwrap(), (8, 4));
        assert!(session.crop().is_none());
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut session = ready_session();
        assert!(session.load_source(b"not an image").is_err());
        assert_eq!(session.source_dimensions(), Some((40, 60)));
        assert!(session.crop().is_some());
    }

    #[test]
    fn test_invalid_crop_rejected() {
        let mut session = ready_session();
        let mut crop = *session.crop().unwrap();
        crop.zoom = 5.0;

        assert!(matches!(
            session.set_crop(crop),
            Err(SessionError::Settings(SettingsError::ZoomOutOfRange(_)))
        ));
        assert_eq!(session.crop().unwrap().zoom, 1.0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut session = ready_session();
        let before = session.settings().clone();
        let bad = ExportSettings {
            dimensions: OutputDimensions {
                width: 0.5,
                height: 6.0,
            },
            ..ExportSettings::default()
        };

        assert!(matches!(session.set_settings(bad), Err(SessionError::Settings(_))));
        assert_eq!(session.settings(), &before);
    }

    #[test]
    fn test_caption_requires_font() {
        let mut session = ready_session();
        let mut settings = session.settings().clone();
        settings.caption = Caption::new("Beach day").unwrap();
        session.set_settings(settings).unwrap();

        assert!(matches!(
            session.export(1),
            Err(SessionError::Render(RenderError::MissingFont))
        ));

        session.set_caption_font(Box::new(BlockFont));
        assert!(session.export(1).is_ok());
    }

    #[test]
    fn test_load_caption_font_from_bytes() {
        let mut session = ready_session();
        let mut settings = session.settings().clone();
        settings.caption = Caption::new("Beach day").unwrap();
        session.set_settings(settings).unwrap();

        let font = include_bytes!("../assets/DejaVuSans.ttf").to_vec();
        session.load_caption_font(font).unwrap();
        assert!(session.export(1).is_ok());
    }

    #[test]
    fn test_invalid_font_bytes() {
        let mut session = Session::new();
        assert!(matches!(
            session.load_caption_font(vec![1, 2, 3]),
            Err(SessionError::Render(RenderError::Font(_)))
        ));
    }

    #[test]
    fn test_queue_fills_to_capacity() {
        let mut session = ready_session();
        for expected in 1..=8 {
            assert_eq!(session.add_to_print_queue().unwrap(), expected);
        }

        assert!(matches!(
            session.add_to_print_queue(),
            Err(SessionError::QueueFull(_))
        ));
        assert_eq!(session.print_queue().len(), 8);
    }

    #[test]
    fn test_queue_stores_jpeg_regardless_of_format() {
        let mut session = ready_session();
        let mut settings = session.settings().clone();
        settings.format = ExportFormat::Png;
        session.set_settings(settings).unwrap();

        session.add_to_print_queue().unwrap();
        assert_eq!(
            session.print_queue().as_slice()[0].format(),
            ExportFormat::Jpeg
        );
    }

    #[test]
    fn test_missing_input_reported_before_capacity() {
        let mut session = ready_session();
        for _ in 0..8 {
            session.add_to_print_queue().unwrap();
        }
        session.load_source(&photo_bytes(10, 10)).unwrap();

        assert!(matches!(
            session.add_to_print_queue(),
            Err(SessionError::MissingCrop)
        ));
    }

    #[test]
    fn test_print_layout_empty_queue() {
        let mut session = ready_session();
        assert!(matches!(
            session.print_layout(
                GridArity::Four,
                PaperSize::Letter,
                PagePlacement::FixedScale,
                1
            ),
            Err(SessionError::EmptyQueue)
        ));
    }

    #[test]
    fn test_print_layout_filename() {
        let mut session = ready_session();
        session.add_to_print_queue().unwrap();
        session.add_to_print_queue().unwrap();

        let export = session
            .print_layout(GridArity::Two, PaperSize::A4, PagePlacement::FixedScale, 99)
            .unwrap();
        assert_eq!(export.filename, "polaroid-print-layout-99.jpg");
        assert_eq!(export.image.format(), ExportFormat::Jpeg);
    }

    #[test]
    fn test_clear_print_queue() {
        let mut session = ready_session();
        session.add_to_print_queue().unwrap();
        session.clear_print_queue();
        assert!(session.print_queue().is_empty());
    }
}
