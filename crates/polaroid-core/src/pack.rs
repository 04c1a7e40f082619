//! Multi-up print pages.
//!
//! Queued renders are decoded one at a time, in order, and drawn into a
//! row-major grid on a white page. The page is always encoded as JPEG.

use image::{Rgba, RgbaImage};

use crate::constants::WHITE;
use crate::decode::decode_source;
use crate::encode::{encode_canvas, ExportFormat, RenderedImage};
use crate::error::RenderError;
use crate::layout::{GridArity, PageGrid, PagePlacement, PaperSize};
use crate::settings::PixelRect;
use crate::transform::draw_region;

/// Lay out up to `arity` renders on one page of `paper`.
///
/// Images past the grid's capacity are ignored without being decoded. Any
/// image that fails to decode aborts the whole page.
pub fn pack_page(
    images: &[RenderedImage],
    arity: GridArity,
    paper: PaperSize,
    placement: PagePlacement,
) -> Result<RenderedImage, RenderError> {
    let canvas = render_page(images, arity, paper, placement)?;
    let page = encode_canvas(&canvas, ExportFormat::Jpeg)?;

    tracing::info!(
        placed = images.len().min(arity.count()),
        arity = arity.count(),
        ?paper,
        bytes = page.bytes().len(),
        "packed print page"
    );
    Ok(page)
}

/// Render a page to an opaque canvas without encoding it.
pub fn render_page(
    images: &[RenderedImage],
    arity: GridArity,
    paper: PaperSize,
    placement: PagePlacement,
) -> Result<RgbaImage, RenderError> {
    let grid = PageGrid::new(paper, arity);
    let mut canvas = RgbaImage::from_pixel(grid.page_width, grid.page_height, Rgba(WHITE));

    for (index, image) in images.iter().take(arity.count()).enumerate() {
        let decoded = decode_source(image.bytes())?;
        let (width, height) = decoded.dimensions();
        let dst = grid.place(index, width, height, placement);
        let src = PixelRect::new(0.0, 0.0, width as f64, height as f64);
        draw_region(&mut canvas, decoded.as_rgba(), src, dst);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_render(width: u32, height: u32, color: [u8; 4]) -> RenderedImage {
        let canvas = RgbaImage::from_pixel(width, height, Rgba(color));
        encode_canvas(&canvas, ExportFormat::Png).unwrap()
    }

    fn garbage_render() -> RenderedImage {
        RenderedImage::new(ExportFormat::Jpeg, vec![0xFF, 0xD8, 0x00, 0x01])
    }

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    #[test]
    fn test_single_image_letter_four_up() {
        let images = [solid_render(1200, 1800, RED)];
        let page = render_page(
            &images,
            GridArity::Four,
            PaperSize::Letter,
            PagePlacement::FixedScale,
        )
        .unwrap();

        assert_eq!(page.dimensions(), (2550, 3300));

        // 360x540 at (532.5, 630) in cell (0, 0).
        assert_eq!(page.get_pixel(712, 900).0, RED);
        assert_eq!(page.get_pixel(540, 640).0, RED);
        assert_eq!(page.get_pixel(520, 900).0, WHITE);
        assert_eq!(page.get_pixel(712, 620).0, WHITE);

        // Remaining cells stay white.
        assert_eq!(page.get_pixel(1837, 900).0, WHITE);
        assert_eq!(page.get_pixel(712, 2400).0, WHITE);
        assert_eq!(page.get_pixel(1837, 2400).0, WHITE);
    }

    #[test]
    fn test_row_major_order() {
        let images = [solid_render(100, 100, RED), solid_render(100, 100, BLUE)];
        let page = render_page(
            &images,
            GridArity::Four,
            PaperSize::Letter,
            PagePlacement::FitToCell,
        )
        .unwrap();

        // Second image lands in row 0, column 1.
        assert_eq!(page.get_pixel(712, 900).0, RED);
        assert_eq!(page.get_pixel(1837, 900).0, BLUE);
        assert_eq!(page.get_pixel(712, 2400).0, WHITE);
    }

    #[test]
    fn test_two_up_stacks_vertically() {
        let images = [solid_render(100, 100, RED), solid_render(100, 100, BLUE)];
        let page = render_page(
            &images,
            GridArity::Two,
            PaperSize::A4,
            PagePlacement::FitToCell,
        )
        .unwrap();

        assert_eq!(page.dimensions(), (2481, 3507));
        let grid = PageGrid::new(PaperSize::A4, GridArity::Two);
        let second = grid.cell(1);
        let (cx, cy) = (second.x + second.width / 2.0, second.y + second.height / 2.0);
        assert_eq!(page.get_pixel(cx as u32, cy as u32).0, BLUE);
    }

    #[test]
    fn test_images_beyond_arity_are_not_decoded() {
        let mut images: Vec<_> = (0..4).map(|_| solid_render(10, 10, RED)).collect();
        images.push(garbage_render());

        let result = render_page(
            &images,
            GridArity::Four,
            PaperSize::Letter,
            PagePlacement::FixedScale,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_decode_failure_aborts_page() {
        let images = [solid_render(10, 10, RED), garbage_render()];
        let result = pack_page(
            &images,
            GridArity::Four,
            PaperSize::Letter,
            PagePlacement::FixedScale,
        );
        assert!(matches!(result, Err(RenderError::Decode(_))));
    }

    #[test]
    fn test_empty_list_gives_blank_page() {
        let page = render_page(&[], GridArity::Eight, PaperSize::Letter, PagePlacement::FixedScale)
            .unwrap();
        assert!(page.pixels().all(|p| p.0 == WHITE));
    }

    #[test]
    fn test_pack_page_is_jpeg() {
        let images = [solid_render(20, 30, RED)];
        let page = pack_page(
            &images,
            GridArity::Two,
            PaperSize::Letter,
            PagePlacement::FixedScale,
        )
        .unwrap();

        assert_eq!(page.format(), ExportFormat::Jpeg);
        let decoded = image::load_from_memory(page.bytes()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2550, 3300));
    }
}
