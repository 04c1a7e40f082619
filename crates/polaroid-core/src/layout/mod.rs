//! Geometry for single prints and multi-up print pages.

mod frame;
mod page;

pub use frame::{
    caption_font_size, caption_line_centers, caption_max_line_width, FrameGeometry, FrameLayout,
};
pub use page::{GridArity, PageGrid, PagePlacement, PaperSize};
