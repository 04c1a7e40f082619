//! Print page grid: paper sizes, grid arities and cell placement.

use serde::{Deserialize, Serialize};

use crate::constants::{inches_to_px, DPI, PAGE_IMAGE_SCALE, PAGE_MARGIN_INCHES};
use crate::settings::PixelRect;

// =============================================================================
// Paper
// =============================================================================

/// Paper the multi-up page is printed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// US Letter, 8.5 x 11 in.
    #[default]
    Letter,
    /// ISO A4, 8.27 x 11.69 in.
    A4,
}

impl PaperSize {
    /// Physical size as (width, height) in inches.
    pub fn inches(self) -> (f64, f64) {
        match self {
            PaperSize::Letter => (8.5, 11.0),
            PaperSize::A4 => (8.27, 11.69),
        }
    }

    /// Page canvas size in pixels at print resolution.
    pub fn pixel_size(self) -> (u32, u32) {
        let (w, h) = self.inches();
        (inches_to_px(w), inches_to_px(h))
    }
}

impl std::str::FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "letter" => Ok(PaperSize::Letter),
            "a4" => Ok(PaperSize::A4),
            other => Err(format!("Unknown paper size: {other}")),
        }
    }
}

// =============================================================================
// Grid
// =============================================================================

/// Number of prints per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridArity {
    Two,
    #[default]
    Four,
    Eight,
}

impl GridArity {
    pub fn count(self) -> usize {
        match self {
            GridArity::Two => 2,
            GridArity::Four => 4,
            GridArity::Eight => 8,
        }
    }

    /// Grid dimensions as (columns, rows).
    pub fn grid_dimensions(self) -> (u32, u32) {
        match self {
            GridArity::Two => (1, 2),
            GridArity::Four => (2, 2),
            GridArity::Eight => (2, 4),
        }
    }
}

impl TryFrom<u8> for GridArity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(GridArity::Two),
            4 => Ok(GridArity::Four),
            8 => Ok(GridArity::Eight),
            other => Err(format!("Unsupported grid arity: {other} (expected 2, 4 or 8)")),
        }
    }
}

impl From<GridArity> for u8 {
    fn from(arity: GridArity) -> Self {
        arity.count() as u8
    }
}

/// How each render is sized inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PagePlacement {
    /// Drawn at a fixed fraction of its native size, centred. May overflow
    /// the cell.
    #[default]
    FixedScale,
    /// Scaled uniformly to the largest size that fits the cell, centred.
    FitToCell,
}

/// Resolved grid for one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGrid {
    pub page_width: u32,
    pub page_height: u32,
    pub cols: u32,
    pub rows: u32,
    pub margin: f64,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl PageGrid {
    pub fn new(paper: PaperSize, arity: GridArity) -> Self {
        let (page_width, page_height) = paper.pixel_size();
        let (cols, rows) = arity.grid_dimensions();
        let margin = PAGE_MARGIN_INCHES * DPI;

        let usable_w = page_width as f64 - 2.0 * margin;
        let usable_h = page_height as f64 - 2.0 * margin;

        Self {
            page_width,
            page_height,
            cols,
            rows,
            margin,
            cell_width: usable_w / cols as f64,
            cell_height: usable_h / rows as f64,
        }
    }

    /// Bounds of the `index`th cell in row-major order.
    pub fn cell(&self, index: usize) -> PixelRect {
        let cols = self.cols as usize;
        let (row, col) = (index / cols, index % cols);
        PixelRect::new(
            self.margin + col as f64 * self.cell_width,
            self.margin + row as f64 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Where an image of the given native size lands in cell `index`.
    pub fn place(
        &self,
        index: usize,
        image_width: u32,
        image_height: u32,
        placement: PagePlacement,
    ) -> PixelRect {
        let cell = self.cell(index);
        let (w, h) = (image_width as f64, image_height as f64);
        let scale = match placement {
            PagePlacement::FixedScale => PAGE_IMAGE_SCALE,
            PagePlacement::FitToCell => (cell.width / w).min(cell.height / h),
        };
        let (dw, dh) = (w * scale, h * scale);
        PixelRect::new(
            cell.x + (cell.width - dw) / 2.0,
            cell.y + (cell.height - dh) / 2.0,
            dw,
            dh,
        )
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
