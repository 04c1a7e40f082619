//! Drawing a crop region of one image into a rectangle of another.
//!
//! This is the engine's equivalent of the 2D canvas nine-argument
//! `drawImage`: a source rectangle (in source pixels) is scaled onto a
//! destination rectangle (in canvas pixels) and alpha-blended over what is
//! already there.
//!
//! # Out-of-bounds regions
//!
//! Crop rectangles are not required to lie inside the source. Only the part
//! that overlaps the source is drawn, at the position it would have had in
//! the full mapping; the rest of the destination is left untouched, which on
//! a freshly filled canvas means it stays white.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::settings::PixelRect;

/// Scale `src` (a region of `source`) onto `dst` (a region of `canvas`).
///
/// Destination coordinates are rounded to whole pixels; the scaled region is
/// clipped to `dst` and to the canvas edges.
pub fn draw_region(canvas: &mut RgbaImage, source: &RgbaImage, src: PixelRect, dst: PixelRect) {
    if src.is_empty() || dst.is_empty() {
        return;
    }

    let (src_w, src_h) = source.dimensions();
    let bounds = PixelRect::new(0.0, 0.0, src_w as f64, src_h as f64);
    let Some(visible) = src.intersect(&bounds) else {
        return;
    };

    // Snap the visible region outwards to whole source pixels.
    let left = visible.x.floor().max(0.0) as u32;
    let top = visible.y.floor().max(0.0) as u32;
    let right = (visible.right().ceil() as u32).min(src_w);
    let bottom = (visible.bottom().ceil() as u32).min(src_h);
    if right <= left || bottom <= top {
        return;
    }
    let region = imageops::crop_imm(source, left, top, right - left, bottom - top).to_image();

    // Map the snapped region with the same scale, so partial edge pixels
    // land just outside `dst` instead of squeezing the rest.
    let scale_x = dst.width / src.width;
    let scale_y = dst.height / src.height;
    let target = PixelRect::new(
        dst.x + (left as f64 - src.x) * scale_x,
        dst.y + (top as f64 - src.y) * scale_y,
        (right - left) as f64 * scale_x,
        (bottom - top) as f64 * scale_y,
    );

    let out_w = target.width.round().max(1.0) as u32;
    let out_h = target.height.round().max(1.0) as u32;
    let scaled = if region.dimensions() == (out_w, out_h) {
        region
    } else {
        imageops::resize(&region, out_w, out_h, FilterType::Triangle)
    };

    let origin_x = target.x.round() as i64;
    let origin_y = target.y.round() as i64;
    let (canvas_w, canvas_h) = canvas.dimensions();
    let clip_left = (dst.x.round() as i64).max(origin_x).max(0);
    let clip_top = (dst.y.round() as i64).max(origin_y).max(0);
    let clip_right = (dst.right().round() as i64)
        .min(origin_x + out_w as i64)
        .min(canvas_w as i64);
    let clip_bottom = (dst.bottom().round() as i64)
        .min(origin_y + out_h as i64)
        .min(canvas_h as i64);
    if clip_right <= clip_left || clip_bottom <= clip_top {
        return;
    }

    let clipped = imageops::crop_imm(
        &scaled,
        (clip_left - origin_x) as u32,
        (clip_top - origin_y) as u32,
        (clip_right - clip_left) as u32,
        (clip_bottom - clip_top) as u32,
    )
    .to_image();
    imageops::overlay(canvas, &clipped, clip_left, clip_top);
}
