//! Source rotation into an expanded, transparent bounding box.
//!
//! The crop tool rotates the photo with CSS, so positive angles turn the
//! image clockwise on screen and the reported crop rectangle lives in the
//! coordinate space of the rotated image's bounding box. This module
//! reproduces that space so the crop rectangle can be sampled directly.
//!
//! # Algorithm
//!
//! Inverse mapping with bilinear interpolation: for each output pixel
//! centre we rotate back into the source and blend the four nearest texels.
//! Texels outside the source count as fully transparent, which gives the
//! rotated edges a smooth alpha falloff. Blending happens on premultiplied
//! values so transparent texels do not darken the edge colour.

use image::{Rgba, RgbaImage};

use crate::decode::SourceImage;

/// Below this many degrees the rotation is treated as zero.
const ANGLE_EPSILON: f64 = 0.001;

/// Size of the bounding box that holds a `width` x `height` image rotated by
/// `angle_degrees`.
///
/// # Example
///
/// ```
/// use polaroid_core::transform::compute_rotated_bounds;
///
/// assert_eq!(compute_rotated_bounds(100, 50, 90.0), (50, 100));
/// assert_eq!(compute_rotated_bounds(100, 50, 0.0), (100, 50));
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let abs_angle = (angle_degrees % 360.0).abs();

    if abs_angle < ANGLE_EPSILON
        || (abs_angle - 180.0).abs() < ANGLE_EPSILON
        || (360.0 - abs_angle) < ANGLE_EPSILON
    {
        return (width, height);
    }
    if (abs_angle - 90.0).abs() < ANGLE_EPSILON || (abs_angle - 270.0).abs() < ANGLE_EPSILON {
        return (height, width);
    }

    let rad = angle_degrees.to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
    let (w, h) = (width as f64, height as f64);

    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;
    (new_w.max(1), new_h.max(1))
}

/// Rotate a source image clockwise by `angle_degrees` about its centre.
///
/// The output canvas grows to the rotated bounding box; uncovered corners
/// are transparent.
pub fn rotate_source(image: &SourceImage, angle_degrees: f64) -> SourceImage {
    if angle_degrees.abs() < ANGLE_EPSILON || image.is_empty() {
        return image.clone();
    }

    let src = image.as_rgba();
    let (src_w, src_h) = src.dimensions();
    let (dst_w, dst_h) = compute_rotated_bounds(src_w, src_h, angle_degrees);

    let rad = angle_degrees.to_radians();
    let (sin, cos) = (rad.sin(), rad.cos());
    let (src_cx, src_cy) = (src_w as f64 / 2.0, src_h as f64 / 2.0);
    let (dst_cx, dst_cy) = (dst_w as f64 / 2.0, dst_h as f64 / 2.0);

    let output = RgbaImage::from_fn(dst_w, dst_h, |x, y| {
        let dx = x as f64 + 0.5 - dst_cx;
        let dy = y as f64 + 0.5 - dst_cy;

        // Inverse of a clockwise turn in y-down coordinates.
        let sx = dx * cos + dy * sin + src_cx;
        let sy = -dx * sin + dy * cos + src_cy;

        sample_bilinear(src, sx - 0.5, sy - 0.5)
    });

    SourceImage::from_rgba(output)
}

/// Premultiplied texel, or transparent when outside the image.
#[inline]
fn texel(image: &RgbaImage, x: i64, y: i64) -> [f64; 4] {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return [0.0; 4];
    }
    let [r, g, b, a] = image.get_pixel(x as u32, y as u32).0;
    let alpha = a as f64 / 255.0;
    [r as f64 * alpha, g as f64 * alpha, b as f64 * alpha, a as f64]
}

/// Bilinear sample at texel coordinates (texel centres on integers).
fn sample_bilinear(image: &RgbaImage, x: f64, y: f64) -> Rgba<u8> {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let p00 = texel(image, x0, y0);
    let p10 = texel(image, x0 + 1, y0);
    let p01 = texel(image, x0, y0 + 1);
    let p11 = texel(image, x0 + 1, y0 + 1);

    let mut acc = [0.0f64; 4];
    for i in 0..4 {
        acc[i] = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
    }

    let alpha = acc[3];
    if alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let unpremultiply = 255.0 / alpha;
    Rgba([
        (acc[0] * unpremultiply).clamp(0.0, 255.0).round() as u8,
        (acc[1] * unpremultiply).clamp(0.0, 255.0).round() as u8,
        (acc[2] * unpremultiply).clamp(0.0, 255.0).round() as u8,
        alpha.clamp(0.0, 255.0).round() as u8,
    ])
}


// ============================================================================
// Property-Based Tests
// ============================================================================
