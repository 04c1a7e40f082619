//! Geometric operations on source images.
//!
//! # Transform Order
//!
//! At export time transforms are applied in this order:
//! 1. Rotation into the expanded bounding box, only for rotated crop space
//! 2. Crop region scaled onto the frame's photo rectangle
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise on screen
//! - Crop rectangles are in pixels of the upright source, or of the rotated
//!   bounding box when the export asks for rotated crop space
//! - Origin is the top-left corner, y grows downwards

mod crop;
mod rotation;

pub use crop::draw_region;
pub use rotation::{compute_rotated_bounds, rotate_source};
