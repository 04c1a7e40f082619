//! Bounded print queue.
//!
//! Renders are appended in the order they should appear on the page. The
//! queue only grows until it is cleared as a whole.

use thiserror::Error;

use crate::constants::PRINT_QUEUE_CAPACITY;
use crate::encode::RenderedImage;

/// The queue already holds [`PRINT_QUEUE_CAPACITY`] renders.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Print queue is full ({capacity} images)")]
pub struct QueueFull {
    pub capacity: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintQueue {
    images: Vec<RenderedImage>,
}

impl PrintQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a render, returning the new length.
    pub fn push(&mut self, image: RenderedImage) -> Result<usize, QueueFull> {
        if self.is_full() {
            return Err(QueueFull {
                capacity: PRINT_QUEUE_CAPACITY,
            });
        }
        self.images.push(image);
        Ok(self.images.len())
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.images.len() >= PRINT_QUEUE_CAPACITY
    }

    pub fn as_slice(&self) -> &[RenderedImage] {
        &self.images
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderedImage> {
        self.images.iter()
    }
}
