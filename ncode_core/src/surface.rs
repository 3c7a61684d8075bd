//! The drawing target seen by the renderer.
//!
//! Everything the core draws goes through [`PixelSurface::set_pixel`].
//! Buffering, clipping, colour and flushing belong to the implementor.

use std::collections::BTreeSet;

/// A monochrome surface that can light one pixel at a time.
pub trait PixelSurface {
    /// Light the pixel at `(x, y)`. Coordinates may be negative or past
    /// the surface edge; implementors clip.
    fn set_pixel(&mut self, x: i32, y: i32);
}

impl<S: PixelSurface + ?Sized> PixelSurface for &mut S {
    fn set_pixel(&mut self, x: i32, y: i32) {
        (**self).set_pixel(x, y);
    }
}

/// Unbounded surface that records every lit pixel.
///
/// Used for headless tests and for measuring the ink extent of a draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelRecorder {
    pixels: BTreeSet<(i32, i32)>,
}

impl PixelRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lit pixels in `(x, y)` order.
    pub fn pixels(&self) -> &BTreeSet<(i32, i32)> {
        &self.pixels
    }

    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.pixels.contains(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Inclusive `(min_x, min_y, max_x, max_y)` of the lit pixels.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let mut iter = self.pixels.iter();
        let &(x, y) = iter.next()?;
        Some(iter.fold((x, y, x, y), |(x0, y0, x1, y1), &(x, y)| {
            (x0.min(x), y0.min(y), x1.max(x), y1.max(y))
        }))
    }

    pub fn clear(&mut self) {
        self.pixels.clear();
    }
}

impl PixelSurface for PixelRecorder {
    fn set_pixel(&mut self, x: i32, y: i32) {
        self.pixels.insert((x, y));
    }
}
