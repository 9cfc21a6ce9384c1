//! PixelBuffer: the camera's offscreen render target.
//!
//! All drawing into it is nearest-neighbor: integer pixel coordinates, no
//! blending. Smoothing only happens when the buffer is upscaled onto the
//! display (see [`crate::scale`]).

use thiserror::Error;

use crate::core::{BufferFactory, OffscreenBuffer};
use crate::fb::Rgb;

/// Fixed-size RGB pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; (width as usize) * (height as usize)],
        }
    }

    /// Allocate without aborting on allocation failure.
    pub fn try_new(width: u32, height: u32) -> Result<Self, PixelAllocError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(PixelAllocError::TooLarge { width, height })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| PixelAllocError::OutOfMemory { width, height })?;
        pixels.resize(len, Rgb::BLACK);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Resize in place, reusing the allocation when possible.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize((width as usize) * (height as usize), Rgb::BLACK);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Edge-clamped read; callers guarantee the buffer is non-empty.
    #[inline(always)]
    pub(crate) fn get_clamped(&self, x: i32, y: i32) -> Rgb {
        let cx = x.clamp(0, self.width as i32 - 1) as usize;
        let cy = y.clamp(0, self.height as i32 - 1) as usize;
        self.pixels[cy * (self.width as usize) + cx]
    }

    pub fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        self.fill_with(x, y, w, h, |_, _| color);
    }

    /// Fill a clipped rectangle with a per-pixel color.
    ///
    /// `shade` receives coordinates relative to the rectangle's top-left,
    /// so patterns stay anchored to the rectangle when it is partially
    /// off-screen.
    pub fn fill_with(&mut self, x: i32, y: i32, w: u32, h: u32, mut shade: impl FnMut(u32, u32) -> Rgb) {
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(w)).min(i64::from(self.width));
        let y1 = (i64::from(y) + i64::from(h)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        for py in y0..y1 {
            let row = (py as usize) * stride;
            let ry = (py - i64::from(y)) as u32;
            for px in x0..x1 {
                let rx = (px - i64::from(x)) as u32;
                self.pixels[row + px as usize] = shade(rx, ry);
            }
        }
    }
}

impl OffscreenBuffer for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Debug, Error)]
pub enum PixelAllocError {
    #[error("{width}x{height} exceeds the pixel budget of {budget}")]
    OverBudget { width: u32, height: u32, budget: usize },
    #[error("{width}x{height} overflows the address space")]
    TooLarge { width: u32, height: u32 },
    #[error("out of memory allocating {width}x{height}")]
    OutOfMemory { width: u32, height: u32 },
}

/// Allocates [`PixelBuffer`]s up to a pixel budget.
#[derive(Debug, Clone)]
pub struct PixelBufferFactory {
    max_pixels: usize,
    allocations: u64,
}

impl PixelBufferFactory {
    /// Budget large enough for an 8K display at the lowest sane zoom.
    pub const DEFAULT_MAX_PIXELS: usize = 64 * 1024 * 1024;

    pub fn new() -> Self {
        Self::with_max_pixels(Self::DEFAULT_MAX_PIXELS)
    }

    pub fn with_max_pixels(max_pixels: usize) -> Self {
        Self {
            max_pixels,
            allocations: 0,
        }
    }

    /// Number of buffers handed out so far.
    pub fn allocations(&self) -> u64 {
        self.allocations
    }
}

impl Default for PixelBufferFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferFactory for PixelBufferFactory {
    type Buffer = PixelBuffer;
    type Error = PixelAllocError;

    fn allocate(&mut self, width: u32, height: u32) -> Result<PixelBuffer, PixelAllocError> {
        let len = (width as usize).saturating_mul(height as usize);
        if len > self.max_pixels {
            return Err(PixelAllocError::OverBudget {
                width,
                height,
                budget: self.max_pixels,
            });
        }
        let buffer = PixelBuffer::try_new(width, height)?;
        self.allocations += 1;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn fill_rect_clips_negative_origin() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(-2, -2, 3, 3, RED);
        assert_eq!(buf.get(0, 0), Some(RED));
        assert_eq!(buf.get(1, 0), Some(Rgb::BLACK));
        assert_eq!(buf.get(0, 1), Some(Rgb::BLACK));
    }

    #[test]
    fn fill_with_passes_rect_relative_coords() {
        let mut buf = PixelBuffer::new(4, 1);
        buf.fill_with(-1, 0, 4, 1, |rx, _| Rgb::new(rx as u8, 0, 0));
        // Pixel 0 is rect column 1.
        assert_eq!(buf.get(0, 0), Some(Rgb::new(1, 0, 0)));
        assert_eq!(buf.get(2, 0), Some(Rgb::new(3, 0, 0)));
        assert_eq!(buf.get(3, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn factory_rejects_over_budget() {
        let mut factory = PixelBufferFactory::with_max_pixels(100);
        assert!(factory.allocate(10, 10).is_ok());
        let err = factory.allocate(12, 10).unwrap_err();
        assert!(matches!(err, PixelAllocError::OverBudget { .. }));
        assert_eq!(factory.allocations(), 1);
    }
}
