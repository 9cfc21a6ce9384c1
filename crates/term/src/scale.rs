//! Presentation: upscale the offscreen buffer onto the display.
//!
//! The terminal display is measured in half-block pixels: each cell shows
//! two vertically stacked pixels using `▀` with the upper pixel as the
//! foreground color and the lower pixel as the background color.

use std::convert::Infallible;

use crate::core::Presenter;
use crate::fb::{Cell, FrameBuffer, Rgb};
use crate::pixels::PixelBuffer;

/// Sampling filter used when compositing onto the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    Nearest,
    #[default]
    Bilinear,
}

/// Upscale `src` by `scale` into `dst`, which keeps its own size.
///
/// Display pixel `d` samples the buffer at `(d + 0.5) / scale - 0.5`, so
/// pixel centers line up and an integer scale with `Nearest` reproduces
/// each buffer pixel as an exact `scale x scale` block. Reads past the
/// buffer edge clamp to the edge.
pub fn upscale_into(src: &PixelBuffer, scale: f32, filter: Filter, dst: &mut PixelBuffer) {
    if src.width() == 0 || src.height() == 0 || scale.is_nan() || scale <= 0.0 {
        dst.clear(Rgb::BLACK);
        return;
    }

    let inv = 1.0 / scale;
    let (dw, dh) = (dst.width() as usize, dst.height() as usize);
    let out = dst.pixels_mut();
    for dy in 0..dh {
        let v = (dy as f32 + 0.5) * inv - 0.5;
        let row = &mut out[dy * dw..(dy + 1) * dw];
        for (dx, px) in row.iter_mut().enumerate() {
            let u = (dx as f32 + 0.5) * inv - 0.5;
            *px = match filter {
                Filter::Nearest => {
                    src.get_clamped((u + 0.5).floor() as i32, (v + 0.5).floor() as i32)
                }
                Filter::Bilinear => sample_bilinear(src, u, v),
            };
        }
    }
}

fn sample_bilinear(src: &PixelBuffer, u: f32, v: f32) -> Rgb {
    let x0 = u.floor();
    let y0 = v.floor();
    let fx = u - x0;
    let fy = v - y0;
    let (x0, y0) = (x0 as i32, y0 as i32);

    let top = lerp_rgb(src.get_clamped(x0, y0), src.get_clamped(x0 + 1, y0), fx);
    let bottom = lerp_rgb(src.get_clamped(x0, y0 + 1), src.get_clamped(x0 + 1, y0 + 1), fx);
    to_rgb(lerp3(top, bottom, fy))
}

#[inline(always)]
fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> [f32; 3] {
    [
        lerp(f32::from(a.r), f32::from(b.r), t),
        lerp(f32::from(a.g), f32::from(b.g), t),
        lerp(f32::from(a.b), f32::from(b.b), t),
    ]
}

#[inline(always)]
fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline(always)]
fn to_rgb(c: [f32; 3]) -> Rgb {
    Rgb::new(
        c[0].round().clamp(0.0, 255.0) as u8,
        c[1].round().clamp(0.0, 255.0) as u8,
        c[2].round().clamp(0.0, 255.0) as u8,
    )
}

/// Pack display pixels into half-block cells.
///
/// The framebuffer is resized to `width x ceil(height / 2)`; an odd last
/// pixel row gets a black lower half.
pub fn compose_half_blocks(src: &PixelBuffer, fb: &mut FrameBuffer) {
    let cols = src.width().min(u32::from(u16::MAX)) as u16;
    let rows = src.height().div_ceil(2).min(u32::from(u16::MAX)) as u16;
    fb.resize(cols, rows);

    for row in 0..rows {
        let upper_y = i32::from(row) * 2;
        for col in 0..cols {
            let x = i32::from(col);
            let fg = src.get(x, upper_y).unwrap_or(Rgb::BLACK);
            let bg = src.get(x, upper_y + 1).unwrap_or(Rgb::BLACK);
            fb.set(col, row, Cell::half_block(fg, bg));
        }
    }
}

/// Presenter that turns the offscreen buffer into a terminal frame.
///
/// It does no I/O: the composed frame is read back with
/// [`frame_mut`](Self::frame_mut) and flushed by a
/// [`TerminalRenderer`](crate::renderer::TerminalRenderer).
#[derive(Debug, Clone)]
pub struct FrameComposer {
    filter: Filter,
    scaled: PixelBuffer,
    frame: FrameBuffer,
}

impl FrameComposer {
    pub fn new(display: (u32, u32), filter: Filter) -> Self {
        Self {
            filter,
            scaled: PixelBuffer::new(display.0, display.1),
            frame: FrameBuffer::new(0, 0),
        }
    }

    pub fn display_size(&self) -> (u32, u32) {
        (self.scaled.width(), self.scaled.height())
    }

    /// Track the display size; takes effect on the next present.
    pub fn set_display_size(&mut self, display: (u32, u32)) {
        self.scaled.resize(display.0, display.1);
    }

    /// The display-resolution pixels from the last present.
    pub fn scaled(&self) -> &PixelBuffer {
        &self.scaled
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }
}

impl Presenter<PixelBuffer> for FrameComposer {
    type Error = Infallible;

    fn present(&mut self, buffer: &PixelBuffer, display_scale: f32) -> Result<(), Infallible> {
        upscale_into(buffer, display_scale, self.filter, &mut self.scaled);
        compose_half_blocks(&self.scaled, &mut self.frame);
        Ok(())
    }
}
