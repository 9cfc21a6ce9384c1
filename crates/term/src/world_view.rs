//! WorldView: draws the demo world into the camera's offscreen buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The world is a grid of panels centered on the origin. Every panel's world
//! position is floored before it goes through the viewport transform, and
//! drawing is nearest-neighbor, so all panels shift by the same whole-pixel
//! amount as the camera moves and nothing shimmers.

use glam::Vec2;

use crate::core::Viewport;
use crate::fb::Rgb;
use crate::pixels::PixelBuffer;

const BACKDROP: Rgb = Rgb::new(12, 12, 18);
const MARKER: Rgb = Rgb::new(255, 255, 255);

/// Base color per panel, row-major over a 3x3 grid.
const PALETTE: [Rgb; 9] = [
    Rgb::new(70, 110, 160),
    Rgb::new(90, 150, 110),
    Rgb::new(170, 120, 70),
    Rgb::new(140, 80, 140),
    Rgb::new(200, 180, 90),
    Rgb::new(80, 150, 160),
    Rgb::new(160, 70, 80),
    Rgb::new(110, 110, 180),
    Rgb::new(120, 160, 70),
];

pub struct WorldView {
    panel_w: u32,
    panel_h: u32,
    /// Panels extend `radius` panels out from the center one.
    radius: i32,
    tile: u32,
}

impl Default for WorldView {
    fn default() -> Self {
        // 16:9 panels, small enough that a terminal shows a few at once.
        Self {
            panel_w: 160,
            panel_h: 90,
            radius: 1,
            tile: 8,
        }
    }
}

impl WorldView {
    /// World-space top-left corner of panel `(gx, gy)`.
    pub fn panel_origin(&self, gx: i32, gy: i32) -> Vec2 {
        Vec2::new(
            gx as f32 * self.panel_w as f32,
            gy as f32 * self.panel_h as f32,
        )
    }

    /// Render the world as seen through `viewport` into `buf`.
    ///
    /// This is the allocation-free hot path.
    pub fn render_into(&self, viewport: &Viewport, buf: &mut PixelBuffer) {
        buf.clear(BACKDROP);

        for gy in -self.radius..=self.radius {
            for gx in -self.radius..=self.radius {
                let (x, y) = to_screen(viewport, self.panel_origin(gx, gy));
                let base = palette_for(gx, gy);
                self.draw_panel(buf, x, y, base);
            }
        }

        let (ox, oy) = to_screen(viewport, Vec2::ZERO);
        draw_crosshair(buf, ox, oy);
    }

    fn draw_panel(&self, buf: &mut PixelBuffer, x: i32, y: i32, base: Rgb) {
        let light = shade(base, 1.15);
        let dark = shade(base, 0.85);
        let edge = shade(base, 0.5);
        let (w, h, tile) = (self.panel_w, self.panel_h, self.tile);

        buf.fill_with(x, y, w, h, |rx, ry| {
            if rx == 0 || ry == 0 || rx + 1 == w || ry + 1 == h {
                edge
            } else if ((rx / tile) + (ry / tile)) % 2 == 0 {
                light
            } else {
                dark
            }
        });

        // Landmark block in the middle of each panel.
        let mark = tile * 2;
        let mx = x + ((w.saturating_sub(mark)) / 2) as i32;
        let my = y + ((h.saturating_sub(mark)) / 2) as i32;
        buf.fill_rect(mx, my, mark, mark, edge);
    }
}

/// Floor the world position, then translate and snap to a pixel.
#[inline]
fn to_screen(viewport: &Viewport, world: Vec2) -> (i32, i32) {
    let local = viewport.translate_to_local(world.floor());
    (local.x.floor() as i32, local.y.floor() as i32)
}

fn palette_for(gx: i32, gy: i32) -> Rgb {
    let idx = (gy.rem_euclid(3) * 3 + gx.rem_euclid(3)) as usize;
    PALETTE[idx]
}

fn shade(c: Rgb, k: f32) -> Rgb {
    let f = |v: u8| (f32::from(v) * k).round().clamp(0.0, 255.0) as u8;
    Rgb::new(f(c.r), f(c.g), f(c.b))
}

fn draw_crosshair(buf: &mut PixelBuffer, x: i32, y: i32) {
    for d in -3..=3 {
        buf.put(x + d, y, MARKER);
        buf.put(x, y + d, MARKER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_camera_snaps_to_whole_pixels() {
        let vp = Viewport::new(-10.4, -10.4, 64.0, 64.0);
        // floor(0) - (-10.4) = 10.4 -> pixel 10
        assert_eq!(to_screen(&vp, Vec2::ZERO), (10, 10));

        let vp = Viewport::new(-10.6, -10.6, 64.0, 64.0);
        assert_eq!(to_screen(&vp, Vec2::ZERO), (10, 10));
    }

    #[test]
    fn world_positions_are_floored_before_translation() {
        let vp = Viewport::new(0.0, 0.0, 64.0, 64.0);
        assert_eq!(to_screen(&vp, Vec2::new(5.9, 7.2)), (5, 7));
        assert_eq!(to_screen(&vp, Vec2::new(-0.5, -1.5)), (-1, -2));
    }

    #[test]
    fn palette_wraps_for_negative_panels() {
        assert_eq!(palette_for(-1, -1), PALETTE[8]);
        assert_eq!(palette_for(0, 0), PALETTE[0]);
        assert_eq!(palette_for(2, 0), PALETTE[2]);
    }
}
