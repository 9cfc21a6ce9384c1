//! Text overlay drawn on top of the composited frame.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::CameraSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const HELP: &str = "wasd/zqsd move  up/down zoom  left/right speed  F11 fullscreen  esc quit";

#[derive(Debug, Clone, Copy)]
pub struct HudView {
    label: CellStyle,
    value: CellStyle,
}

impl Default for HudView {
    fn default() -> Self {
        Self {
            label: CellStyle {
                fg: Rgb::new(240, 240, 240),
                bg: Rgb::BLACK,
                bold: true,
            },
            value: CellStyle {
                fg: Rgb::new(200, 200, 200),
                bg: Rgb::BLACK,
                bold: false,
            },
        }
    }
}

impl HudView {
    /// Draw camera stats in the top-left corner.
    ///
    /// Formatting goes through fixed-capacity strings, so this does not
    /// allocate.
    pub fn draw(&self, fb: &mut FrameBuffer, snap: &CameraSnapshot) {
        if fb.width() < 16 || fb.height() < 3 {
            return;
        }

        let mut line: ArrayString<64> = ArrayString::new();

        let _ = write!(line, "{:.2}", snap.zoom);
        self.draw_field(fb, 0, "ZOOM ", &line);

        line.clear();
        let _ = write!(line, "{:.2}", snap.speed);
        self.draw_field(fb, 1, "SPEED ", &line);

        line.clear();
        let _ = write!(line, "{}x{}", snap.buffer_width, snap.buffer_height);
        self.draw_field(fb, 2, "BUFFER ", &line);

        if fb.height() > 4 {
            line.clear();
            let _ = write!(line, "{:.1}, {:.1}", snap.x, snap.y);
            self.draw_field(fb, 3, "CAMERA ", &line);
        }

        if fb.height() > 6 {
            let y = fb.height() - 1;
            fb.put_str(0, y, HELP, self.value);
        }
    }

    fn draw_field(&self, fb: &mut FrameBuffer, y: u16, label: &str, value: &str) {
        let x = fb.put_str(0, y, label, self.label);
        fb.put_str(x, y, value, self.value);
    }
}
