//! The terminal as a display surface.
//!
//! One terminal cell is one pixel wide and two pixels tall (half blocks),
//! so a `cols x rows` terminal is a `cols x (rows * 2)` display.

use std::io::{self, Write};

use crossterm::{terminal, QueueableCommand};
use tracing::{debug, warn};

use crate::core::{DisplayResized, DisplaySurface};

/// Display pixels per terminal row.
pub const PIXELS_PER_ROW: u32 = 2;

/// Convert a terminal size in cells to display pixels.
pub fn cells_to_pixels(cols: u16, rows: u16) -> (u32, u32) {
    (u32::from(cols), u32::from(rows) * PIXELS_PER_ROW)
}

/// Convert display pixels to the smallest terminal size that holds them.
pub fn pixels_to_cells(width: u32, height: u32) -> (u16, u16) {
    let cols = width.min(u32::from(u16::MAX)) as u16;
    let rows = height.div_ceil(PIXELS_PER_ROW).min(u32::from(u16::MAX)) as u16;
    (cols, rows)
}

/// Terminal-backed [`DisplaySurface`].
///
/// The cached size is refreshed from crossterm resize events via
/// [`handle_resize`](Self::handle_resize). A terminal has no real
/// fullscreen mode; the flag is tracked so the host can change what it
/// draws (the HUD is hidden in fullscreen).
pub struct TerminalDisplay<W: Write = io::Stdout> {
    out: W,
    cols: u16,
    rows: u16,
    fullscreen: bool,
}

impl TerminalDisplay<io::Stdout> {
    /// Attach to stdout and read the current terminal size.
    pub fn stdout() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::with_writer(io::stdout(), cols, rows))
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn with_writer(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            cols,
            rows,
            fullscreen: false,
        }
    }

    /// Terminal size in cells.
    pub fn cells(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Record a resize reported by the terminal.
    pub fn handle_resize(&mut self, cols: u16, rows: u16) -> DisplayResized {
        self.cols = cols;
        self.rows = rows;
        let (width, height) = cells_to_pixels(cols, rows);
        DisplayResized { width, height }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn send_set_size(&mut self, cols: u16, rows: u16) -> io::Result<()> {
        self.out.queue(terminal::SetSize(cols, rows))?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySurface for TerminalDisplay<W> {
    fn display_size(&self) -> (u32, u32) {
        cells_to_pixels(self.cols, self.rows)
    }

    /// Terminals resize asynchronously: the new size arrives later as a
    /// resize event, so only a fullscreen flag flip completes in-call.
    /// Requests never shrink the terminal on either axis.
    fn request_display_size(
        &mut self,
        width: u32,
        height: u32,
        fullscreen: bool,
    ) -> Option<DisplayResized> {
        if fullscreen != self.fullscreen {
            debug!(fullscreen, "terminal fullscreen flag changed");
            self.fullscreen = fullscreen;
            if fullscreen {
                // The terminal window already is the whole display.
                let (width, height) = self.display_size();
                return Some(DisplayResized { width, height });
            }
        }

        // Grow only: a user's terminal is never shrunk under them.
        let (cols, rows) = pixels_to_cells(width, height);
        let (cols, rows) = (cols.max(self.cols), rows.max(self.rows));
        if (cols, rows) == (self.cols, self.rows) {
            return None;
        }
        debug!(cols, rows, "requesting terminal size");
        if let Err(err) = self.send_set_size(cols, rows) {
            warn!(%err, cols, rows, "terminal refused resize request");
        }
        None
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_pixel_conversion_round_trips_even_heights() {
        assert_eq!(cells_to_pixels(80, 24), (80, 48));
        assert_eq!(pixels_to_cells(80, 48), (80, 24));
        assert_eq!(pixels_to_cells(80, 47), (80, 24));
    }

    #[test]
    fn request_writes_set_size_sequence() {
        let mut display = TerminalDisplay::with_writer(Vec::new(), 40, 10);
        let event = display.request_display_size(80, 48, false);
        assert_eq!(event, None);

        let written = String::from_utf8(display.writer().clone()).unwrap();
        // CSI 8 ; rows ; cols t
        assert!(written.contains("\x1b[8;24;80t"), "got {written:?}");
        // Size is only updated once the terminal reports it.
        assert_eq!(display.display_size(), (40, 20));
    }

    #[test]
    fn request_never_shrinks_terminal() {
        let mut display = TerminalDisplay::with_writer(Vec::new(), 200, 10);
        assert_eq!(display.request_display_size(80, 48, false), None);
        let written = String::from_utf8(display.writer().clone()).unwrap();
        assert!(written.contains("\x1b[8;24;200t"), "got {written:?}");

        let mut large = TerminalDisplay::with_writer(Vec::new(), 200, 60);
        assert_eq!(large.request_display_size(80, 48, false), None);
        assert!(large.writer().is_empty());
    }

    #[test]
    fn fullscreen_flip_reports_synchronously() {
        let mut display = TerminalDisplay::with_writer(Vec::new(), 100, 30);
        let event = display.request_display_size(80, 48, true);
        assert_eq!(
            event,
            Some(DisplayResized {
                width: 100,
                height: 60
            })
        );
        assert!(display.is_fullscreen());
        assert!(display.writer().is_empty());
    }

    #[test]
    fn handle_resize_updates_cached_size() {
        let mut display = TerminalDisplay::with_writer(Vec::new(), 80, 24);
        let event = display.handle_resize(120, 40);
        assert_eq!((event.width, event.height), (120, 80));
        assert_eq!(display.display_size(), (120, 80));
    }
}
