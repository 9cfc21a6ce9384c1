/// Decides when a frame actually needs to be flushed to the terminal.
///
/// Terminal output is the expensive part of a frame, so a frame whose
/// fingerprint (camera snapshot + display size) matches the last one is
/// skipped, except for a periodic refresh.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    dirty: bool,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            dirty: true,
        }
    }

    /// Force the next call to render, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Decide whether to render a new frame.
    ///
    /// - First frame, or after [`invalidate`](Self::invalidate): render.
    /// - Fingerprint changed: render.
    /// - Otherwise render at most once per `refresh_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = self.dirty
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;
        if due {
            self.dirty = false;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }
}

/// Mix the display size into a camera fingerprint.
pub fn frame_fingerprint(camera: u64, display: (u32, u32)) -> u64 {
    let size = (u64::from(display.0) << 32) | u64::from(display.1);
    camera ^ size.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
