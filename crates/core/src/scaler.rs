//! ScreenScaler - zoom and render-resolution reconciliation
//!
//! The scene is drawn into an offscreen buffer whose resolution is the
//! display size divided by the zoom, then composited onto the display at
//! the zoom factor. Whenever the zoom or display size changes the buffer is
//! rebuilt and the viewport resized, keeping its world-space center fixed so
//! the camera never visibly jumps.

use glam::Vec2;
use tracing::{debug, info, trace, warn};

use crate::config::CameraConfig;
use crate::error::ScalerError;
use crate::surface::{BufferFactory, DisplayResized, DisplaySurface, OffscreenBuffer, Presenter};
use crate::viewport::Viewport;

/// Smallest buffer edge the scaler will ever allocate.
const MIN_BUFFER_EDGE: u32 = 2;

/// Re-entrancy guard for the display-resize handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing,
}

/// What a call to [`ScreenScaler::on_display_resized`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// A resize was already being handled; this call was ignored.
    Suppressed,
    /// The buffer was recomputed for `display`.
    Applied {
        display: (u32, u32),
        /// Whether the surface had to be forced up to the minimum size.
        min_enforced: bool,
    },
}

/// Buffer resolution for a display size and zoom.
///
/// Each axis is `ceil(display / zoom)` rounded up to the next even number,
/// so the upscaled buffer always covers the whole display and the scale
/// filter never samples an odd edge.
pub fn buffer_size_for(display: (u32, u32), zoom: f32) -> (u32, u32) {
    (buffer_edge(display.0, zoom), buffer_edge(display.1, zoom))
}

fn buffer_edge(display: u32, zoom: f32) -> u32 {
    let scaled = (f64::from(display) / f64::from(zoom)).ceil();
    // Saturating float->int cast; the display is never anywhere near u32::MAX.
    let edge = scaled as u32;
    round_up_even(edge).max(MIN_BUFFER_EDGE)
}

#[inline]
fn round_up_even(n: u32) -> u32 {
    n.saturating_add(n & 1)
}

/// Owns the zoom level and the offscreen buffer.
pub struct ScreenScaler<F: BufferFactory> {
    factory: F,
    buffer: Option<F::Buffer>,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    min_display: (u32, u32),
    buffer_width: u32,
    buffer_height: u32,
    resize_state: ResizeState,
}

impl<F: BufferFactory> ScreenScaler<F> {
    /// Create a scaler at the config's default zoom.
    ///
    /// No buffer exists until the first [`recompute`](Self::recompute).
    pub fn new(factory: F, config: &CameraConfig) -> Self {
        Self {
            factory,
            buffer: None,
            zoom: config.clamp_zoom(config.default_zoom),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            min_display: config.min_display_size(),
            buffer_width: 0,
            buffer_height: 0,
            resize_state: ResizeState::Idle,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn buffer_size(&self) -> (u32, u32) {
        (self.buffer_width, self.buffer_height)
    }

    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn resize_state(&self) -> ResizeState {
        self.resize_state
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Set the zoom, clamped into range.
    ///
    /// Recomputes the buffer only when the clamped value differs from the
    /// current one. Non-finite values are ignored. Returns whether the zoom
    /// changed.
    pub fn set_zoom(
        &mut self,
        value: f32,
        viewport: &mut Viewport,
        display: (u32, u32),
    ) -> Result<bool, ScalerError> {
        if !value.is_finite() {
            warn!(value, "ignoring non-finite zoom");
            return Ok(false);
        }
        let clamped = value.clamp(self.min_zoom, self.max_zoom);
        if clamped == self.zoom {
            return Ok(false);
        }
        info!(from = self.zoom, to = clamped, "zoom changed");
        self.zoom = clamped;
        self.recompute(viewport, display)?;
        Ok(true)
    }

    /// Handle a display-resize notification.
    ///
    /// Forces the surface back up to the minimum size on any axis that fell
    /// below it, then recomputes the buffer. Resize notifications that
    /// arrive while this is running (including the one caused by enforcing
    /// the minimum) are suppressed.
    pub fn on_display_resized<S>(
        &mut self,
        viewport: &mut Viewport,
        surface: &mut S,
    ) -> Result<ResizeOutcome, ScalerError>
    where
        S: DisplaySurface + ?Sized,
    {
        if self.resize_state == ResizeState::Resizing {
            trace!("suppressed re-entrant display resize");
            return Ok(ResizeOutcome::Suppressed);
        }

        self.resize_state = ResizeState::Resizing;
        let result = self.apply_display_resize(viewport, surface);
        self.resize_state = ResizeState::Idle;
        result
    }

    fn apply_display_resize<S>(
        &mut self,
        viewport: &mut Viewport,
        surface: &mut S,
    ) -> Result<ResizeOutcome, ScalerError>
    where
        S: DisplaySurface + ?Sized,
    {
        let (width, height) = surface.display_size();
        let (min_w, min_h) = self.min_display;
        let target = (width.max(min_w), height.max(min_h));
        let min_enforced = target != (width, height);

        if min_enforced {
            warn!(
                width,
                height,
                min_width = min_w,
                min_height = min_h,
                "display below minimum size, enforcing minimum"
            );
            let fullscreen = surface.is_fullscreen();
            if let Some(event) = surface.request_display_size(target.0, target.1, fullscreen) {
                self.dispatch(event, viewport, surface)?;
            }
        }

        let display = surface.display_size();
        self.recompute(viewport, display)?;
        Ok(ResizeOutcome::Applied {
            display,
            min_enforced,
        })
    }

    /// Route a synchronous surface notification back through the handler.
    fn dispatch<S>(
        &mut self,
        event: DisplayResized,
        viewport: &mut Viewport,
        surface: &mut S,
    ) -> Result<ResizeOutcome, ScalerError>
    where
        S: DisplaySurface + ?Sized,
    {
        trace!(width = event.width, height = event.height, "surface resized synchronously");
        self.on_display_resized(viewport, surface)
    }

    /// Rebuild the offscreen buffer for `display` at the current zoom.
    ///
    /// The viewport takes the buffer's size and is re-centered on the world
    /// point it was centered on before the call. On allocation failure the
    /// scaler is left without a buffer and the error is returned.
    pub fn recompute(
        &mut self,
        viewport: &mut Viewport,
        display: (u32, u32),
    ) -> Result<(), ScalerError> {
        let previous_center = viewport.center();
        let (width, height) = buffer_size_for(display, self.zoom);

        // Release the old target before asking for a new one.
        self.buffer = None;
        self.buffer_width = 0;
        self.buffer_height = 0;
        let buffer = self
            .factory
            .allocate(width, height)
            .map_err(|source| ScalerError::BufferAllocation {
                width,
                height,
                source: Box::new(source),
            })?;
        debug_assert_eq!((buffer.width(), buffer.height()), (width, height));
        self.buffer = Some(buffer);
        self.buffer_width = width;
        self.buffer_height = height;

        let size = Vec2::new(width as f32, height as f32);
        viewport.set_size(size.x, size.y);
        viewport.set_position(previous_center - size / 2.0);

        let (display_width, display_height) = display;
        debug!(
            display_width,
            display_height,
            zoom = self.zoom,
            buffer_width = width,
            buffer_height = height,
            "offscreen buffer recomputed"
        );
        Ok(())
    }

    /// Draw a frame into the buffer and present it at the current zoom.
    ///
    /// Returns `Ok(false)` without drawing when no buffer exists yet.
    pub fn render_with<P, D>(&mut self, presenter: &mut P, draw: D) -> Result<bool, P::Error>
    where
        P: Presenter<F::Buffer>,
        D: FnOnce(&mut F::Buffer),
    {
        let Some(buffer) = self.buffer.as_mut() else {
            return Ok(false);
        };
        draw(buffer);
        presenter.present(buffer, self.zoom)?;
        Ok(true)
    }
}
