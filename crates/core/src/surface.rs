//! Seams to the windowing/graphics layer.
//!
//! The camera core never talks to a window or GPU directly. Hosts implement
//! these traits: a terminal front-end, a real window, or a test double.

/// Notification that the display surface finished a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayResized {
    pub width: u32,
    pub height: u32,
}

/// The output surface the offscreen buffer is composited onto.
pub trait DisplaySurface {
    /// Current size in display pixels.
    fn display_size(&self) -> (u32, u32);

    /// Ask the surface to change size.
    ///
    /// Surfaces that notify synchronously (the resize completes inside this
    /// call) return the resulting event; the caller is then responsible for
    /// dispatching it. Surfaces that notify later return `None` and deliver
    /// the event through the host loop instead.
    fn request_display_size(
        &mut self,
        width: u32,
        height: u32,
        fullscreen: bool,
    ) -> Option<DisplayResized>;

    fn is_fullscreen(&self) -> bool;
}

/// A fixed-resolution render target.
pub trait OffscreenBuffer {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Allocates offscreen buffers.
///
/// Allocation failure is not recoverable for the camera; the error is
/// handed to the host as-is.
pub trait BufferFactory {
    type Buffer: OffscreenBuffer;
    type Error: std::error::Error + Send + Sync + 'static;

    fn allocate(&mut self, width: u32, height: u32) -> Result<Self::Buffer, Self::Error>;
}

/// Composites an offscreen buffer onto the display.
///
/// `display_scale` is the current zoom: one buffer pixel covers
/// `display_scale` display pixels on each axis. Implementations should use
/// a smooth filter here; drawing *into* the buffer stays nearest-neighbor.
pub trait Presenter<B: ?Sized> {
    type Error;

    fn present(&mut self, buffer: &B, display_scale: f32) -> Result<(), Self::Error>;
}
