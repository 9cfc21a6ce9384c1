//! Viewport - the camera's world-space rectangle
//!
//! The viewport's top-left corner is the camera's scroll position. Its size
//! always equals the offscreen buffer resolution, which the screen scaler
//! keeps in sync.

use glam::Vec2;

/// Axis-aligned rectangle in world space.
///
/// Edges and center are derived on demand and never stored, so they cannot
/// drift out of sync with the position/size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "viewport size must be positive");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Viewport of the given size with its top-left corner at the world origin.
    pub fn with_size_at_origin(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Convert a world-space point into camera-local (render buffer) space.
    ///
    /// This is a plain subtraction and never rounds. Callers that want crisp
    /// pixel placement floor the *world* position before calling this.
    #[inline]
    pub fn translate_to_local(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x - self.x, world.y - self.y)
    }

    /// Move the camera by `delta`. There are no world bounds.
    #[inline]
    pub fn move_by(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Set the viewport size. Only the screen scaler should call this.
    pub fn set_size(&mut self, width: f32, height: f32) {
        debug_assert!(width > 0.0 && height > 0.0, "viewport size must be positive");
        self.width = width;
        self.height = height;
    }

    /// Copy of this viewport moved to `position`.
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.set_position(position);
        self
    }

    /// Copy of this viewport with a new size (position unchanged).
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.set_size(width, height);
        self
    }
}
