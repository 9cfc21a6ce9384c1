//! CameraContext: the explicit state object a host passes around.
//!
//! It bundles the viewport, the screen scaler and the camera speed, and
//! exposes the host-facing operations: per-step update, discrete actions,
//! resize notifications and rendering. Nothing here touches global state,
//! so the whole camera can be driven from tests with fake surfaces.

use tracing::info;

use crate::config::CameraConfig;
use crate::error::ScalerError;
use crate::movement::{movement_step, CameraSpeed};
use crate::scaler::{ResizeOutcome, ScreenScaler};
use crate::snapshot::CameraSnapshot;
use crate::surface::{BufferFactory, DisplaySurface, Presenter};
use crate::types::{CameraAction, MoveInput};
use crate::viewport::Viewport;

pub struct CameraContext<F: BufferFactory> {
    config: CameraConfig,
    viewport: Viewport,
    scaler: ScreenScaler<F>,
    speed: CameraSpeed,
}

impl<F: BufferFactory> CameraContext<F> {
    /// Set up the camera for `surface`.
    ///
    /// Requests the minimum display size (windowed) and builds the first
    /// offscreen buffer, so a frame can be rendered right away.
    pub fn new<S>(config: CameraConfig, factory: F, surface: &mut S) -> Result<Self, ScalerError>
    where
        S: DisplaySurface + ?Sized,
    {
        let (min_w, min_h) = config.min_display_size();
        let viewport = Viewport::with_size_at_origin(min_w as f32, min_h as f32);
        let scaler = ScreenScaler::new(factory, &config);
        let speed = CameraSpeed::from_config(&config);

        let mut ctx = Self {
            config,
            viewport,
            scaler,
            speed,
        };

        // Any notification from this request is covered by the recompute below.
        let _ = surface.request_display_size(min_w, min_h, false);
        ctx.scaler.recompute(&mut ctx.viewport, surface.display_size())?;
        Ok(ctx)
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable viewport access, e.g. to snap the camera onto a target.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn scaler(&self) -> &ScreenScaler<F> {
        &self.scaler
    }

    pub fn zoom(&self) -> f32 {
        self.scaler.zoom()
    }

    pub fn speed(&self) -> f32 {
        self.speed.get()
    }

    pub fn buffer_size(&self) -> (u32, u32) {
        self.scaler.buffer_size()
    }

    /// Advance one simulation step.
    pub fn update(&mut self, input: MoveInput) {
        let delta = movement_step(input, self.speed.get());
        self.viewport.move_by(delta);
    }

    pub fn set_zoom<S>(&mut self, value: f32, surface: &S) -> Result<bool, ScalerError>
    where
        S: DisplaySurface + ?Sized,
    {
        self.scaler
            .set_zoom(value, &mut self.viewport, surface.display_size())
    }

    pub fn set_speed(&mut self, value: f32) -> bool {
        let changed = self.speed.set(value);
        if changed {
            info!(speed = self.speed.get(), "camera speed changed");
        }
        changed
    }

    /// Apply a discrete action.
    pub fn apply_action<S>(&mut self, action: CameraAction, surface: &mut S) -> Result<(), ScalerError>
    where
        S: DisplaySurface + ?Sized,
    {
        match action {
            CameraAction::ZoomIn => {
                self.set_zoom(self.zoom() + self.config.zoom_step, surface)?;
            }
            CameraAction::ZoomOut => {
                self.set_zoom(self.zoom() - self.config.zoom_step, surface)?;
            }
            CameraAction::SpeedUp => {
                self.set_speed(self.speed() + self.config.speed_step);
            }
            CameraAction::SpeedDown => {
                self.set_speed(self.speed() - self.config.speed_step);
            }
            CameraAction::ToggleFullscreen => {
                let fullscreen = !surface.is_fullscreen();
                info!(fullscreen, "toggling fullscreen");
                let (min_w, min_h) = self.config.min_display_size();
                if surface
                    .request_display_size(min_w, min_h, fullscreen)
                    .is_some()
                {
                    self.on_display_resized(surface)?;
                }
            }
        }
        Ok(())
    }

    /// Forward a display-resize notification from the host.
    pub fn on_display_resized<S>(&mut self, surface: &mut S) -> Result<ResizeOutcome, ScalerError>
    where
        S: DisplaySurface + ?Sized,
    {
        self.scaler.on_display_resized(&mut self.viewport, surface)
    }

    /// Render one frame.
    ///
    /// `draw` receives the offscreen buffer together with the viewport used
    /// to translate world positions. Returns `Ok(false)` if there is no
    /// buffer to draw into.
    pub fn render<P, D>(&mut self, presenter: &mut P, draw: D) -> Result<bool, P::Error>
    where
        P: Presenter<F::Buffer>,
        D: FnOnce(&mut F::Buffer, &Viewport),
    {
        let viewport = &self.viewport;
        self.scaler
            .render_with(presenter, |buffer| draw(buffer, viewport))
    }

    pub fn snapshot<S>(&self, surface: &S) -> CameraSnapshot
    where
        S: DisplaySurface + ?Sized,
    {
        let (buffer_width, buffer_height) = self.scaler.buffer_size();
        CameraSnapshot {
            x: self.viewport.x(),
            y: self.viewport.y(),
            width: self.viewport.width(),
            height: self.viewport.height(),
            zoom: self.scaler.zoom(),
            speed: self.speed.get(),
            buffer_width,
            buffer_height,
            fullscreen: surface.is_fullscreen(),
        }
    }
}
