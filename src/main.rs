//! Terminal camera demo (default binary).
//!
//! Pans a pixel-art world with a zoomable camera. The terminal is the
//! display, measured in half-block pixels, and the world is rendered into
//! an offscreen buffer sized from the zoom before being upscaled.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pixel_camera::core::{CameraConfig, CameraContext, CameraSnapshot, DisplaySurface};
use pixel_camera::input::{should_quit, InputHandler};
use pixel_camera::term::{
    frame_fingerprint, Filter, FrameComposer, HudView, PixelBufferFactory, RenderThrottle,
    TerminalDisplay, TerminalRenderer, WorldView,
};
use pixel_camera::types::TICK_MS;

/// Redraw an unchanged frame at least this often.
const REFRESH_INTERVAL_MS: u64 = 500;

#[derive(Debug, Parser)]
#[command(name = "pixel-camera", version, about = "Pan and zoom a pixel-art world in the terminal")]
struct Args {
    /// Camera limits as TOML (defaults to a terminal-sized preset)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Initial zoom, clamped to the configured range
    #[arg(long)]
    zoom: Option<f32>,

    /// Initial camera speed, clamped to the configured range
    #[arg(long)]
    speed: Option<f32>,

    /// Print the final camera state as JSON on exit
    #[arg(long)]
    print_state: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = match &args.config {
        Some(path) => CameraConfig::load(path)
            .with_context(|| format!("loading camera config from {}", path.display()))?,
        None => CameraConfig::terminal(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    let snapshot = result?;

    if args.print_state {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: CameraConfig, args: &Args) -> Result<CameraSnapshot> {
    let mut display = TerminalDisplay::stdout()?;
    let mut camera = CameraContext::new(config, PixelBufferFactory::new(), &mut display)?;
    if let Some(zoom) = args.zoom {
        camera.set_zoom(zoom, &display)?;
    }
    if let Some(speed) = args.speed {
        camera.set_speed(speed);
    }
    let display_size = display.display_size();
    info!(
        display = ?display_size,
        buffer = ?camera.buffer_size(),
        zoom = camera.zoom(),
        "camera ready"
    );

    let mut composer = FrameComposer::new(display_size, Filter::Bilinear);
    let world = WorldView::default();
    let hud = HudView::default();
    let mut throttle = RenderThrottle::new(REFRESH_INTERVAL_MS);
    let mut input = InputHandler::new().with_release_events(term.key_release_events());

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(camera.snapshot(&display));
                        }
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Repeat => input.handle_key_repeat(key.code),
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(cols, rows) => {
                    display.handle_resize(cols, rows);
                    camera.on_display_resized(&mut display)?;
                    composer.set_display_size(display.display_size());
                    term.invalidate();
                    throttle.invalidate();
                }
                // Releases that happen while unfocused are never reported.
                Event::FocusLost => input.reset(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            for action in input.drain_actions() {
                camera.apply_action(action, &mut display)?;
            }
            camera.update(input.update(TICK_MS));
        }

        // Render.
        let snap = camera.snapshot(&display);
        let now_ms = started.elapsed().as_millis() as u64;
        let fingerprint = frame_fingerprint(snap.fingerprint(), display.display_size());
        if !throttle.should_render(now_ms, fingerprint) {
            continue;
        }

        let presented = camera
            .render(&mut composer, |buf, viewport| world.render_into(viewport, buf))
            .unwrap_or_else(|never| match never {});
        if !presented {
            continue;
        }
        if !display.is_fullscreen() {
            hud.draw(composer.frame_mut(), &snap);
        }
        term.draw_swap(composer.frame_mut())?;
    }
}
