use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

use glam::Vec2;

use pixel_camera::core::{CameraConfig, CameraContext, DisplaySurface};
use pixel_camera::term::{
    frame_fingerprint, Filter, FrameComposer, HudView, PixelBufferFactory, RenderThrottle,
    TerminalDisplay, WorldView,
};
use pixel_camera::types::MoveInput;

struct CountingAlloc;

static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    // Only the test thread counts; harness threads allocate freely.
    static COUNT_ENABLED: Cell<bool> = const { Cell::new(false) };
}

fn counting() -> bool {
    COUNT_ENABLED.try_with(Cell::get).unwrap_or(false)
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if counting() {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if counting() {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.with(|c| c.set(true));
    f();
    COUNT_ENABLED.with(|c| c.set(false));
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn render_present_and_hud_do_not_allocate_after_warmup() {
    let mut display = TerminalDisplay::with_writer(Vec::new(), 80, 24);
    let mut ctx = CameraContext::new(
        CameraConfig::terminal(),
        PixelBufferFactory::new(),
        &mut display,
    )
    .unwrap();
    ctx.set_zoom(1.5, &display).unwrap();
    ctx.viewport_mut().set_position(Vec2::new(-30.0, -20.0));

    let mut composer = FrameComposer::new(display.display_size(), Filter::Bilinear);
    let world = WorldView::default();
    let hud = HudView::default();
    let mut throttle = RenderThrottle::new(500);

    // Warm-up: first present sizes the composed frame.
    ctx.render(&mut composer, |buf, vp| world.render_into(vp, buf))
        .unwrap();

    let allocs = with_alloc_counting(|| {
        for now_ms in 0..120u64 {
            ctx.update(MoveInput::new(1, 1));
            let snap = ctx.snapshot(&display);
            let fp = frame_fingerprint(snap.fingerprint(), display.display_size());
            if !throttle.should_render(now_ms * 16, fp) {
                continue;
            }

            ctx.render(&mut composer, |buf, vp| world.render_into(vp, buf))
                .unwrap();
            hud.draw(composer.frame_mut(), &snap);
        }
    });

    assert_eq!(allocs, 0);
}
