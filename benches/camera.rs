use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use pixel_camera::core::{buffer_size_for, CameraConfig, CameraContext, ScreenScaler, Viewport};
use pixel_camera::term::{
    upscale_into, Filter, FrameComposer, PixelBuffer, PixelBufferFactory, TerminalDisplay,
    WorldView,
};

fn bench_buffer_size(c: &mut Criterion) {
    c.bench_function("buffer_size_for_1080p", |b| {
        b.iter(|| buffer_size_for(black_box((1920, 1080)), black_box(1.35)))
    });
}

fn bench_recompute(c: &mut Criterion) {
    let mut scaler = ScreenScaler::new(PixelBufferFactory::new(), &CameraConfig::default());
    let mut viewport = Viewport::with_size_at_origin(1280.0, 720.0);

    c.bench_function("recompute_1280x720", |b| {
        b.iter(|| {
            scaler
                .recompute(&mut viewport, black_box((1280, 720)))
                .unwrap();
        })
    });
}

fn bench_translate(c: &mut Criterion) {
    let viewport = Viewport::new(-123.25, 456.5, 854.0, 480.0);

    c.bench_function("translate_to_local", |b| {
        b.iter(|| viewport.translate_to_local(black_box(Vec2::new(1000.7, -20.3)).floor()))
    });
}

fn bench_upscale(c: &mut Criterion) {
    let src = PixelBuffer::new(854, 480);
    let mut dst = PixelBuffer::new(1280, 720);

    c.bench_function("upscale_bilinear_1.5x", |b| {
        b.iter(|| upscale_into(&src, black_box(1.5), Filter::Bilinear, &mut dst))
    });
}

fn bench_terminal_frame(c: &mut Criterion) {
    let mut display = TerminalDisplay::with_writer(Vec::new(), 200, 60);
    let mut ctx = CameraContext::new(
        CameraConfig::terminal(),
        PixelBufferFactory::new(),
        &mut display,
    )
    .unwrap();
    ctx.set_zoom(1.25, &display).unwrap();
    let mut composer = FrameComposer::new((200, 120), Filter::Bilinear);
    let world = WorldView::default();

    c.bench_function("render_and_present_200x60", |b| {
        b.iter(|| {
            ctx.render(&mut composer, |buf, vp| world.render_into(vp, buf))
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_buffer_size,
    bench_recompute,
    bench_translate,
    bench_upscale,
    bench_terminal_frame
);
criterion_main!(benches);
