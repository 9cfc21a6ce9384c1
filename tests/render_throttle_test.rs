use pixel_camera::core::CameraSnapshot;
use pixel_camera::term::{frame_fingerprint, RenderThrottle};

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
}

#[test]
fn render_throttle_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(10, 1));
    assert!(!t.should_render(249, 1));
    assert!(t.should_render(250, 1));
}

#[test]
fn render_throttle_invalidate_forces_next_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    t.invalidate();
    assert!(t.should_render(1, 1));
    assert!(!t.should_render(2, 1));
}

#[test]
fn frame_fingerprint_tracks_camera_and_display() {
    let snap = CameraSnapshot {
        zoom: 1.0,
        buffer_width: 80,
        buffer_height: 48,
        ..CameraSnapshot::default()
    };
    let moved = CameraSnapshot { x: 0.5, ..snap };

    let base = frame_fingerprint(snap.fingerprint(), (80, 48));
    assert_eq!(base, frame_fingerprint(snap.fingerprint(), (80, 48)));
    assert_ne!(base, frame_fingerprint(moved.fingerprint(), (80, 48)));
    assert_ne!(base, frame_fingerprint(snap.fingerprint(), (80, 50)));
    assert_ne!(base, frame_fingerprint(snap.fingerprint(), (48, 80)));
}
