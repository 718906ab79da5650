//! Camera-control hot paths: the per-frame update, pointer dispatch and
//! hand-tracking frames.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use datasphere::camera::{Camera, CameraControls, ScreenRect};
use datasphere::input::{Frame, Hand, InputEvent, MouseButton, Pointable};
use glam::{Vec2, Vec3};

fn controls() -> CameraControls {
    let camera = Camera::new(Vec3::new(0.0, 0.0, 3000.0), 40.0, 1.5, 1.0, 100_000.0);
    CameraControls::new(camera, ScreenRect::from_size(1200.0, 800.0))
}

fn update_benchmark(c: &mut Criterion) {
    let mut controls = controls();
    controls.dispatch(&InputEvent::PointerDown {
        button: MouseButton::Left,
        x: 600.0,
        y: 400.0,
    });
    controls.dispatch(&InputEvent::PointerMove { x: 900.0, y: 300.0 });

    c.bench_function("controls_update_damped_drag", |b| {
        b.iter(|| {
            controls.update();
            black_box(controls.drain_events())
        });
    });
}

fn dispatch_benchmark(c: &mut Criterion) {
    let mut controls = controls();
    controls.dispatch(&InputEvent::TouchStart {
        touches: vec![Vec2::new(500.0, 400.0), Vec2::new(700.0, 400.0)],
    });
    let pinch = InputEvent::TouchMove {
        touches: vec![Vec2::new(520.0, 410.0), Vec2::new(680.0, 390.0)],
    };

    c.bench_function("dispatch_touch_move", |b| {
        b.iter(|| controls.dispatch(black_box(&pinch)));
    });
}

fn gesture_frame_benchmark(c: &mut Criterion) {
    let mut controls = controls();
    let mut frame = Frame {
        hands: vec![Hand::default()],
        pointables: vec![Pointable::default(); 4],
    };

    c.bench_function("gesture_frame_rotate", |b| {
        let mut x = 0.0_f32;
        b.iter(|| {
            x = (x + 1.0) % 100.0;
            frame.hands[0].palm_position = Vec3::new(x, 150.0, 0.0);
            controls.update_frame(black_box(&frame));
            black_box(controls.drain_events())
        });
    });
}

criterion_group!(
    benches,
    update_benchmark,
    dispatch_benchmark,
    gesture_frame_benchmark
);
criterion_main!(benches);
