//! Benchmarks for the orbit manipulator hot paths.
#![allow(missing_docs, unused_results)]

use camnav::camera::{Camera, ViewBasis};
use camnav::manipulator::{
    CameraManipulator, OrbitArcballManipulator, Viewport, project_to_arcball,
};
use camnav::input::{MouseButton, PointerButton, PointerMove};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::{Vec2, Vec3};

fn camera() -> Camera {
    Camera::perspective(60.0, 16.0 / 9.0, 0.1, 100.0).with_pose(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
    )
}

fn arcball_projection_benchmark(c: &mut Criterion) {
    let viewport = Viewport::new(1920.0, 1080.0);
    let basis = ViewBasis::from_pose(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);

    c.bench_function("arcball_projection", |b| {
        b.iter(|| {
            black_box(project_to_arcball(
                black_box(Vec2::new(1200.0, 400.0)),
                viewport,
                &basis,
            ))
        })
    });
}

fn drag_rotate_benchmark(c: &mut Criterion) {
    let mut camera = camera();
    let mut orbit = OrbitArcballManipulator::default();
    orbit.set_viewport_size(1920.0, 1080.0);
    orbit.attach_camera(&camera);
    orbit.handle_pointer_button(
        &mut camera,
        PointerButton {
            button: MouseButton::Left,
            pressed: true,
            position: Vec2::new(960.0, 540.0),
        },
        1.0 / 60.0,
    );

    let mut x = 960.0_f32;
    c.bench_function("orbit_drag_rotate_step", |b| {
        b.iter(|| {
            x = if x > 1500.0 { 960.0 } else { x + 1.0 };
            orbit.handle_pointer_move(
                &mut camera,
                PointerMove {
                    position: Vec2::new(x, 540.0),
                    delta: Vec2::new(1.0, 0.0),
                },
                1.0 / 60.0,
            );
            black_box(camera.eye)
        })
    });
}

fn inertia_update_benchmark(c: &mut Criterion) {
    let mut camera = camera();
    let mut orbit = OrbitArcballManipulator::default();
    orbit.set_damping(0.0, 0.0);
    orbit.attach_camera(&camera);
    orbit.handle_touch_pan(
        &mut camera,
        camnav::input::TouchPan {
            delta: Vec2::new(4.0, 0.0),
        },
        1.0 / 60.0,
    );

    c.bench_function("orbit_inertia_update", |b| {
        b.iter(|| {
            orbit.update(&mut camera, black_box(1.0 / 60.0));
            black_box(camera.matrix_revision())
        })
    });
}

criterion_group!(
    benches,
    arcball_projection_benchmark,
    drag_rotate_benchmark,
    inertia_update_benchmark
);
criterion_main!(benches);
