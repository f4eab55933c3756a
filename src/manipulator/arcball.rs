//! Screen-to-sphere projection for arcball rotation.

use glam::{Quat, Vec2, Vec3};

use super::viewport::Viewport;
use crate::camera::ViewBasis;

/// Project a cursor position onto the unit arcball, returned in world space.
///
/// The cursor is mapped to normalized device coordinates and stretched by
/// the aspect ratio so the ball is round on screen. Points inside the unit
/// disk lift onto the front hemisphere; points outside land on the rim.
/// The camera-space vector (x right, y up, z front) is mapped to world
/// space through `basis`. The result always has unit length.
#[must_use]
pub fn project_to_arcball(
    position: Vec2,
    viewport: Viewport,
    basis: &ViewBasis,
) -> Vec3 {
    let ndc = viewport.to_ndc(position);
    let aspect = viewport.aspect();
    let (mut x, mut y) = (ndc.x, ndc.y);
    if aspect > 1.0 {
        x *= aspect;
    } else {
        y /= aspect;
    }

    let r2 = x * x + y * y;
    let local = if r2 <= 1.0 {
        Vec3::new(x, y, (1.0 - r2).max(0.0).sqrt())
    } else {
        let inv = r2.sqrt().recip();
        Vec3::new(x * inv, y * inv, 0.0)
    };

    basis
        .to_world(local.normalize_or(Vec3::Z))
        .normalize_or(basis.front)
}

/// Axis and angle of `q` along the shorter way around, angle in `[0, π]`.
#[must_use]
pub(crate) fn shortest_axis_angle(q: Quat) -> (Vec3, f32) {
    let q = if q.w < 0.0 { -q } else { q };
    q.to_axis_angle()
}
