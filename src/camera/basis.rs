//! Orthonormal view basis with fallbacks for degenerate poses.

use glam::Vec3;

/// Lengths below this are treated as zero.
pub const EPSILON: f32 = 1e-6;

/// Look direction used when `target - eye` is degenerate.
pub const DEFAULT_FRONT: Vec3 = Vec3::NEG_Z;

/// Camera-aligned axes in world space.
///
/// `front` points from the eye toward the target, `right` is
/// `front × world_up` and `up` is `right × front`. Each axis falls back to a
/// canonical direction when the cross product collapses, so the basis never
/// contains NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    /// Unit look direction.
    pub front: Vec3,
    /// Unit screen-right direction.
    pub right: Vec3,
    /// Unit screen-up direction.
    pub up: Vec3,
}

impl ViewBasis {
    /// Derive the basis from an eye/target pair and a reference up vector.
    #[must_use]
    pub fn from_pose(eye: Vec3, target: Vec3, world_up: Vec3) -> Self {
        let front = front_from(eye, target);
        let right = right_from(front, world_up);
        let up = up_from(front, right, world_up);
        Self { front, right, up }
    }

    /// Map camera-space coordinates (x right, y up, z forward) to world
    /// space.
    #[must_use]
    pub fn to_world(&self, v: Vec3) -> Vec3 {
        self.right * v.x + self.up * v.y + self.front * v.z
    }
}

/// Normalized `target - eye`, or [`DEFAULT_FRONT`] when degenerate.
#[must_use]
pub fn front_from(eye: Vec3, target: Vec3) -> Vec3 {
    let dir = target - eye;
    let len = dir.length();
    if len < EPSILON {
        DEFAULT_FRONT
    } else {
        dir / len
    }
}

fn right_from(front: Vec3, world_up: Vec3) -> Vec3 {
    let mut r = front.cross(world_up);
    if r.length() < EPSILON {
        // looking straight along world up
        r = front.cross(Vec3::Z);
    }
    let len = r.length();
    if len < EPSILON {
        Vec3::X
    } else {
        r / len
    }
}

fn up_from(front: Vec3, right: Vec3, world_up: Vec3) -> Vec3 {
    let up = right.cross(front);
    let len = up.length();
    if len < EPSILON {
        world_up.normalize_or(Vec3::Y)
    } else {
        up / len
    }
}
