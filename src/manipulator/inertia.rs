//! Exponentially decaying post-release motion.

use glam::{Quat, Vec3};

/// Speeds at or below this snap to exactly zero.
pub const INERTIA_EPSILON: f32 = 1e-4;

/// Angular release speeds are clamped to this magnitude (rad/s).
pub const MAX_ANGULAR_SPEED: f32 = 10.0;

/// Multiplier applied per update: `exp(-damping * dt)`.
#[must_use]
pub(crate) fn decay_factor(damping: f32, dt: f32) -> f32 {
    (-damping.max(0.0) * dt).exp()
}

/// Rotation that keeps spinning about a fixed axis after release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularInertia {
    /// Unit rotation axis in world space.
    pub axis: Vec3,
    /// Signed angular speed in radians per second.
    pub speed: f32,
}

impl Default for AngularInertia {
    fn default() -> Self {
        Self {
            axis: Vec3::Y,
            speed: 0.0,
        }
    }
}

impl AngularInertia {
    /// Build from one frame's rotation delta. Degenerate input yields a
    /// stopped inertia.
    #[must_use]
    pub fn from_frame_delta(axis: Vec3, angle: f32, dt: f32) -> Self {
        if dt <= 0.0 || !angle.is_finite() {
            return Self::default();
        }
        let Some(axis) = axis.try_normalize() else {
            return Self::default();
        };
        Self {
            axis,
            speed: (angle / dt).clamp(-MAX_ANGULAR_SPEED, MAX_ANGULAR_SPEED),
        }
    }

    /// Whether the speed is above the snap threshold.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.speed.abs() > INERTIA_EPSILON
    }

    /// Stop immediately.
    pub fn stop(&mut self) {
        self.speed = 0.0;
    }

    /// Rotation to apply for this step, then decay. Returns `None` once
    /// stopped.
    pub fn step(&mut self, damping: f32, dt: f32) -> Option<Quat> {
        if !self.is_active() {
            self.speed = 0.0;
            return None;
        }
        let rotation = Quat::from_axis_angle(self.axis, self.speed * dt);
        self.speed *= decay_factor(damping, dt);
        if !self.is_active() {
            self.speed = 0.0;
        }
        Some(rotation)
    }
}

/// Translation that keeps drifting after release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearInertia {
    /// World-space velocity in units per second.
    pub velocity: Vec3,
}

impl LinearInertia {
    /// Velocity from one frame's world delta. Zero when `dt <= 0`.
    #[must_use]
    pub fn from_frame_delta(delta: Vec3, dt: f32) -> Self {
        if dt <= 0.0 || !delta.is_finite() {
            return Self::default();
        }
        Self {
            velocity: delta / dt,
        }
    }

    /// Whether the speed is above the snap threshold.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.velocity.length() > INERTIA_EPSILON
    }

    /// Stop immediately.
    pub fn stop(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// Translation to apply for this step, then decay. Returns `None` once
    /// stopped.
    pub fn step(&mut self, damping: f32, dt: f32) -> Option<Vec3> {
        if !self.is_active() {
            self.velocity = Vec3::ZERO;
            return None;
        }
        let delta = self.velocity * dt;
        self.velocity *= decay_factor(damping, dt);
        if !self.is_active() {
            self.velocity = Vec3::ZERO;
        }
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angular_inertia_reaches_exact_zero() {
        let mut inertia = AngularInertia {
            axis: Vec3::Y,
            speed: MAX_ANGULAR_SPEED,
        };
        let mut steps = 0;
        while inertia.step(8.0, 1.0 / 60.0).is_some() {
            steps += 1;
            assert!(steps < 10_000, "inertia never settled");
        }
        assert_eq!(inertia.speed, 0.0);
        assert!(inertia.step(8.0, 1.0 / 60.0).is_none());
    }

    #[test]
    fn linear_inertia_decays_monotonically() {
        let mut inertia = LinearInertia {
            velocity: Vec3::new(3.0, 0.0, 0.0),
        };
        let mut last = inertia.velocity.length();
        while inertia.step(10.0, 0.02).is_some() {
            let now = inertia.velocity.length();
            assert!(now < last);
            last = now;
        }
        assert_eq!(inertia.velocity, Vec3::ZERO);
    }

    #[test]
    fn zero_damping_never_decays() {
        let mut inertia = LinearInertia {
            velocity: Vec3::X,
        };
        let delta = inertia.step(0.0, 0.5);
        assert_eq!(delta, Some(Vec3::new(0.5, 0.0, 0.0)));
        assert_eq!(inertia.velocity, Vec3::X);
    }

    #[test]
    fn release_speed_is_clamped() {
        let inertia = AngularInertia::from_frame_delta(Vec3::Z, 1.0, 0.001);
        assert_eq!(inertia.speed, MAX_ANGULAR_SPEED);
    }

    #[test]
    fn non_positive_dt_yields_no_inertia() {
        assert!(!AngularInertia::from_frame_delta(Vec3::Z, 0.5, 0.0).is_active());
        assert!(!LinearInertia::from_frame_delta(Vec3::X, -1.0).is_active());
    }
}
