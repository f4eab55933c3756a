//! Smoothed chase camera.

use std::fmt;

use glam::Vec3;

use super::traits::CameraManipulator;
use super::zoom::{
    SCROLL_ZOOM_IN, SCROLL_ZOOM_OUT, clamp_zoom_factor, pinch_zoom_factor,
};
use crate::camera::Camera;
use crate::input::{PointerButton, PointerMove, Scroll, TouchPan, TouchPinch};
use crate::options::FollowOptions;

/// Scroll and pinch never bring the offset's depth component closer to
/// zero than this.
pub const MIN_OFFSET_DEPTH: f32 = 0.1;

/// Callback returning the point to follow, queried once per update.
pub type TargetProvider = Box<dyn Fn() -> Vec3>;

/// Keeps the camera at a fixed offset from a (possibly moving) target.
///
/// Each update moves the eye a fraction `1 - exp(-damping * dt)` of the
/// way toward `target + offset` and aims it at the target. With a
/// provider installed the target is re-queried every update; otherwise
/// the fixed world point is used.
pub struct FollowManipulator {
    enabled: bool,
    target: Vec3,
    provider: Option<TargetProvider>,
    offset: Vec3,
    damping: f32,
}

impl fmt::Debug for FollowManipulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FollowManipulator")
            .field("enabled", &self.enabled)
            .field("target", &self.target)
            .field("has_provider", &self.provider.is_some())
            .field("offset", &self.offset)
            .field("damping", &self.damping)
            .finish()
    }
}

impl Default for FollowManipulator {
    fn default() -> Self {
        Self::new(&FollowOptions::default())
    }
}

impl FollowManipulator {
    /// Create a follow manipulator tuned by `options`.
    #[must_use]
    pub fn new(options: &FollowOptions) -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            provider: None,
            offset: Vec3::from_array(options.offset),
            damping: options.damping.max(0.0),
        }
    }

    /// Follow a fixed world point. Clears any provider.
    pub fn set_target_world(&mut self, target: Vec3) {
        self.target = target;
        self.provider = None;
    }

    /// Follow whatever `provider` returns. Takes precedence over the fixed
    /// point until cleared.
    pub fn set_target_provider(&mut self, provider: impl Fn() -> Vec3 + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Drop the provider and fall back to the fixed point.
    pub fn clear_target_provider(&mut self) {
        self.provider = None;
    }

    /// The point currently being followed.
    #[must_use]
    pub fn target_world(&self) -> Vec3 {
        self.provider.as_ref().map_or(self.target, |provider| provider())
    }

    /// Desired eye offset from the target.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Set the desired eye offset from the target.
    pub fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
    }

    /// Smoothing rate (1/s).
    #[must_use]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Set the smoothing rate. Negative rates clamp to zero.
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping.max(0.0);
    }

    fn scale_offset_depth(&mut self, factor: f32) {
        let z = self.offset.z * factor;
        if !z.is_finite() {
            return;
        }
        self.offset.z = if z.abs() < MIN_OFFSET_DEPTH {
            MIN_OFFSET_DEPTH.copysign(z)
        } else {
            z
        };
    }
}

impl CameraManipulator for FollowManipulator {
    fn name(&self) -> &'static str {
        "follow"
    }

    fn supports_perspective(&self) -> bool {
        true
    }

    fn supports_orthographic(&self) -> bool {
        true
    }

    fn attach_camera(&mut self, _camera: &Camera) {}

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_viewport_size(&mut self, _width: f32, _height: f32) {}

    fn update(&mut self, camera: &mut Camera, dt: f64) {
        let dt = dt as f32;
        if !self.enabled || dt <= 0.0 {
            return;
        }
        let target = self.target_world();
        let desired = target + self.offset;
        let alpha = 1.0 - (-self.damping * dt).exp();
        camera.eye += (desired - camera.eye) * alpha;
        camera.target = target;
        camera.up = Vec3::Y;
        camera.update_matrices();
    }

    fn handle_pointer_move(&mut self, _camera: &mut Camera, _event: PointerMove, _dt: f64) {}

    fn handle_pointer_button(
        &mut self,
        _camera: &mut Camera,
        _event: PointerButton,
        _dt: f64,
    ) {
    }

    fn handle_scroll(&mut self, _camera: &mut Camera, event: Scroll, _dt: f64) {
        if !self.enabled || event.delta.y == 0.0 {
            return;
        }
        let factor = if event.delta.y > 0.0 {
            SCROLL_ZOOM_IN
        } else {
            SCROLL_ZOOM_OUT
        };
        self.scale_offset_depth(factor);
    }

    fn handle_touch_pan(&mut self, _camera: &mut Camera, _event: TouchPan, _dt: f64) {}

    fn handle_touch_pinch(&mut self, _camera: &mut Camera, event: TouchPinch, _dt: f64) {
        if !self.enabled {
            return;
        }
        if let Some(factor) = pinch_zoom_factor(event.scale).and_then(clamp_zoom_factor) {
            self.scale_offset_depth(factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;

    fn camera() -> Camera {
        Camera::perspective(60.0, 1.0, 0.1, 100.0)
    }

    fn scroll(y: f32) -> Scroll {
        Scroll {
            delta: Vec2::new(0.0, y),
            position: Vec2::ZERO,
        }
    }

    #[test]
    fn converges_toward_target_plus_offset() {
        let mut camera = camera().with_pose(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, Vec3::Y);
        let mut follow = FollowManipulator::default();
        follow.set_target_world(Vec3::new(1.0, 0.0, 0.0));
        let desired = Vec3::new(1.0, 1.0, 5.0);

        let mut last = (camera.eye - desired).length();
        for _ in 0..120 {
            follow.update(&mut camera, 1.0 / 60.0);
            let now = (camera.eye - desired).length();
            assert!(now < last);
            last = now;
        }
        assert!(last < 1e-2);
        assert_eq!(camera.target, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(camera.up, Vec3::Y);
    }

    #[test]
    fn single_step_uses_exponential_alpha() {
        let mut camera = camera().with_pose(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        let mut follow = FollowManipulator::default();
        follow.set_offset(Vec3::new(0.0, 0.0, 10.0));
        follow.update(&mut camera, 0.1);
        let alpha = 1.0 - (-8.0_f32 * 0.1).exp();
        assert!((camera.eye.z - 10.0 * alpha).abs() < 1e-5);
    }

    #[test]
    fn provider_is_queried_each_update() {
        let position = Rc::new(Cell::new(Vec3::ZERO));
        let source = Rc::clone(&position);
        let mut camera = camera();
        let mut follow = FollowManipulator::default();
        follow.set_target_provider(move || source.get());

        follow.update(&mut camera, 0.016);
        assert_eq!(camera.target, Vec3::ZERO);
        position.set(Vec3::new(3.0, 0.0, 0.0));
        follow.update(&mut camera, 0.016);
        assert_eq!(camera.target, Vec3::new(3.0, 0.0, 0.0));

        follow.clear_target_provider();
        assert_eq!(follow.target_world(), Vec3::ZERO);
    }

    #[test]
    fn zero_damping_holds_the_eye() {
        let mut camera = camera();
        let eye = camera.eye;
        let mut follow = FollowManipulator::default();
        follow.set_damping(-3.0);
        assert_eq!(follow.damping(), 0.0);
        follow.set_target_world(Vec3::new(0.0, 0.0, -20.0));
        follow.update(&mut camera, 1.0);
        assert_eq!(camera.eye, eye);
    }

    #[test]
    fn scroll_scales_offset_depth_with_floor() {
        let mut camera = camera();
        let mut follow = FollowManipulator::default();
        follow.handle_scroll(&mut camera, scroll(1.0), 0.016);
        assert!((follow.offset().z - 4.5).abs() < 1e-6);
        follow.handle_scroll(&mut camera, scroll(-1.0), 0.016);
        assert!((follow.offset().z - 4.95).abs() < 1e-5);

        for _ in 0..100 {
            follow.handle_scroll(&mut camera, scroll(1.0), 0.016);
        }
        assert_eq!(follow.offset().z, MIN_OFFSET_DEPTH);

        follow.set_offset(Vec3::new(0.0, 1.0, -0.5));
        for _ in 0..100 {
            follow.handle_scroll(&mut camera, scroll(1.0), 0.016);
        }
        assert_eq!(follow.offset().z, -MIN_OFFSET_DEPTH);
    }

    #[test]
    fn pinch_scales_offset_by_inverse() {
        let mut camera = camera();
        let mut follow = FollowManipulator::default();
        follow.handle_touch_pinch(
            &mut camera,
            TouchPinch {
                scale: 2.0,
                center: Vec2::ZERO,
            },
            0.016,
        );
        assert!((follow.offset().z - 2.5).abs() < 1e-6);
        follow.handle_touch_pinch(
            &mut camera,
            TouchPinch {
                scale: 0.0,
                center: Vec2::ZERO,
            },
            0.016,
        );
        assert!((follow.offset().z - 2.5).abs() < 1e-6);
    }

    #[test]
    fn tiny_pinch_keeps_offset_and_pose_finite() {
        let mut camera = camera();
        let mut follow = FollowManipulator::default();
        follow.handle_touch_pinch(
            &mut camera,
            TouchPinch {
                scale: 1.0e-39,
                center: Vec2::ZERO,
            },
            0.016,
        );
        assert!((follow.offset().z - 500.0).abs() < 1e-3);
        follow.update(&mut camera, 0.016);
        assert!(camera.eye.is_finite());
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn non_positive_dt_is_noop() {
        let mut camera = camera();
        let before = camera.clone();
        let mut follow = FollowManipulator::default();
        follow.set_target_world(Vec3::ONE);
        follow.update(&mut camera, 0.0);
        follow.update(&mut camera, -0.5);
        assert_eq!(camera, before);
    }
}
