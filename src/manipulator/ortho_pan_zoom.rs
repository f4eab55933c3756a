//! Orthographic pan and cursor-anchored zoom.

use glam::{Vec2, Vec3};

use super::inertia::LinearInertia;
use super::traits::CameraManipulator;
use super::viewport::Viewport;
use super::zoom::{
    clamp_zoom_factor, pinch_zoom_factor, scroll_zoom_factor,
    zoom_ortho_about_cursor,
};
use crate::camera::Camera;
use crate::input::{PointerButton, PointerMove, Scroll, TouchPan, TouchPinch};
use crate::options::OrthoOptions;

/// 2D-style navigation for orthographic cameras.
///
/// The secondary or middle button drags the view; scroll and pinch scale
/// the visible bounds while keeping the world point under the cursor
/// fixed. Perspective cameras are left untouched.
#[derive(Debug, Clone)]
pub struct OrthoPanZoomManipulator {
    enabled: bool,
    viewport: Viewport,
    panning: bool,
    pan_damping: f32,
    inertia: LinearInertia,
}

impl Default for OrthoPanZoomManipulator {
    fn default() -> Self {
        Self::new(&OrthoOptions::default())
    }
}

impl OrthoPanZoomManipulator {
    /// Create an ortho manipulator tuned by `options`.
    #[must_use]
    pub fn new(options: &OrthoOptions) -> Self {
        Self {
            enabled: true,
            viewport: Viewport::default(),
            panning: false,
            pan_damping: options.pan_damping.max(0.0),
            inertia: LinearInertia::default(),
        }
    }

    /// Pan inertia decay rate (1/s).
    #[must_use]
    pub fn pan_damping(&self) -> f32 {
        self.pan_damping
    }

    /// Set the pan inertia decay rate. Negative rates clamp to zero.
    pub fn set_pan_damping(&mut self, damping: f32) {
        self.pan_damping = damping.max(0.0);
    }

    /// Whether a pan drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Current pan inertia velocity (world units/s).
    #[must_use]
    pub fn pan_velocity(&self) -> Vec3 {
        self.inertia.velocity
    }

    /// Slide the view by a pixel delta, one pixel covering
    /// `width / viewport_width` world units horizontally and
    /// `height / viewport_height` vertically.
    pub fn pan(&mut self, camera: &mut Camera, delta_px: Vec2, dt: f64) {
        let Some(ortho) = camera.orthographic_params() else {
            return;
        };
        let scale = Vec2::new(
            ortho.width() / self.viewport.width(),
            ortho.height() / self.viewport.height(),
        );
        let basis = camera.basis();
        let delta = basis.right * (-delta_px.x * scale.x) + basis.up * (delta_px.y * scale.y);
        if !delta.is_finite() {
            return;
        }
        camera.eye += delta;
        camera.target += delta;
        camera.update_matrices();
        let dt = dt as f32;
        if dt > 0.0 {
            self.inertia = LinearInertia::from_frame_delta(delta, dt);
        }
    }

    /// Scale the bounds by `factor` (<1 zooms in) about the cursor.
    pub fn zoom_to_cursor(&mut self, camera: &mut Camera, factor: f32, cursor: Vec2) {
        let Some(factor) = clamp_zoom_factor(factor) else {
            return;
        };
        let basis = camera.basis();
        let ndc = self.viewport.to_ndc(cursor);
        let eye_offset = camera.eye - camera.target;
        let target = camera.target;
        let Some(ortho) = camera.orthographic_params_mut() else {
            return;
        };
        let new_target = zoom_ortho_about_cursor(ortho, target, &basis, ndc, factor);
        camera.target = new_target;
        camera.eye = new_target + eye_offset;
        camera.update_matrices();
    }
}

impl CameraManipulator for OrthoPanZoomManipulator {
    fn name(&self) -> &'static str {
        "ortho-pan-zoom"
    }

    fn supports_perspective(&self) -> bool {
        false
    }

    fn supports_orthographic(&self) -> bool {
        true
    }

    fn attach_camera(&mut self, _camera: &Camera) {}

    fn detach_camera(&mut self) {
        self.panning = false;
        self.inertia.stop();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    fn update(&mut self, camera: &mut Camera, dt: f64) {
        let dt = dt as f32;
        if !self.enabled || self.panning || dt <= 0.0 {
            return;
        }
        if camera.orthographic_params().is_none() {
            return;
        }
        if let Some(delta) = self.inertia.step(self.pan_damping, dt) {
            camera.eye += delta;
            camera.target += delta;
            camera.update_matrices();
        }
    }

    fn handle_pointer_move(&mut self, camera: &mut Camera, event: PointerMove, dt: f64) {
        if self.enabled && self.panning {
            self.pan(camera, event.delta, dt);
        }
    }

    fn handle_pointer_button(
        &mut self,
        _camera: &mut Camera,
        event: PointerButton,
        _dt: f64,
    ) {
        if !self.enabled || !event.button.is_pan_button() {
            return;
        }
        self.panning = event.pressed;
        if event.pressed {
            self.inertia.stop();
        }
    }

    fn handle_scroll(&mut self, camera: &mut Camera, event: Scroll, _dt: f64) {
        if !self.enabled {
            return;
        }
        if let Some(factor) = scroll_zoom_factor(event.delta.y) {
            self.zoom_to_cursor(camera, factor, event.position);
        }
    }

    fn handle_touch_pan(&mut self, camera: &mut Camera, event: TouchPan, dt: f64) {
        if self.enabled {
            self.pan(camera, event.delta, dt);
        }
    }

    fn handle_touch_pinch(&mut self, camera: &mut Camera, event: TouchPinch, _dt: f64) {
        if !self.enabled {
            return;
        }
        if let Some(factor) = pinch_zoom_factor(event.scale) {
            self.zoom_to_cursor(camera, factor, event.center);
        }
    }
}
