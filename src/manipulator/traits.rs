//! Core trait for camera manipulators.

use crate::camera::Camera;
use crate::input::{KeyAction, PointerButton, PointerMove, Scroll, TouchPan, TouchPinch};

/// A navigation paradigm that turns input into camera pose changes.
///
/// Manipulators never own the camera. The caller lends it for each call
/// that may move it, and [`CameraManipulator::attach_camera`] lets the
/// manipulator capture whatever it derives from the current pose (center
/// of interest, yaw/pitch). While disabled, every input handler and
/// [`CameraManipulator::update`] must leave both the camera and the
/// manipulator's own state untouched.
///
/// Handlers are best-effort: input that cannot be applied (wrong
/// projection, zero-length vectors, non-positive scale) is ignored.
pub trait CameraManipulator {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Whether this manipulator can drive perspective cameras.
    fn supports_perspective(&self) -> bool;

    /// Whether this manipulator can drive orthographic cameras.
    fn supports_orthographic(&self) -> bool;

    /// Sync internal state from the camera's current pose.
    fn attach_camera(&mut self, camera: &Camera);

    /// Forget anything derived from the previously attached camera.
    fn detach_camera(&mut self) {}

    /// Enable or disable input handling and updates.
    fn set_enabled(&mut self, enabled: bool);

    /// Whether input handling and updates are active.
    fn is_enabled(&self) -> bool;

    /// Track the viewport size in pixels.
    fn set_viewport_size(&mut self, width: f32, height: f32);

    /// Advance time-based behavior (inertia, movement, smoothing).
    /// `dt <= 0` is a no-op.
    fn update(&mut self, camera: &mut Camera, dt: f64);

    /// Cursor moved.
    fn handle_pointer_move(&mut self, camera: &mut Camera, event: PointerMove, dt: f64);

    /// Mouse button pressed or released.
    fn handle_pointer_button(
        &mut self,
        camera: &mut Camera,
        event: PointerButton,
        dt: f64,
    );

    /// Scroll wheel at a cursor position.
    fn handle_scroll(&mut self, camera: &mut Camera, event: Scroll, dt: f64);

    /// A bound key changed state.
    fn handle_key(&mut self, _action: KeyAction, _pressed: bool, _dt: f64) {}

    /// Two-finger pan.
    fn handle_touch_pan(&mut self, camera: &mut Camera, event: TouchPan, dt: f64);

    /// Pinch zoom.
    fn handle_touch_pinch(&mut self, camera: &mut Camera, event: TouchPinch, dt: f64);

    /// External scene-scale factor. Manipulators that never scale the
    /// scene report 1.
    fn scene_scale(&self) -> f32 {
        1.0
    }
}
