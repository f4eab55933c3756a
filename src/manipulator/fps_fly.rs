//! First-person fly navigation.

use glam::Vec3;

use super::traits::CameraManipulator;
use crate::camera::{Camera, basis::EPSILON};
use crate::input::{
    KeyAction, MouseButton, PointerButton, PointerMove, Scroll, TouchPan,
    TouchPinch,
};
use crate::options::FlyOptions;

/// Pitch is kept strictly inside this many degrees of straight up/down.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

const SCROLL_STEP: f32 = 0.5;
const PINCH_STEP: f32 = 0.3;
const TOUCH_LOOK_SCALE: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct HeldKeys {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

/// WASD + mouse-look first-person camera.
///
/// Holding the secondary button enables mouse look. Movement keys fly
/// along the look direction, strafe, or move along world up; diagonal
/// movement is normalized so every direction moves at the same speed.
#[derive(Debug, Clone)]
pub struct FpsFlyManipulator {
    enabled: bool,
    looking: bool,
    yaw_deg: f32,
    pitch_deg: f32,
    move_speed: f32,
    mouse_sensitivity: f32,
    keys: HeldKeys,
}

impl Default for FpsFlyManipulator {
    fn default() -> Self {
        Self::new(&FlyOptions::default())
    }
}

impl FpsFlyManipulator {
    /// Create a fly manipulator tuned by `options`.
    #[must_use]
    pub fn new(options: &FlyOptions) -> Self {
        Self {
            enabled: true,
            looking: false,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            move_speed: options.move_speed,
            mouse_sensitivity: options.mouse_sensitivity,
            keys: HeldKeys::default(),
        }
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Set the movement speed.
    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
    }

    /// Mouse-look sensitivity in degrees per pixel.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Set the mouse-look sensitivity.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Yaw in degrees; 0 looks down -Z, positive turns toward +X.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw_deg
    }

    /// Pitch in degrees, within ±[`PITCH_LIMIT_DEGREES`].
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch_deg
    }

    /// Whether mouse look is active.
    #[must_use]
    pub fn is_looking(&self) -> bool {
        self.looking
    }

    /// Unit look direction from the current yaw and pitch.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        let (sy, cy) = self.yaw_deg.to_radians().sin_cos();
        let (sp, cp) = self.pitch_deg.to_radians().sin_cos();
        Vec3::new(sy * cp, sp, -cy * cp).normalize_or(Vec3::NEG_Z)
    }

    fn right(front: Vec3) -> Vec3 {
        front.cross(Vec3::Y).normalize_or(Vec3::X)
    }

    fn turn(&mut self, camera: &mut Camera, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw_deg += dx * sensitivity;
        self.pitch_deg = (self.pitch_deg - dy * sensitivity)
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        camera.target = camera.eye + self.front();
        camera.up = Vec3::Y;
        camera.update_matrices();
    }

    fn translate(camera: &mut Camera, offset: Vec3) {
        camera.eye += offset;
        camera.target += offset;
        camera.update_matrices();
    }
}

impl CameraManipulator for FpsFlyManipulator {
    fn name(&self) -> &'static str {
        "fps-fly"
    }

    fn supports_perspective(&self) -> bool {
        true
    }

    fn supports_orthographic(&self) -> bool {
        false
    }

    fn attach_camera(&mut self, camera: &Camera) {
        let Some(front) = (camera.target - camera.eye).try_normalize() else {
            self.yaw_deg = 0.0;
            self.pitch_deg = 0.0;
            return;
        };
        self.pitch_deg = front.y.clamp(-1.0, 1.0).asin().to_degrees();
        self.yaw_deg = front.x.atan2(-front.z).to_degrees();
    }

    fn detach_camera(&mut self) {
        self.looking = false;
        self.keys = HeldKeys::default();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    // Mouse look is scaled per pixel, independent of the viewport.
    fn set_viewport_size(&mut self, _width: f32, _height: f32) {}

    fn update(&mut self, camera: &mut Camera, dt: f64) {
        let dt = dt as f32;
        if !self.enabled || dt <= 0.0 {
            return;
        }
        let front = self.front();
        let right = Self::right(front);
        let keys = self.keys;
        let mut movement = Vec3::ZERO;
        for (held, dir) in [
            (keys.forward, front),
            (keys.backward, -front),
            (keys.right, right),
            (keys.left, -right),
            (keys.up, Vec3::Y),
            (keys.down, Vec3::NEG_Y),
        ] {
            if held {
                movement += dir;
            }
        }
        if movement.length() > EPSILON {
            Self::translate(camera, movement.normalize() * (self.move_speed * dt));
        }
    }

    fn handle_pointer_move(&mut self, camera: &mut Camera, event: PointerMove, _dt: f64) {
        if !self.enabled || !self.looking {
            return;
        }
        self.turn(camera, event.delta.x, event.delta.y, self.mouse_sensitivity);
    }

    fn handle_pointer_button(
        &mut self,
        _camera: &mut Camera,
        event: PointerButton,
        _dt: f64,
    ) {
        if self.enabled && event.button == MouseButton::Right {
            self.looking = event.pressed;
        }
    }

    fn handle_scroll(&mut self, camera: &mut Camera, event: Scroll, _dt: f64) {
        if !self.enabled || event.delta.y == 0.0 {
            return;
        }
        let step = self.move_speed * SCROLL_STEP;
        let dist = if event.delta.y > 0.0 { step } else { -step };
        Self::translate(camera, self.front() * dist);
    }

    fn handle_key(&mut self, action: KeyAction, pressed: bool, _dt: f64) {
        if !self.enabled {
            return;
        }
        let slot = match action {
            KeyAction::MoveForward => &mut self.keys.forward,
            KeyAction::MoveBackward => &mut self.keys.backward,
            KeyAction::StrafeLeft => &mut self.keys.left,
            KeyAction::StrafeRight => &mut self.keys.right,
            KeyAction::MoveUp => &mut self.keys.up,
            KeyAction::MoveDown => &mut self.keys.down,
            KeyAction::PanModifier => return,
        };
        *slot = pressed;
    }

    fn handle_touch_pan(&mut self, camera: &mut Camera, event: TouchPan, _dt: f64) {
        if !self.enabled || !self.looking {
            return;
        }
        self.turn(
            camera,
            event.delta.x,
            event.delta.y,
            self.mouse_sensitivity * TOUCH_LOOK_SCALE,
        );
    }

    fn handle_touch_pinch(&mut self, camera: &mut Camera, event: TouchPinch, _dt: f64) {
        // A scale of exactly 1 carries no gesture.
        if !self.enabled || event.scale <= 0.0 || event.scale == 1.0 {
            return;
        }
        let step = self.move_speed * PINCH_STEP;
        let dist = if event.scale > 1.0 { -step } else { step };
        Self::translate(camera, self.front() * dist);
    }
}
