//! Arcball orbit around a center of interest.

use glam::{Quat, Vec2, Vec3};

use super::arcball::{project_to_arcball, shortest_axis_angle};
use super::inertia::{AngularInertia, LinearInertia};
use super::traits::CameraManipulator;
use super::types::{CenterOfInterestSpace, ViewDirection, ZoomMethod};
use super::viewport::Viewport;
use super::zoom::{
    clamp_zoom_factor, pinch_zoom_factor, scroll_zoom_factor,
    zoom_ortho_about_cursor,
};
use crate::camera::{Camera, Projection, ViewBasis, basis::EPSILON};
use crate::input::{
    KeyAction, MouseButton, PointerButton, PointerMove, Scroll, TouchPan,
    TouchPinch,
};
use crate::options::OrbitOptions;

/// Orbit distance never drops below this.
pub const MIN_ORBIT_DISTANCE: f32 = 0.01;
/// Orbit distance never exceeds this.
pub const MAX_ORBIT_DISTANCE: f32 = 1.0e6;
/// Lower bound of the scene-scale factor.
pub const MIN_SCENE_SCALE: f32 = 1.0e-4;
/// Upper bound of the scene-scale factor.
pub const MAX_SCENE_SCALE: f32 = 1.0e4;
/// Narrowest field of view reachable by FOV zoom, in degrees.
pub const MIN_FOV_DEGREES: f32 = 5.0;
/// Widest field of view reachable by FOV zoom, in degrees.
pub const MAX_FOV_DEGREES: f32 = 120.0;

// Per-move rotations smaller than this do not refresh the release velocity.
const MIN_FRAME_ANGLE: f32 = 1.0e-6;

/// Which drag, if any, is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// No button held.
    Idle,
    /// Arcball rotation.
    Rotating,
    /// Screen-plane pan.
    Panning,
}

#[derive(Debug, Clone, Copy)]
struct RotateSession {
    button: MouseButton,
    arcball_start: Vec3,
    eye_offset: Vec3,
    up: Vec3,
    basis: ViewBasis,
    applied: Quat,
    release: AngularInertia,
}

#[derive(Debug, Clone, Copy)]
struct PanSession {
    button: MouseButton,
    release: LinearInertia,
}

#[derive(Debug, Clone, Copy)]
enum DragState {
    Idle,
    Rotating(RotateSession),
    Panning(PanSession),
}

/// Arcball orbit manipulator.
///
/// The primary button rotates the eye around the center of interest (COI)
/// on a virtual trackball; the secondary and middle buttons (or the
/// primary button with the pan modifier held) slide the COI and eye
/// across the screen plane. Scroll and pinch zoom according to the
/// configured [`ZoomMethod`]. Releasing a drag hands its last velocity to
/// an exponentially decaying inertia that [`CameraManipulator::update`]
/// plays out while no drag is active.
#[derive(Debug, Clone)]
pub struct OrbitArcballManipulator {
    enabled: bool,
    viewport: Viewport,
    world_up: Vec3,
    coi: Vec3,
    orbit_distance: f32,
    scene_scale: f32,
    zoom_method: ZoomMethod,
    rotation_speed: f32,
    pan_speed: f32,
    rotation_damping: f32,
    pan_damping: f32,
    pan_modifier: bool,
    drag: DragState,
    rotation_inertia: AngularInertia,
    pan_inertia: LinearInertia,
}

impl Default for OrbitArcballManipulator {
    fn default() -> Self {
        Self::new(&OrbitOptions::default())
    }
}

impl OrbitArcballManipulator {
    /// Create an orbit manipulator tuned by `options`.
    #[must_use]
    pub fn new(options: &OrbitOptions) -> Self {
        Self {
            enabled: true,
            viewport: Viewport::default(),
            world_up: Vec3::from_array(options.world_up).normalize_or(Vec3::Y),
            coi: Vec3::ZERO,
            orbit_distance: 5.0,
            scene_scale: 1.0,
            zoom_method: options.zoom_method,
            rotation_speed: options.rotation_speed,
            pan_speed: options.pan_speed,
            rotation_damping: options.rotation_damping.max(0.0),
            pan_damping: options.pan_damping.max(0.0),
            pan_modifier: false,
            drag: DragState::Idle,
            rotation_inertia: AngularInertia::default(),
            pan_inertia: LinearInertia::default(),
        }
    }

    /// World up used for the arcball and pan axes and by the view presets.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Set the world up direction. Near-zero vectors are ignored.
    pub fn set_world_up(&mut self, up: Vec3) {
        if up.length() < EPSILON {
            return;
        }
        if let Some(up) = up.try_normalize() {
            self.world_up = up;
        }
    }

    /// Current zoom policy.
    #[must_use]
    pub fn zoom_method(&self) -> ZoomMethod {
        self.zoom_method
    }

    /// Change the zoom policy.
    pub fn set_zoom_method(&mut self, method: ZoomMethod) {
        self.zoom_method = method;
    }

    /// Multiplier on the arcball rotation angle.
    #[must_use]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Set the multiplier on the arcball rotation angle.
    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = speed;
    }

    /// Multiplier on the world-per-pixel pan scale.
    #[must_use]
    pub fn pan_speed(&self) -> f32 {
        self.pan_speed
    }

    /// Set the multiplier on the world-per-pixel pan scale.
    pub fn set_pan_speed(&mut self, speed: f32) {
        self.pan_speed = speed;
    }

    /// Rotation and pan inertia decay rates (1/s).
    #[must_use]
    pub fn damping(&self) -> (f32, f32) {
        (self.rotation_damping, self.pan_damping)
    }

    /// Set the rotation and pan inertia decay rates. Negative rates clamp
    /// to zero.
    pub fn set_damping(&mut self, rotation: f32, pan: f32) {
        self.rotation_damping = rotation.max(0.0);
        self.pan_damping = pan.max(0.0);
    }

    /// Center of interest in world space.
    #[must_use]
    pub fn center_of_interest(&self) -> Vec3 {
        self.coi
    }

    /// Distance from the eye to the center of interest.
    #[must_use]
    pub fn orbit_distance(&self) -> f32 {
        self.orbit_distance
    }

    /// Which drag is in progress.
    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        match self.drag {
            DragState::Idle => DragMode::Idle,
            DragState::Rotating(_) => DragMode::Rotating,
            DragState::Panning(_) => DragMode::Panning,
        }
    }

    /// Current angular inertia speed (rad/s).
    #[must_use]
    pub fn rotation_inertia_speed(&self) -> f32 {
        self.rotation_inertia.speed
    }

    /// Current pan inertia velocity (world units/s).
    #[must_use]
    pub fn pan_inertia_velocity(&self) -> Vec3 {
        self.pan_inertia.velocity
    }

    /// Stop both inertia channels.
    pub fn stop_inertia(&mut self) {
        self.rotation_inertia.stop();
        self.pan_inertia.stop();
    }

    /// Project a cursor position onto the arcball using the basis from the
    /// eye toward the center of interest.
    #[must_use]
    pub fn project_to_arcball_world(&self, camera: &Camera, position: Vec2) -> Vec3 {
        project_to_arcball(position, self.viewport, &self.orbit_basis(camera))
    }

    /// Set the center of interest and retarget the camera at it.
    ///
    /// `space` selects whether `coi` is absolute or an offset from the eye
    /// along (right, up, front). The orbit distance becomes the eye-to-COI
    /// distance, clamped to [`MIN_ORBIT_DISTANCE`]..=[`MAX_ORBIT_DISTANCE`].
    pub fn set_center_of_interest(
        &mut self,
        camera: &mut Camera,
        coi: Vec3,
        space: CenterOfInterestSpace,
    ) {
        self.coi = match space {
            CenterOfInterestSpace::World => coi,
            CenterOfInterestSpace::Camera => {
                camera.eye + self.orbit_basis(camera).to_world(coi)
            }
        };
        self.orbit_distance = (camera.eye - self.coi)
            .length()
            .clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
        self.place_eye(camera);
    }

    /// Move the eye along its current direction to `distance` from the
    /// center of interest.
    pub fn set_orbit_distance(&mut self, camera: &mut Camera, distance: f32) {
        if distance.is_nan() {
            return;
        }
        self.orbit_distance = distance.clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
        self.place_eye(camera);
    }

    /// Snap to a canonical view of the center of interest. Stops inertia.
    pub fn set_view_direction(&mut self, camera: &mut Camera, direction: ViewDirection) {
        let dir = match direction {
            ViewDirection::Front => Vec3::Z,
            ViewDirection::Back => Vec3::NEG_Z,
            ViewDirection::Left => Vec3::NEG_X,
            ViewDirection::Right => Vec3::X,
            ViewDirection::Top => Vec3::Y,
            ViewDirection::Bottom => Vec3::NEG_Y,
            ViewDirection::Iso => Vec3::ONE.normalize(),
        };
        self.stop_inertia();
        camera.eye = self.coi + dir * self.orbit_distance;
        camera.target = self.coi;
        camera.up = self.world_up;
        camera.update_matrices();
    }

    /// Zoom by `factor` (<1 zooms in) anchored at `cursor` for orthographic
    /// bounds zoom.
    ///
    /// The factor is clamped to `[0.01, 100]`. Dolly applies to
    /// perspective cameras only; orthographic cameras under dolly fall
    /// through to bounds zoom. Scene scale never touches the camera.
    pub fn zoom(&mut self, camera: &mut Camera, factor: f32, cursor: Vec2) {
        let Some(factor) = clamp_zoom_factor(factor) else {
            return;
        };
        if self.zoom_method == ZoomMethod::DollyToCoi
            && camera.perspective_params().is_some()
        {
            self.orbit_distance = (self.orbit_distance * factor)
                .clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
            self.place_eye(camera);
            return;
        }
        if self.zoom_method == ZoomMethod::SceneScale {
            self.scene_scale =
                (self.scene_scale * factor).clamp(MIN_SCENE_SCALE, MAX_SCENE_SCALE);
            return;
        }

        let basis = self.orbit_basis(camera);
        let ndc = self.viewport.to_ndc(cursor);
        match &mut camera.projection {
            Projection::Perspective(p) => {
                p.set_field_of_view(
                    (p.field_of_view() * factor).clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES),
                );
            }
            Projection::Orthographic(o) => {
                self.coi = zoom_ortho_about_cursor(o, self.coi, &basis, ndc, factor);
                camera.eye = self.coi - basis.front * self.orbit_distance;
                camera.target = self.coi;
            }
        }
        camera.update_matrices();
    }

    fn orbit_basis(&self, camera: &Camera) -> ViewBasis {
        ViewBasis::from_pose(camera.eye, self.coi, self.world_up)
    }

    fn place_eye(&self, camera: &mut Camera) {
        let dir = (camera.eye - self.coi).try_normalize().unwrap_or(Vec3::Z);
        camera.eye = self.coi + dir * self.orbit_distance;
        camera.target = self.coi;
        camera.update_matrices();
    }

    fn begin_rotate(&mut self, camera: &Camera, button: MouseButton, position: Vec2) {
        let basis = self.orbit_basis(camera);
        self.rotation_inertia.stop();
        self.drag = DragState::Rotating(RotateSession {
            button,
            arcball_start: project_to_arcball(position, self.viewport, &basis),
            eye_offset: camera.eye - self.coi,
            up: camera.up,
            basis,
            applied: Quat::IDENTITY,
            release: AngularInertia::default(),
        });
    }

    fn begin_pan(&mut self, button: MouseButton) {
        self.pan_inertia.stop();
        self.drag = DragState::Panning(PanSession {
            button,
            release: LinearInertia::default(),
        });
    }

    fn end_drag(&mut self, button: MouseButton, dt: f32) {
        match self.drag {
            DragState::Rotating(session) if session.button == button => {
                self.rotation_inertia = if dt > 0.0 {
                    session.release
                } else {
                    AngularInertia::default()
                };
            }
            DragState::Panning(session) if session.button == button => {
                self.pan_inertia = if dt > 0.0 {
                    session.release
                } else {
                    LinearInertia::default()
                };
            }
            _ => return,
        }
        self.drag = DragState::Idle;
    }

    fn drag_rotate(&mut self, camera: &mut Camera, position: Vec2, dt: f32) {
        let coi = self.coi;
        let viewport = self.viewport;
        let speed = self.rotation_speed;
        let DragState::Rotating(session) = &mut self.drag else {
            return;
        };

        let current = project_to_arcball(position, viewport, &session.basis);
        let (axis, angle) =
            shortest_axis_angle(Quat::from_rotation_arc(session.arcball_start, current));
        let angle = angle * speed;
        let rotation = if angle.abs() < EPSILON || !angle.is_finite() {
            Quat::IDENTITY
        } else {
            Quat::from_axis_angle(axis, angle)
        };

        camera.eye = coi + rotation * session.eye_offset;
        camera.target = coi;
        camera.up = rotation * session.up;
        camera.update_matrices();

        let (frame_axis, frame_angle) =
            shortest_axis_angle(rotation * session.applied.inverse());
        session.applied = rotation;
        if dt > 0.0 && frame_angle > MIN_FRAME_ANGLE {
            session.release = AngularInertia::from_frame_delta(frame_axis, frame_angle, dt);
        }
    }

    fn world_per_pixel(&self, camera: &Camera) -> Vec2 {
        match &camera.projection {
            Projection::Perspective(p) => {
                let depth = self.orbit_distance.max(MIN_ORBIT_DISTANCE);
                let half_fov = p.field_of_view().to_radians() * 0.5;
                Vec2::splat(2.0 * depth * half_fov.tan() / self.viewport.height())
            }
            Projection::Orthographic(o) => Vec2::new(
                o.width() / self.viewport.width(),
                o.height() / self.viewport.height(),
            ),
        }
    }

    /// Slide COI and eye by a pixel delta. Returns the velocity implied
    /// by the move.
    fn pan_by(&mut self, camera: &mut Camera, delta_px: Vec2, dt: f32) -> LinearInertia {
        let basis = self.orbit_basis(camera);
        let scale = self.world_per_pixel(camera) * self.pan_speed;
        let delta = basis.right * (-delta_px.x * scale.x) + basis.up * (delta_px.y * scale.y);
        if !delta.is_finite() {
            return LinearInertia::default();
        }
        self.coi += delta;
        camera.eye += delta;
        camera.target = self.coi;
        camera.update_matrices();
        LinearInertia::from_frame_delta(delta, dt)
    }

    fn apply_inertia(&mut self, camera: &mut Camera, dt: f32) {
        let mut moved = false;
        if let Some(rotation) = self.rotation_inertia.step(self.rotation_damping, dt) {
            camera.eye = self.coi + rotation * (camera.eye - self.coi);
            camera.up = rotation * camera.up;
            moved = true;
        }
        if let Some(delta) = self.pan_inertia.step(self.pan_damping, dt) {
            self.coi += delta;
            camera.eye += delta;
            moved = true;
        }
        if moved {
            camera.target = self.coi;
            camera.update_matrices();
        }
    }
}

impl CameraManipulator for OrbitArcballManipulator {
    fn name(&self) -> &'static str {
        "orbit-arcball"
    }

    fn supports_perspective(&self) -> bool {
        true
    }

    fn supports_orthographic(&self) -> bool {
        true
    }

    fn attach_camera(&mut self, camera: &Camera) {
        self.coi = camera.target;
        self.orbit_distance = (camera.eye - self.coi)
            .length()
            .clamp(MIN_ORBIT_DISTANCE, MAX_ORBIT_DISTANCE);
    }

    fn detach_camera(&mut self) {
        self.drag = DragState::Idle;
        self.stop_inertia();
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
        if !self.enabled || dt <= 0.0 {
            return;
        }
        if matches!(self.drag, DragState::Idle) {
            self.apply_inertia(camera, dt as f32);
        }
    }

    fn handle_pointer_move(&mut self, camera: &mut Camera, event: PointerMove, dt: f64) {
        if !self.enabled {
            return;
        }
        let dt = dt as f32;
        match self.drag {
            DragState::Rotating(_) => self.drag_rotate(camera, event.position, dt),
            DragState::Panning(_) => {
                let release = self.pan_by(camera, event.delta, dt);
                if let DragState::Panning(session) = &mut self.drag {
                    if dt > 0.0 {
                        session.release = release;
                    }
                }
            }
            DragState::Idle => {}
        }
    }

    fn handle_pointer_button(
        &mut self,
        camera: &mut Camera,
        event: PointerButton,
        dt: f64,
    ) {
        if !self.enabled {
            return;
        }
        if !event.pressed {
            self.end_drag(event.button, dt as f32);
            return;
        }
        if !matches!(self.drag, DragState::Idle) {
            return;
        }
        match event.button {
            MouseButton::Left if self.pan_modifier => self.begin_pan(event.button),
            MouseButton::Left => self.begin_rotate(camera, event.button, event.position),
            MouseButton::Right | MouseButton::Middle => self.begin_pan(event.button),
            MouseButton::Other(_) => {}
        }
    }

    fn handle_scroll(&mut self, camera: &mut Camera, event: Scroll, _dt: f64) {
        if !self.enabled {
            return;
        }
        if let Some(factor) = scroll_zoom_factor(event.delta.y) {
            self.zoom(camera, factor, event.position);
        }
    }

    fn handle_key(&mut self, action: KeyAction, pressed: bool, _dt: f64) {
        if self.enabled && action == KeyAction::PanModifier {
            self.pan_modifier = pressed;
        }
    }

    fn handle_touch_pan(&mut self, camera: &mut Camera, event: TouchPan, dt: f64) {
        if !self.enabled {
            return;
        }
        let dt = dt as f32;
        let release = self.pan_by(camera, event.delta, dt);
        if dt > 0.0 {
            self.pan_inertia = release;
        }
    }

    fn handle_touch_pinch(&mut self, camera: &mut Camera, event: TouchPinch, _dt: f64) {
        if !self.enabled {
            return;
        }
        if let Some(factor) = pinch_zoom_factor(event.scale) {
            self.zoom(camera, factor, event.center);
        }
    }

    fn scene_scale(&self) -> f32 {
        self.scene_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn perspective_camera() -> Camera {
        Camera::perspective(60.0, 800.0 / 600.0, 0.1, 100.0).with_pose(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        )
    }

    fn ortho_camera() -> Camera {
        Camera::orthographic(-4.0, 4.0, -3.0, 3.0, 0.1, 100.0).with_pose(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
        )
    }

    fn attached(camera: &Camera) -> OrbitArcballManipulator {
        let mut orbit = OrbitArcballManipulator::default();
        orbit.set_viewport_size(800.0, 600.0);
        orbit.attach_camera(camera);
        orbit
    }

    fn press(button: MouseButton, x: f32, y: f32) -> PointerButton {
        PointerButton {
            button,
            pressed: true,
            position: Vec2::new(x, y),
        }
    }

    fn release(button: MouseButton, x: f32, y: f32) -> PointerButton {
        PointerButton {
            pressed: false,
            ..press(button, x, y)
        }
    }

    fn move_to(x: f32, y: f32, dx: f32, dy: f32) -> PointerMove {
        PointerMove {
            position: Vec2::new(x, y),
            delta: Vec2::new(dx, dy),
        }
    }

    fn scroll(y: f32) -> Scroll {
        Scroll {
            delta: Vec2::new(0.0, y),
            position: Vec2::new(400.0, 300.0),
        }
    }

    #[test]
    fn attach_syncs_coi_and_distance() {
        let camera = perspective_camera().with_pose(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::Y,
        );
        let orbit = attached(&camera);
        assert_eq!(orbit.center_of_interest(), Vec3::new(1.0, 2.0, 0.0));
        assert!((orbit.orbit_distance() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn scroll_up_dollies_toward_coi() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_scroll(&mut camera, scroll(1.0), DT);
        assert!((orbit.orbit_distance() - 4.5).abs() < 1e-5);
        assert!((camera.eye - Vec3::new(0.0, 0.0, 4.5)).length() < 1e-5);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn scroll_down_dollies_away_and_zero_scroll_is_noop() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_scroll(&mut camera, scroll(-2.0), DT);
        assert!((orbit.orbit_distance() - 5.5).abs() < 1e-5);

        let before = camera.clone();
        orbit.handle_scroll(&mut camera, scroll(0.0), DT);
        assert_eq!(camera, before);
    }

    #[test]
    fn dolly_respects_distance_floor() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        for _ in 0..200 {
            orbit.zoom(&mut camera, 0.01, Vec2::ZERO);
        }
        assert!((orbit.orbit_distance() - MIN_ORBIT_DISTANCE).abs() < 1e-7);
        assert!(camera.eye.is_finite());
    }

    #[test]
    fn scene_scale_zoom_leaves_camera_alone() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.set_zoom_method(ZoomMethod::SceneScale);
        let before = camera.clone();
        orbit.handle_scroll(&mut camera, scroll(1.0), DT);
        assert_eq!(camera, before);
        assert!((orbit.scene_scale() - 0.9).abs() < 1e-6);

        for _ in 0..500 {
            orbit.zoom(&mut camera, 100.0, Vec2::ZERO);
        }
        assert_eq!(orbit.scene_scale(), MAX_SCENE_SCALE);
    }

    #[test]
    fn fov_zoom_clamps_field_of_view() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.set_zoom_method(ZoomMethod::ChangeFov);
        orbit.zoom(&mut camera, 0.5, Vec2::ZERO);
        assert_eq!(camera.perspective_params().map(|p| p.fovy), Some(30.0));
        orbit.zoom(&mut camera, 0.01, Vec2::ZERO);
        assert_eq!(
            camera.perspective_params().map(|p| p.fovy),
            Some(MIN_FOV_DEGREES)
        );
        orbit.zoom(&mut camera, 100.0, Vec2::ZERO);
        assert_eq!(
            camera.perspective_params().map(|p| p.fovy),
            Some(MAX_FOV_DEGREES)
        );
    }

    #[test]
    fn ortho_dolly_falls_back_to_bounds_zoom() {
        let mut camera = ortho_camera();
        let mut orbit = attached(&camera);
        orbit.handle_touch_pinch(
            &mut camera,
            TouchPinch {
                scale: 2.0,
                center: Vec2::new(400.0, 300.0),
            },
            DT,
        );
        assert_eq!(
            camera.orthographic_params().map(|o| o.bounds()),
            Some((-2.0, 2.0, -1.5, 1.5))
        );
        assert!(orbit.center_of_interest().length() < 1e-6);
        assert!((camera.eye - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn zero_delta_rotate_keeps_pose() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        let before = camera.clone();
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Left, 300.0, 200.0), DT);
        orbit.handle_pointer_move(&mut camera, move_to(300.0, 200.0, 0.0, 0.0), DT);
        assert!((camera.eye - before.eye).length() < 1e-5);
        assert!((camera.up - before.up).length() < 1e-5);
        assert_eq!(camera.target, before.target);
    }

    #[test]
    fn rotate_preserves_distance_and_target() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Left, 400.0, 300.0), DT);
        assert_eq!(orbit.drag_mode(), DragMode::Rotating);
        orbit.handle_pointer_move(&mut camera, move_to(500.0, 250.0, 100.0, -50.0), DT);
        assert!((camera.eye.length() - 5.0).abs() < 1e-4);
        assert!(camera.eye.x.abs() > 1e-3);
        assert_eq!(camera.target, Vec3::ZERO);
        assert!((camera.up.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn rotate_inertia_settles_and_stops_touching_camera() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Left, 400.0, 300.0), DT);
        orbit.handle_pointer_move(&mut camera, move_to(420.0, 300.0, 20.0, 0.0), DT);
        orbit.handle_pointer_move(&mut camera, move_to(440.0, 300.0, 20.0, 0.0), DT);
        orbit.handle_pointer_button(&mut camera, release(MouseButton::Left, 440.0, 300.0), DT);
        assert_eq!(orbit.drag_mode(), DragMode::Idle);
        assert!(orbit.rotation_inertia_speed() > 0.0);

        let mut updates = 0;
        while orbit.rotation_inertia_speed() != 0.0 {
            orbit.update(&mut camera, DT);
            updates += 1;
            assert!(updates < 10_000, "inertia never settled");
        }
        let revision = camera.matrix_revision();
        let pose = camera.clone();
        for _ in 0..10 {
            orbit.update(&mut camera, DT);
        }
        assert_eq!(camera.matrix_revision(), revision);
        assert_eq!(camera, pose);
    }

    #[test]
    fn release_with_zero_dt_leaves_no_inertia() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Left, 400.0, 300.0), DT);
        orbit.handle_pointer_move(&mut camera, move_to(450.0, 300.0, 50.0, 0.0), DT);
        orbit.handle_pointer_button(&mut camera, release(MouseButton::Left, 450.0, 300.0), 0.0);
        assert_eq!(orbit.rotation_inertia_speed(), 0.0);
    }

    #[test]
    fn right_drag_pans_coi_and_eye_together() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Right, 400.0, 300.0), DT);
        assert_eq!(orbit.drag_mode(), DragMode::Panning);
        orbit.handle_pointer_move(&mut camera, move_to(410.0, 300.0, 10.0, 0.0), DT);

        // Dragging right moves the view left.
        assert!(orbit.center_of_interest().x < 0.0);
        assert!((camera.eye - camera.target - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
        assert_eq!(camera.target, orbit.center_of_interest());

        let half_fov = 30.0_f32.to_radians();
        let expected = 2.0 * 5.0 * half_fov.tan() / 600.0 * 10.0;
        assert!((orbit.center_of_interest().x + expected).abs() < 1e-5);
    }

    #[test]
    fn ortho_pan_scale_follows_bounds() {
        let mut camera = ortho_camera();
        let mut orbit = attached(&camera);
        orbit.handle_touch_pan(&mut camera, TouchPan { delta: Vec2::new(100.0, 0.0) }, DT);
        // 8 world units over 800 px.
        assert!((orbit.center_of_interest().x + 1.0).abs() < 1e-5);
    }

    #[test]
    fn pan_release_hands_velocity_to_inertia() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Middle, 400.0, 300.0), DT);
        orbit.handle_pointer_move(&mut camera, move_to(400.0, 320.0, 0.0, 20.0), DT);
        orbit.handle_pointer_button(&mut camera, release(MouseButton::Middle, 400.0, 320.0), DT);
        assert!(orbit.pan_inertia_velocity().y > 0.0);

        let coi = orbit.center_of_interest();
        orbit.update(&mut camera, DT);
        assert!(orbit.center_of_interest().y > coi.y);
    }

    #[test]
    fn drags_are_mutually_exclusive() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Left, 400.0, 300.0), DT);
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Right, 400.0, 300.0), DT);
        assert_eq!(orbit.drag_mode(), DragMode::Rotating);
        orbit.handle_pointer_button(&mut camera, release(MouseButton::Right, 400.0, 300.0), DT);
        assert_eq!(orbit.drag_mode(), DragMode::Rotating);
        orbit.handle_pointer_button(&mut camera, release(MouseButton::Left, 400.0, 300.0), DT);
        assert_eq!(orbit.drag_mode(), DragMode::Idle);
    }

    #[test]
    fn pan_modifier_turns_primary_drag_into_pan() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_key(KeyAction::PanModifier, true, DT);
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Left, 400.0, 300.0), DT);
        assert_eq!(orbit.drag_mode(), DragMode::Panning);
        orbit.handle_pointer_button(&mut camera, release(MouseButton::Left, 400.0, 300.0), DT);
        assert_eq!(orbit.drag_mode(), DragMode::Idle);
    }

    #[test]
    fn view_presets_place_eye_on_axis() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.set_view_direction(&mut camera, ViewDirection::Right);
        assert!((camera.eye - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
        orbit.set_view_direction(&mut camera, ViewDirection::Iso);
        let expected = Vec3::ONE.normalize() * 5.0;
        assert!((camera.eye - expected).length() < 1e-5);
        orbit.set_view_direction(&mut camera, ViewDirection::Top);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn set_coi_updates_distance_with_floor() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.set_center_of_interest(&mut camera, Vec3::new(0.0, 0.0, 1.0), CenterOfInterestSpace::World);
        assert!((orbit.orbit_distance() - 4.0).abs() < 1e-5);
        assert_eq!(camera.target, Vec3::new(0.0, 0.0, 1.0));

        let eye = camera.eye;
        orbit.set_center_of_interest(&mut camera, eye, CenterOfInterestSpace::World);
        assert_eq!(orbit.orbit_distance(), MIN_ORBIT_DISTANCE);
        let gap = (camera.eye - orbit.center_of_interest()).length();
        assert!((gap - MIN_ORBIT_DISTANCE).abs() < 1e-5);
    }

    #[test]
    fn far_camera_distance_is_clamped_on_attach() {
        let camera = perspective_camera().with_pose(
            Vec3::new(0.0, 0.0, 2.0e6),
            Vec3::ZERO,
            Vec3::Y,
        );
        let mut orbit = attached(&camera);
        assert_eq!(orbit.orbit_distance(), MAX_ORBIT_DISTANCE);

        let mut camera = perspective_camera();
        orbit.attach_camera(&camera);
        orbit.set_center_of_interest(
            &mut camera,
            Vec3::new(0.0, 0.0, -3.0e6),
            CenterOfInterestSpace::World,
        );
        assert_eq!(orbit.orbit_distance(), MAX_ORBIT_DISTANCE);
        assert!(camera.eye.is_finite());
    }

    #[test]
    fn rolled_camera_pans_along_world_up_basis() {
        let mut camera = perspective_camera().with_pose(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::X,
        );
        let mut orbit = attached(&camera);
        orbit.handle_touch_pan(&mut camera, TouchPan { delta: Vec2::new(10.0, 0.0) }, DT);
        let coi = orbit.center_of_interest();
        assert!(coi.x < 0.0);
        assert!(coi.y.abs() < 1e-6);
        assert!(coi.z.abs() < 1e-6);
    }

    #[test]
    fn world_up_steers_pan_axes() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.set_world_up(Vec3::NEG_X);
        orbit.handle_touch_pan(&mut camera, TouchPan { delta: Vec2::new(0.0, 10.0) }, DT);
        // Screen up is now world -X.
        let coi = orbit.center_of_interest();
        assert!(coi.x < 0.0);
        assert!(coi.y.abs() < 1e-6);
    }

    #[test]
    fn camera_space_coi_is_relative_to_eye() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.set_center_of_interest(&mut camera, Vec3::new(0.0, 0.0, 2.0), CenterOfInterestSpace::Camera);
        assert!((orbit.center_of_interest() - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
        assert!((orbit.orbit_distance() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn disabled_ignores_input_and_update() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.set_enabled(false);
        let before = camera.clone();
        orbit.handle_scroll(&mut camera, scroll(1.0), DT);
        orbit.handle_pointer_button(&mut camera, press(MouseButton::Left, 400.0, 300.0), DT);
        orbit.handle_pointer_move(&mut camera, move_to(500.0, 300.0, 100.0, 0.0), DT);
        orbit.update(&mut camera, DT);
        assert_eq!(camera, before);
        assert_eq!(orbit.drag_mode(), DragMode::Idle);
        assert!(!orbit.is_enabled());
    }

    #[test]
    fn non_positive_dt_update_is_noop() {
        let mut camera = perspective_camera();
        let mut orbit = attached(&camera);
        orbit.handle_touch_pan(&mut camera, TouchPan { delta: Vec2::new(5.0, 0.0) }, DT);
        let before = camera.clone();
        orbit.update(&mut camera, 0.0);
        orbit.update(&mut camera, -1.0);
        assert_eq!(camera, before);
    }
}
