//! Construction of manipulators by kind.

use super::follow::FollowManipulator;
use super::fps_fly::FpsFlyManipulator;
use super::orbit_arcball::OrbitArcballManipulator;
use super::ortho_pan_zoom::OrthoPanZoomManipulator;
use super::traits::CameraManipulator;
use super::types::ManipulatorKind;
use crate::camera::Camera;
use crate::input::{KeyAction, PointerButton, PointerMove, Scroll, TouchPan, TouchPinch};
use crate::options::Options;

/// One of the built-in manipulators.
///
/// The controller holds its active manipulator in this form so callers
/// can reach paradigm-specific API through the `as_*` accessors while the
/// [`CameraManipulator`] impl forwards the shared contract.
#[derive(Debug)]
pub enum Manipulator {
    /// Arcball orbit.
    OrbitArcball(OrbitArcballManipulator),
    /// First-person fly.
    FpsFly(FpsFlyManipulator),
    /// Orthographic pan/zoom.
    OrthoPanZoom(OrthoPanZoomManipulator),
    /// Smoothed follow.
    Follow(FollowManipulator),
}

impl Manipulator {
    /// Build a fresh manipulator of `kind`, tuned by `options`, enabled and
    /// with no camera attached.
    #[must_use]
    pub fn create(kind: ManipulatorKind, options: &Options) -> Self {
        match kind {
            ManipulatorKind::OrbitArcball => {
                Self::OrbitArcball(OrbitArcballManipulator::new(&options.orbit))
            }
            ManipulatorKind::FpsFly => Self::FpsFly(FpsFlyManipulator::new(&options.fly)),
            ManipulatorKind::OrthoPanZoom => {
                Self::OrthoPanZoom(OrthoPanZoomManipulator::new(&options.ortho))
            }
            ManipulatorKind::Follow => Self::Follow(FollowManipulator::new(&options.follow)),
        }
    }

    /// The kind this manipulator was built as.
    #[must_use]
    pub fn kind(&self) -> ManipulatorKind {
        match self {
            Self::OrbitArcball(_) => ManipulatorKind::OrbitArcball,
            Self::FpsFly(_) => ManipulatorKind::FpsFly,
            Self::OrthoPanZoom(_) => ManipulatorKind::OrthoPanZoom,
            Self::Follow(_) => ManipulatorKind::Follow,
        }
    }

    /// The orbit manipulator, if active.
    #[must_use]
    pub fn as_orbit(&self) -> Option<&OrbitArcballManipulator> {
        match self {
            Self::OrbitArcball(m) => Some(m),
            _ => None,
        }
    }

    /// Mutable orbit manipulator, if active.
    pub fn as_orbit_mut(&mut self) -> Option<&mut OrbitArcballManipulator> {
        match self {
            Self::OrbitArcball(m) => Some(m),
            _ => None,
        }
    }

    /// The fly manipulator, if active.
    #[must_use]
    pub fn as_fly(&self) -> Option<&FpsFlyManipulator> {
        match self {
            Self::FpsFly(m) => Some(m),
            _ => None,
        }
    }

    /// Mutable fly manipulator, if active.
    pub fn as_fly_mut(&mut self) -> Option<&mut FpsFlyManipulator> {
        match self {
            Self::FpsFly(m) => Some(m),
            _ => None,
        }
    }

    /// The ortho manipulator, if active.
    #[must_use]
    pub fn as_ortho(&self) -> Option<&OrthoPanZoomManipulator> {
        match self {
            Self::OrthoPanZoom(m) => Some(m),
            _ => None,
        }
    }

    /// Mutable ortho manipulator, if active.
    pub fn as_ortho_mut(&mut self) -> Option<&mut OrthoPanZoomManipulator> {
        match self {
            Self::OrthoPanZoom(m) => Some(m),
            _ => None,
        }
    }

    /// The follow manipulator, if active.
    #[must_use]
    pub fn as_follow(&self) -> Option<&FollowManipulator> {
        match self {
            Self::Follow(m) => Some(m),
            _ => None,
        }
    }

    /// Mutable follow manipulator, if active.
    pub fn as_follow_mut(&mut self) -> Option<&mut FollowManipulator> {
        match self {
            Self::Follow(m) => Some(m),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn CameraManipulator {
        match self {
            Self::OrbitArcball(m) => m,
            Self::FpsFly(m) => m,
            Self::OrthoPanZoom(m) => m,
            Self::Follow(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn CameraManipulator {
        match self {
            Self::OrbitArcball(m) => m,
            Self::FpsFly(m) => m,
            Self::OrthoPanZoom(m) => m,
            Self::Follow(m) => m,
        }
    }
}

impl CameraManipulator for Manipulator {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn supports_perspective(&self) -> bool {
        self.inner().supports_perspective()
    }

    fn supports_orthographic(&self) -> bool {
        self.inner().supports_orthographic()
    }

    fn attach_camera(&mut self, camera: &Camera) {
        self.inner_mut().attach_camera(camera);
    }

    fn detach_camera(&mut self) {
        self.inner_mut().detach_camera();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.inner_mut().set_enabled(enabled);
    }

    fn is_enabled(&self) -> bool {
        self.inner().is_enabled()
    }

    fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.inner_mut().set_viewport_size(width, height);
    }

    fn update(&mut self, camera: &mut Camera, dt: f64) {
        self.inner_mut().update(camera, dt);
    }

    fn handle_pointer_move(&mut self, camera: &mut Camera, event: PointerMove, dt: f64) {
        self.inner_mut().handle_pointer_move(camera, event, dt);
    }

    fn handle_pointer_button(
        &mut self,
        camera: &mut Camera,
        event: PointerButton,
        dt: f64,
    ) {
        self.inner_mut().handle_pointer_button(camera, event, dt);
    }

    fn handle_scroll(&mut self, camera: &mut Camera, event: Scroll, dt: f64) {
        self.inner_mut().handle_scroll(camera, event, dt);
    }

    fn handle_key(&mut self, action: KeyAction, pressed: bool, dt: f64) {
        self.inner_mut().handle_key(action, pressed, dt);
    }

    fn handle_touch_pan(&mut self, camera: &mut Camera, event: TouchPan, dt: f64) {
        self.inner_mut().handle_touch_pan(camera, event, dt);
    }

    fn handle_touch_pinch(&mut self, camera: &mut Camera, event: TouchPinch, dt: f64) {
        self.inner_mut().handle_touch_pinch(camera, event, dt);
    }

    fn scene_scale(&self) -> f32 {
        self.inner().scene_scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manipulator::ZoomMethod;

    const ALL: [ManipulatorKind; 4] = [
        ManipulatorKind::OrbitArcball,
        ManipulatorKind::FpsFly,
        ManipulatorKind::OrthoPanZoom,
        ManipulatorKind::Follow,
    ];

    #[test]
    fn create_builds_each_kind_enabled() {
        let options = Options::default();
        for kind in ALL {
            let m = Manipulator::create(kind, &options);
            assert_eq!(m.kind(), kind);
            assert!(m.is_enabled());
            assert_eq!(m.scene_scale(), 1.0);
        }
    }

    #[test]
    fn projection_support_matrix() {
        let options = Options::default();
        let support = |kind| {
            let m = Manipulator::create(kind, &options);
            (m.supports_perspective(), m.supports_orthographic())
        };
        assert_eq!(support(ManipulatorKind::OrbitArcball), (true, true));
        assert_eq!(support(ManipulatorKind::FpsFly), (true, false));
        assert_eq!(support(ManipulatorKind::OrthoPanZoom), (false, true));
        assert_eq!(support(ManipulatorKind::Follow), (true, true));
    }

    #[test]
    fn options_flow_into_new_manipulators() {
        let mut options = Options::default();
        options.orbit.zoom_method = ZoomMethod::ChangeFov;
        options.fly.move_speed = 7.0;
        let orbit = Manipulator::create(ManipulatorKind::OrbitArcball, &options);
        assert_eq!(
            orbit.as_orbit().map(OrbitArcballManipulator::zoom_method),
            Some(ZoomMethod::ChangeFov)
        );
        assert!(orbit.as_fly().is_none());
        let fly = Manipulator::create(ManipulatorKind::FpsFly, &options);
        assert_eq!(fly.as_fly().map(FpsFlyManipulator::move_speed), Some(7.0));
    }
}
