//! Navigation paradigms.
//!
//! Every paradigm implements [`CameraManipulator`]. [`Manipulator`] wraps
//! the built-in ones so the controller can switch between them by
//! [`ManipulatorKind`] without boxing.

mod arcball;
mod factory;
mod follow;
mod fps_fly;
mod inertia;
mod orbit_arcball;
mod ortho_pan_zoom;
mod traits;
mod types;
mod viewport;
mod zoom;

pub use arcball::project_to_arcball;
pub use factory::Manipulator;
pub use follow::{FollowManipulator, MIN_OFFSET_DEPTH, TargetProvider};
pub use fps_fly::{FpsFlyManipulator, PITCH_LIMIT_DEGREES};
pub use inertia::{AngularInertia, INERTIA_EPSILON, LinearInertia, MAX_ANGULAR_SPEED};
pub use orbit_arcball::{
    DragMode, MAX_FOV_DEGREES, MAX_ORBIT_DISTANCE, MAX_SCENE_SCALE,
    MIN_FOV_DEGREES, MIN_ORBIT_DISTANCE, MIN_SCENE_SCALE,
    OrbitArcballManipulator,
};
pub use ortho_pan_zoom::OrthoPanZoomManipulator;
pub use traits::CameraManipulator;
pub use types::{CenterOfInterestSpace, ManipulatorKind, ViewDirection, ZoomMethod};
pub use viewport::Viewport;
pub use zoom::{
    MAX_ZOOM_FACTOR, MIN_ORTHO_HALF_EXTENT, MIN_ZOOM_FACTOR, SCROLL_ZOOM_IN,
    SCROLL_ZOOM_OUT,
};
