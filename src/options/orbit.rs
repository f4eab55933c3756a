use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manipulator::ZoomMethod;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit-arcball tuning.
pub struct OrbitOptions {
    /// Multiplier applied to the arcball rotation angle.
    #[schemars(title = "Rotation Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub rotation_speed: f32,
    /// Multiplier applied to the world-per-pixel pan scale.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Exponential decay rate of rotational inertia (1/s).
    #[schemars(title = "Rotation Damping", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub rotation_damping: f32,
    /// Exponential decay rate of pan inertia (1/s).
    #[schemars(title = "Pan Damping", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub pan_damping: f32,
    /// How scroll and pinch zoom the view.
    #[schemars(title = "Zoom Method")]
    pub zoom_method: ZoomMethod,
    /// World up direction used to build the view basis.
    #[schemars(skip)]
    pub world_up: [f32; 3],
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            rotation_speed: 1.0,
            pan_speed: 1.0,
            rotation_damping: 8.0,
            pan_damping: 10.0,
            zoom_method: ZoomMethod::DollyToCoi,
            world_up: [0.0, 1.0, 0.0],
        }
    }
}
