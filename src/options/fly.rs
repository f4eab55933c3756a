use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fly", inline)]
#[serde(default)]
/// First-person fly tuning.
pub struct FlyOptions {
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Mouse-look sensitivity in degrees per pixel.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
}

impl Default for FlyOptions {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            mouse_sensitivity: 0.15,
        }
    }
}
