use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Follow", inline)]
#[serde(default)]
/// Follow-camera tuning.
pub struct FollowOptions {
    /// Smoothing rate toward the desired eye position (1/s).
    #[schemars(title = "Damping", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub damping: f32,
    /// Eye offset from the followed target, in world space.
    #[schemars(skip)]
    pub offset: [f32; 3],
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            damping: 8.0,
            offset: [0.0, 1.0, 5.0],
        }
    }
}
