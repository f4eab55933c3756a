use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ortho Pan/Zoom", inline)]
#[serde(default)]
/// Orthographic pan/zoom tuning.
pub struct OrthoOptions {
    /// Exponential decay rate of pan inertia (1/s).
    #[schemars(title = "Pan Damping", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub pan_damping: f32,
}

impl Default for OrthoOptions {
    fn default() -> Self {
        Self { pan_damping: 10.0 }
    }
}
