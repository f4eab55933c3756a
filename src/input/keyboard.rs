use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Navigation actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "move_forward"
/// ShiftLeft = "pan_modifier"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fly along the look direction.
    MoveForward,
    /// Fly against the look direction.
    MoveBackward,
    /// Strafe toward screen left.
    StrafeLeft,
    /// Strafe toward screen right.
    StrafeRight,
    /// Descend along world down.
    MoveDown,
    /// Ascend along world up.
    MoveUp,
    /// While held, a primary-button orbit drag pans instead of rotating.
    PanModifier,
}
