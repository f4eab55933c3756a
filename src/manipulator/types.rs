//! Mode, zoom and view-direction tags.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Navigation paradigm tag used to construct a manipulator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ManipulatorKind {
    /// Arcball orbit around a center of interest.
    #[default]
    OrbitArcball,
    /// First-person WASD fly with mouse look.
    FpsFly,
    /// Orthographic pan and cursor-anchored zoom.
    OrthoPanZoom,
    /// Smoothed chase of a target point.
    Follow,
}

/// Coordinate space of a center-of-interest argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CenterOfInterestSpace {
    /// Absolute world coordinates.
    World,
    /// Offset from the eye along (right, up, front).
    Camera,
}

/// Canonical view presets for the orbit manipulator.
///
/// Each names the side of the center of interest the eye is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewDirection {
    /// Eye on +Z.
    Front,
    /// Eye on -Z.
    Back,
    /// Eye on -X.
    Left,
    /// Eye on +X.
    Right,
    /// Eye on +Y.
    Top,
    /// Eye on -Y.
    Bottom,
    /// Eye on the (1, 1, 1) diagonal.
    Iso,
}

/// How the orbit manipulator interprets scroll and pinch.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMethod {
    /// Move the eye toward/away from the center of interest (perspective
    /// only; orthographic cameras fall back to bounds zoom).
    #[default]
    DollyToCoi,
    /// Leave the camera alone and scale an external scene-scale factor.
    SceneScale,
    /// Narrow/widen the field of view, or the orthographic bounds.
    ChangeFov,
}
