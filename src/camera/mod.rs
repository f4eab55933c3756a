//! Camera collaborator driven by the manipulators.
//!
//! Holds the pose (eye, target, up), a tagged perspective/orthographic
//! projection, and cached matrices rebuilt on demand.

/// Orthonormal view basis with degenerate-pose fallbacks.
pub mod basis;
/// Core camera struct and matrix caching.
pub mod core;
/// Projection variants and the projection-kind tag.
pub mod projection;

pub use self::basis::ViewBasis;
pub use self::core::Camera;
pub use self::projection::{
    Orthographic, Perspective, Projection, ProjectionKind,
};
