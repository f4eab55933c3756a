use glam::{Mat4, Vec3};

use super::basis::ViewBasis;
use super::projection::{Orthographic, Perspective, Projection, ProjectionKind};

/// Camera defined by eye position, target, up vector and a tagged
/// projection.
///
/// Pose fields are public; call [`Camera::update_matrices`] after mutating
/// them so the cached matrices are consistent for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Projection parameters.
    pub projection: Projection,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    view: Mat4,
    proj: Mat4,
    matrix_revision: u64,
}

impl Camera {
    /// Perspective camera at `(0, 0, 5)` looking at the origin.
    #[must_use]
    pub fn perspective(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self::with_projection(
            Projection::Perspective(Perspective { fovy, aspect }),
            znear,
            zfar,
        )
    }

    /// Orthographic camera at `(0, 0, 5)` looking at the origin.
    #[must_use]
    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self::with_projection(
            Projection::Orthographic(Orthographic {
                left,
                right,
                bottom,
                top,
            }),
            znear,
            zfar,
        )
    }

    fn with_projection(projection: Projection, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection,
            znear,
            zfar,
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
            matrix_revision: 0,
        };
        camera.update_matrices();
        camera
    }

    /// Replace the pose and rebuild the matrices.
    #[must_use]
    pub fn with_pose(mut self, eye: Vec3, target: Vec3, up: Vec3) -> Self {
        self.eye = eye;
        self.target = target;
        self.up = up;
        self.update_matrices();
        self
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.eye
    }

    /// Set the eye position.
    pub fn set_position(&mut self, eye: Vec3) {
        self.eye = eye;
    }

    /// Look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Set the look-at target.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Set the up vector.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Which projection this camera uses.
    #[must_use]
    pub fn projection_kind(&self) -> ProjectionKind {
        self.projection.kind()
    }

    /// Perspective parameters, if this is a perspective camera.
    #[must_use]
    pub fn perspective_params(&self) -> Option<&Perspective> {
        match &self.projection {
            Projection::Perspective(p) => Some(p),
            Projection::Orthographic(_) => None,
        }
    }

    /// Mutable perspective parameters, if this is a perspective camera.
    pub fn perspective_params_mut(&mut self) -> Option<&mut Perspective> {
        match &mut self.projection {
            Projection::Perspective(p) => Some(p),
            Projection::Orthographic(_) => None,
        }
    }

    /// Orthographic bounds, if this is an orthographic camera.
    #[must_use]
    pub fn orthographic_params(&self) -> Option<&Orthographic> {
        match &self.projection {
            Projection::Orthographic(o) => Some(o),
            Projection::Perspective(_) => None,
        }
    }

    /// Mutable orthographic bounds, if this is an orthographic camera.
    pub fn orthographic_params_mut(&mut self) -> Option<&mut Orthographic> {
        match &mut self.projection {
            Projection::Orthographic(o) => Some(o),
            Projection::Perspective(_) => None,
        }
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near_plane(&self) -> f32 {
        self.znear
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn far_plane(&self) -> f32 {
        self.zfar
    }

    /// Track a viewport resize. Only perspective cameras change (aspect).
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if let Some(p) = self.perspective_params_mut() {
            p.aspect = width.max(1.0) / height.max(1.0);
        }
    }

    /// View basis of the current pose, using the camera's up vector as the
    /// reference.
    #[must_use]
    pub fn basis(&self) -> ViewBasis {
        ViewBasis::from_pose(self.eye, self.target, self.up)
    }

    /// Rebuild the cached view and projection matrices from the current
    /// pose and projection.
    pub fn update_matrices(&mut self) {
        let basis = self.basis();
        self.view = Mat4::look_to_rh(self.eye, basis.front, basis.up);
        self.proj = self.projection.matrix(self.znear, self.zfar);
        self.matrix_revision = self.matrix_revision.wrapping_add(1);
    }

    /// Cached view matrix as of the last [`Camera::update_matrices`].
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Cached projection matrix as of the last [`Camera::update_matrices`].
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.proj
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.proj * self.view
    }

    /// Number of times the matrices have been rebuilt.
    #[must_use]
    pub fn matrix_revision(&self) -> u64 {
        self.matrix_revision
    }
}
