use glam::Mat4;

/// Which projection a camera uses.
///
/// Manipulators branch on this instead of inspecting concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// Pinhole perspective projection.
    Perspective,
    /// Parallel orthographic projection.
    Orthographic,
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
}

impl Perspective {
    /// Vertical field of view in degrees.
    #[must_use]
    pub fn field_of_view(&self) -> f32 {
        self.fovy
    }

    /// Set the vertical field of view in degrees.
    pub fn set_field_of_view(&mut self, fovy: f32) {
        self.fovy = fovy;
    }
}

/// Orthographic view volume bounds in view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    /// Left edge of the view volume.
    pub left: f32,
    /// Right edge of the view volume.
    pub right: f32,
    /// Bottom edge of the view volume.
    pub bottom: f32,
    /// Top edge of the view volume.
    pub top: f32,
}

impl Orthographic {
    /// Visible width in world units.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Visible height in world units.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// `(left, right, bottom, top)`.
    #[must_use]
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.left, self.right, self.bottom, self.top)
    }

    /// Replace all four edges.
    pub fn set_bounds(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
    }
}

/// Camera projection, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection.
    Perspective(Perspective),
    /// Orthographic projection.
    Orthographic(Orthographic),
}

impl Projection {
    /// The tag of this projection.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Self::Perspective(_) => ProjectionKind::Perspective,
            Self::Orthographic(_) => ProjectionKind::Orthographic,
        }
    }

    /// Build the projection matrix with a [0,1] depth range.
    pub(crate) fn matrix(&self, znear: f32, zfar: f32) -> Mat4 {
        match self {
            Self::Perspective(p) => Mat4::perspective_rh(
                p.fovy.to_radians(),
                p.aspect.max(f32::EPSILON),
                znear,
                zfar,
            ),
            Self::Orthographic(o) => Mat4::orthographic_rh(
                o.left, o.right, o.bottom, o.top, znear, zfar,
            ),
        }
    }
}
