//! Viewport dimensions and pixel-to-NDC mapping.

use glam::Vec2;

/// Viewport size in pixels, each dimension floored at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    /// Create a viewport, flooring both dimensions at 1.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: floor_dimension(width),
            height: floor_dimension(height),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Pixel coordinates (origin top-left, y down) to normalized device
    /// coordinates (origin center, y up).
    #[must_use]
    pub fn to_ndc(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            2.0 * position.x / self.width - 1.0,
            1.0 - 2.0 * position.y / self.height,
        )
    }
}

// NaN also floors to 1.
fn floor_dimension(value: f32) -> f32 {
    if value >= 1.0 {
        value
    } else {
        1.0
    }
}
