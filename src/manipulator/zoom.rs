//! Zoom factors and limits shared by the manipulators.

use glam::{Vec2, Vec3};

use crate::camera::{Orthographic, ViewBasis};

/// Smallest zoom factor accepted per step.
pub const MIN_ZOOM_FACTOR: f32 = 0.01;
/// Largest zoom factor accepted per step.
pub const MAX_ZOOM_FACTOR: f32 = 100.0;
/// Factor applied for one scroll step toward the scene.
pub const SCROLL_ZOOM_IN: f32 = 0.9;
/// Factor applied for one scroll step away from the scene.
pub const SCROLL_ZOOM_OUT: f32 = 1.1;
/// Orthographic half-extents never shrink below this.
pub const MIN_ORTHO_HALF_EXTENT: f32 = 1.0e-6;

/// Clamp a zoom factor into the accepted range. NaN is rejected.
#[must_use]
pub(crate) fn clamp_zoom_factor(factor: f32) -> Option<f32> {
    if factor.is_nan() {
        None
    } else {
        Some(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
    }
}

/// Zoom factor for a vertical scroll amount; `None` when there is none.
#[must_use]
pub(crate) fn scroll_zoom_factor(scroll_y: f32) -> Option<f32> {
    if scroll_y > 0.0 {
        Some(SCROLL_ZOOM_IN)
    } else if scroll_y < 0.0 {
        Some(SCROLL_ZOOM_OUT)
    } else {
        None
    }
}

/// Zoom factor for a pinch scale (`1 / scale`); `None` for non-positive
/// scales.
#[must_use]
pub(crate) fn pinch_zoom_factor(scale: f32) -> Option<f32> {
    if scale > 0.0 {
        Some(scale.recip())
    } else {
        None
    }
}

/// Scale orthographic bounds about the world point under the cursor.
///
/// `center` is the world point at the middle of the view and `ndc` the
/// cursor in normalized device coordinates. The bounds become symmetric
/// with half-extents scaled by `factor` and floored at
/// [`MIN_ORTHO_HALF_EXTENT`]; the returned point is the new
/// view center that keeps the cursor's world point fixed on screen.
pub(crate) fn zoom_ortho_about_cursor(
    ortho: &mut Orthographic,
    center: Vec3,
    basis: &ViewBasis,
    ndc: Vec2,
    factor: f32,
) -> Vec3 {
    let half_w = ortho.width() * 0.5;
    let half_h = ortho.height() * 0.5;
    let anchor = center + basis.right * (ndc.x * half_w) + basis.up * (ndc.y * half_h);

    let new_half_w = (half_w * factor).max(MIN_ORTHO_HALF_EXTENT);
    let new_half_h = (half_h * factor).max(MIN_ORTHO_HALF_EXTENT);
    ortho.set_bounds(-new_half_w, new_half_w, -new_half_h, new_half_h);

    anchor - basis.right * (ndc.x * new_half_w) - basis.up * (ndc.y * new_half_h)
}
