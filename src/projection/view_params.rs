//! User-facing view description.
//!
//! A symmetric field of view plus a fractional offset of the optical
//! center within the frame. Recomputed by the caller whenever the view
//! changes; a plain value type, never retained by the renderer.

use glam::DMat4;
use super::fov::AsymmetricFov;

/// Symmetric view parameters: center offset + vertical/horizontal FOV.
///
/// `center_x`/`center_y` are fractional offsets of the optical center
/// within the frame. Values stay well-behaved in (-0.5, 0.5); beyond
/// that the `tan` arguments of the conversion approach singularities.
/// `vfov`/`hfov` are full fields of view in radians, valid in (0, pi).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Fractional horizontal offset of the optical center
    pub center_x: f64,
    /// Fractional vertical offset of the optical center
    pub center_y: f64,
    /// Vertical field of view in radians
    pub vfov: f64,
    /// Horizontal field of view in radians
    pub hfov: f64,
}

impl ViewParams {
    /// Create view parameters.
    ///
    /// Inputs are not validated; see the module docs.
    pub fn new(center_x: f64, center_y: f64, vfov: f64, hfov: f64) -> Self {
        Self {
            center_x,
            center_y,
            vfov,
            hfov,
        }
    }

    /// Centered view with the given symmetric fields of view.
    pub fn centered(vfov: f64, hfov: f64) -> Self {
        Self::new(0.0, 0.0, vfov, hfov)
    }

    /// Off-axis projection matrix for these parameters.
    ///
    /// Convenience composition of [`AsymmetricFov::from_view_params`] and
    /// [`AsymmetricFov::projection_matrix`]. Stateless; for allocation-free
    /// render loops use [`AsymmetricFov::write_projection_matrix`] with a
    /// caller-owned output array.
    pub fn projection_matrix(&self, z_near: f64, z_far: f64) -> DMat4 {
        AsymmetricFov::from_view_params(*self).projection_matrix(z_near, z_far)
    }
}

#[cfg(test)]
#[path = "view_params_tests.rs"]
mod tests;
