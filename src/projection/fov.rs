//! Four independent half-angles and the off-axis
//! perspective projection built from them.
//!
//! An off-center projection point does not change the total field of
//! view; it redistributes it between the two sides of the optical axis.
//! The two representations (ViewParams and AsymmetricFov) are exact
//! inverses of each other for all valid inputs.

use glam::DMat4;
use super::view_params::ViewParams;

/// Four independent half-angles (radians) measured from the optical
/// axis, as used by VR headset runtimes.
///
/// For valid inputs all four angles are positive and each pair sums to
/// the corresponding symmetric field of view: `up + down == vfov`,
/// `left + right == hfov`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsymmetricFov {
    /// Half-angle above the optical axis
    pub up: f64,
    /// Half-angle below the optical axis
    pub down: f64,
    /// Half-angle left of the optical axis
    pub left: f64,
    /// Half-angle right of the optical axis
    pub right: f64,
}

impl AsymmetricFov {
    /// Create an asymmetric FOV from four half-angles.
    pub fn new(up: f64, down: f64, left: f64, right: f64) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Convert symmetric view parameters into four half-angles.
    ///
    /// The offset angle is the angle the image center moves for a given
    /// fractional offset in screen coordinates:
    /// `offset_y = atan(center_y * 2 * tan(vfov / 2))`.
    /// Exact inverse of [`AsymmetricFov::to_view_params`].
    pub fn from_view_params(params: ViewParams) -> Self {
        let offset_y = (params.center_y * 2.0 * (params.vfov / 2.0).tan()).atan();
        let up = params.vfov / 2.0 + offset_y;
        let down = params.vfov / 2.0 - offset_y;

        let offset_x = (params.center_x * 2.0 * (params.hfov / 2.0).tan()).atan();
        let left = params.hfov / 2.0 + offset_x;
        let right = params.hfov / 2.0 - offset_x;

        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Convert four half-angles back into symmetric view parameters.
    ///
    /// Used when an externally supplied asymmetric FOV (e.g. from a VR
    /// headset runtime) must be expressed as a center-offset view.
    pub fn to_view_params(&self) -> ViewParams {
        let vfov = self.up + self.down;
        let offset_y = self.up - vfov / 2.0;
        let center_y = offset_y.tan() / (2.0 * (vfov / 2.0).tan());

        let hfov = self.right + self.left;
        let offset_x = self.left - hfov / 2.0;
        let center_x = offset_x.tan() / (2.0 * (hfov / 2.0).tan());

        ViewParams {
            center_x,
            center_y,
            vfov,
            hfov,
        }
    }

    /// Fill `out` with the off-axis perspective projection matrix for
    /// these half-angles, column-major, OpenGL clip-space convention.
    ///
    /// Allocation-free variant for render loops: the caller owns the
    /// output array and may reuse it across frames.
    ///
    /// Produces non-finite values when `z_near == z_far` or any
    /// half-angle reaches pi/2 (tan singularity). Inputs are not
    /// clamped; the caller validates upstream.
    pub fn write_projection_matrix(&self, z_near: f64, z_far: f64, out: &mut [f64; 16]) {
        let up_tan = self.up.tan();
        let down_tan = self.down.tan();
        let left_tan = self.left.tan();
        let right_tan = self.right.tan();
        let x_scale = 2.0 / (left_tan + right_tan);
        let y_scale = 2.0 / (up_tan + down_tan);

        out[0] = x_scale;
        out[1] = 0.0;
        out[2] = 0.0;
        out[3] = 0.0;
        out[4] = 0.0;
        out[5] = y_scale;
        out[6] = 0.0;
        out[7] = 0.0;
        out[8] = -((left_tan - right_tan) * x_scale * 0.5);
        out[9] = (up_tan - down_tan) * y_scale * 0.5;
        out[10] = -(z_near + z_far) / (z_far - z_near);
        out[11] = -1.0;
        out[12] = 0.0;
        out[13] = 0.0;
        out[14] = -(2.0 * z_far * z_near) / (z_far - z_near);
        out[15] = 0.0;
    }

    /// Off-axis perspective projection matrix for these half-angles.
    ///
    /// Same contract as [`AsymmetricFov::write_projection_matrix`],
    /// returned as a value.
    pub fn projection_matrix(&self, z_near: f64, z_far: f64) -> DMat4 {
        let mut out = [0.0; 16];
        self.write_projection_matrix(z_near, z_far, &mut out);
        DMat4::from_cols_array(&out)
    }
}

#[cfg(test)]
#[path = "fov_tests.rs"]
mod tests;
