//! Viewport clamping and the compensation matrix.
//!
//! The target rectangle of a layer may extend outside the framebuffer
//! (letterboxing, per-eye VR clipping). GL viewports cannot, so the
//! rectangle is clamped to the framebuffer and a clip-space scale +
//! translate compensates, placing geometry exactly where the unclamped
//! viewport would have put it.

use glam::{Mat4, Vec4};
use crate::graphics::PixelRect;

/// Clamp `rect` to the framebuffer and compute the viewport-clamp
/// compensation matrix.
///
/// Returns the clamped rectangle (to pass to `set_viewport`) and the
/// matrix to upload. The matrix is the identity when `rect` lies fully
/// inside the framebuffer.
pub(crate) fn clamp_to_framebuffer(rect: PixelRect, framebuffer: (u32, u32)) -> (PixelRect, Mat4) {
    let (fb_width, fb_height) = (framebuffer.0 as i64, framebuffer.1 as i64);

    let (clamped_x, clamped_width, scale_x, offset_x) =
        clamp_axis(rect.x as i64, rect.width as i64, fb_width);
    let (clamped_y, clamped_height, scale_y, offset_y) =
        clamp_axis(rect.y as i64, rect.height as i64, fb_height);

    let clamped = PixelRect {
        x: clamped_x as i32,
        y: clamped_y as i32,
        width: clamped_width as u32,
        height: clamped_height as u32,
    };

    let matrix = Mat4::from_cols(
        Vec4::new(scale_x, 0.0, 0.0, 0.0),
        Vec4::new(0.0, scale_y, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(offset_x, offset_y, 0.0, 1.0),
    );

    (clamped, matrix)
}

/// Clamp one axis and derive the NDC compensation.
///
/// A point at NDC coordinate `u` of the requested span maps to pixel
/// `start + (u + 1)/2 * size`; re-expressed in the clamped span this is
/// `u * (size / clamped_size) + (2*start + size - 2*clamped_start - clamped_size) / clamped_size`.
fn clamp_axis(start: i64, size: i64, limit: i64) -> (i64, i64, f32, f32) {
    let clamped_start = start.clamp(0, limit);
    let clamped_end = (start + size).clamp(0, limit);
    let clamped_size = clamped_end - clamped_start;

    if clamped_size == size && clamped_start == start {
        return (clamped_start, clamped_size, 1.0, 0.0);
    }
    if clamped_size == 0 {
        // Fully off-screen: a zero viewport draws nothing
        return (clamped_start, 0, 1.0, 0.0);
    }

    let scale = size as f32 / clamped_size as f32;
    let offset =
        (2 * start + size - 2 * clamped_start - clamped_size) as f32 / clamped_size as f32;
    (clamped_start, clamped_size, scale, offset)
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
