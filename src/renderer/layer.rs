//! View and Layer collaborator traits plus per-layer visual effects.
//!
//! A layer describes one render pass: the view supplying the projection
//! matrix and the pixel effects to apply. Layers live for one pass
//! (start → N tile draws → end) and are not retained across frames.

use glam::{DMat4, Mat4, Vec4};

/// Source of the projection matrix for a layer.
///
/// Implemented by the caller's view model, typically on top of
/// [`crate::projection::ViewParams`].
pub trait View {
    /// Current projection matrix (column-major, OpenGL clip space).
    fn projection(&self) -> DMat4;
}

/// One rendering pass: a view plus visual effects.
///
/// `&self` throughout since the renderer only reads from the layer.
pub trait Layer {
    /// View supplying the projection matrix for this pass.
    fn view(&self) -> &dyn View;

    /// Visual effects to apply to every tile in this pass.
    fn effects(&self) -> Effects;
}

/// Normalized sub-rectangle of the panorama texture to sample from.
///
/// Used when a tile image carries padding or when a layer shows only a
/// part of the full equirectangular image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureCrop {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TextureCrop {
    /// The full texture: `[0, 0, 1, 1]`.
    pub const FULL: TextureCrop = TextureCrop {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };
}

/// Per-layer pixel effects, uploaded once per pass.
#[derive(Debug, Clone, Copy)]
pub struct Effects {
    /// Opacity multiplier in `[0, 1]`
    pub opacity: f32,
    /// Additive RGBA offset applied after the color matrix
    pub color_offset: Vec4,
    /// 4x4 color transform applied to the sampled RGBA color
    pub color_matrix: Mat4,
    /// Texture crop; `None` means the full texture
    pub texture_crop: Option<TextureCrop>,
}

impl Effects {
    /// Crop to upload: the explicit crop or the full texture.
    pub fn effective_crop(&self) -> TextureCrop {
        self.texture_crop.unwrap_or(TextureCrop::FULL)
    }
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            color_offset: Vec4::ZERO,
            color_matrix: Mat4::IDENTITY,
            texture_crop: None,
        }
    }
}

#[cfg(test)]
#[path = "layer_tests.rs"]
mod tests;
