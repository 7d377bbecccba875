//! Texture trait, texture descriptor, and texture info

/// Descriptor for creating a 2D RGBA8 texture
///
/// Tiles arrive already decoded; the caller creates one texture per
/// tile image and hands it to the renderer at draw time.
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Optional initial RGBA8 pixel data (`width * height * 4` bytes)
    pub data: Option<Vec<u8>>,
}

/// Read-only properties of a created texture.
///
/// Returned by `Texture::info()` to query texture properties without
/// exposing backend-specific details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Texture resource trait
///
/// Implemented by backend-specific texture types. The GPU handle is
/// released when the last reference is dropped.
pub trait Texture: Send + Sync {
    /// Properties of this texture
    fn info(&self) -> &TextureInfo;
}
