//! Tile renderer for equirectangular panoramas.
//!
//! One `EquirectRenderer` instance per panorama view. The caller drives
//! it frame by frame: `start_layer`, zero or more `render_tile` calls,
//! `end_layer`, for each layer in stacking order. Tile selection, tile
//! fetching, and view interaction all live outside this crate.

mod tile;
mod layer;
mod viewport;
mod equirect;
pub mod shaders;

pub use tile::Tile;
pub use layer::{View, Layer, Effects, TextureCrop};
pub use equirect::EquirectRenderer;
