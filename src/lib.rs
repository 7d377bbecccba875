/*!
# panotile

GPU tile rendering for equirectangular panoramas.

This crate provides the projection math and the draw-call layer for a
tiled panorama viewer. The surrounding application owns the scene
model (layers, tile pyramids, texture store) and the GPU backend; this
crate turns a view description into an off-axis projection matrix and
draws tiles through the backend-agnostic `GraphicsContext` trait.

## Architecture

- **ViewParams / AsymmetricFov**: symmetric and asymmetric
  field-of-view descriptions and the off-axis projection matrix
- **GraphicsContext**: factory and draw-state trait a GPU backend
  implements
- **EquirectRenderer**: per-view tile renderer driven by
  `start_layer` / `render_tile` / `end_layer`

Rendering is frame-driven and single-threaded; one renderer instance
serves one panorama view.
*/

// Internal modules
mod error;
pub mod log;
pub mod graphics;
pub mod projection;
pub mod renderer;

// Error types
pub use error::{Error, Result};

// Math types used throughout the public API
pub use glam;

pub use projection::{AsymmetricFov, ViewParams};
pub use renderer::{Effects, EquirectRenderer, Layer, TextureCrop, Tile, View};
