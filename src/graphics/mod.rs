//! Graphics abstraction module - the GPU services the renderer consumes
//!
//! Backends (WebGL, Vulkan, etc.) live outside this crate and implement
//! these traits. Resources are handed out as `Arc<dyn ...>` and release
//! their GPU handles on drop.

// Module declarations
pub mod context;
pub mod buffer;
pub mod texture;
pub mod program;

// Re-export from modules
pub use context::*;
pub use buffer::*;
pub use texture::*;
pub use program::*;

// Mock graphics context for tests (no GPU required)
#[cfg(test)]
pub mod mock_context;
