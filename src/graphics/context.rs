//! GraphicsContext trait - the service surface the renderer draws through

use std::sync::Arc;
use glam::{Mat4, Vec4};

use crate::error::Result;
use crate::graphics::{
    Buffer, BufferDesc, Texture, TextureDesc,
    ShaderProgram, ProgramDesc, AttributeLocation, UniformLocation,
};

/// Rectangle in framebuffer pixels, origin at the bottom-left (OpenGL
/// viewport convention). May extend outside the framebuffer; the
/// renderer clamps before setting the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Main graphics context trait
///
/// The central interface between the renderer and a GPU backend. Every
/// operation is a direct, synchronous command submission that returns
/// once enqueued. Resource factories return shared handles whose GPU
/// objects are released on drop.
pub trait GraphicsContext: Send + Sync {
    /// Current framebuffer size in pixels (width, height)
    fn framebuffer_size(&self) -> (u32, u32);

    /// Create a constant buffer with its contents
    ///
    /// # Arguments
    ///
    /// * `desc` - Buffer descriptor
    fn create_buffer(&self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Create a 2D texture
    ///
    /// # Arguments
    ///
    /// * `desc` - Texture descriptor
    fn create_texture(&self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Compile and link a shader program
    ///
    /// # Errors
    ///
    /// `Error::ShaderCompilationFailed` if either stage fails to compile
    /// or the program fails to link.
    fn create_program(&self, desc: ProgramDesc) -> Result<Arc<dyn ShaderProgram>>;

    /// Make a program the active one for subsequent state and draws
    fn use_program(&self, program: &Arc<dyn ShaderProgram>) -> Result<()>;

    /// Set the viewport rectangle
    ///
    /// The rectangle must lie within the framebuffer.
    fn set_viewport(&self, rect: PixelRect) -> Result<()>;

    /// Bind a vertex buffer to an attribute of the active program
    ///
    /// # Arguments
    ///
    /// * `location` - Resolved attribute location
    /// * `buffer` - Vertex buffer holding tightly packed f32 data
    /// * `components` - Components per vertex (2 or 3)
    fn bind_attribute(
        &self,
        location: AttributeLocation,
        buffer: &Arc<dyn Buffer>,
        components: u32,
    ) -> Result<()>;

    /// Set a float uniform on the active program
    fn set_uniform_f32(&self, location: UniformLocation, value: f32) -> Result<()>;

    /// Set an integer uniform (sampler unit) on the active program
    fn set_uniform_i32(&self, location: UniformLocation, value: i32) -> Result<()>;

    /// Set a vec4 uniform on the active program
    fn set_uniform_vec4(&self, location: UniformLocation, value: Vec4) -> Result<()>;

    /// Set a mat4 uniform on the active program (column-major)
    fn set_uniform_mat4(&self, location: UniformLocation, value: &Mat4) -> Result<()>;

    /// Bind a texture to a texture unit
    fn bind_texture(&self, texture: &Arc<dyn Texture>, unit: u32) -> Result<()>;

    /// Draw triangles through an index buffer with the currently bound
    /// attributes and uniforms
    ///
    /// # Arguments
    ///
    /// * `indices` - Index buffer (u16 indices)
    /// * `index_count` - Number of indices to draw
    fn draw_indexed(&self, indices: &Arc<dyn Buffer>, index_count: u32) -> Result<()>;
}
