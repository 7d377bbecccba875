//! Shader program trait, program descriptor, and resolved locations

use crate::error::Result;

/// Resolved attribute location within a linked program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLocation(pub u32);

/// Resolved uniform location within a linked program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformLocation(pub u32);

/// Descriptor for creating a shader program
///
/// The attribute and uniform name lists declare everything the caller
/// will look up; backends resolve them at link time so the render loop
/// never does string lookups.
#[derive(Debug, Clone)]
pub struct ProgramDesc {
    /// Vertex shader source (GLSL)
    pub vertex_source: String,
    /// Fragment shader source (GLSL)
    pub fragment_source: String,
    /// Attribute names to resolve
    pub attributes: Vec<String>,
    /// Uniform names to resolve
    pub uniforms: Vec<String>,
}

/// Compiled and linked shader program trait
///
/// Implemented by backend-specific program types. Location lookups are
/// cheap (resolved at creation); an unknown name is an
/// `Error::InvalidResource`. The program is released when the last
/// reference is dropped.
pub trait ShaderProgram: Send + Sync {
    /// Location of a vertex attribute declared in the descriptor
    fn attribute(&self, name: &str) -> Result<AttributeLocation>;

    /// Location of a uniform declared in the descriptor
    fn uniform(&self, name: &str) -> Result<UniformLocation>;
}
