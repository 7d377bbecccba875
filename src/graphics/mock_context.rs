//! Mock GraphicsContext for unit tests (no GPU required)
//!
//! Records every call into a command log and every resource
//! creation/release into an event log, so renderer tests can assert
//! draw-state ordering and resource lifecycle without a real backend.

#[cfg(test)]
use std::sync::{Arc, Mutex};
#[cfg(test)]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(test)]
use glam::{Mat4, Vec4};

#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::graphics::{
    GraphicsContext, PixelRect,
    Buffer, BufferDesc, BufferKind,
    Texture, TextureDesc, TextureInfo,
    ShaderProgram, ProgramDesc, AttributeLocation, UniformLocation,
};

// ============================================================================
// Mock Buffer
// ============================================================================

#[cfg(test)]
pub struct MockBuffer {
    pub id: u32,
    pub buffer_kind: BufferKind,
    pub byte_size: u64,
    events: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl Buffer for MockBuffer {
    fn kind(&self) -> BufferKind {
        self.buffer_kind
    }

    fn size(&self) -> u64 {
        self.byte_size
    }
}

#[cfg(test)]
impl Drop for MockBuffer {
    fn drop(&mut self) {
        self.events
            .lock()
            .unwrap()
            .push(format!("release buffer#{}", self.id));
    }
}

// ============================================================================
// Mock Texture
// ============================================================================

#[cfg(test)]
pub struct MockTexture {
    pub id: u32,
    pub texture_info: TextureInfo,
    events: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.texture_info
    }
}

#[cfg(test)]
impl Drop for MockTexture {
    fn drop(&mut self) {
        self.events
            .lock()
            .unwrap()
            .push(format!("release texture#{}", self.id));
    }
}

// ============================================================================
// Mock ShaderProgram
// ============================================================================

#[cfg(test)]
pub struct MockProgram {
    pub id: u32,
    attributes: Vec<String>,
    uniforms: Vec<String>,
    events: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl ShaderProgram for MockProgram {
    fn attribute(&self, name: &str) -> Result<AttributeLocation> {
        self.attributes
            .iter()
            .position(|a| a == name)
            .map(|i| AttributeLocation(i as u32))
            .ok_or_else(|| Error::InvalidResource(format!("unknown attribute '{}'", name)))
    }

    fn uniform(&self, name: &str) -> Result<UniformLocation> {
        self.uniforms
            .iter()
            .position(|u| u == name)
            .map(|i| UniformLocation(i as u32))
            .ok_or_else(|| Error::InvalidResource(format!("unknown uniform '{}'", name)))
    }
}

#[cfg(test)]
impl Drop for MockProgram {
    fn drop(&mut self) {
        self.events
            .lock()
            .unwrap()
            .push(format!("release program#{}", self.id));
    }
}

// ============================================================================
// Mock GraphicsContext
// ============================================================================

/// Mock context recording commands and resource events without a GPU
#[cfg(test)]
pub struct MockContext {
    framebuffer: (u32, u32),
    /// Every state/draw call in issue order
    pub commands: Arc<Mutex<Vec<String>>>,
    /// Resource create/release events in occurrence order
    pub events: Arc<Mutex<Vec<String>>>,
    /// When set, the next create_program call fails (compile-error path)
    pub fail_program_creation: AtomicU32,
    next_id: AtomicU32,
}

#[cfg(test)]
impl MockContext {
    /// Create a mock with the given framebuffer size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: (width, height),
            commands: Arc::new(Mutex::new(Vec::new())),
            events: Arc::new(Mutex::new(Vec::new())),
            fail_program_creation: AtomicU32::new(0),
            next_id: AtomicU32::new(1),
        }
    }

    /// Snapshot of the command log
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    /// Snapshot of the resource event log
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Clear the command log (events are kept)
    pub fn clear_commands(&self) {
        self.commands.lock().unwrap().clear();
    }

    fn record(&self, command: String) {
        self.commands.lock().unwrap().push(command);
    }

    fn fresh_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
impl GraphicsContext for MockContext {
    fn framebuffer_size(&self) -> (u32, u32) {
        self.framebuffer
    }

    fn create_buffer(&self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        let id = self.fresh_id();
        self.events.lock().unwrap().push(format!(
            "create buffer#{} {:?} {}B",
            id,
            desc.kind,
            desc.data.len()
        ));
        Ok(Arc::new(MockBuffer {
            id,
            buffer_kind: desc.kind,
            byte_size: desc.data.len() as u64,
            events: self.events.clone(),
        }))
    }

    fn create_texture(&self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        let id = self.fresh_id();
        self.events
            .lock()
            .unwrap()
            .push(format!("create texture#{} {}x{}", id, desc.width, desc.height));
        Ok(Arc::new(MockTexture {
            id,
            texture_info: TextureInfo {
                width: desc.width,
                height: desc.height,
            },
            events: self.events.clone(),
        }))
    }

    fn create_program(&self, desc: ProgramDesc) -> Result<Arc<dyn ShaderProgram>> {
        if self.fail_program_creation.swap(0, Ordering::Relaxed) != 0 {
            return Err(Error::ShaderCompilationFailed(
                "mock compile error".to_string(),
            ));
        }
        let id = self.fresh_id();
        self.events
            .lock()
            .unwrap()
            .push(format!("create program#{}", id));
        Ok(Arc::new(MockProgram {
            id,
            attributes: desc.attributes,
            uniforms: desc.uniforms,
            events: self.events.clone(),
        }))
    }

    fn use_program(&self, _program: &Arc<dyn ShaderProgram>) -> Result<()> {
        self.record("use_program".to_string());
        Ok(())
    }

    fn set_viewport(&self, rect: PixelRect) -> Result<()> {
        self.record(format!(
            "set_viewport {},{} {}x{}",
            rect.x, rect.y, rect.width, rect.height
        ));
        Ok(())
    }

    fn bind_attribute(
        &self,
        location: AttributeLocation,
        _buffer: &Arc<dyn Buffer>,
        components: u32,
    ) -> Result<()> {
        self.record(format!("bind_attribute {} components={}", location.0, components));
        Ok(())
    }

    fn set_uniform_f32(&self, location: UniformLocation, value: f32) -> Result<()> {
        self.record(format!("set_uniform_f32 {} {}", location.0, value));
        Ok(())
    }

    fn set_uniform_i32(&self, location: UniformLocation, value: i32) -> Result<()> {
        self.record(format!("set_uniform_i32 {} {}", location.0, value));
        Ok(())
    }

    fn set_uniform_vec4(&self, location: UniformLocation, value: Vec4) -> Result<()> {
        self.record(format!("set_uniform_vec4 {} {:?}", location.0, value));
        Ok(())
    }

    fn set_uniform_mat4(&self, location: UniformLocation, value: &Mat4) -> Result<()> {
        self.record(format!("set_uniform_mat4 {} {:?}", location.0, value.to_cols_array()));
        Ok(())
    }

    fn bind_texture(&self, _texture: &Arc<dyn Texture>, unit: u32) -> Result<()> {
        self.record(format!("bind_texture unit={}", unit));
        Ok(())
    }

    fn draw_indexed(&self, indices: &Arc<dyn Buffer>, index_count: u32) -> Result<()> {
        self.record(format!(
            "draw_indexed {:?} count={}",
            indices.kind(),
            index_count
        ));
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_context_tests.rs"]
mod tests;
