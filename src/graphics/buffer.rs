//! Buffer trait and buffer descriptor

/// Buffer binding target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Vertex attribute data
    Vertex,
    /// Index (element) data
    Index,
}

/// Descriptor for creating a constant buffer
///
/// Buffers in this crate are created with their contents and never
/// re-uploaded; the unit quad lives in GPU memory for the lifetime of
/// the renderer.
#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// Binding target
    pub kind: BufferKind,
    /// Initial contents, uploaded at creation time
    pub data: Vec<u8>,
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types. The GPU handle is
/// released when the last reference is dropped.
pub trait Buffer: Send + Sync {
    /// Binding target this buffer was created for
    fn kind(&self) -> BufferKind;

    /// Size in bytes
    fn size(&self) -> u64;
}
