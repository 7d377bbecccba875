//! Error types for the panotile rendering core
//!
//! This module defines the error types used throughout the crate,
//! covering GPU resource creation, shader compilation, and renderer
//! lifecycle violations.

use std::fmt;

/// Result type for panotile operations
pub type Result<T> = std::result::Result<T, Error>;

/// Panotile errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (WebGL, Vulkan, mock, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (destroyed renderer, unknown attribute/uniform, etc.)
    InvalidResource(String),

    /// Shader compilation or program linking failed
    ShaderCompilationFailed(String),

    /// Initialization failed (renderer construction)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::ShaderCompilationFailed(msg) => {
                write!(f, "Shader compilation failed: {}", msg)
            }
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
