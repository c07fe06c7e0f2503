//! # Mesh Errors
//!
//! Error types for primitive construction and mesh assembly.

use thiserror::Error;

/// Errors that can occur while building a mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Primitive parameters that cannot produce a surface
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Triangle indices that do not reference existing vertices
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
