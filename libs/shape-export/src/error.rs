//! # Export Errors
//!
//! Error types for writing, reading and rendering meshes.

use shape_mesh::MeshError;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting or previewing a mesh.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Format name that has no writer.
    #[error("unsupported file format: {format}")]
    UnsupportedFormat {
        /// The format as requested by the caller.
        format: String,
    },

    /// Malformed file content while reading a mesh back.
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// Mesh arrays read from a file do not form a valid mesh.
    #[error("invalid mesh: {0}")]
    Geometry(#[from] MeshError),

    /// Encoding or writing the preview image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
