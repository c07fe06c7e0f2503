//! # Service Errors
//!
//! Every failure a request can hit, with a coarse [`ErrorKind`] callers can
//! branch on.

use std::path::PathBuf;

use serde::Serialize;
use shape_export::ExportError;
use shape_mesh::MeshError;
use thiserror::Error;

/// Result type for request handling.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Coarse classification of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or unreadable input, unwritable output.
    Io,
    /// Malformed request.
    Validation,
    /// Export format without a writer.
    UnsupportedFormat,
    /// Primitive parameters that cannot produce a mesh.
    Geometry,
}

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request record is missing or has bad fields.
    #[error("{message}")]
    Validation { message: String },

    /// The input image could not be opened or decoded.
    #[error("cannot read image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Mesh construction failed.
    #[error(transparent)]
    Geometry(#[from] MeshError),

    /// Writing a model or preview failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ServiceError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns the kind of failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Image { .. } => ErrorKind::Io,
            Self::Geometry(_) => ErrorKind::Geometry,
            Self::Export(ExportError::UnsupportedFormat { .. }) => ErrorKind::UnsupportedFormat,
            Self::Export(ExportError::Geometry(_)) => ErrorKind::Geometry,
            Self::Export(_) => ErrorKind::Io,
        }
    }
}
