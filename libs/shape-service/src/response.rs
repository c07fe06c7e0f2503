//! Response records returned to callers.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ErrorKind, ServiceError};

/// Where the three artifacts of one request are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Request identifier shared by all three file names.
    pub id: String,
    pub obj: PathBuf,
    pub stl: PathBuf,
    pub preview: PathBuf,
}

impl OutputPaths {
    /// Derives `<id>.obj`, `<id>.stl` and `<id>_preview.png` under `dir`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_service::OutputPaths;
    /// use std::path::Path;
    ///
    /// let paths = OutputPaths::new(Path::new("output"), "abc");
    /// assert_eq!(paths.preview, Path::new("output/abc_preview.png"));
    /// ```
    pub fn new(dir: &Path, id: impl Into<String>) -> Self {
        use config::constants::{PREVIEW_EXTENSION, PREVIEW_SUFFIX};
        use shape_export::ExportFormat;

        let id = id.into();
        Self {
            obj: dir.join(format!("{}.{}", id, ExportFormat::Obj.extension())),
            stl: dir.join(format!("{}.{}", id, ExportFormat::Stl.extension())),
            preview: dir.join(format!("{}{}.{}", id, PREVIEW_SUFFIX, PREVIEW_EXTENSION)),
            id,
        }
    }
}

/// Outcome of a request, serialized with a lowercase `status` tag.
///
/// ```json
/// {"status": "success", "obj_url": "...", "stl_url": "...", "preview_url": "..."}
/// {"status": "error", "error": "Invalid input type", "kind": "validation"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Success {
        obj_url: String,
        stl_url: String,
        preview_url: String,
    },
    Error {
        error: String,
        kind: ErrorKind,
    },
}

impl Response {
    /// Builds a success response listing the written files.
    pub fn success(paths: &OutputPaths) -> Self {
        Self::Success {
            obj_url: paths.obj.display().to_string(),
            stl_url: paths.stl.display().to_string(),
            preview_url: paths.preview.display().to_string(),
        }
    }

    /// Builds an error response carrying the message and kind.
    pub fn failure(error: &ServiceError) -> Self {
        Self::Error {
            error: error.to_string(),
            kind: error.kind(),
        }
    }

    /// Returns true for a success response.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
