//! # Shape Export
//!
//! File output for shape meshes:
//!
//! - **OBJ** (Wavefront) - text
//! - **STL** (Stereolithography) - binary
//! - **PNG** preview - software-rendered, static view
//!
//! ## Usage
//!
//! ```no_run
//! use shape_export::{export, export_as, preview, ExportFormat};
//! use shape_mesh::{assemble, Category};
//! use std::path::Path;
//!
//! let mesh = assemble(Category::Chair).unwrap();
//! export(&mesh, "output/chair.obj", ExportFormat::Obj).unwrap();
//! export_as(&mesh, "output/chair.stl", "STL").unwrap();
//! preview(&mesh, Some(Path::new("output/chair_preview.png"))).unwrap();
//! ```
//!
//! Readers for both mesh formats are included so exported files can be
//! checked without external tools.

mod error;
mod format;
pub mod obj;
pub mod preview;
pub mod stl;

pub use error::{ExportError, ExportResult};
pub use format::ExportFormat;
pub use obj::{load_obj, save_obj};
pub use preview::{preview, preview_with, render_preview, PreviewOptions};
pub use stl::{load_stl, save_stl};

use std::fs;
use std::path::Path;

use shape_mesh::Mesh;

/// Writes a mesh in the given format, creating missing parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created or written.
pub fn export<P: AsRef<Path>>(mesh: &Mesh, path: P, format: ExportFormat) -> ExportResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    match format {
        ExportFormat::Obj => save_obj(mesh, path)?,
        ExportFormat::Stl => save_stl(mesh, path)?,
    }

    log::info!("Model saved as {} ({})", path.display(), format);
    Ok(())
}

/// Writes a mesh in a format named by a string (case-insensitive).
///
/// The format is checked before anything touches the filesystem, so an
/// unsupported name leaves no directory or partial file behind.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedFormat`] for names other than `obj` and
/// `stl`, otherwise the same errors as [`export`].
pub fn export_as<P: AsRef<Path>>(mesh: &Mesh, path: P, format: &str) -> ExportResult<()> {
    let format: ExportFormat = format.parse()?;
    export(mesh, path, format)
}

/// Loads a mesh, detecting the format from the file extension.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedFormat`] for unknown extensions, or the
/// reader's error.
pub fn load_mesh<P: AsRef<Path>>(path: P) -> ExportResult<Mesh> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path).ok_or_else(|| ExportError::UnsupportedFormat {
        format: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        ExportFormat::Obj => load_obj(path),
        ExportFormat::Stl => load_stl(path),
    }
}

/// Creates the parent directory of `path` if it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> ExportResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
