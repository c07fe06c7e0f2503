//! Wavefront OBJ support.
//!
//! Only geometry records are handled:
//!
//! ```text
//! # comment
//! v x y z        vertex position
//! f i j k        face, 1-based vertex indices
//! ```
//!
//! The reader also accepts `i/t/n` face tokens, negative (relative) indices
//! and polygons with more than three corners, which are fan-triangulated.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use shape_mesh::Mesh;

use crate::error::{ExportError, ExportResult};

/// Writes a mesh as OBJ text.
///
/// Coordinates are written with Rust's shortest round-trip float
/// formatting, so reading the file back restores them exactly.
pub fn write_obj<W: Write>(mesh: &Mesh, mut writer: W) -> ExportResult<()> {
    writeln!(writer, "# shape-export OBJ")?;
    writeln!(
        writer,
        "# vertices: {} faces: {}",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }

    for [a, b, c] in mesh.triangles() {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }

    writer.flush()?;
    Ok(())
}

/// Saves a mesh to an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_obj<P: AsRef<Path>>(mesh: &Mesh, path: P) -> ExportResult<()> {
    let file = File::create(path)?;
    write_obj(mesh, BufWriter::new(file))
}

/// Loads a mesh from an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains malformed
/// vertex or face records.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ExportResult<Mesh> {
    let file = File::open(path)?;
    read_obj(BufReader::new(file))
}

/// Parses OBJ text into a mesh.
pub fn read_obj<R: BufRead>(reader: R) -> ExportResult<Mesh> {
    let mut vertices: Vec<DVec3> = Vec::new();
    let mut triangles: Vec<[u32; 3]> = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("v") => {
                let coords = parts
                    .take(3)
                    .map(|p| p.parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| {
                        ExportError::invalid_content(format!("line {}: {}", line_number + 1, e))
                    })?;
                if coords.len() < 3 {
                    return Err(ExportError::invalid_content(format!(
                        "line {}: vertex needs 3 coordinates",
                        line_number + 1
                    )));
                }
                vertices.push(DVec3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let corners = parts
                    .map(|token| resolve_index(token, vertices.len()))
                    .collect::<Option<Vec<u32>>>()
                    .ok_or_else(|| {
                        ExportError::invalid_content(format!(
                            "line {}: bad face index",
                            line_number + 1
                        ))
                    })?;
                if corners.len() < 3 {
                    return Err(ExportError::invalid_content(format!(
                        "line {}: face needs at least 3 vertices",
                        line_number + 1
                    )));
                }
                for i in 1..corners.len() - 1 {
                    triangles.push([corners[0], corners[i], corners[i + 1]]);
                }
            }
            _ => {}
        }
    }

    Ok(Mesh::from_parts(vertices, triangles)?)
}

/// Converts one face token (`7`, `7/1`, `7/1/3`, `7//3`, `-1`) into a
/// zero-based vertex index.
fn resolve_index(token: &str, vertex_count: usize) -> Option<u32> {
    let index: i64 = token.split('/').next()?.parse().ok()?;
    let resolved = match index {
        0 => return None,
        i if i > 0 => i - 1,
        i => vertex_count as i64 + i,
    };
    u32::try_from(resolved).ok()
}
