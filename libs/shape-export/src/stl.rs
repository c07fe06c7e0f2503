//! Binary STL support.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! STL stores every triangle with its own corners, so a mesh read back has
//! three vertices per triangle.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use config::constants::STL_HEADER_TEXT;
use glam::DVec3;
use shape_mesh::Mesh;

use crate::error::{ExportError, ExportResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Upper bound on triangles reserved up front; the header count is untrusted.
const MAX_PREALLOCATED_TRIANGLES: usize = 1 << 16;

/// Writes a mesh as binary STL.
pub fn write_stl<W: Write>(mesh: &Mesh, mut writer: W) -> ExportResult<()> {
    let mut header = [b' '; HEADER_SIZE];
    let text = STL_HEADER_TEXT.as_bytes();
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    let face_count = u32::try_from(mesh.triangle_count())
        .map_err(|_| ExportError::invalid_content("too many triangles for STL"))?;
    writer.write_all(&face_count.to_le_bytes())?;

    for i in 0..mesh.triangle_count() {
        write_vec3(&mut writer, mesh.face_normal(i))?;
        for corner in mesh.triangle_positions(i) {
            write_vec3(&mut writer, corner)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a vector as 3 little-endian f32s.
fn write_vec3<W: Write>(writer: &mut W, v: DVec3) -> ExportResult<()> {
    for component in v.as_vec3().to_array() {
        writer.write_all(&component.to_le_bytes())?;
    }
    Ok(())
}

/// Saves a mesh to a binary STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, path: P) -> ExportResult<()> {
    let file = File::create(path)?;
    write_stl(mesh, BufWriter::new(file))
}

/// Loads a mesh from a binary STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is truncated.
pub fn load_stl<P: AsRef<Path>>(path: P) -> ExportResult<Mesh> {
    let file = File::open(path)?;
    read_stl(BufReader::new(file))
}

/// Parses binary STL data into an unindexed mesh.
pub fn read_stl<R: Read>(mut reader: R) -> ExportResult<Mesh> {
    let mut header = [0u8; HEADER_SIZE + 4];
    read_record(&mut reader, &mut header, "header")?;

    let face_count = u32::from_le_bytes([
        header[HEADER_SIZE],
        header[HEADER_SIZE + 1],
        header[HEADER_SIZE + 2],
        header[HEADER_SIZE + 3],
    ]);

    let reserved = (face_count as usize).min(MAX_PREALLOCATED_TRIANGLES);
    let mut mesh = Mesh::with_capacity(reserved * 3, reserved);
    let mut record = [0u8; TRIANGLE_SIZE];
    for i in 0..face_count {
        read_record(&mut reader, &mut record, &format!("triangle {} of {}", i, face_count))?;

        // Skip the stored normal
        let a = mesh.add_vertex(read_vec3(&record[12..24]));
        let b = mesh.add_vertex(read_vec3(&record[24..36]));
        let c = mesh.add_vertex(read_vec3(&record[36..48]));
        mesh.add_triangle(a, b, c);
    }

    Ok(mesh)
}

fn read_record<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> ExportResult<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            ExportError::invalid_content(format!("truncated STL: missing {}", what))
        } else {
            ExportError::Io(e)
        }
    })
}

/// Read a vertex from 12 bytes (3 f32s).
fn read_vec3(buf: &[u8]) -> DVec3 {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    DVec3::new(f64::from(x), f64::from(y), f64::from(z))
}
