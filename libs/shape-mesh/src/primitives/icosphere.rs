//! # Icosphere Primitive
//!
//! Generates sphere meshes by recursively subdividing an icosahedron.

use std::collections::HashMap;

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MAX_ICOSPHERE_SUBDIVISIONS;
use glam::DVec3;

/// Faces of the base icosahedron, counter-clockwise seen from outside.
const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Creates an icosphere centered at the origin.
///
/// # Arguments
///
/// * `radius` - Distance of every vertex from the origin
/// * `subdivisions` - Number of times each triangle is split into four
///
/// # Returns
///
/// A closed mesh with `10 * 4^n + 2` vertices and `20 * 4^n` triangles.
/// Edge midpoints are shared between neighbouring triangles.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::create_icosphere;
///
/// let mesh = create_icosphere(1.0, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 162);
/// assert_eq!(mesh.triangle_count(), 320);
/// ```
pub fn create_icosphere(radius: f64, subdivisions: u32) -> Result<Mesh, MeshError> {
    if !(radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Icosphere radius must be positive: {}",
            radius
        )));
    }

    if subdivisions > MAX_ICOSPHERE_SUBDIVISIONS {
        return Err(MeshError::degenerate(format!(
            "Icosphere subdivisions must be at most {}: {}",
            MAX_ICOSPHERE_SUBDIVISIONS, subdivisions
        )));
    }

    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let mut positions: Vec<DVec3> = [
        DVec3::new(-1.0, t, 0.0),
        DVec3::new(1.0, t, 0.0),
        DVec3::new(-1.0, -t, 0.0),
        DVec3::new(1.0, -t, 0.0),
        DVec3::new(0.0, -1.0, t),
        DVec3::new(0.0, 1.0, t),
        DVec3::new(0.0, -1.0, -t),
        DVec3::new(0.0, 1.0, -t),
        DVec3::new(t, 0.0, -1.0),
        DVec3::new(t, 0.0, 1.0),
        DVec3::new(-t, 0.0, -1.0),
        DVec3::new(-t, 0.0, 1.0),
    ]
    .iter()
    .map(|p| p.normalize())
    .collect();

    let mut faces: Vec<[u32; 3]> = ICOSAHEDRON_FACES.to_vec();

    for _ in 0..subdivisions {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);
        let mut next = Vec::with_capacity(faces.len() * 4);

        for &[a, b, c] in &faces {
            let ab = midpoint(&mut positions, &mut midpoints, a, b);
            let bc = midpoint(&mut positions, &mut midpoints, b, c);
            let ca = midpoint(&mut positions, &mut midpoints, c, a);

            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }

        faces = next;
    }

    let mut mesh = Mesh::with_capacity(positions.len(), faces.len());
    for p in positions {
        mesh.add_vertex(p * radius);
    }
    for [a, b, c] in faces {
        mesh.add_triangle(a, b, c);
    }

    Ok(mesh)
}

/// Returns the index of the unit-sphere midpoint of edge `(a, b)`, creating it
/// on first use so both triangles sharing the edge reuse one vertex.
fn midpoint(
    positions: &mut Vec<DVec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    *cache.entry(key).or_insert_with(|| {
        let mid = (positions[a as usize] + positions[b as usize]).normalize();
        positions.push(mid);
        (positions.len() - 1) as u32
    })
}
