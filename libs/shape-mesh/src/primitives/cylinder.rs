//! # Cylinder Primitive
//!
//! Generates mesh for closed cylinders with fan-triangulated caps.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_CYLINDER_SECTIONS;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a closed cylinder centered at the origin with its axis along Z.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `height` - Length along the Z axis (spans `-height/2..height/2`)
/// * `sections` - Number of segments around circumference
///
/// # Returns
///
/// A mesh with `2 * sections + 2` vertices (each cap has a center vertex)
/// and `4 * sections` triangles.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::create_cylinder;
///
/// let wheel = create_cylinder(0.2, 0.1, 32).unwrap();
/// assert_eq!(wheel.vertex_count(), 66);
/// assert_eq!(wheel.triangle_count(), 128);
/// ```
pub fn create_cylinder(radius: f64, height: f64, sections: u32) -> Result<Mesh, MeshError> {
    if !(radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {}",
            radius
        )));
    }

    if !(height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }

    if sections < MIN_CYLINDER_SECTIONS {
        return Err(MeshError::degenerate(format!(
            "Cylinder sections must be at least {}: {}",
            MIN_CYLINDER_SECTIONS, sections
        )));
    }

    let n = sections as usize;
    let mut mesh = Mesh::with_capacity(2 * n + 2, 4 * n);
    let half = height / 2.0;

    let ring = |mesh: &mut Mesh, z: f64| -> Vec<u32> {
        (0..sections)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / sections as f64;
                mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
            })
            .collect()
    };

    let bottom_center = mesh.add_vertex(DVec3::new(0.0, 0.0, -half));
    let bottom = ring(&mut mesh, -half);
    let top_center = mesh.add_vertex(DVec3::new(0.0, 0.0, half));
    let top = ring(&mut mesh, half);

    for j in 0..n {
        let j_next = (j + 1) % n;

        // Bottom cap faces -Z
        mesh.add_triangle(bottom_center, bottom[j_next], bottom[j]);
        // Top cap faces +Z
        mesh.add_triangle(top_center, top[j], top[j_next]);

        // Side quad
        mesh.add_triangle(bottom[j], bottom[j_next], top[j_next]);
        mesh.add_triangle(bottom[j], top[j_next], top[j]);
    }

    Ok(mesh)
}
