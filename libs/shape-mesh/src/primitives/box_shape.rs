//! # Box Primitive
//!
//! Generates mesh for axis-aligned rectangular boxes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box centered at the origin.
///
/// # Arguments
///
/// * `extents` - Full edge lengths along [x, y, z]
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::new(2.0, 1.0, 0.5)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(extents: DVec3) -> Result<Mesh, MeshError> {
    if !(extents.x > 0.0 && extents.y > 0.0 && extents.z > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Box extents must be positive: {:?}",
            extents
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    let max = extents / 2.0;
    let min = -max;

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // 0: left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // 1: right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // 2: right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // 3: left-back-bottom

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // 4: left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // 5: right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // 6: right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // 7: left-back-top

    // Counter-clockwise winding seen from outside

    // Bottom
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    // Top
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    // Front (y = min.y)
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // Back (y = max.y)
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // Left (x = min.x)
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // Right (x = max.x)
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_counts() {
        let mesh = create_box(DVec3::ONE).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_is_centered() {
        let mesh = create_box(DVec3::new(2.0, 1.0, 0.5)).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -0.5, -0.25));
        assert_eq!(max, DVec3::new(1.0, 0.5, 0.25));
    }

    #[test]
    fn test_box_winding_is_outward() {
        let mesh = create_box(DVec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_relative_eq!(mesh.signed_volume(), 6.0, epsilon = 1e-12);

        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(i);
            let centroid = (a + b + c) / 3.0;
            assert!(mesh.face_normal(i).dot(centroid) > 0.0, "face {} points inward", i);
        }
    }

    #[test]
    fn test_box_validates() {
        assert!(create_box(DVec3::splat(10.0)).unwrap().validate());
    }

    #[test]
    fn test_box_invalid_extents() {
        assert!(create_box(DVec3::new(0.0, 1.0, 1.0)).is_err());
        assert!(create_box(DVec3::new(-5.0, 1.0, 1.0)).is_err());
        assert!(create_box(DVec3::new(1.0, f64::NAN, 1.0)).is_err());
    }
}
