//! # Mesh Data Structure
//!
//! Core mesh representation: a vertex list and a triangle index list.

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;

use crate::error::MeshError;

/// A triangle mesh with vertices and indices.
///
/// Meshes are plain triangle soups with shared vertices. Nothing here
/// repairs topology: concatenated parts may overlap or touch without being
/// welded together.
///
/// # Example
///
/// ```rust
/// use shape_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Builds a mesh from raw arrays, checking that every index is in range.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidTopology`] if a triangle references a
    /// vertex that does not exist.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Result<Self, MeshError> {
        let vertex_count = vertices.len();
        if let Some((face, tri)) = triangles
            .iter()
            .enumerate()
            .find(|(_, tri)| tri.iter().any(|&i| i as usize >= vertex_count))
        {
            return Err(MeshError::invalid_topology(format!(
                "triangle {} references {:?} but mesh has {} vertices",
                face, tri, vertex_count
            )));
        }

        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the three corner positions of a triangle.
    #[inline]
    pub fn triangle_positions(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [self.vertex(a), self.vertex(b), self.vertex(c)]
    }

    /// Returns the unit normal of a triangle, or zero for degenerate faces.
    ///
    /// Follows counter-clockwise winding.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.triangle_positions(index);
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Translates the mesh by a vector.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// mesh.translate(DVec3::new(0.0, 0.0, 0.5));
    /// ```
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Returns a translated copy of the mesh.
    pub fn translated(mut self, offset: DVec3) -> Self {
        self.translate(offset);
        self
    }

    /// Merges another mesh into this one.
    ///
    /// Vertices are appended as-is and the other mesh's triangle indices are
    /// offset by this mesh's prior vertex count.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles.push([
                tri[0] + offset,
                tri[1] + offset,
                tri[2] + offset,
            ]);
        }
    }

    /// Concatenates meshes in order into a single mesh.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_mesh::{primitives::create_box, Mesh};
    /// use glam::DVec3;
    ///
    /// let a = create_box(DVec3::ONE).unwrap();
    /// let b = create_box(DVec3::ONE).unwrap().translated(DVec3::X * 2.0);
    /// let both = Mesh::concatenate([a, b].iter());
    /// assert_eq!(both.vertex_count(), 16);
    /// assert_eq!(both.triangle(12), [8, 10, 9]);
    /// ```
    pub fn concatenate<'a>(parts: impl IntoIterator<Item = &'a Mesh>) -> Mesh {
        let parts: Vec<&Mesh> = parts.into_iter().collect();
        let vertex_total = parts.iter().map(|m| m.vertex_count()).sum();
        let triangle_total = parts.iter().map(|m| m.triangle_count()).sum();

        let mut result = Mesh::with_capacity(vertex_total, triangle_total);
        for part in parts {
            result.merge(part);
        }
        result
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < VERTEX_MERGE_EPSILON {
                return false;
            }
        }

        true
    }

    /// Computes the signed enclosed volume (divergence theorem).
    ///
    /// Positive for closed meshes with outward-facing triangles. Parts that
    /// overlap are counted twice, since concatenation never removes them.
    pub fn signed_volume(&self) -> f64 {
        (0..self.triangles.len())
            .map(|i| {
                let [v0, v1, v2] = self.triangle_positions(i);
                v0.dot(v1.cross(v2))
            })
            .sum::<f64>()
            / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_parts_rejects_out_of_range() {
        let result = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X], vec![[0, 1, 2]]);
        assert!(matches!(result, Err(MeshError::InvalidTopology { .. })));
    }

    #[test]
    fn test_from_parts_accepts_valid() {
        let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]).unwrap();
        assert_eq!(mesh, unit_triangle());
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_face_normal_follows_winding() {
        let mesh = unit_triangle();
        assert_eq!(mesh.face_normal(0), DVec3::Z);
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_zero_area() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::X * 2.0);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_translate_moves_every_vertex() {
        let mesh = unit_triangle().translated(DVec3::new(0.0, 0.0, 0.5));
        assert!(mesh.vertices().iter().all(|v| v.z == 0.5));
    }

    #[test]
    fn test_mesh_merge() {
        let mut mesh1 = unit_triangle();
        let mesh2 = unit_triangle().translated(DVec3::Z);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangle(1), [3, 4, 5]); // Offset by 3
    }

    #[test]
    fn test_concatenate_offsets_each_part() {
        let parts = [unit_triangle(), unit_triangle(), unit_triangle()];
        let mesh = Mesh::concatenate(parts.iter());
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.triangles(), &[[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
    }

    #[test]
    fn test_concatenate_empty() {
        let mesh = Mesh::concatenate(std::iter::empty::<&Mesh>());
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_signed_volume_open_surface() {
        // A single triangle through the origin encloses nothing
        assert_relative_eq!(unit_triangle().signed_volume(), 0.0);
    }
}
