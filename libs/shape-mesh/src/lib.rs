//! # Shape Mesh
//!
//! Procedural triangle meshes for prompt categories.
//!
//! ## Architecture
//!
//! ```text
//! prompt text → Category → blueprint (placed primitives) → Mesh
//! ```
//!
//! ## Primitives
//!
//! - **Box**: 8 vertices, 12 triangles
//! - **Cylinder**: fan-capped, `2n + 2` vertices, `4n` triangles
//! - **Icosphere**: subdivided icosahedron with shared midpoints
//!
//! Composites are plain concatenations. No welding, no boolean union and
//! no repair happens, so overlapping parts keep their interior faces.
//!
//! ## Usage
//!
//! ```rust
//! use shape_mesh::{assemble, Category};
//!
//! let mesh = assemble(Category::from_prompt("a small toy car")).unwrap();
//! assert_eq!(mesh.triangle_count(), 12 + 4 * 128);
//! ```

pub mod assembly;
pub mod error;
pub mod mesh;
pub mod primitives;

pub use assembly::{assemble, Category, Primitive, Shape};
pub use error::MeshError;
pub use mesh::Mesh;
