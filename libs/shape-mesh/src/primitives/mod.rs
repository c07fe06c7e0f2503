//! # Primitives
//!
//! Mesh generation for the building-block solids (box, cylinder, icosphere).

pub mod box_shape;
pub mod cylinder;
pub mod icosphere;

pub use box_shape::create_box;
pub use cylinder::create_cylinder;
pub use icosphere::create_icosphere;
