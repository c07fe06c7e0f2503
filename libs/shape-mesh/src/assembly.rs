//! # Shape Assembly
//!
//! Maps a prompt category to a fixed list of placed primitives and
//! concatenates them into one mesh.
//!
//! ```text
//! Category → blueprint (Vec<Primitive>) → build + translate → concatenate → Mesh
//! ```

use std::fmt;

use config::constants::{
    CAR_KEYWORD, CHAIR_KEYWORD, CYLINDER_SECTIONS, DEFAULT_SPHERE_RADIUS, ICOSPHERE_SUBDIVISIONS,
};
use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{create_box, create_cylinder, create_icosphere};

/// The shape family selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Box body on four cylinder wheels.
    Car,
    /// Seat, backrest and four legs.
    Chair,
    /// Subdivided icosphere; the fallback for unmatched prompts.
    Sphere,
    /// Unit box; produced for every image request.
    Box,
}

impl Category {
    /// Selects a category from free-form prompt text.
    ///
    /// Matching is a case-insensitive substring test. `"car"` is checked
    /// before `"chair"`, and it also matches inside longer words such as
    /// "scary" or "cart".
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_mesh::Category;
    ///
    /// assert_eq!(Category::from_prompt("A small toy CAR"), Category::Car);
    /// assert_eq!(Category::from_prompt("wooden chair"), Category::Chair);
    /// assert_eq!(Category::from_prompt("a teapot"), Category::Sphere);
    /// ```
    pub fn from_prompt(prompt: &str) -> Self {
        let prompt = prompt.to_lowercase();
        if prompt.contains(CAR_KEYWORD) {
            Category::Car
        } else if prompt.contains(CHAIR_KEYWORD) {
            Category::Chair
        } else {
            Category::Sphere
        }
    }

    /// Returns the placed primitives that make up this category, in
    /// concatenation order.
    pub fn blueprint(self) -> Vec<Primitive> {
        match self {
            Category::Car => car_blueprint(),
            Category::Chair => chair_blueprint(),
            Category::Sphere => vec![Primitive::at_origin(Shape::Icosphere {
                radius: DEFAULT_SPHERE_RADIUS,
                subdivisions: ICOSPHERE_SUBDIVISIONS,
            })],
            Category::Box => vec![Primitive::at_origin(Shape::Box {
                extents: DVec3::ONE,
            })],
        }
    }

    /// Returns the lowercase name of the category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Car => "car",
            Category::Chair => "chair",
            Category::Sphere => "sphere",
            Category::Box => "box",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parametric solid before placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned box with full edge lengths.
    Box { extents: DVec3 },
    /// Z-aligned closed cylinder.
    Cylinder { radius: f64, height: f64 },
    /// Subdivided icosahedron.
    Icosphere { radius: f64, subdivisions: u32 },
}

impl Shape {
    /// Builds the centered mesh for this shape.
    pub fn build(&self) -> Result<Mesh, MeshError> {
        match *self {
            Shape::Box { extents } => create_box(extents),
            Shape::Cylinder { radius, height } => create_cylinder(radius, height, CYLINDER_SECTIONS),
            Shape::Icosphere {
                radius,
                subdivisions,
            } => create_icosphere(radius, subdivisions),
        }
    }
}

/// A shape and the translation that places it in the composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub offset: DVec3,
}

impl Primitive {
    /// Creates a primitive placed at `offset`.
    pub fn new(shape: Shape, offset: DVec3) -> Self {
        Self { shape, offset }
    }

    /// Creates a primitive left at the origin.
    pub fn at_origin(shape: Shape) -> Self {
        Self::new(shape, DVec3::ZERO)
    }

    /// Builds the shape and applies the translation.
    pub fn build(&self) -> Result<Mesh, MeshError> {
        Ok(self.shape.build()?.translated(self.offset))
    }
}

fn car_blueprint() -> Vec<Primitive> {
    let wheel_radius = 0.2;
    let wheel = Shape::Cylinder {
        radius: wheel_radius,
        height: 0.1,
    };

    let mut parts = vec![Primitive::new(
        Shape::Box {
            extents: DVec3::new(2.0, 1.0, 0.5),
        },
        DVec3::new(0.0, 0.0, 0.5),
    )];

    parts.extend(
        [(0.5, 0.6), (0.5, -0.6), (-0.5, 0.6), (-0.5, -0.6)]
            .into_iter()
            .map(|(x, y)| Primitive::new(wheel, DVec3::new(x, y, wheel_radius))),
    );

    parts
}

fn chair_blueprint() -> Vec<Primitive> {
    let leg_height = 0.5;
    let leg_width = 0.1;
    let leg = Shape::Box {
        extents: DVec3::new(leg_width, leg_width, leg_height),
    };

    let mut parts = vec![
        // Seat
        Primitive::new(
            Shape::Box {
                extents: DVec3::new(1.0, 1.0, 0.1),
            },
            DVec3::new(0.0, 0.0, 0.5),
        ),
        // Backrest
        Primitive::new(
            Shape::Box {
                extents: DVec3::new(1.0, 0.1, 1.0),
            },
            DVec3::new(0.0, -0.45, 1.0),
        ),
    ];

    parts.extend(
        [(0.4, 0.4), (0.4, -0.4), (-0.4, 0.4), (-0.4, -0.4)]
            .into_iter()
            .map(|(x, y)| Primitive::new(leg, DVec3::new(x, y, leg_height / 2.0))),
    );

    parts
}

/// Builds the composite mesh for a category.
///
/// Each primitive of the blueprint is built, translated and concatenated in
/// order. Overlapping parts are left as-is.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{assemble, Category};
///
/// let car = assemble(Category::Car).unwrap();
/// assert_eq!(car.vertex_count(), 8 + 4 * 66);
/// ```
pub fn assemble(category: Category) -> Result<Mesh, MeshError> {
    let parts = category
        .blueprint()
        .iter()
        .map(Primitive::build)
        .collect::<Result<Vec<_>, _>>()?;

    let mesh = Mesh::concatenate(&parts);
    log::debug!(
        "Assembled {} from {} parts: {} vertices, {} triangles",
        category,
        parts.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}
