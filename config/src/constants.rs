//! # Configuration Constants
//!
//! Centralized constants for the prompt-to-shape pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Cylinder sections and icosphere subdivision levels
//! - **Prompt Rules**: Keywords that select a shape category
//! - **Output**: Directory and file naming for generated artifacts
//! - **Preview**: Raster size, camera and colors of the preview image

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum triangle area (as cross product length) accepted by mesh validation.
///
/// Triangles smaller than this are reported as degenerate.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Tolerance used when comparing coordinates that went through an `f32`
/// file format (binary STL) or a decimal text format (OBJ).
pub const EXPORT_TOLERANCE: f64 = 1e-5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Number of sections around a cylinder's circumference.
///
/// A cylinder with `n` sections has `2n + 2` vertices (one center per cap)
/// and `4n` triangles.
///
/// # Example
///
/// ```rust
/// use config::constants::CYLINDER_SECTIONS;
///
/// let vertices = 2 * CYLINDER_SECTIONS + 2;
/// assert_eq!(vertices, 66);
/// ```
pub const CYLINDER_SECTIONS: u32 = 32;

/// Minimum number of sections for a cylinder.
pub const MIN_CYLINDER_SECTIONS: u32 = 3;

/// Subdivision level of the default sphere.
pub const ICOSPHERE_SUBDIVISIONS: u32 = 2;

/// Maximum subdivision level accepted by the icosphere generator.
///
/// Level 7 already produces 327,680 triangles.
pub const MAX_ICOSPHERE_SUBDIVISIONS: u32 = 7;

/// Radius of the default sphere.
pub const DEFAULT_SPHERE_RADIUS: f64 = 1.0;

// =============================================================================
// PROMPT RULES
// =============================================================================

/// Keyword selecting the car composite. Checked before [`CHAIR_KEYWORD`].
pub const CAR_KEYWORD: &str = "car";

/// Keyword selecting the chair composite.
pub const CHAIR_KEYWORD: &str = "chair";

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Directory that receives generated models and previews.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Suffix appended to the request id for the preview image file stem.
///
/// # Example
///
/// ```rust
/// use config::constants::{PREVIEW_SUFFIX, PREVIEW_EXTENSION};
///
/// let name = format!("abc{}.{}", PREVIEW_SUFFIX, PREVIEW_EXTENSION);
/// assert_eq!(name, "abc_preview.png");
/// ```
pub const PREVIEW_SUFFIX: &str = "_preview";

/// File extension of the preview image.
pub const PREVIEW_EXTENSION: &str = "png";

/// Text written into the 80-byte header of binary STL files.
pub const STL_HEADER_TEXT: &str = "binary STL generated by shape-export";

// =============================================================================
// PREVIEW CONSTANTS
// =============================================================================

/// Width and height of the square preview image in pixels.
pub const PREVIEW_SIZE: u32 = 1000;

/// Fraction of the preview image left empty around the rendered mesh.
pub const PREVIEW_MARGIN: f64 = 0.1;

/// Camera elevation above the XY plane, in degrees.
pub const PREVIEW_ELEVATION_DEG: f64 = 30.0;

/// Camera azimuth around the Z axis, in degrees.
pub const PREVIEW_AZIMUTH_DEG: f64 = -60.0;

/// Opacity of rendered faces.
pub const PREVIEW_ALPHA: f32 = 0.7;

/// Background color of the preview (RGB).
pub const PREVIEW_BACKGROUND: [u8; 3] = [255, 255, 255];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns `(vertex_count, triangle_count)` of an icosphere with the given
/// subdivision level.
///
/// Each level splits every triangle into four and shares edge midpoints,
/// so the counts are `10 * 4^n + 2` and `20 * 4^n`.
///
/// # Example
///
/// ```rust
/// use config::constants::icosphere_counts;
///
/// assert_eq!(icosphere_counts(0), (12, 20));
/// assert_eq!(icosphere_counts(1), (42, 80));
/// ```
pub fn icosphere_counts(subdivisions: u32) -> (usize, usize) {
    let scale = 4usize.pow(subdivisions);
    (10 * scale + 2, 20 * scale)
}
