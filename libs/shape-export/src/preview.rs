//! Static preview rendering.
//!
//! Draws the triangulated surface with an orthographic camera, colors each
//! face by its height through the viridis colormap and blends it
//! translucently over a white background. There are no axes, labels or
//! ticks. Faces are painted far-to-near so translucent overlaps compose in
//! depth order.

use std::path::{Path, PathBuf};

use config::constants::{
    EPSILON, PREVIEW_ALPHA, PREVIEW_AZIMUTH_DEG, PREVIEW_BACKGROUND, PREVIEW_ELEVATION_DEG,
    PREVIEW_MARGIN, PREVIEW_SIZE,
};
use glam::{DVec2, DVec3};
use image::{ImageFormat, Rgb, RgbImage};
use shape_mesh::Mesh;

use crate::error::ExportResult;
use crate::ensure_parent_dir;

/// Viridis colormap sampled at five evenly spaced stops.
const VIRIDIS: [[f32; 3]; 5] = [
    [68.0, 1.0, 84.0],
    [59.0, 82.0, 139.0],
    [33.0, 145.0, 140.0],
    [94.0, 201.0, 98.0],
    [253.0, 231.0, 37.0],
];

/// Camera and raster settings for a preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    /// Width and height of the square image in pixels.
    pub size: u32,
    /// Camera elevation above the XY plane, in degrees.
    pub elevation_deg: f64,
    /// Camera azimuth around Z, in degrees.
    pub azimuth_deg: f64,
    /// Face opacity in `0.0..=1.0`.
    pub alpha: f32,
    /// Background color.
    pub background: [u8; 3],
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            size: PREVIEW_SIZE,
            elevation_deg: PREVIEW_ELEVATION_DEG,
            azimuth_deg: PREVIEW_AZIMUTH_DEG,
            alpha: PREVIEW_ALPHA,
            background: PREVIEW_BACKGROUND,
        }
    }
}

impl PreviewOptions {
    /// Returns options with a different image size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

/// Orthographic camera basis.
struct Camera {
    right: DVec3,
    up: DVec3,
    toward_viewer: DVec3,
}

impl Camera {
    fn new(elevation_deg: f64, azimuth_deg: f64) -> Self {
        let (el, az) = (elevation_deg.to_radians(), azimuth_deg.to_radians());
        let toward_viewer = DVec3::new(el.cos() * az.cos(), el.cos() * az.sin(), el.sin());
        let right = DVec3::new(-az.sin(), az.cos(), 0.0);
        let up = toward_viewer.cross(right);
        Self {
            right,
            up,
            toward_viewer,
        }
    }

    /// Projects a point to view-plane coordinates.
    fn project(&self, p: DVec3) -> DVec2 {
        DVec2::new(p.dot(self.right), p.dot(self.up))
    }

    fn depth(&self, p: DVec3) -> f64 {
        p.dot(self.toward_viewer)
    }
}

/// Renders a mesh into an RGB image.
///
/// The mesh is centered and scaled uniformly so its projection fits the
/// image with a fixed margin; equal scale on both axes keeps proportions.
///
/// # Example
///
/// ```rust
/// use shape_export::preview::{render_preview, PreviewOptions};
/// use shape_mesh::{assemble, Category};
///
/// let mesh = assemble(Category::Box).unwrap();
/// let image = render_preview(&mesh, &PreviewOptions::default().with_size(64));
/// assert_eq!(image.dimensions(), (64, 64));
/// ```
pub fn render_preview(mesh: &Mesh, options: &PreviewOptions) -> RgbImage {
    let size = options.size;
    let mut image = RgbImage::from_pixel(size, size, Rgb(options.background));
    if mesh.triangle_count() == 0 || size == 0 {
        return image;
    }

    let camera = Camera::new(options.elevation_deg, options.azimuth_deg);
    let (min, max) = mesh.bounding_box();
    let center = (min + max) / 2.0;

    let projected: Vec<DVec2> = mesh
        .vertices()
        .iter()
        .map(|v| camera.project(*v - center))
        .collect();

    let (lo, hi) = projected.iter().fold(
        (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
        |(lo, hi), p| (lo.min(*p), hi.max(*p)),
    );
    let extent = (hi - lo).max_element();
    let half = f64::from(size) / 2.0;
    let scale = if extent > EPSILON {
        f64::from(size) * (1.0 - 2.0 * PREVIEW_MARGIN) / extent
    } else {
        1.0
    };
    let mid = (lo + hi) / 2.0;
    let to_pixel = |p: DVec2| DVec2::new(half + (p.x - mid.x) * scale, half - (p.y - mid.y) * scale);

    let height_range = max.z - min.z;
    let mut faces: Vec<(f64, usize)> = (0..mesh.triangle_count())
        .map(|i| {
            let [a, b, c] = mesh.triangle_positions(i);
            (camera.depth((a + b + c) / 3.0 - center), i)
        })
        .collect();
    faces.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (_, i) in faces {
        let [a, b, c] = mesh.triangle(i);
        let corners = [a, b, c].map(|idx| to_pixel(projected[idx as usize]));

        let mean_z = mesh.triangle_positions(i).iter().map(|p| p.z).sum::<f64>() / 3.0;
        let t = if height_range > EPSILON {
            (mean_z - min.z) / height_range
        } else {
            0.5
        };

        fill_triangle(&mut image, corners, viridis(t as f32), options.alpha);
    }

    image
}

/// Renders a preview and saves it as PNG.
///
/// With no path this is a no-op that returns `Ok(None)`; nothing is
/// rendered or written.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the PNG
/// cannot be encoded or written.
pub fn preview(mesh: &Mesh, path: Option<&Path>) -> ExportResult<Option<PathBuf>> {
    preview_with(mesh, path, &PreviewOptions::default())
}

/// Like [`preview`] with explicit options.
pub fn preview_with(
    mesh: &Mesh,
    path: Option<&Path>,
    options: &PreviewOptions,
) -> ExportResult<Option<PathBuf>> {
    let Some(path) = path else {
        return Ok(None);
    };

    ensure_parent_dir(path)?;
    let image = render_preview(mesh, options);
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!("Visualization saved to {}", path.display());

    Ok(Some(path.to_path_buf()))
}

/// Maps `t` in `0..=1` onto the viridis colormap.
fn viridis(t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f32;
    let i = (t.floor() as usize).min(VIRIDIS.len() - 2);
    let f = t - i as f32;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    [
        a[0] + (b[0] - a[0]) * f,
        a[1] + (b[1] - a[1]) * f,
        a[2] + (b[2] - a[2]) * f,
    ]
}

/// Alpha-blends a flat-colored triangle, sampling at pixel centers.
fn fill_triangle(image: &mut RgbImage, corners: [DVec2; 3], color: [f32; 3], alpha: f32) {
    let [p0, p1, p2] = corners;
    let area = edge(p0, p1, p2);
    if area.abs() < EPSILON {
        return;
    }

    let (width, height) = image.dimensions();
    let lo = p0.min(p1).min(p2).floor().max(DVec2::ZERO);
    let hi = p0.max(p1).max(p2).ceil().min(DVec2::new(f64::from(width), f64::from(height)));
    if lo.x >= hi.x || lo.y >= hi.y {
        return;
    }

    for y in lo.y as u32..hi.y as u32 {
        for x in lo.x as u32..hi.x as u32 {
            let p = DVec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let w0 = edge(p1, p2, p) / area;
            let w1 = edge(p2, p0, p) / area;
            let w2 = edge(p0, p1, p) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            let pixel = image.get_pixel_mut(x, y);
            for (channel, src) in pixel.0.iter_mut().zip(color) {
                let blended = src * alpha + f32::from(*channel) * (1.0 - alpha);
                *channel = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Twice the signed area of triangle `(a, b, p)`.
fn edge(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_mesh::{assemble, Category};

    fn small() -> PreviewOptions {
        PreviewOptions::default().with_size(96)
    }

    #[test]
    fn empty_mesh_renders_background() {
        let image = render_preview(&Mesh::new(), &small());
        assert!(image.pixels().all(|p| p.0 == PREVIEW_BACKGROUND));
    }

    #[test]
    fn mesh_covers_center_but_not_corners() {
        let mesh = assemble(Category::Sphere).unwrap();
        let image = render_preview(&mesh, &small());
        assert_ne!(image.get_pixel(48, 48).0, PREVIEW_BACKGROUND);
        assert_eq!(image.get_pixel(0, 0).0, PREVIEW_BACKGROUND);
        assert_eq!(image.get_pixel(95, 95).0, PREVIEW_BACKGROUND);
    }

    #[test]
    fn rendering_is_deterministic() {
        let mesh = assemble(Category::Car).unwrap();
        assert_eq!(render_preview(&mesh, &small()), render_preview(&mesh, &small()));
    }

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0), VIRIDIS[0]);
        assert_eq!(viridis(1.0), VIRIDIS[4]);
        assert_eq!(viridis(-3.0), VIRIDIS[0]);
        assert_eq!(viridis(0.5), VIRIDIS[2]);
    }

    #[test]
    fn camera_basis_is_orthonormal() {
        let camera = Camera::new(PREVIEW_ELEVATION_DEG, PREVIEW_AZIMUTH_DEG);
        assert!((camera.right.length() - 1.0).abs() < 1e-12);
        assert!((camera.up.length() - 1.0).abs() < 1e-12);
        assert!(camera.right.dot(camera.up).abs() < 1e-12);
        assert!(camera.right.dot(camera.toward_viewer).abs() < 1e-12);
        // Z stays up on screen
        assert!(camera.project(DVec3::Z).y > 0.0);
    }

    #[test]
    fn no_path_is_a_no_op() {
        let mesh = assemble(Category::Box).unwrap();
        assert_eq!(preview(&mesh, None).unwrap(), None);
    }
}
