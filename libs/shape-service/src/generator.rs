//! Placeholder model generation.
//!
//! Text prompts pick a category by keyword and image requests always
//! produce the unit box. The image is opened and decoded so unreadable
//! inputs fail early, but its pixels do not influence the mesh.

use std::path::Path;

use image::{DynamicImage, ImageReader, ImageResult};
use shape_mesh::{assemble, Category, Mesh};

use crate::error::{ServiceError, ServiceResult};
use crate::request::Request;

/// Produces meshes for validated requests.
#[derive(Debug, Clone, Copy)]
pub struct Generator;

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Creates a generator.
    pub fn new() -> Self {
        log::debug!("Model generator initialized");
        Self
    }

    /// Generates the mesh for a request.
    pub fn generate(&self, request: &Request) -> ServiceResult<Mesh> {
        match request {
            Request::Text { prompt } => self.generate_from_text(prompt),
            Request::Image { image_path } => self.generate_from_image(image_path),
        }
    }

    /// Generates a mesh from prompt text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_service::Generator;
    ///
    /// let mesh = Generator::new().generate_from_text("a small toy car").unwrap();
    /// assert_eq!(mesh.triangle_count(), 524);
    /// ```
    pub fn generate_from_text(&self, prompt: &str) -> ServiceResult<Mesh> {
        let category = Category::from_prompt(prompt);
        log::info!("Generating {} for prompt {:?}", category, prompt);
        Ok(assemble(category)?)
    }

    /// Generates a mesh from an image file.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Image`] if the file is missing or cannot be
    /// decoded.
    pub fn generate_from_image(&self, path: &Path) -> ServiceResult<Mesh> {
        let image = self.preprocess_image(path)?;
        log::info!(
            "Generating {} for image {} ({}x{})",
            Category::Box,
            path.display(),
            image.width(),
            image.height()
        );
        Ok(assemble(Category::Box)?)
    }

    /// Opens and decodes an image as RGB.
    ///
    /// The format is detected from the file content, so a file whose
    /// extension does not match its encoding still decodes.
    pub fn preprocess_image(&self, path: &Path) -> ServiceResult<DynamicImage> {
        let image = decode_image(path).map_err(|source| ServiceError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
    }
}

fn decode_image(path: &Path) -> ImageResult<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    log::debug!("Decoding {} as {:?}", path.display(), reader.format());
    reader.decode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use image::{ImageFormat, Rgba, RgbaImage};

    #[test]
    fn text_prompts_select_category() {
        let generator = Generator::new();
        let cases = [
            ("a small toy car", 272, 524),
            ("A Wooden CHAIR", 48, 72),
            ("a teapot", 162, 320),
            ("", 162, 320),
        ];
        for (prompt, vertices, triangles) in cases {
            let mesh = generator.generate_from_text(prompt).unwrap();
            assert_eq!(mesh.vertex_count(), vertices, "{prompt}");
            assert_eq!(mesh.triangle_count(), triangles, "{prompt}");
        }
    }

    #[test]
    fn image_request_yields_box_and_rgb_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.png");
        RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 128]))
            .save(&path)
            .unwrap();

        let generator = Generator::new();
        let image = generator.preprocess_image(&path).unwrap();
        assert!(matches!(image, DynamicImage::ImageRgb8(_)));
        assert_eq!((image.width(), image.height()), (4, 3));

        let mesh = generator
            .generate(&Request::Image { image_path: path })
            .unwrap();
        assert_eq!((mesh.vertex_count(), mesh.triangle_count()), (8, 12));
    }

    #[test]
    fn format_comes_from_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let image = Generator::new().preprocess_image(&path).unwrap();
        assert_eq!((image.width(), image.height()), (2, 2));
    }

    #[test]
    fn non_image_content_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = Generator::new().preprocess_image(&path).unwrap_err();
        assert!(matches!(err, ServiceError::Image { .. }));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn missing_image_is_io_error() {
        let err = Generator::new()
            .generate_from_image(Path::new("/nonexistent/chair.jpg"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Image { .. }));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
