// asciify/src/processors/loader.rs
use crate::core::{AsciiError, Result};
use image::{DynamicImage, GenericImageView, ImageError, ImageReader};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Loader {
    max_dimensions: Option<(u32, u32)>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimensions: Some((100_000, 100_000)),
        }
    }

    pub fn with_max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_dimensions = Some((width, height));
        self
    }

    /// Opens and decodes the image at `path`.
    ///
    /// Every failure to produce a decoded image (missing file, permissions,
    /// empty or corrupt data, unknown format) is reported as
    /// [`AsciiError::Open`]. The file handle belongs to the reader and is
    /// closed when it goes out of scope, on the error paths included.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let image = Self::decode(path).map_err(|source| AsciiError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.check_dimensions(&image)?;

        let (width, height) = image.dimensions();
        log::info!(
            "Loaded image: {}x{} pixels, color: {:?}",
            width,
            height,
            image.color()
        );

        Ok(image)
    }

    pub fn load_from_bytes(&self, data: &[u8]) -> Result<DynamicImage> {
        let image = image::load_from_memory(data)?;
        self.check_dimensions(&image)?;

        Ok(image)
    }

    fn decode(path: &Path) -> std::result::Result<DynamicImage, ImageError> {
        let metadata = std::fs::metadata(path)?;
        if metadata.len() == 0 {
            return Err(ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "file is empty",
            )));
        }

        ImageReader::open(path)?.with_guessed_format()?.decode()
    }

    fn check_dimensions(&self, image: &DynamicImage) -> Result<()> {
        if let Some((max_w, max_h)) = self.max_dimensions {
            let (width, height) = image.dimensions();
            if width > max_w || height > max_h {
                return Err(AsciiError::ImageTooLarge {
                    width,
                    height,
                    max_width: max_w,
                    max_height: max_h,
                });
            }
        }

        Ok(())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_an_open_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = Loader::new().load(&path).unwrap_err();
        match err {
            AsciiError::Open { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn open_failure_keeps_cause_out_of_message() {
        use std::error::Error;

        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = Loader::new().load(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Unable to open image file {}", path.display())
        );

        let cause = err.source().expect("open failure carries its cause").to_string();
        assert!(!err.to_string().contains(&cause));
    }

    #[test]
    fn empty_file_is_an_open_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");
        std::fs::write(&path, b"").unwrap();

        assert!(matches!(
            Loader::new().load(&path),
            Err(AsciiError::Open { .. })
        ));
    }

    #[test]
    fn garbage_file_is_an_open_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noise.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        assert!(matches!(
            Loader::new().load(&path),
            Err(AsciiError::Open { .. })
        ));
    }

    #[test]
    fn dimension_limit_is_enforced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.png");
        GrayImage::from_pixel(20, 10, Luma([0])).save(&path).unwrap();

        let loader = Loader::new().with_max_dimensions(10, 10);
        assert!(matches!(
            loader.load(&path),
            Err(AsciiError::ImageTooLarge { width: 20, .. })
        ));
    }
}
