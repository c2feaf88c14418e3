// asciify/src/processors/scaler.rs
use crate::core::{AsciiError, ResizeAlgorithm, Result};
use crate::utils::calculate_aspect_ratio;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

pub struct Scaler {
    algorithm: ResizeAlgorithm,
}

impl Scaler {
    pub fn new(algorithm: ResizeAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Resizes `image` to `target_width` columns, keeping the aspect ratio.
    pub fn scale(&self, image: &DynamicImage, target_width: u32) -> Result<DynamicImage> {
        let (orig_width, orig_height) = image.dimensions();
        let (width, height) = Self::target_dimensions(orig_width, orig_height, target_width)?;

        if width == orig_width && height == orig_height {
            log::debug!("Image dimensions unchanged, skipping resize");
            return Ok(image.clone());
        }

        log::debug!(
            "Scaling image from {}x{} (aspect {:.3}) to {}x{}",
            orig_width,
            orig_height,
            calculate_aspect_ratio(orig_width, orig_height),
            width,
            height
        );

        Ok(image.resize_exact(width, height, self.get_filter_type()))
    }

    /// `height = (orig_height / orig_width) * target_width` in `f64`, truncated.
    /// The ratio is taken first, so some shapes land one row below the exact
    /// quotient (5x23 at width 100 gives 459, not 460).
    pub fn target_dimensions(
        orig_width: u32,
        orig_height: u32,
        target_width: u32,
    ) -> Result<(u32, u32)> {
        if orig_width == 0 || orig_height == 0 || target_width == 0 {
            return Err(AsciiError::InvalidDimensions {
                width: target_width,
                height: orig_height,
            });
        }

        let aspect_ratio = f64::from(orig_height) / f64::from(orig_width);
        let height = aspect_ratio * f64::from(target_width);
        if height >= f64::from(u32::MAX) {
            return Err(AsciiError::InvalidDimensions {
                width: target_width,
                height: u32::MAX,
            });
        }
        let height = height as u32;

        if height == 0 {
            return Err(AsciiError::InvalidDimensions {
                width: target_width,
                height,
            });
        }

        Ok((target_width, height))
    }

    fn get_filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Self::new(ResizeAlgorithm::default())
    }
}
