// asciify/src/core/converter.rs
use super::{ConvertConfig, Result};
use crate::processors::{convert_to_grayscale, format_lines, Channel, Loader, Scaler};
use image::DynamicImage;
use std::path::Path;

/// Runs the whole image to text pipeline for one configuration.
pub struct AsciiConverter {
    config: ConvertConfig,
    loader: Loader,
    scaler: Scaler,
}

impl AsciiConverter {
    pub fn new(config: ConvertConfig) -> Result<Self> {
        config.validate()?;
        let scaler = Scaler::new(config.algorithm);

        Ok(Self {
            config,
            loader: Loader::new(),
            scaler,
        })
    }

    pub fn with_loader(mut self, loader: Loader) -> Self {
        self.loader = loader;
        self
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    pub fn convert_path<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let image = self.loader.load(path.as_ref())?;
        self.convert_image(&image)
    }

    pub fn convert_bytes(&self, data: &[u8]) -> Result<String> {
        let image = self.loader.load_from_bytes(data)?;
        self.convert_image(&image)
    }

    pub fn convert_image(&self, image: &DynamicImage) -> Result<String> {
        let channel = Channel::for_mode(self.config.silhouette);

        let mut image = self.scaler.scale(image, self.config.width)?;
        if channel == Channel::Luminance {
            image = convert_to_grayscale(&image);
        }

        let samples = channel.extract(&image)?;
        log::debug!("Mapping {} {:?} samples to characters", samples.len(), channel);

        let chars = self.config.ramp.map_pixels(samples)?;
        format_lines(&chars, self.config.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AsciiError;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn white_image_is_all_brightest() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(200, 100, Luma([255])));
        let converter = AsciiConverter::new(ConvertConfig::default()).unwrap();

        let text = converter.convert_image(&image).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 50);
        assert!(rows.iter().all(|row| *row == "@".repeat(100)));
    }

    #[test]
    fn silhouette_follows_alpha() {
        let mut image = RgbaImage::from_pixel(4, 2, Rgba([255, 255, 255, 0]));
        for x in 0..4 {
            image.put_pixel(x, 1, Rgba([0, 0, 0, 255]));
        }
        let config = ConvertConfig {
            width: 4,
            silhouette: true,
            ..Default::default()
        };

        let text = AsciiConverter::new(config)
            .unwrap()
            .convert_image(&DynamicImage::ImageRgba8(image))
            .unwrap();
        assert_eq!(text, "####\n@@@@");
    }

    #[test]
    fn silhouette_needs_alpha() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([128])));
        let config = ConvertConfig {
            width: 8,
            silhouette: true,
            ..Default::default()
        };

        let result = AsciiConverter::new(config).unwrap().convert_image(&image);
        assert!(matches!(result, Err(AsciiError::MissingAlphaChannel { .. })));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = ConvertConfig {
            width: 0,
            ..Default::default()
        };
        assert!(AsciiConverter::new(config).is_err());
    }
}
