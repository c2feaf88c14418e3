// asciify/src/core/mod.rs
mod converter;

pub use converter::AsciiConverter;

use crate::processors::AsciiRamp;
use std::path::PathBuf;
use thiserror::Error;

/// Target width used when none is given.
pub const DEFAULT_WIDTH: u32 = 100;

/// Upper bound for the target width, same limit the loader applies to inputs.
pub const MAX_WIDTH: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    #[default]
    Bicubic,
    Lanczos3,
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub width: u32,
    pub silhouette: bool,
    pub algorithm: ResizeAlgorithm,
    pub ramp: AsciiRamp,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            silhouette: false,
            algorithm: ResizeAlgorithm::default(),
            ramp: AsciiRamp::default(),
        }
    }
}

impl ConvertConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(AsciiError::InvalidParameter(
                "Width must be a positive integer".to_string(),
            ));
        }

        if self.width > MAX_WIDTH {
            return Err(AsciiError::InvalidParameter(format!(
                "Width too large (max {} characters)",
                MAX_WIDTH
            )));
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum AsciiError {
    #[error("Unable to open image file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel value {value} is outside the range 0-255")]
    PixelOutOfRange { value: u32 },

    #[error("No alpha channel present in {color} image, cannot make a silhouette")]
    MissingAlphaChannel { color: String },

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image dimensions {width}x{height} exceed maximum {max_width}x{max_height}")]
    ImageTooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid character ramp: {0}")]
    InvalidRamp(String),
}

pub type Result<T> = std::result::Result<T, AsciiError>;

pub fn validate_config(config: &ConvertConfig) -> Result<()> {
    config.validate()
}
