mod cli;
mod core;
mod processors;
mod utils;

pub use crate::cli::{Algorithm, Cli};
pub use crate::core::{
    validate_config, AsciiConverter, AsciiError, ConvertConfig, ResizeAlgorithm, Result,
    DEFAULT_WIDTH, MAX_WIDTH,
};
pub use crate::processors::{
    convert_to_grayscale, format_lines, AsciiRamp, Channel, Loader, Scaler,
    DEFAULT_BUCKET_WIDTH, DEFAULT_RAMP,
};
pub use crate::utils::{calculate_aspect_ratio, is_truthy, parse_silhouette};

pub mod prelude {
    pub use crate::{AsciiConverter, AsciiRamp, Channel, ConvertConfig, Loader, ResizeAlgorithm, Scaler};
}

// Re-export commonly used types
pub use image::DynamicImage;
