// asciify/src/processors/grayscale.rs
use image::{DynamicImage, GenericImageView};

/// Converts `image` to a single luminance channel using the `image` crate's
/// standard luma weights. Any alpha channel is dropped.
pub fn convert_to_grayscale(image: &DynamicImage) -> DynamicImage {
    log::debug!(
        "Converting {:?} image of {:?} to grayscale",
        image.color(),
        image.dimensions()
    );

    DynamicImage::ImageLuma8(image.to_luma8())
}
