// asciify/src/processors/channel.rs
use crate::core::{AsciiError, Result};
use image::DynamicImage;

/// Which per-pixel sample feeds the character mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Luminance,
    Alpha,
}

impl Channel {
    pub fn for_mode(silhouette: bool) -> Self {
        if silhouette {
            Channel::Alpha
        } else {
            Channel::Luminance
        }
    }

    /// Row-major samples of this channel, one per pixel.
    pub fn extract(self, image: &DynamicImage) -> Result<Vec<u8>> {
        match self {
            Channel::Luminance => match image.as_luma8() {
                Some(gray) => Ok(gray.as_raw().clone()),
                None => Ok(image.to_luma8().into_raw()),
            },
            Channel::Alpha => {
                let color = image.color();
                if !color.has_alpha() {
                    return Err(AsciiError::MissingAlphaChannel {
                        color: format!("{:?}", color),
                    });
                }

                Ok(image.to_rgba8().pixels().map(|p| p[3]).collect())
            }
        }
    }
}
