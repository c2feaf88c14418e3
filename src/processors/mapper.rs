// asciify/src/processors/mapper.rs
use crate::core::{AsciiError, Result};

/// Characters of the default ramp, darkest band first.
pub const DEFAULT_RAMP: [char; 11] = ['#', '?', '%', '.', 'S', '+', '.', '*', ':', ',', '@'];

/// Span of raw values that share one ramp character.
pub const DEFAULT_BUCKET_WIDTH: u32 = 25;

/// Highest pixel value a ramp has to cover.
const MAX_PIXEL_VALUE: u32 = 255;

/// An ordered set of characters and the width of the value band each one
/// covers. Index 0 is the lowest band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiRamp {
    chars: Vec<char>,
    bucket_width: u32,
}

impl AsciiRamp {
    pub fn new(chars: impl Into<Vec<char>>, bucket_width: u32) -> Result<Self> {
        let chars = chars.into();

        if bucket_width == 0 {
            return Err(AsciiError::InvalidRamp(
                "bucket width must be positive".to_string(),
            ));
        }

        // floor(255 / bucket_width) has to land on a real character
        let needed = (MAX_PIXEL_VALUE / bucket_width + 1) as usize;
        if chars.len() < needed {
            return Err(AsciiError::InvalidRamp(format!(
                "{} characters with bucket width {} do not cover 0-255 (need {})",
                chars.len(),
                bucket_width,
                needed
            )));
        }

        Ok(Self {
            chars,
            bucket_width,
        })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn bucket_width(&self) -> u32 {
        self.bucket_width
    }

    /// Character for a single value: `chars[value / bucket_width]`.
    pub fn map_value(&self, value: u32) -> Result<char> {
        if value > MAX_PIXEL_VALUE {
            return Err(AsciiError::PixelOutOfRange { value });
        }

        self.chars
            .get((value / self.bucket_width) as usize)
            .copied()
            .ok_or(AsciiError::PixelOutOfRange { value })
    }

    /// Maps every value in order. Fails on the first out-of-range value.
    pub fn map_pixels<I, V>(&self, pixels: I) -> Result<Vec<char>>
    where
        I: IntoIterator<Item = V>,
        V: Into<u32>,
    {
        pixels
            .into_iter()
            .map(|value| self.map_value(value.into()))
            .collect()
    }
}

impl Default for AsciiRamp {
    fn default() -> Self {
        Self {
            chars: DEFAULT_RAMP.to_vec(),
            bucket_width: DEFAULT_BUCKET_WIDTH,
        }
    }
}
