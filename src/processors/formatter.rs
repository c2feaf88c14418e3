// asciify/src/processors/formatter.rs
use crate::core::{AsciiError, Result};

/// Wraps `chars` into rows of `width` characters joined by `\n`.
/// The last row keeps whatever is left over and is not padded.
pub fn format_lines(chars: &[char], width: u32) -> Result<String> {
    if width == 0 {
        return Err(AsciiError::InvalidParameter(
            "Line width must be a positive integer".to_string(),
        ));
    }

    let rows: Vec<String> = chars
        .chunks(width as usize)
        .map(|row| row.iter().collect())
        .collect();

    Ok(rows.join("\n"))
}
