// asciify/src/utils/mod.rs

/// Tokens accepted as "true" for string-valued flags, compared case-insensitively.
const TRUTHY: [&str; 4] = ["true", "yes", "y", "t"];

pub fn is_truthy(value: &str) -> bool {
    let value = value.to_lowercase();
    TRUTHY.contains(&value.as_str())
}

/// Resolves the optional `--silhouette` value. Absent means false.
pub fn parse_silhouette(value: Option<&str>) -> bool {
    value.map(is_truthy).unwrap_or(false)
}

pub fn calculate_aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 {
        0.0
    } else {
        height as f32 / width as f32
    }
}
