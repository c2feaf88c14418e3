// asciify/src/processors/mod.rs
mod channel;
mod formatter;
mod grayscale;
mod loader;
mod mapper;
mod scaler;

pub use channel::Channel;
pub use formatter::format_lines;
pub use grayscale::convert_to_grayscale;
pub use loader::Loader;
pub use mapper::{AsciiRamp, DEFAULT_BUCKET_WIDTH, DEFAULT_RAMP};
pub use scaler::Scaler;
