// asciify/src/cli.rs
use crate::core::{ConvertConfig, ResizeAlgorithm, DEFAULT_WIDTH};
use crate::utils::parse_silhouette;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asciify", version, about = "Turn an image into ASCII art")]
pub struct Cli {
    /// Path to image file
    #[arg(short, long)]
    pub path: PathBuf,

    /// Make ASCII silhouette (true, yes, y or t)
    #[arg(short, long)]
    pub silhouette: Option<String>,

    /// Output width in characters
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Resampling filter used when scaling
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bicubic)]
    pub filter: Algorithm,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

impl Cli {
    pub fn silhouette(&self) -> bool {
        parse_silhouette(self.silhouette.as_deref())
    }

    pub fn to_config(&self) -> ConvertConfig {
        ConvertConfig {
            width: self.width,
            silhouette: self.silhouette(),
            algorithm: self.filter.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_required() {
        assert!(Cli::try_parse_from(["asciify"]).is_err());
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["asciify", "-p", "cat.png"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("cat.png"));
        assert!(!cli.silhouette());

        let config = cli.to_config();
        assert_eq!(config.width, 100);
        assert_eq!(config.algorithm, ResizeAlgorithm::Bicubic);
    }

    #[test]
    fn silhouette_takes_a_truth_value() {
        let cli = Cli::try_parse_from(["asciify", "--path", "cat.png", "-s", "Yes"]).unwrap();
        assert!(cli.to_config().silhouette);

        let cli = Cli::try_parse_from(["asciify", "--path", "cat.png", "--silhouette", "nope"])
            .unwrap();
        assert!(!cli.to_config().silhouette);
    }

    #[test]
    fn width_and_filter() {
        let cli =
            Cli::try_parse_from(["asciify", "-p", "a.png", "-w", "40", "-f", "lanczos3"]).unwrap();
        let config = cli.to_config();
        assert_eq!(config.width, 40);
        assert_eq!(config.algorithm, ResizeAlgorithm::Lanczos3);
    }
}
