use crate::config::TilingConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tile-dataset")]
#[command(about = "Cut an image and its label mask into overlapping tiles sorted into class folders")]
#[command(version)]
pub struct Args {
    /// Path to input image
    #[arg(short, long, value_name = "FILE")]
    pub image: PathBuf,

    /// Path to label image (pixel-aligned with the input image)
    #[arg(short, long, value_name = "FILE")]
    pub label: PathBuf,

    /// Path to output dataset; must contain water/, edge/ and green/
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Tile edge length in pixels; tiles overlap by half
    #[arg(short = 'n', long, value_name = "N", default_value_t = 50)]
    pub tile_size: usize,

    /// Label code that marks water pixels
    #[arg(long, value_name = "VALUE", default_value_t = 0)]
    pub water_value: i32,

    /// JPEG quality for written tiles
    #[arg(short, long, value_name = "Q", default_value_t = 75)]
    pub quality: u8,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn tiling_config(&self) -> Result<TilingConfig> {
        TilingConfig::new(self.tile_size, self.water_value, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_flags_and_defaults() {
        let args = Args::try_parse_from(["tile-dataset", "-i", "a.png", "-l", "b.png", "-o", "out"])
            .unwrap();
        assert_eq!(args.image, PathBuf::from("a.png"));
        assert_eq!(args.label, PathBuf::from("b.png"));
        assert_eq!(args.output, PathBuf::from("out"));

        let config = args.tiling_config().unwrap();
        assert_eq!(config, TilingConfig::default());
    }

    #[test]
    fn test_missing_label_is_rejected() {
        let parsed = Args::try_parse_from(["tile-dataset", "--image", "a.png", "--output", "out"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_tile_size_override() {
        let args = Args::try_parse_from([
            "tile-dataset", "-i", "a.png", "-l", "b.png", "-o", "out", "--tile-size", "64",
        ])
        .unwrap();
        let config = args.tiling_config().unwrap();
        assert_eq!(config.tile_size, 64);
        assert_eq!(config.stride, 32);
    }
}
