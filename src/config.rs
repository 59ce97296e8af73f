use crate::error::{Result, TileDatasetError};

pub const DEFAULT_TILE_SIZE: usize = 50;
pub const DEFAULT_WATER_VALUE: i32 = 0;
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Tiling parameters for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingConfig {
    pub tile_size: usize,
    /// Offset between neighbouring tiles, always `tile_size / 2`
    pub stride: usize,
    pub water_value: i32,
    pub quality: u8,
}

impl TilingConfig {
    pub fn new(tile_size: usize, water_value: i32, quality: u8) -> Result<Self> {
        validate_tile_size(tile_size)?;
        validate_quality(quality)?;
        Ok(Self {
            tile_size,
            stride: tile_size / 2,
            water_value,
            quality,
        })
    }
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            stride: DEFAULT_TILE_SIZE / 2,
            water_value: DEFAULT_WATER_VALUE,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Validate tile size (stride of half a tile must be non-zero)
pub fn validate_tile_size(tile_size: usize) -> Result<()> {
    if tile_size < 2 {
        return Err(TileDatasetError::InvalidTileSize(tile_size));
    }
    Ok(())
}

pub fn validate_quality(quality: u8) -> Result<()> {
    if !(1..=100).contains(&quality) {
        return Err(TileDatasetError::InvalidQuality(quality));
    }
    Ok(())
}
