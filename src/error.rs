use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileDatasetError {
    #[error("failed to load image {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[cfg(feature = "gdal")]
    #[error("GDAL error reading {path}: {source}")]
    Gdal {
        path: PathBuf,
        #[source]
        source: gdal::errors::GdalError,
    },

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error(
        "dimensions have a different shape: original is {}x{}, label is {}x{}",
        .original.0, .original.1, .label.0, .label.1
    )]
    DimensionMismatch {
        original: (usize, usize),
        label: (usize, usize),
    },

    #[error("failed to write tile {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tile size: {0} (must be at least 2)")]
    InvalidTileSize(usize),

    #[error("Invalid JPEG quality: {0} (must be within 1..=100)")]
    InvalidQuality(u8),
}

/// Coarse grouping of failures, matching the stage of the pipeline that raised them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Load,
    DimensionMismatch,
    Write,
    Config,
}

impl TileDatasetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TileDatasetError::Load { .. } | TileDatasetError::Shape(_) => ErrorKind::Load,
            #[cfg(feature = "gdal")]
            TileDatasetError::Gdal { .. } => ErrorKind::Load,
            TileDatasetError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            TileDatasetError::Write { .. } | TileDatasetError::Io { .. } => ErrorKind::Write,
            TileDatasetError::InvalidTileSize(_) | TileDatasetError::InvalidQuality(_) => {
                ErrorKind::Config
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TileDatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_shapes() {
        let err = TileDatasetError::DimensionMismatch {
            original: (100, 100),
            label: (100, 90),
        };
        let msg = err.to_string();
        assert!(msg.contains("100x100"));
        assert!(msg.contains("100x90"));
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn test_io_error_is_write_kind() {
        let err = TileDatasetError::Io {
            path: PathBuf::from("out/water/img_orig_0.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.kind(), ErrorKind::Write);
    }
}
