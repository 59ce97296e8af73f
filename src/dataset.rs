use crate::classify::{classify_window, TileClass};
use crate::config::TilingConfig;
use crate::error::{Result, TileDatasetError};
use crate::io::write_tile;
use crate::tiling::TileGrid;
use log::{debug, info};
use ndarray::{s, Array2, Array3};
use std::path::{Path, PathBuf};

/// Tiles written during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub total: usize,
    pub water: usize,
    pub edge: usize,
    pub green: usize,
}

impl DatasetSummary {
    fn record(&mut self, class: TileClass) {
        self.total += 1;
        match class {
            TileClass::Water => self.water += 1,
            TileClass::Edge => self.edge += 1,
            TileClass::Green => self.green += 1,
        }
    }

    pub fn count(&self, class: TileClass) -> usize {
        match class {
            TileClass::Water => self.water,
            TileClass::Edge => self.edge,
            TileClass::Green => self.green,
        }
    }
}

/// `<output>/<class>/img_orig_<index>.jpg`
pub fn tile_path(output: &Path, class: TileClass, index: usize) -> PathBuf {
    output
        .join(class.dir_name())
        .join(format!("img_orig_{}.jpg", index))
}

/// Fail unless both rasters cover the same rows and columns
pub fn check_dimensions(original: &Array3<u8>, label: &Array2<i32>) -> Result<()> {
    let (rows, cols, _) = original.dim();
    let (label_rows, label_cols) = label.dim();

    if rows != label_rows || cols != label_cols {
        return Err(TileDatasetError::DimensionMismatch {
            original: (rows, cols),
            label: (label_rows, label_cols),
        });
    }
    Ok(())
}

/// Cut the image pair into tiles and write each original-image tile under the
/// folder of its class.
///
/// Every tile takes the next index whatever its class. Class folders are not
/// created here, and tiles written before a failure are left in place.
pub fn generate_dataset(
    output: &Path,
    original: &Array3<u8>,
    label: &Array2<i32>,
    config: &TilingConfig,
) -> Result<DatasetSummary> {
    let (rows, cols, _) = original.dim();
    info!("w: {}  h: {}", rows, cols);

    check_dimensions(original, label)?;

    let n = config.tile_size;
    let grid = TileGrid::new(rows, cols, n, config.stride);
    info!(
        "Tiling {}x{} with {}px tiles, stride {}: {} tiles",
        rows, cols, n, config.stride, grid.total_tiles
    );

    let mut summary = DatasetSummary::default();
    for (cnt, origin) in grid.iter() {
        let (r, c) = (origin.row, origin.col);
        let label_window = label.slice(s![r..r + n, c..c + n]);
        let (class, perc_water) = classify_window(&label_window, config.water_value);

        debug!(
            "Tile {} at ({}, {}): water {:.3} → {}",
            cnt, r, c, perc_water, class
        );

        let tile = original.slice(s![r..r + n, c..c + n, ..]);
        write_tile(&tile_path(output, class, cnt), &tile, config.quality)?;
        summary.record(class);
    }

    Ok(summary)
}
