use log::debug;

/// Top-left corner of a tile, as (axis 0, axis 1) offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOrigin {
    pub row: usize,
    pub col: usize,
}

/// Half-overlapping square tiles over a raster.
///
/// Offsets on each axis run over `0..(extent - tile_size)` in steps of
/// `stride`. The stop is exclusive, so a tile flush with the far edge is never
/// produced and any remainder past the last offset is dropped.
pub struct TileGrid {
    stride: usize,
    pub num_tiles_row: usize,
    pub num_tiles_col: usize,
    pub total_tiles: usize,
}

impl TileGrid {
    pub fn new(raster_rows: usize, raster_cols: usize, tile_size: usize, stride: usize) -> Self {
        let num_tiles_row = steps_along(raster_rows, tile_size, stride);
        let num_tiles_col = steps_along(raster_cols, tile_size, stride);
        let total_tiles = num_tiles_row * num_tiles_col;

        debug!(
            "TileGrid: {}x{} raster, tile_size={}, stride={} → {}x{} tiles ({} total)",
            raster_rows, raster_cols, tile_size, stride, num_tiles_row, num_tiles_col, total_tiles
        );

        Self {
            stride,
            num_tiles_row,
            num_tiles_col,
            total_tiles,
        }
    }

    pub fn iter(&self) -> TileIterator<'_> {
        TileIterator::new(self)
    }

    /// Origin of the tile at a linear index; axis 1 varies fastest
    fn get_tile_origin(&self, tile_idx: usize) -> TileOrigin {
        let tile_row = tile_idx / self.num_tiles_col;
        let tile_col = tile_idx % self.num_tiles_col;

        TileOrigin {
            row: tile_row * self.stride,
            col: tile_col * self.stride,
        }
    }
}

/// Number of offsets in `(0..extent - tile_size).step_by(stride)`
fn steps_along(extent: usize, tile_size: usize, stride: usize) -> usize {
    if stride == 0 || extent <= tile_size {
        return 0;
    }
    let span = extent - tile_size;
    (span + stride - 1) / stride
}

pub struct TileIterator<'a> {
    grid: &'a TileGrid,
    current_idx: usize,
}

impl<'a> TileIterator<'a> {
    fn new(grid: &'a TileGrid) -> Self {
        Self {
            grid,
            current_idx: 0,
        }
    }
}

impl<'a> Iterator for TileIterator<'a> {
    type Item = (usize, TileOrigin);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_idx < self.grid.total_tiles {
            let origin = self.grid.get_tile_origin(self.current_idx);
            let idx = self.current_idx;
            self.current_idx += 1;
            Some((idx, origin))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.total_tiles - self.current_idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileIterator<'_> {}
