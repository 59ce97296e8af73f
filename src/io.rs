use crate::error::{Result, TileDatasetError};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ExtendedColorType};
use log::{debug, info};
use ndarray::{Array2, Array3, ArrayView3};
use std::fs;
use std::path::Path;

/// Read the original image as a `(rows, cols, channels)` array.
///
/// Grayscale input keeps a single channel; everything else is reduced to RGB,
/// since the JPEG tiles cannot carry alpha.
pub fn load_original(path: &Path) -> Result<Array3<u8>> {
    info!("Opening input image: {}", path.display());

    #[cfg(feature = "gdal")]
    {
        if geo::is_geotiff(path) {
            return geo::read_original(path);
        }
    }

    let img = open_image(path)?;
    let (width, height) = (img.width() as usize, img.height() as usize);

    let (channels, raw) = if img.color().has_color() {
        (3, img.to_rgb8().into_raw())
    } else {
        (1, img.to_luma8().into_raw())
    };

    debug!("Decoded {}x{} image with {} channel(s)", height, width, channels);
    Ok(Array3::from_shape_vec((height, width, channels), raw)?)
}

/// Read the label image as a `(rows, cols)` array of label codes.
///
/// Codes come from the luminance channel at the source bit depth, so an
/// 8-bit mask keeps its 0..=255 values and a 16-bit mask its 0..=65535 values.
pub fn load_label(path: &Path) -> Result<Array2<i32>> {
    info!("Opening label image: {}", path.display());

    #[cfg(feature = "gdal")]
    {
        if geo::is_geotiff(path) {
            return geo::read_label(path);
        }
    }

    let img = open_image(path)?;
    let (width, height) = (img.width() as usize, img.height() as usize);

    let codes: Vec<i32> = match img.color() {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => img
            .to_luma16()
            .into_raw()
            .into_iter()
            .map(i32::from)
            .collect(),
        _ => img.to_luma8().into_raw().into_iter().map(i32::from).collect(),
    };

    Ok(Array2::from_shape_vec((height, width), codes)?)
}

fn open_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| TileDatasetError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode a `(rows, cols, channels)` tile as JPEG.
///
/// The parent directory must already exist.
pub fn write_tile(path: &Path, tile: &ArrayView3<'_, u8>, quality: u8) -> Result<()> {
    let (rows, cols, channels) = tile.dim();
    let color = match channels {
        1 => ExtendedColorType::L8,
        _ => ExtendedColorType::Rgb8,
    };

    // Views into the full image are strided; iter() walks them in logical order
    let pixels: Vec<u8> = tile.iter().copied().collect();

    // Encode fully in memory so a failed encode never leaves a partial file
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode(&pixels, cols as u32, rows as u32, color)
        .map_err(|source| TileDatasetError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, &buf).map_err(|source| TileDatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(feature = "gdal")]
mod geo {
    use crate::error::{Result, TileDatasetError};
    use gdal::raster::RasterBand;
    use gdal::Dataset;
    use log::debug;
    use ndarray::{Array2, Array3, Axis};
    use std::path::Path;

    pub fn is_geotiff(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("tif") || ext.eq_ignore_ascii_case("tiff"))
            .unwrap_or(false)
    }

    fn open(path: &Path) -> Result<Dataset> {
        Dataset::open(path).map_err(|source| gdal_error(path, source))
    }

    fn gdal_error(path: &Path, source: gdal::errors::GdalError) -> TileDatasetError {
        TileDatasetError::Gdal {
            path: path.to_path_buf(),
            source,
        }
    }

    fn read_plane<T: gdal::raster::GdalType + Copy>(
        path: &Path,
        band: &RasterBand,
        width: usize,
        height: usize,
    ) -> Result<Array2<T>> {
        let buffer = band
            .read_as::<T>((0, 0), (width, height), (width, height), None)
            .map_err(|source| gdal_error(path, source))?;
        let data_vec: Vec<T> = buffer.into_iter().collect();
        Ok(Array2::from_shape_vec((height, width), data_vec)?)
    }

    /// Bands 1..=3 as RGB when present, otherwise band 1 as grayscale
    pub fn read_original(path: &Path) -> Result<Array3<u8>> {
        let dataset = open(path)?;
        let (width, height) = dataset.raster_size();
        let channels = if dataset.raster_count() as usize >= 3 { 3 } else { 1 };

        debug!("GDAL raster {}x{}, reading {} band(s)", height, width, channels);

        let mut data = Array3::<u8>::zeros((height, width, channels));
        for band_offset in 0..channels {
            let band = dataset
                .rasterband(band_offset + 1)
                .map_err(|source| gdal_error(path, source))?;
            let plane = read_plane::<u8>(path, &band, width, height)?;
            data.index_axis_mut(Axis(2), band_offset).assign(&plane);
        }
        Ok(data)
    }

    pub fn read_label(path: &Path) -> Result<Array2<i32>> {
        let dataset = open(path)?;
        let (width, height) = dataset.raster_size();
        let band = dataset
            .rasterband(1)
            .map_err(|source| gdal_error(path, source))?;
        read_plane::<i32>(path, &band, width, height)
    }

}
