//! Non-RAW image files through the `image` crate.

use std::path::Path;

use image::{ColorType, ImageFormat};
use tracing::{debug, instrument};

use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::raster::{MosaicBuffer, RgbRaster, dimensions_u32};

/// Formats accepted for documents that are not RAW sensor dumps.
pub const SUPPORTED_FORMATS: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
];

/// Picks the image format from the extension of `path`.
pub fn format_from_path(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|f| SUPPORTED_FORMATS.contains(f))
        .ok_or_else(|| CodecError::UnsupportedFormat(path.display().to_string()))
}

/// Loads a PNG/JPEG/BMP/TIFF file as 8-bit RGB.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_non_raw_image<P: AsRef<Path>>(path: P) -> Result<RgbRaster> {
    let path = path.as_ref();
    format_from_path(path)?;

    let decoded = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) => CodecError::InputReadError(format!("{}: {}", path.display(), io)),
        other => CodecError::DecodeError(format!("{}: {}", path.display(), other)),
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    debug!("Decoded {}x{} image", width, height);

    RgbRaster::new(width as usize, height as usize, rgb.into_raw())
}

/// Saves an RGB raster in `format`.
pub fn save_non_raw_image<P: AsRef<Path>>(path: P, raster: &RgbRaster, format: ImageFormat) -> Result<()> {
    save_buffer(path.as_ref(), raster.as_bytes(), raster.width(), raster.height(), ColorType::Rgb8, format)
}

/// Saves a mosaic as an 8-bit grayscale image in `format`.
pub fn save_gray_image<P: AsRef<Path>>(path: P, mosaic: &MosaicBuffer, format: ImageFormat) -> Result<()> {
    save_buffer(path.as_ref(), mosaic.as_bytes(), mosaic.width(), mosaic.height(), ColorType::L8, format)
}

fn save_buffer(
    path: &Path,
    data: &[u8],
    width: usize,
    height: usize,
    color: ColorType,
    format: ImageFormat,
) -> Result<()> {
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(CodecError::UnsupportedFormat(format!("{format:?}")));
    }
    let (w, h) = dimensions_u32(width, height)?;
    debug!(?format, "Saving {}x{} image to {}", width, height, path.display());
    image::save_buffer_with_format(path, data, w, h, color, format).map_err(|e| match e {
        image::ImageError::IoError(io) => CodecError::OutputWriteError(format!("{}: {}", path.display(), io)),
        other => CodecError::EncodeError(format!("{}: {}", path.display(), other)),
    })
}
