//! Owned pixel buffers
//!
//! A `MosaicBuffer` holds one 8-bit sample per sensor site; an `RgbRaster` is an
//! interleaved three-channel image. Neither aliases the other: an RGB view of a mosaic
//! is always a separately built copy.

mod mosaic;
mod rgb;

pub use mosaic::MosaicBuffer;
pub use rgb::RgbRaster;

use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::common::types::PixelPos;

pub(crate) fn check_bounds(pos: PixelPos, width: usize, height: usize) -> Result<()> {
    if pos.x >= width || pos.y >= height {
        return Err(CodecError::InvalidCoordinate {
            x: pos.x,
            y: pos.y,
            width,
            height,
        });
    }
    Ok(())
}

/// Byte length of a `width` x `height` raster with `channels` bytes per pixel.
pub(crate) fn sample_len(width: usize, height: usize, channels: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(CodecError::InvalidDimensions(width, height));
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(CodecError::InvalidDimensions(width, height))
}

/// Dimensions as the `u32` pair image encoders take.
pub(crate) fn dimensions_u32(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(CodecError::InvalidDimensions(width, height)),
    }
}

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(CodecError::BufferSizeMismatch { expected, actual });
    }
    Ok(())
}

/// The raster currently on screen for a document.
#[derive(Debug, Clone, Copy)]
pub enum RasterView<'a> {
    Rgb(&'a RgbRaster),
    Gray(&'a MosaicBuffer),
}

impl RasterView<'_> {
    pub fn width(&self) -> usize {
        match self {
            Self::Rgb(r) => r.width(),
            Self::Gray(m) => m.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Rgb(r) => r.height(),
            Self::Gray(m) => m.height(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Rgb(r) => r.as_bytes(),
            Self::Gray(m) => m.as_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_len_rejects_overflowing_sizes() {
        assert_eq!(sample_len(4, 3, 3).unwrap(), 36);
        assert!(matches!(sample_len(0, 3, 1), Err(CodecError::InvalidDimensions(0, 3))));
        assert!(matches!(
            sample_len(usize::MAX, 2, 1),
            Err(CodecError::InvalidDimensions(usize::MAX, 2))
        ));
        assert!(matches!(
            sample_len(usize::MAX / 2, 2, 3),
            Err(CodecError::InvalidDimensions(_, 2))
        ));
    }

    #[test]
    fn encoder_dimensions_must_fit_u32() {
        assert_eq!(dimensions_u32(640, 480).unwrap(), (640, 480));
        let too_wide = u32::MAX as usize + 1;
        assert!(matches!(
            dimensions_u32(too_wide, 1),
            Err(CodecError::InvalidDimensions(w, 1)) if w == too_wide
        ));
    }
}
