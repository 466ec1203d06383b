use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::types::PixelPos;
use crate::image_pipeline::raster::{check_bounds, check_len, sample_len};

/// Interleaved 8-bit RGB raster, row-major `[R, G, B, R, G, B, ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbRaster {
    /// Wraps `data`, which must hold exactly `width * height * 3` bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        check_len(sample_len(width, height, 3)?, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn zeroed(width: usize, height: usize) -> Result<Self> {
        let len = sample_len(width, height, 3)?;
        Self::new(width, height, vec![0; len])
    }

    /// Caller guarantees non-zero dimensions and a matching length.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * 3);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, pos: PixelPos) -> Result<[u8; 3]> {
        check_bounds(pos, self.width, self.height)?;
        let i = (pos.y * self.width + pos.x) * 3;
        Ok([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    pub fn set_pixel(&mut self, pos: PixelPos, rgb: [u8; 3]) -> Result<()> {
        check_bounds(pos, self.width, self.height)?;
        let i = (pos.y * self.width + pos.x) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
        Ok(())
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let stride = self.width * 3;
        &mut self.data[y * stride..(y + 1) * stride]
    }

    pub(crate) fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width * 3)
    }
}
