use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::types::PixelPos;
use crate::image_pipeline::raster::{check_bounds, check_len, sample_len};

/// Single-channel 8-bit Bayer mosaic, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl MosaicBuffer {
    /// Wraps `data`, which must hold exactly `width * height` samples.
    ///
    /// Sizes whose RGB rendition would not fit in memory are rejected up front.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        sample_len(width, height, 3)?;
        check_len(sample_len(width, height, 1)?, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn zeroed(width: usize, height: usize) -> Result<Self> {
        let len = sample_len(width, height, 1)?;
        Self::new(width, height, vec![0; len])
    }

    /// Caller guarantees non-zero dimensions and a matching length.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
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

    pub fn get(&self, pos: PixelPos) -> Result<u8> {
        check_bounds(pos, self.width, self.height)?;
        Ok(self.data[pos.y * self.width + pos.x])
    }

    pub fn set(&mut self, pos: PixelPos, value: u8) -> Result<()> {
        check_bounds(pos, self.width, self.height)?;
        self.data[pos.y * self.width + pos.x] = value;
        Ok(())
    }

    /// Mutable access to one row.
    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    pub(crate) fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::error::CodecError;

    #[test]
    fn overflowing_dimensions_are_rejected() {
        assert!(matches!(
            MosaicBuffer::new(usize::MAX / 2, usize::MAX / 2, vec![0; 4]),
            Err(CodecError::InvalidDimensions(_, _))
        ));
        // Fits as a mosaic but not as its RGB rendition.
        assert!(matches!(
            MosaicBuffer::new(usize::MAX / 4, 2, vec![0; 2]),
            Err(CodecError::InvalidDimensions(_, 2))
        ));
        assert!(MosaicBuffer::zeroed(usize::MAX, 3).is_err());
    }

    #[test]
    fn length_must_match_dimensions() {
        assert!(matches!(
            MosaicBuffer::new(4, 4, vec![0; 15]),
            Err(CodecError::BufferSizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn indexing_is_row_major_and_bounds_checked() {
        let mut m = MosaicBuffer::new(3, 2, (0..6).collect()).unwrap();
        assert_eq!(m.get(PixelPos::new(2, 1)).unwrap(), 5);
        m.set(PixelPos::new(0, 1), 42).unwrap();
        assert_eq!(m.as_bytes(), &[0, 1, 2, 42, 4, 5]);
        assert!(matches!(
            m.get(PixelPos::new(3, 0)),
            Err(CodecError::InvalidCoordinate { x: 3, y: 0, .. })
        ));
    }
}
