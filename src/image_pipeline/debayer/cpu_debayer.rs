use std::io::Cursor;

use bayer::{BayerDepth, CFA, Demosaic, RasterDepth, RasterMut};
use tracing::debug;

use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::raster::{MosaicBuffer, RgbRaster};
use crate::image_pipeline::raw::types::BayerPattern;

/// Demosaic backed by the `bayer` crate, run without interpolation.
///
/// The crate needs a mosaic of at least 2x2.
pub struct CpuDebayer;

impl CpuDebayer {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, mosaic: &MosaicBuffer, pattern: BayerPattern) -> Result<RgbRaster> {
        let width = mosaic.width();
        let height = mosaic.height();
        debug!("Running bayer crate demosaic for {}x{} {}", width, height, pattern);

        let mut output_buf = vec![0u8; width * height * 3];
        {
            let mut cursor = Cursor::new(mosaic.as_bytes());
            let mut output_raster = RasterMut::new(width, height, RasterDepth::Depth8, &mut output_buf);

            bayer::run_demosaic(
                &mut cursor,
                BayerDepth::Depth8,
                cfa_for(pattern),
                Demosaic::None,
                &mut output_raster,
            )
            .map_err(|e| CodecError::DecodeError(format!("Demosaic failed: {:?}", e)))?;
        }

        RgbRaster::new(width, height, output_buf)
    }
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self::new()
    }
}

fn cfa_for(pattern: BayerPattern) -> CFA {
    match pattern {
        BayerPattern::RGGB => CFA::RGGB,
        BayerPattern::BGGR => CFA::BGGR,
        BayerPattern::GRBG => CFA::GRBG,
        BayerPattern::GBRG => CFA::GBRG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::debayer::sparse;

    #[test]
    fn agrees_with_sparse_demosaic() {
        let mosaic = MosaicBuffer::new(6, 4, (0..24).map(|v| v * 10).collect()).unwrap();
        for pattern in BayerPattern::ALL {
            let ours = sparse::demosaic(&mosaic, pattern);
            let theirs = CpuDebayer::new().process(&mosaic, pattern).unwrap();
            assert_eq!(ours, theirs, "{pattern}");
        }
    }
}
