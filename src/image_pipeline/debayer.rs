//! Conversion between a single-channel Bayer mosaic and an RGB raster.
//!
//! No interpolation happens here: each site's sample lands in the channel its filter
//! captured and the other two channels stay zero, which keeps remosaic an exact inverse.

pub mod cpu_debayer;
pub mod sparse;

pub use cpu_debayer::CpuDebayer;
pub use sparse::{demosaic, remosaic};

use tracing::debug;

use crate::image_pipeline::common::config::DebayerBackend;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::{MosaicBuffer, RgbRaster};
use crate::image_pipeline::raw::types::BayerPattern;

/// Demosaics `mosaic` with the chosen backend.
pub fn demosaic_with(
    backend: DebayerBackend,
    mosaic: &MosaicBuffer,
    pattern: BayerPattern,
) -> Result<RgbRaster> {
    debug!(?backend, %pattern, "Demosaicing {}x{}", mosaic.width(), mosaic.height());
    match backend {
        DebayerBackend::Sparse => Ok(demosaic(mosaic, pattern)),
        DebayerBackend::BayerCrate => CpuDebayer::new().process(mosaic, pattern),
    }
}
