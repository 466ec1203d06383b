use std::io::Write;

use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::RasterView;

pub trait TiffWriter {
    fn write_tiff(&self, image: RasterView<'_>, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
