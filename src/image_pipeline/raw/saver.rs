use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{info, info_span, instrument};

use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::debayer::remosaic;
use crate::image_pipeline::raster::RasterView;
use crate::image_pipeline::raw::bit_depth;
use crate::image_pipeline::raw::types::RawDescriptor;

/// Produces the on-disk bytes for `view` in the layout `descriptor` was loaded from.
pub fn encode_raw(view: RasterView<'_>, descriptor: &RawDescriptor) -> Result<Vec<u8>> {
    if (view.width(), view.height()) != (descriptor.width(), descriptor.height()) {
        return Err(CodecError::InvalidDimensions(view.width(), view.height()));
    }

    let mosaic_bytes = match view {
        RasterView::Rgb(raster) => {
            let _span = info_span!("remosaic", pattern = %descriptor.pattern()).entered();
            remosaic(raster, descriptor.pattern()).into_bytes()
        }
        RasterView::Gray(mosaic) => mosaic.as_bytes().to_vec(),
    };

    let _span = info_span!("expand", packing = %descriptor.packing()).entered();
    bit_depth::encode_from_8(&mosaic_bytes, descriptor.packing())
}

/// Writes `view` to `path` as a RAW file.
///
/// Bytes go to a uniquely named temporary file in the target directory, which is then
/// renamed over `path`; a failed write leaves any existing file untouched.
#[instrument(skip(view, descriptor, path), fields(output = %path.as_ref().display()))]
pub fn save_raw_file<P: AsRef<Path>>(
    path: P,
    view: RasterView<'_>,
    descriptor: &RawDescriptor,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_raw(view, descriptor)?;

    let write_error = |e: std::io::Error| CodecError::OutputWriteError(format!("{}: {}", path.display(), e));

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging = NamedTempFile::new_in(dir).map_err(write_error)?;
    staging.write_all(&bytes).map_err(write_error)?;
    staging.persist(path).map_err(|e| write_error(e.error))?;

    info!(bytes = bytes.len(), packing = %descriptor.packing(), "Saved RAW file");
    Ok(())
}
