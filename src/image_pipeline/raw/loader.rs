use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::RawImageData;

/// True when `path` has a `.raw` extension, in any case.
pub fn is_raw_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("raw"))
}

/// Reads the RAW file at `path` through `reader`.
#[instrument(skip(reader, path), fields(path = %path.as_ref().display()))]
pub fn load_raw_file<R: RawImageReader + ?Sized, P: AsRef<Path>>(
    reader: &R,
    path: P,
    require_raw_extension: bool,
) -> Result<RawImageData> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CodecError::UnrecognizedRawFile(path.display().to_string()))?;

    if require_raw_extension && !is_raw_path(path) {
        return Err(CodecError::UnrecognizedRawFile(format!(
            "{file_name}: not a .raw file"
        )));
    }
    let data = {
        let _span = tracing::info_span!("read_input_file").entered();
        std::fs::read(path)
            .map_err(|e| CodecError::InputReadError(format!("{}: {}", path.display(), e)))?
    };

    let image = reader.read_raw(file_name, &data)?;
    info!(
        width = image.descriptor.width(),
        height = image.descriptor.height(),
        packing = %image.descriptor.packing(),
        pattern = %image.descriptor.pattern(),
        "Loaded RAW file"
    );
    Ok(image)
}
