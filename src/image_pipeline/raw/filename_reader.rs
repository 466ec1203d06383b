//! Reader for header-less RAW dumps described by their file name.
//!
//! The name supplies resolution, packing and Bayer layout (see [`metadata`]); the bytes
//! are reduced to the 8-bit working mosaic here.
//!
//! [`metadata`]: crate::image_pipeline::raw::metadata

use tracing::{debug, info_span};

use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::raster::MosaicBuffer;
use crate::image_pipeline::raw::bit_depth;
use crate::image_pipeline::raw::metadata::{DEFAULT_PACKINGS, DEFAULT_PATTERNS, parse_raw_name_with};
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::{BayerPattern, Packing, RawDescriptor, RawImageData};

/// RAW reader that takes all metadata from the file name.
#[derive(Debug, Clone)]
pub struct FilenameRawReader {
    packings: Vec<Packing>,
    patterns: Vec<BayerPattern>,
}

impl Default for FilenameRawReader {
    fn default() -> Self {
        Self {
            packings: DEFAULT_PACKINGS.to_vec(),
            patterns: DEFAULT_PATTERNS.to_vec(),
        }
    }
}

impl FilenameRawReader {
    /// Uses custom keyword priority lists instead of the defaults.
    pub fn with_candidates(packings: Vec<Packing>, patterns: Vec<BayerPattern>) -> Self {
        Self { packings, patterns }
    }

    /// Resolves the descriptor for `file_name` without touching any pixel data.
    pub fn describe(&self, file_name: &str) -> Result<RawDescriptor> {
        let parsed = parse_raw_name_with(file_name, &self.packings, &self.patterns);
        debug!(?parsed, "Parsed RAW file name {}", file_name);

        let (Some(packing), Some(pattern)) = (parsed.packing, parsed.pattern) else {
            return Err(CodecError::UnrecognizedRawFile(format!(
                "{file_name}: packing or Bayer pattern keyword not found"
            )));
        };
        let (Some(width), Some(height)) = (parsed.width, parsed.height) else {
            return Err(CodecError::MissingResolution(file_name.to_string()));
        };

        RawDescriptor::new(width, height, packing, pattern, file_name)
    }
}

impl RawImageReader for FilenameRawReader {
    fn read_raw(&self, file_name: &str, data: &[u8]) -> Result<RawImageData> {
        let descriptor = {
            let _span = info_span!("parse_name").entered();
            self.describe(file_name)?
        };

        debug!("Decoding {} bytes as {}", data.len(), descriptor.packing());
        let samples = {
            let _span = info_span!("downsample", packing = %descriptor.packing()).entered();
            bit_depth::decode_to_8(data, descriptor.packing())?
        };

        let mosaic = MosaicBuffer::new(descriptor.width(), descriptor.height(), samples)?;
        Ok(RawImageData { descriptor, mosaic })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_raw8_verbatim() {
        let data: Vec<u8> = (0..16).collect();
        let image = FilenameRawReader::default().read_raw("t_4X4_raw8_rggb.raw", &data).unwrap();
        assert_eq!(image.descriptor.pattern(), BayerPattern::RGGB);
        assert_eq!(image.mosaic.as_bytes(), data.as_slice());
    }

    #[test]
    fn reduces_packed_samples() {
        let data: Vec<u8> = [0x000cu16, 0x03fc].iter().flat_map(|w| w.to_le_bytes()).collect();
        let image = FilenameRawReader::default().read_raw("t.2x1.unpack10_bggr.raw", &data).unwrap();
        assert_eq!(image.mosaic.as_bytes(), &[3, 255]);
    }

    #[test]
    fn missing_keywords_are_unrecognized() {
        let err = FilenameRawReader::default().read_raw("t_4X4_rggb.raw", &[0; 16]);
        assert!(matches!(err, Err(CodecError::UnrecognizedRawFile(_))));
        let err = FilenameRawReader::default().read_raw("t_4X4_raw8.raw", &[0; 16]);
        assert!(matches!(err, Err(CodecError::UnrecognizedRawFile(_))));
    }

    #[test]
    fn missing_resolution_fails_the_load() {
        let err = FilenameRawReader::default().read_raw("t_raw8_rggb.raw", &[0; 16]);
        assert!(matches!(err, Err(CodecError::MissingResolution(_))));
    }

    #[test]
    fn size_must_match_resolution() {
        let err = FilenameRawReader::default().read_raw("t_4X4_raw8_rggb.raw", &[0; 15]);
        assert!(matches!(
            err,
            Err(CodecError::BufferSizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
        let err = FilenameRawReader::default().read_raw("t_0X4_raw8_rggb.raw", &[]);
        assert!(matches!(err, Err(CodecError::InvalidDimensions(0, 4))));
    }

    #[test]
    fn oversized_resolution_is_an_error() {
        let reader = FilenameRawReader::default();
        let err = reader.read_raw("a_4294967296X4294967296_raw8_rggb.raw", &[0; 4]);
        assert!(matches!(err, Err(CodecError::InvalidDimensions(4294967296, 4294967296))));

        let err = reader.read_raw("a_9223372036854775809X2_raw8_rggb.raw", &[0; 2]);
        assert!(matches!(err, Err(CodecError::InvalidDimensions(_, 2))));
    }
}
