//! Bit-depth conversion between on-disk samples and the 8-bit working buffer.
//!
//! Reduction drops the low `diff_bit` bits; expansion shifts them back in as zeros.
//! The dropped bits are never recovered.

use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::raw::types::Packing;

/// Reduces 16-bit samples to 8 bits by the shift `packing` implies.
pub fn downsample_to_8(samples: &[u16], packing: Packing) -> Vec<u8> {
    let shift = packing.diff_bit();
    samples.iter().map(|&s| (s >> shift) as u8).collect()
}

/// Re-expands 8-bit samples to the width of `packing`.
///
/// `Raw8` data needs no expansion and is rejected with `UnsupportedPacking`.
pub fn expand_from_8(samples: &[u8], packing: Packing) -> Result<Vec<u16>> {
    if packing == Packing::Raw8 {
        return Err(CodecError::UnsupportedPacking(format!(
            "{packing} samples are already 8-bit"
        )));
    }
    let shift = packing.diff_bit();
    Ok(samples.iter().map(|&s| u16::from(s) << shift).collect())
}

/// Decodes the on-disk stream into the 8-bit working representation.
pub fn decode_to_8(data: &[u8], packing: Packing) -> Result<Vec<u8>> {
    match packing {
        Packing::Raw8 => Ok(data.to_vec()),
        Packing::Unpack10 | Packing::Unpack12 => {
            let words = words_from_le_bytes(data)?;
            Ok(downsample_to_8(&words, packing))
        }
    }
}

/// Encodes 8-bit samples into the on-disk stream of `packing`.
pub fn encode_from_8(samples: &[u8], packing: Packing) -> Result<Vec<u8>> {
    match packing {
        Packing::Raw8 => Ok(samples.to_vec()),
        Packing::Unpack10 | Packing::Unpack12 => {
            let words = expand_from_8(samples, packing)?;
            Ok(words.iter().flat_map(|w| w.to_le_bytes()).collect())
        }
    }
}

fn words_from_le_bytes(data: &[u8]) -> Result<Vec<u16>> {
    if data.len() % 2 != 0 {
        return Err(CodecError::DecodeError(format!(
            "{} bytes is not a whole number of 16-bit samples",
            data.len()
        )));
    }
    Ok(data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}
