//! TIFF export option types

use std::str::FromStr;

use crate::image_pipeline::common::error::CodecError;

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced
    DeflateBalanced,
}

impl FromStr for TiffCompression {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "lzw" => Ok(Self::Lzw),
            "deflate-fast" => Ok(Self::DeflateFast),
            "deflate" | "deflate-balanced" => Ok(Self::DeflateBalanced),
            "deflate-best" => Ok(Self::DeflateBest),
            _ => Err(CodecError::UnsupportedFormat(format!("TIFF compression {s}"))),
        }
    }
}
