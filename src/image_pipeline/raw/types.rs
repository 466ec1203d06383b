//! RAW file metadata types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::raster::{MosaicBuffer, sample_len};

/// On-disk bit layout of a RAW file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Packing {
    /// One byte per pixel.
    Raw8,
    /// 10-bit samples in little-endian 16-bit words.
    Unpack10,
    /// 12-bit samples in little-endian 16-bit words.
    Unpack12,
}

impl Packing {
    pub const ALL: [Packing; 3] = [Packing::Raw8, Packing::Unpack10, Packing::Unpack12];

    /// Number of low bits dropped when reducing a sample to 8 bits.
    pub fn diff_bit(self) -> u32 {
        match self {
            Self::Raw8 => 0,
            Self::Unpack10 => 2,
            Self::Unpack12 => 4,
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::Raw8 => 1,
            Self::Unpack10 | Self::Unpack12 => 2,
        }
    }

    /// File name keyword, lower case.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Raw8 => "raw8",
            Self::Unpack10 => "unpack10",
            Self::Unpack12 => "unpack12",
        }
    }
}

impl fmt::Display for Packing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Packing {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.keyword().eq_ignore_ascii_case(s))
            .ok_or_else(|| CodecError::UnsupportedPacking(s.to_string()))
    }
}

/// Color captured at one sensor site; the value is the channel index in an RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CfaColor {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl CfaColor {
    pub fn channel(self) -> usize {
        self as usize
    }
}

/// 2x2 color filter tile, origin at pixel (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum BayerPattern {
    RGGB,
    BGGR,
    GRBG,
    GBRG,
}

impl BayerPattern {
    pub const ALL: [BayerPattern; 4] = [
        BayerPattern::RGGB,
        BayerPattern::BGGR,
        BayerPattern::GRBG,
        BayerPattern::GBRG,
    ];

    /// Tile rows, top row first.
    const fn tile(self) -> [[CfaColor; 2]; 2] {
        use CfaColor::*;
        match self {
            Self::RGGB => [[Red, Green], [Green, Blue]],
            Self::BGGR => [[Blue, Green], [Green, Red]],
            Self::GRBG => [[Green, Red], [Blue, Green]],
            Self::GBRG => [[Green, Blue], [Red, Green]],
        }
    }

    /// Filter color of the sensor site at `(x, y)`.
    #[inline]
    pub fn color_at(self, x: usize, y: usize) -> CfaColor {
        self.tile()[y & 1][x & 1]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::RGGB => "RGGB",
            Self::BGGR => "BGGR",
            Self::GRBG => "GRBG",
            Self::GBRG => "GBRG",
        }
    }
}

impl fmt::Display for BayerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BayerPattern {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CodecError::UnsupportedPattern(s.to_string()))
    }
}

/// Metadata recovered from a RAW file name. Every field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedRawName {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub packing: Option<Packing>,
    pub pattern: Option<BayerPattern>,
}

/// Provenance of a loaded RAW file, needed to write it back in its original layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDescriptor {
    width: usize,
    height: usize,
    packing: Packing,
    pattern: BayerPattern,
    source_file_name: String,
}

impl RawDescriptor {
    pub fn new(
        width: usize,
        height: usize,
        packing: Packing,
        pattern: BayerPattern,
        source_file_name: impl Into<String>,
    ) -> Result<Self> {
        // Both the on-disk size and the RGB view must be addressable.
        sample_len(width, height, 3)?;
        sample_len(width, height, packing.bytes_per_sample())?;
        Ok(Self {
            width,
            height,
            packing,
            pattern,
            source_file_name: source_file_name.into(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn packing(&self) -> Packing {
        self.packing
    }

    pub fn pattern(&self) -> BayerPattern {
        self.pattern
    }

    pub fn source_file_name(&self) -> &str {
        &self.source_file_name
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Size of the file this descriptor was read from.
    pub fn file_size(&self) -> usize {
        self.pixel_count() * self.packing.bytes_per_sample()
    }
}

/// A decoded RAW file: its provenance and the 8-bit mosaic.
#[derive(Debug, Clone)]
pub struct RawImageData {
    pub descriptor: RawDescriptor,
    pub mosaic: MosaicBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tile_has_two_greens_one_red_one_blue() {
        for pattern in BayerPattern::ALL {
            let sites = [(0, 0), (1, 0), (0, 1), (1, 1)].map(|(x, y)| pattern.color_at(x, y));
            let count = |c| sites.iter().filter(|&&s| s == c).count();
            assert_eq!(count(CfaColor::Green), 2, "{pattern}");
            assert_eq!(count(CfaColor::Red), 1, "{pattern}");
            assert_eq!(count(CfaColor::Blue), 1, "{pattern}");
        }
    }

    #[test]
    fn tile_repeats_every_two_pixels() {
        assert_eq!(BayerPattern::GRBG.color_at(1, 0), CfaColor::Red);
        assert_eq!(BayerPattern::GRBG.color_at(3, 2), CfaColor::Red);
        assert_eq!(BayerPattern::GBRG.color_at(0, 1), CfaColor::Red);
        assert_eq!(BayerPattern::BGGR.color_at(5, 5), CfaColor::Red);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("grbg".parse::<BayerPattern>().unwrap(), BayerPattern::GRBG);
        assert_eq!("UNPACK12".parse::<Packing>().unwrap(), Packing::Unpack12);
        assert!(matches!(
            "rgbw".parse::<BayerPattern>(),
            Err(CodecError::UnsupportedPattern(_))
        ));
        assert!(matches!(
            "unpack14".parse::<Packing>(),
            Err(CodecError::UnsupportedPacking(_))
        ));
    }

    #[test]
    fn descriptor_rejects_empty_images() {
        assert!(matches!(
            RawDescriptor::new(0, 4, Packing::Raw8, BayerPattern::RGGB, "x.raw"),
            Err(CodecError::InvalidDimensions(0, 4))
        ));
        let d = RawDescriptor::new(4, 3, Packing::Unpack10, BayerPattern::RGGB, "x.raw").unwrap();
        assert_eq!(d.file_size(), 24);
    }

    #[test]
    fn descriptor_rejects_overflowing_sizes() {
        assert!(matches!(
            RawDescriptor::new(
                usize::MAX / 2,
                usize::MAX / 2,
                Packing::Raw8,
                BayerPattern::RGGB,
                "x.raw"
            ),
            Err(CodecError::InvalidDimensions(_, _))
        ));
        assert!(matches!(
            RawDescriptor::new(usize::MAX / 4, 2, Packing::Unpack12, BayerPattern::RGGB, "x.raw"),
            Err(CodecError::InvalidDimensions(_, 2))
        ));
    }
}
