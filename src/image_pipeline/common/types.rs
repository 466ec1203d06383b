//! Small value types shared by the loader, the annotation tools and the session.

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::CodecError;

/// How a RAW document is presented: the demosaiced RGB view or the mosaic itself as gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Rgb,
    Gray,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => f.write_str("RGB"),
            Self::Gray => f.write_str("GRAY"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RGB" => Ok(Self::Rgb),
            "GRAY" | "GREY" => Ok(Self::Gray),
            _ => Err(CodecError::UnsupportedFormat(format!("display mode {s}"))),
        }
    }
}

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = CodecError;

    /// Parses `R,G,B` with each component in `0..=255`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(CodecError::UnsupportedFormat(format!("color {s}")));
        }
        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| CodecError::UnsupportedFormat(format!("color {s}")))?;
        }
        Ok(Self::new(rgb[0], rgb[1], rgb[2]))
    }
}

/// A pixel coordinate in image space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPos {
    pub x: usize,
    pub y: usize,
}

impl PixelPos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_triples() {
        assert_eq!("10, 20,30".parse::<Color>().unwrap(), Color::new(10, 20, 30));
        assert!("10,20".parse::<Color>().is_err());
        assert!("10,20,300".parse::<Color>().is_err());
    }

    #[test]
    fn display_mode_is_case_insensitive() {
        assert_eq!("rgb".parse::<DisplayMode>().unwrap(), DisplayMode::Rgb);
        assert_eq!("Gray".parse::<DisplayMode>().unwrap(), DisplayMode::Gray);
        assert!("cmyk".parse::<DisplayMode>().is_err());
    }
}
