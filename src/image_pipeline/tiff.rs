//! TIFF writing module
//!
//! Exports the displayed raster as an 8-bit Gray or RGB TIFF with optional compression.

mod standard_tiff_writer;
pub mod types;
mod writer;

pub use standard_tiff_writer::StandardTiffWriter;
pub use types::TiffCompression;
pub use writer::TiffWriter;
