//! Pipeline conversions module
//!
//! One-shot conversions that do not need an editing session.

mod raw_to_tiff;

#[cfg(test)]
mod tests;

pub use raw_to_tiff::RawToTiffPipeline;
