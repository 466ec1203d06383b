//! Common utilities module
//!
//! Shared error type, configuration and small value types used across the pipeline.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConversionConfig, ConversionConfigBuilder, DebayerBackend};
pub use error::{CodecError, Result};
pub use types::{Color, DisplayMode, PixelPos};
