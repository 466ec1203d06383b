//! Image processing pipeline module
//!
//! RAW sensor dumps are decoded into an 8-bit Bayer mosaic, optionally viewed as a sparse
//! RGB raster, edited with a filter-aware brush and written back in their original
//! packing. Non-RAW images and TIFF export sit alongside.

pub mod annotate;
pub mod common;
pub mod conversions;
pub mod debayer;
pub mod raster;
pub mod raster_io;
pub mod raw;
pub mod session;
pub mod tiff;

pub use common::{
    CodecError,
    Color,
    ConversionConfig,
    ConversionConfigBuilder,
    DebayerBackend,
    DisplayMode,
    PixelPos,
    Result,
};

pub use raster::{
    MosaicBuffer,
    RasterView,
    RgbRaster,
};

pub use raw::{
    BayerPattern,
    CfaColor,
    FilenameRawReader,
    Packing,
    ParsedRawName,
    RawDescriptor,
    RawImageData,
    RawImageReader,
};

pub use debayer::{
    CpuDebayer,
    demosaic,
    remosaic,
};

pub use self::tiff::{
    StandardTiffWriter,
    TiffCompression,
    TiffWriter,
};

pub use session::{
    Document,
    EditSession,
    ImageDocument,
    RawDocument,
};

pub use conversions::{
    RawToTiffPipeline,
};
