use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unrecognized RAW file: {0}")]
    UnrecognizedRawFile(String),

    #[error("No WIDTHxHEIGHT token in file name: {0}")]
    MissingResolution(String),

    #[error("Unsupported Bayer pattern: {0}")]
    UnsupportedPattern(String),

    #[error("Unsupported packing: {0}")]
    UnsupportedPacking(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Buffer holds {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Pixel ({x}, {y}) is outside the {width}x{height} image")]
    InvalidCoordinate {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("No document is open")]
    NoDocument,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
