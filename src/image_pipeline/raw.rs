//! RAW image reading and writing module
//!
//! Header-less sensor dumps whose geometry and layout are encoded in the file name.

pub mod bit_depth;
mod filename_reader;
mod loader;
pub mod metadata;
mod reader;
mod saver;
pub mod types;

pub use filename_reader::FilenameRawReader;
pub use loader::{is_raw_path, load_raw_file};
pub use reader::RawImageReader;
pub use saver::{encode_raw, save_raw_file};
pub use types::{BayerPattern, CfaColor, Packing, ParsedRawName, RawDescriptor, RawImageData};
