use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::RawImageData;

pub trait RawImageReader {
    /// Decodes the bytes of the file called `file_name`.
    fn read_raw(&self, file_name: &str, data: &[u8]) -> Result<RawImageData>;
}
