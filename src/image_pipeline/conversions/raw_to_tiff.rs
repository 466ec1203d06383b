use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::config::ConversionConfig,
    common::error::{CodecError, Result},
    common::types::DisplayMode,
    debayer::demosaic_with,
    raster::{RasterView, RgbRaster},
    raw::{FilenameRawReader, RawImageData, RawImageReader, load_raw_file},
    tiff::{StandardTiffWriter, TiffWriter},
};

/// RAW reading and TIFF writing behind one configuration.
///
/// Both the one-shot conversions here and [`EditSession`] load and export through it.
///
/// [`EditSession`]: crate::image_pipeline::session::EditSession
pub struct RawToTiffPipeline<R: RawImageReader, W: TiffWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl RawToTiffPipeline<FilenameRawReader, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: FilenameRawReader::default(),
            writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: RawImageReader, W: TiffWriter> RawToTiffPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Loads a RAW file, honoring the `.raw` extension gate of the configuration.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<RawImageData> {
        load_raw_file(&self.reader, path, self.config.require_raw_extension)
    }

    /// Encodes `view` as TIFF into `output`.
    pub fn encode(&self, view: RasterView<'_>, output: &mut dyn Write) -> Result<()> {
        let _span = tracing::info_span!("encode_tiff").entered();
        self.writer.write_tiff(view, output, &self.config)
    }

    /// Encodes `view` as a TIFF file at `path`.
    pub fn write_file(&self, view: RasterView<'_>, path: &Path) -> Result<()> {
        let file = File::create(path)
            .map_err(|e| CodecError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
        let mut output = BufWriter::new(file);
        self.encode(view, &mut output)?;
        output
            .flush()
            .map_err(|e| CodecError::OutputWriteError(format!("{}: {}", path.display(), e)))
    }

    /// Converts the RAW bytes of `file_name` to TIFF: RGB when the display mode is RGB,
    /// the gray mosaic otherwise.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, file_name: &str, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting RAW to TIFF conversion");

        let raw_image = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(file_name, input_data)?
        };
        self.encode_rendered(&raw_image, output)
    }

    /// Same as [`convert`](Self::convert) for files on disk.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input_path: P, output_path: Q) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let raw_image = self.load(input_path)?;
        let rgb = self.render(&raw_image)?;
        self.write_file(view_of(&raw_image, rgb.as_ref()), output_path)
    }

    fn render(&self, raw_image: &RawImageData) -> Result<Option<RgbRaster>> {
        match self.config.display_mode {
            DisplayMode::Rgb => {
                let _span = tracing::info_span!("demosaic",
                    pattern = %raw_image.descriptor.pattern()
                ).entered();
                demosaic_with(
                    self.config.debayer_backend,
                    &raw_image.mosaic,
                    raw_image.descriptor.pattern(),
                )
                .map(Some)
            }
            DisplayMode::Gray => Ok(None),
        }
    }

    fn encode_rendered(&self, raw_image: &RawImageData, output: &mut dyn Write) -> Result<()> {
        let rgb = self.render(raw_image)?;
        self.encode(view_of(raw_image, rgb.as_ref()), output)?;

        info!(
            width = raw_image.descriptor.width(),
            height = raw_image.descriptor.height(),
            "Conversion complete"
        );
        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

fn view_of<'a>(raw_image: &'a RawImageData, rgb: Option<&'a RgbRaster>) -> RasterView<'a> {
    match rgb {
        Some(rgb) => RasterView::Rgb(rgb),
        None => RasterView::Gray(&raw_image.mosaic),
    }
}
