use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::common::types::{Color, DisplayMode, PixelPos};
use crate::image_pipeline::conversions::RawToTiffPipeline;
use crate::image_pipeline::raster::RasterView;
use crate::image_pipeline::raster_io::{format_from_path, load_non_raw_image, save_gray_image, save_non_raw_image};
use crate::image_pipeline::raw::{FilenameRawReader, RawImageReader, is_raw_path, save_raw_file};
use crate::image_pipeline::session::document::{Document, ImageDocument, RawDocument};
use crate::image_pipeline::tiff::{StandardTiffWriter, TiffWriter};

/// Owner of the single active document.
pub struct EditSession<R: RawImageReader = FilenameRawReader, W: TiffWriter = StandardTiffWriter> {
    pipeline: RawToTiffPipeline<R, W>,
    document: Option<Document>,
}

impl EditSession<FilenameRawReader, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            pipeline: RawToTiffPipeline::new(config),
            document: None,
        }
    }
}

impl<R: RawImageReader, W: TiffWriter> EditSession<R, W> {
    pub fn with_custom(reader: R, tiff_writer: W, config: ConversionConfig) -> Self {
        Self {
            pipeline: RawToTiffPipeline::with_custom(reader, tiff_writer, config),
            document: None,
        }
    }

    pub fn config(&self) -> &ConversionConfig {
        self.pipeline.config()
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn close(&mut self) {
        self.document = None;
    }

    /// Opens `path` as the active document, replacing any previous one.
    ///
    /// On failure the previous document stays open.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<&Document> {
        let path = path.as_ref();

        let document = if is_raw_path(path) {
            self.open_raw(path)?
        } else if format_from_path(path).is_ok() {
            Document::Image(ImageDocument::new(path, load_non_raw_image(path)?))
        } else if !self.config().require_raw_extension {
            self.open_raw(path)?
        } else {
            return Err(CodecError::UnsupportedFormat(path.display().to_string()));
        };

        info!(
            width = document.width(),
            height = document.height(),
            "Opened document"
        );
        Ok(&*self.document.insert(document))
    }

    fn open_raw(&self, path: &Path) -> Result<Document> {
        let image = self.pipeline.load(path)?;
        let config = self.config();
        let raw = RawDocument::new(image, config.display_mode, config.debayer_backend)?;
        Ok(Document::Raw(raw))
    }

    /// Changes how RAW documents are presented; image documents ignore it.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<()> {
        if let Some(Document::Raw(raw)) = self.document.as_mut() {
            raw.set_display_mode(mode, self.pipeline.config().debayer_backend)?;
        }
        let mut config = self.pipeline.config().clone();
        config.display_mode = mode;
        self.pipeline.set_config(config);
        Ok(())
    }

    /// Brush edit at `pos`; a no-op when nothing is open.
    pub fn annotate(&mut self, pos: PixelPos, color: Color, radius: usize) -> Result<()> {
        match self.document.as_mut() {
            Some(document) => document.annotate(pos, color, radius),
            None => {
                warn!("Annotation requested with no document open");
                Ok(())
            }
        }
    }

    /// Name proposed for saving the active document.
    pub fn default_save_name(&self) -> Option<String> {
        self.document.as_ref().map(Document::default_save_name)
    }

    /// Saves the active document in its own kind: RAW layout for RAW documents, the format
    /// named by the extension for images.
    #[instrument(skip(self, path), fields(output = %path.as_ref().display()))]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match self.document.as_ref().ok_or(CodecError::NoDocument)? {
            Document::Raw(raw) => save_raw_file(path, raw.view(), raw.descriptor()),
            Document::Image(img) => save_non_raw_image(path, img.raster(), format_from_path(path)?),
        }
    }

    /// Writes the displayed raster as a viewable image: TIFF through the pipeline's TIFF
    /// writer, PNG/JPEG/BMP through the `image` crate.
    #[instrument(skip(self, path), fields(output = %path.as_ref().display()))]
    pub fn export_view<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let view = self.document.as_ref().ok_or(CodecError::NoDocument)?.view();

        if is_tiff_path(path) {
            return self.pipeline.write_file(view, path);
        }

        let format = format_from_path(path)?;
        match view {
            RasterView::Rgb(raster) => save_non_raw_image(path, raster, format),
            RasterView::Gray(mosaic) => save_gray_image(path, mosaic, format),
        }
    }
}

fn is_tiff_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("tif") || e.eq_ignore_ascii_case("tiff"))
}
