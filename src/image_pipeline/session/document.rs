use std::path::{Path, PathBuf};

use tracing::{debug, info_span};

use crate::image_pipeline::annotate::{annotate_mosaic, annotate_rgb, paint_square};
use crate::image_pipeline::common::config::DebayerBackend;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::types::{Color, DisplayMode, PixelPos};
use crate::image_pipeline::debayer::demosaic_with;
use crate::image_pipeline::raster::{MosaicBuffer, RasterView, RgbRaster, check_bounds};
use crate::image_pipeline::raw::{RawDescriptor, RawImageData, encode_raw};

/// A RAW sensor dump opened for editing.
///
/// The mosaic is the source of truth. In RGB mode a demosaiced view is kept alongside it
/// and receives the same edits.
#[derive(Debug, Clone)]
pub struct RawDocument {
    descriptor: RawDescriptor,
    mosaic: MosaicBuffer,
    display_mode: DisplayMode,
    rgb_view: Option<RgbRaster>,
}

impl RawDocument {
    pub fn new(image: RawImageData, display_mode: DisplayMode, backend: DebayerBackend) -> Result<Self> {
        let mut document = Self {
            descriptor: image.descriptor,
            mosaic: image.mosaic,
            display_mode: DisplayMode::Gray,
            rgb_view: None,
        };
        document.set_display_mode(display_mode, backend)?;
        Ok(document)
    }

    pub fn descriptor(&self) -> &RawDescriptor {
        &self.descriptor
    }

    pub fn mosaic(&self) -> &MosaicBuffer {
        &self.mosaic
    }

    pub fn rgb_view(&self) -> Option<&RgbRaster> {
        self.rgb_view.as_ref()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// The raster currently on screen.
    pub fn view(&self) -> RasterView<'_> {
        match &self.rgb_view {
            Some(rgb) => RasterView::Rgb(rgb),
            None => RasterView::Gray(&self.mosaic),
        }
    }

    /// Switches presentation, rebuilding the RGB view from the mosaic when needed.
    pub fn set_display_mode(&mut self, mode: DisplayMode, backend: DebayerBackend) -> Result<()> {
        self.rgb_view = match mode {
            DisplayMode::Rgb => {
                let _span = info_span!("demosaic", pattern = %self.descriptor.pattern()).entered();
                Some(demosaic_with(backend, &self.mosaic, self.descriptor.pattern())?)
            }
            DisplayMode::Gray => None,
        };
        self.display_mode = mode;
        Ok(())
    }

    /// Filter-aware brush edit; see [`annotate_mosaic`].
    pub fn annotate(&mut self, pos: PixelPos, color: Color, radius: usize) -> Result<()> {
        let pattern = self.descriptor.pattern();
        annotate_mosaic(&mut self.mosaic, pattern, pos, color, radius)?;
        if let Some(rgb) = self.rgb_view.as_mut() {
            annotate_rgb(rgb, pattern, pos, color, radius)?;
        }
        Ok(())
    }

    /// Bytes of this document in its original on-disk layout.
    pub fn encode(&self) -> Result<Vec<u8>> {
        encode_raw(self.view(), &self.descriptor)
    }
}

/// A PNG/JPEG/BMP/TIFF image opened for editing.
#[derive(Debug, Clone)]
pub struct ImageDocument {
    path: PathBuf,
    raster: RgbRaster,
}

impl ImageDocument {
    pub fn new(path: impl Into<PathBuf>, raster: RgbRaster) -> Self {
        Self {
            path: path.into(),
            raster,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn raster(&self) -> &RgbRaster {
        &self.raster
    }

    /// Plain square brush that overwrites whole pixels.
    pub fn paint(&mut self, pos: PixelPos, color: Color, radius: usize) -> Result<()> {
        paint_square(&mut self.raster, pos, color, radius)
    }
}

/// The document an [`EditSession`](super::EditSession) has open.
#[derive(Debug, Clone)]
pub enum Document {
    Raw(RawDocument),
    Image(ImageDocument),
}

impl Document {
    pub fn view(&self) -> RasterView<'_> {
        match self {
            Self::Raw(raw) => raw.view(),
            Self::Image(img) => RasterView::Rgb(&img.raster),
        }
    }

    pub fn width(&self) -> usize {
        self.view().width()
    }

    pub fn height(&self) -> usize {
        self.view().height()
    }

    /// File name proposed when saving: the name the document was opened from.
    pub fn default_save_name(&self) -> String {
        match self {
            Self::Raw(raw) => raw.descriptor.source_file_name().to_string(),
            Self::Image(img) => img
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Applies the brush that fits the document kind.
    pub fn annotate(&mut self, pos: PixelPos, color: Color, radius: usize) -> Result<()> {
        check_bounds(pos, self.width(), self.height())?;
        debug!(x = pos.x, y = pos.y, radius, ?color, "Annotating");
        match self {
            Self::Raw(raw) => raw.annotate(pos, color, radius),
            Self::Image(img) => img.paint(pos, color, radius),
        }
    }
}
