//! Pipeline and session configuration

use crate::image_pipeline::common::types::DisplayMode;
use crate::image_pipeline::tiff::TiffCompression;

/// Which implementation turns a mosaic into an RGB raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebayerBackend {
    /// Native per-site transform, paired with the exact inverse remosaic.
    #[default]
    Sparse,
    /// The `bayer` crate run without interpolation.
    BayerCrate,
}

/// Configuration for loading, viewing and exporting RAW documents
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Whether RAW documents are shown as RGB (demosaiced) or as the gray mosaic
    pub display_mode: DisplayMode,
    /// Refuse to treat a file as RAW unless it carries the `.raw` extension
    pub require_raw_extension: bool,
    pub debayer_backend: DebayerBackend,
    /// Compression method for TIFF export
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    pub predictor: Option<u16>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Rgb,
            require_raw_extension: true,
            debayer_backend: DebayerBackend::Sparse,
            compression: TiffCompression::None,
            predictor: None,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    display_mode: Option<DisplayMode>,
    require_raw_extension: Option<bool>,
    debayer_backend: Option<DebayerBackend>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
}

impl ConversionConfigBuilder {
    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = Some(mode);
        self
    }

    pub fn require_raw_extension(mut self, require: bool) -> Self {
        self.require_raw_extension = Some(require);
        self
    }

    pub fn debayer_backend(mut self, backend: DebayerBackend) -> Self {
        self.debayer_backend = Some(backend);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            display_mode: self.display_mode.unwrap_or(default.display_mode),
            require_raw_extension: self
                .require_raw_extension
                .unwrap_or(default.require_raw_extension),
            debayer_backend: self.debayer_backend.unwrap_or(default.debayer_backend),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
