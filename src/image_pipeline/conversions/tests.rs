use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::common::error::{CodecError, Result};
use crate::image_pipeline::common::types::DisplayMode;
use crate::image_pipeline::conversions::RawToTiffPipeline;
use crate::image_pipeline::raster::{MosaicBuffer, RasterView};
use crate::image_pipeline::raw::{BayerPattern, Packing, RawDescriptor, RawImageData, RawImageReader};
use crate::image_pipeline::session::EditSession;
use crate::image_pipeline::tiff::{TiffCompression, TiffWriter};

struct MockReader {
    should_fail: bool,
}

impl RawImageReader for MockReader {
    fn read_raw(&self, file_name: &str, _data: &[u8]) -> Result<RawImageData> {
        if self.should_fail {
            return Err(CodecError::UnrecognizedRawFile(file_name.to_string()));
        }
        Ok(RawImageData {
            descriptor: RawDescriptor::new(4, 2, Packing::Raw8, BayerPattern::RGGB, file_name)?,
            mosaic: MosaicBuffer::new(4, 2, (1..=8).collect())?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Written {
    Rgb(Vec<u8>),
    Gray(Vec<u8>),
}

struct MockWriter {
    should_fail: bool,
    written_data: Arc<Mutex<Vec<Written>>>,
}

impl TiffWriter for MockWriter {
    fn write_tiff(&self, image: RasterView<'_>, _output: &mut dyn Write, _config: &ConversionConfig) -> Result<()> {
        if self.should_fail {
            return Err(CodecError::EncodeError("Mock encode error".to_string()));
        }
        let record = match image {
            RasterView::Rgb(r) => Written::Rgb(r.as_bytes().to_vec()),
            RasterView::Gray(m) => Written::Gray(m.as_bytes().to_vec()),
        };
        self.written_data.lock().unwrap().push(record);
        Ok(())
    }
}

fn pipeline(
    reader_fails: bool,
    writer_fails: bool,
    config: ConversionConfig,
) -> (RawToTiffPipeline<MockReader, MockWriter>, Arc<Mutex<Vec<Written>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: reader_fails };
    let writer = MockWriter {
        should_fail: writer_fails,
        written_data: written.clone(),
    };
    (RawToTiffPipeline::with_custom(reader, writer, config), written)
}

#[test]
fn rgb_mode_writes_the_demosaiced_view() {
    let (pipeline, written) = pipeline(false, false, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    pipeline.convert("x.raw", b"ignored", &mut output).unwrap();

    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    let Written::Rgb(bytes) = &written[0] else {
        panic!("expected an RGB raster");
    };
    assert_eq!(&bytes[..6], &[1, 0, 0, 0, 2, 0]);
}

#[test]
fn gray_mode_writes_the_mosaic() {
    let config = ConversionConfig::builder().display_mode(DisplayMode::Gray).build();
    let (pipeline, written) = pipeline(false, false, config);

    let mut output = Cursor::new(Vec::new());
    pipeline.convert("x.raw", b"ignored", &mut output).unwrap();

    assert_eq!(written.lock().unwrap()[0], Written::Gray((1..=8).collect()));
}

#[test]
fn reader_failure_stops_the_conversion() {
    let (pipeline, written) = pipeline(true, false, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert("x.raw", b"ignored", &mut output);

    assert!(matches!(result, Err(CodecError::UnrecognizedRawFile(_))));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn writer_failure_is_reported() {
    let (pipeline, _) = pipeline(false, true, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert("x.raw", b"ignored", &mut output);

    assert!(matches!(result, Err(CodecError::EncodeError(_))));
}

#[test]
fn config_can_be_replaced() {
    let (mut pipeline, _) = pipeline(false, false, ConversionConfig::default());
    pipeline.set_config(ConversionConfig::builder().compression(TiffCompression::DeflateBest).build());
    assert_eq!(pipeline.config().compression, TiffCompression::DeflateBest);
}

#[test]
fn real_file_converts_to_a_readable_tiff() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cap.2X2.raw8_bggr.raw");
    let output = dir.path().join("cap.tiff");
    std::fs::write(&input, [10u8, 20, 30, 40]).unwrap();

    let config = ConversionConfig::builder().display_mode(DisplayMode::Gray).build();
    RawToTiffPipeline::new(config).convert_file(&input, &output).unwrap();

    let mut decoder = tiff::decoder::Decoder::new(std::fs::File::open(&output).unwrap()).unwrap();
    assert_eq!(decoder.dimensions().unwrap(), (2, 2));
    match decoder.read_image().unwrap() {
        tiff::decoder::DecodingResult::U8(data) => assert_eq!(data, vec![10, 20, 30, 40]),
        _ => panic!("expected 8-bit samples"),
    }
}

#[test]
fn convert_file_honors_the_extension_gate() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cap.2X2.raw8_bggr.bin");
    let output = dir.path().join("cap.tiff");
    std::fs::write(&input, [10u8, 20, 30, 40]).unwrap();

    let result = RawToTiffPipeline::new(ConversionConfig::default()).convert_file(&input, &output);
    assert!(matches!(result, Err(CodecError::UnrecognizedRawFile(_))));
    assert!(!output.exists());

    let config = ConversionConfig::builder().require_raw_extension(false).build();
    RawToTiffPipeline::new(config).convert_file(&input, &output).unwrap();
    assert!(output.exists());
}

#[test]
fn session_tiff_export_goes_through_the_pipeline_writer() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("x.raw");
    std::fs::write(&input, b"ignored").unwrap();

    let written = Arc::new(Mutex::new(Vec::new()));
    let writer = MockWriter {
        should_fail: false,
        written_data: written.clone(),
    };
    let config = ConversionConfig::builder().display_mode(DisplayMode::Gray).build();
    let mut session = EditSession::with_custom(MockReader { should_fail: false }, writer, config);
    session.open(&input).unwrap();
    session.export_view(dir.path().join("x.tif")).unwrap();

    assert_eq!(*written.lock().unwrap(), vec![Written::Gray((1..=8).collect())]);
}
