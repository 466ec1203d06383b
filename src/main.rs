use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rawedit::image_pipeline::raw::metadata::parse_raw_name;
use rawedit::image_pipeline::{
    Color, ConversionConfig, DebayerBackend, DisplayMode, EditSession, PixelPos, TiffCompression,
};
use rawedit::logger;

use tracing::info;

#[derive(Parser)]
#[command(name = "rawedit", version, about = "Inspect, annotate and convert header-less Bayer RAW dumps")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Accept RAW files without a .raw extension
    #[arg(long, global = true)]
    any_extension: bool,

    /// Demosaic through the bayer crate instead of the native transform
    #[arg(long, global = true)]
    bayer_crate: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the metadata recovered from a RAW file name
    Info { file: PathBuf },

    /// Write the displayed raster as TIFF, PNG, JPEG or BMP
    Export {
        input: PathBuf,
        output: PathBuf,
        /// RGB or GRAY
        #[arg(long, default_value = "rgb")]
        mode: DisplayMode,
        /// none, lzw, deflate-fast, deflate, deflate-best
        #[arg(long, default_value = "none")]
        compression: TiffCompression,
        /// Use horizontal differencing for compressed TIFF
        #[arg(long)]
        predictor: bool,
    },

    /// Apply a filter-aware brush stroke and save the result
    Annotate {
        input: PathBuf,
        #[arg(long)]
        x: usize,
        #[arg(long)]
        y: usize,
        /// Brush color as R,G,B
        #[arg(long, default_value = "0,0,0")]
        color: Color,
        #[arg(long, default_value_t = 5)]
        radius: usize,
        /// RGB or GRAY
        #[arg(long, default_value = "rgb")]
        mode: DisplayMode,
        /// Defaults to the original file name next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Allow overwriting an existing output file
        #[arg(long)]
        force: bool,
    },

    /// Load and save back without edits
    Roundtrip { input: PathBuf, output: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(if cli.verbose { "debug" } else { "info" });

    let backend = if cli.bayer_crate {
        DebayerBackend::BayerCrate
    } else {
        DebayerBackend::Sparse
    };
    let base = ConversionConfig::builder()
        .require_raw_extension(!cli.any_extension)
        .debayer_backend(backend);

    match cli.command {
        Command::Info { file } => info_cmd(&file, base.build()),
        Command::Export {
            input,
            output,
            mode,
            compression,
            predictor,
        } => {
            let config = base
                .display_mode(mode)
                .compression(compression)
                .predictor(predictor.then_some(2))
                .build();
            export_cmd(&input, &output, config)
        }
        Command::Annotate {
            input,
            x,
            y,
            color,
            radius,
            mode,
            output,
            force,
        } => {
            let mut session = EditSession::new(base.display_mode(mode).build());
            session
                .open(&input)
                .with_context(|| format!("opening {}", input.display()))?;
            session.annotate(PixelPos::new(x, y), color, radius)?;

            let output = match output {
                Some(path) => path,
                None => {
                    let name = session.default_save_name().unwrap_or_default();
                    input.with_file_name(name)
                }
            };
            if output.exists() && !force {
                bail!("{} exists, pass --force to overwrite", output.display());
            }
            session.save(&output)?;
            info!(output = %output.display(), "Annotated image saved");
            Ok(())
        }
        Command::Roundtrip { input, output } => {
            let mut session = EditSession::new(base.build());
            session
                .open(&input)
                .with_context(|| format!("opening {}", input.display()))?;
            session.save(&output)?;
            info!(output = %output.display(), "Round trip written");
            Ok(())
        }
    }
}

fn info_cmd(file: &Path, config: ConversionConfig) -> anyhow::Result<()> {
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .context("file name is not valid UTF-8")?;
    let parsed = parse_raw_name(name);
    info!(
        width = ?parsed.width,
        height = ?parsed.height,
        packing = ?parsed.packing,
        pattern = ?parsed.pattern,
        "Parsed {}",
        name
    );

    let mut session = EditSession::new(config);
    let document = session.open(file)?;
    info!(
        width = document.width(),
        height = document.height(),
        default_save_name = %document.default_save_name(),
        "Document is loadable"
    );
    Ok(())
}

fn export_cmd(input: &Path, output: &Path, config: ConversionConfig) -> anyhow::Result<()> {
    info!("Export mode: {}", config.display_mode);
    let mut session = EditSession::new(config);
    session
        .open(input)
        .with_context(|| format!("opening {}", input.display()))?;
    session.export_view(output)?;
    info!(output = %output.display(), "Export complete");
    Ok(())
}
