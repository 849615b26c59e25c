use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use microtex::logger;
use microtex::texture_pipeline::{ConversionConfig, FramingMode, TextureToHeaderPipeline};

use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Framing {
    /// Words grouped into typed elements holding whole pixels
    Element,
    /// One continuous byte array
    Stream,
}

impl From<Framing> for FramingMode {
    fn from(framing: Framing) -> Self {
        match framing {
            Framing::Element => FramingMode::Element,
            Framing::Stream => FramingMode::Stream,
        }
    }
}

/// Converts every image in a directory into a MicroRenderer texture header.
#[derive(Debug, Parser)]
#[command(name = "microtex", version)]
struct Args {
    /// Directory holding the source images
    input_dir: PathBuf,

    /// Directory the generated headers are written to
    output_dir: PathBuf,

    /// TOML texture conversion file
    config: PathBuf,

    /// Override the framing mode from the conversion file
    #[arg(long, value_enum)]
    framing: Option<Framing>,

    /// Unpack every texture after packing and compare it with its source
    #[arg(long)]
    verify: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(logger::level_for_verbosity(args.verbose));

    info!("Starting microtex...");

    let mut config = ConversionConfig::from_file(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(framing) = args.framing {
        config.framing = framing.into();
    }
    config.verify |= args.verify;

    let pipeline = TextureToHeaderPipeline::new(config)
        .context("texture conversion file selects an unsupported format")?;

    info!("Format: {}", pipeline.format());
    info!("Framing: {:?}", pipeline.config().framing);

    let report = pipeline
        .convert_directory(&args.input_dir, &args.output_dir)
        .context("directory conversion failed")?;

    for (path, e) in &report.failed {
        error!("{}: {}", path.display(), e);
    }
    info!(
        "Converted {} textures, {} skipped",
        report.converted.len(),
        report.failed.len()
    );

    if report.internal_failures() > 0 {
        bail!("{} textures hit an internal packing error", report.internal_failures());
    }

    Ok(())
}
