use tracing::{error, info, instrument, warn};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::texture_pipeline::{
    common::error::{ConversionError, ErrorKind, Result},
    config::ConversionConfig,
    conversions::batch::BatchReport,
    format::PixelFormat,
    header::{CHeaderWriter, TextureWriter},
    packing::{Packer, PackedTexture},
    samples::{AutoSampleReader, SampleReader},
};

pub struct TextureToHeaderPipeline<R: SampleReader, W: TextureWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
    packer: Packer,
}

impl TextureToHeaderPipeline<AutoSampleReader, CHeaderWriter> {
    /// Fails when the configured channels do not form a supported format.
    pub fn new(config: ConversionConfig) -> Result<Self> {
        Self::with_custom(AutoSampleReader, CHeaderWriter, config)
    }
}

impl<R: SampleReader, W: TextureWriter> TextureToHeaderPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Result<Self> {
        let packer = Packer::new(config.channels.clone())?;
        Ok(Self {
            reader,
            writer,
            config,
            packer,
        })
    }

    /// C identifier for the texture stored at `path`, derived from its file stem.
    pub fn texture_name(path: &Path) -> Option<String> {
        let stem = path.file_stem()?.to_string_lossy();
        let mut name: String = stem
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }
        Some(name)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, name: &str, input_data: &[u8], output: &mut dyn Write) -> Result<PackedTexture> {
        info!("Starting texture conversion");

        let image = {
            let _span = tracing::info_span!("decode_samples").entered();
            self.reader.read_samples(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_image",
                width = image.width,
                height = image.height,
                channels = image.channels
            ).entered();
            self.packer.validate(&image)?;
        }

        let packed = {
            let _span = tracing::info_span!("pack_samples", format = %self.packer.format()).entered();
            self.packer.pack(&image, self.config.framing)?
        };

        if self.config.verify {
            let _span = tracing::info_span!("verify_packing").entered();
            self.packer.verify(&image, &packed)?;
        }

        {
            let _span = tracing::info_span!("write_header").entered();
            self.writer.write_texture(name, &packed, output, &self.config)?;
        }

        info!(
            width = packed.width,
            height = packed.height,
            words = packed.word_count(),
            framing = ?packed.framing(),
            "Conversion complete"
        );
        Ok(packed)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<PackedTexture> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let name = Self::texture_name(input_path).ok_or_else(|| {
            ConversionError::InputReadError(format!("{}: no file name", input_path.display()))
        })?;

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // Render fully before touching the output so failures leave no partial header.
        let mut header = Vec::new();
        let packed = self.convert(&name, &input_data, &mut header)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &header).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(packed)
    }

    /// Converts every regular file in `input_dir` into `<output_dir>/<name>.h`.
    ///
    /// Files that fail are logged and recorded in the report; only unreadable
    /// directories fail the whole batch.
    #[instrument(skip(self, input_dir, output_dir))]
    pub fn convert_directory<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
    ) -> Result<BatchReport> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        if !output_dir.is_dir() {
            return Err(ConversionError::OutputWriteError(format!(
                "{}: not a directory",
                output_dir.display()
            )));
        }

        let mut inputs: Vec<PathBuf> = std::fs::read_dir(input_dir)
            .map_err(|e| ConversionError::InputReadError(format!("{}: {}", input_dir.display(), e)))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        inputs.sort();

        info!(
            input = %input_dir.display(),
            files = inputs.len(),
            format = %self.packer.format(),
            "Converting directory"
        );

        let mut report = BatchReport::default();
        let mut emitted: HashMap<String, PathBuf> = HashMap::new();
        for input in inputs {
            let Some(name) = Self::texture_name(&input) else {
                continue;
            };
            if let Some(first) = emitted.get(&name) {
                let e = ConversionError::OutputWriteError(format!(
                    "{}.h already produced by {}",
                    name,
                    first.display()
                ));
                warn!("Skipping {}: {}", input.display(), e);
                report.failed.push((input, e));
                continue;
            }
            let output = output_dir.join(format!("{}.h", name));

            match self.convert_file(&input, &output) {
                Ok(_) => {
                    info!("Converted {} to {}", input.display(), output.display());
                    emitted.insert(name, input);
                    report.converted.push(output);
                }
                Err(e) => {
                    if e.kind() == ErrorKind::InternalInvariant {
                        error!("Packing bug while converting {}: {}", input.display(), e);
                    } else {
                        warn!("Skipping {}: {}", input.display(), e);
                    }
                    report.failed.push((input, e));
                }
            }
        }

        info!(
            converted = report.converted.len(),
            failed = report.failed.len(),
            "Directory conversion finished"
        );
        Ok(report)
    }

    pub fn format(&self) -> PixelFormat {
        self.packer.format()
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) -> Result<()> {
        self.packer = Packer::new(config.channels.clone())?;
        self.config = config;
        Ok(())
    }
}
