//! TOML texture conversion file
//!
//! ```toml
//! [settings]
//! read_only_access = true
//! dimension = 3
//! bit_depth_red = 5
//! bit_depth_green = 6
//! bit_depth_blue = 5
//! bit_depth_alpha = 4
//! framing = "element"
//! ```
//!
//! All four bit depths must be present and valid even when `dimension`
//! leaves some of them unused.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use crate::texture_pipeline::common::error::{ConversionError, Result};
use crate::texture_pipeline::config::types::{ConversionConfig, TextureAccess};
use crate::texture_pipeline::format::{MAX_CHANNELS, SAMPLE_BITS};
use crate::texture_pipeline::packing::FramingMode;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConversionFile {
    settings: Settings,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Settings {
    read_only_access: bool,
    dimension: i64,
    bit_depth_red: i64,
    bit_depth_green: i64,
    bit_depth_blue: i64,
    bit_depth_alpha: i64,
    #[serde(default)]
    framing: FramingMode,
}

impl ConversionConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConversionFile =
            toml::from_str(source).map_err(|e| ConversionError::InvalidConfig(e.to_string()))?;
        let settings = file.settings;

        if !(1..=MAX_CHANNELS as i64).contains(&settings.dimension) {
            return Err(ConversionError::InvalidConfig(format!(
                "dimension must be between 1 and {}, got {}",
                MAX_CHANNELS, settings.dimension
            )));
        }

        let named_depths = [
            ("bit_depth_red", settings.bit_depth_red),
            ("bit_depth_green", settings.bit_depth_green),
            ("bit_depth_blue", settings.bit_depth_blue),
            ("bit_depth_alpha", settings.bit_depth_alpha),
        ];

        let mut depths = Vec::with_capacity(MAX_CHANNELS);
        for (name, depth) in named_depths {
            if !(1..=SAMPLE_BITS as i64).contains(&depth) {
                return Err(ConversionError::InvalidConfig(format!(
                    "{} must be between 1 and {}, got {}",
                    name, SAMPLE_BITS, depth
                )));
            }
            depths.push(depth as u8);
        }
        depths.truncate(settings.dimension as usize);

        let access = if settings.read_only_access {
            TextureAccess::ReadOnly
        } else {
            TextureAccess::ReadWrite
        };

        debug!("Loaded conversion settings: depths={:?}, framing={:?}", depths, settings.framing);

        ConversionConfig::builder()
            .bit_depths(&depths)
            .framing(settings.framing)
            .access(access)
            .build()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            ConversionError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }
}
