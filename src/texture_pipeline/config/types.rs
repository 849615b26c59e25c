//! Texture conversion configuration types

use crate::texture_pipeline::common::error::Result;
use crate::texture_pipeline::format::ChannelConfig;
use crate::texture_pipeline::packing::FramingMode;

/// Whether the renderer may write to the texture at runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextureAccess {
    /// Emitted as `constexpr` data
    #[default]
    ReadOnly,
    /// Emitted as `inline` mutable data
    ReadWrite,
}

/// Configuration for image to texture header conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Bit depth of every packed channel, red first
    pub channels: ChannelConfig,
    /// Element or continuous stream output
    pub framing: FramingMode,
    /// Access qualifier of the generated texture
    pub access: TextureAccess,
    /// Unpack every texture after packing and compare it with its source.
    /// Doubles the packing work, off by default.
    pub verify: bool,
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    bit_depths: Option<Vec<u8>>,
    framing: Option<FramingMode>,
    access: Option<TextureAccess>,
    verify: Option<bool>,
}

impl ConversionConfigBuilder {
    const DEFAULT_BIT_DEPTHS: [u8; 3] = [8, 8, 8];

    pub fn bit_depths(mut self, depths: &[u8]) -> Self {
        self.bit_depths = Some(depths.to_vec());
        self
    }

    pub fn framing(mut self, framing: FramingMode) -> Self {
        self.framing = Some(framing);
        self
    }

    pub fn access(mut self, access: TextureAccess) -> Self {
        self.access = Some(access);
        self
    }

    pub fn verify(mut self, enable: bool) -> Self {
        self.verify = Some(enable);
        self
    }

    /// Validates channel count and bit depths.
    pub fn build(self) -> Result<ConversionConfig> {
        let depths = self.bit_depths.unwrap_or_else(|| Self::DEFAULT_BIT_DEPTHS.to_vec());
        Ok(ConversionConfig {
            channels: ChannelConfig::new(&depths)?,
            framing: self.framing.unwrap_or_default(),
            access: self.access.unwrap_or_default(),
            verify: self.verify.unwrap_or(false),
        })
    }
}
