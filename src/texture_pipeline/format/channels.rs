//! Per-channel bit depth configuration

use crate::texture_pipeline::common::error::{ConversionError, Result};

/// Largest number of channels a texture may carry (red, green, blue, alpha).
pub const MAX_CHANNELS: usize = 4;

/// Bit depth of a raw source sample.
pub const SAMPLE_BITS: u8 = 8;

/// Ordered bit depths of the channels that are packed, red first.
///
/// Construction validates the channel count and every depth, so a
/// `ChannelConfig` in hand always describes 1 to 4 channels of 1 to 8 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    depths: Vec<u8>,
}

impl ChannelConfig {
    pub fn new(depths: &[u8]) -> Result<Self> {
        if depths.is_empty() || depths.len() > MAX_CHANNELS {
            return Err(ConversionError::InvalidChannelCount(depths.len()));
        }

        for (channel, &depth) in depths.iter().enumerate() {
            if depth == 0 || depth > SAMPLE_BITS {
                return Err(ConversionError::InvalidBitDepth { channel, depth });
            }
        }

        Ok(Self {
            depths: depths.to_vec(),
        })
    }

    pub fn channel_count(&self) -> usize {
        self.depths.len()
    }

    pub fn depths(&self) -> &[u8] {
        &self.depths
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.depths.iter().map(|&d| d as u32).sum()
    }

    /// Keeps the `depth` most significant bits of an 8-bit sample.
    pub fn quantize(sample: u8, depth: u8) -> u8 {
        sample >> (SAMPLE_BITS - depth)
    }

    /// Quantizes the first `channel_count()` samples of one source pixel.
    pub fn quantize_pixel<'a>(&'a self, pixel: &'a [u8]) -> impl Iterator<Item = (u8, u8)> + 'a {
        self.depths
            .iter()
            .zip(pixel)
            .map(|(&depth, &sample)| (Self::quantize(sample, depth), depth))
    }
}
