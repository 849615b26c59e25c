use tracing::debug;
use crate::texture_pipeline::common::error::{ConversionError, Result};
use crate::texture_pipeline::format::{ChannelConfig, PixelFormat};
use crate::texture_pipeline::packing::element_framing::ElementFraming;
use crate::texture_pipeline::packing::framing::Framing;
use crate::texture_pipeline::packing::stream_framing::StreamFraming;
use crate::texture_pipeline::packing::types::{FramingMode, PackedPayload, PackedTexture};
use crate::texture_pipeline::samples::SampleImage;

/// Quantizes and packs images for one channel configuration.
///
/// The format is classified once at construction, so an unsupported
/// configuration fails before any image is looked at.
#[derive(Debug, Clone)]
pub struct Packer {
    channels: ChannelConfig,
    format: PixelFormat,
}

impl Packer {
    pub fn new(channels: ChannelConfig) -> Result<Self> {
        let format = PixelFormat::classify(&channels)?;
        Ok(Self { channels, format })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn channels(&self) -> &ChannelConfig {
        &self.channels
    }

    /// Checks that every configured channel can be sampled from `image`.
    pub fn validate(&self, image: &SampleImage) -> Result<()> {
        if image.width == 0 || image.height == 0 {
            return Err(ConversionError::InvalidDimensions(image.width, image.height));
        }

        if image.channels < self.channels.channel_count() {
            return Err(ConversionError::ChannelMismatch {
                required: self.channels.channel_count(),
                available: image.channels,
            });
        }

        if image.data.len() != image.pixel_count() * image.channels {
            return Err(ConversionError::DecodeError(format!(
                "{} samples for a {}x{} image with {} channels",
                image.data.len(),
                image.width,
                image.height,
                image.channels
            )));
        }

        Ok(())
    }

    pub fn pack(&self, image: &SampleImage, framing: FramingMode) -> Result<PackedTexture> {
        self.validate(image)?;

        let payload = match framing {
            FramingMode::Element => ElementFraming.pack(image, &self.channels, self.format)?,
            FramingMode::Stream => StreamFraming.pack(image, &self.channels, self.format)?,
        };

        debug!("Packed {}x{} image as {} ({:?})", image.width, image.height, self.format, framing);

        Ok(PackedTexture {
            format: self.format,
            width: image.width,
            height: image.height,
            payload,
        })
    }

    /// Unpacks `packed` and compares it against the quantized source samples.
    pub fn verify(&self, image: &SampleImage, packed: &PackedTexture) -> Result<()> {
        let unpacked = packed.unpack()?;

        let padding = match &packed.payload {
            PackedPayload::Elements(_) => unpacked.len().saturating_sub(image.pixel_count()),
            PackedPayload::Stream(_) => 0,
        };
        if unpacked.len() != image.pixel_count() + padding {
            return Err(ConversionError::InternalInvariant(format!(
                "unpacked {} pixels from a {}x{} image",
                unpacked.len(),
                image.width,
                image.height
            )));
        }

        for (index, (source, packed_pixel)) in image.pixels().zip(&unpacked).enumerate() {
            let expected: Vec<u8> = self.channels.quantize_pixel(source).map(|(value, _)| value).collect();
            if &expected != packed_pixel {
                return Err(ConversionError::InternalInvariant(format!(
                    "pixel {} unpacks to {:?}, expected {:?}",
                    index, packed_pixel, expected
                )));
            }
        }

        if unpacked[image.pixel_count()..].iter().flatten().any(|&v| v != 0) {
            return Err(ConversionError::InternalInvariant(
                "element padding pixels are not zero".to_string(),
            ));
        }

        Ok(())
    }
}
