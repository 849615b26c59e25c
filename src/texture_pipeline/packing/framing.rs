use crate::texture_pipeline::common::error::Result;
use crate::texture_pipeline::format::{ChannelConfig, PixelFormat};
use crate::texture_pipeline::packing::types::PackedPayload;
use crate::texture_pipeline::samples::SampleImage;

/// Output grouping strategy layered on the shared bit writer.
///
/// Implementations see only validated images: non-zero area and at least
/// `channels.channel_count()` samples per pixel.
pub trait Framing {
    fn pack(&self, image: &SampleImage, channels: &ChannelConfig, format: PixelFormat) -> Result<PackedPayload>;
}
