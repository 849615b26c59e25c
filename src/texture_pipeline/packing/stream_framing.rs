use tracing::debug;
use crate::texture_pipeline::common::error::{ConversionError, Result};
use crate::texture_pipeline::format::{ChannelConfig, PixelFormat, WordSize};
use crate::texture_pipeline::packing::bit_writer::BitStreamWriter;
use crate::texture_pipeline::packing::framing::Framing;
use crate::texture_pipeline::packing::types::PackedPayload;
use crate::texture_pipeline::samples::SampleImage;

/// Packs the whole image as one continuous byte stream.
pub struct StreamFraming;

impl Framing for StreamFraming {
    fn pack(&self, image: &SampleImage, channels: &ChannelConfig, format: PixelFormat) -> Result<PackedPayload> {
        let total_bits = image.pixel_count() as u64 * channels.bits_per_pixel() as u64;
        let expected_bytes = total_bits.div_ceil(8) as usize;

        debug!("Stream framing {}: {} bits in {} bytes", format, total_bits, expected_bytes);

        let mut writer = BitStreamWriter::with_capacity(WordSize::Bits8, expected_bytes);
        for pixel in image.pixels() {
            for (value, depth) in channels.quantize_pixel(pixel) {
                writer.write(value, depth);
            }
        }
        writer.flush();

        if writer.bits_written() != total_bits || writer.words_written() != expected_bytes {
            return Err(ConversionError::InternalInvariant(format!(
                "{} bits written as {} bytes, expected {} bits in {} bytes",
                writer.bits_written(),
                writer.words_written(),
                total_bits,
                expected_bytes
            )));
        }

        // 8-bit words never exceed u8::MAX
        let bytes = writer.into_words().into_iter().map(|w| w as u8).collect();
        Ok(PackedPayload::Stream(bytes))
    }
}
