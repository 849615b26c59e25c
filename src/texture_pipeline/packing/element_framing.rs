use std::iter;

use tracing::debug;
use crate::texture_pipeline::common::error::{ConversionError, Result};
use crate::texture_pipeline::format::{ChannelConfig, PixelFormat};
use crate::texture_pipeline::packing::bit_writer::BitStreamWriter;
use crate::texture_pipeline::packing::framing::Framing;
use crate::texture_pipeline::packing::types::{ElementData, PackedPayload};
use crate::texture_pipeline::samples::SampleImage;

/// Packs pixels into elements of `words_per_element` words.
///
/// When the pixel count is not a multiple of `pixels_per_element`, the last
/// element is completed with all-zero pixels.
pub struct ElementFraming;

impl Framing for ElementFraming {
    fn pack(&self, image: &SampleImage, channels: &ChannelConfig, format: PixelFormat) -> Result<PackedPayload> {
        let words_per_element = format.words_per_element();
        let pixels_per_element = format.pixels_per_element();
        let expected_elements = format.element_count(image.pixel_count());
        let padding_pixels = expected_elements * pixels_per_element - image.pixel_count();

        debug!(
            "Element framing {}: {} elements, {} padding pixels",
            format, expected_elements, padding_pixels
        );

        let zero_pixel = vec![0u8; channels.channel_count()];
        let pixels = image
            .pixels()
            .chain(iter::repeat(zero_pixel.as_slice()).take(padding_pixels));

        let mut writer = BitStreamWriter::with_capacity(format.word_size(), expected_elements * words_per_element);
        let mut elements_written = 0;
        let mut pixels_in_element = 0;

        for pixel in pixels {
            for (value, depth) in channels.quantize_pixel(pixel) {
                writer.write(value, depth);
            }

            pixels_in_element += 1;
            if pixels_in_element == pixels_per_element {
                elements_written += 1;
                pixels_in_element = 0;
            }
        }
        writer.flush();

        let words_written = writer.words_written();
        if elements_written * words_per_element != words_written || elements_written != expected_elements {
            return Err(ConversionError::InternalInvariant(format!(
                "{} elements of {} words written as {} words, expected {} elements",
                elements_written, words_per_element, words_written, expected_elements
            )));
        }

        Ok(PackedPayload::Elements(ElementData {
            word_size: format.word_size(),
            words_per_element,
            pixels_per_element,
            words: writer.into_words(),
        }))
    }
}
