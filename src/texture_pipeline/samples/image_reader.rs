//! Sample reader backed by the `image` crate.
//!
//! Handles the common texture source formats (PNG, BMP, JPEG, TGA, GIF).
//! Palette images are expanded by the decoder, so they arrive here as RGB or
//! RGBA. Grayscale and high bit depth sources are rejected.

use tracing::debug;
use image::DynamicImage;
use crate::texture_pipeline::common::error::{Result, ConversionError};
use crate::texture_pipeline::samples::reader::SampleReader;
use crate::texture_pipeline::samples::types::SampleImage;

pub struct ImageSampleReader;

impl SampleReader for ImageSampleReader {
    fn read_samples(&self, data: &[u8]) -> Result<SampleImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let (channels, width, height, data) = match decoded {
            DynamicImage::ImageRgb8(buffer) => (3, buffer.width(), buffer.height(), buffer.into_raw()),
            DynamicImage::ImageRgba8(buffer) => (4, buffer.width(), buffer.height(), buffer.into_raw()),
            other => {
                return Err(ConversionError::UnsupportedPixelEncoding(format!(
                    "{:?}, expected 8-bit RGB or RGBA",
                    other.color()
                )));
            }
        };

        debug!("Decoded image: {}x{} with {} channels", width, height, channels);

        Ok(SampleImage {
            width: width as usize,
            height: height as usize,
            channels,
            data,
        })
    }
}
