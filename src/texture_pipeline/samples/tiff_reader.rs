use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;
use crate::texture_pipeline::common::error::{Result, ConversionError};
use crate::texture_pipeline::samples::reader::SampleReader;
use crate::texture_pipeline::samples::types::SampleImage;

/// Reads 8-bit RGB and RGBA TIFF textures with the `tiff` crate.
pub struct TiffSampleReader;

impl SampleReader for TiffSampleReader {
    fn read_samples(&self, data: &[u8]) -> Result<SampleImage> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let color_type = decoder
            .colortype()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let channels = match color_type {
            ColorType::RGB(8) => 3,
            ColorType::RGBA(8) => 4,
            other => {
                return Err(ConversionError::UnsupportedPixelEncoding(format!(
                    "TIFF {:?}, expected 8-bit RGB or RGBA",
                    other
                )));
            }
        };

        let samples = match decoder
            .read_image()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(samples) => samples,
            _ => {
                return Err(ConversionError::UnsupportedPixelEncoding(
                    "TIFF sample format is not unsigned 8-bit".to_string(),
                ));
            }
        };

        let (width, height) = (width as usize, height as usize);
        if samples.len() != width * height * channels {
            return Err(ConversionError::DecodeError(format!(
                "TIFF holds {} samples, expected {}",
                samples.len(),
                width * height * channels
            )));
        }

        debug!("Decoded TIFF: {}x{} with {} channels", width, height, channels);

        Ok(SampleImage {
            width,
            height,
            channels,
            data: samples,
        })
    }
}
