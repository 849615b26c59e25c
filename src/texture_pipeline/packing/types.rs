//! Packed texture types

use serde::Deserialize;

use crate::texture_pipeline::common::error::{ConversionError, Result};
use crate::texture_pipeline::format::{PixelFormat, WordSize};
use crate::texture_pipeline::packing::bit_reader::BitStreamReader;

/// How packed bits are grouped in the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FramingMode {
    /// Words grouped into elements that each hold whole pixels
    #[default]
    Element,
    /// One unbroken byte stream, padded only in its final byte
    Stream,
}

/// Words of an element-framed texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub word_size: WordSize,
    pub words_per_element: usize,
    pub pixels_per_element: usize,
    pub words: Vec<u16>,
}

impl ElementData {
    pub fn element_count(&self) -> usize {
        self.words.len() / self.words_per_element
    }

    pub fn elements(&self) -> std::slice::ChunksExact<'_, u16> {
        self.words.chunks_exact(self.words_per_element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackedPayload {
    Elements(ElementData),
    Stream(Vec<u8>),
}

/// Result of packing one image; handed on to a `TextureWriter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedTexture {
    pub format: PixelFormat,
    pub width: usize,
    pub height: usize,
    pub payload: PackedPayload,
}

impl PackedTexture {
    pub fn framing(&self) -> FramingMode {
        match self.payload {
            PackedPayload::Elements(_) => FramingMode::Element,
            PackedPayload::Stream(_) => FramingMode::Stream,
        }
    }

    /// Number of words (element mode) or bytes (stream mode) produced.
    pub fn word_count(&self) -> usize {
        match &self.payload {
            PackedPayload::Elements(elements) => elements.words.len(),
            PackedPayload::Stream(bytes) => bytes.len(),
        }
    }

    /// Decodes the quantized channel values of every packed pixel.
    ///
    /// Element mode includes the zero padding pixels of the last element,
    /// stream mode yields exactly `width * height` pixels.
    pub fn unpack(&self) -> Result<Vec<Vec<u8>>> {
        let depths = self.format.channel_depths();

        let (words, word_size, pixel_count) = match &self.payload {
            PackedPayload::Elements(elements) => (
                elements.words.clone(),
                elements.word_size,
                elements.element_count() * elements.pixels_per_element,
            ),
            PackedPayload::Stream(bytes) => (
                bytes.iter().map(|&b| b as u16).collect(),
                WordSize::Bits8,
                self.width * self.height,
            ),
        };

        let mut reader = BitStreamReader::new(&words, word_size);
        let mut pixels = Vec::with_capacity(pixel_count);
        for index in 0..pixel_count {
            let pixel = depths
                .iter()
                .map(|&depth| reader.read(depth))
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| {
                    ConversionError::InternalInvariant(format!(
                        "packed data ends inside pixel {} of {}",
                        index, pixel_count
                    ))
                })?;
            pixels.push(pixel);
        }
        Ok(pixels)
    }
}
