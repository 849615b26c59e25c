//! Supported pixel formats and their packing geometry

use std::fmt;

use crate::texture_pipeline::common::error::{ConversionError, Result};
use crate::texture_pipeline::format::channels::ChannelConfig;

/// Length of the word the bit writer fills before emitting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSize {
    Bits8,
    Bits16,
}

impl WordSize {
    pub fn bits(self) -> u32 {
        match self {
            WordSize::Bits8 => 8,
            WordSize::Bits16 => 16,
        }
    }
}

/// Pixel formats understood by the target renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb888,
    Rgb565,
    Rgb444,
    Rgba4444,
    R8,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 5] = [
        PixelFormat::Rgb888,
        PixelFormat::Rgb565,
        PixelFormat::Rgb444,
        PixelFormat::Rgba4444,
        PixelFormat::R8,
    ];

    /// Maps a channel configuration onto one of the supported formats.
    pub fn classify(channels: &ChannelConfig) -> Result<Self> {
        match channels.depths() {
            [8, 8, 8] => Ok(PixelFormat::Rgb888),
            [5, 6, 5] => Ok(PixelFormat::Rgb565),
            [4, 4, 4] => Ok(PixelFormat::Rgb444),
            [4, 4, 4, 4] => Ok(PixelFormat::Rgba4444),
            [8] => Ok(PixelFormat::R8),
            other => Err(ConversionError::UnsupportedFormat(other.to_vec())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::Rgb888 => "RGB888",
            PixelFormat::Rgb565 => "RGB565",
            PixelFormat::Rgb444 => "RGB444",
            PixelFormat::Rgba4444 => "RGBA4444",
            PixelFormat::R8 => "R8",
        }
    }

    pub fn channel_depths(self) -> &'static [u8] {
        match self {
            PixelFormat::Rgb888 => &[8, 8, 8],
            PixelFormat::Rgb565 => &[5, 6, 5],
            PixelFormat::Rgb444 => &[4, 4, 4],
            PixelFormat::Rgba4444 => &[4, 4, 4, 4],
            PixelFormat::R8 => &[8],
        }
    }

    pub fn word_size(self) -> WordSize {
        match self {
            PixelFormat::Rgb565 | PixelFormat::Rgba4444 => WordSize::Bits16,
            PixelFormat::Rgb888 | PixelFormat::Rgb444 | PixelFormat::R8 => WordSize::Bits8,
        }
    }

    pub fn words_per_element(self) -> usize {
        match self {
            PixelFormat::Rgb888 | PixelFormat::Rgb444 => 3,
            PixelFormat::Rgb565 | PixelFormat::Rgba4444 | PixelFormat::R8 => 1,
        }
    }

    pub fn pixels_per_element(self) -> usize {
        match self {
            PixelFormat::Rgb444 => 2,
            _ => 1,
        }
    }

    pub fn bits_per_pixel(self) -> u32 {
        self.channel_depths().iter().map(|&d| d as u32).sum()
    }

    pub fn element_count(self, pixel_count: usize) -> usize {
        pixel_count.div_ceil(self.pixels_per_element())
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
