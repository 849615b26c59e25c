//! Pixel format module
//!
//! Channel bit depth configuration and its classification into the closed
//! set of formats the renderer can sample from.

pub mod channels;
pub mod pixel_format;

#[cfg(test)]
mod tests;

pub use channels::{ChannelConfig, MAX_CHANNELS, SAMPLE_BITS};
pub use pixel_format::{PixelFormat, WordSize};
