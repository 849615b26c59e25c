//! Decoded sample types

/// 8-bit samples of a decoded RGB or RGBA image.
#[derive(Debug, Clone)]
pub struct SampleImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Samples per pixel, 3 for RGB and 4 for RGBA
    pub channels: usize,
    /// Interleaved row-major samples [R, G, B, (A), R, G, B, (A), ...]
    pub data: Vec<u8>,
}

impl SampleImage {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = (y * self.width + x) * self.channels;
        &self.data[start..start + self.channels]
    }

    /// Pixels in row-major order, `y` outer and `x` inner.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.channels)
    }
}
