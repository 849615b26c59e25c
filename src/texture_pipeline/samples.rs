//! Sample source module
//!
//! Decodes texture files into interleaved 8-bit channel samples.

mod reader;
mod image_reader;
mod tiff_reader;
mod auto_reader;
pub mod types;


pub use reader::SampleReader;
pub use image_reader::ImageSampleReader;
pub use tiff_reader::TiffSampleReader;
pub use auto_reader::AutoSampleReader;
pub use types::SampleImage;
