//! Bit packing module
//!
//! Quantizes channel samples to their configured depth and serializes them
//! MSB-first through one shared bit writer, framed either as fixed-size
//! elements or as a continuous byte stream.

mod bit_writer;
mod bit_reader;
mod framing;
mod element_framing;
mod stream_framing;
mod packer;
pub mod types;

#[cfg(test)]
mod tests;

pub use bit_writer::BitStreamWriter;
pub use bit_reader::BitStreamReader;
pub use framing::Framing;
pub use element_framing::ElementFraming;
pub use stream_framing::StreamFraming;
pub use packer::Packer;
pub use types::{ElementData, FramingMode, PackedPayload, PackedTexture};
