//! Header writing module
//!
//! Serializes packed textures into source files the renderer compiles in.

mod writer;
mod c_header_writer;


pub use writer::TextureWriter;
pub use c_header_writer::CHeaderWriter;
