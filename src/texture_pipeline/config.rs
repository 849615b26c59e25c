//! Conversion configuration module
//!
//! Runtime configuration, its builder, and the TOML conversion file it is
//! usually loaded from.

mod loader;
pub mod types;


pub use types::{ConversionConfig, ConversionConfigBuilder, TextureAccess};
