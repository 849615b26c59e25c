use std::io::Write;
use crate::texture_pipeline::common::error::Result;
use crate::texture_pipeline::config::ConversionConfig;
use crate::texture_pipeline::packing::PackedTexture;

pub trait TextureWriter {
    fn write_texture(&self, name: &str, texture: &PackedTexture, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
