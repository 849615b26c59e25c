//! C++ header rendering for the MicroRenderer runtime.
//!
//! The packed words become a statically initialized array next to the
//! texture's access mode, format and dimensions, so the renderer can embed
//! the texture without any loading code.

use std::io::Write;
use tracing::debug;
use crate::texture_pipeline::common::error::Result;
use crate::texture_pipeline::config::{ConversionConfig, TextureAccess};
use crate::texture_pipeline::format::WordSize;
use crate::texture_pipeline::header::writer::TextureWriter;
use crate::texture_pipeline::packing::{PackedPayload, PackedTexture};

/// Words per line before elements are wrapped.
const WORDS_PER_LINE: usize = 20;

pub struct CHeaderWriter;

impl CHeaderWriter {
    fn word_type(word_size: WordSize) -> &'static str {
        match word_size {
            WordSize::Bits8 => "uint8",
            WordSize::Bits16 => "uint16",
        }
    }

    /// Element type, element count and rendered initializer of the data array.
    fn render_data(texture: &PackedTexture) -> (String, usize, String) {
        match &texture.payload {
            PackedPayload::Elements(elements) => {
                let word_type = Self::word_type(elements.word_size);
                let element_type = if elements.words_per_element == 1 {
                    word_type.to_string()
                } else {
                    format!("Vector{}<{}>", elements.words_per_element, word_type)
                };
                let per_line = (WORDS_PER_LINE / elements.words_per_element).max(1);
                let data = Self::render_elements(elements.elements(), per_line);
                (element_type, elements.element_count(), data)
            }
            PackedPayload::Stream(bytes) => {
                let words: Vec<u16> = bytes.iter().map(|&b| b as u16).collect();
                let data = Self::render_elements(words.chunks(1), WORDS_PER_LINE);
                ("uint8".to_string(), bytes.len(), data)
            }
        }
    }

    /// Joins elements with `", "`, wrapping after every `per_line` elements.
    /// Multi-word elements are braced.
    fn render_elements<'a>(elements: impl Iterator<Item = &'a [u16]>, per_line: usize) -> String {
        let mut out = String::new();
        for (index, element) in elements.enumerate() {
            let braced = element.len() > 1;
            if index > 0 {
                out.push_str(match (index % per_line == 0, braced) {
                    (true, true) => ",\n\t",
                    (true, false) => ", \n\t",
                    (false, _) => ", ",
                });
            }

            if braced {
                out.push('{');
            }
            for (word_index, word) in element.iter().enumerate() {
                if word_index > 0 {
                    out.push_str(", ");
                }
                out.push_str(&word.to_string());
            }
            if braced {
                out.push('}');
            }
        }
        out
    }

    pub fn render(name: &str, texture: &PackedTexture, config: &ConversionConfig) -> String {
        let (access, modifier) = match config.access {
            TextureAccess::ReadOnly => ("ACCESS_READONLY", "constexpr"),
            TextureAccess::ReadWrite => ("ACCESS_READWRITE", "inline"),
        };
        let (element_type, element_count, data) = Self::render_data(texture);

        format!(
            "/* \n\
             \x20* MicroRenderer texture description.\n\
             \x20* Texture name: {name}\n\
             \x20*/\n\
             \n\
             #pragma once\n\
             #include \"MicroRenderer/Textures/TextureConfiguration.h\"\n\
             #include \"MicroRenderer/Math/ScalarTypes.h\"\n\
             \n\
             using namespace MicroRenderer;\n\
             \n\
             constexpr TextureAccess {name}_access = {access};\n\
             constexpr TextureInternalFormat {name}_format = FORMAT_{format};\n\
             constexpr int32 {name}_width = {width};\n\
             constexpr int32 {name}_height = {height};\n\
             \n\
             {modifier} {element_type} {name}[{element_count}] = {{\n\
             \x20   {data}\n\
             }};\n",
            format = texture.format.name(),
            width = texture.width,
            height = texture.height,
        )
    }
}

impl TextureWriter for CHeaderWriter {
    fn write_texture(&self, name: &str, texture: &PackedTexture, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Rendering header for texture {}: {} {}", name, texture.format, texture.word_count());

        let header = Self::render(name, texture, config);
        output.write_all(header.as_bytes())?;

        debug!("Header rendering complete, {} bytes", header.len());
        Ok(())
    }
}
