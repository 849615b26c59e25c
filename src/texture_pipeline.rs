//! Texture conversion pipeline module
//!
//! Converts source images into statically embeddable texture headers: sample
//! decoding, channel quantization and bit packing, header rendering, and the
//! orchestration that ties them together for single files and directories.

pub mod common;
pub mod config;
pub mod format;
pub mod samples;
pub mod packing;
pub mod header;
pub mod conversions;

pub use common::{
    ConversionError,
    ErrorKind,
    Result,
};

pub use config::{
    ConversionConfig,
    ConversionConfigBuilder,
    TextureAccess,
};

pub use format::{
    ChannelConfig,
    PixelFormat,
    WordSize,
};

pub use samples::{
    SampleImage,
    SampleReader,
    AutoSampleReader,
    ImageSampleReader,
    TiffSampleReader,
};

pub use packing::{
    BitStreamReader,
    BitStreamWriter,
    FramingMode,
    PackedPayload,
    PackedTexture,
    Packer,
};

pub use header::{
    TextureWriter,
    CHeaderWriter,
};

pub use conversions::{
    BatchReport,
    TextureToHeaderPipeline,
};
