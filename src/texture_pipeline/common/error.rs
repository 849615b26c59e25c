use thiserror::Error;

/// Failure classes a caller reacts to differently.
///
/// Configuration errors abort a whole batch before any image is touched,
/// rejected images are skipped, and internal invariant violations mean the
/// packer itself is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    ImageRejected,
    InternalInvariant,
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Channel count must be between 1 and 4, got {0}")]
    InvalidChannelCount(usize),

    #[error("Bit depth of channel {channel} must be between 1 and 8, got {depth}")]
    InvalidBitDepth { channel: usize, depth: u8 },

    #[error("Unsupported channel/bit depth combination: {0:?}")]
    UnsupportedFormat(Vec<u8>),

    #[error("Invalid conversion file: {0}")]
    InvalidConfig(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Image provides {available} channels but {required} are configured")]
    ChannelMismatch { required: usize, available: usize },

    #[error("Unsupported source pixel encoding: {0}")]
    UnsupportedPixelEncoding(String),

    #[error("Internal packing error: {0}")]
    InternalInvariant(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::InvalidChannelCount(_)
            | ConversionError::InvalidBitDepth { .. }
            | ConversionError::UnsupportedFormat(_)
            | ConversionError::InvalidConfig(_) => ErrorKind::Configuration,
            ConversionError::InternalInvariant(_) => ErrorKind::InternalInvariant,
            ConversionError::InputReadError(_)
            | ConversionError::OutputWriteError(_)
            | ConversionError::DecodeError(_)
            | ConversionError::InvalidDimensions(_, _)
            | ConversionError::ChannelMismatch { .. }
            | ConversionError::UnsupportedPixelEncoding(_)
            | ConversionError::IoError(_) => ErrorKind::ImageRejected,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
