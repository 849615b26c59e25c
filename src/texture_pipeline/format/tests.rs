use crate::texture_pipeline::common::error::{ConversionError, ErrorKind};
use crate::texture_pipeline::format::{ChannelConfig, PixelFormat, WordSize};

#[test]
fn test_classify_supported_formats() {
    let cases: [(&[u8], PixelFormat, WordSize, usize, usize); 5] = [
        (&[8, 8, 8], PixelFormat::Rgb888, WordSize::Bits8, 3, 1),
        (&[5, 6, 5], PixelFormat::Rgb565, WordSize::Bits16, 1, 1),
        (&[4, 4, 4], PixelFormat::Rgb444, WordSize::Bits8, 3, 2),
        (&[4, 4, 4, 4], PixelFormat::Rgba4444, WordSize::Bits16, 1, 1),
        (&[8], PixelFormat::R8, WordSize::Bits8, 1, 1),
    ];

    for (depths, format, word_size, words, pixels) in cases {
        let channels = ChannelConfig::new(depths).unwrap();
        let classified = PixelFormat::classify(&channels).unwrap();

        assert_eq!(classified, format);
        assert_eq!(classified.word_size(), word_size);
        assert_eq!(classified.words_per_element(), words);
        assert_eq!(classified.pixels_per_element(), pixels);
        assert_eq!(classified.channel_depths(), depths);
    }
}

#[test]
fn test_element_geometry_is_consistent() {
    for format in PixelFormat::ALL {
        let element_bits = format.words_per_element() as u32 * format.word_size().bits();
        let pixel_bits = format.pixels_per_element() as u32 * format.bits_per_pixel();
        assert_eq!(element_bits, pixel_bits, "{}", format);
    }
}

#[test]
fn test_classify_rejects_rgba8888() {
    let channels = ChannelConfig::new(&[8, 8, 8, 8]).unwrap();
    let err = PixelFormat::classify(&channels).unwrap_err();

    assert!(matches!(err, ConversionError::UnsupportedFormat(ref d) if d == &[8, 8, 8, 8]));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_classify_rejects_reordered_depths() {
    let channels = ChannelConfig::new(&[6, 5, 5]).unwrap();
    assert!(PixelFormat::classify(&channels).is_err());
}

#[test]
fn test_channel_config_validation() {
    assert!(matches!(
        ChannelConfig::new(&[]),
        Err(ConversionError::InvalidChannelCount(0))
    ));
    assert!(matches!(
        ChannelConfig::new(&[8, 8, 8, 8, 8]),
        Err(ConversionError::InvalidChannelCount(5))
    ));
    assert!(matches!(
        ChannelConfig::new(&[5, 0, 5]),
        Err(ConversionError::InvalidBitDepth { channel: 1, depth: 0 })
    ));
    assert!(matches!(
        ChannelConfig::new(&[9]),
        Err(ConversionError::InvalidBitDepth { channel: 0, depth: 9 })
    ));
}

#[test]
fn test_quantize_keeps_top_bits() {
    assert_eq!(ChannelConfig::quantize(255, 5), 31);
    assert_eq!(ChannelConfig::quantize(255, 6), 63);
    assert_eq!(ChannelConfig::quantize(0b1010_1111, 4), 0b1010);
    assert_eq!(ChannelConfig::quantize(0x80, 1), 1);
    assert_eq!(ChannelConfig::quantize(0x7f, 1), 0);
    assert_eq!(ChannelConfig::quantize(200, 8), 200);
}

#[test]
fn test_quantize_pixel_ignores_extra_source_channels() {
    let channels = ChannelConfig::new(&[5, 6, 5]).unwrap();
    let quantized: Vec<(u8, u8)> = channels.quantize_pixel(&[255, 255, 0, 77]).collect();

    assert_eq!(quantized, vec![(31, 5), (63, 6), (0, 5)]);
    assert_eq!(channels.bits_per_pixel(), 16);
}
