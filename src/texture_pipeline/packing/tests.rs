use crate::texture_pipeline::common::error::{ConversionError, ErrorKind};
use crate::texture_pipeline::format::{ChannelConfig, PixelFormat, WordSize};
use crate::texture_pipeline::packing::{
    BitStreamReader, BitStreamWriter, FramingMode, PackedPayload, Packer,
};
use crate::texture_pipeline::samples::SampleImage;

fn sample_image(width: usize, height: usize, channels: usize, data: Vec<u8>) -> SampleImage {
    SampleImage { width, height, channels, data }
}

/// Deterministic RGBA test pattern.
fn pattern_image(width: usize, height: usize, channels: usize) -> SampleImage {
    let data = (0..width * height * channels)
        .map(|i| (i * 37 + 11) as u8)
        .collect();
    sample_image(width, height, channels, data)
}

/// 3x3 grid of pure red, green and blue pixels.
fn color_grid() -> SampleImage {
    const R: [u8; 3] = [255, 0, 0];
    const G: [u8; 3] = [0, 255, 0];
    const B: [u8; 3] = [0, 0, 255];
    let data = [R, B, G, G, R, B, B, G, R].concat();
    sample_image(3, 3, 3, data)
}

fn packer(depths: &[u8]) -> Packer {
    Packer::new(ChannelConfig::new(depths).unwrap()).unwrap()
}

fn element_words(payload: &PackedPayload) -> &[u16] {
    match payload {
        PackedPayload::Elements(elements) => &elements.words,
        PackedPayload::Stream(_) => panic!("expected element payload"),
    }
}

fn stream_bytes(payload: &PackedPayload) -> &[u8] {
    match payload {
        PackedPayload::Stream(bytes) => bytes,
        PackedPayload::Elements(_) => panic!("expected stream payload"),
    }
}

#[test]
fn test_writer_fills_msb_first() {
    let mut writer = BitStreamWriter::new(WordSize::Bits8);
    writer.write(0b101, 3);
    writer.write(0b11111, 5);

    assert!(!writer.flush());
    assert_eq!(writer.bits_written(), 8);
    assert_eq!(writer.into_words(), vec![0b1011_1111]);
}

#[test]
fn test_writer_values_straddle_words() {
    let mut writer = BitStreamWriter::new(WordSize::Bits8);
    writer.write(0xF, 4);
    writer.write(0x81, 8);

    assert_eq!(writer.words_written(), 1);
    assert!(writer.flush());
    assert_eq!(writer.into_words(), vec![0xF8, 0x10]);
}

#[test]
fn test_writer_flush_without_pending_bits_is_noop() {
    let mut writer = BitStreamWriter::new(WordSize::Bits16);
    assert!(!writer.flush());
    assert_eq!(writer.words_written(), 0);
}

#[test]
fn test_truncated_samples_read_back_exactly() {
    for depth in 1..=8u8 {
        for sample in 0..=255u8 {
            let quantized = ChannelConfig::quantize(sample, depth);
            let mut writer = BitStreamWriter::new(WordSize::Bits16);
            writer.write(quantized, depth);
            writer.flush();
            let words = writer.into_words();

            let mut reader = BitStreamReader::new(&words, WordSize::Bits16);
            assert_eq!(reader.read(depth), Some(sample >> (8 - depth)));
        }
    }
}

#[test]
fn test_reader_stops_at_end_of_words() {
    let words = [0xAB];
    let mut reader = BitStreamReader::new(&words, WordSize::Bits8);

    assert_eq!(reader.read(4), Some(0xA));
    assert_eq!(reader.bits_remaining(), 4);
    assert_eq!(reader.read(4), Some(0xB));
    assert_eq!(reader.bits_remaining(), 0);
    assert_eq!(reader.read(1), None);
}

#[test]
fn test_rgb565_two_pixels() {
    let image = sample_image(2, 1, 3, vec![255, 0, 0, 0, 255, 0]);
    let packed = packer(&[5, 6, 5]).pack(&image, FramingMode::Element).unwrap();

    assert_eq!(packed.format, PixelFormat::Rgb565);
    assert_eq!(element_words(&packed.payload), &[63488, 2016]);
    match &packed.payload {
        PackedPayload::Elements(elements) => {
            assert_eq!(elements.element_count(), 2);
            assert_eq!(elements.words_per_element, 1);
        }
        PackedPayload::Stream(_) => unreachable!(),
    }
}

#[test]
fn test_color_grid_rgb565() {
    let packed = packer(&[5, 6, 5]).pack(&color_grid(), FramingMode::Element).unwrap();
    assert_eq!(
        element_words(&packed.payload),
        &[63488, 31, 2016, 2016, 63488, 31, 31, 2016, 63488]
    );
}

#[test]
fn test_color_grid_rgb444_pads_last_element() {
    let packed = packer(&[4, 4, 4]).pack(&color_grid(), FramingMode::Element).unwrap();

    let PackedPayload::Elements(elements) = &packed.payload else {
        panic!("expected element payload");
    };
    let grouped: Vec<&[u16]> = elements.elements().collect();
    assert_eq!(
        grouped,
        vec![
            &[240, 0, 15][..],
            &[15, 0, 240][..],
            &[240, 0, 15][..],
            &[0, 240, 240][..],
            &[240, 0, 0][..],
        ]
    );
}

#[test]
fn test_color_grid_rgb888_stream_matches_samples() {
    let grid = color_grid();
    let packed = packer(&[8, 8, 8]).pack(&grid, FramingMode::Stream).unwrap();

    assert_eq!(stream_bytes(&packed.payload), grid.data.as_slice());
}

#[test]
fn test_rgb444_single_pixel_stream_pads_final_byte() {
    let image = sample_image(1, 1, 3, vec![0xAB, 0xCD, 0xEF]);
    let packed = packer(&[4, 4, 4]).pack(&image, FramingMode::Stream).unwrap();

    let bytes = stream_bytes(&packed.payload);
    assert_eq!(bytes, &[0xAC, 0xE0]);
    assert_eq!(bytes[1] & 0x0F, 0);
}

#[test]
fn test_rgb444_single_pixel_element_pads_whole_pixel() {
    let image = sample_image(1, 1, 3, vec![0xAB, 0xCD, 0xEF]);
    let packed = packer(&[4, 4, 4]).pack(&image, FramingMode::Element).unwrap();

    assert_eq!(element_words(&packed.payload), &[0xAC, 0xE0, 0x00]);
}

#[test]
fn test_rgba4444_uses_alpha() {
    let image = sample_image(1, 1, 4, vec![0x10, 0x20, 0x30, 0xF0]);
    let packed = packer(&[4, 4, 4, 4]).pack(&image, FramingMode::Element).unwrap();

    assert_eq!(element_words(&packed.payload), &[0x123F]);
}

#[test]
fn test_r8_takes_red_channel() {
    let image = sample_image(3, 1, 4, vec![7, 1, 1, 1, 8, 2, 2, 2, 9, 3, 3, 3]);
    let p = packer(&[8]);

    let elements = p.pack(&image, FramingMode::Element).unwrap();
    let stream = p.pack(&image, FramingMode::Stream).unwrap();

    assert_eq!(element_words(&elements.payload), &[7, 8, 9]);
    assert_eq!(stream_bytes(&stream.payload), &[7, 8, 9]);
}

#[test]
fn test_stream_byte_count_matches_bit_count() {
    for format in PixelFormat::ALL {
        let channels = format.channel_depths().len();
        let p = packer(format.channel_depths());
        for (width, height) in [(1, 1), (3, 1), (5, 7), (16, 3)] {
            let image = pattern_image(width, height, channels.max(3));
            let packed = p.pack(&image, FramingMode::Stream).unwrap();

            let total_bits = width * height * format.bits_per_pixel() as usize;
            assert_eq!(packed.word_count(), total_bits.div_ceil(8), "{} {}x{}", format, width, height);
        }
    }
}

#[test]
fn test_element_counts_for_every_format() {
    for format in PixelFormat::ALL {
        let channels = format.channel_depths().len();
        let p = packer(format.channel_depths());
        for (width, height) in [(1, 1), (3, 3), (2, 5), (7, 1)] {
            let image = pattern_image(width, height, channels.max(3));
            let packed = p.pack(&image, FramingMode::Element).unwrap();
            let PackedPayload::Elements(elements) = &packed.payload else {
                panic!("expected element payload");
            };

            let expected_elements = (width * height).div_ceil(format.pixels_per_element());
            assert_eq!(elements.element_count(), expected_elements);
            assert_eq!(elements.element_count() * elements.words_per_element, elements.words.len());
        }
    }
}

#[test]
fn test_element_bits_cover_padded_pixels() {
    for format in PixelFormat::ALL {
        let channels = format.channel_depths().len();
        let p = packer(format.channel_depths());
        for (width, height) in [(1, 1), (3, 3), (2, 5), (7, 1)] {
            let image = pattern_image(width, height, channels.max(3));
            let packed = p.pack(&image, FramingMode::Element).unwrap();
            let PackedPayload::Elements(elements) = &packed.payload else {
                panic!("expected element payload");
            };

            let pixels = width * height;
            let padding = pixels.next_multiple_of(format.pixels_per_element()) - pixels;
            let total_bits = (pixels + padding) * format.bits_per_pixel() as usize;
            let word_bits = elements.word_size.bits() as usize;
            assert_eq!(elements.words.len() * word_bits, total_bits, "{} {}x{}", format, width, height);
            assert_eq!(total_bits % word_bits, 0);
        }
    }
}

#[test]
fn test_verify_accepts_packed_output() {
    for format in PixelFormat::ALL {
        let p = packer(format.channel_depths());
        let image = pattern_image(5, 3, 4);
        for framing in [FramingMode::Element, FramingMode::Stream] {
            let packed = p.pack(&image, framing).unwrap();
            p.verify(&image, &packed).unwrap();
        }
    }
}

#[test]
fn test_verify_detects_corruption() {
    let p = packer(&[5, 6, 5]);
    let image = pattern_image(2, 2, 3);
    let mut packed = p.pack(&image, FramingMode::Element).unwrap();
    if let PackedPayload::Elements(elements) = &mut packed.payload {
        elements.words[1] ^= 0x0400;
    }

    let err = p.verify(&image, &packed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InternalInvariant);
}

#[test]
fn test_unpack_stream_excludes_padding() {
    let image = sample_image(3, 1, 3, vec![255, 255, 255, 0, 0, 0, 128, 64, 32]);
    let p = packer(&[4, 4, 4]);

    let stream = p.pack(&image, FramingMode::Stream).unwrap();
    let elements = p.pack(&image, FramingMode::Element).unwrap();

    assert_eq!(
        stream.unpack().unwrap(),
        vec![vec![15, 15, 15], vec![0, 0, 0], vec![8, 4, 2]]
    );
    assert_eq!(elements.unpack().unwrap().len(), 4);
}

#[test]
fn test_zero_area_image_rejected() {
    let image = sample_image(0, 5, 3, Vec::new());
    let err = packer(&[5, 6, 5]).pack(&image, FramingMode::Stream).unwrap_err();

    assert!(matches!(err, ConversionError::InvalidDimensions(0, 5)));
    assert_eq!(err.kind(), ErrorKind::ImageRejected);
}

#[test]
fn test_rgba_format_on_rgb_source_rejected() {
    let image = pattern_image(2, 2, 3);
    let err = packer(&[4, 4, 4, 4]).pack(&image, FramingMode::Element).unwrap_err();

    assert!(matches!(err, ConversionError::ChannelMismatch { required: 4, available: 3 }));
    assert_eq!(err.kind(), ErrorKind::ImageRejected);
}

#[test]
fn test_short_sample_buffer_rejected() {
    let image = sample_image(2, 2, 3, vec![0; 9]);
    let err = packer(&[8, 8, 8]).pack(&image, FramingMode::Element).unwrap_err();
    assert!(matches!(err, ConversionError::DecodeError(_)));
}

#[test]
fn test_unsupported_configuration_rejected() {
    let channels = ChannelConfig::new(&[8, 8, 8, 8]).unwrap();
    let err = Packer::new(channels).unwrap_err();

    assert!(matches!(err, ConversionError::UnsupportedFormat(_)));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
