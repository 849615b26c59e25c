//! MSB-first bit stream writer

use crate::texture_pipeline::format::WordSize;

/// Accumulates `(value, bit_width)` pairs into fixed-length words.
///
/// Bits are taken from each value most significant first and stored into the
/// current word starting at its most significant bit. A word is emitted as
/// soon as its last bit is written, so values freely straddle word
/// boundaries. One writer serves exactly one image.
#[derive(Debug)]
pub struct BitStreamWriter {
    word_bits: u32,
    buffer: u16,
    /// Free bits left in `buffer`; the next bit lands at `cursor - 1`.
    cursor: u32,
    words: Vec<u16>,
    bits_written: u64,
}

impl BitStreamWriter {
    pub fn new(word_size: WordSize) -> Self {
        Self::with_capacity(word_size, 0)
    }

    pub fn with_capacity(word_size: WordSize, words: usize) -> Self {
        Self {
            word_bits: word_size.bits(),
            buffer: 0,
            cursor: word_size.bits(),
            words: Vec::with_capacity(words),
            bits_written: 0,
        }
    }

    /// Writes the low `bit_width` bits of `value`, most significant first.
    pub fn write(&mut self, value: u8, bit_width: u8) {
        debug_assert!(bit_width <= 8);

        for bit in (0..bit_width).rev() {
            self.cursor -= 1;
            if (value >> bit) & 1 == 1 {
                self.buffer |= 1 << self.cursor;
            }
            self.bits_written += 1;

            if self.cursor == 0 {
                self.words.push(self.buffer);
                self.buffer = 0;
                self.cursor = self.word_bits;
            }
        }
    }

    /// Emits a partially filled word with its unused low bits zeroed.
    ///
    /// Returns whether a word was emitted.
    pub fn flush(&mut self) -> bool {
        if self.cursor == self.word_bits {
            return false;
        }

        self.words.push(self.buffer);
        self.buffer = 0;
        self.cursor = self.word_bits;
        true
    }

    pub fn words_written(&self) -> usize {
        self.words.len()
    }

    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    pub fn into_words(self) -> Vec<u16> {
        self.words
    }
}
