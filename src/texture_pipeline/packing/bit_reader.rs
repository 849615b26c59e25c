use crate::texture_pipeline::format::WordSize;

/// Reads values back out of words produced by `BitStreamWriter`.
#[derive(Debug)]
pub struct BitStreamReader<'a> {
    words: &'a [u16],
    word_bits: u32,
    index: usize,
    /// Unread bits left in `words[index]`.
    cursor: u32,
}

impl<'a> BitStreamReader<'a> {
    pub fn new(words: &'a [u16], word_size: WordSize) -> Self {
        Self {
            words,
            word_bits: word_size.bits(),
            index: 0,
            cursor: word_size.bits(),
        }
    }

    /// Reads the next `bit_width` bits as one value, or `None` once the words run out.
    pub fn read(&mut self, bit_width: u8) -> Option<u8> {
        debug_assert!(bit_width <= 8);

        let mut value = 0u8;
        for _ in 0..bit_width {
            let word = *self.words.get(self.index)?;
            self.cursor -= 1;
            value = (value << 1) | ((word >> self.cursor) & 1) as u8;

            if self.cursor == 0 {
                self.index += 1;
                self.cursor = self.word_bits;
            }
        }
        Some(value)
    }

    pub fn bits_remaining(&self) -> u64 {
        let whole_words = self.words.len().saturating_sub(self.index + 1) as u64;
        if self.index >= self.words.len() {
            0
        } else {
            whole_words * self.word_bits as u64 + self.cursor as u64
        }
    }
}
