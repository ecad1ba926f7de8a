//! MSB-first bitstream reader
//!
//! Reads back fields written by [`BitstreamWriter`](crate::BitstreamWriter),
//! mainly for verifying frame layouts and round trips.

use crate::accumulator::MAX_FIELD_WIDTH;
use crate::error::{BitstreamError, BitstreamResult};

/// Reader over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct BitstreamReader<'a> {
    data: &'a [u8],
    /// Bit position of the next read
    position: usize,
}

impl<'a> BitstreamReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Read a `width`-bit field, most significant bit first.
    ///
    /// On error the read position does not move.
    pub fn read_bits(&mut self, width: u32) -> BitstreamResult<u32> {
        if width == 0 || width > MAX_FIELD_WIDTH {
            return Err(BitstreamError::InvalidWidth {
                width,
                max: MAX_FIELD_WIDTH,
            });
        }
        let available = self.bits_remaining();
        if width as usize > available {
            return Err(BitstreamError::UnexpectedEnd {
                requested: width,
                available,
            });
        }

        let mut value = 0u32;
        let mut remaining = width;
        while remaining > 0 {
            let byte = u32::from(self.data[self.position / 8]);
            let offset = (self.position % 8) as u32;
            let take = remaining.min(8 - offset);
            let shift = 8 - offset - take;
            value = (value << take) | ((byte >> shift) & ((1 << take) - 1));
            remaining -= take;
            self.position += take as usize;
        }

        Ok(value)
    }

    pub fn read_flag(&mut self) -> BitstreamResult<bool> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Skip the rest of the current byte
    pub fn skip_to_byte_boundary(&mut self) {
        let aligned = (self.position + 7) / 8 * 8;
        self.position = aligned.min(self.data.len() * 8);
    }

    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.position
    }

    /// Current bit position
    pub fn position(&self) -> usize {
        self.position
    }
}
