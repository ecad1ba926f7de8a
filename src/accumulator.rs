//! Pending-bit accumulator
//!
//! Bits are assembled MSB-first in a 64-bit register: every push shifts the
//! register left and ORs the new field into the low bits, so the oldest
//! pending bit is always the highest set position. Completed bytes and
//! words are peeled off the top, which keeps byte order out of this module
//! entirely.

use crate::config::PadBit;
use crate::error::{BitstreamError, BitstreamResult};

/// Width of the accumulator register in bits
pub const REGISTER_BITS: u32 = 64;

/// Largest field accepted by a single push
pub const MAX_FIELD_WIDTH: u32 = 32;

/// Pending output bits, right-justified in a 64-bit register
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitAccumulator {
    /// Pending bits; everything above `filled_bits` is zero
    register: u64,
    /// Number of pending bits
    filled_bits: u32,
}

#[inline]
fn low_mask(bits: u32) -> u64 {
    if bits >= REGISTER_BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

impl BitAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `value` can be pushed as a `width`-bit field.
    ///
    /// Does not touch the register, so callers can validate before
    /// committing to any side effect.
    pub fn check_field(value: u32, width: u32) -> BitstreamResult<()> {
        if width == 0 || width > MAX_FIELD_WIDTH {
            return Err(BitstreamError::InvalidWidth {
                width,
                max: MAX_FIELD_WIDTH,
            });
        }
        if width < 32 && (value >> width) != 0 {
            return Err(BitstreamError::ValueOverflow { value, width });
        }
        Ok(())
    }

    /// Append a `width`-bit field after the pending bits
    pub fn push(&mut self, value: u32, width: u32) -> BitstreamResult<()> {
        Self::check_field(value, width)?;
        if self.filled_bits + width > REGISTER_BITS {
            return Err(BitstreamError::AccumulatorFull {
                pending: self.filled_bits,
                width,
            });
        }

        self.register = (self.register << width) | u64::from(value);
        self.filled_bits += width;
        Ok(())
    }

    /// Remove every complete byte from the top of the register
    pub fn drain_full_bytes(&mut self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.filled_bits / 8) as usize);
        while self.filled_bits >= 8 {
            self.filled_bits -= 8;
            bytes.push((self.register >> self.filled_bits) as u8);
            self.register &= low_mask(self.filled_bits);
        }
        bytes
    }

    /// Remove every complete 32-bit word from the top of the register.
    ///
    /// Words are returned as values, most significant bit first; turning
    /// them into bytes is the caller's concern.
    pub fn drain_full_words(&mut self) -> Vec<u32> {
        let mut words = Vec::with_capacity((self.filled_bits / 32) as usize);
        while self.filled_bits >= 32 {
            self.filled_bits -= 32;
            words.push((self.register >> self.filled_bits) as u32);
            self.register &= low_mask(self.filled_bits);
        }
        words
    }

    /// Drain every pending bit, completing the last partial byte with `pad`
    /// bits, and clear the register.
    ///
    /// Complete bytes still pending come first, so at most one byte of the
    /// result carries padding. Empty when nothing is pending.
    pub fn flush_with_padding(&mut self, pad: PadBit) -> Vec<u8> {
        let mut bytes = self.drain_full_bytes();
        if self.filled_bits == 0 {
            return bytes;
        }

        let pad_len = 8 - self.filled_bits;
        let fill = match pad {
            PadBit::Zero => 0,
            PadBit::One => low_mask(pad_len),
        };
        bytes.push(((self.register << pad_len) | fill) as u8);
        self.clear();
        bytes
    }

    /// Number of pending bits
    pub fn filled_bits(&self) -> u32 {
        self.filled_bits
    }

    pub fn is_empty(&self) -> bool {
        self.filled_bits == 0
    }

    /// Raw pending bits, right-justified
    pub fn pending(&self) -> u64 {
        self.register
    }

    pub fn clear(&mut self) {
        self.register = 0;
        self.filled_bits = 0;
    }
}
