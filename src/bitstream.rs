//! Bitstream writing functionality for MP3 encoding
//!
//! This module provides the BitstreamWriter used to pack frame headers,
//! side information and Huffman-coded main data into bytes. Fields are
//! written most significant bit first and the emitted bytes are identical
//! on little- and big-endian hosts.

use crate::accumulator::BitAccumulator;
use crate::config::{PadBit, SpillMode, WriterConfig};
use crate::endian::word_to_wire;
use crate::error::{BitstreamError, BitstreamResult, ConfigResult};

/// Lifecycle of a writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize, serde::Deserialize))]
pub enum WriterState {
    /// Nothing written yet
    Empty,
    /// At least one field written
    Writing,
    /// `finish` has handed the buffer out
    Finished,
}

/// MSB-first bitstream writer
#[derive(Debug)]
pub struct BitstreamWriter {
    /// Committed output bytes
    buffer: Vec<u8>,
    /// Bits not yet committed to the buffer
    accumulator: BitAccumulator,
    config: WriterConfig,
    state: WriterState,
}

impl BitstreamWriter {
    /// Create a writer with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(WriterConfig::default())
    }

    /// Create a writer with a custom configuration
    pub fn with_config(config: WriterConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: WriterConfig) -> Self {
        Self {
            buffer: Vec::with_capacity(config.initial_capacity),
            accumulator: BitAccumulator::new(),
            config,
            state: WriterState::Empty,
        }
    }

    /// Write the low `width` bits of `value` into the bit stream
    /// (counterpart of shine_putbits).
    ///
    /// A rejected call leaves the writer untouched.
    pub fn write_bits(&mut self, value: u32, width: u32) -> BitstreamResult<()> {
        self.ensure_open()?;

        let max = self.config.max_field_width;
        if width == 0 || width > max {
            return Err(BitstreamError::InvalidWidth { width, max });
        }
        self.accumulator.push(value, width)?;
        self.state = WriterState::Writing;
        self.spill();

        Ok(())
    }

    /// Write a single-bit flag
    pub fn write_flag(&mut self, flag: bool) -> BitstreamResult<()> {
        self.write_bits(u32::from(flag), 1)
    }

    /// Pad the current byte with the configured pad bit so the next field
    /// starts on a byte boundary
    pub fn byte_align(&mut self) -> BitstreamResult<()> {
        self.ensure_open()?;

        let partial = self.accumulator.filled_bits() % 8;
        if partial == 0 {
            return Ok(());
        }
        let pad_len = 8 - partial;
        let fill = match self.config.pad_bit {
            PadBit::Zero => 0,
            PadBit::One => (1u32 << pad_len) - 1,
        };
        self.accumulator.push(fill, pad_len)?;
        self.state = WriterState::Writing;
        self.spill();

        Ok(())
    }

    fn spill(&mut self) {
        match self.config.spill {
            SpillMode::Bytewise => {
                let bytes = self.accumulator.drain_full_bytes();
                self.buffer.extend_from_slice(&bytes);
            }
            SpillMode::Word32 => {
                for word in self.accumulator.drain_full_words() {
                    log::trace!(
                        "Spilling word 0x{:08X} at byte offset {}",
                        word,
                        self.buffer.len()
                    );
                    self.buffer.extend_from_slice(&word_to_wire(word));
                }
            }
        }
    }

    fn ensure_open(&self) -> BitstreamResult<()> {
        if self.state == WriterState::Finished {
            return Err(BitstreamError::WriterFinalized);
        }
        Ok(())
    }

    /// Finish the stream, padding the last byte with the configured pad bit
    pub fn finish(&mut self) -> BitstreamResult<Vec<u8>> {
        self.finish_with_padding(self.config.pad_bit)
    }

    /// Finish the stream, padding the last byte with `pad`.
    ///
    /// Ownership of the bytes moves to the caller; further writes fail
    /// until [`reset`](Self::reset) is called.
    pub fn finish_with_padding(&mut self, pad: PadBit) -> BitstreamResult<Vec<u8>> {
        self.ensure_open()?;

        // Word spill can leave up to 31 bits behind
        let tail = self.accumulator.flush_with_padding(pad);
        self.buffer.extend_from_slice(&tail);

        self.state = WriterState::Finished;
        let data = std::mem::take(&mut self.buffer);
        log::debug!(
            "Bitstream finished: {} bytes, pad bit {}",
            data.len(),
            pad.as_bit()
        );
        Ok(data)
    }

    /// Return the writer to the empty state with a fresh buffer
    pub fn reset(&mut self) {
        self.buffer = Vec::with_capacity(self.config.initial_capacity);
        self.accumulator.clear();
        self.state = WriterState::Empty;
    }

    /// Get the number of bits written, committed and pending
    /// (counterpart of shine_get_bits_count)
    pub fn bits_written(&self) -> usize {
        self.buffer.len() * 8 + self.accumulator.filled_bits() as usize
    }

    /// Bits written but not yet committed to the buffer
    pub fn pending_bits(&self) -> u32 {
        self.accumulator.filled_bits()
    }

    /// Bytes committed so far
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }
}

impl Default for BitstreamWriter {
    fn default() -> Self {
        Self::new()
    }
}
