//! Configuration for the bitstream writer
//!
//! This module provides the writer configuration and its validation:
//! the bit used to pad the final byte, the widest field a caller may
//! write, and the strategy used to move completed bits into the output
//! buffer.

use crate::accumulator::MAX_FIELD_WIDTH;
use crate::error::{ConfigError, ConfigResult};

/// Default output buffer capacity (roughly one 320 kbps MPEG-1 frame)
pub const DEFAULT_CAPACITY: usize = 1024;

/// Main configuration structure for the bitstream writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Bit used to complete the final partial byte
    pub pad_bit: PadBit,
    /// Widest field accepted by `write_bits`
    pub max_field_width: u32,
    /// How completed bits leave the accumulator
    pub spill: SpillMode,
    /// Initial output buffer capacity in bytes
    pub initial_capacity: usize,
}

/// Value of padding bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize, serde::Deserialize))]
pub enum PadBit {
    /// Pad with zeros (common bitstream convention)
    #[default]
    Zero,
    /// Pad with ones
    One,
}

/// Spill strategy for completed bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize, serde::Deserialize))]
pub enum SpillMode {
    /// Peel completed bytes off one at a time
    #[default]
    Bytewise,
    /// Spill whole 32-bit words through the host byte-order swap, as shine does
    Word32,
}

impl PadBit {
    /// The pad bit as 0 or 1
    pub fn as_bit(self) -> u8 {
        match self {
            PadBit::Zero => 0,
            PadBit::One => 1,
        }
    }
}

impl From<bool> for PadBit {
    fn from(bit: bool) -> Self {
        if bit {
            PadBit::One
        } else {
            PadBit::Zero
        }
    }
}

impl TryFrom<u8> for PadBit {
    type Error = ConfigError;

    fn try_from(bit: u8) -> ConfigResult<Self> {
        match bit {
            0 => Ok(PadBit::Zero),
            1 => Ok(PadBit::One),
            other => Err(ConfigError::InvalidPadBit(other)),
        }
    }
}

impl WriterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pad_bit(mut self, pad_bit: PadBit) -> Self {
        self.pad_bit = pad_bit;
        self
    }

    pub fn with_max_field_width(mut self, width: u32) -> Self {
        self.max_field_width = width;
        self
    }

    pub fn with_spill(mut self, spill: SpillMode) -> Self {
        self.spill = spill;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_field_width == 0 || self.max_field_width > MAX_FIELD_WIDTH {
            return Err(ConfigError::InvalidMaxFieldWidth(self.max_field_width));
        }
        Ok(())
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            pad_bit: PadBit::Zero,
            max_field_width: MAX_FIELD_WIDTH,
            spill: SpillMode::Bytewise,
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}
