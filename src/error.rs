//! Error types for the bitstream writer
//!
//! This module defines all error types used throughout the crate,
//! separated by concern: bit packing errors raised while writing or
//! reading fields, and configuration errors raised while building a writer.

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Bit packing errors
    #[error("Bitstream error: {0}")]
    Bitstream(#[from] BitstreamError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while packing or unpacking bit fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitstreamError {
    /// Field width is zero or larger than the supported maximum
    #[error("Invalid field width {width}: must be between 1 and {max} bits")]
    InvalidWidth { width: u32, max: u32 },

    /// Value has bits set above the requested width
    #[error("Value 0x{value:X} does not fit in {width} bits")]
    ValueOverflow { value: u32, width: u32 },

    /// Operation attempted after the writer was finished
    #[error("Writer has already been finished")]
    WriterFinalized,

    /// Accumulator register cannot hold the requested field
    #[error("Accumulator full: {pending} bits pending, cannot add {width} more")]
    AccumulatorFull { pending: u32, width: u32 },

    /// Reader ran past the end of its data
    #[error("Unexpected end of bitstream: requested {requested} bits, only {available} available")]
    UnexpectedEnd { requested: u32, available: usize },
}

/// Writer configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Pad bit is neither 0 nor 1
    #[error("Invalid pad bit {0}: must be 0 or 1")]
    InvalidPadBit(u8),

    /// Maximum field width outside 1..=32
    #[error("Invalid maximum field width {0}: must be between 1 and 32")]
    InvalidMaxFieldWidth(u32),
}

/// Specialized result types for different modules
pub type Result<T> = std::result::Result<T, Error>;
pub type BitstreamResult<T> = std::result::Result<T, BitstreamError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
