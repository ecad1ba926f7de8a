//! # shine-bitstream
//!
//! The bit packing core of a shine-style MP3 Layer III encoder. Frame
//! headers, side information and Huffman codes are written as
//! variable-width fields and come out as big-endian bytes, whatever the
//! byte order of the host CPU.
//!
//! ```
//! use shine_bitstream::BitstreamWriter;
//!
//! let mut writer = BitstreamWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! writer.write_bits(0b001, 3).unwrap();
//! assert_eq!(writer.finish().unwrap(), vec![0xB9]);
//! ```

pub mod accumulator;
pub mod bitstream;
pub mod config;
pub mod endian;
pub mod error;
pub mod reader;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

#[cfg(test)]
mod tests;

pub use accumulator::{BitAccumulator, MAX_FIELD_WIDTH, REGISTER_BITS};
pub use bitstream::{BitstreamWriter, WriterState};
pub use config::{PadBit, SpillMode, WriterConfig};
pub use endian::{host_endianness, host_is_little_endian, swab32, word_to_wire, Endianness};
pub use error::{BitstreamError, BitstreamResult, ConfigError, ConfigResult, Error, Result};
pub use reader::BitstreamReader;

#[cfg(feature = "diagnostics")]
pub use diagnostics::WriterSnapshot;
