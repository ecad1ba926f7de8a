//! Host byte order detection
//!
//! shine writes its 32-bit bit cache to memory through the `SWAB32` macro,
//! which only produces big-endian output when the host is little-endian.
//! This module makes that host fact explicit: it is probed once, cached for
//! the lifetime of the process, and consulted only where a whole
//! accumulator word is reinterpreted as raw bytes.

use lazy_static::lazy_static;

/// Known multi-byte pattern used by the probe
pub const PROBE_PATTERN: u32 = 0x1234_5678;

/// Byte order of the host CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "diagnostics", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    /// Least significant byte stored first
    Little,
    /// Most significant byte stored first
    Big,
}

lazy_static! {
    /// Host byte order, probed on first access and never changed afterwards
    static ref HOST_IS_LITTLE_ENDIAN: bool = probe_host();
}

fn probe_host() -> bool {
    let pattern = PROBE_PATTERN;
    let first_byte = pattern.to_ne_bytes()[0];
    let little = first_byte == (PROBE_PATTERN & 0xFF) as u8;
    log::debug!(
        "Endian probe: first byte of 0x{:08X} in memory is 0x{:02X} ({} endian host)",
        PROBE_PATTERN,
        first_byte,
        if little { "little" } else { "big" }
    );
    little
}

/// Returns true when the host stores the least significant byte first
pub fn host_is_little_endian() -> bool {
    *HOST_IS_LITTLE_ENDIAN
}

/// Typed view of [`host_is_little_endian`]
pub fn host_endianness() -> Endianness {
    if host_is_little_endian() {
        Endianness::Little
    } else {
        Endianness::Big
    }
}

/// Unconditional 32-bit byte swap (matches shine's SWAB32)
pub fn swab32(x: u32) -> u32 {
    (x >> 24) | ((x >> 8) & 0xff00) | ((x & 0xff00) << 8) | (x << 24)
}

/// Convert an MSB-first word into its wire bytes.
///
/// The word's native memory is read as a raw block, so on a little-endian
/// host it is swapped first. The result is always the big-endian encoding
/// of `word`.
pub fn word_to_wire(word: u32) -> [u8; 4] {
    let stored = if host_is_little_endian() {
        swab32(word)
    } else {
        word
    };
    stored.to_ne_bytes()
}
