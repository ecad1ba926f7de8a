//! Writer state snapshots for debugging
//!
//! This module captures the observable state of a writer so it can be
//! compared across hosts and spill modes, or saved to JSON next to an
//! encoded file.
//!
//! This module is only available when the "diagnostics" feature is enabled.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::bitstream::{BitstreamWriter, WriterState};
use crate::config::{PadBit, SpillMode};
use crate::endian::{host_endianness, Endianness};

/// Observable writer state at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterSnapshot {
    /// Host byte order reported by the probe
    pub host: Endianness,

    /// Writer lifecycle state
    pub state: WriterState,

    /// Total bits written, committed and pending
    pub bits_written: usize,

    /// Bytes committed to the output buffer
    pub committed_bytes: Vec<u8>,

    /// Bits still held in the accumulator
    pub pending_bits: u32,

    /// Spill strategy in use
    pub spill: SpillMode,

    /// Configured pad bit
    pub pad_bit: PadBit,

    /// Capture time (RFC 3339)
    pub captured_at: String,
}

impl WriterSnapshot {
    /// Render the snapshot as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the snapshot to `path` as JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = self.to_json()?;
        fs::write(path.as_ref(), json)?;
        log::info!("Writer snapshot saved to: {}", path.as_ref().display());
        Ok(())
    }
}

impl BitstreamWriter {
    /// Capture the current writer state
    pub fn snapshot(&self) -> WriterSnapshot {
        WriterSnapshot {
            host: host_endianness(),
            state: self.state(),
            bits_written: self.bits_written(),
            committed_bytes: self.data().to_vec(),
            pending_bits: self.pending_bits(),
            spill: self.config().spill,
            pad_bit: self.config().pad_bit,
            captured_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
