//! Bitstream integration tests
//!
//! Exercises the public API end to end:
//! - Long pseudo-random field streams against a reference digest
//! - Bytewise and word spill equivalence
//! - Writer reuse across frames
//! - Host probe consistency across threads

use sha2::{Digest, Sha256};
use shine_bitstream::{
    host_is_little_endian, BitstreamError, BitstreamReader, BitstreamWriter, PadBit, SpillMode,
    WriterConfig, WriterState,
};
use std::thread;

/// SHA256 of `field_sequence(10_000)` packed MSB-first with zero padding
const REFERENCE_DIGEST: &str = "93de8832b311a1918fcbe79b8115383244ece03738fd4542c136af0c09341edd";
const REFERENCE_BITS: usize = 165_637;
const REFERENCE_BYTES: usize = 20_705;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic (value, width) pairs from a 32-bit LCG
fn field_sequence(count: usize) -> Vec<(u32, u32)> {
    let mut state: u32 = 0x1234_5678;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        state
    };

    (0..count)
        .map(|_| {
            let width = (next() >> 27) + 1;
            let raw = next();
            let value = if width == 32 { raw } else { raw & ((1 << width) - 1) };
            (value, width)
        })
        .collect()
}

fn encode(fields: &[(u32, u32)], spill: SpillMode) -> Vec<u8> {
    let config = WriterConfig::new().with_spill(spill);
    let mut writer = BitstreamWriter::with_config(config).expect("valid config");
    for &(value, width) in fields {
        writer.write_bits(value, width).expect("field fits");
    }
    assert_eq!(writer.bits_written(), REFERENCE_BITS);
    writer.finish().expect("first finish")
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[test]
fn test_reference_stream_digest() {
    init_logger();
    let fields = field_sequence(10_000);
    assert_eq!(fields[..3], [(24170, 15), (12, 5), (29502, 17)]);

    for spill in [SpillMode::Bytewise, SpillMode::Word32] {
        let data = encode(&fields, spill);
        assert_eq!(data.len(), REFERENCE_BYTES, "{:?}", spill);
        assert_eq!(sha256_hex(&data), REFERENCE_DIGEST, "{:?}", spill);
    }
}

#[test]
fn test_reference_stream_reads_back() {
    let fields = field_sequence(10_000);
    let data = encode(&fields, SpillMode::Word32);

    let mut reader = BitstreamReader::new(&data);
    for (index, &(value, width)) in fields.iter().enumerate() {
        assert_eq!(reader.read_bits(width).unwrap(), value, "field {}", index);
    }
    assert!(reader.bits_remaining() < 8);
}

#[test]
fn test_writer_reuse_across_frames() {
    init_logger();
    let mut writer = BitstreamWriter::new();
    let mut frames = Vec::new();

    for frame in 0u32..4 {
        writer.write_bits(0x7FF, 11).unwrap();
        writer.write_bits(frame, 5).unwrap();
        writer.write_flag(frame % 2 == 1).unwrap();
        frames.push(writer.finish().unwrap());
        assert_eq!(writer.state(), WriterState::Finished);
        assert_eq!(writer.write_bits(1, 1), Err(BitstreamError::WriterFinalized));
        writer.reset();
    }

    assert_eq!(frames[0], vec![0xFF, 0xE0, 0x00]);
    assert_eq!(frames[1], vec![0xFF, 0xE1, 0x80]);
    assert_eq!(frames[3], vec![0xFF, 0xE3, 0x80]);
}

#[test]
fn test_pad_bit_applies_only_to_tail() {
    let config = WriterConfig::new().with_pad_bit(PadBit::One);
    let mut writer = BitstreamWriter::with_config(config).unwrap();
    writer.write_bits(0, 16).unwrap();
    writer.write_bits(0, 4).unwrap();

    assert_eq!(writer.finish().unwrap(), vec![0x00, 0x00, 0x0F]);
}

#[test]
fn test_probe_consistent_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let mut writer = BitstreamWriter::with_config(
                    WriterConfig::new().with_spill(SpillMode::Word32),
                )
                .unwrap();
                writer.write_bits(0x1234_5678, 32).unwrap();
                (host_is_little_endian(), writer.finish().unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (little, data) = handle.join().unwrap();
        assert_eq!(little, cfg!(target_endian = "little"));
        assert_eq!(data, vec![0x12, 0x34, 0x56, 0x78]);
    }
}
