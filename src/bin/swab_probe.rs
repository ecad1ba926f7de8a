//! Print how SWAB32 and the bitstream writer lay out 0x12345678 on this host

use std::process;

use shine_bitstream::endian::PROBE_PATTERN;
use shine_bitstream::{
    host_endianness, swab32, word_to_wire, BitstreamWriter, Result, SpillMode, WriterConfig,
};

fn write_pattern(spill: SpillMode) -> Result<Vec<u8>> {
    let mut writer = BitstreamWriter::with_config(WriterConfig::new().with_spill(spill))?;
    for byte in PROBE_PATTERN.to_be_bytes() {
        writer.write_bits(u32::from(byte), 8)?;
    }
    Ok(writer.finish()?)
}

fn run() -> Result<()> {
    let value = PROBE_PATTERN;
    let swapped = swab32(value);

    println!("Host:     {:?} endian", host_endianness());
    println!("Original: 0x{:08X}", value);
    println!("SWAB32:   0x{:08X}", swapped);
    println!("Original bytes: {:02X?}", value.to_ne_bytes());
    println!("SWAB32 bytes:   {:02X?}", swapped.to_ne_bytes());
    println!("Wire bytes:     {:02X?}", word_to_wire(value));

    println!("Writer (bytewise): {:02X?}", write_pattern(SpillMode::Bytewise)?);
    println!("Writer (word32):   {:02X?}", write_pattern(SpillMode::Word32)?);

    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Error)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
