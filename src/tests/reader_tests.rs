//! Unit tests for the bitstream reader

use crate::error::BitstreamError;
use crate::reader::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sub_byte_fields() {
        let data = [0xB9];
        let mut reader = BitstreamReader::new(&data);

        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(2).unwrap(), 0b11);
        assert_eq!(reader.read_bits(3).unwrap(), 0b001);
        assert_eq!(reader.bits_remaining(), 0);
    }

    #[test]
    fn test_read_across_bytes() {
        let data = [0x12, 0x34, 0x56, 0x78];
        let mut reader = BitstreamReader::new(&data);
        assert_eq!(reader.read_bits(32).unwrap(), 0x12345678);

        let data = [0xAB, 0xCD];
        let mut reader = BitstreamReader::new(&data);
        assert_eq!(reader.read_bits(4).unwrap(), 0xA);
        assert_eq!(reader.read_bits(12).unwrap(), 0xBCD);
    }

    #[test]
    fn test_read_past_end() {
        let data = [0xFF];
        let mut reader = BitstreamReader::new(&data);
        reader.read_bits(5).unwrap();

        assert_eq!(
            reader.read_bits(4),
            Err(BitstreamError::UnexpectedEnd { requested: 4, available: 3 })
        );
        assert_eq!(reader.position(), 5, "Failed reads must not move the position");
        assert_eq!(reader.read_bits(3).unwrap(), 0b111);
    }

    #[test]
    fn test_read_invalid_width() {
        let data = [0u8; 8];
        let mut reader = BitstreamReader::new(&data);

        assert_eq!(
            reader.read_bits(0),
            Err(BitstreamError::InvalidWidth { width: 0, max: 32 })
        );
        assert_eq!(
            reader.read_bits(33),
            Err(BitstreamError::InvalidWidth { width: 33, max: 32 })
        );
    }

    #[test]
    fn test_flags_and_alignment() {
        let data = [0b1000_0000, 0x42];
        let mut reader = BitstreamReader::new(&data);

        assert!(reader.read_flag().unwrap());
        assert!(!reader.read_flag().unwrap());
        reader.skip_to_byte_boundary();
        assert_eq!(reader.position(), 8);

        reader.skip_to_byte_boundary();
        assert_eq!(reader.position(), 8, "Aligned position should not move");
        assert_eq!(reader.read_bits(8).unwrap(), 0x42);

        reader.skip_to_byte_boundary();
        assert_eq!(reader.bits_remaining(), 0);
    }
}
