use crate::encoder::bitstream::BitStream;
use crate::encoder::tables;
use crate::models::Mode;

/// Byte mode encoder (mode 0100) for 8-bit data
pub struct ByteEncoder;

impl ByteEncoder {
    /// Append mode indicator, length field, and the bytes as-is
    pub fn encode(stream: &mut BitStream, data: &[u8], version: u8) {
        stream.push(4, Mode::Byte.indicator());
        stream.push(
            tables::char_count_bits(Mode::Byte, version),
            data.len() as u32,
        );

        for &byte in data {
            stream.push(8, u32::from(byte));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_passthrough() {
        let mut stream = BitStream::new();
        ByteEncoder::encode(&mut stream, b"HI", 1);
        // mode 0100, count 00000010, then 0x48 0x49
        assert_eq!(stream.bit_len(), 4 + 8 + 16);
        stream.push(4, 0);
        stream.pad_to_capacity(4);
        assert_eq!(stream.to_bytes(), vec![0x40, 0x24, 0x84, 0x90]);
    }

    #[test]
    fn test_length_field_widens_at_tier_two() {
        let mut stream = BitStream::new();
        ByteEncoder::encode(&mut stream, &[0u8; 300], 10);
        assert_eq!(stream.bit_len(), 4 + 16 + 300 * 8);
    }
}
