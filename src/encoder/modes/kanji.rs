use crate::encoder::bitstream::BitStream;
use crate::encoder::tables;
use crate::error::EncodeError;
use crate::models::Mode;

/// Kanji mode encoder (mode 1000) for Shift-JIS double-byte glyphs
///
/// Each big-endian word is rebased into the 13-bit QR kanji code space:
/// words up to 0x9FFC subtract 0x8140, the high block subtracts 0xC140,
/// then the offset packs as high * 192 + low.
pub struct KanjiEncoder;

impl KanjiEncoder {
    /// Append mode indicator, glyph count, and the 13-bit glyph codes.
    ///
    /// The length field carries the glyph count (half the byte length);
    /// an odd byte length cannot be double-byte text and is rejected.
    pub fn encode(stream: &mut BitStream, data: &[u8], version: u8) -> Result<(), EncodeError> {
        if data.len() % 2 != 0 {
            return Err(EncodeError::MalformedSegment { length: data.len() });
        }

        stream.push(4, Mode::Kanji.indicator());
        stream.push(
            tables::char_count_bits(Mode::Kanji, version),
            (data.len() / 2) as u32,
        );

        for pair in data.chunks_exact(2) {
            let word = u16::from_be_bytes([pair[0], pair[1]]);
            let offset = if word <= 0x9FFC {
                word.wrapping_sub(0x8140)
            } else {
                word.wrapping_sub(0xC140)
            };
            let value = u32::from(offset >> 8) * 192 + u32::from(offset & 0xFF);
            stream.push(13, value);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_codes() {
        // 0x935F -> 3487, 0xE4AA -> 6826 (ISO annex examples)
        let mut stream = BitStream::new();
        KanjiEncoder::encode(&mut stream, &[0x93, 0x5F, 0xE4, 0xAA], 1).unwrap();
        assert_eq!(stream.bit_len(), 4 + 8 + 13 + 13);
        stream.push(2, 0);
        stream.pad_to_capacity(5);
        assert_eq!(stream.to_bytes(), vec![0x80, 0x26, 0xCF, 0xEA, 0xA8]);
    }

    #[test]
    fn test_odd_length_rejected() {
        let mut stream = BitStream::new();
        let err = KanjiEncoder::encode(&mut stream, &[0x93, 0x5F, 0xE4], 1).unwrap_err();
        assert_eq!(err, EncodeError::MalformedSegment { length: 3 });
    }
}
