use crate::encoder::bitstream::BitStream;
use crate::encoder::classifier::alphanumeric_index;
use crate::encoder::tables;
use crate::models::Mode;

/// Alphanumeric mode encoder (mode 0010)
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Append mode indicator, length field, and packed character pairs.
    ///
    /// Bytes outside the 45-character set clamp to index 0; they can only
    /// reach this encoder through a forced mode hint.
    pub fn encode(stream: &mut BitStream, data: &[u8], version: u8) {
        stream.push(4, Mode::Alphanumeric.indicator());
        stream.push(
            tables::char_count_bits(Mode::Alphanumeric, version),
            data.len() as u32,
        );

        for pair in data.chunks(2) {
            if let [first, second] = pair {
                stream.push(11, Self::index(*first) * 45 + Self::index(*second));
            } else {
                stream.push(6, Self::index(pair[0]));
            }
        }
    }

    fn index(byte: u8) -> u32 {
        alphanumeric_index(byte).max(0) as u32
    }
}
