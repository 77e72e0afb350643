//! Capacity-driven symbol version selection.

use crate::encoder::tables;
use crate::error::EncodeError;
use crate::models::{ECLevel, Mode, Segment, Version};

/// A version that fits the estimated bit length
#[derive(Debug)]
pub struct VersionFit {
    /// Selected symbol version
    pub version: Version,
    /// Data codeword capacity at the configured level
    pub data_codewords: usize,
    /// Error-correction codeword count at the configured level
    pub ecc_codewords: usize,
    /// Estimated bit length the fit was computed for
    pub bit_count: usize,
}

/// Finds the minimal version whose data capacity covers the segments
pub struct VersionEstimator;

impl VersionEstimator {
    /// Passes of the fixed-point search. The estimate only grows when the
    /// candidate crosses a length-indicator tier boundary, of which there
    /// are two, so four passes always converge.
    const MAX_PASSES: usize = 4;

    /// Select the smallest fitting version for `segments` at `level`.
    ///
    /// Length-indicator widths depend on the version tier, and the total
    /// bit length depends on those widths, so the search iterates: start
    /// at version 1, estimate, adopt the found version, re-estimate with
    /// its tier, and stop once the found version no longer grows.
    pub fn select(segments: &[Segment], level: ECLevel) -> Result<VersionFit, EncodeError> {
        let mut candidate = Version::MIN.number();
        let mut passes = Self::MAX_PASSES;
        loop {
            let bits = Self::estimated_bit_length(segments, candidate);
            let fit = Self::minimum_version(bits, level).ok_or_else(|| {
                EncodeError::CapacityExceeded {
                    required: bits.div_ceil(8),
                    available: tables::symbol_capacity(Version::MAX.number(), level)
                        .map(|cap| cap.data_codewords)
                        .unwrap_or(0),
                    level,
                }
            })?;
            passes -= 1;
            if fit.version.number() <= candidate || passes == 0 {
                return Ok(fit);
            }
            candidate = fit.version.number();
        }
    }

    /// Total bit length of the segments when encoded against `version`.
    ///
    /// Payload bits use the per-mode packing arithmetic; the numeric form
    /// is a closed-form upper bound that runs one bit high when the digit
    /// count is a multiple of three, which only adds slack to version
    /// selection. Header bits charge one 4-bit mode indicator plus one
    /// length field per `2^width` elements, so a run too long for a
    /// single length field is costed as several headers.
    pub fn estimated_bit_length(segments: &[Segment], version: u8) -> usize {
        let mut bits = 0;
        for segment in segments {
            let size = segment.len();
            bits += match segment.mode {
                Mode::Numeric => size * 3 + 1 + size / 3,
                Mode::Alphanumeric => (size / 2) * 11 + (size % 2) * 6,
                Mode::Byte => size * 8,
                Mode::Kanji => (size / 2) * 13,
            };
            let width = tables::char_count_bits(segment.mode, version);
            let headers = size.div_ceil(1 << width).max(1);
            bits += headers * (4 + width);
        }
        bits
    }

    /// First version (ascending) whose data capacity holds `bits`
    fn minimum_version(bits: usize, level: ECLevel) -> Option<VersionFit> {
        let required = bits.div_ceil(8);
        for number in Version::MIN.number()..=Version::MAX.number() {
            let cap = tables::symbol_capacity(number, level)?;
            if cap.data_codewords >= required {
                return Some(VersionFit {
                    version: Version(number),
                    data_codewords: cap.data_codewords,
                    ecc_codewords: cap.ecc_codewords,
                    bit_count: bits,
                });
            }
        }
        None
    }
}
