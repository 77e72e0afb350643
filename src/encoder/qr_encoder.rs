//! The encoding pipeline orchestrator.

use crate::encoder::bitstream::BitStream;
use crate::encoder::modes::{
    alphanumeric::AlphanumericEncoder, byte::ByteEncoder, kanji::KanjiEncoder,
    numeric::NumericEncoder,
};
use crate::encoder::segmenter::SegmentScanner;
use crate::encoder::version::VersionEstimator;
use crate::error::EncodeError;
use crate::models::{ECLevel, EncodedData, Mode, ModeHint, Segment};

/// Encodes byte sequences into padded QR data codewords
///
/// Holds only the error-correction level, fixed at construction. Every
/// encode call keeps its scratch state (segments, bitstream, cursor) on
/// the stack, so one encoder can serve concurrent calls.
pub struct QrEncoder {
    level: ECLevel,
}

impl QrEncoder {
    /// Create an encoder for the given error-correction level
    pub fn new(level: ECLevel) -> Self {
        Self { level }
    }

    /// The level this encoder sizes symbols for
    pub fn level(&self) -> ECLevel {
        self.level
    }

    /// Encode with automatic mode segmentation
    pub fn encode(&self, data: &[u8]) -> Result<EncodedData, EncodeError> {
        self.encode_with_hint(data, ModeHint::Auto)
    }

    /// Encode with a mode hint.
    ///
    /// `Numeric`/`Alphanumeric`/`Byte` skip segmentation and cover the
    /// whole input with one segment; `Auto` and `Kanji` run the scanner
    /// (the latter with double-byte detection enabled).
    pub fn encode_with_hint(
        &self,
        data: &[u8],
        hint: ModeHint,
    ) -> Result<EncodedData, EncodeError> {
        let segments = match hint {
            ModeHint::Auto => SegmentScanner::scan(data, false),
            ModeHint::Kanji => SegmentScanner::scan(data, true),
            ModeHint::Numeric => vec![Segment::new(Mode::Numeric, data)],
            ModeHint::Alphanumeric => vec![Segment::new(Mode::Alphanumeric, data)],
            ModeHint::Byte => vec![Segment::new(Mode::Byte, data)],
        };
        self.encode_segments(&segments)
    }

    /// Encode caller-supplied segments.
    ///
    /// This is the forcing surface: segment modes are taken as given, so
    /// a kanji segment with an odd byte length fails with
    /// [`EncodeError::MalformedSegment`].
    pub fn encode_segments(&self, segments: &[Segment]) -> Result<EncodedData, EncodeError> {
        let fit = VersionEstimator::select(segments, self.level)?;
        let version = fit.version.number();

        let mut stream = BitStream::new();
        for segment in segments {
            match segment.mode {
                Mode::Numeric => NumericEncoder::encode(&mut stream, &segment.data, version),
                Mode::Alphanumeric => {
                    AlphanumericEncoder::encode(&mut stream, &segment.data, version)
                }
                Mode::Byte => ByteEncoder::encode(&mut stream, &segment.data, version),
                Mode::Kanji => KanjiEncoder::encode(&mut stream, &segment.data, version)?,
            }
        }

        let bit_count = stream.bit_len();
        stream.pad_to_capacity(fit.data_codewords);

        Ok(EncodedData {
            version: fit.version,
            data_codewords: fit.data_codewords,
            ecc_codewords: fit.ecc_codewords,
            width: fit.version.width(),
            level: self.level,
            bit_count,
            bytes: stream.to_bytes(),
        })
    }
}
