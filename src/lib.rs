//! qr_encode - QR code data encoding library
//!
//! A pure Rust QR data encoder: turns an input byte sequence into the
//! padded codeword stream a QR symbol's data region carries. It picks
//! encoding modes per run of input, selects the smallest symbol version
//! that fits at the configured error-correction level, packs each segment
//! into the bitstream, and pads to capacity.
//!
//! Matrix construction, Reed-Solomon error correction, masking, and
//! rendering are downstream consumers of the [`EncodedData`] package this
//! crate produces.
//!
//! # Example
//! ```
//! use qr_encode::{ECLevel, encode};
//!
//! let package = encode("HELLO WORLD", ECLevel::Q).unwrap();
//! assert_eq!(package.version.number(), 1);
//! assert_eq!(package.bytes.len(), package.data_codewords);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding pipeline modules (classifier, segmentation, version, packing)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Version, ECLevel, Segment, EncodedData)
pub mod models;

pub use encoder::qr_encoder::QrEncoder;
pub use error::EncodeError;
pub use models::{ECLevel, EncodedData, Mode, ModeHint, Segment, Version};

/// Encode text with automatic mode segmentation
///
/// # Arguments
/// * `text` - The string to encode
/// * `level` - Error-correction level the symbol is sized for
///
/// # Returns
/// The data codeword package for the downstream matrix builder
pub fn encode(text: &str, level: ECLevel) -> Result<EncodedData, EncodeError> {
    QrEncoder::new(level).encode(text.as_bytes())
}

/// Encode raw bytes with a mode hint
///
/// `ModeHint::Auto` segments the input; `ModeHint::Kanji` segments with
/// double-byte detection; the remaining hints force a single segment.
pub fn encode_with_hint(
    data: &[u8],
    hint: ModeHint,
    level: ECLevel,
) -> Result<EncodedData, EncodeError> {
    QrEncoder::new(level).encode_with_hint(data, hint)
}
