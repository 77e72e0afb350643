//! Error types for encoding operations.

use crate::models::ECLevel;
use thiserror::Error;

/// The error type for a failed encode call.
///
/// Both variants are fatal to the single call that produced them; the
/// encoder instance stays usable. Bytes outside the alphanumeric table's
/// domain are not an error anywhere — they classify as byte-mode data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A kanji segment must hold an even number of bytes (double-byte
    /// glyphs are two bytes each). Only reachable by forcing kanji mode
    /// onto data that is not valid double-byte text.
    #[error("kanji segment length {length} is odd")]
    MalformedSegment {
        /// Byte length of the offending segment.
        length: usize,
    },

    /// No symbol version holds the encoded bit length at the requested
    /// error-correction level.
    #[error(
        "data needs {required} codewords but version 40 at level {level:?} holds {available}"
    )]
    CapacityExceeded {
        /// Codewords the encoded data would occupy.
        required: usize,
        /// Data codeword capacity of version 40 at `level`.
        available: usize,
        /// The level the encoder was configured with.
        level: ECLevel,
    },
}
