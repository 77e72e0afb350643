//! Per-mode bitstream packing routines
//!
//! One encoder per QR data mode:
//! - Numeric: efficient packing for digits (0-9)
//! - Alphanumeric: letters, numbers, and symbols
//! - Byte: 8-bit data (UTF-8, binary, etc.)
//! - Kanji: Shift-JIS double-byte glyphs

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;
