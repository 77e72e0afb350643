//! QR data encoding modules
//!
//! This module contains the pipeline that turns input bytes into padded
//! data codewords:
//! - Character classification and mode segmentation
//! - Capacity tables and version selection
//! - Per-mode bitstream packing (numeric, alphanumeric, byte, kanji)
//! - Terminator, padding, and byte serialization

/// Bitstream assembly (pair stream, padding, serialization)
pub mod bitstream;
/// Byte-class predicates and the alphanumeric lookup table
pub mod classifier;
/// Per-mode packing routines
pub mod modes;
/// The encoding pipeline orchestrator
pub mod qr_encoder;
/// Greedy mode segmentation
pub mod segmenter;
/// QR specification tables (codeword capacities, length-indicator widths)
pub mod tables;
/// Capacity-driven version selection
pub mod version;
