//! Integration tests for the QR data encoding pipeline
//!
//! These tests pin the encoder's output against codeword sequences from
//! the published standard's worked examples and against hand-computed
//! packages. They protect the segmentation thresholds, the version
//! fixed-point search, and the terminator/padding arithmetic.

use qr_encode::encoder::segmenter::SegmentScanner;
use qr_encode::{ECLevel, EncodeError, Mode, ModeHint, QrEncoder, Segment, encode,
    encode_with_hint};

/// The standard's numeric example: "01234567" at level M
#[test]
fn test_numeric_standard_vector() {
    let package = encode("01234567", ECLevel::M).unwrap();
    assert_eq!(package.version.number(), 1);
    assert_eq!(package.width, 21);
    assert_eq!(package.level, ECLevel::M);
    assert_eq!(package.data_codewords, 16);
    assert_eq!(package.ecc_codewords, 10);
    assert_eq!(package.bit_count, 41);
    assert_eq!(
        package.bytes,
        vec![
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11
        ]
    );
}

/// The classic alphanumeric example: "HELLO WORLD" at level Q
#[test]
fn test_alphanumeric_standard_vector() {
    let package = encode("HELLO WORLD", ECLevel::Q).unwrap();
    assert_eq!(package.version.number(), 1);
    assert_eq!(package.data_codewords, 13);
    assert_eq!(package.bit_count, 74);
    assert_eq!(
        package.bytes,
        vec![0x20, 0x5B, 0x0B, 0x78, 0xD1, 0x72, 0xDC, 0x4D, 0x43, 0x40, 0xEC, 0x11, 0xEC]
    );
}

#[test]
fn test_alphanumeric_ac42_package() {
    let package = encode("AC-42", ECLevel::L).unwrap();
    assert_eq!(package.version.number(), 1);
    assert_eq!(package.bit_count, 41);
    assert_eq!(
        package.bytes,
        vec![
            0x20, 0x29, 0xCE, 0xE7, 0x21, 0x00, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11, 0xEC, 0x11, 0xEC
        ]
    );
}

/// Kanji detection is hint-gated; the ISO annex glyphs pack to 13 bits each
#[test]
fn test_kanji_hint_vector() {
    let data = [0x93, 0x5F, 0xE4, 0xAA];
    let package = encode_with_hint(&data, ModeHint::Kanji, ECLevel::L).unwrap();
    assert_eq!(package.version.number(), 1);
    assert_eq!(package.bit_count, 38);
    assert_eq!(
        package.bytes,
        vec![
            0x80, 0x26, 0xCF, 0xEA, 0xA8, 0x00, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11, 0xEC, 0x11, 0xEC
        ]
    );

    // without the hint the same bytes land in byte mode
    let package = encode_with_hint(&data, ModeHint::Auto, ECLevel::L).unwrap();
    assert_eq!(package.bit_count, 4 + 8 + 32);
}

/// A mixed URL exercises byte, numeric, and alphanumeric segments at once
#[test]
fn test_mixed_url_package() {
    let package = encode("https://example.com/?id=1234567890&x=ABCDEF", ECLevel::M).unwrap();
    assert_eq!(package.version.number(), 3);
    assert_eq!(package.data_codewords, 44);
    assert_eq!(package.bit_count, 334);
    assert_eq!(
        package.bytes,
        vec![
            0x41, 0x86, 0x87, 0x47, 0x47, 0x07, 0x33, 0xA2, 0xF2, 0xF6, 0x57, 0x86, 0x16, 0xD7,
            0x06, 0xC6, 0x52, 0xE6, 0x36, 0xF6, 0xD2, 0xF3, 0xF6, 0x96, 0x43, 0xD1, 0x02, 0x87,
            0xB7, 0x23, 0x15, 0x04, 0x03, 0x26, 0x78, 0x3D, 0x20, 0x31, 0xCD, 0x45, 0x2A, 0x14,
            0x00, 0xEC
        ]
    );
}

/// Segments cover the input exactly once, in order, with no gaps
#[test]
fn test_segmentation_coverage() {
    let inputs: [&[u8]; 4] = [
        b"",
        b"MIXED123with456bytes\x80\x81 AND:SYMBOLS/123456",
        b"0123456789",
        b"\x80\x81\x82\x83",
    ];
    for input in inputs {
        let segments = SegmentScanner::scan(input, false);
        let total: usize = segments.iter().map(|s| s.len()).sum();
        assert_eq!(total, input.len());
        assert!(segments.iter().all(|s| !s.is_empty()));
    }
}

/// The absorption thresholds: 3 digits stay in a byte run, 4 split it;
/// 5 alphanumerics stay, 6 split
#[test]
fn test_absorption_thresholds() {
    let modes = |data: &[u8]| -> Vec<Mode> {
        SegmentScanner::scan(data, false)
            .iter()
            .map(|s| s.mode)
            .collect()
    };
    assert_eq!(modes(b"\x80\x81123\x82"), vec![Mode::Byte]);
    assert_eq!(
        modes(b"\x80\x811234\x82"),
        vec![Mode::Byte, Mode::Numeric, Mode::Byte]
    );
    assert_eq!(modes(b"\x80\x81ABCDE\x82"), vec![Mode::Byte]);
    assert_eq!(
        modes(b"\x80\x81ABCDEF\x82"),
        vec![Mode::Byte, Mode::Alphanumeric, Mode::Byte]
    );
}

/// Raising the level never lowers the chosen version
#[test]
fn test_version_monotonic_in_level() {
    let data: Vec<u8> = (0..200).map(|i| 0x80 + (i % 13) as u8).collect();
    let mut versions = Vec::new();
    for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
        let package = QrEncoder::new(level).encode(&data).unwrap();
        versions.push(package.version.number());
    }
    assert_eq!(versions, vec![9, 10, 12, 15]);
}

/// 1268 bytes still fit version 40 at H; beyond the ceiling the encoder
/// reports the capacity instead of producing a package
#[test]
fn test_capacity_boundary_at_level_h() {
    let encoder = QrEncoder::new(ECLevel::H);

    let package = encoder.encode(&vec![0x80u8; 1268]).unwrap();
    assert_eq!(package.version.number(), 40);
    assert_eq!(package.bytes.len(), 1276);

    let err = encoder.encode(&vec![0x80u8; 1300]).unwrap_err();
    assert_eq!(
        err,
        EncodeError::CapacityExceeded {
            required: 1309,
            available: 1276,
            level: ECLevel::H,
        }
    );
}

#[test]
fn test_capacity_exceeded_at_level_l() {
    let err = QrEncoder::new(ECLevel::L)
        .encode(&vec![0x80u8; 3000])
        .unwrap_err();
    assert!(matches!(
        err,
        EncodeError::CapacityExceeded {
            available: 2956,
            level: ECLevel::L,
            ..
        }
    ));
}

/// Forcing kanji mode onto an odd byte count is the malformed-segment case
#[test]
fn test_forced_kanji_odd_length() {
    let segments = [Segment::new(Mode::Kanji, vec![0x93, 0x5F, 0xE4, 0xAA, 0x93])];
    let err = QrEncoder::new(ECLevel::M)
        .encode_segments(&segments)
        .unwrap_err();
    assert_eq!(err, EncodeError::MalformedSegment { length: 5 });
}

/// The pad tail is the alternating EC, 11 pattern and the output always
/// fills the symbol's data capacity exactly
#[test]
fn test_pad_determinism() {
    let cases: [(&str, ECLevel); 4] = [
        ("1", ECLevel::L),
        ("HELLO", ECLevel::H),
        ("a longer byte-mode payload with 1234 digits inside", ECLevel::M),
        ("", ECLevel::Q),
    ];
    for (text, level) in cases {
        let package = encode(text, level).unwrap();
        assert_eq!(package.bytes.len(), package.data_codewords);

        // everything after the terminator byte must alternate EC, 11
        let data_bytes = (package.bit_count + 4).div_ceil(8);
        let tail = &package.bytes[data_bytes..];
        for (i, &byte) in tail.iter().enumerate() {
            let expected = if i % 2 == 0 { 0xEC } else { 0x11 };
            assert_eq!(byte, expected, "pad byte {i} for {text:?}");
        }
    }
}

/// Distinct forced hints reuse the whole input as one segment
#[test]
fn test_forced_hints_cover_whole_input() {
    let package = encode_with_hint(b"12345", ModeHint::Numeric, ECLevel::L).unwrap();
    assert_eq!(package.bit_count, 4 + 10 + 10 + 7);

    let package = encode_with_hint(b"12345", ModeHint::Byte, ECLevel::L).unwrap();
    assert_eq!(package.bit_count, 4 + 8 + 40);
}
