use crate::models::{ECLevel, Mode};

/// Codeword capacity split of a symbol at one error-correction level
pub struct SymbolCapacity {
    /// Codewords left for data after error correction is reserved
    pub data_codewords: usize,
    /// Error-correction codewords at the chosen level
    pub ecc_codewords: usize,
}

// Tables from the QR Code specification (Model 2).
// Index: [version]; entry 0 is a sentinel.
const TOTAL_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761,
    2876, 3034, 3196, 3362, 3532, 3706,
];

// Index: [ec_level][version]
const ECC_CODEWORDS: [[u16; 41]; 4] = [
    [
        0, 7, 10, 15, 20, 26, 36, 40, 48, 60, 72, 80, 96, 104, 120, 132, 144, 168, 180, 196, 224,
        224, 252, 270, 300, 312, 336, 360, 390, 420, 450, 480, 510, 540, 570, 570, 600, 630, 660,
        720, 750,
    ], // Low
    [
        0, 10, 16, 26, 36, 48, 64, 72, 88, 110, 130, 150, 176, 198, 216, 240, 280, 308, 338, 364,
        416, 442, 476, 504, 560, 588, 644, 700, 728, 784, 812, 868, 924, 980, 1036, 1064, 1120,
        1204, 1260, 1316, 1372,
    ], // Medium
    [
        0, 13, 22, 36, 52, 72, 96, 108, 132, 160, 192, 224, 260, 288, 320, 360, 408, 448, 504,
        546, 600, 644, 690, 750, 810, 870, 952, 1020, 1050, 1140, 1200, 1290, 1350, 1440, 1530,
        1590, 1680, 1770, 1860, 1950, 2040,
    ], // Quartile
    [
        0, 17, 28, 44, 64, 88, 112, 130, 156, 192, 224, 264, 308, 352, 384, 432, 480, 532, 588,
        650, 700, 750, 816, 900, 960, 1050, 1110, 1200, 1260, 1350, 1440, 1530, 1620, 1710, 1800,
        1890, 1980, 2100, 2220, 2310, 2430,
    ], // High
];

// Length-indicator widths. Index: [mode][version tier].
const CHAR_COUNT_BITS: [[u8; 3]; 4] = [
    [10, 12, 14], // numeric
    [9, 11, 13],  // alphanumeric
    [8, 16, 16],  // byte
    [8, 10, 12],  // kanji
];

/// Capacity split for a version and level
pub fn symbol_capacity(version: u8, level: ECLevel) -> Option<SymbolCapacity> {
    if !(1..=40).contains(&version) {
        return None;
    }
    let total = TOTAL_CODEWORDS[version as usize] as usize;
    let ecc = ECC_CODEWORDS[level.index()][version as usize] as usize;
    Some(SymbolCapacity {
        data_codewords: total - ecc,
        ecc_codewords: ecc,
    })
}

/// Bit width of the length field preceding a segment's payload
///
/// Tiers: version 1-9, 10-26, 27-40.
pub fn char_count_bits(mode: Mode, version: u8) -> usize {
    let tier = if version <= 9 {
        0
    } else if version <= 26 {
        1
    } else {
        2
    };
    CHAR_COUNT_BITS[mode.index()][tier] as usize
}
