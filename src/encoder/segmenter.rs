//! Greedy mode segmentation over the input byte sequence.

use crate::encoder::classifier::{is_alphanumeric, is_digit, is_kanji_pair};
use crate::models::{Mode, Segment};

/// Splits input into maximal single-mode runs
pub struct SegmentScanner;

impl SegmentScanner {
    /// Scan `data` into segments that cover it exactly once, in order.
    ///
    /// `detect_kanji` enables double-byte runs; without it every
    /// non-digit, non-alphanumeric byte lands in byte mode.
    pub fn scan(data: &[u8], detect_kanji: bool) -> Vec<Segment> {
        let mut cursor = Cursor {
            data,
            pos: 0,
            detect_kanji,
        };
        let mut segments = Vec::new();

        while cursor.pos < data.len() {
            let start = cursor.pos;
            let mode = cursor.identify();
            match mode {
                Mode::Numeric => cursor.eat_numeric(),
                Mode::Alphanumeric => cursor.eat_alphanumeric(),
                Mode::Kanji => cursor.eat_kanji(),
                Mode::Byte => cursor.eat_byte(),
            }
            segments.push(Segment::new(mode, &data[start..cursor.pos]));
        }

        segments
    }
}

/// Per-call scan state; never outlives a single `scan`
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    detect_kanji: bool,
}

impl Cursor<'_> {
    /// Mode of the byte(s) at the cursor, by priority
    fn identify(&self) -> Mode {
        if is_digit(self.data, self.pos) {
            Mode::Numeric
        } else if is_alphanumeric(self.data, self.pos) {
            Mode::Alphanumeric
        } else if self.detect_kanji && is_kanji_pair(self.data, self.pos) {
            Mode::Kanji
        } else {
            Mode::Byte
        }
    }

    fn eat_numeric(&mut self) {
        // the byte at the cursor was already classified
        self.pos += 1;
        while is_digit(self.data, self.pos) {
            self.pos += 1;
        }
    }

    fn eat_alphanumeric(&mut self) {
        self.pos += 1;
        while is_alphanumeric(self.data, self.pos) {
            self.pos += 1;
        }
    }

    fn eat_kanji(&mut self) {
        self.pos += 2;
        while is_kanji_pair(self.data, self.pos) {
            self.pos += 2;
        }
    }

    /// Consume a byte run, absorbing interrupting runs too short to be
    /// worth a mode switch: numeric up to 3 bytes, alphanumeric up to 5.
    /// A kanji pair always terminates the run.
    fn eat_byte(&mut self) {
        self.pos += 1;
        while self.pos < self.data.len() {
            match self.identify() {
                Mode::Kanji => break,
                Mode::Numeric => {
                    let mark = self.pos;
                    self.eat_numeric();
                    if self.pos - mark > 3 {
                        self.pos = mark;
                        break;
                    }
                }
                Mode::Alphanumeric => {
                    let mark = self.pos;
                    self.eat_alphanumeric();
                    if self.pos - mark > 5 {
                        self.pos = mark;
                        break;
                    }
                }
                Mode::Byte => self.pos += 1,
            }
        }
    }
}
