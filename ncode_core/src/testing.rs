//! Hand-built font blobs for tests and benches.
//!
//! Only compiled under `cfg(test)` or the `testing` feature.

use crate::font::{ENTRY_LEN, HEADER_LEN};

struct Entry {
    advance: i8,
    width: u8,
    height: u8,
    x_offset: i8,
    y_offset: i8,
    bitmap: Vec<u8>,
}

/// Assembles a font blob glyph by glyph.
///
/// Codes must be added in increasing order. Gaps between codes are filled
/// with entries that have no advance and no ink.
pub struct FontBuilder {
    ascent: i8,
    descent: i8,
    first_char: u8,
    entries: Vec<Entry>,
}

impl FontBuilder {
    pub fn new(ascent: i8, descent: i8, first_char: u8) -> Self {
        Self {
            ascent,
            descent,
            first_char,
            entries: Vec::new(),
        }
    }

    /// Add a glyph drawn from `rows`, where `#` is ink.
    ///
    /// The bbox is as wide as the longest row and as tall as `rows`.
    pub fn glyph(mut self, code: u8, advance: i8, x_offset: i8, y_offset: i8, rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let row_bytes = width.div_ceil(8);
        let mut bitmap = vec![0u8; row_bytes * rows.len()];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.bytes().enumerate() {
                if ch == b'#' {
                    bitmap[y * row_bytes + x / 8] |= 0x80 >> (x % 8);
                }
            }
        }
        self.push(
            code,
            Entry {
                advance,
                width: width as u8,
                height: rows.len() as u8,
                x_offset,
                y_offset,
                bitmap,
            },
        );
        self
    }

    /// Add a fully inked `width` x `height` glyph.
    pub fn solid(self, code: u8, advance: i8, x_offset: i8, y_offset: i8, width: u8, height: u8) -> Self {
        let row = "#".repeat(usize::from(width));
        let rows = vec![row.as_str(); usize::from(height)];
        self.glyph(code, advance, x_offset, y_offset, &rows)
    }

    /// Add a glyph that advances but has no ink.
    pub fn blank(self, code: u8, advance: i8) -> Self {
        self.glyph(code, advance, 0, 0, &[])
    }

    fn push(&mut self, code: u8, entry: Entry) {
        let next = usize::from(self.first_char) + self.entries.len();
        assert!(usize::from(code) >= next, "glyph codes must increase");
        while usize::from(self.first_char) + self.entries.len() < usize::from(code) {
            self.entries.push(Entry {
                advance: 0,
                width: 0,
                height: 0,
                x_offset: 0,
                y_offset: 0,
                bitmap: Vec::new(),
            });
        }
        self.entries.push(entry);
    }

    /// Serialize to the on-flash layout.
    pub fn build(self) -> Vec<u8> {
        let mut table = Vec::with_capacity(HEADER_LEN + self.entries.len() * ENTRY_LEN);
        table.extend_from_slice(&[
            0,
            0,
            self.ascent as u8,
            self.descent as u8,
            self.first_char,
            self.entries.len() as u8,
        ]);
        let mut bitmaps = Vec::new();
        for e in &self.entries {
            let offset = bitmaps.len() as u16;
            table.extend_from_slice(&offset.to_be_bytes());
            table.extend_from_slice(&[
                e.advance as u8,
                e.width,
                e.height,
                e.x_offset as u8,
                e.y_offset as u8,
            ]);
            bitmaps.extend_from_slice(&e.bitmap);
        }
        table.extend_from_slice(&bitmaps);
        table
    }
}

/// ASCII font: ascent 7, descent 1, codes `0x20..=0x69`.
///
/// | char | advance | bbox (w x h @ x,y) |
/// |------|---------|--------------------|
/// | ` `  | 4       | none               |
/// | `?`  | 6       | 5x7 @ 0,0          |
/// | `A`  | 6       | 5x7 @ 0,0          |
/// | `B`  | 6       | 5x7 @ 0,0          |
/// | `g`  | 5       | 4x6 @ 0,-1         |
/// | `i`  | 2       | 1x7 @ 0,0          |
///
/// Every other code in range has no ink and advance 0.
pub fn ascii_font() -> Vec<u8> {
    FontBuilder::new(7, 1, 0x20)
        .blank(b' ', 4)
        .glyph(
            b'?',
            6,
            0,
            0,
            &[".###.", "#...#", "....#", "..##.", "..#..", ".....", "..#.."],
        )
        .glyph(
            b'A',
            6,
            0,
            0,
            &[".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        )
        .glyph(
            b'B',
            6,
            0,
            0,
            &["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
        )
        .glyph(b'g', 5, 0, -1, &[".###", "#..#", "#..#", ".###", "...#", "###."])
        .glyph(b'i', 2, 0, 0, &["#", ".", "#", "#", "#", "#", "#"])
        .build()
}

/// Ncode component font: ascent 12, descent 2, codes `0xA1..=0xCE`.
///
/// | code | jamo      | advance | bbox (w x h @ x,y) |
/// |------|-----------|---------|--------------------|
/// | A2   | initial ㄱ | 7       | 6x6 @ 0,4          |
/// | B4   | initial ㅎ | 7       | 6x7 @ -2,3         |
/// | B6   | vowel ㅏ   | 5       | 4x12 @ -1,0        |
/// | BA   | vowel ㅓ   | 3       | 6x12 @ 0,0         |
/// | BE   | vowel ㅗ   | 1       | 7x3 @ -7,1         |
/// | CB   | final ㄱ   | 0       | 6x3 @ -8,-4        |
/// | CE   | final ㄴ   | 1       | 5x3 @ -8,-4        |
///
/// All glyphs are solid rectangles. Fillers and every other code in range
/// have no ink and advance 0.
pub fn hangul_font() -> Vec<u8> {
    FontBuilder::new(12, 2, 0xA1)
        .solid(0xA2, 7, 0, 4, 6, 6)
        .solid(0xB4, 7, -2, 3, 6, 7)
        .solid(0xB6, 5, -1, 0, 4, 12)
        .solid(0xBA, 3, 0, 0, 6, 12)
        .solid(0xBE, 1, -7, 1, 7, 3)
        .solid(0xCB, 0, -8, -4, 6, 3)
        .solid(0xCE, 1, -8, -4, 5, 3)
        .build()
}
