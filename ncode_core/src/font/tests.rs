use super::{BBox, FontError, FontTable, GlyphMetrics, HEADER_LEN};
use crate::surface::PixelRecorder;
use crate::testing::{FontBuilder, ascii_font, hangul_font};

#[test]
fn header_fields() {
    let blob = ascii_font();
    let font = FontTable::new(&blob).unwrap();
    assert_eq!(font.ascent(), 7);
    assert_eq!(font.descent(), 1);
    assert_eq!(font.height(), 8);
    assert_eq!(font.first_char(), 0x20);
    assert_eq!(font.num_chars(), 0x69 - 0x20 + 1);
}

#[test]
fn signed_header_bytes() {
    let blob = FontBuilder::new(-3, -1, 0x41).blank(0x41, 2).build();
    let font = FontTable::new(&blob).unwrap();
    assert_eq!(font.ascent(), -3);
    assert_eq!(font.descent(), -1);
}

#[test]
fn rejects_truncated_header() {
    assert_eq!(
        FontTable::new(&[0, 0, 7, 1]).unwrap_err(),
        FontError::TruncatedHeader { len: 4 }
    );
}

#[test]
fn rejects_truncated_table() {
    // Declares 2 entries (14 bytes) but carries only one.
    let blob = [0, 0, 7, 1, 0x41, 2, 0, 0, 6, 0, 0, 0, 0];
    assert_eq!(
        FontTable::new(&blob).unwrap_err(),
        FontError::TruncatedTable { num_chars: 2, len: 13 }
    );
}

#[test]
fn empty_table_is_valid() {
    let blob = [0, 0, 7, 1, 0x20, 0];
    let font = FontTable::new(&blob).unwrap();
    assert!(!font.contains(0x20));
    assert_eq!(font.advance(0x20), 0);
}

#[test]
fn entry_reads_metrics() {
    let blob = hangul_font();
    let font = FontTable::new(&blob).unwrap();
    let m = font.entry(0xB6).unwrap();
    assert_eq!(m.advance, 5);
    assert_eq!(
        m.bbox,
        BBox {
            width: 4,
            height: 12,
            x_offset: -1,
            y_offset: 0
        }
    );
}

#[test]
fn codes_outside_range_are_absent() {
    let blob = ascii_font();
    let font = FontTable::new(&blob).unwrap();
    assert!(font.entry(0x1F).is_none());
    assert!(font.entry(0x6A).is_none());
    assert!(font.entry(0xFF).is_none());
    assert!(font.contains(0x20));
    assert!(font.contains(0x69));
    assert_eq!(font.advance(0x7E), 0);
    assert!(font.bbox(0x00).is_none());
}

#[test]
fn range_end_near_255_does_not_overflow() {
    let blob = FontBuilder::new(7, 1, 0xF0).blank(0xFF, 3).build();
    let font = FontTable::new(&blob).unwrap();
    assert_eq!(font.num_chars(), 16);
    assert_eq!(font.advance(0xFF), 3);
    assert!(!font.contains(0xEF));
}

#[test]
fn glyph_bits_msb_first() {
    let blob = FontBuilder::new(7, 1, 0x41)
        .glyph(0x41, 10, 0, 0, &["#........#", ".#......#."])
        .build();
    let font = FontTable::new(&blob).unwrap();
    let glyph = font.glyph(0x41).unwrap();
    assert!(glyph.is_set(0, 0));
    assert!(glyph.is_set(9, 0));
    assert!(!glyph.is_set(1, 0));
    assert!(glyph.is_set(8, 1));
    assert!(!glyph.is_set(10, 0));
    let pixels: Vec<_> = glyph.pixels().collect();
    assert_eq!(pixels, vec![(0, 0), (9, 0), (1, 1), (8, 1)]);
}

#[test]
fn glyph_with_bitmap_past_end_is_absent_but_keeps_advance() {
    let mut blob = FontBuilder::new(7, 1, 0x41).solid(0x41, 6, 0, 0, 5, 7).build();
    blob.truncate(blob.len() - 1);
    let font = FontTable::new(&blob).unwrap();
    assert!(font.glyph(0x41).is_none());
    assert_eq!(font.advance(0x41), 6);

    let mut surface = PixelRecorder::new();
    assert_eq!(font.draw_glyph(&mut surface, 0, 0, 0x41), 6);
    assert!(surface.is_empty());
}

#[test]
fn draw_anchors_to_baseline() {
    let blob = ascii_font();
    let font = FontTable::new(&blob).unwrap();
    let mut surface = PixelRecorder::new();

    // 'A' is 5x7 sitting on the baseline: rows y+0..y+7.
    assert_eq!(font.draw_glyph(&mut surface, 10, 20, b'A'), 6);
    assert_eq!(surface.bounds(), Some((10, 20, 14, 26)));

    // 'g' descends one pixel: rows y+2..y+8.
    surface.clear();
    font.draw_glyph(&mut surface, 0, 0, b'g');
    assert_eq!(surface.bounds(), Some((0, 2, 3, 7)));
}

#[test]
fn draw_applies_x_offset() {
    let blob = hangul_font();
    let font = FontTable::new(&blob).unwrap();
    let mut surface = PixelRecorder::new();
    // Vowel ㅏ: 4x12 at x -1, bottom on the baseline (ascent 12).
    font.draw_glyph(&mut surface, 5, 0, 0xB6);
    assert_eq!(surface.bounds(), Some((4, 0, 7, 11)));
    assert_eq!(surface.len(), 48);
}

#[test]
fn draw_absent_code_is_zero_width_no_ink() {
    let blob = ascii_font();
    let font = FontTable::new(&blob).unwrap();
    let mut surface = PixelRecorder::new();
    assert_eq!(font.draw_glyph(&mut surface, 0, 0, 0xA2), 0);
    assert!(surface.is_empty());
}

#[test]
fn blank_glyph_advances_without_ink() {
    let blob = ascii_font();
    let font = FontTable::new(&blob).unwrap();
    let mut surface = PixelRecorder::new();
    assert_eq!(font.draw_glyph(&mut surface, 0, 0, b' '), 4);
    assert!(surface.is_empty());
    assert_eq!(
        font.entry(b' '),
        Some(GlyphMetrics {
            advance: 4,
            bbox: BBox::default(),
            bitmap_offset: 0,
        })
    );
}

#[test]
fn bbox_edges() {
    let bbox = BBox {
        width: 9,
        height: 3,
        x_offset: -2,
        y_offset: -1,
    };
    assert_eq!(bbox.row_bytes(), 2);
    assert_eq!(bbox.bitmap_len(), 6);
    assert_eq!((bbox.left(), bbox.right()), (-2, 7));
    assert_eq!((bbox.bottom(), bbox.top()), (-1, 2));
}

#[test]
fn header_len_matches_layout() {
    let blob = FontBuilder::new(7, 1, 0x41).blank(0x41, 1).build();
    assert_eq!(blob.len(), HEADER_LEN + 7);
}
