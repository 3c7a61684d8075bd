//! Compact bitmap font tables.
//!
//! A font blob is read in place, never copied or modified:
//!
//! ```text
//! offset  size  field
//! 0       2     (unused)
//! 2       1     ascent, i8, pixels above baseline
//! 3       1     descent, i8, pixels below baseline
//! 4       1     first_char, lowest code present
//! 5       1     num_chars, consecutive codes present
//! 6       7*n   entry table, one entry per code
//! 6+7*n   ...   bitmap region
//! ```
//!
//! Each entry: big-endian u16 offset into the bitmap region, advance (i8),
//! bbox width (u8), bbox height (u8), bbox x-offset (i8), bbox y-offset
//! (i8, relative to the baseline). Bitmaps are row-major, MSB first, each
//! row padded to a whole byte.

use thiserror::Error;

use crate::surface::PixelSurface;

/// Size of the fixed header.
pub const HEADER_LEN: usize = 6;
/// Size of one glyph entry.
pub const ENTRY_LEN: usize = 7;

/// Errors from loading a font blob.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("font blob is {len} bytes, shorter than its {HEADER_LEN}-byte header")]
    TruncatedHeader { len: usize },

    #[error("font blob declares {num_chars} glyph entries but is only {len} bytes")]
    TruncatedTable { num_chars: u8, len: usize },
}

/// Ink extent of a glyph relative to its origin on the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BBox {
    pub width: u8,
    pub height: u8,
    pub x_offset: i8,
    /// Bottom edge above the baseline (negative = descends below).
    pub y_offset: i8,
}

impl BBox {
    /// Bytes per bitmap row.
    pub fn row_bytes(&self) -> usize {
        usize::from(self.width).div_ceil(8)
    }

    /// Size of the packed bitmap in bytes.
    pub fn bitmap_len(&self) -> usize {
        self.row_bytes() * usize::from(self.height)
    }

    /// Leftmost ink column, relative to the glyph origin.
    pub fn left(&self) -> i32 {
        i32::from(self.x_offset)
    }

    /// One past the rightmost ink column.
    pub fn right(&self) -> i32 {
        self.left() + i32::from(self.width)
    }

    /// Bottom edge, baseline-relative.
    pub fn bottom(&self) -> i32 {
        i32::from(self.y_offset)
    }

    /// Top edge, baseline-relative.
    pub fn top(&self) -> i32 {
        self.bottom() + i32::from(self.height)
    }
}

/// Metrics of one glyph entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    /// Horizontal distance to the next glyph origin.
    pub advance: i8,
    pub bbox: BBox,
    /// Offset of the glyph's bitmap inside the bitmap region.
    pub bitmap_offset: u16,
}

/// A glyph with its packed bitmap.
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'a> {
    pub metrics: GlyphMetrics,
    bitmap: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Whether the bitmap bit at `(col, row)` is set. Out of range is unset.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        let bbox = self.metrics.bbox;
        if col >= usize::from(bbox.width) || row >= usize::from(bbox.height) {
            return false;
        }
        let byte = self.bitmap[row * bbox.row_bytes() + col / 8];
        byte & (0x80 >> (col % 8)) != 0
    }

    /// Set bits as `(col, row)` in bitmap space, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let bbox = self.metrics.bbox;
        (0..usize::from(bbox.height)).flat_map(move |row| {
            (0..usize::from(bbox.width))
                .filter(move |&col| self.is_set(col, row))
                .map(move |col| (col, row))
        })
    }
}

/// Typed read-only view of a font blob.
#[derive(Debug, Clone, Copy)]
pub struct FontTable<'a> {
    data: &'a [u8],
}

impl<'a> FontTable<'a> {
    /// Wrap a font blob, checking that the header and entry table fit.
    ///
    /// The bitmap region is checked lazily per glyph.
    pub fn new(data: &'a [u8]) -> Result<Self, FontError> {
        if data.len() < HEADER_LEN {
            log::warn!("font: rejected {}-byte blob, header truncated", data.len());
            return Err(FontError::TruncatedHeader { len: data.len() });
        }
        let table = Self { data };
        if data.len() < table.bitmap_base() {
            log::warn!(
                "font: rejected {}-byte blob, table of {} entries truncated",
                data.len(),
                table.num_chars()
            );
            return Err(FontError::TruncatedTable {
                num_chars: table.num_chars(),
                len: data.len(),
            });
        }
        log::debug!(
            "font: {} glyphs from {:#04x}, ascent {} descent {}",
            table.num_chars(),
            table.first_char(),
            table.ascent(),
            table.descent()
        );
        Ok(table)
    }

    /// Pixels above the baseline.
    pub fn ascent(&self) -> i32 {
        i32::from(self.data[2] as i8)
    }

    /// Pixels below the baseline.
    pub fn descent(&self) -> i32 {
        i32::from(self.data[3] as i8)
    }

    /// Ascent plus descent.
    pub fn height(&self) -> i32 {
        self.ascent() + self.descent()
    }

    pub fn first_char(&self) -> u8 {
        self.data[4]
    }

    pub fn num_chars(&self) -> u8 {
        self.data[5]
    }

    /// Whether `code` lies in `[first_char, first_char + num_chars)`.
    pub fn contains(&self, code: u8) -> bool {
        self.slot(code).is_some()
    }

    fn slot(&self, code: u8) -> Option<usize> {
        let index = code.checked_sub(self.first_char())?;
        (index < self.num_chars()).then_some(usize::from(index))
    }

    fn bitmap_base(&self) -> usize {
        HEADER_LEN + usize::from(self.num_chars()) * ENTRY_LEN
    }

    /// Metrics for `code`, or `None` outside the font's range.
    pub fn entry(&self, code: u8) -> Option<GlyphMetrics> {
        let start = HEADER_LEN + self.slot(code)? * ENTRY_LEN;
        let e = &self.data[start..start + ENTRY_LEN];
        Some(GlyphMetrics {
            bitmap_offset: u16::from_be_bytes([e[0], e[1]]),
            advance: e[2] as i8,
            bbox: BBox {
                width: e[3],
                height: e[4],
                x_offset: e[5] as i8,
                y_offset: e[6] as i8,
            },
        })
    }

    /// Metrics plus bitmap for `code`.
    ///
    /// `None` outside the font's range, or when the bitmap would run past
    /// the end of the blob.
    pub fn glyph(&self, code: u8) -> Option<Glyph<'a>> {
        let metrics = self.entry(code)?;
        let start = self.bitmap_base() + usize::from(metrics.bitmap_offset);
        let bitmap = self.data.get(start..start + metrics.bbox.bitmap_len());
        if bitmap.is_none() {
            log::debug!("font: bitmap for {code:#04x} runs past end of blob");
        }
        Some(Glyph {
            metrics,
            bitmap: bitmap?,
        })
    }

    /// Advance width of `code`; 0 when absent.
    pub fn advance(&self, code: u8) -> i32 {
        self.entry(code).map_or(0, |m| i32::from(m.advance))
    }

    /// Bounding box of `code`, if present.
    pub fn bbox(&self, code: u8) -> Option<BBox> {
        self.entry(code).map(|m| m.bbox)
    }

    /// Blit `code` with its origin at `(x, y)`, `y` being the top of the
    /// font's ascent. Returns the advance width (0 when absent).
    ///
    /// Rows land at `y + ascent - y_offset - height + row`, which puts
    /// every glyph on the shared baseline whatever its own height.
    pub fn draw_glyph<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        code: u8,
    ) -> i32 {
        let Some(metrics) = self.entry(code) else {
            return 0;
        };
        if let Some(glyph) = self.glyph(code) {
            let bbox = metrics.bbox;
            let left = x + bbox.left();
            let top = y + self.ascent() - bbox.top();
            for (col, row) in glyph.pixels() {
                surface.set_pixel(left + col as i32, top + row as i32);
            }
        }
        i32::from(metrics.advance)
    }
}

#[cfg(test)]
mod tests;
