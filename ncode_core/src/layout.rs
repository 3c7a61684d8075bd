//! String measurement, alignment and line wrapping.
//!
//! [`FontSet`] pairs an ASCII font with an ncode Hangul font. Hangul
//! syllables and bare jamo are composed from the Hangul font; everything
//! else is drawn from the ASCII font. Measuring and drawing walk the
//! string separately, because alignment needs the full width before the
//! first pixel is set.

use std::ops::Range;

use crate::compose::{ComposedGlyph, Composition};
use crate::font::FontTable;
use crate::ncode::{self, NcodeSeq, PLACEHOLDER};
use crate::surface::PixelSurface;
use crate::utf8::{CodepointAt, Codepoints, codepoints};

/// Horizontal anchoring of a run of text relative to the given x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at x.
    #[default]
    Left,
    /// Text is centered on x.
    Center,
    /// Text ends at x.
    Right,
}

impl TextAlign {
    /// Starting x for a run `width` pixels wide anchored at `x`.
    pub fn origin(self, x: i32, width: i32) -> i32 {
        match self {
            Self::Left => x,
            Self::Center => x - width / 2,
            Self::Right => x - width,
        }
    }
}

/// How one codepoint is rendered.
#[derive(Debug, Clone, Copy)]
enum Shape {
    Hangul(NcodeSeq),
    Ascii(u8),
}

/// The fonts used to render mixed Hangul/ASCII text.
///
/// Either font may be missing; characters that need it are zero width.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontSet<'a> {
    pub ascii: Option<FontTable<'a>>,
    pub hangul: Option<FontTable<'a>>,
    pub composition: Composition,
}

impl<'a> FontSet<'a> {
    pub fn new(ascii: Option<FontTable<'a>>, hangul: Option<FontTable<'a>>) -> Self {
        Self {
            ascii,
            hangul,
            composition: Composition::default(),
        }
    }

    /// Same fonts, different composition policy.
    #[must_use]
    pub fn with_composition(self, composition: Composition) -> Self {
        Self {
            composition,
            ..self
        }
    }

    fn shape(&self, codepoint: u32) -> Shape {
        if ncode::is_hangul(codepoint) {
            return Shape::Hangul(ncode::encode(codepoint));
        }
        let own_glyph = |c: u8| c < 0x80 || self.ascii.is_some_and(|f| f.contains(c));
        match u8::try_from(codepoint) {
            Ok(c) if own_glyph(c) => Shape::Ascii(c),
            _ => Shape::Ascii(PLACEHOLDER),
        }
    }

    fn compose(&self, font: &FontTable<'_>, seq: &NcodeSeq) -> ComposedGlyph {
        self.composition.compose(font, seq)
    }

    /// Advance width of one codepoint.
    pub fn char_width(&self, codepoint: u32) -> i32 {
        match self.shape(codepoint) {
            Shape::Hangul(seq) => self.hangul.map_or(0, |f| self.compose(&f, &seq).advance),
            Shape::Ascii(code) => self.ascii.map_or(0, |f| f.advance(code)),
        }
    }

    /// Draw one codepoint with its origin at `(x, y)`. Returns its width.
    pub fn draw_char<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        codepoint: u32,
    ) -> i32 {
        match self.shape(codepoint) {
            Shape::Hangul(seq) => self
                .hangul
                .map_or(0, |f| self.compose(&f, &seq).draw(&f, surface, x, y)),
            Shape::Ascii(code) => self
                .ascii
                .map_or(0, |f| f.draw_glyph(surface, x, y, code)),
        }
    }

    /// Total advance width of a UTF-8 string.
    pub fn measure_string(&self, text: &[u8]) -> i32 {
        codepoints(text).map(|c| self.char_width(c.codepoint)).sum()
    }

    /// Vertical distance between wrapped lines: font height plus 20%.
    ///
    /// Taken from the Hangul font when present, else the ASCII font.
    pub fn line_height(&self) -> i32 {
        let height = self.hangul.or(self.ascii).map_or(0, |f| f.height());
        height + height / 5
    }

    fn draw_run<S: PixelSurface + ?Sized>(&self, surface: &mut S, x: i32, y: i32, text: &[u8]) -> i32 {
        codepoints(text).fold(x, |x, c| x + self.draw_char(surface, x, y, c.codepoint))
    }

    /// Draw a single line of text anchored at `(x, y)`.
    ///
    /// Returns the width drawn.
    pub fn draw_string<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        align: TextAlign,
        text: &[u8],
    ) -> i32 {
        let width = self.measure_string(text);
        let start = align.origin(x, width);
        self.draw_run(surface, start, y, text) - start
    }

    /// Break `text` into lines no wider than `max_width`.
    pub fn lines<'t>(&self, text: &'t [u8], max_width: i32) -> Lines<'a, 't> {
        Lines {
            fonts: *self,
            text: codepoints(text),
            max_width,
            pending: None,
        }
    }

    /// Draw `text` wrapped at `max_width`, one line every
    /// [`line_height`](Self::line_height) pixels starting at `y`.
    ///
    /// Each line is aligned on its own. Returns the number of lines drawn.
    pub fn draw_string_wrapped<S: PixelSurface + ?Sized>(
        &self,
        surface: &mut S,
        x: i32,
        y: i32,
        align: TextAlign,
        max_width: i32,
        text: &[u8],
    ) -> usize {
        let line_height = self.line_height();
        let mut count = 0;
        for line in self.lines(text, max_width) {
            let line_y = y + count as i32 * line_height;
            let start = align.origin(x, line.width);
            self.draw_run(surface, start, line_y, &text[line.range]);
            count += 1;
        }
        log::trace!("wrapped {} bytes into {count} lines", text.len());
        count
    }
}

/// One wrapped line: a byte range of the source text and its width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    pub range: Range<usize>,
    pub width: i32,
}

/// Iterator over wrapped lines, produced by [`FontSet::lines`].
///
/// A character that would push the line to `max_width` or beyond starts
/// the next line. A line always holds at least one character, so a glyph
/// wider than the limit sits on a line of its own. `\n` ends a line and
/// belongs to neither side.
#[derive(Debug, Clone)]
pub struct Lines<'a, 't> {
    fonts: FontSet<'a>,
    text: Codepoints<'t>,
    max_width: i32,
    /// Character that overflowed the previous line, with its width.
    pending: Option<(CodepointAt, i32)>,
}

impl Iterator for Lines<'_, '_> {
    type Item = LayoutLine;

    fn next(&mut self) -> Option<LayoutLine> {
        let mut line: Option<LayoutLine> = None;
        loop {
            let (c, w) = match self.pending.take() {
                Some(pending) => pending,
                None => match self.text.next() {
                    Some(c) => (c, self.fonts.char_width(c.codepoint)),
                    None => return line,
                },
            };
            if c.codepoint == u32::from(b'\n') {
                return Some(line.unwrap_or(LayoutLine {
                    range: c.offset..c.offset,
                    width: 0,
                }));
            }
            if line.as_ref().is_some_and(|l| l.width + w >= self.max_width) {
                self.pending = Some((c, w));
                return line;
            }
            if let Some(l) = line.as_mut() {
                l.range.end = c.offset + c.len;
                l.width += w;
            } else {
                line = Some(LayoutLine {
                    range: c.offset..c.offset + c.len,
                    width: w,
                });
            }
        }
    }
}
