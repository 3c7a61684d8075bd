//! Composing component glyphs into one syllable block.
//!
//! An ncode font carries separate glyphs for each initial consonant, vowel
//! and final consonant. Composition decides where each lands relative to
//! the syllable origin and how far the syllable advances.

use crate::font::{BBox, FontTable};
use crate::ncode::{NcodeSeq, Parts};
use crate::surface::PixelSurface;

/// Placement policy for syllable components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composition {
    /// Bounding-box aware placement with vertical centering.
    #[default]
    Advanced,
    /// Components laid end to end by advance width.
    Simple,
}

/// One component glyph positioned inside a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub code: u8,
    /// Horizontal offset from the syllable origin.
    pub x: i32,
}

/// A syllable ready to draw: where each component goes and how wide the
/// whole block is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposedGlyph {
    placements: [Option<Placement>; 3],
    /// Distance to the next character origin.
    pub advance: i32,
    /// Vertical correction added to the draw origin.
    pub y_shift: i32,
}

impl ComposedGlyph {
    /// Component placements in draw order: initial, vowel, final.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.placements.iter().flatten().copied()
    }

    /// Draw every component with the syllable origin at `(x, y)`.
    /// Returns the advance.
    pub fn draw<S: PixelSurface + ?Sized>(
        &self,
        font: &FontTable<'_>,
        surface: &mut S,
        x: i32,
        y: i32,
    ) -> i32 {
        let y = y + self.y_shift;
        for p in self.placements() {
            font.draw_glyph(surface, x + p.x, y, p.code);
        }
        self.advance
    }
}

/// Horizontal and vertical ink extents, baseline-relative.
#[derive(Debug, Clone, Copy)]
struct Extents {
    xmin: i32,
    xmax: i32,
    ymin: i32,
    ymax: i32,
}

impl Extents {
    /// Start with an empty horizontal range at the origin and an inverted
    /// vertical range, so the first glyph sets both y edges.
    fn new(font: &FontTable<'_>) -> Self {
        Self {
            xmin: 0,
            xmax: 0,
            ymin: font.ascent(),
            ymax: -font.descent(),
        }
    }

    fn include(&mut self, x: i32, bbox: BBox) {
        self.xmin = self.xmin.min(x + bbox.left());
        self.xmax = self.xmax.max(x + bbox.right());
        self.ymin = self.ymin.min(bbox.bottom());
        self.ymax = self.ymax.max(bbox.top());
    }
}

/// Where the final consonant starts, given the vowel's advance.
///
/// Wide vowels overhang the final consonant slot, so only three quarters
/// of their advance (rounded) counts.
fn final_offset(vowel_advance: i32) -> i32 {
    if vowel_advance >= 2 {
        (vowel_advance * 3 + 2) / 4
    } else {
        vowel_advance
    }
}

impl Composition {
    /// Lay out the components of `seq` against `font`.
    ///
    /// Fillers and components missing from the font contribute nothing.
    pub fn compose(self, font: &FontTable<'_>, seq: &NcodeSeq) -> ComposedGlyph {
        if seq.parts().is_empty() {
            return ComposedGlyph::default();
        }
        match self {
            Self::Advanced => compose_advanced(font, seq),
            Self::Simple => compose_simple(font, seq),
        }
    }
}

fn compose_advanced(font: &FontTable<'_>, seq: &NcodeSeq) -> ComposedGlyph {
    let mut ext = Extents::new(font);
    let mut placed = [None; 3];
    let mut advances = [0; 3];

    let mut x = 0;
    for (part, code) in seq.components() {
        if part == Parts::FINAL {
            x = advances[0] + final_offset(advances[1]);
        }
        let Some(metrics) = font.entry(code) else {
            continue;
        };
        let slot = part.slot();
        ext.include(x, metrics.bbox);
        placed[slot] = Some(Placement { code, x });
        advances[slot] = i32::from(metrics.advance);
        if part == Parts::INITIAL {
            x = advances[0];
        }
    }

    // Shift right so nothing hangs left of the origin.
    let shift = -ext.xmin;
    for p in placed.iter_mut().flatten() {
        p.x += shift;
    }
    let advance = (shift + advances.iter().sum::<i32>()).max(ext.xmax - ext.xmin);

    let y_shift = if ext.ymin < ext.ymax {
        (ext.ymax + ext.ymin - (font.ascent() - font.descent()) + 1) / 3
    } else {
        0
    };

    ComposedGlyph {
        placements: placed,
        advance,
        y_shift,
    }
}

fn compose_simple(font: &FontTable<'_>, seq: &NcodeSeq) -> ComposedGlyph {
    let mut placed = [None; 3];
    let mut x = 0;
    for (part, code) in seq.components().filter(|&(_, c)| font.contains(c)) {
        placed[part.slot()] = Some(Placement { code, x });
        x += font.advance(code);
    }
    ComposedGlyph {
        placements: placed,
        advance: x,
        y_shift: 0,
    }
}
