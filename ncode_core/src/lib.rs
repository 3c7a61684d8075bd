//! Hangul text rendering with ncode bitmap fonts.
//!
//! This crate turns UTF-8 text into pixels: it decodes codepoints, maps
//! Hangul to ncode component codes, reads compact bitmap font blobs, and
//! composes three-part syllables into aligned glyph blocks. The only side
//! effect is [`PixelSurface::set_pixel`]; there is no I/O, no global
//! state, and no allocation on the draw path.

#![deny(unsafe_code)]

pub mod compose;
pub mod font;
pub mod layout;
pub mod ncode;
pub mod surface;
pub mod utf8;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use compose::{ComposedGlyph, Composition, Placement};
pub use font::{BBox, FontError, FontTable, Glyph, GlyphMetrics};
pub use layout::{FontSet, LayoutLine, Lines, TextAlign};
pub use ncode::{NcodeClass, NcodeSeq, Parts, Syllable};
pub use surface::{PixelRecorder, PixelSurface};
pub use utf8::{CodepointAt, Codepoints, Decoded, codepoints, decode_codepoint};
