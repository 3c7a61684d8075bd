//! Unicode to ncode mapping.
//!
//! Ncode is a single-byte-per-component Hangul encoding used to address
//! three-part ("jamo") bitmap fonts. A composed syllable becomes an initial
//! consonant code, a vowel code, and an optional final consonant code.
//! Bare jamo become the same codes padded with filler codes:
//!
//! | sequence              | meaning                    |
//! |-----------------------|----------------------------|
//! | `ch ju`               | syllable without final     |
//! | `ch ju jo`            | syllable with final        |
//! | `ch`                  | initial consonant only     |
//! | `f1 ju`               | vowel only                 |
//! | `f1 f2 jo`            | final consonant only       |
//!
//! `f1` = [`INITIAL_FILL`], `f2` = [`VOWEL_FILL`]. The mapping is pure
//! arithmetic over code ranges; no tables.

use std::fmt;
use std::ops::Deref;

use bitflags::bitflags;

use crate::utf8::codepoints;

/// First composed Hangul syllable (U+AC00 "가").
pub const SYLLABLE_FIRST: u32 = 0xAC00;
/// Last composed Hangul syllable (U+D7A3 "힣").
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// First bare initial consonant jamo (U+1100).
pub const JAMO_INITIAL_FIRST: u32 = 0x1100;
/// First bare vowel jamo (U+1161).
pub const JAMO_VOWEL_FIRST: u32 = 0x1161;
/// First bare final consonant jamo (U+11A8).
pub const JAMO_FINAL_FIRST: u32 = 0x11A8;

/// Number of initial consonants.
pub const INITIAL_COUNT: u8 = 19;
/// Number of vowels.
pub const VOWEL_COUNT: u8 = 21;
/// Number of final consonants (excluding "no final").
pub const FINAL_COUNT: u8 = 27;

/// Codepoints per initial consonant: every vowel times every final slot.
const PER_INITIAL: u32 = VOWEL_COUNT as u32 * PER_VOWEL;
/// Codepoints per vowel: 27 finals plus the "no final" slot.
const PER_VOWEL: u32 = FINAL_COUNT as u32 + 1;

/// Initial consonant filler ("initial absent").
pub const INITIAL_FILL: u8 = 0xA1;
/// Code of the first initial consonant.
pub const INITIAL_FIRST: u8 = 0xA2;
/// Vowel filler ("vowel absent").
pub const VOWEL_FILL: u8 = 0xB5;
/// Code of the first vowel.
pub const VOWEL_FIRST: u8 = 0xB6;
/// Code of the first final consonant.
pub const FINAL_FIRST: u8 = 0xCB;

/// Code emitted for codepoints with no ncode representation.
pub const PLACEHOLDER: u8 = b'?';

/// Returns `true` for composed syllables U+AC00..=U+D7A3.
pub fn is_syllable(codepoint: u32) -> bool {
    (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&codepoint)
}

/// Returns `true` for the bare jamo ranges that ncode can address.
pub fn is_jamo(codepoint: u32) -> bool {
    jamo_codes(codepoint).is_some()
}

/// Returns `true` for anything laid out through the Hangul font.
pub fn is_hangul(codepoint: u32) -> bool {
    is_syllable(codepoint) || is_jamo(codepoint)
}

/// Band a single ncode byte falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NcodeClass {
    /// 0x01..=0x7F, passed through unchanged.
    Ascii,
    /// [`INITIAL_FILL`].
    InitialFill,
    /// Initial consonant, with its index `0..19`.
    Initial(u8),
    /// [`VOWEL_FILL`].
    VowelFill,
    /// Vowel, with its index `0..21`.
    Vowel(u8),
    /// Final consonant, with its 1-based final index `1..=27`.
    Final(u8),
    /// Terminator or an unassigned byte.
    Unassigned,
}

/// Classify one ncode byte.
pub fn classify(code: u8) -> NcodeClass {
    match code {
        0x01..=0x7F => NcodeClass::Ascii,
        INITIAL_FILL => NcodeClass::InitialFill,
        0xA2..=0xB4 => NcodeClass::Initial(code - INITIAL_FIRST),
        VOWEL_FILL => NcodeClass::VowelFill,
        0xB6..=0xCA => NcodeClass::Vowel(code - VOWEL_FIRST),
        0xCB..=0xE5 => NcodeClass::Final(code - FINAL_FIRST + 1),
        _ => NcodeClass::Unassigned,
    }
}

bitflags! {
    /// Which real components (not fillers) a sequence carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Parts: u8 {
        const INITIAL = 1 << 0;
        const VOWEL   = 1 << 1;
        const FINAL   = 1 << 2;
    }
}

impl Parts {
    /// The component a single ncode byte fills. Fillers and non-jamo codes
    /// fill none.
    pub fn of(code: u8) -> Option<Self> {
        match classify(code) {
            NcodeClass::Initial(_) => Some(Self::INITIAL),
            NcodeClass::Vowel(_) => Some(Self::VOWEL),
            NcodeClass::Final(_) => Some(Self::FINAL),
            _ => None,
        }
    }

    /// Position of the lowest set component: initial 0, vowel 1, final 2.
    pub fn slot(self) -> usize {
        self.bits().trailing_zeros() as usize
    }
}

/// Ncode bytes for one codepoint: between one and three bytes, inline.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NcodeSeq {
    bytes: [u8; 3],
    len: u8,
}

impl NcodeSeq {
    fn one(a: u8) -> Self {
        Self {
            bytes: [a, 0, 0],
            len: 1,
        }
    }

    fn two(a: u8, b: u8) -> Self {
        Self {
            bytes: [a, b, 0],
            len: 2,
        }
    }

    fn three(a: u8, b: u8, c: u8) -> Self {
        Self {
            bytes: [a, b, c],
            len: 3,
        }
    }

    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Real components in this sequence, fillers excluded.
    pub fn parts(&self) -> Parts {
        self.components().fold(Parts::empty(), |parts, (part, _)| parts | part)
    }

    /// Each real component with the code that fills it, in encoded order
    /// (initial, vowel, final).
    pub fn components(&self) -> impl Iterator<Item = (Parts, u8)> + '_ {
        self.iter()
            .filter_map(|&code| Parts::of(code).map(|part| (part, code)))
    }
}

impl Deref for NcodeSeq {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for NcodeSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NcodeSeq({:02x?})", self.as_bytes())
    }
}

/// A composed syllable split into its component indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// Initial consonant index, `0..19`.
    pub initial: u8,
    /// Vowel index, `0..21`.
    pub vowel: u8,
    /// Final consonant index, `0..28`. Zero means no final consonant.
    pub final_index: u8,
}

impl Syllable {
    /// Split a composed syllable. `None` outside U+AC00..=U+D7A3.
    pub fn from_codepoint(codepoint: u32) -> Option<Self> {
        if !is_syllable(codepoint) {
            return None;
        }
        let u = codepoint - SYLLABLE_FIRST;
        Some(Self {
            initial: (u / PER_INITIAL) as u8,
            vowel: (u % PER_INITIAL / PER_VOWEL) as u8,
            final_index: (u % PER_VOWEL) as u8,
        })
    }

    /// Rebuild a syllable from ncode component codes.
    ///
    /// Accepts `ch ju` or `ch ju jo`; anything else (fillers, wrong
    /// order, extra bytes) is `None`.
    pub fn from_codes(codes: &[u8]) -> Option<Self> {
        let (initial, vowel, final_index) = match *codes {
            [ch, ju] => (ch, ju, None),
            [ch, ju, jo] => (ch, ju, Some(jo)),
            _ => return None,
        };
        let NcodeClass::Initial(initial) = classify(initial) else {
            return None;
        };
        let NcodeClass::Vowel(vowel) = classify(vowel) else {
            return None;
        };
        let final_index = match final_index.map(classify) {
            None => 0,
            Some(NcodeClass::Final(index)) => index,
            Some(_) => return None,
        };
        Some(Self {
            initial,
            vowel,
            final_index,
        })
    }

    /// The Unicode codepoint of this syllable.
    pub fn to_codepoint(self) -> u32 {
        SYLLABLE_FIRST
            + u32::from(self.initial) * PER_INITIAL
            + u32::from(self.vowel) * PER_VOWEL
            + u32::from(self.final_index)
    }

    /// Returns `true` if the syllable carries a final consonant.
    pub fn has_final(self) -> bool {
        self.final_index != 0
    }

    /// Ncode component codes: two bytes, or three with a final consonant.
    pub fn codes(self) -> NcodeSeq {
        let ch = INITIAL_FIRST + self.initial;
        let ju = VOWEL_FIRST + self.vowel;
        if self.has_final() {
            NcodeSeq::three(ch, ju, FINAL_FIRST + self.final_index - 1)
        } else {
            NcodeSeq::two(ch, ju)
        }
    }
}

fn jamo_codes(codepoint: u32) -> Option<NcodeSeq> {
    let offset_in = |first: u32, count: u8| {
        codepoint
            .checked_sub(first)
            .filter(|&off| off < u32::from(count))
            .map(|off| off as u8)
    };
    if let Some(i) = offset_in(JAMO_INITIAL_FIRST, INITIAL_COUNT) {
        return Some(NcodeSeq::one(INITIAL_FIRST + i));
    }
    if let Some(i) = offset_in(JAMO_VOWEL_FIRST, VOWEL_COUNT) {
        return Some(NcodeSeq::two(INITIAL_FILL, VOWEL_FIRST + i));
    }
    offset_in(JAMO_FINAL_FIRST, FINAL_COUNT)
        .map(|i| NcodeSeq::three(INITIAL_FILL, VOWEL_FILL, FINAL_FIRST + i))
}

/// Encode one codepoint to ncode.
///
/// ASCII 0x01..=0x7F passes through. Anything without an ncode form
/// becomes [`PLACEHOLDER`].
pub fn encode(codepoint: u32) -> NcodeSeq {
    if let Some(syllable) = Syllable::from_codepoint(codepoint) {
        return syllable.codes();
    }
    if let Some(seq) = jamo_codes(codepoint) {
        return seq;
    }
    match u8::try_from(codepoint) {
        Ok(b @ 0x01..=0x7F) => NcodeSeq::one(b),
        _ => NcodeSeq::one(PLACEHOLDER),
    }
}

/// Encode a UTF-8 string into `buf`, NUL-terminated.
///
/// One byte is always kept for the terminator. Encoding stops at the
/// first character whose codes would not fit; a character is never split.
/// Returns the number of ncode bytes written, terminator excluded.
pub fn encode_str_into(text: &[u8], buf: &mut [u8]) -> usize {
    let Some(limit) = buf.len().checked_sub(1) else {
        return 0;
    };
    let mut len = 0;
    for c in codepoints(text) {
        let seq = encode(c.codepoint);
        let end = len + seq.len();
        if end > limit {
            log::trace!("ncode buffer full at byte {} of input", c.offset);
            break;
        }
        buf[len..end].copy_from_slice(&seq);
        len = end;
    }
    buf[len] = 0;
    len
}

/// Encode a UTF-8 string to ncode with no length bound.
pub fn encode_str(text: &[u8]) -> Vec<u8> {
    codepoints(text)
        .flat_map(|c| {
            let seq = encode(c.codepoint);
            (0..seq.len()).map(move |i| seq[i])
        })
        .collect()
}

#[cfg(test)]
mod tests;
