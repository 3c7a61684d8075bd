//! Lenient UTF-8 decoding over NUL-terminated byte strings.
//!
//! Text handed to the renderer usually comes straight out of firmware
//! buffers, so decoding never fails. A bad lead byte comes out as its raw
//! value, and a truncated sequence yields whatever bits were gathered
//! before the break. Either way the scan moves forward and the next
//! character is unaffected.

/// Result of decoding one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded codepoint (or raw byte value for malformed input).
    pub codepoint: u32,
    /// Number of bytes consumed. Zero means end of string.
    pub len: usize,
}

/// Number of bytes a lead byte announces, with the payload bits it carries.
///
/// Returns `None` for bytes that cannot start a sequence (stray
/// continuation bytes and `0xF8..=0xFF`).
fn lead(b: u8) -> Option<(usize, u32)> {
    if b & 0x80 == 0x00 {
        Some((1, u32::from(b & 0x7F)))
    } else if b & 0xE0 == 0xC0 {
        Some((2, u32::from(b & 0x1F)))
    } else if b & 0xF0 == 0xE0 {
        Some((3, u32::from(b & 0x0F)))
    } else if b & 0xF8 == 0xF0 {
        Some((4, u32::from(b & 0x07)))
    } else {
        None
    }
}

/// Decode one codepoint from `bytes` starting at `cursor`.
///
/// The string ends at the first NUL byte or at the end of the slice,
/// whichever comes first. At the end, `len` is 0: callers advance the
/// cursor by `len` until they see 0.
pub fn decode_codepoint(bytes: &[u8], cursor: usize) -> Decoded {
    let rest = bytes.get(cursor..).unwrap_or_default();
    let Some(&first) = rest.first().filter(|&&b| b != 0) else {
        return Decoded { codepoint: 0, len: 0 };
    };

    let Some((want, mut codepoint)) = lead(first) else {
        return Decoded {
            codepoint: u32::from(first),
            len: 1,
        };
    };

    let mut len = 1;
    while len < want {
        match rest.get(len) {
            Some(&b) if b != 0 && b & 0xC0 == 0x80 => {
                codepoint = (codepoint << 6) | u32::from(b & 0x3F);
                len += 1;
            }
            _ => break,
        }
    }

    Decoded { codepoint, len }
}

/// One step of a [`Codepoints`] walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointAt {
    /// Byte offset of the first byte of this character.
    pub offset: usize,
    /// Decoded codepoint.
    pub codepoint: u32,
    /// Number of bytes the character occupies.
    pub len: usize,
}

/// Lazy iterator over the codepoints of a NUL-terminated byte string.
///
/// A clone continues from the current position. Call [`codepoints`]
/// again to restart from the top.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> Codepoints<'a> {
    /// Iterate `bytes` from offset 0.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }
}

impl Iterator for Codepoints<'_> {
    type Item = CodepointAt;

    fn next(&mut self) -> Option<CodepointAt> {
        let Decoded { codepoint, len } = decode_codepoint(self.bytes, self.cursor);
        if len == 0 {
            return None;
        }
        let offset = self.cursor;
        self.cursor += len;
        Some(CodepointAt {
            offset,
            codepoint,
            len,
        })
    }
}

/// Iterate the codepoints of `bytes`.
pub fn codepoints(bytes: &[u8]) -> Codepoints<'_> {
    Codepoints::new(bytes)
}
