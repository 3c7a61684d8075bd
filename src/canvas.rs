//! In-memory monochrome canvas.
//!
//! Stands in for an OLED frame buffer: a fixed grid of on/off pixels that
//! the renderer draws into, printable as text rows or a PBM image.

use ncode_core::PixelSurface;

/// Fixed-size 1-bit pixel buffer. Writes outside the canvas are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl Canvas {
    /// Create a blank `width` x `height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Rows of pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Render as text, one line per row.
    pub fn to_text(&self, on: char, off: char) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|&p| if p { on } else { off }));
            out.push('\n');
        }
        out
    }

    /// Render as text, dropping blank rows above and below the ink.
    pub fn to_text_trimmed(&self, on: char, off: char) -> String {
        let rows: Vec<&[bool]> = self.rows().collect();
        let inked = |row: &&[bool]| row.iter().any(|&p| p);
        let Some(first) = rows.iter().position(inked) else {
            return String::new();
        };
        let last = rows.iter().rposition(inked).unwrap_or(first);
        let mut out = String::new();
        for row in &rows[first..=last] {
            out.extend(row.iter().map(|&p| if p { on } else { off }));
            out.push('\n');
        }
        out
    }

    /// Render as a plain (P1) PBM image.
    pub fn to_pbm(&self) -> String {
        let mut out = format!("P1\n{} {}\n", self.width, self.height);
        for row in self.rows() {
            let line: Vec<&str> = row.iter().map(|&p| if p { "1" } else { "0" }).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}

impl PixelSurface for Canvas {
    fn set_pixel(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = true;
        }
    }
}
