//! Terminal output encoder.
//!
//! Renders a bitmap as text for quick inspection, one character per pixel.

use crate::bitmap::Bitmap;

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    on: char,
    off: char,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Create a new terminal encoder with the default `#`/`.` glyphs.
    #[must_use]
    pub fn new() -> Self {
        Self { on: '#', off: '.' }
    }

    /// Set the glyphs used for set and unset pixels.
    #[must_use]
    pub fn glyphs(mut self, on: char, off: char) -> Self {
        self.on = on;
        self.off = off;
        self
    }

    /// Render a bitmap to a string, one line per row.
    #[must_use]
    pub fn render(&self, bitmap: &Bitmap) -> String {
        let width = bitmap.width() as usize;
        let mut out = String::with_capacity((width + 1) * bitmap.height() as usize);

        for y in 0..bitmap.height() {
            for x in 0..bitmap.width() {
                let on = bitmap.get_pixel(x as i32, y as i32) == Some(true);
                out.push(if on { self.on } else { self.off });
            }
            out.push('\n');
        }

        out
    }
}
