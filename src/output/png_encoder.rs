//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. The bitmap serializes as
//! 1-bit grayscale with drawn pixels black on a white background, so the
//! packed row layout of [`Bitmap`] maps directly onto PNG scanlines.

use crate::bitmap::Bitmap;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for bitmap output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a bitmap to a writer as a 1-bit grayscale PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding or writing fails.
    pub fn write<W: Write>(bitmap: &Bitmap, out: W) -> Result<()> {
        let mut encoder = png::Encoder::new(out, bitmap.width(), bitmap.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::One);

        // Ink bits are 1 in the bitmap; grayscale 1 is white, so invert
        let inverted: Vec<u8> = bitmap.as_bytes().iter().map(|&b| !b).collect();

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&inverted)?;

        Ok(())
    }

    /// Write a bitmap to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::write(bitmap, BufWriter::new(file))
    }

    /// Encode a bitmap to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(bitmap: &Bitmap) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::write(bitmap, &mut buffer)?;
        Ok(buffer)
    }
}
