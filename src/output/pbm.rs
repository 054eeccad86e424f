//! Plain-text PBM (P1) output encoder.
//!
//! The plain variant of the netpbm bitmap format: the magic `P1`, the
//! width and the height each on their own line, then one line per row with
//! one ASCII `0`/`1` digit per pixel and no separators between digits.

use crate::bitmap::Bitmap;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PBM encoder for bitmap output.
pub struct PbmEncoder;

impl PbmEncoder {
    /// Write a bitmap to a writer in plain PBM format.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write<W: Write>(bitmap: &Bitmap, mut out: W) -> Result<()> {
        write!(out, "P1\n{}\n{}\n", bitmap.width(), bitmap.height())?;

        let mut line = String::with_capacity(bitmap.width() as usize + 1);
        for y in 0..bitmap.height() {
            line.clear();
            for x in 0..bitmap.width() {
                let on = bitmap.get_pixel(x as i32, y as i32) == Some(true);
                line.push(if on { '1' } else { '0' });
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }

        Ok(())
    }

    /// Write a bitmap to a PBM file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or writing fails.
    pub fn write_to_file<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::write(bitmap, BufWriter::new(file))
    }

    /// Encode a bitmap to an in-memory PBM string.
    #[must_use]
    pub fn encode_to_string(bitmap: &Bitmap) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = Self::write(bitmap, &mut buffer);
        String::from_utf8(buffer).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_surface_serialization() {
        let bmp = Bitmap::new(8, 1).unwrap();
        assert_eq!(PbmEncoder::encode_to_string(&bmp), "P1\n8\n1\n00000000\n");
    }

    #[test]
    fn test_single_pixel() {
        let mut bmp = Bitmap::new(4, 2).unwrap();
        bmp.set_pixel(2, 1);
        assert_eq!(PbmEncoder::encode_to_string(&bmp), "P1\n4\n2\n0000\n0010\n");
    }

    #[test]
    fn test_non_byte_aligned_width() {
        let mut bmp = Bitmap::new(10, 1).unwrap();
        bmp.set_pixel(9, 0);
        assert_eq!(PbmEncoder::encode_to_string(&bmp), "P1\n10\n1\n0000000001\n");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pbm");

        let mut bmp = Bitmap::new(3, 3).unwrap();
        bmp.set_pixel(1, 1);
        PbmEncoder::write_to_file(&bmp, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "P1\n3\n3\n000\n010\n000\n");
    }
}
