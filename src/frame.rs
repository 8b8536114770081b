//! # Monochrome Frame Buffer
//!
//! An in-memory 1-bit canvas sized at runtime from the `[display]` settings.
//! The chart renderer draws into it like any other `embedded-graphics`
//! target, and the result can be written out as a binary PBM (`P4`) image.
//!
//! Memory layout matches the PBM raster: rows of `(width + 7) / 8` bytes,
//! most significant bit first, bit set = ink.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};
use std::convert::Infallible;
use std::fs;
use std::io;
use std::path::Path;

/// A `width × height` 1-bit drawing surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// Create a blank frame.
    pub fn new(width: u32, height: u32) -> Self {
        let bytes_per_row = width.div_ceil(8);
        Self {
            width,
            height,
            pixels: vec![0x00; (bytes_per_row * height) as usize],
        }
    }

    fn bytes_per_row(&self) -> u32 {
        self.width.div_ceil(8)
    }

    /// Set one pixel. Coordinates outside the frame are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }

        let byte_index = (y * self.bytes_per_row() + x / 8) as usize;
        let bit_mask = 0x80 >> (x % 8);
        if on {
            self.pixels[byte_index] |= bit_mask;
        } else {
            self.pixels[byte_index] &= !bit_mask;
        }
    }

    /// Whether a pixel is inked; `false` outside the frame.
    pub fn get_pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte_index = (y * self.bytes_per_row() + x / 8) as usize;
        self.pixels[byte_index] & (0x80 >> (x % 8)) != 0
    }

    /// Number of inked pixels.
    pub fn lit_pixels(&self) -> u32 {
        self.pixels.iter().map(|b| b.count_ones()).sum()
    }

    /// Encode as a binary PBM image.
    pub fn to_pbm(&self) -> Vec<u8> {
        let mut out = format!("P4\n{} {}\n", self.width, self.height).into_bytes();
        out.extend_from_slice(&self.pixels);
        out
    }

    /// Write the frame to `path` as PBM.
    pub fn save_pbm<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(&path, self.to_pbm())?;
        tracing::info!(
            path = %path.as_ref().display(),
            width = self.width,
            height = self.height,
            "frame written"
        );
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color.is_on());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};
    use tempfile::NamedTempFile;

    #[test]
    fn test_new_frame_is_blank() {
        let frame = FrameBuffer::new(10, 3);
        assert_eq!(frame.size(), Size::new(10, 3));
        assert_eq!(frame.lit_pixels(), 0);
        // 10 pixels per row round up to 2 bytes
        assert_eq!(frame.to_pbm().len(), "P4\n10 3\n".len() + 6);
    }

    #[test]
    fn test_set_and_clear_pixel() {
        let mut frame = FrameBuffer::new(16, 16);
        frame.set_pixel(9, 4, true);
        assert!(frame.get_pixel(9, 4));
        assert!(!frame.get_pixel(8, 4));
        frame.set_pixel(9, 4, false);
        assert_eq!(frame.lit_pixels(), 0);
    }

    #[test]
    fn test_drawing_is_clipped_to_frame() {
        let mut frame = FrameBuffer::new(8, 8);
        Line::new(Point::new(-5, 2), Point::new(20, 2))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut frame)
            .unwrap();

        assert_eq!(frame.lit_pixels(), 8);
        assert!(!frame.get_pixel(8, 2));
    }

    #[test]
    fn test_pbm_layout() {
        let mut frame = FrameBuffer::new(9, 2);
        frame.set_pixel(0, 0, true);
        frame.set_pixel(8, 1, true);

        let pbm = frame.to_pbm();
        let header = b"P4\n9 2\n";
        assert_eq!(&pbm[..header.len()], header);
        assert_eq!(&pbm[header.len()..], &[0x80, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn test_save_pbm() {
        let temp_file = NamedTempFile::new().unwrap();
        let frame = FrameBuffer::new(4, 4);
        frame.save_pbm(temp_file.path()).unwrap();
        assert_eq!(fs::read(temp_file.path()).unwrap(), frame.to_pbm());
    }
}
