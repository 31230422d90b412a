// MIT/Apache2 License

use super::Canvas;
use crate::{CanvasSize, Color, Error};
use std::time::Duration;

/// A canvas that lives entirely in memory.
///
/// Pixels are stored row by row; the buffer is `size.rows()` rows of `size.cols()` colors each. Nothing is
/// ever shown on screen: `present` only logs and counts how often it was asked, which makes the buffer the
/// natural canvas for headless drawing and for inspecting what a turtle drew.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: CanvasSize,
    pixels: Vec<Color>,
    color: Color,
    presented: usize,
}

impl PixelBuffer {
    /// Create a new buffer, filled with black.
    #[inline]
    pub fn new(size: CanvasSize) -> PixelBuffer {
        PixelBuffer {
            size,
            pixels: vec![Color::BLACK; size.area()],
            color: Color::WHITE,
            presented: 0,
        }
    }

    #[inline]
    fn index(&self, col: u32, row: u32) -> Option<usize> {
        if col < self.size.cols() && row < self.size.rows() {
            Some(row as usize * self.size.cols() as usize + col as usize)
        } else {
            None
        }
    }

    /// Get the color of a pixel, or `None` if the index is outside of the buffer.
    #[inline]
    pub fn pixel(&self, col: u32, row: u32) -> Option<Color> {
        self.index(col, row).map(|i| self.pixels[i])
    }

    /// Iterate over the rows of the buffer, top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks(self.size.cols().max(1) as usize)
    }

    /// Count the pixels that currently hold the given color.
    #[inline]
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|c| **c == color).count()
    }

    /// The last color hint passed through `set_color`.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// How many times this buffer has been presented.
    #[inline]
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl Canvas for PixelBuffer {
    #[inline]
    fn size(&self) -> CanvasSize {
        self.size
    }

    #[inline]
    fn write_pixel(&mut self, col: u32, row: u32, color: Color) -> crate::Result {
        let i = self
            .index(col, row)
            .ok_or(Error::PixelOutOfBounds { col, row })?;
        self.pixels[i] = color;
        Ok(())
    }

    #[inline]
    fn clear(&mut self, background: Color) -> crate::Result {
        self.pixels.iter_mut().for_each(|p| *p = background);
        Ok(())
    }

    #[inline]
    fn present(&mut self, wait: Option<Duration>) -> crate::Result {
        self.presented += 1;
        log::debug!(
            "Presenting {}x{} pixel buffer (wait: {:?})",
            self.size.width,
            self.size.height,
            wait
        );
        Ok(())
    }

    #[inline]
    fn set_color(&mut self, color: Color) -> crate::Result {
        self.color = color;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_read_back() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(3, 4));
        assert_eq!(buffer.count(Color::BLACK), 12);

        buffer.write_pixel(3, 2, Color::RED).unwrap();
        assert_eq!(buffer.pixel(3, 2), Some(Color::RED));
        assert_eq!(buffer.rows().count(), 3);
        assert_eq!(buffer.rows().nth(2).unwrap()[3], Color::RED);
        assert_eq!(buffer.count(Color::RED), 1);
    }

    #[test]
    fn out_of_bounds_write_is_an_error() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(3, 4));
        assert!(matches!(
            buffer.write_pixel(4, 0, Color::RED),
            Err(Error::PixelOutOfBounds { col: 4, row: 0 })
        ));
        assert!(buffer.write_pixel(0, 3, Color::RED).is_err());
        assert_eq!(buffer.pixel(0, 3), None);
    }

    #[test]
    fn clear_fills_everything() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(2, 2));
        buffer.write_pixel(1, 1, Color::RED).unwrap();
        buffer.clear(Color::BLUE).unwrap();
        assert_eq!(buffer.count(Color::BLUE), 4);
    }

    #[test]
    fn present_is_counted() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(2, 2));
        buffer.present(None).unwrap();
        buffer.present(Some(Duration::from_millis(1))).unwrap();
        assert_eq!(buffer.presented(), 2);
    }
}
