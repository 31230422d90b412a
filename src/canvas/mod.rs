// MIT/Apache2 License

use crate::{CanvasSize, Color};
use std::time::Duration;

/// Wraps a `Canvas` and presents it every few pixels.
mod animated;
/// Provides the in-memory `PixelBuffer`.
mod buffer;
/// Implements `Canvas` on `&mut Canvas`.
mod mut_impl;

pub use animated::Animated;
pub use buffer::PixelBuffer;

/// Something a turtle can draw on.
///
/// `Canvas`es are usually windows or in-memory buffers of pixels. The turtle does all of the geometry
/// itself; by the time it reaches the `Canvas`, a line has already been broken down into individual
/// pixels, and pixels that would fall outside of the canvas have already been dropped. A `Canvas`
/// therefore only has to be capable of the following:
///
/// * Reporting its [`CanvasSize`]. The size must not change while a turtle is drawing on the canvas.
/// * Writing a single pixel at a `(col, row)` index, counted from the top left corner.
/// * Resetting every pixel to a background color.
/// * Presenting what has been drawn so far, either for a while or until whoever is watching dismisses it.
///
/// Two presentation hints, `set_color` and `set_speed`, are passed along as well. They never affect
/// which pixels get written and default to doing nothing.
pub trait Canvas {
    /// The size of this canvas.
    fn size(&self) -> CanvasSize;

    /// Write one pixel.
    ///
    /// The caller is responsible for keeping `col` and `row` inside of the canvas.
    fn write_pixel(&mut self, col: u32, row: u32, color: Color) -> crate::Result;

    /// Reset every pixel to the background color.
    fn clear(&mut self, background: Color) -> crate::Result;

    /// Show the canvas.
    ///
    /// With `Some(wait)` the canvas stays up for at least `wait`; with `None` this blocks until the
    /// presentation is dismissed.
    fn present(&mut self, wait: Option<Duration>) -> crate::Result;

    /// The color the turtle is drawing with from now on.
    #[inline]
    fn set_color(&mut self, color: Color) -> crate::Result {
        let _ = color;
        Ok(())
    }

    /// How often an animating canvas should present itself, or `None` to stop animating.
    #[inline]
    fn set_speed(&mut self, speed: Option<u32>) -> crate::Result {
        let _ = speed;
        Ok(())
    }
}
