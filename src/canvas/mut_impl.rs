// MIT/Apache2 License

use super::Canvas;
use crate::{CanvasSize, Color};
use std::time::Duration;

impl<C: Canvas + ?Sized> Canvas for &mut C {
    #[inline]
    fn size(&self) -> CanvasSize {
        (**self).size()
    }
    #[inline]
    fn write_pixel(&mut self, col: u32, row: u32, color: Color) -> crate::Result {
        (**self).write_pixel(col, row, color)
    }
    #[inline]
    fn clear(&mut self, background: Color) -> crate::Result {
        (**self).clear(background)
    }
    #[inline]
    fn present(&mut self, wait: Option<Duration>) -> crate::Result {
        (**self).present(wait)
    }
    #[inline]
    fn set_color(&mut self, color: Color) -> crate::Result {
        (**self).set_color(color)
    }
    #[inline]
    fn set_speed(&mut self, speed: Option<u32>) -> crate::Result {
        (**self).set_speed(speed)
    }
}

impl<C: Canvas + ?Sized> Canvas for Box<C> {
    #[inline]
    fn size(&self) -> CanvasSize {
        (**self).size()
    }
    #[inline]
    fn write_pixel(&mut self, col: u32, row: u32, color: Color) -> crate::Result {
        (**self).write_pixel(col, row, color)
    }
    #[inline]
    fn clear(&mut self, background: Color) -> crate::Result {
        (**self).clear(background)
    }
    #[inline]
    fn present(&mut self, wait: Option<Duration>) -> crate::Result {
        (**self).present(wait)
    }
    #[inline]
    fn set_color(&mut self, color: Color) -> crate::Result {
        (**self).set_color(color)
    }
    #[inline]
    fn set_speed(&mut self, speed: Option<u32>) -> crate::Result {
        (**self).set_speed(speed)
    }
}
