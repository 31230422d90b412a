// MIT/Apache2 License

use super::Canvas;
use crate::{CanvasSize, Color};
use std::time::Duration;

/// How long each intermediate frame stays up.
const FRAME: Duration = Duration::from_millis(1);

/// A `Canvas` adapter that lets the watcher see the turtle move.
///
/// While a speed is set, every pixel write bumps a counter. Once the counter has grown past the speed, the
/// inner canvas is presented for a single millisecond and the counter starts over, so a speed of `0` shows
/// a frame every other pixel and larger speeds show frames less often. Without a speed the adapter is
/// transparent.
#[derive(Debug)]
pub struct Animated<C> {
    inner: C,
    speed: Option<u32>,
    counter: u32,
}

impl<C: Canvas> Animated<C> {
    #[inline]
    pub fn new(inner: C, speed: Option<u32>) -> Animated<C> {
        Animated {
            inner,
            speed,
            counter: 0,
        }
    }

    /// The current animation speed.
    #[inline]
    pub fn speed(&self) -> Option<u32> {
        self.speed
    }

    #[inline]
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Canvas> Canvas for Animated<C> {
    #[inline]
    fn size(&self) -> CanvasSize {
        self.inner.size()
    }

    #[inline]
    fn write_pixel(&mut self, col: u32, row: u32, color: Color) -> crate::Result {
        self.inner.write_pixel(col, row, color)?;

        if let Some(speed) = self.speed {
            if self.counter > speed {
                self.inner.present(Some(FRAME))?;
                self.counter = 0;
            } else {
                self.counter += 1;
            }
        }

        Ok(())
    }

    #[inline]
    fn clear(&mut self, background: Color) -> crate::Result {
        self.inner.clear(background)
    }

    #[inline]
    fn present(&mut self, wait: Option<Duration>) -> crate::Result {
        self.inner.present(wait)
    }

    #[inline]
    fn set_color(&mut self, color: Color) -> crate::Result {
        self.inner.set_color(color)
    }

    #[inline]
    fn set_speed(&mut self, speed: Option<u32>) -> crate::Result {
        log::debug!("Animation speed set to {:?}", speed);
        self.speed = speed;
        self.counter = 0;
        self.inner.set_speed(speed)
    }
}
