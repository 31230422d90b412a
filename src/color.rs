// MIT/Apache2 License

use crate::intensity::Intensity;

/// A three-element color. Every channel is a value between zero and one.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: Intensity,
    g: Intensity,
    b: Intensity,
}

impl Color {
    pub const WHITE: Color = unsafe { Color::new_unchecked(1.0, 1.0, 1.0) };
    pub const BLACK: Color = unsafe { Color::new_unchecked(0.0, 0.0, 0.0) };
    pub const RED: Color = unsafe { Color::new_unchecked(1.0, 0.0, 0.0) };
    pub const GREEN: Color = unsafe { Color::new_unchecked(0.0, 1.0, 0.0) };
    pub const BLUE: Color = unsafe { Color::new_unchecked(0.0, 0.0, 1.0) };

    /// Create a new color.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if any of the elements are NaN or outside of the range [0, 1].
    #[allow(unused_unsafe)]
    #[inline]
    pub const unsafe fn new_unchecked(r: f32, g: f32, b: f32) -> Self {
        unsafe {
            Self {
                r: Intensity::new_unchecked(r),
                g: Intensity::new_unchecked(g),
                b: Intensity::new_unchecked(b),
            }
        }
    }

    /// Creates a new color. This function returns `None` if any of the elements are NaN or outside of the
    /// range [0, 1].
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Option<Self> {
        Some(Self {
            r: Intensity::new(r)?,
            g: Intensity::new(g)?,
            b: Intensity::new(b)?,
        })
    }

    /// Gets the red element.
    #[inline]
    pub fn red(self) -> f32 {
        self.r.into_inner()
    }

    /// Gets the green element.
    #[inline]
    pub fn green(self) -> f32 {
        self.g.into_inner()
    }

    /// Gets the blue element.
    #[inline]
    pub fn blue(self) -> f32 {
        self.b.into_inner()
    }

    /// Clamp to u8's.
    #[inline]
    pub fn clamp_u8(self) -> (u8, u8, u8) {
        (self.r.clamp_u8(), self.g.clamp_u8(), self.b.clamp_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels() {
        let c = Color::new(0.2, 0.4, 1.0).unwrap();
        assert_eq!(c.red(), 0.2);
        assert_eq!(c.green(), 0.4);
        assert_eq!(c.blue(), 1.0);
        assert_eq!(Color::WHITE.clamp_u8(), (255, 255, 255));
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn invalid_channels() {
        assert!(Color::new(1.5, 0.0, 0.0).is_none());
        assert!(Color::new(0.0, f32::NAN, 0.0).is_none());
        assert!(Color::new(0.0, 0.0, -1.0).is_none());
    }
}
