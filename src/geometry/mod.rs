// MIT/Apache2 License

mod angle;

pub use angle::*;

use crate::util::round_even;

/// A position in turtle space: the origin sits at the center of the canvas and the Y axis points up.
pub type Position = lyon_geom::Point<f64>;

/// A displacement in turtle space.
pub type Offset = lyon_geom::Vector<f64>;

/// Create a [`Position`].
#[inline]
pub fn position(x: f64, y: f64) -> Position {
    lyon_geom::point(x, y)
}

/// The index of a pixel in the canvas buffer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pixel {
    /// Column, counted from the left edge.
    pub col: u32,
    /// Row, counted from the top edge.
    pub row: u32,
}

/// The size of a canvas in pixels.
///
/// The buffer behind a canvas is `width` rows tall and `height` columns wide: `width` bounds the turtle's
/// Y axis and `height` bounds its X axis. A turtle on a `400 x 500` canvas can therefore roam 250 pixels
/// left and right of the origin, but only 200 up and down.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> CanvasSize {
        CanvasSize { width, height }
    }

    /// Number of pixel rows in the buffer.
    #[inline]
    pub fn rows(self) -> u32 {
        self.width
    }

    /// Number of pixel columns in the buffer.
    #[inline]
    pub fn cols(self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Map a turtle-space point onto the pixel it covers, or `None` if it is not on the canvas.
    ///
    /// A point is on the canvas when its rounded coordinates lie strictly inside the half extents,
    /// `-height/2 < x < height/2` and `-width/2 < y < width/2`. It then maps to
    /// `(round(x + height/2), round(-y + width/2))`. With odd extents that mapping can still reach one
    /// past the last index, so those points are rejected as well.
    #[inline]
    pub fn to_pixel(self, point: Position) -> Option<Pixel> {
        let half_x = f64::from(self.height) / 2.0;
        let half_y = f64::from(self.width) / 2.0;

        let (x, y) = (round_even(point.x), round_even(point.y));
        if !(-half_x < x && x < half_x && -half_y < y && y < half_y) {
            return None;
        }

        let col = round_even(point.x + half_x);
        let row = round_even(-point.y + half_y);
        if col < 0.0 || row < 0.0 || col >= f64::from(self.height) || row >= f64::from(self.width) {
            return None;
        }

        Some(Pixel {
            col: col as u32,
            row: row as u32,
        })
    }
}
