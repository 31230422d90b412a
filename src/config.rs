// MIT/Apache2 License

use crate::Color;

/// Settings a [`Turtle`] starts out with.
///
/// [`Turtle`]: crate::Turtle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TurtleConfig {
    /// The turtle's name. Canvases that open a window use it as the title.
    pub name: String,
    /// The color the canvas is cleared to, and the color a lifted pen draws with.
    pub background: Color,
    /// The color the turtle draws with.
    pub pen_color: Color,
    /// Animation speed handed to the canvas; `None` only shows the result when asked.
    pub speed: Option<u32>,
}

impl Default for TurtleConfig {
    #[inline]
    fn default() -> TurtleConfig {
        TurtleConfig {
            name: String::from("Turtle"),
            background: Color::BLACK,
            pen_color: Color::WHITE,
            speed: None,
        }
    }
}

impl TurtleConfig {
    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> TurtleConfig {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn with_background(mut self, background: Color) -> TurtleConfig {
        self.background = background;
        self
    }

    #[inline]
    pub fn with_pen_color(mut self, pen_color: Color) -> TurtleConfig {
        self.pen_color = pen_color;
        self
    }

    #[inline]
    pub fn with_speed(mut self, speed: Option<u32>) -> TurtleConfig {
        self.speed = speed;
        self
    }
}
