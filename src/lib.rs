// MIT/Apache2 License

//! A turtle that draws on a pixel canvas.
//!
//! A [`Turtle`] is a point with a heading. Moving it with [`Turtle::forward`], [`Turtle::goto`] or
//! [`Turtle::circle`] rasterizes the path it takes into individual pixel writes on a [`Canvas`]. The
//! crate ships an in-memory [`PixelBuffer`] canvas and an [`Animated`] adapter; anything that can show
//! pixels on screen can implement [`Canvas`] itself.
//!
//! ```
//! use turtleboard::{position, CanvasSize, Color, PixelBuffer, Turtle};
//!
//! let mut buffer = PixelBuffer::new(CanvasSize::new(400, 500));
//! let mut turtle = Turtle::with_defaults(&mut buffer)?;
//!
//! turtle.forward(50.0)?;
//! turtle.right(90.0);
//! turtle.circle(-20.0, 180.0)?;
//! turtle.goto(position(0.0, 0.0))?;
//! assert_eq!(turtle.heading(), -90.0 - 180.0 + 360.0);
//!
//! assert_eq!(buffer.pixel(250, 150), Some(Color::WHITE));
//! # Ok::<(), turtleboard::Error>(())
//! ```

mod error;

pub mod canvas;
pub mod color;
pub mod config;
pub mod geometry;
pub mod intensity;
pub mod raster;
pub mod turtle;

pub(crate) mod util;

pub use canvas::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use geometry::{position, CanvasSize, Offset, Pixel, Position};
pub use intensity::*;
pub use turtle::*;
