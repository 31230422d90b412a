// MIT/Apache2 License

use std::fmt;

/// Sum error type for turtleboard operations.
///
/// Drawing policy never produces an error: moves shorter than half a pixel, points that land outside of
/// the canvas and `goto` calls to the current position all succeed without writing anything. Errors only
/// come from the [`Canvas`] the turtle is drawing on.
///
/// [`Canvas`]: crate::Canvas
#[derive(Debug)]
pub enum Error {
    /// A static string message.
    StaticMsg(&'static str),
    /// A string message.
    Msg(String),
    /// A pixel write landed outside of the buffer.
    PixelOutOfBounds { col: u32, row: u32 },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::Msg(s) => f.write_str(s),
            Self::PixelOutOfBounds { col, row } => {
                write!(f, "Pixel at column {}, row {} is outside of the canvas", col, row)
            }
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
