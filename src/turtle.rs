// MIT/Apache2 License

use crate::{
    geometry::{atan2_deg, cos_deg, normalize_heading, position, sign, sin_deg},
    raster::Trace,
    Canvas, CanvasSize, Color, Offset, Position, TurtleConfig,
};

/// A headed point that draws on a [`Canvas`] as it moves.
///
/// The turtle lives in canvas-centered coordinates: the origin is the middle of the canvas and the Y axis
/// points up. Its heading is kept in degrees in `(-180, 180]`; a heading of `0` faces up, and positive
/// angles turn counterclockwise, so a heading of `90` faces left.
///
/// The turtle itself is never confined to the canvas. It can wander off and come back; only the pixels
/// it would draw off of the canvas are dropped.
///
/// Moving the turtle breaks its path down into individual pixel writes. None of the drawing policies are
/// errors: a move shorter than half a pixel does nothing, points off of the canvas are skipped, and a
/// `goto` to where the turtle already is draws nothing. The only errors come from the canvas.
///
/// The canvas is whatever `C` the caller hands in. Pass `&mut canvas` to keep ownership of it.
#[derive(Debug)]
pub struct Turtle<C> {
    canvas: C,
    name: String,
    size: CanvasSize,
    position: Position,
    heading: f64,
    pen_color: Color,
    background: Color,
    ink: Color,
    pen_down: bool,
}

impl<C: Canvas> Turtle<C> {
    /// Put a new turtle at the center of `canvas`, facing up.
    ///
    /// The canvas is told the animation speed, cleared to the background color, and told the pen color.
    #[inline]
    pub fn new(mut canvas: C, config: TurtleConfig) -> crate::Result<Turtle<C>> {
        let TurtleConfig {
            name,
            background,
            pen_color,
            speed,
        } = config;
        let size = canvas.size();

        canvas.set_speed(speed)?;
        canvas.clear(background)?;
        canvas.set_color(pen_color)?;

        log::debug!(
            "Created turtle \"{}\" on a {}x{} canvas",
            name,
            size.width,
            size.height
        );

        Ok(Turtle {
            canvas,
            name,
            size,
            position: position(0.0, 0.0),
            heading: 0.0,
            pen_color,
            background,
            ink: pen_color,
            pen_down: true,
        })
    }

    /// Put a new turtle on `canvas` using [`TurtleConfig::default`].
    #[inline]
    pub fn with_defaults(canvas: C) -> crate::Result<Turtle<C>> {
        Turtle::new(canvas, TurtleConfig::default())
    }

    /* Getters */

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the turtle is.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Where the turtle is facing, in degrees.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// The color the turtle draws with when its pen is down.
    #[inline]
    pub fn pen_color(&self) -> Color {
        self.pen_color
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// The size of the canvas, as it was when the turtle was created.
    #[inline]
    pub fn canvas_size(&self) -> CanvasSize {
        self.size
    }

    #[inline]
    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    #[inline]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Take the canvas back.
    #[inline]
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /* Setters */

    /// Face the given direction. The heading is normalized into `(-180, 180]`.
    #[inline]
    pub fn set_heading(&mut self, heading: f64) {
        self.heading = normalize_heading(heading);
    }

    /// Move the turtle without drawing.
    #[inline]
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Draw with a new color from now on.
    ///
    /// This also puts the pen back down if it was up.
    #[inline]
    pub fn set_pen_color(&mut self, color: Color) -> crate::Result {
        self.canvas.set_color(color)?;
        self.pen_color = color;
        self.ink = color;
        self.pen_down = true;
        Ok(())
    }

    /// Tell the canvas how fast to animate, or `None` to only show the result when asked.
    #[inline]
    pub fn set_speed(&mut self, speed: Option<u32>) -> crate::Result {
        self.canvas.set_speed(speed)
    }

    /* Motion */

    /// Draw a straight line `distance` units along the heading. Negative distances move backwards.
    ///
    /// Distances that round to zero are ignored entirely; the turtle does not even move.
    pub fn forward(&mut self, distance: f64) -> crate::Result {
        let trace = match Trace::new(self.position, self.heading, distance) {
            Some(trace) => trace,
            None => return Ok(()),
        };

        for point in trace.points() {
            self.plot(point)?;
        }

        self.position = trace.destination();
        Ok(())
    }

    /// Draw a straight line `distance` units against the heading.
    #[inline]
    pub fn backward(&mut self, distance: f64) -> crate::Result {
        self.forward(-distance)
    }

    /// Alias for [`Turtle::backward`].
    #[inline]
    pub fn back(&mut self, distance: f64) -> crate::Result {
        self.backward(distance)
    }

    /// Draw a straight line to `target`. The heading is the same afterwards.
    pub fn goto(&mut self, target: Position) -> crate::Result {
        if target == self.position {
            return Ok(());
        }

        let heading = self.heading;
        let offset = target - self.position;

        self.set_heading(atan2_deg(offset.x, offset.y) - 90.0);
        let result = self.forward(offset.length());
        self.heading = heading;

        result
    }

    /// Turn counterclockwise by `angle` degrees.
    #[inline]
    pub fn left(&mut self, angle: f64) {
        self.set_heading(self.heading + angle);
    }

    /// Turn clockwise by `angle` degrees.
    #[inline]
    pub fn right(&mut self, angle: f64) {
        self.set_heading(self.heading - angle);
    }

    /// Draw an arc of `degrees` degrees on a circle of the given radius.
    ///
    /// A positive radius puts the center of the circle on the turtle's right, a negative one on its left.
    /// With positive `degrees` the turtle sets off along its heading; negative `degrees` sends it the other
    /// way around. The arc is sampled once per degree, every sample is truncated to whole pixels, and the
    /// turtle draws straight lines from sample to sample. It ends up on the last sample with its heading
    /// turned by `-degrees`.
    pub fn circle(&mut self, radius: f64, degrees: f64) -> crate::Result {
        if degrees == 0.0 || !degrees.is_finite() {
            return Ok(());
        }

        let heading = self.heading;
        log::debug!(
            "Circle of radius {} from ({}, {}) for {} degrees",
            radius,
            self.position.x,
            self.position.y,
            degrees
        );

        let mut last = self.position;
        for sample in arc_samples(self.position, heading, radius, degrees) {
            self.goto(sample)?;
            last = sample;
        }

        self.position = last;
        self.set_heading(heading - degrees);
        Ok(())
    }

    /// Draw a full circle; see [`Turtle::circle`].
    #[inline]
    pub fn circle_full(&mut self, radius: f64) -> crate::Result {
        self.circle(radius, 360.0)
    }

    /* Pen */

    /// Lift the pen.
    ///
    /// The turtle keeps writing pixels as it moves, but in the background color. Anything it passes over is
    /// painted out.
    #[inline]
    pub fn pen_up(&mut self) -> crate::Result {
        log::debug!("Pen up");
        self.canvas.set_color(self.background)?;
        self.ink = self.background;
        self.pen_down = false;
        Ok(())
    }

    /// Put the pen back down, drawing with the pen color again.
    #[inline]
    pub fn pen_down(&mut self) -> crate::Result {
        log::debug!("Pen down");
        self.canvas.set_color(self.pen_color)?;
        self.ink = self.pen_color;
        self.pen_down = true;
        Ok(())
    }

    /* Canvas */

    /// Wipe everything that has been drawn.
    #[inline]
    pub fn clear(&mut self) -> crate::Result {
        log::debug!("Clearing canvas");
        self.canvas.clear(self.background)
    }

    /// Present the drawing and wait until it is dismissed.
    #[inline]
    pub fn show_result(&mut self) -> crate::Result {
        self.canvas.present(None)
    }

    #[inline]
    fn plot(&mut self, point: Position) -> crate::Result {
        match self.size.to_pixel(point) {
            Some(pixel) => self.canvas.write_pixel(pixel.col, pixel.row, self.ink),
            None => Ok(()),
        }
    }
}

/// The points a [`Turtle::circle`] call draws through, truncated to whole pixels.
///
/// One sample per whole degree from `0` to `|degrees|` inclusive, plus the exact end of a fractional arc.
fn arc_samples(
    start: Position,
    heading: f64,
    radius: f64,
    degrees: f64,
) -> impl Iterator<Item = Position> {
    let center = start + Offset::new(cos_deg(heading), sin_deg(heading)) * radius;
    let from_center = start - center;
    let angle = atan2_deg(from_center.x, from_center.y);

    // a center on the right is circled clockwise, one on the left counterclockwise
    let turn = -f64::from(sign(radius));
    let step = f64::from(sign(degrees));
    let whole = degrees.abs().floor();

    let tail = if whole < degrees.abs() {
        Some(degrees)
    } else {
        None
    };

    (0..=whole as u64)
        .map(move |i| i as f64 * step)
        .chain(tail)
        .map(move |swept| {
            let at = angle + turn * swept;
            let sample = center + Offset::new(cos_deg(at), sin_deg(at)) * radius.abs();
            position(sample.x.trunc(), sample.y.trunc())
        })
}
