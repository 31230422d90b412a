// MIT/Apache2 License

//! Breaking a straight stroke down into pixels.
//!
//! A stroke starts at the turtle's position and runs `distance` units along its heading. It is walked one
//! integer step at a time along whichever axis changes faster, and the other coordinate is solved from the
//! line equation `y = m * x + q`. Walking the faster axis is what keeps steep lines from leaving gaps.

use crate::geometry::{cos_deg, position, sign, sin_deg, tan_deg, Position};
use crate::util::{round_even, round_places};
use std::iter;

/// The axis a stroke is walked along.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// A straight stroke, ready to be walked pixel by pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Trace {
    axis: Axis,
    slope: f64,
    intercept: f64,
    /// Set for headings of exactly 0 or 180, where the slope cannot be divided by.
    vertical: Option<f64>,
    first: i64,
    last: i64,
    step: i64,
    destination: Position,
}

impl Trace {
    /// Plan a stroke of `distance` units from `start` along `heading` (in degrees, normalized).
    ///
    /// Returns `None` when the distance rounds to zero or the stroke would not end on a finite point; such
    /// a move does not draw and does not move the turtle.
    pub fn new(start: Position, heading: f64, distance: f64) -> Option<Trace> {
        if !distance.is_finite() || round_even(distance) == 0.0 {
            return None;
        }

        let slope = round_places(tan_deg(heading - 90.0), 5);
        let intercept = start.y - slope * start.x;
        let vertical = heading.abs() == 0.0 || heading.abs() == 180.0;

        let trace = if slope.abs() >= 1.0 || vertical {
            let direction = if heading.abs() < 90.0 { 1.0 } else { -1.0 };
            let dest_y = start.y + cos_deg(heading).abs() * distance * direction;
            let vertical = if vertical { Some(start.x) } else { None };
            let dest_x = match vertical {
                Some(x) => x,
                None => (dest_y - intercept) / slope,
            };

            Trace {
                axis: Axis::Y,
                slope,
                intercept,
                vertical,
                first: round_even(start.y) as i64,
                last: round_even(dest_y) as i64,
                step: sign(dest_y - start.y) as i64,
                destination: position(dest_x, dest_y),
            }
        } else {
            let direction = -f64::from(sign(heading));
            let dest_x = start.x + sin_deg(heading).abs() * distance * direction;
            let dest_y = slope * dest_x + intercept;

            Trace {
                axis: Axis::X,
                slope,
                intercept,
                vertical: None,
                first: round_even(start.x) as i64,
                last: round_even(dest_x) as i64,
                step: sign(dest_x - start.x) as i64,
                destination: position(dest_x, dest_y),
            }
        };

        let destination = trace.destination;
        if !(destination.x.is_finite() && destination.y.is_finite()) {
            log::trace!("Dropping stroke from ({}, {}) with no finite end", start.x, start.y);
            return None;
        }

        log::trace!(
            "Stroke from ({}, {}) to ({}, {}) along {:?}",
            start.x,
            start.y,
            trace.destination.x,
            trace.destination.y,
            trace.axis
        );

        Some(trace)
    }

    /// The axis this stroke is walked along.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The exact, unrounded end of the stroke.
    #[inline]
    pub fn destination(&self) -> Position {
        self.destination
    }

    /// Number of integer steps taken before the destination.
    #[inline]
    pub fn steps(&self) -> usize {
        let span = self.last.saturating_sub(self.first).saturating_mul(self.step);
        if self.step == 0 || span <= 0 {
            0
        } else {
            span as usize
        }
    }

    /// Every point of the stroke: the integer steps from the start up to (but excluding) the rounded
    /// destination, followed by the exact destination itself.
    pub fn points(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.steps())
            .map(move |i| {
                let driven = (self.first + i as i64 * self.step) as f64;
                match self.axis {
                    Axis::Y => position(self.solve_x(driven), driven),
                    Axis::X => position(driven, round_even(self.slope * driven + self.intercept)),
                }
            })
            .chain(iter::once(self.destination))
    }

    #[inline]
    fn solve_x(&self, y: f64) -> f64 {
        match self.vertical {
            Some(x) => round_even(x),
            None => round_even((y - self.intercept) / self.slope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn points(start: Position, heading: f64, distance: f64) -> Vec<(f64, f64)> {
        Trace::new(start, heading, distance)
            .unwrap()
            .points()
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn sub_pixel_distances_do_not_trace() {
        assert!(Trace::new(position(0.0, 0.0), 0.0, 0.4).is_none());
        assert!(Trace::new(position(0.0, 0.0), 0.0, -0.5).is_none());
        assert!(Trace::new(position(0.0, 0.0), 0.0, 0.5).is_none());
        assert!(Trace::new(position(0.0, 0.0), 0.0, 0.6).is_some());
    }

    #[test]
    fn non_finite_strokes_do_not_trace() {
        let origin = position(0.0, 0.0);
        assert!(Trace::new(origin, 0.0, f64::INFINITY).is_none());
        assert!(Trace::new(origin, 30.0, f64::NEG_INFINITY).is_none());
        assert!(Trace::new(origin, -120.0, f64::NAN).is_none());
        assert!(Trace::new(origin, f64::NAN, 10.0).is_none());
        assert!(Trace::new(position(f64::INFINITY, 0.0), 0.0, 10.0).is_none());
        assert!(Trace::new(position(0.0, f64::NEG_INFINITY), 45.0, 10.0).is_none());
    }

    #[test]
    fn straight_up() {
        let trace = Trace::new(position(0.0, 0.0), 0.0, 5.0).unwrap();
        assert_eq!(trace.axis(), Axis::Y);
        assert_eq!(trace.destination(), position(0.0, 5.0));
        assert_eq!(
            points(position(0.0, 0.0), 0.0, 5.0),
            vec![(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (0.0, 4.0), (0.0, 5.0)]
        );
    }

    #[test]
    fn straight_down_keeps_x_exact() {
        let trace = Trace::new(position(3.25, 10.0), 180.0, 4.0).unwrap();
        assert_eq!(trace.axis(), Axis::Y);
        assert_eq!(trace.destination().x, 3.25);
        assert_abs_diff_eq!(trace.destination().y, 6.0);
        let pts = points(position(3.25, 10.0), 180.0, 4.0);
        assert_eq!(&pts[..4], &[(3.0, 10.0), (3.0, 9.0), (3.0, 8.0), (3.0, 7.0)]);
        assert_eq!(pts.len(), 5);
    }

    #[test]
    fn left_and_right_walk_the_x_axis() {
        // heading 90 faces -x
        let trace = Trace::new(position(0.0, 2.0), 90.0, 3.0).unwrap();
        assert_eq!(trace.axis(), Axis::X);
        assert_abs_diff_eq!(trace.destination().x, -3.0);
        assert_abs_diff_eq!(trace.destination().y, 2.0);
        let pts = points(position(0.0, 2.0), 90.0, 3.0);
        assert_eq!(&pts[..3], &[(0.0, 2.0), (-1.0, 2.0), (-2.0, 2.0)]);

        let trace = Trace::new(position(0.0, 0.0), -90.0, 3.0).unwrap();
        assert_abs_diff_eq!(trace.destination().x, 3.0);
        assert_eq!(trace.steps(), 3);
    }

    #[test]
    fn steep_lines_walk_the_y_axis() {
        // heading -30 faces up and to the right, steeper than 45 degrees
        let trace = Trace::new(position(0.0, 0.0), -30.0, 10.0).unwrap();
        assert_eq!(trace.axis(), Axis::Y);
        assert_abs_diff_eq!(trace.destination().x, 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(trace.destination().y, 8.660254, epsilon = 1e-4);
        // one point per row, so no gaps between rows
        assert_eq!(trace.steps(), 9);
    }

    #[test]
    fn shallow_lines_walk_the_x_axis() {
        let trace = Trace::new(position(0.0, 0.0), -60.0, 10.0).unwrap();
        assert_eq!(trace.axis(), Axis::X);
        assert_abs_diff_eq!(trace.destination().x, 8.660254, epsilon = 1e-4);
        assert_abs_diff_eq!(trace.destination().y, 5.0, epsilon = 1e-4);
        assert_eq!(trace.steps(), 9);
    }

    #[test]
    fn diagonal_counts_as_steep() {
        // tan(-135) is only within a rounding error of 1 before it is rounded to five places
        let trace = Trace::new(position(0.0, 0.0), -45.0, 10.0).unwrap();
        assert_eq!(trace.axis(), Axis::Y);
    }

    #[test]
    fn negative_distance_walks_backwards() {
        let trace = Trace::new(position(0.0, 50.0), 0.0, -50.0).unwrap();
        assert_eq!(trace.destination(), position(0.0, 0.0));
        let pts = points(position(0.0, 50.0), 0.0, -50.0);
        assert_eq!(pts[0], (0.0, 50.0));
        assert_eq!(pts[49], (0.0, 1.0));
        assert_eq!(pts[50], (0.0, 0.0));
    }

    #[test]
    fn rounded_start_and_end_can_coincide() {
        // 0.4 -> 1.0: the ends round to 0 and 1, so a single step before the destination
        let trace = Trace::new(position(0.0, 0.4), 0.0, 0.6).unwrap();
        assert_eq!(trace.steps(), 1);
        // 0.8 -> 1.4: both ends round to 1, no steps
        let trace = Trace::new(position(0.0, 0.8), 0.0, 0.6).unwrap();
        assert_eq!(trace.steps(), 0);
        assert_eq!(trace.points().count(), 1);
    }
}
