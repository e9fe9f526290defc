use geo_types::{Line, LineString, MultiLineString, Point};
use tracing::debug;

use crate::geometry::{degrees_to_radians, PointDistance};

pub mod color;

pub use color::Color;

/// One straight stroke, left behind by a single `forward`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub start: Point<f64>,
    pub end: Point<f64>,
    pub color: Color,
}

impl PathSegment {
    pub fn new(start: Point<f64>, end: Point<f64>, color: Color) -> PathSegment {
        PathSegment { start, end, color }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    pub fn line(&self) -> Line<f64> {
        Line::new(self.start, self.end)
    }
}

/// Turns a recorded path into geometry, one two-point line per segment.
pub fn to_multiline(segments: &[PathSegment]) -> MultiLineString<f64> {
    segments
        .iter()
        .map(|seg| LineString::from(vec![seg.start, seg.end]))
        .collect()
}

/// TurtleTrait is the capability set the drawing routines work against.
///
/// Headings are in degrees, 0 faces along +x and positive turns go clockwise,
/// which with y growing downwards is the usual screen orientation.
///
/// # Example
///
/// ```
/// use turtle_soup::turtle::{Turtle, TurtleTrait, Color};
///
/// let mut t = Turtle::new();
/// t.color(Color::Blue);
/// t.forward(100.0);
/// t.turn(90.0);
/// t.forward(100.0);
/// assert_eq!(t.path().len(), 2);
/// ```
pub trait TurtleTrait {
    /// Move along the current heading. Negative distances back up.
    fn forward(&mut self, distance: f64);

    /// Rotate by `angle` degrees, clockwise positive.
    fn turn(&mut self, angle: f64);

    /// Pen color for everything drawn from here on.
    fn color(&mut self, color: Color);

    /// Everything drawn so far, in drawing order.
    fn path(&self) -> &[PathSegment];

    fn left(&mut self, angle: f64) {
        self.turn(-angle);
    }

    fn right(&mut self, angle: f64) {
        self.turn(angle);
    }
}

/// The reference turtle: it records every stroke it makes.
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    position: Point<f64>,
    heading: f64,
    color: Color,
    segments: Vec<PathSegment>,
}

impl Default for Turtle {
    fn default() -> Self {
        Turtle::new()
    }
}

impl Turtle {
    pub fn new() -> Turtle {
        Turtle {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            color: Color::default(),
            segments: vec![],
        }
    }

    pub fn position(&self) -> Point<f64> {
        self.position
    }

    /// Raw heading in degrees. It is never wrapped, so after a full circle
    /// of right turns this reads 360.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn current_color(&self) -> Color {
        self.color
    }

    pub fn to_multiline(&self) -> MultiLineString<f64> {
        to_multiline(&self.segments)
    }

    /// Hand the recorded path over, consuming the turtle.
    pub fn into_path(self) -> Vec<PathSegment> {
        self.segments
    }
}

impl TurtleTrait for Turtle {
    fn forward(&mut self, distance: f64) {
        let (s, c) = degrees_to_radians(self.heading.rem_euclid(360.0)).sin_cos();
        let to = self.position + Point::new(distance * c, distance * s);
        self.segments
            .push(PathSegment::new(self.position, to, self.color));
        self.position = to;
    }

    fn turn(&mut self, angle: f64) {
        self.heading += angle;
    }

    fn color(&mut self, color: Color) {
        debug!(from = %self.color, to = %color, "pen color change");
        self.color = color;
    }

    fn path(&self) -> &[PathSegment] {
        &self.segments
    }
}

/// A turtle that draws nothing. It only keeps count of what it was asked to
/// do, which is handy for checking the shape of a routine without any
/// geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountingTurtle {
    pub forwards: usize,
    pub turns: usize,
    pub color_changes: usize,
    pub travelled: f64,
    pub total_turn: f64,
}

impl CountingTurtle {
    pub fn new() -> CountingTurtle {
        CountingTurtle::default()
    }
}

impl TurtleTrait for CountingTurtle {
    fn forward(&mut self, distance: f64) {
        self.forwards += 1;
        self.travelled += distance.abs();
    }

    fn turn(&mut self, angle: f64) {
        self.turns += 1;
        self.total_turn += angle;
    }

    fn color(&mut self, _color: Color) {
        self.color_changes += 1;
    }

    fn path(&self) -> &[PathSegment] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point<f64>, b: Point<f64>) -> bool {
        a.distance(&b) < 0.0001
    }

    #[test]
    fn test_new_turtle() {
        let t = Turtle::new();
        assert_eq!(t.position(), Point::new(0.0, 0.0));
        assert_eq!(t.heading(), 0.0);
        assert_eq!(t.current_color(), Color::Black);
        assert!(t.path().is_empty());
    }

    #[test]
    fn test_forward_records_segment() {
        let mut t = Turtle::new();
        t.forward(10.0);
        assert_eq!(t.path().len(), 1);
        let seg = t.path()[0];
        assert_eq!(seg.start, Point::new(0.0, 0.0));
        assert!(close(seg.end, Point::new(10.0, 0.0)));
        assert_eq!(seg.end, t.position());
        assert_eq!(seg.color, Color::Black);
    }

    #[test]
    fn test_clockwise_turn_points_down() {
        let mut t = Turtle::new();
        t.turn(90.0);
        t.forward(10.0);
        assert!(close(t.position(), Point::new(0.0, 10.0)));
    }

    #[test]
    fn test_negative_forward_backs_up() {
        let mut t = Turtle::new();
        t.forward(-5.0);
        assert!(close(t.position(), Point::new(-5.0, 0.0)));
        assert_eq!(t.path().len(), 1);
    }

    #[test]
    fn test_zero_forward_still_records() {
        let mut t = Turtle::new();
        t.forward(0.0);
        assert_eq!(t.path().len(), 1);
        assert_eq!(t.path()[0].length(), 0.0);
    }

    #[test]
    fn test_huge_heading_is_safe() {
        let mut a = Turtle::new();
        a.turn(-90.0 - 360.0 * 1000.0);
        a.forward(10.0);
        assert!(close(a.position(), Point::new(0.0, -10.0)));
        assert_eq!(a.heading(), -90.0 - 360.0 * 1000.0);
    }

    #[test]
    fn test_segments_chain_and_keep_color() {
        let mut t = Turtle::new();
        t.forward(10.0);
        t.color(Color::Cyan);
        t.turn(45.0);
        t.forward(3.0);
        t.color(Color::Red);
        t.forward(7.0);
        let path = t.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].color, Color::Black);
        assert_eq!(path[1].color, Color::Cyan);
        assert_eq!(path[2].color, Color::Red);
        for pair in path.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(path[2].end, t.position());
    }

    #[test]
    fn test_left_right() {
        let mut t = Turtle::new();
        t.right(30.0);
        t.left(75.0);
        assert_eq!(t.heading(), -45.0);
    }

    #[test]
    fn test_to_multiline() {
        let mut t = Turtle::new();
        t.forward(1.0);
        t.forward(1.0);
        let mls = t.to_multiline();
        assert_eq!(mls.0.len(), 2);
        assert_eq!(mls.0[1].0.len(), 2);
    }

    #[test]
    fn test_counting_turtle() {
        let mut t = CountingTurtle::new();
        t.forward(10.0);
        t.forward(-2.0);
        t.turn(90.0);
        t.left(30.0);
        t.color(Color::Green);
        assert_eq!(t.forwards, 2);
        assert_eq!(t.turns, 2);
        assert_eq!(t.color_changes, 1);
        assert_eq!(t.travelled, 12.0);
        assert_eq!(t.total_turn, 60.0);
        assert!(t.path().is_empty());
    }
}
