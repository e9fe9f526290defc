//! Pure numeric helpers shared by the turtle, the planner and the drawing
//! routines. Nothing in here fails for finite input.

use geo_types::{CoordNum, Point};
use num_traits::real::Real;

/// Helper function to convert degrees to radians
pub fn degrees_to_radians(deg: f64) -> f64 {
    std::f64::consts::PI * (deg / 180.0)
}

/// Round half-up at the third decimal place. Halves always go towards
/// positive infinity, negative ones included.
fn round_3(value: f64) -> f64 {
    (value * 1000.0 + 0.5).floor() / 1000.0
}

/// Length of the straight chord subtending `angle_in_degrees` on a circle of
/// the given `radius`, rounded to 3 decimal places.
///
/// An angle of 0 gives 0, and 180 gives the diameter.
///
/// ```
/// use turtle_soup::geometry::chord_length;
/// assert_eq!(chord_length(5.0, 60.0), 5.0);
/// assert_eq!(chord_length(12.5, 180.0), 25.0);
/// ```
pub fn chord_length(radius: f64, angle_in_degrees: f64) -> f64 {
    let half = degrees_to_radians(angle_in_degrees) / 2.0;
    round_3(2.0 * radius * half.sin())
}

/// Euclidean distance between two points.
pub fn distance(p1: &Point<f64>, p2: &Point<f64>) -> f64 {
    p1.distance(p2)
}

/// Brings a relative turn into `(-180, 180]` with a single correction step.
///
/// Only one step is taken, so an input of exactly `-180.0` is returned as is.
/// Consecutive absolute headings never differ by more than 360 degrees,
/// which is all the planner feeds in here.
pub fn normalize_turn(turn: f64) -> f64 {
    let mut turn = turn;
    if turn > 180.0 {
        turn -= 360.0;
    }
    if turn < -180.0 {
        turn += 360.0;
    }
    turn
}

/// Trait that implements a distance function between two [`geo_types::Point`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Point`]
/// as if it were a Vector.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;
}

impl<T> PointDistance<T> for Point<T>
where
    T: CoordNum,
    T: Real,
{
    fn distance(&self, other: &Point<T>) -> T {
        let p = *other - *self;
        p.length()
    }

    fn length(&self) -> T {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }
}
