//! Point-to-point planning. Given waypoints, work out the turns and moves a
//! turtle facing along +x would need to visit them in order. Nothing here
//! touches a real turtle; see [`crate::drawing::follow`] for replaying a plan.

use std::fmt;

use geo_types::Point;

use crate::geometry::{distance, normalize_turn};
use crate::turtle::TurtleTrait;

/// Turns smaller than this are floating point noise and never emitted.
const TURN_EPSILON: f64 = 1e-6;

/// A single planned step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Relative turn in degrees, clockwise positive, within `[-180, 180]`.
    Turn(f64),
    Forward(f64),
}

impl Instruction {
    /// Perform this step on a turtle.
    pub fn apply<T: TurtleTrait + ?Sized>(&self, turtle: &mut T) {
        match *self {
            Instruction::Turn(angle) => turtle.turn(angle),
            Instruction::Forward(dist) => turtle.forward(dist),
        }
    }
}

/// Two-decimal formatting where exact ties round away from zero.
///
/// `{:.2}` rounds exact ties to even. Only values that really sit halfway
/// (the product `v * 100` has no rounding residual and ends in `.5`) take
/// the other branch, so something like `2.675`, stored just below the tie,
/// still prints `2.67`.
fn fixed_2(value: f64) -> String {
    let scaled = value.abs() * 100.0;
    let residual = value.abs().mul_add(100.0, -scaled);
    if residual == 0.0 && scaled.fract() == 0.5 {
        let rounded = (scaled.floor() + 1.0) / 100.0;
        format!("{:.2}", rounded.copysign(value))
    } else {
        format!("{:.2}", value)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Turn(angle) => write!(f, "turn {}", fixed_2(*angle)),
            Instruction::Forward(dist) => write!(f, "forward {}", fixed_2(*dist)),
        }
    }
}

/// Plan the moves that visit `waypoints` in order, starting at heading 0.
///
/// Fewer than two waypoints means there is nowhere to go, so the plan is
/// empty.
///
/// ```
/// use geo_types::Point;
/// use turtle_soup::planner::find_path_strings;
///
/// let plan = find_path_strings(&[
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
/// ]);
/// assert_eq!(plan, vec!["forward 10.00", "turn 90.00", "forward 10.00"]);
/// ```
pub fn find_path(waypoints: &[Point<f64>]) -> Vec<Instruction> {
    let mut instructions = vec![];
    let mut heading = 0.0f64;

    for pair in waypoints.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let segment_length = distance(&from, &to);
        let angle = (to.y() - from.y()).atan2(to.x() - from.x()).to_degrees();

        let turn = normalize_turn(angle - heading);
        if turn.abs() > TURN_EPSILON {
            instructions.push(Instruction::Turn(turn));
        }
        instructions.push(Instruction::Forward(segment_length));
        // Absolute, not accumulated.
        heading = angle;
    }
    instructions
}

/// Same plan as [`find_path`], already formatted.
pub fn find_path_strings(waypoints: &[Point<f64>]) -> Vec<String> {
    find_path(waypoints).iter().map(|i| i.to_string()).collect()
}
