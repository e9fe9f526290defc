//! Figures built from nothing but the [`TurtleTrait`] primitives. Any turtle
//! works, including [`crate::turtle::CountingTurtle`] when only the shape of
//! the command stream matters.

use tracing::debug;

use crate::errors::DrawError;
use crate::geometry::chord_length;
use crate::planner::Instruction;
use crate::turtle::{Color, TurtleTrait};

/// Four sides, four 90 degree turns.
pub fn draw_square<T: TurtleTrait + ?Sized>(turtle: &mut T, side_length: f64) {
    for _ in 0..4 {
        turtle.forward(side_length);
        turtle.turn(90.0);
    }
}

/// Approximate a circle with a regular polygon of `num_sides` sides.
///
/// Each side is the chord of the central angle `360 / num_sides` on a circle of
/// `radius`, so more sides hug the circle more closely. The turtle ends where
/// it started, facing a full turn further round.
pub fn draw_approximate_circle<T: TurtleTrait + ?Sized>(
    turtle: &mut T,
    radius: f64,
    num_sides: usize,
) -> Result<(), DrawError> {
    if num_sides == 0 {
        return Err(DrawError::InvalidSideCount(num_sides));
    }
    let angle = 360.0 / num_sides as f64;
    let side_length = chord_length(radius, angle);
    debug!(radius, num_sides, side_length, "approximate circle");
    for _ in 0..num_sides {
        turtle.forward(side_length);
        turtle.turn(angle);
    }
    Ok(())
}

const ART_PALETTE: [Color; 5] = [
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
    Color::Green,
    Color::Purple,
];
const ART_LAYERS: usize = 4;
const ART_SPIKES_PER_LAYER: usize = 8;
const ART_BASE_LENGTH: f64 = 30.0;

/// One spike: out, a little zig-zag crown, out again, then rotate to the next
/// spike's slot.
fn spike<T: TurtleTrait + ?Sized>(turtle: &mut T, length: f64) {
    turtle.forward(length);
    turtle.turn(45.0);
    turtle.forward(length / 2.0);
    turtle.turn(-90.0);
    turtle.forward(length / 2.0);
    turtle.turn(45.0);
    turtle.forward(length);
    turtle.turn(360.0 / ART_SPIKES_PER_LAYER as f64);
}

/// The house figure: a lead-in stroke, four twisted rings of colored spikes
/// growing outwards, and a black curl to finish.
pub fn draw_personal_art<T: TurtleTrait + ?Sized>(turtle: &mut T) {
    turtle.forward(50.0);
    turtle.turn(-90.0);
    turtle.forward(170.0);
    turtle.turn(90.0);

    for layer in 0..ART_LAYERS {
        let length = ART_BASE_LENGTH + layer as f64 * 10.0;
        turtle.color(ART_PALETTE[layer % ART_PALETTE.len()]);
        for _ in 0..ART_SPIKES_PER_LAYER {
            spike(turtle, length);
        }
        turtle.turn(15.0);
    }

    // inner curl
    turtle.color(Color::Black);
    for _ in 0..18 {
        turtle.forward(20.0);
        turtle.turn(100.0);
    }
}

/// Walk an expanded L-system string: `-` turns left by `angle`, `+` turns right,
/// brackets are skipped, and every other symbol steps forward by `distance`.
pub fn walk_lpath<T: TurtleTrait + ?Sized>(turtle: &mut T, lpath: &str, angle: f64, distance: f64) {
    for c in lpath.chars() {
        match c {
            '-' => turtle.left(angle),
            '+' => turtle.right(angle),
            '[' | ']' => {}
            _ => turtle.forward(distance),
        }
    }
}

/// Replay a plan from [`crate::planner::find_path`] on a turtle.
pub fn follow<T: TurtleTrait + ?Sized>(turtle: &mut T, plan: &[Instruction]) {
    for step in plan {
        step.apply(turtle);
    }
}
