//! Turtle soup: a small turtle-graphics toolkit.
//!
//! A [`turtle::Turtle`] walks around the plane and records every stroke it
//! makes. Drawing routines are written against [`turtle::TurtleTrait`] so they
//! work on any turtle, the planner works out how to visit a list of
//! waypoints, and the render/export modules turn a finished path into an
//! HTML page with an inline SVG.
//!
//! ```
//! use turtle_soup::prelude::*;
//!
//! let mut t = Turtle::new();
//! draw_square(&mut t, 100.0);
//! draw_approximate_circle(&mut t, 50.0, 36).unwrap();
//! assert_eq!(t.path().len(), 40);
//! ```

/// Chord lengths, distances and turn normalization.
pub mod geometry;

/// Turtle state, the primitive trait, and the color palette.
pub mod turtle;

/// Waypoints in, turn/forward instructions out.
pub mod planner;

/// Squares, circles, art, and L-system walks.
pub mod drawing;

/// L-system implementation, with expansion
pub mod l_system;

/// Path sinks, SVG and HTML rendering, and render configuration.
pub mod render;

/// Saving and opening exported drawings.
pub mod export;

pub mod errors;

/// Everything a drawing script usually needs.
pub mod prelude {
    pub use crate::drawing::{
        draw_approximate_circle, draw_personal_art, draw_square, follow, walk_lpath,
    };
    pub use crate::errors::{DrawError, ExportError};
    pub use crate::geometry::{chord_length, distance, PointDistance};
    pub use crate::l_system::LSystem;
    pub use crate::planner::{find_path, find_path_strings, Instruction};
    pub use crate::render::{Arrangement, HtmlExporter, PathSink, RenderConfig, SvgRenderer};
    pub use crate::turtle::{Color, CountingTurtle, PathSegment, Turtle, TurtleTrait};
}
