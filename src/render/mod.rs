//! Everything between a finished path and a picture. The core only knows
//! about [`PathSink`]; the SVG and HTML pieces here are one way of filling it.

use geo::BoundingRect;
use geo_types::{Coord as Coordinate, Point, Rect};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};

use crate::errors::ExportError;
use crate::turtle::{to_multiline, PathSegment};

/// HTML page wrapping.
pub mod html;

/// Segment-per-line SVG documents.
pub mod svg;

/// Canvas size, stroke and page settings.
pub mod config;

pub use self::config::RenderConfig;
pub use self::html::HtmlExporter;
pub use self::svg::SvgRenderer;

/// Anything that can take a finished drawing session's strokes, in drawing
/// order.
pub trait PathSink {
    fn consume(&mut self, segments: &[PathSegment]) -> Result<(), ExportError>;
}

/// A sink that just keeps a copy. Useful in tests and for chaining sessions.
impl PathSink for Vec<PathSegment> {
    fn consume(&mut self, segments: &[PathSegment]) -> Result<(), ExportError> {
        self.extend_from_slice(segments);
        Ok(())
    }
}

/// An arrangement is a plan for placing turtle coordinates on a canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Arrangement {
    /// Put the turtle's origin at the canvas centre, scaled.
    Center { width: f64, height: f64, scale: f64 },
    /// Scale and centre the drawing's bounds to fit inside the canvas, leaving
    /// `margin` on every side.
    FitCenter { width: f64, height: f64, margin: f64 },
    /// Any affine transformation.
    Transform(Affine2<f64>),
}

impl Arrangement {
    pub fn from_config(config: &RenderConfig) -> Arrangement {
        if config.fit {
            Arrangement::FitCenter {
                width: config.width,
                height: config.height,
                margin: config.margin,
            }
        } else {
            Arrangement::Center {
                width: config.width,
                height: config.height,
                scale: config.scale,
            }
        }
    }

    /// Helper to create a translation plus uniform scale.
    pub fn translate_scale(tx: f64, ty: f64, scale: f64) -> Affine2<f64> {
        Affine2::from_matrix_unchecked(Matrix3::new(scale, 0.0, tx, 0.0, scale, ty, 0.0, 0.0, 1.0))
    }

    /// Work out the transformation for these particular segments.
    pub fn transformation(&self, segments: &[PathSegment]) -> Affine2<f64> {
        match self {
            Arrangement::Transform(affine) => *affine,
            Arrangement::Center {
                width,
                height,
                scale,
            } => Self::translate_scale(width / 2.0, height / 2.0, *scale),
            Arrangement::FitCenter {
                width,
                height,
                margin,
            } => {
                let bounds = match to_multiline(segments).bounding_rect() {
                    Some(bounds) => bounds,
                    None => return Self::translate_scale(width / 2.0, height / 2.0, 1.0),
                };
                let scale = fit_scale(&bounds, width - 2.0 * margin, height - 2.0 * margin);
                let gcenter = bounds.center();
                Self::translate_scale(
                    width / 2.0 - gcenter.x * scale,
                    height / 2.0 - gcenter.y * scale,
                    scale,
                )
            }
        }
    }
}

/// Largest uniform scale that fits `bounds` into the given room. Flat axes
/// don't constrain anything; a single point (or no room at all) keeps the
/// unit scale.
fn fit_scale(bounds: &Rect<f64>, room_w: f64, room_h: f64) -> f64 {
    let sx = if bounds.width() > 0.0 {
        room_w / bounds.width()
    } else {
        f64::INFINITY
    };
    let sy = if bounds.height() > 0.0 {
        room_h / bounds.height()
    } else {
        f64::INFINITY
    };
    let scale = sx.min(sy);
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Apply an affine transformation to a single point.
pub fn xform_point(point: &Point<f64>, tx: &Affine2<f64>) -> Point<f64> {
    let pt = *tx * NPoint2::new(point.x(), point.y());
    Point::from(Coordinate { x: pt.x, y: pt.y })
}
