use ::svg::node::element::{Line, Rectangle};
use ::svg::Document;
use tracing::debug;

use super::{xform_point, Arrangement, PathSink, RenderConfig};
use crate::errors::ExportError;
use crate::turtle::PathSegment;

/// Turns a path into an SVG document: a background rectangle, then one
/// `<line>` per segment in drawing order.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    config: RenderConfig,
    arrangement: Arrangement,
    document: Option<Document>,
}

impl SvgRenderer {
    pub fn new(config: RenderConfig) -> SvgRenderer {
        let arrangement = Arrangement::from_config(&config);
        SvgRenderer {
            config,
            arrangement,
            document: None,
        }
    }

    /// Override the placement the config asked for.
    pub fn with_arrangement(mut self, arrangement: Arrangement) -> SvgRenderer {
        self.arrangement = arrangement;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Build a fresh document for `segments`.
    pub fn render(&self, segments: &[PathSegment]) -> Result<Document, ExportError> {
        let tx = self.arrangement.transformation(segments);
        let mut doc = Document::new()
            .set("width", self.config.width)
            .set("height", self.config.height)
            .set("viewBox", (0.0, 0.0, self.config.width, self.config.height))
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", self.config.background_hex()),
            );

        for (i, seg) in segments.iter().enumerate() {
            let a = xform_point(&seg.start, &tx);
            let b = xform_point(&seg.end, &tx);
            if ![a.x(), a.y(), b.x(), b.y()].iter().all(|v| v.is_finite()) {
                return Err(ExportError::Svg(format!(
                    "segment {} has a non-finite coordinate",
                    i
                )));
            }
            doc = doc.add(
                Line::new()
                    .set("x1", a.x())
                    .set("y1", a.y())
                    .set("x2", b.x())
                    .set("y2", b.y())
                    .set("stroke", seg.color.name())
                    .set("stroke-width", self.config.stroke_width),
            );
        }
        debug!(segments = segments.len(), "rendered svg");
        Ok(doc)
    }

    /// The document built by the last `consume`, if any.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }
}

impl PathSink for SvgRenderer {
    fn consume(&mut self, segments: &[PathSegment]) -> Result<(), ExportError> {
        self.document = Some(self.render(segments)?);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::drawing::draw_square;
    use crate::turtle::{Color, Turtle, TurtleTrait};

    #[test]
    fn test_one_line_per_segment() {
        let mut t = Turtle::new();
        draw_square(&mut t, 50.0);
        let doc = SvgRenderer::new(RenderConfig::default())
            .render(t.path())
            .expect("Failed to render");
        let text = doc.to_string();
        assert_eq!(text.matches("<line").count(), 4);
        assert!(text.contains("stroke=\"black\""));
        assert!(text.contains("fill=\"#f0f0f0\""));
    }

    #[test]
    fn test_origin_is_centered() {
        let mut t = Turtle::new();
        t.color(Color::Magenta);
        t.forward(10.0);
        let doc = SvgRenderer::new(RenderConfig::default())
            .render(t.path())
            .expect("Failed to render");
        let text = doc.to_string();
        assert!(text.contains("x1=\"250\""), "{}", text);
        assert!(text.contains("y1=\"250\""), "{}", text);
        assert!(text.contains("x2=\"260\""), "{}", text);
        assert!(text.contains("stroke=\"magenta\""), "{}", text);
    }

    #[test]
    fn test_empty_path_still_renders() {
        let doc = SvgRenderer::new(RenderConfig::default())
            .render(&[])
            .expect("Failed to render");
        assert_eq!(doc.to_string().matches("<line").count(), 0);
    }

    #[test]
    fn test_non_finite_is_an_error() {
        let mut t = Turtle::new();
        t.forward(f64::INFINITY);
        let result = SvgRenderer::new(RenderConfig::default()).render(t.path());
        assert!(matches!(result, Err(ExportError::Svg(_))));
    }

    #[test]
    fn test_sink_keeps_document() {
        let mut t = Turtle::new();
        t.forward(5.0);
        let mut renderer = SvgRenderer::new(RenderConfig::default());
        assert!(renderer.document().is_none());
        renderer.consume(t.path()).expect("Failed to consume");
        assert!(renderer.document().is_some());
    }
}
