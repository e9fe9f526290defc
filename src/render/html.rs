use std::path::{Path, PathBuf};

use tera::{Context as TeraContext, Tera};

use super::{PathSink, SvgRenderer};
use crate::errors::ExportError;
use crate::export::{Exporter, SideEffects};
use crate::turtle::PathSegment;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>{{ title }}</title>
    <style>
        body { margin: 0; }
        svg { display: block; }
    </style>
</head>
<body>
    {{ svg | safe }}
</body>
</html>
"#;

/// Wrap an already rendered SVG document in a standalone HTML page.
pub fn render_page(title: &str, svg: &str) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("page.html", PAGE_TEMPLATE)?;
    let mut context = TeraContext::new();
    context.insert("title", title);
    context.insert("svg", svg);
    Ok(tera.render("page.html", &context)?)
}

/// The whole export step as a [`PathSink`]: SVG, then HTML, then disk, then
/// (optionally) a viewer.
pub struct HtmlExporter<E: SideEffects> {
    renderer: SvgRenderer,
    exporter: Exporter<E>,
    output: PathBuf,
    open: bool,
}

impl<E: SideEffects> HtmlExporter<E> {
    pub fn new(renderer: SvgRenderer, exporter: Exporter<E>, output: &Path) -> HtmlExporter<E> {
        HtmlExporter {
            renderer,
            exporter,
            output: output.to_path_buf(),
            open: true,
        }
    }

    /// Don't try to launch a viewer after saving.
    pub fn without_open(mut self) -> HtmlExporter<E> {
        self.open = false;
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn into_exporter(self) -> Exporter<E> {
        self.exporter
    }

    pub fn page(&self, segments: &[PathSegment]) -> Result<String, ExportError> {
        let doc = self.renderer.render(segments)?;
        render_page(&self.renderer.config().title, &doc.to_string())
    }
}

impl<E: SideEffects> PathSink for HtmlExporter<E> {
    fn consume(&mut self, segments: &[PathSegment]) -> Result<(), ExportError> {
        let page = self.page(segments)?;
        let saved = self.exporter.save(&page, &self.output)?;
        if self.open {
            self.exporter.open(&saved);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::drawing::draw_square;
    use crate::export::fake::RecordingEffects;
    use crate::render::RenderConfig;
    use crate::turtle::{Turtle, TurtleTrait};

    #[test]
    fn test_page_wraps_svg() {
        let page = render_page("Hello <turtle>", "<svg><line/></svg>").expect("Failed to render");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<svg><line/></svg>"));
        assert!(page.contains("<title>Hello &lt;turtle&gt;</title>"));
    }

    #[test]
    fn test_sink_saves_and_opens() {
        let mut t = Turtle::new();
        draw_square(&mut t, 20.0);
        let mut sink = HtmlExporter::new(
            SvgRenderer::new(RenderConfig::default()),
            Exporter::new(RecordingEffects {
                working: vec!["xdg-open"],
                ..Default::default()
            }),
            Path::new("square.html"),
        );
        sink.consume(t.path()).expect("Failed to export");
        let effects = sink.into_exporter().into_effects();
        assert_eq!(effects.files.len(), 1);
        let (path, html) = &effects.files[0];
        assert_eq!(path, &PathBuf::from("square.html"));
        assert_eq!(html.matches("<line").count(), 4);
        assert!(html.contains("<title>Turtle Graphics Output</title>"));
        assert_eq!(effects.runs.len(), 3);
        assert!(effects.notes.iter().any(|n| n == "Drawing saved to square.html"));
    }

    #[test]
    fn test_sink_without_open() {
        let mut t = Turtle::new();
        t.forward(3.0);
        let mut sink = HtmlExporter::new(
            SvgRenderer::new(RenderConfig::default()),
            Exporter::new(RecordingEffects::default()),
            Path::new("line.html"),
        )
        .without_open();
        sink.consume(t.path()).expect("Failed to export");
        let effects = sink.into_exporter().into_effects();
        assert!(effects.runs.is_empty());
        assert_eq!(effects.files.len(), 1);
    }

    #[test]
    fn test_save_failure_leaves_path_alone() {
        let mut t = Turtle::new();
        draw_square(&mut t, 20.0);
        let before = t.clone();
        let mut sink = HtmlExporter::new(
            SvgRenderer::new(RenderConfig::default()),
            Exporter::new(RecordingEffects {
                disk_full: true,
                ..Default::default()
            }),
            Path::new("square.html"),
        );
        assert!(matches!(sink.consume(t.path()), Err(ExportError::Io { .. })));
        assert_eq!(t, before);
        assert!(sink.into_exporter().into_effects().runs.is_empty());
    }
}
