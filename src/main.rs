//! Draw a figure with the turtle and export it as an HTML page.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use geo_types::Point;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use turtle_soup::export::{self, Exporter, DEFAULT_OUTPUT};
use turtle_soup::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Figure {
    Art,
    Square,
    Circle,
    Gosper,
}

#[derive(Parser)]
#[command(name = "turtle-soup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Draw with a turtle, get an HTML page", long_about = None)]
struct Cli {
    /// Where to write the page
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// RON render config (canvas size, stroke, background, ...)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to draw
    #[arg(short, long, value_enum, default_value_t = Figure::Art)]
    figure: Figure,

    /// Scale the drawing to fit the canvas
    #[arg(long)]
    fit: bool,

    /// Don't try to open the page afterwards
    #[arg(long)]
    no_open: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn draw(figure: Figure, turtle: &mut Turtle) -> Result<()> {
    match figure {
        Figure::Art => draw_personal_art(turtle),
        Figure::Square => draw_square(turtle, 100.0),
        Figure::Circle => draw_approximate_circle(turtle, 50.0, 360)?,
        Figure::Gosper => walk_lpath(turtle, &LSystem::gosper().expand(3), 60.0, 6.0),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading render config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    config.fit |= cli.fit;

    info!(
        "Chord length for radius 5, angle 60 degrees: {}",
        chord_length(5.0, 60.0)
    );
    let waypoints = [
        Point::new(20.0, 20.0),
        Point::new(80.0, 20.0),
        Point::new(80.0, 80.0),
    ];
    info!("Path instructions: {:?}", find_path_strings(&waypoints));

    let mut turtle = Turtle::new();
    draw(cli.figure, &mut turtle)?;
    info!(segments = turtle.path().len(), figure = ?cli.figure, "drawing finished");

    let mut sink = HtmlExporter::new(SvgRenderer::new(config), Exporter::system(), &cli.output);
    if cli.no_open {
        sink = sink.without_open();
    }
    if let Err(err) = sink.consume(turtle.path()) {
        export::report(&err);
    }
    Ok(())
}
