use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the drawing routines when asked for a figure that
/// can't exist.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DrawError {
    #[error("a polygon needs at least one side, got {0}")]
    InvalidSideCount(usize),
}

/// A color name that isn't in the palette.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("unknown color '{0}'")]
pub struct ColorParseError(pub String);

/// Everything that can go wrong between a finished path and a file on disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("html template error: {0}")]
    Template(#[from] tera::Error),

    #[error("invalid render config: {0}")]
    Config(String),

    #[error("svg generation error: {0}")]
    Svg(String),
}

impl From<ron::error::SpannedError> for ExportError {
    fn from(error: ron::error::SpannedError) -> Self {
        ExportError::Config(error.to_string())
    }
}
