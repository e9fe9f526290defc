use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ExportError;
use crate::turtle::color::CssColor;

/// How a drawing ends up on the page. Every field has a default, so a RON
/// file only needs to mention what it changes:
///
/// ```
/// use turtle_soup::render::RenderConfig;
///
/// let config = RenderConfig::from_ron("(width: 800.0, fit: true)").unwrap();
/// assert_eq!(config.width, 800.0);
/// assert_eq!(config.height, 500.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub stroke_width: f64,
    pub background: CssColor,
    pub title: String,
    /// Fit the drawing's bounds to the canvas instead of centring the origin.
    pub fit: bool,
    /// Only used when fitting.
    pub margin: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            scale: 1.0,
            stroke_width: 2.0,
            background: CssColor::from_rgba8(0xf0, 0xf0, 0xf0, 255),
            title: "Turtle Graphics Output".to_string(),
            fit: false,
            margin: 20.0,
        }
    }
}

impl RenderConfig {
    pub fn from_ron(source: &str) -> Result<RenderConfig, ExportError> {
        let config: RenderConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<RenderConfig, ExportError> {
        let source = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&source)
    }

    fn validate(&self) -> Result<(), ExportError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ExportError::Config(format!(
                "canvas must have a positive size, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ExportError::Config(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if self.stroke_width < 0.0 {
            return Err(ExportError::Config(format!(
                "stroke width can't be negative, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }

    /// Background as `#rrggbb`.
    pub fn background_hex(&self) -> String {
        let [r, g, b, _] = self.background.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}
