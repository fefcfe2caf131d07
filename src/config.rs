//! Configuration for loading strokes
//!
//! Defaults match KanjiVG data: a 109x109 source box and no view transform.
//! A TOML file can override any part:
//!
//! ```toml
//! [viewbox]
//! width = 109
//! height = 109
//!
//! [target]
//! width = 300
//! height = 300
//!
//! [measure]
//! accuracy = 0.001
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::geometry::measure::DEFAULT_ACCURACY;
use crate::geometry::{ViewBox, ViewTransform};

/// Configuration options for stroke loading
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeConfig {
    /// Coordinate box the source path data is drawn in
    pub viewbox: ViewBox,

    /// Box to map strokes onto; `None` keeps source coordinates
    pub target: Option<ViewBox>,

    /// Arc-length accuracy used for stroke lengths
    pub accuracy: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            viewbox: ViewBox::KANJIVG,
            target: None,
            accuracy: DEFAULT_ACCURACY,
        }
    }
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    viewbox: Option<TomlBox>,
    target: Option<TomlBox>,
    measure: Option<TomlMeasure>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlBox {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMeasure {
    accuracy: f64,
}

impl From<TomlBox> for ViewBox {
    fn from(b: TomlBox) -> Self {
        ViewBox::new(b.x, b.y, b.width, b.height)
    }
}

impl StrokeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string; missing sections keep their
    /// defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();

        Ok(StrokeConfig {
            viewbox: parsed.viewbox.map(Into::into).unwrap_or(defaults.viewbox),
            target: parsed.target.map(Into::into),
            accuracy: parsed
                .measure
                .map(|m| m.accuracy)
                .unwrap_or(defaults.accuracy),
        })
    }

    /// Set the source coordinate box
    pub fn with_viewbox(mut self, viewbox: ViewBox) -> Self {
        self.viewbox = viewbox;
        self
    }

    /// Map strokes onto a box of the given size at the origin
    pub fn with_target_size(mut self, width: f64, height: f64) -> Self {
        self.target = Some(ViewBox::sized(width, height));
        self
    }

    /// Map strokes onto the given box
    pub fn with_target(mut self, target: ViewBox) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the arc-length accuracy
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Transform from source coordinates to the target box
    pub fn view_transform(&self) -> ViewTransform {
        match self.target {
            Some(target) => ViewTransform::fill(self.viewbox, target),
            None => ViewTransform::IDENTITY,
        }
    }
}
