//! Kanji Stroke - stroke geometry for animated CJK stroke-order diagrams
//!
//! This library extracts SVG path data from KanjiVG documents, parses it into
//! absolute path geometry, and measures each stroke so a rendering layer can
//! pace its animation.
//!
//! # Example
//!
//! ```rust
//! use kanji_stroke::{parse_path, Point, Segment};
//!
//! let path = parse_path("M10,10 l10,10").unwrap();
//! assert_eq!(path.segments[1], Segment::LineTo(Point::new(20.0, 20.0)));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod parser;

pub use config::StrokeConfig;
pub use error::{ConfigError, ParseError, PathDataFault};
pub use extract::extract;
pub use geometry::{GeometricPath, Point, Segment, ViewBox, ViewTransform};
pub use parser::parse_path;

/// One stroke of a character, ready to hand to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Position in drawing order, starting at 0
    pub index: usize,
    /// Geometry, mapped onto the configured target box if there is one
    pub path: GeometricPath,
    /// Drawn length in source (viewbox) units.
    ///
    /// Pacing stays independent of the display size.
    pub length: f64,
}

/// Load every stroke of an SVG document with default configuration
///
/// # Example
///
/// ```rust
/// use kanji_stroke::load_strokes;
///
/// let strokes = load_strokes(r#"
///     <path id="kvg:04e00-s1" d="M11,54.25c3.56,0.83,7.18,0.88,10.75,0.5"/>
/// "#).unwrap();
///
/// assert_eq!(strokes.len(), 1);
/// assert!(strokes[0].length > 10.0);
/// ```
pub fn load_strokes(document: &str) -> Result<Vec<Stroke>, ParseError> {
    load_strokes_with_config(document, &StrokeConfig::default())
}

/// Load every stroke of an SVG document with custom configuration
///
/// A document without path elements yields no strokes.
#[tracing::instrument(level = "debug", skip(document), fields(len = document.len()))]
pub fn load_strokes_with_config(
    document: &str,
    config: &StrokeConfig,
) -> Result<Vec<Stroke>, ParseError> {
    let path_data = extract(document);
    load_path_data(&path_data, config)
}

/// Load strokes from raw `d` attribute values.
///
/// Fails on the first malformed value; no strokes are returned in that case.
///
/// # Example
///
/// ```rust
/// use kanji_stroke::{load_path_data, StrokeConfig};
///
/// let config = StrokeConfig::new().with_target_size(218.0, 218.0);
/// let strokes = load_path_data(&["M0,0 L0,10"], &config).unwrap();
///
/// assert_eq!(strokes[0].length, 10.0);
/// assert_eq!(strokes[0].path.to_svg_d(), "M0.00 0.00 L0.00 20.00");
/// ```
pub fn load_path_data<S: AsRef<str>>(
    path_data: &[S],
    config: &StrokeConfig,
) -> Result<Vec<Stroke>, ParseError> {
    let transform = config.view_transform();

    let strokes = path_data
        .iter()
        .enumerate()
        .map(|(index, d)| -> Result<Stroke, ParseError> {
            let raw = parse_path(d.as_ref())?;
            let length = raw.length(config.accuracy);
            tracing::debug!(index, length, "loaded stroke");
            Ok(Stroke {
                index,
                path: transform.transform_path(&raw),
                length,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(strokes)
}
