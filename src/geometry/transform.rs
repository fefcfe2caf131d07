//! View transform from source coordinates to a target box.
//!
//! KanjiVG draws every character in a 109x109 box. A consumer showing the
//! character at another size maps that box onto its own with independent
//! x and y scales, stretching to fill:
//!
//! ```text
//! x' = dst.x + (x - src.x) * dst.width  / src.width
//! y' = dst.y + (y - src.y) * dst.height / src.height
//! ```

use crate::geometry::types::{GeometricPath, Point, ViewBox};

/// An axis-aligned scale followed by a translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Map `src` onto `dst`, filling it completely.
    ///
    /// An empty source box has no meaningful mapping and yields the
    /// identity.
    pub fn fill(src: ViewBox, dst: ViewBox) -> Self {
        if src.is_empty() {
            return Self::IDENTITY;
        }

        let scale_x = dst.width / src.width;
        let scale_y = dst.height / src.height;
        Self {
            scale_x,
            scale_y,
            translate_x: dst.x - src.x * scale_x,
            translate_y: dst.y - src.y * scale_y,
        }
    }

    /// Check if this transform leaves every point in place
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn transform_point(&self, point: Point) -> Point {
        Point {
            x: point.x * self.scale_x + self.translate_x,
            y: point.y * self.scale_y + self.translate_y,
        }
    }

    /// Map every coordinate of a path, keeping segment order and kinds
    pub fn transform_path(&self, path: &GeometricPath) -> GeometricPath {
        if self.is_identity() {
            return path.clone();
        }

        let segments = path
            .iter()
            .map(|seg| seg.map_points(|p| self.transform_point(p)))
            .collect();
        GeometricPath::new(segments)
    }
}
