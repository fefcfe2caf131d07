//! Core geometric types produced by the path-data parser

use std::fmt::Write as _;

/// A 2D point in path coordinates (y pointing down, SVG convention)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by another point's coordinates
    pub fn offset(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }

    /// Reflect `other` through this point (`2 * self - other`)
    pub fn reflect(self, other: Point) -> Point {
        Point::new(2.0 * self.x - other.x, 2.0 * self.y - other.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Point::new(p.x, p.y)
    }
}

/// An axis-aligned rectangle, used for viewboxes and view targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// The 109x109 box every KanjiVG character is drawn in
    pub const KANJIVG: ViewBox = ViewBox {
        x: 0.0,
        y: 0.0,
        width: 109.0,
        height: 109.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A box of the given size anchored at the origin
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::KANJIVG
    }
}

/// One drawing instruction with fully resolved, absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Start a new subpath at the point
    MoveTo(Point),
    /// Straight line to the point
    LineTo(Point),
    /// Cubic Bezier curve with two control points
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// Close the current subpath back to its start point.
    ///
    /// Drawing resumes from that start point, as if a move to it followed.
    Close,
}

impl Segment {
    /// Apply a point mapping to every coordinate of the segment
    pub fn map_points(self, mut f: impl FnMut(Point) -> Point) -> Segment {
        match self {
            Segment::MoveTo(p) => Segment::MoveTo(f(p)),
            Segment::LineTo(p) => Segment::LineTo(f(p)),
            Segment::CubicTo { ctrl1, ctrl2, to } => Segment::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            Segment::Close => Segment::Close,
        }
    }
}

/// The geometry of one `d` attribute.
///
/// A non-empty path always starts with [`Segment::MoveTo`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometricPath {
    pub segments: Vec<Segment>,
}

impl GeometricPath {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Serialize back to absolute SVG path data
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();

        for seg in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing into a String cannot fail
            let _ = match seg {
                Segment::MoveTo(p) => write!(d, "M{:.2} {:.2}", p.x, p.y),
                Segment::LineTo(p) => write!(d, "L{:.2} {:.2}", p.x, p.y),
                Segment::CubicTo { ctrl1, ctrl2, to } => write!(
                    d,
                    "C{:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ),
                Segment::Close => write!(d, "Z"),
            };
        }

        d
    }
}

impl<'a> IntoIterator for &'a GeometricPath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_through_point() {
        let current = Point::new(10.0, 10.0);
        assert_eq!(current.reflect(Point::new(10.0, 0.0)), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_empty_path_serializes_to_empty_string() {
        assert_eq!(GeometricPath::default().to_svg_d(), "");
    }

    #[test]
    fn test_to_svg_d() {
        let path = GeometricPath::new(vec![
            Segment::MoveTo(Point::new(5.0, 5.0)),
            Segment::LineTo(Point::new(50.0, 5.0)),
            Segment::CubicTo {
                ctrl1: Point::new(1.0, 2.0),
                ctrl2: Point::new(3.0, 4.0),
                to: Point::new(5.5, 6.25),
            },
            Segment::Close,
        ]);
        insta::assert_snapshot!(
            path.to_svg_d(),
            @"M5.00 5.00 L50.00 5.00 C1.00 2.00 3.00 4.00 5.50 6.25 Z"
        );
    }

    #[test]
    fn test_map_points_keeps_close() {
        let shifted = Segment::Close.map_points(|p| p.offset(Point::new(1.0, 1.0)));
        assert_eq!(shifted, Segment::Close);
    }

    #[test]
    fn test_kanjivg_viewbox_default() {
        let vb = ViewBox::default();
        assert_eq!(vb, ViewBox::sized(109.0, 109.0));
        assert!(!vb.is_empty());
        assert!(ViewBox::sized(0.0, 10.0).is_empty());
    }
}
