//! Length measurement along a resolved path.
//!
//! Animation layers pace a stroke by its length and place a marker at a
//! distance along it; both are answered here from the segment list alone.

use kurbo::{CubicBez, Line, ParamCurve, ParamCurveArclen};

use crate::geometry::types::{GeometricPath, Point, Segment};

/// Default arc-length accuracy, in path units
pub const DEFAULT_ACCURACY: f64 = 1e-4;

/// A drawable piece of a path, between two pen positions
#[derive(Debug, Clone, Copy)]
enum Piece {
    Line(Line),
    Cubic(CubicBez),
}

impl Piece {
    fn arclen(&self, accuracy: f64) -> f64 {
        match self {
            Piece::Line(l) => l.arclen(accuracy),
            Piece::Cubic(c) => c.arclen(accuracy),
        }
    }

    fn start(&self) -> Point {
        match self {
            Piece::Line(l) => l.p0.into(),
            Piece::Cubic(c) => c.p0.into(),
        }
    }

    fn end(&self) -> Point {
        match self {
            Piece::Line(l) => l.p1.into(),
            Piece::Cubic(c) => c.p3.into(),
        }
    }

    fn point_at(&self, distance: f64, accuracy: f64) -> Point {
        // Zero-length pieces have no parameterization by length
        if distance <= 0.0 {
            return self.start();
        }
        let p = match self {
            Piece::Line(l) => l.eval(l.inv_arclen(distance, accuracy)),
            Piece::Cubic(c) => c.eval(c.inv_arclen(distance, accuracy)),
        };
        p.into()
    }
}

/// Walk the path, yielding every drawn piece in order.
///
/// A close draws the straight line back to the subpath start.
fn pieces(path: &GeometricPath) -> Vec<Piece> {
    let mut out = Vec::new();
    let mut current = Point::ORIGIN;
    let mut start = Point::ORIGIN;

    for seg in path {
        match *seg {
            Segment::MoveTo(p) => {
                current = p;
                start = p;
            }
            Segment::LineTo(p) => {
                out.push(Piece::Line(Line::new(current, p)));
                current = p;
            }
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                out.push(Piece::Cubic(CubicBez::new(current, ctrl1, ctrl2, to)));
                current = to;
            }
            Segment::Close => {
                if current != start {
                    out.push(Piece::Line(Line::new(current, start)));
                }
                current = start;
            }
        }
    }

    out
}

/// Total drawn length of the path
pub fn length(path: &GeometricPath, accuracy: f64) -> f64 {
    pieces(path).iter().map(|piece| piece.arclen(accuracy)).sum()
}

/// Position at `distance` along the path, clamped to its extent.
///
/// Returns `None` only for a path without segments.
pub fn point_at(path: &GeometricPath, distance: f64, accuracy: f64) -> Option<Point> {
    let first = match path.segments.first()? {
        Segment::MoveTo(p) => *p,
        _ => Point::ORIGIN,
    };

    let mut remaining = distance.max(0.0);
    let mut last = first;

    for piece in pieces(path) {
        let len = piece.arclen(accuracy);
        if remaining <= len {
            return Some(piece.point_at(remaining, accuracy));
        }
        remaining -= len;
        last = piece.end();
    }

    Some(last)
}

impl GeometricPath {
    /// Total drawn length, see [`length`]
    pub fn length(&self, accuracy: f64) -> f64 {
        length(self, accuracy)
    }

    /// Position along the path, see [`point_at`]
    pub fn point_at(&self, distance: f64, accuracy: f64) -> Option<Point> {
        point_at(self, distance, accuracy)
    }
}
