//! Resolution of path commands into absolute segments.
//!
//! Parsing is a left fold over the command list. Each step takes the
//! previous [`Cursor`] by value and returns the next one together with the
//! segment it emitted, so every state transition can be checked in
//! isolation.

use crate::geometry::types::{GeometricPath, Point, Segment};
use crate::parser::ast::PathCommand;

/// Drawing state threaded through one parse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    /// Where the pen currently is
    pub current: Point,
    /// Start of the current subpath, the target of a close
    pub subpath_start: Point,
    /// Second control point of the last curve, for smooth reflection
    pub last_control: Point,
    /// Whether the previous command left `last_control` usable
    pub was_curve: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            current: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
            last_control: Point::ORIGIN,
            was_curve: false,
        }
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command, returning the next cursor and the segment to emit
    pub fn step(self, command: &PathCommand) -> (Cursor, Segment) {
        let current = self.current;

        let (next, segment) = match *command {
            PathCommand::MoveTo(pos, p) => {
                let to = pos.resolve(current, p);
                let next = Cursor {
                    current: to,
                    subpath_start: to,
                    ..self
                };
                (next, Segment::MoveTo(to))
            }
            PathCommand::LineTo(pos, p) => {
                let to = pos.resolve(current, p);
                (Cursor { current: to, ..self }, Segment::LineTo(to))
            }
            PathCommand::HorizontalTo(pos, x) => {
                let to = Point::new(pos.resolve_axis(current.x, x), current.y);
                (Cursor { current: to, ..self }, Segment::LineTo(to))
            }
            PathCommand::VerticalTo(pos, y) => {
                let to = Point::new(current.x, pos.resolve_axis(current.y, y));
                (Cursor { current: to, ..self }, Segment::LineTo(to))
            }
            PathCommand::CubicTo(pos, c1, c2, p) => {
                let ctrl1 = pos.resolve(current, c1);
                let ctrl2 = pos.resolve(current, c2);
                let to = pos.resolve(current, p);
                self.curve_to(ctrl1, ctrl2, to)
            }
            PathCommand::SmoothCubicTo(pos, c2, p) => {
                let ctrl1 = if self.was_curve {
                    current.reflect(self.last_control)
                } else {
                    current
                };
                let ctrl2 = pos.resolve(current, c2);
                let to = pos.resolve(current, p);
                self.curve_to(ctrl1, ctrl2, to)
            }
            PathCommand::ClosePath => {
                // Closing also drops any pending reflection base
                let next = Cursor {
                    current: self.subpath_start,
                    last_control: self.subpath_start,
                    ..self
                };
                (next, Segment::Close)
            }
        };

        let next = Cursor {
            was_curve: command.is_curve(),
            ..next
        };
        (next, segment)
    }

    fn curve_to(self, ctrl1: Point, ctrl2: Point, to: Point) -> (Cursor, Segment) {
        let next = Cursor {
            current: to,
            last_control: ctrl2,
            ..self
        };
        (next, Segment::CubicTo { ctrl1, ctrl2, to })
    }
}

/// Resolve interpreted commands into a path.
///
/// A command list that does not open with a move gets a `MoveTo` at the
/// origin, where an unset pen starts.
pub fn resolve(commands: &[PathCommand]) -> GeometricPath {
    let mut segments = Vec::with_capacity(commands.len() + 1);
    if !matches!(commands.first(), None | Some(PathCommand::MoveTo(..))) {
        segments.push(Segment::MoveTo(Point::ORIGIN));
    }

    let (_, segments) = commands
        .iter()
        .fold((Cursor::new(), segments), |(cursor, mut segments), command| {
            let (next, segment) = cursor.step(command);
            segments.push(segment);
            (next, segments)
        });

    GeometricPath::new(segments)
}
