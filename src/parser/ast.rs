//! Syntax tree for SVG path data

use crate::error::PathDataFault;
use crate::geometry::Point;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A command letter with the numbers that followed it, before any
/// interpretation of the letter
#[derive(Debug, Clone, PartialEq)]
pub struct RawCommand {
    pub letter: char,
    pub args: Vec<f64>,
}

/// Tokenized path data: one entry per command letter, in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    pub commands: Vec<Spanned<RawCommand>>,
}

/// Whether a command's coordinates are absolute or offsets from the
/// current point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

impl Position {
    fn of(letter: char) -> Self {
        if letter.is_ascii_uppercase() {
            Position::Absolute
        } else {
            Position::Relative
        }
    }

    /// Resolve a point against the current point
    pub fn resolve(self, current: Point, p: Point) -> Point {
        match self {
            Position::Absolute => p,
            Position::Relative => current.offset(p),
        }
    }

    /// Resolve a single axis value against the current value on that axis
    pub fn resolve_axis(self, current: f64, v: f64) -> f64 {
        match self {
            Position::Absolute => v,
            Position::Relative => current + v,
        }
    }
}

/// The supported subset of the SVG path grammar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M`/`m x,y`
    MoveTo(Position, Point),
    /// `L`/`l x,y`
    LineTo(Position, Point),
    /// `H`/`h x`
    HorizontalTo(Position, f64),
    /// `V`/`v y`
    VerticalTo(Position, f64),
    /// `C`/`c x1,y1 x2,y2 x,y`
    CubicTo(Position, Point, Point, Point),
    /// `S`/`s x2,y2 x,y`; the first control point is reflected
    SmoothCubicTo(Position, Point, Point),
    /// `Z`/`z`
    ClosePath,
}

impl PathCommand {
    /// Number of arguments consumed by a command letter, or `None` if the
    /// letter is not part of the grammar
    pub fn arity(letter: char) -> Option<usize> {
        match letter.to_ascii_lowercase() {
            'm' | 'l' => Some(2),
            'h' | 'v' => Some(1),
            'c' => Some(6),
            's' => Some(4),
            'z' => Some(0),
            _ => None,
        }
    }

    /// Interpret a raw command.
    ///
    /// Exactly one argument group is consumed per letter; numbers beyond
    /// it are ignored rather than read as repeated groups.
    pub fn from_raw(raw: &RawCommand) -> Result<Self, PathDataFault> {
        let letter = raw.letter;
        let expected = Self::arity(letter).ok_or(PathDataFault::UnknownCommand(letter))?;
        let a = &raw.args;

        if a.len() < expected {
            return Err(PathDataFault::MissingArguments {
                command: letter,
                expected,
                found: a.len(),
            });
        }
        if a.len() > expected {
            tracing::warn!(
                command = %letter,
                expected,
                found = a.len(),
                "ignoring extra path arguments"
            );
        }

        let pos = Position::of(letter);
        let pt = |i: usize| Point::new(a[i], a[i + 1]);

        Ok(match letter.to_ascii_lowercase() {
            'm' => PathCommand::MoveTo(pos, pt(0)),
            'l' => PathCommand::LineTo(pos, pt(0)),
            'h' => PathCommand::HorizontalTo(pos, a[0]),
            'v' => PathCommand::VerticalTo(pos, a[0]),
            'c' => PathCommand::CubicTo(pos, pt(0), pt(2), pt(4)),
            's' => PathCommand::SmoothCubicTo(pos, pt(0), pt(2)),
            _ => PathCommand::ClosePath,
        })
    }

    /// Whether this command leaves a control point a following smooth
    /// curve may reflect
    pub fn is_curve(&self) -> bool {
        matches!(
            self,
            PathCommand::CubicTo(..) | PathCommand::SmoothCubicTo(..) | PathCommand::ClosePath
        )
    }
}
