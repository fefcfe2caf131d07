//! Parser for SVG path data

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::parse_path_data;

use crate::error::ParseError;
use crate::geometry::{resolve, GeometricPath};

/// Parse one `d` attribute into absolute path geometry.
///
/// Any grammar violation fails the whole parse; no partial path is
/// returned.
#[tracing::instrument(level = "debug", skip(input), fields(len = input.len()))]
pub fn parse_path(input: &str) -> Result<GeometricPath, ParseError> {
    let data = parse_path_data(input)?;

    let commands = data
        .commands
        .iter()
        .map(|cmd| {
            PathCommand::from_raw(&cmd.node)
                .map_err(|fault| ParseError::malformed(input, cmd.span.clone(), fault))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let path = resolve(&commands);
    tracing::debug!(segments = path.len(), "resolved path");
    Ok(path)
}
