//! Error types for path-data parsing

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// What exactly was wrong with a piece of path data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathDataFault {
    #[error("unknown command '{0}'")]
    UnknownCommand(char),

    #[error("expected a number, found '{0}'")]
    InvalidNumber(String),

    #[error("command '{command}' needs {expected} arguments, found {found}")]
    MissingArguments {
        command: char,
        expected: usize,
        found: usize,
    },

    #[error("{0}")]
    Unexpected(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The path data violates the command grammar. Carries the whole input
    /// for diagnostics; no partial path is ever returned alongside it.
    #[error("malformed path data {input:?} at {span:?}: {fault}")]
    MalformedPathData {
        input: String,
        span: Span,
        fault: PathDataFault,
    },
}

impl ParseError {
    pub fn malformed(input: &str, span: Span, fault: PathDataFault) -> Self {
        ParseError::MalformedPathData {
            input: input.to_string(),
            span,
            fault,
        }
    }

    /// Source span of the offending token or command
    pub fn span(&self) -> &Span {
        match self {
            ParseError::MalformedPathData { span, .. } => span,
        }
    }

    /// The complete path data that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ParseError::MalformedPathData { input, .. } => input,
        }
    }

    pub fn fault(&self) -> &PathDataFault {
        match self {
            ParseError::MalformedPathData { fault, .. } => fault,
        }
    }

    pub(crate) fn from_rich(input: &str, err: chumsky::error::Rich<'_, Token>) -> Self {
        let message = match err.found() {
            Some(tok) => format!("unexpected {} before any command", tok),
            None => "unexpected end of input".to_string(),
        };
        Self::malformed(input, err.span().into_range(), PathDataFault::Unexpected(message))
    }

    /// Format the error for stroke `index` of `filename`.
    ///
    /// Line and column refer to the path data, not the document, so the
    /// report is labelled with the stroke.
    pub fn format_stroke(&self, filename: &str, index: usize) -> String {
        self.format(&format!("{} stroke {}", filename, index))
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::MalformedPathData { input, span, fault } => {
                let report = Report::build(ReportKind::Error, filename, span.start)
                    .with_config(Config::default().with_color(false))
                    .with_message("malformed path data")
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(fault.to_string())
                            .with_color(Color::Red),
                    )
                    .finish();

                if report
                    .write((filename, Source::from(input.as_str())), &mut buf)
                    .is_err()
                {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Errors that can occur when loading a stroke configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}
