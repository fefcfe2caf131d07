//! Lexer for SVG path data using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Whitespace and commas only separate tokens; numbers may also touch
/// each other directly (`59.38-11`, `1.5.5`).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r,]+")]
pub enum Token {
    // Any letter, known to the grammar or not
    #[regex(r"[a-zA-Z]", |lex| lex.slice().chars().next())]
    Command(char),

    // Digit runs too long for f64 overflow to infinity and are rejected
    #[regex(r"-?([0-9]+\.?[0-9]*|\.[0-9]+)", |lex| {
        lex.slice().parse::<f64>().ok().filter(|n| n.is_finite())
    })]
    Number(f64),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Command(c) => write!(f, "command '{}'", c),
            Token::Number(n) => write!(f, "number {}", n),
        }
    }
}

/// Lex input string into tokens with spans.
///
/// Stops at the first character that cannot start a token and returns its
/// span as the error.
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, Span> {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(t) => Ok((t, span)),
            Err(()) => Err(span),
        })
        .collect()
}
