//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::{ParseError, PathDataFault};
use crate::parser::ast::*;
use crate::parser::lexer::{self, Token};

/// Split path data into command letters and their argument lists.
///
/// Letters are not interpreted here; an unknown letter is still a well
/// formed command at this stage.
pub fn parse_path_data(input: &str) -> Result<PathData, ParseError> {
    let len = input.len();

    let tokens = lexer::lex(input).map_err(|span| {
        let text = input[span.clone()].to_string();
        ParseError::malformed(input, span, PathDataFault::InvalidNumber(text))
    })?;

    let token_iter = tokens.into_iter().map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    path_data_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| {
            // One grammar error is enough; nothing useful survives the first
            match errs.into_iter().next() {
                Some(err) => ParseError::from_rich(input, err),
                None => ParseError::malformed(
                    input,
                    0..len,
                    PathDataFault::Unexpected("invalid path data".to_string()),
                ),
            }
        })
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn path_data_parser<'a, I>() -> impl Parser<'a, I, PathData, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let letter = select! {
        Token::Command(c) => c,
    };

    let number = select! {
        Token::Number(n) => n,
    };

    // A letter owns every number up to the next letter
    let command = letter
        .then(number.repeated().collect::<Vec<f64>>())
        .map_with(|(letter, args), e| {
            Spanned::new(RawCommand { letter, args }, span_range(&e.span()))
        });

    command
        .repeated()
        .collect()
        .then_ignore(end())
        .map(|commands| PathData { commands })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_command() {
        let data = parse_path_data("M34.25,16.25").expect("Should parse");
        assert_eq!(data.commands.len(), 1);
        assert_eq!(data.commands[0].node.letter, 'M');
        assert_eq!(data.commands[0].node.args, vec![34.25, 16.25]);
        assert_eq!(data.commands[0].span, 0..12);
    }

    #[test]
    fn test_parse_command_sequence() {
        let data = parse_path_data("M34.25,16.25c1,1,1.48,2.38,1.5,4").expect("Should parse");
        let letters: Vec<char> = data.commands.iter().map(|c| c.node.letter).collect();
        assert_eq!(letters, vec!['M', 'c']);
        assert_eq!(data.commands[1].node.args.len(), 6);
    }

    #[test]
    fn test_close_without_arguments() {
        let data = parse_path_data("M5,5 L50,5 Z M1,1").expect("Should parse");
        let letters: Vec<char> = data.commands.iter().map(|c| c.node.letter).collect();
        assert_eq!(letters, vec!['M', 'L', 'Z', 'M']);
        assert!(data.commands[2].node.args.is_empty());
    }

    #[test]
    fn test_unknown_letters_pass_through() {
        let data = parse_path_data("M5,5 Q10,10").expect("Should parse");
        assert_eq!(data.commands[1].node.letter, 'Q');
    }

    #[test]
    fn test_empty_input() {
        let data = parse_path_data("").expect("Should parse");
        assert!(data.commands.is_empty());
        let data = parse_path_data("  \n").expect("Should parse");
        assert!(data.commands.is_empty());
    }

    #[test]
    fn test_number_before_first_command() {
        let err = parse_path_data("5,5 L10,10").unwrap_err();
        match err {
            ParseError::MalformedPathData { span, fault, .. } => {
                assert_eq!(span, 0..1);
                assert!(matches!(fault, PathDataFault::Unexpected(_)));
            }
        }
    }

    #[test]
    fn test_bad_character_reports_invalid_number() {
        let err = parse_path_data("M5,5 L1,#2").unwrap_err();
        match err {
            ParseError::MalformedPathData { input, span, fault } => {
                assert_eq!(input, "M5,5 L1,#2");
                assert_eq!(span, 8..9);
                assert_eq!(fault, PathDataFault::InvalidNumber("#".to_string()));
            }
        }
    }

    #[test]
    fn test_stray_letters_are_commands() {
        // `x` is a letter, so the grammar accepts it; interpretation rejects it later
        let data = parse_path_data("M5,5 L1,x2").expect("Should parse");
        assert_eq!(data.commands[2].node.letter, 'x');
    }
}
