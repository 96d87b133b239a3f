use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Anything not listed here (letters, quotes, commas, brackets, ...) fails to
/// lex and is reported as an unexpected character.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5`, `2.`, `2.0` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// A token with the column where it starts and the text it was lexed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'s> {
    /// The token itself.
    pub token:  Token,
    /// 1-based character column.
    pub column: usize,
    /// The source text, quoted as written in error messages.
    pub text:   &'s str,
}

/// Splits `source` into tokens tagged with their column and text.
///
/// # Errors
/// - `UnexpectedCharacter` for any character outside the grammar.
/// - `LiteralTooLarge` for an integer beyond `i64` or a real that overflows
///   to infinity.
/// - `LeadingZeros` for an integer such as `007`. A run of zeros alone is
///   accepted.
///
/// # Example
/// ```
/// use safecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** -1.0").unwrap();
/// let summary: Vec<_> = tokens.iter().map(|l| (l.column, l.text)).collect();
/// assert_eq!(summary, vec![(1, "2"), (3, "**"), (6, "-"), (7, "1.0")]);
/// assert_eq!(tokens[3].token, Token::Real(1.0));
///
/// assert!(tokenize("abs(1)").is_err());
/// assert!(tokenize("007").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Lexeme<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = column_at(source, lexer.span().start);
        let text = lexer.slice();
        match token {
            Ok(Token::Integer(_)) if has_leading_zeros(text) => {
                return Err(ParseError::LeadingZeros { literal: text.to_string(),
                                                      column });
            },
            Ok(token) => tokens.push(Lexeme { token, column, text }),
            Err(()) => return Err(lex_error(text, column)),
        }
    }

    Ok(tokens)
}

/// An integer literal may only start with `0` if it is all zeros.
fn has_leading_zeros(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0') && digits.bytes().any(|b| b != b'0')
}

/// Converts a byte offset into a 1-based character column.
fn column_at(source: &str, offset: usize) -> usize {
    source.get(..offset)
          .map_or(offset, |prefix| prefix.chars().count())
    + 1
}

/// Classifies a slice the lexer could not turn into a token.
///
/// A slice that reads as a number only fails because its value is out of
/// range; anything else points at the first character that cannot start or
/// continue a numeric literal.
fn lex_error(slice: &str, column: usize) -> ParseError {
    let out_of_range = !slice.is_empty()
                       && (slice.bytes().all(|b| b.is_ascii_digit())
                           || slice.parse::<f64>().is_ok_and(f64::is_infinite));
    if out_of_range {
        return ParseError::LiteralTooLarge { literal: slice.to_string(),
                                             column };
    }

    let (offset, character) = slice.chars()
                                   .enumerate()
                                   .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
                                   .or_else(|| slice.chars().next().map(|c| (0, c)))
                                   .unwrap_or((0, '\0'));

    ParseError::UnexpectedCharacter { character,
                                      column: column + offset }
}

/// Parses a real literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if it is finite.
/// - `None`: If the slice overflows to infinity.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits.
/// - `None`: If the literal exceeds `i64::MAX`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
