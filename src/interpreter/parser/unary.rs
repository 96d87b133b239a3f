use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::{ParseContext, ParseResult, Parsed, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
///
/// Prefix signs are right-associative, so `- -x` is parsed as `-(-x)`. A sign
/// binds looser than `**` on its right, so `-2 ** 2` is `-(2 ** 2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, 's: 'a, I>(tokens: &mut Peekable<I>,
                                         context: &ParseContext,
                                         depth: usize)
                                         -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Lexeme<'s>> + Clone
{
    if let Some(Lexeme { token, column, .. }) = tokens.peek()
       && let Some(op) = token_to_unary_operator(token)
    {
        let column = *column;
        tokens.next();
        context.check_depth(depth + 1, column)?;
        let operand = parse_unary(tokens, context, depth + 1)?;
        return context.unary(op, operand, column);
    }
    parse_power(tokens, context, depth)
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes `**`
/// right-associative (`2 ** 3 ** 2` is `2 ** (3 ** 2)`) and lets a signed
/// exponent through (`2 ** -1`).
///
/// Grammar:
/// ```text
///     power := primary ("**" unary)?
/// ```
fn parse_power<'a, 's: 'a, I>(tokens: &mut Peekable<I>,
                              context: &ParseContext,
                              depth: usize)
                              -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Lexeme<'s>> + Clone
{
    let base = parse_primary(tokens, context, depth)?;

    if let Some(Lexeme { token: Token::DoubleStar, column, .. }) = tokens.peek() {
        let column = *column;
        tokens.next();
        context.check_depth(depth + 1, column)?;
        let exponent = parse_unary(tokens, context, depth + 1)?;
        return context.binary(base, BinaryOperator::Pow, exponent, column);
    }

    Ok(base)
}

/// Parses a primary (atomic) expression: a numeric literal or a
/// parenthesized expression.
///
/// Grammar:
/// ```text
///     primary := INTEGER | REAL | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream is exhausted.
/// - `UnexpectedToken` for an operator or `)` where an operand is expected.
fn parse_primary<'a, 's: 'a, I>(tokens: &mut Peekable<I>,
                                context: &ParseContext,
                                depth: usize)
                                -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Lexeme<'s>> + Clone
{
    let Some(Lexeme { token, column, text }) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { column: context.end_column });
    };

    match token {
        Token::Integer(n) => Ok(Parsed::leaf(Expr::literal(*n, *column))),
        Token::Real(r) => Ok(Parsed::leaf(Expr::literal(*r, *column))),
        Token::LParen => parse_grouping(tokens, context, depth, *column),
        _ => Err(ParseError::UnexpectedToken { token:  (*text).to_string(),
                                               column: *column, }),
    }
}

/// Parses the inside of a parenthesized expression, after the `(`.
///
/// Parentheses only steer precedence; no node is created for them.
///
/// # Errors
/// - `ExpectedClosingParen` if the input ends before the matching `)`.
/// - `UnexpectedToken` if another token stands where `)` is expected.
/// - `NestingTooDeep` if the group exceeds the nesting limit.
fn parse_grouping<'a, 's: 'a, I>(tokens: &mut Peekable<I>,
                                 context: &ParseContext,
                                 depth: usize,
                                 open_column: usize)
                                 -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Lexeme<'s>> + Clone
{
    context.check_depth(depth + 1, open_column)?;
    let inner = parse_expression(tokens, context, depth + 1)?;

    match tokens.next() {
        Some(Lexeme { token: Token::RParen, .. }) => Ok(inner),
        Some(Lexeme { column, text, .. }) => {
            Err(ParseError::UnexpectedToken { token:  (*text).to_string(),
                                              column: *column, })
        },
        None => Err(ParseError::ExpectedClosingParen { column: open_column }),
    }
}

/// Maps a token to the prefix operator it denotes, if any.
const fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Plus => Some(UnaryOperator::Identity),
        _ => None,
    }
}
