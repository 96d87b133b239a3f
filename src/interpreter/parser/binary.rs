use std::iter::Peekable;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseContext, ParseResult, Parsed},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `context`: Nesting limit and end-of-input column.
/// - `depth`: Current nesting of groups and signs.
///
/// # Returns
/// A left-leaning `Expr::BinaryOp` tree, or the single operand.
pub(crate) fn parse_additive<'a, 's: 'a, I>(tokens: &mut Peekable<I>,
                                            context: &ParseContext,
                                            depth: usize)
                                            -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Lexeme<'s>> + Clone
{
    let mut left = parse_multiplicative(tokens, context, depth)?;
    loop {
        if let Some(Lexeme { token, column, .. }) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let column = *column;
            tokens.next();
            let right = parse_multiplicative(tokens, context, depth)?;
            left = context.binary(left, op, right, column)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `//` and `%`. Operands are
/// unary expressions, so `2 * -3` is accepted.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
pub(crate) fn parse_multiplicative<'a, 's: 'a, I>(tokens: &mut Peekable<I>,
                                                  context: &ParseContext,
                                                  depth: usize)
                                                  -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Lexeme<'s>> + Clone
{
    let mut left = parse_unary(tokens, context, depth)?;
    loop {
        if let Some(Lexeme { token, column, .. }) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::FloorDiv
                       | BinaryOperator::Mod)
        {
            let column = *column;
            tokens.next();
            let right = parse_unary(tokens, context, depth)?;
            left = context.binary(left, op, right, column)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for literals and parentheses.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::Real(_) | Token::Integer(_) | Token::LParen | Token::RParen => None,
    }
}
