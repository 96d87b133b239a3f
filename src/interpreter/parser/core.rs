use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token, tokenize},
        options::{DEFAULT_MAX_DEPTH, capped_depth},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed subtree together with its height (a literal has height 1).
#[derive(Debug)]
pub(crate) struct Parsed {
    pub(crate) expr:   Expr,
    pub(crate) height: usize,
}

impl Parsed {
    pub(crate) fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }
}

/// Limits and positions shared by every parsing function.
pub(crate) struct ParseContext {
    /// Maximum nesting of groups and signs, and maximum tree height.
    pub(crate) max_depth:  usize,
    /// Column reported when the input ends early.
    pub(crate) end_column: usize,
}

impl ParseContext {
    /// Fails once `depth` exceeds the nesting limit.
    pub(crate) fn check_depth(&self, depth: usize, column: usize) -> ParseResult<()> {
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep { max_depth: self.max_depth,
                                                    column });
        }
        Ok(())
    }

    /// Wraps `operand` in a unary node.
    pub(crate) fn unary(&self,
                        op: UnaryOperator,
                        operand: Parsed,
                        column: usize)
                        -> ParseResult<Parsed> {
        let height = operand.height + 1;
        self.check_depth(height, column)?;
        Ok(Parsed { expr: Expr::unary(op, operand.expr, column),
                    height })
    }

    /// Joins two operands with a binary node.
    pub(crate) fn binary(&self,
                         left: Parsed,
                         op: BinaryOperator,
                         right: Parsed,
                         column: usize)
                         -> ParseResult<Parsed> {
        let height = left.height.max(right.height) + 1;
        self.check_depth(height, column)?;
        Ok(Parsed { expr: Expr::binary(left.expr, op, right.expr, column),
                    height })
    }
}

/// Parses `source` into an expression tree with the default nesting limit.
///
/// # Errors
/// Returns a `ParseError` for any input that is not a complete arithmetic
/// expression.
///
/// # Example
/// ```
/// use safecalc::parse;
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// let tree = parse("-2 ** 2").unwrap();
/// assert_eq!(tree.to_string(), "(-(2 ** 2))");
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    parse_with_limit(source, DEFAULT_MAX_DEPTH)
}

/// Parses `source` into an expression tree.
///
/// `max_depth` bounds both the nesting of parentheses and prefix signs, and
/// the height of the resulting tree, so the parser, validator and evaluator
/// all recurse a bounded number of times.
///
/// Grammar:
/// ```text
///     expression := additive
/// ```
///
/// # Errors
/// - `EmptyExpression` for empty or whitespace-only input.
/// - `UnmatchedClosingParen` for a stray `)`.
/// - `UnexpectedTrailingTokens` when tokens remain after a full expression.
/// - `NestingTooDeep` when `max_depth` is exceeded. A limit above
///   [`MAX_DEPTH_LIMIT`](crate::MAX_DEPTH_LIMIT) is lowered to it.
/// - Any lexer or sub-expression error.
pub fn parse_with_limit(source: &str, max_depth: usize) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let context = ParseContext { max_depth: capped_depth(max_depth),
                                 end_column: source.chars().count() + 1 };
    let mut iter = tokens.iter().peekable();
    let parsed = parse_expression(&mut iter, &context, 0)?;

    match iter.next() {
        None => Ok(parsed.expr),
        Some(Lexeme { token: Token::RParen,
                      column,
                      .. }) => Err(ParseError::UnmatchedClosingParen { column: *column }),
        Some(Lexeme { column, text, .. }) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  (*text).to_string(),
                                                       column: *column, })
        },
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing and for the inside of a
/// parenthesized group. It begins at the lowest-precedence level, addition,
/// and recursively descends through the precedence hierarchy.
pub(crate) fn parse_expression<'a, 's: 'a, I>(tokens: &mut Peekable<I>,
                                              context: &ParseContext,
                                              depth: usize)
                                              -> ParseResult<Parsed>
    where I: Iterator<Item = &'a Lexeme<'s>> + Clone
{
    parse_additive(tokens, context, depth)
}
