/// Represents all errors that can occur during lexing or parsing.
///
/// Columns are 1-based and count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that is not part of the arithmetic grammar.
    #[error("Error at column {column}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The column where it appears.
        column:    usize,
    },
    /// A valid token in a position where the grammar does not allow it.
    #[error("Error at column {column}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the token starts.
        column: usize,
    },
    /// The input ended while an operand was still expected.
    #[error("Error at column {column}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// One past the last column of the input.
        column: usize,
    },
    /// A `(` was never closed.
    #[error("Error at column {column}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The column of the unmatched `(`.
        column: usize,
    },
    /// A `)` without a matching `(`.
    #[error("Error at column {column}: Closing parenthesis ')' has no matching '('.")]
    UnmatchedClosingParen {
        /// The column of the stray `)`.
        column: usize,
    },
    /// Tokens remain after a complete expression.
    #[error("Error at column {column}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// The column where it starts.
        column: usize,
    },
    /// The input is empty or whitespace only.
    #[error("Empty expression.")]
    EmptyExpression,
    /// A numeric literal that does not fit an `i64` or a finite `f64`.
    #[error("Error at column {column}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The column where it starts.
        column:  usize,
    },
    /// A multi-digit integer literal starting with `0`, such as `007`.
    #[error("Error at column {column}: Leading zeros in integer literal {literal} are not permitted.")]
    LeadingZeros {
        /// The literal as written.
        literal: String,
        /// The column where it starts.
        column:  usize,
    },
    /// Parentheses, signs or operator chains exceed the nesting limit.
    #[error("Error at column {column}: Expression is nested deeper than the limit of {max_depth}.")]
    NestingTooDeep {
        /// The configured limit.
        max_depth: usize,
        /// The column where the limit was crossed.
        column:    usize,
    },
    /// A typed answer that is not a number.
    #[error("'{text}' is not a number.")]
    InvalidNumber {
        /// The rejected text.
        text: String,
    },
}
