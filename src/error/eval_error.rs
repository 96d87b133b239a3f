use crate::error::{ParseError, RuntimeError, ValidationError};

/// The error returned by [`crate::evaluate`].
///
/// Wraps the error of whichever phase rejected the input. The message of the
/// inner error is shown unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The source is not a well-formed arithmetic expression.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// The tree contains a construct outside the allow-list.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The tree is well-formed but cannot be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Coarse classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input.
    Syntax,
    /// The validator rejected a node, operator or literal.
    DisallowedConstruct,
    /// Division, floor division or modulo by zero.
    DivisionByZero,
    /// A result outside the representable range.
    ArithmeticOverflow,
    /// A result that is not a real number.
    Domain,
    /// A nesting or depth limit was hit.
    ResourceLimit,
}

impl EvalError {
    /// Returns the classification of this error.
    ///
    /// # Example
    /// ```
    /// use safecalc::{ErrorKind, evaluate};
    ///
    /// let err = evaluate("10 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    ///
    /// let err = evaluate("__import__('os')").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(ParseError::NestingTooDeep { .. })
            | Self::Validation(ValidationError::TooDeep { .. })
            | Self::Runtime(RuntimeError::DepthExceeded { .. }) => ErrorKind::ResourceLimit,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Validation(ValidationError::DisallowedConstruct { .. }) => {
                ErrorKind::DisallowedConstruct
            },
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorKind::ArithmeticOverflow,
            Self::Runtime(RuntimeError::ComplexResult { .. }) => ErrorKind::Domain,
        }
    }
}
