/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// text. Parse errors include characters outside the grammar, misplaced
/// tokens, unbalanced parentheses, oversized literals and nesting beyond the
/// configured limit.
pub mod parse_error;
/// Validation errors.
///
/// Raised when an expression tree contains a node, operator or literal that is
/// not on the allow-list, or is deeper than allowed.
pub mod validation_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero and arithmetic overflow.
pub mod runtime_error;
/// The unified error type returned by the top-level entry points.
pub mod eval_error;

pub use eval_error::{ErrorKind, EvalError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use validation_error::ValidationError;
