//! # safecalc
//!
//! safecalc is a sandboxed arithmetic expression evaluator written in Rust.
//! It parses numeric literals, `+ - * / // % **`, prefix signs and
//! parentheses into a tree, checks the tree against an allow-list, and
//! reduces it to an exact integer or a real. Nothing else is accepted: there
//! are no names, calls, attributes or strings for an input to reach.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an arithmetic expression as a tree. The tree is built by the parser,
/// checked by the validator and reduced by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of node kinds and operators.
/// - Attaches source columns to nodes for error reporting.
/// - Renders trees back to a fully parenthesized form.
pub mod ast;
/// Provides unified error types for parsing, validation and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Attaches columns and readable messages.
/// - Unifies them under `EvalError` for the top-level entry points.
pub mod error;
/// Orchestrates lexing, parsing, validation and evaluation.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

pub use crate::{
    error::{ErrorKind, EvalError},
    interpreter::{
        evaluator::core::{evaluate_tree, evaluate_tree_with_limit},
        options::{AllowList, DEFAULT_MAX_DEPTH, EvalOptions, MAX_DEPTH_LIMIT},
        parser::core::{parse, parse_with_limit},
        validator::{validate, validate_with},
        value::Number,
    },
};

/// Evaluates an arithmetic expression with the default options.
///
/// # Errors
/// Returns an error if the source is malformed, contains a disallowed
/// construct, or cannot be evaluated (division by zero, overflow, ...).
///
/// # Examples
/// ```
/// use safecalc::{ErrorKind, Number, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * (4 - 1)").unwrap(), Number::Integer(11));
/// assert_eq!(evaluate("2 ** 3 ** 2").unwrap(), Number::Integer(512));
/// assert_eq!(evaluate("1 / 4").unwrap(), Number::Real(0.25));
///
/// let err = evaluate("10 / 0").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate(source: &str) -> Result<Number, EvalError> {
    evaluate_with_options(source, &EvalOptions::default())
}

/// Evaluates an arithmetic expression.
///
/// The source is parsed, the whole tree is validated against
/// `options.allow`, and only then is it evaluated. `options.max_depth`
/// bounds every phase; values above [`MAX_DEPTH_LIMIT`] are lowered to it so
/// the call stays within a spawned thread's stack.
///
/// # Errors
/// Returns an error if any phase rejects the input.
///
/// # Examples
/// ```
/// use safecalc::{AllowList, ErrorKind, EvalOptions, ast::BinaryOperator, evaluate_with_options};
///
/// let options = EvalOptions { allow: AllowList::arithmetic().without_binary(BinaryOperator::Pow),
///                             ..EvalOptions::default() };
///
/// let err = evaluate_with_options("2 ** 8", &options).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DisallowedConstruct);
/// assert!(evaluate_with_options("2 * 8", &options).is_ok());
/// ```
pub fn evaluate_with_options(source: &str, options: &EvalOptions) -> Result<Number, EvalError> {
    let tree = parse_with_limit(source, options.max_depth)?;
    tracing::trace!(%tree, "parsed expression");

    validate_with(&tree, &options.allow, options.max_depth)?;

    let value = evaluate_tree_with_limit(&tree, options.max_depth)?;
    tracing::debug!(source, %value, "evaluated expression");

    Ok(value)
}
