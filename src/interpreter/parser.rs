/// Binary operator parsing.
///
/// Handles the left-associative additive and multiplicative levels of the
/// precedence hierarchy and maps tokens to binary operators.
pub mod binary;

/// Parsing of prefix signs, exponentiation, literals and groups.
pub mod unary;

/// Entry points, nesting limits and the parse result type.
pub mod core;
