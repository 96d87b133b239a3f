/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: addition, subtraction,
/// multiplication, true and floor division, modulo and exponentiation, with
/// integer/real promotion and overflow checks.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric negation and identity.
pub mod unary;

/// Core evaluation logic and depth tracking.
///
/// Contains the recursive evaluation engine, the per-evaluation context and
/// the public entry points.
pub mod core;
