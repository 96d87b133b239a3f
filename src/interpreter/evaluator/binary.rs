/// Binary operator dispatch and shared error helpers.
pub mod core;

/// Addition, subtraction and multiplication.
pub mod scalar;

/// True division, floor division and modulo.
///
/// Includes the zero-divisor check and the floor-consistent rounding rules.
pub mod division;

/// Exponentiation.
pub mod power;
