/// Numeric values.
///
/// Defines the `Number` type produced by evaluation: an exact integer or a
/// finite real. Includes display formatting, answer parsing and the
/// tolerance-based comparison used when checking a typed answer against a
/// computed result.
pub mod number;

pub use number::Number;
