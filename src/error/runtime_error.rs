/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// `/`, `//` or `%` with a zero right operand, or zero raised to a
    /// negative power.
    #[error("Error at column {column}: Division by zero.")]
    DivisionByZero {
        /// The column of the operator.
        column: usize,
    },
    /// An integer result outside the `i64` range, or a non-finite real result.
    #[error("Error at column {column}: Arithmetic overflow while computing {operation}.")]
    Overflow {
        /// The operation as written, e.g. `10 ** 40`.
        operation: String,
        /// The column of the operator.
        column:    usize,
    },
    /// A negative real raised to a fractional power.
    #[error("Error at column {column}: {operation} has no real result.")]
    ComplexResult {
        /// The operation as written.
        operation: String,
        /// The column of the operator.
        column:    usize,
    },
    /// Evaluation recursed deeper than the configured limit.
    #[error("Evaluation exceeded the maximum depth of {max_depth}.")]
    DepthExceeded {
        /// The configured limit.
        max_depth: usize,
    },
}
