use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Number,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to a specialized handler: `+`, `-`
    /// and `*` to `eval_scalar_op`, `/`, `//` and `%` to `eval_division`, and
    /// `**` to `eval_pow`. The match is exhaustive, so a new operator cannot
    /// be added without deciding how it evaluates.
    ///
    /// # Example
    /// ```
    /// use safecalc::{Number, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add,
    ///                                   Number::Integer(3),
    ///                                   Number::Integer(4),
    ///                                   1);
    /// assert_eq!(result.unwrap(), Number::Integer(7));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Mod,
    ///                                   Number::Integer(7),
    ///                                   Number::Integer(-2),
    ///                                   1);
    /// assert_eq!(result.unwrap(), Number::Integer(-1));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Number,
                       right: Number,
                       column: usize)
                       -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul => Self::eval_scalar_op(op, left, right, column),
            Div | FloorDiv | Mod => Self::eval_division(op, left, right, column),
            Pow => Self::eval_pow(left, right, column),
        }
    }
}

/// Builds the `Overflow` error for `left op right`.
pub(super) fn overflow(left: Number,
                       op: BinaryOperator,
                       right: Number,
                       column: usize)
                       -> RuntimeError {
    RuntimeError::Overflow { operation: format!("{left} {op} {right}"),
                             column }
}

/// Wraps a real result, rejecting infinities and NaN.
pub(super) fn finite_real(value: f64,
                          left: Number,
                          op: BinaryOperator,
                          right: Number,
                          column: usize)
                          -> EvalResult<Number> {
    if value.is_finite() {
        Ok(Number::Real(value))
    } else {
        Err(overflow(left, op, right, column))
    }
}
