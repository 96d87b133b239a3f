use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Number,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation, keeping the integer/real kind. Negating
    ///   `i64::MIN` overflows.
    /// - `Identity`: returns the value unchanged.
    ///
    /// # Example
    /// ```
    /// use safecalc::{Number, ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, Number::Integer(5), 1).unwrap();
    /// assert_eq!(v, Number::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Identity, Number::Real(2.5), 1).unwrap();
    /// assert_eq!(v, Number::Real(2.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Number, column: usize) -> EvalResult<Number> {
        match op {
            UnaryOperator::Identity => Ok(value),
            UnaryOperator::Negate => match value {
                Number::Integer(n) => {
                    n.checked_neg()
                     .map(Number::Integer)
                     .ok_or_else(|| RuntimeError::Overflow { operation: format!("-({n})"),
                                                             column })
                },
                Number::Real(r) => Ok(Number::Real(-r)),
            },
        }
    }
}
