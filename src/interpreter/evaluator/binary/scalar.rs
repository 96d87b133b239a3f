use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::{finite_real, overflow},
            core::{Context, EvalResult},
        },
        value::Number,
    },
};

impl Context {
    /// Evaluates addition, subtraction or multiplication.
    ///
    /// Two integers use checked arithmetic and stay integers. If either
    /// operand is real, both are promoted and the result is real. Any other
    /// operator is routed back through [`Context::eval_binary`].
    ///
    /// # Errors
    /// `Overflow` if an integer result leaves the `i64` range or a real result
    /// is not finite.
    ///
    /// # Example
    /// ```
    /// use safecalc::{Number, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul,
    ///                                      Number::Real(1.5),
    ///                                      Number::Integer(2),
    ///                                      1).unwrap();
    /// assert_eq!(result, Number::Real(3.0));
    ///
    /// assert!(Context::eval_scalar_op(BinaryOperator::Add,
    ///                                 Number::Integer(i64::MAX),
    ///                                 Number::Integer(1),
    ///                                 1).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: Number,
                          right: Number,
                          column: usize)
                          -> EvalResult<Number> {
        use BinaryOperator::{Add, Mul, Sub};

        match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    _ => return Self::eval_binary(op, left, right, column),
                };
                result.map(Number::Integer)
                      .ok_or_else(|| overflow(left, op, right, column))
            },
            _ => {
                let (a, b) = left.promote_to_real(right);
                let result = match op {
                    Add => a + b,
                    Sub => a - b,
                    Mul => a * b,
                    _ => return Self::eval_binary(op, left, right, column),
                };
                finite_real(result, left, op, right, column)
            },
        }
    }
}
