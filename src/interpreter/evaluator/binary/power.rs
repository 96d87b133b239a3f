use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::{finite_real, overflow},
            core::{Context, EvalResult},
        },
        value::Number,
    },
    util::num::i64_to_u32_checked,
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// An integer raised to a non-negative integer uses checked arithmetic
    /// and stays an integer; bases `0`, `1` and `-1` are exact for any
    /// exponent. A negative exponent or a real operand yields a real computed
    /// with `powf`.
    ///
    /// # Errors
    /// - `DivisionByZero` when zero is raised to a negative power.
    /// - `ComplexResult` when a negative real is raised to a fractional power.
    /// - `Overflow` when the result leaves the `i64` range or is not finite.
    ///
    /// # Example
    /// ```
    /// use safecalc::{Number, interpreter::evaluator::core::Context};
    ///
    /// let result = Context::eval_pow(Number::Integer(2), Number::Integer(10), 1).unwrap();
    /// assert_eq!(result, Number::Integer(1024));
    ///
    /// let result = Context::eval_pow(Number::Integer(2), Number::Integer(-1), 1).unwrap();
    /// assert_eq!(result, Number::Real(0.5));
    /// ```
    pub fn eval_pow(base: Number, exponent: Number, column: usize) -> EvalResult<Number> {
        let op = BinaryOperator::Pow;

        if let (Number::Integer(b), Number::Integer(e)) = (base, exponent)
           && e >= 0
        {
            return integer_pow(b, e).map(Number::Integer)
                                    .ok_or_else(|| overflow(base, op, exponent, column));
        }

        let (b, e) = base.promote_to_real(exponent);
        if base.is_zero() && e < 0.0 {
            return Err(RuntimeError::DivisionByZero { column });
        }
        if b < 0.0 && e.fract() != 0.0 {
            return Err(RuntimeError::ComplexResult { operation: format!("{base} {op} {exponent}"),
                                                     column });
        }

        finite_real(b.powf(e), base, op, exponent, column)
    }
}

/// Raises `base` to a non-negative `exponent`, returning `None` on overflow.
fn integer_pow(base: i64, exponent: i64) -> Option<i64> {
    match base {
        0 => Some(i64::from(exponent == 0)),
        1 => Some(1),
        -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => base.checked_pow(i64_to_u32_checked(exponent)?),
    }
}
