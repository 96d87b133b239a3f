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
};

impl Context {
    /// Evaluates true division, floor division or modulo.
    ///
    /// - `/` always yields a real, even for two integers.
    /// - `//` rounds the quotient towards negative infinity; two integers stay
    ///   integers, otherwise the result is a real with an integral value.
    /// - `%` is consistent with `//`: `a == (a // b) * b + a % b`, so a
    ///   non-zero remainder has the sign of the divisor.
    ///
    /// Any other operator is routed back through [`Context::eval_binary`].
    ///
    /// # Errors
    /// - `DivisionByZero` when `right` is an integer zero or a real zero.
    /// - `Overflow` for `i64::MIN // -1` or a non-finite real quotient.
    ///
    /// # Example
    /// ```
    /// use safecalc::{Number, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let div = |op, a: i64, b: i64| {
    ///     Context::eval_division(op, Number::Integer(a), Number::Integer(b), 1).unwrap()
    /// };
    ///
    /// assert_eq!(div(BinaryOperator::Div, 7, 2), Number::Real(3.5));
    /// assert_eq!(div(BinaryOperator::FloorDiv, -7, 2), Number::Integer(-4));
    /// assert_eq!(div(BinaryOperator::Mod, -7, 2), Number::Integer(1));
    /// ```
    pub fn eval_division(op: BinaryOperator,
                         left: Number,
                         right: Number,
                         column: usize)
                         -> EvalResult<Number> {
        use BinaryOperator::{Div, FloorDiv, Mod};

        if right.is_zero() && matches!(op, Div | FloorDiv | Mod) {
            return Err(RuntimeError::DivisionByZero { column });
        }

        match (op, left, right) {
            (Div, ..) => {
                let (a, b) = left.promote_to_real(right);
                finite_real(a / b, left, op, right, column)
            },
            (FloorDiv, Number::Integer(a), Number::Integer(b)) => {
                floor_div(a, b).map(Number::Integer)
                               .ok_or_else(|| overflow(left, op, right, column))
            },
            (Mod, Number::Integer(a), Number::Integer(b)) => Ok(Number::Integer(floor_mod(a, b))),
            (FloorDiv, ..) => {
                let (a, b) = left.promote_to_real(right);
                finite_real(real_div_mod(a, b).0, left, op, right, column)
            },
            (Mod, ..) => {
                let (a, b) = left.promote_to_real(right);
                finite_real(real_div_mod(a, b).1, left, op, right, column)
            },
            _ => Self::eval_binary(op, left, right, column),
        }
    }
}

/// Integer division rounding towards negative infinity.
///
/// `b` must be non-zero. Returns `None` only for `i64::MIN / -1`.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Integer remainder with the sign of the divisor.
///
/// `b` must be non-zero.
fn floor_mod(a: i64, b: i64) -> i64 {
    // `i64::MIN % -1` is the only overflowing case and its remainder is zero.
    let remainder = a.checked_rem(b).unwrap_or(0);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        remainder + b
    } else {
        remainder
    }
}

/// Floor quotient and divisor-signed remainder of two reals.
///
/// `b` must be non-zero. The quotient is computed from the exact remainder
/// rather than as `(a / b).floor()`, which can be off by one when `a / b`
/// rounds up to an integer.
#[allow(clippy::float_cmp)]
fn real_div_mod(a: f64, b: f64) -> (f64, f64) {
    let mut remainder = a % b;
    let mut quotient = (a - remainder) / b;

    if remainder == 0.0 {
        remainder = 0.0_f64.copysign(b);
    } else if (b < 0.0) != (remainder < 0.0) {
        remainder += b;
        quotient -= 1.0;
    }

    let floor_quotient = if quotient == 0.0 {
        0.0_f64.copysign(a / b)
    } else {
        let floored = quotient.floor();
        if quotient - floored > 0.5 { floored + 1.0 } else { floored }
    };

    (floor_quotient, remainder)
}
