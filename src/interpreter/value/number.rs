use std::{fmt, str::FromStr};

use crate::{error::ParseError, util::num::is_close};

/// Relative and absolute tolerance used when comparing against a
/// floating-point result.
pub const ANSWER_TOLERANCE: f64 = 1e-9;

/// A numeric value produced by evaluation.
///
/// Integers stay exact until an operator that yields a real is applied (true
/// division, a real operand, a negative exponent). The distinction matters for
/// display and for [`Number::approx_eq`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact 64-bit signed integer.
    Integer(i64),
    /// A finite 64-bit floating-point value.
    Real(f64),
}

impl Number {
    /// Returns `true` for [`Number::Integer`].
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns the value as an `f64`.
    ///
    /// Integers beyond `2^53` are rounded to the nearest representable real.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => crate::util::num::i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` if the value is an integer zero or a real zero of either
    /// sign.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Promotes both operands to reals.
    #[must_use]
    pub fn promote_to_real(self, other: Self) -> (f64, f64) {
        (self.as_f64(), other.as_f64())
    }

    /// Compares two numbers the way a quiz checks an answer.
    ///
    /// Two integers must be exactly equal. Anything involving a real is
    /// compared with [`ANSWER_TOLERANCE`] as both the relative and the
    /// absolute tolerance.
    ///
    /// # Example
    /// ```
    /// use safecalc::Number;
    ///
    /// assert!(Number::Integer(3).approx_eq(Number::Integer(3)));
    /// assert!(!Number::Integer(3).approx_eq(Number::Integer(4)));
    /// assert!(Number::Real(0.1 + 0.2).approx_eq(Number::Real(0.3)));
    /// assert!(Number::Integer(2).approx_eq(Number::Real(2.0)));
    /// ```
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            _ => {
                let (a, b) = self.promote_to_real(other);
                is_close(a, b, ANSWER_TOLERANCE, ANSWER_TOLERANCE)
            },
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl fmt::Display for Number {
    /// Integers print without a decimal point; reals always carry one or an
    /// exponent (`4.0`, `0.5`, `1e20`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}

impl FromStr for Number {
    type Err = ParseError;

    /// Parses a typed answer.
    ///
    /// Text containing `.`, `e` or `E` is read as a real. Anything else is
    /// read as an integer, falling back to a real when it does not fit.
    /// Non-finite values are rejected.
    ///
    /// # Example
    /// ```
    /// use safecalc::Number;
    ///
    /// assert_eq!(" 42 ".parse::<Number>().unwrap(), Number::Integer(42));
    /// assert_eq!("2.5".parse::<Number>().unwrap(), Number::Real(2.5));
    /// assert_eq!("1e3".parse::<Number>().unwrap(), Number::Real(1000.0));
    /// assert!("inf".parse::<Number>().is_err());
    /// assert!("four".parse::<Number>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ParseError::InvalidNumber { text: text.to_string() };

        if text.contains(['.', 'e', 'E']) {
            return parse_finite_real(text).ok_or_else(invalid);
        }

        text.parse::<i64>()
            .map(Self::Integer)
            .or_else(|_| parse_finite_real(text).ok_or_else(invalid))
    }
}

fn parse_finite_real(text: &str) -> Option<Number> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Number::Real)
}
