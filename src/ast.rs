use std::fmt;

use crate::interpreter::value::Number;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The set of variants is closed: a literal, a prefix sign applied to one
/// operand, or a binary operator applied to two. Every child is owned by
/// exactly one parent, so a tree is always finite and acyclic. Each node
/// records the 1-based column of the token that produced it so runtime errors
/// can point at the offending operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant.
    Literal {
        /// The constant value.
        value:  Number,
        /// Column in the source text.
        column: usize,
    },
    /// A prefix sign (`-x` or `+x`).
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column in the source text.
        column: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column in the source text.
        column: usize,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub fn literal(value: impl Into<Number>, column: usize) -> Self {
        Self::Literal { value: value.into(),
                        column }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self, column: usize) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr),
                        column }
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, column: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         column }
    }

    /// Gets the column number from `self`.
    /// ## Example
    /// ```
    /// use safecalc::ast::Expr;
    ///
    /// let expr = Expr::literal(7, 5);
    ///
    /// assert_eq!(expr.column(), 5);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. }
            | Self::UnaryOp { column, .. }
            | Self::BinaryOp { column, .. } => *column,
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the tree fully parenthesized, e.g. `(2 + (3 * 4))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`), always real
    Div,
    /// Floor division (`//`)
    FloorDiv,
    /// Modulo with the sign of the divisor (`%`)
    Mod,
    /// Right-associative exponentiation (`**`)
    Pow,
}

impl BinaryOperator {
    /// Every binary operator, in precedence order from lowest to highest.
    pub const ALL: [Self; 7] =
        [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::FloorDiv, Self::Mod, Self::Pow];
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Identity (`+x`).
    Identity,
}

impl UnaryOperator {
    /// Every unary operator.
    pub const ALL: [Self; 2] = [Self::Negate, Self::Identity];
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Identity => write!(f, "+"),
        }
    }
}
