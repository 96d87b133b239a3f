use crate::{
    ast::Expr,
    error::ValidationError,
    interpreter::{
        options::{AllowList, DEFAULT_MAX_DEPTH, capped_depth},
        value::Number,
    },
};

/// Checks a tree against the default allow-list and depth limit.
///
/// # Errors
/// See [`validate_with`].
///
/// # Example
/// ```
/// use safecalc::{parse, validate};
///
/// let tree = parse("(1 + 2) ** 3").unwrap();
/// assert!(validate(&tree).is_ok());
/// ```
pub fn validate(tree: &Expr) -> Result<(), ValidationError> {
    validate_with(tree, &AllowList::default(), DEFAULT_MAX_DEPTH)
}

/// Checks every node of `tree` and fails on the first one that is not allowed.
///
/// The walk is total: every node is visited, whatever produced the tree.
/// A node passes when
/// - it is one of the known node kinds,
/// - its operator is on `allow`,
/// - its literal is an integer or a finite real,
/// - its depth (the root is at depth 1) is at most `max_depth`, itself capped
///   at [`MAX_DEPTH_LIMIT`](crate::MAX_DEPTH_LIMIT).
///
/// # Errors
/// - `DisallowedConstruct` naming the first rejected kind.
/// - `TooDeep` once a node lies deeper than `max_depth`.
///
/// # Example
/// ```
/// use safecalc::{
///     AllowList,
///     ast::{BinaryOperator, Expr},
///     error::ValidationError,
///     validate_with,
/// };
///
/// let tree = Expr::binary(Expr::literal(2, 1), BinaryOperator::Pow, Expr::literal(8, 6), 3);
/// let allow = AllowList::arithmetic().without_binary(BinaryOperator::Pow);
///
/// let err = validate_with(&tree, &allow, 10).unwrap_err();
/// assert_eq!(err,
///            ValidationError::DisallowedConstruct { kind:   "binary operator '**'".to_string(),
///                                                   column: 3, });
/// ```
pub fn validate_with(tree: &Expr,
                     allow: &AllowList,
                     max_depth: usize)
                     -> Result<(), ValidationError> {
    let result = check_node(tree, allow, capped_depth(max_depth), 1);
    if let Err(error) = &result {
        tracing::warn!(%error, "validator rejected expression tree");
    }
    result
}

fn check_node(node: &Expr,
              allow: &AllowList,
              max_depth: usize,
              depth: usize)
              -> Result<(), ValidationError> {
    if depth > max_depth {
        return Err(ValidationError::TooDeep { max_depth });
    }

    match node {
        Expr::Literal { value, column } => check_literal(*value, *column),
        Expr::UnaryOp { op, expr, column } => {
            if !allow.allows_unary(*op) {
                return Err(disallowed(format!("unary operator '{op}'"), *column));
            }
            check_node(expr, allow, max_depth, depth + 1)
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         column, } => {
            if !allow.allows_binary(*op) {
                return Err(disallowed(format!("binary operator '{op}'"), *column));
            }
            check_node(left, allow, max_depth, depth + 1)?;
            check_node(right, allow, max_depth, depth + 1)
        },
    }
}

fn check_literal(value: Number, column: usize) -> Result<(), ValidationError> {
    match value {
        Number::Integer(_) => Ok(()),
        Number::Real(r) if r.is_finite() => Ok(()),
        Number::Real(r) => Err(disallowed(format!("non-finite literal {r}"), column)),
    }
}

fn disallowed(kind: String, column: usize) -> ValidationError {
    ValidationError::DisallowedConstruct { kind, column }
}
