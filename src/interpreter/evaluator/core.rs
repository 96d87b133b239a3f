use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        options::{DEFAULT_MAX_DEPTH, capped_depth},
        value::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of one evaluation.
///
/// The only state is the current recursion depth, checked against
/// `max_depth` before every node. A `Context` is created per tree and dropped
/// with it; nothing is shared between evaluations.
#[derive(Debug)]
pub struct Context {
    max_depth: usize,
    depth:     usize,
}

impl Context {
    /// Creates a context allowing trees up to `max_depth` nodes deep, capped
    /// at [`MAX_DEPTH_LIMIT`](crate::MAX_DEPTH_LIMIT).
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth: capped_depth(max_depth),
               depth:     0, }
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// Children are evaluated before their parent (post-order). Each call
    /// counts one level of depth.
    ///
    /// # Errors
    /// - `DepthExceeded` if the tree is deeper than the limit.
    /// - Any arithmetic error raised by an operator.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Number> {
        if self.depth >= self.max_depth {
            return Err(RuntimeError::DepthExceeded { max_depth: self.max_depth });
        }

        self.depth += 1;
        let result = self.eval_node(expr);
        self.depth -= 1;

        result
    }

    fn eval_node(&mut self, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::UnaryOp { op, expr, column } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *column)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             column, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *column)
            },
        }
    }
}

/// Evaluates a tree with the default depth limit.
///
/// The tree is evaluated as given; run it through
/// [`crate::interpreter::validator::validate`] first when it does not come
/// straight from the parser.
///
/// # Errors
/// Returns the first `RuntimeError` raised while reducing the tree.
///
/// # Example
/// ```
/// use safecalc::{Number, evaluate_tree, parse};
///
/// let tree = parse("7 // 2").unwrap();
/// assert_eq!(evaluate_tree(&tree).unwrap(), Number::Integer(3));
/// ```
pub fn evaluate_tree(tree: &Expr) -> EvalResult<Number> {
    evaluate_tree_with_limit(tree, DEFAULT_MAX_DEPTH)
}

/// Evaluates a tree, failing with `DepthExceeded` beyond `max_depth` levels.
///
/// # Errors
/// Returns the first `RuntimeError` raised while reducing the tree.
pub fn evaluate_tree_with_limit(tree: &Expr, max_depth: usize) -> EvalResult<Number> {
    Context::new(max_depth).eval(tree)
}
