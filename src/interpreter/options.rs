use crate::ast::{BinaryOperator, UnaryOperator};

/// Default limit on expression nesting and tree height.
///
/// Parsing, validation and evaluation are recursive; bounding the tree keeps
/// their stack use bounded on adversarial input.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Highest depth limit any phase accepts; larger limits are lowered to it.
///
/// The parser spends several stack frames per nesting level, so this keeps a
/// maximally nested input within the 2 MiB stack of a spawned thread.
pub const MAX_DEPTH_LIMIT: usize = 256;

/// Lowers `max_depth` to [`MAX_DEPTH_LIMIT`].
///
/// # Example
/// ```
/// use safecalc::interpreter::options::{MAX_DEPTH_LIMIT, capped_depth};
///
/// assert_eq!(capped_depth(10), 10);
/// assert_eq!(capped_depth(usize::MAX), MAX_DEPTH_LIMIT);
/// ```
#[must_use]
pub const fn capped_depth(max_depth: usize) -> usize {
    if max_depth > MAX_DEPTH_LIMIT { MAX_DEPTH_LIMIT } else { max_depth }
}

/// The operators a tree may contain.
///
/// The validator rejects any operator that is not listed here, independently
/// of what the parser is able to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    binary: Vec<BinaryOperator>,
    unary:  Vec<UnaryOperator>,
}

impl AllowList {
    /// An allow-list with every arithmetic operator.
    #[must_use]
    pub fn arithmetic() -> Self {
        Self { binary: BinaryOperator::ALL.to_vec(),
               unary:  UnaryOperator::ALL.to_vec(), }
    }

    /// An allow-list with no operators at all; only bare literals pass.
    #[must_use]
    pub const fn literals_only() -> Self {
        Self { binary: Vec::new(),
               unary:  Vec::new(), }
    }

    /// Returns this allow-list with `op` added.
    #[must_use]
    pub fn with_binary(mut self, op: BinaryOperator) -> Self {
        if !self.binary.contains(&op) {
            self.binary.push(op);
        }
        self
    }

    /// Returns this allow-list with `op` removed.
    ///
    /// # Example
    /// ```
    /// use safecalc::{AllowList, ast::BinaryOperator};
    ///
    /// let allow = AllowList::arithmetic().without_binary(BinaryOperator::Pow);
    /// assert!(!allow.allows_binary(BinaryOperator::Pow));
    /// assert!(allow.allows_binary(BinaryOperator::Add));
    /// ```
    #[must_use]
    pub fn without_binary(mut self, op: BinaryOperator) -> Self {
        self.binary.retain(|allowed| *allowed != op);
        self
    }

    /// Returns this allow-list with `op` added.
    #[must_use]
    pub fn with_unary(mut self, op: UnaryOperator) -> Self {
        if !self.unary.contains(&op) {
            self.unary.push(op);
        }
        self
    }

    /// Returns this allow-list with `op` removed.
    #[must_use]
    pub fn without_unary(mut self, op: UnaryOperator) -> Self {
        self.unary.retain(|allowed| *allowed != op);
        self
    }

    /// Returns `true` if `op` may appear in a tree.
    #[must_use]
    pub fn allows_binary(&self, op: BinaryOperator) -> bool {
        self.binary.contains(&op)
    }

    /// Returns `true` if `op` may appear in a tree.
    #[must_use]
    pub fn allows_unary(&self, op: UnaryOperator) -> bool {
        self.unary.contains(&op)
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::arithmetic()
    }
}

/// Settings for [`crate::evaluate_with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum nesting of groups and signs, and maximum tree height. Capped at
    /// [`MAX_DEPTH_LIMIT`].
    pub max_depth: usize,
    /// Operators the validator lets through.
    pub allow:     AllowList,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH,
               allow:     AllowList::default(), }
    }
}
